use crate::shared::error::InspectorError;
use crate::shared::security::{validate_output_size, MAX_COLLABORATOR_OUTPUT};
use crate::shared::Result;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Stderr kept for error messages; the rest is drained and discarded
const MAX_STDERR_CAPTURE: usize = 64 * 1024;

/// Runs a collaborator process to completion with a timeout
///
/// Each call drives a private current-thread runtime, so callers stay
/// synchronous. The child is killed if the timeout elapses.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Runs `program args...` and returns its stdout
    ///
    /// At most `MAX_COLLABORATOR_OUTPUT` bytes of stdout are held in memory;
    /// anything past that is read and dropped, then reported as oversized.
    ///
    /// # Arguments
    /// * `label` - Name of the query, used in error messages (e.g. "pip list")
    ///
    /// # Errors
    /// Returns `CollaboratorUnavailable` if the process cannot be spawned,
    /// times out, exits unsuccessfully, or writes oversized or non-UTF-8 output
    pub fn run(&self, program: &Path, args: &[&str], label: &str) -> Result<String> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| InspectorError::collaborator(label, format!("Failed to start runtime: {}", e)))?;

        runtime.block_on(self.run_async(program, args, label))
    }

    async fn run_async(&self, program: &Path, args: &[&str], label: &str) -> Result<String> {
        tracing::debug!(program = %program.display(), ?args, "running {}", label);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .env("PYTHONIOENCODING", "utf-8")
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                InspectorError::collaborator(label, format!("Failed to run {}: {}", program.display(), e))
            })?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let collect = async {
            let (stdout, stderr) = tokio::try_join!(
                read_capped(stdout_pipe, MAX_COLLABORATOR_OUTPUT),
                read_capped(stderr_pipe, MAX_STDERR_CAPTURE),
            )?;
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, stdout, stderr))
        };

        let (status, (stdout, stdout_len), (stderr, _)) =
            match tokio::time::timeout(self.timeout, collect).await {
                Ok(Ok(collected)) => collected,
                Ok(Err(e)) => {
                    return Err(InspectorError::collaborator(
                        label,
                        format!("Failed to read output of {}: {}", program.display(), e),
                    )
                    .into())
                }
                Err(_) => {
                    return Err(InspectorError::collaborator(
                        label,
                        format!("Timed out after {} second(s)", self.timeout.as_secs()),
                    )
                    .into())
                }
            };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            let stderr = stderr.trim();
            return Err(InspectorError::collaborator(
                label,
                if stderr.is_empty() {
                    format!("Process exited with {}", status)
                } else {
                    format!("Process exited with {}: {}", status, stderr)
                },
            )
            .into());
        }

        validate_output_size(stdout_len, label, MAX_COLLABORATOR_OUTPUT)
            .map_err(|e| InspectorError::collaborator(label, e.to_string()))?;

        String::from_utf8(stdout).map_err(|e| {
            InspectorError::collaborator(label, format!("Output is not valid UTF-8: {}", e)).into()
        })
    }
}

/// Reads `reader` to the end, keeping at most `cap` bytes
///
/// Returns the kept bytes and the total number of bytes read. The pipe is
/// drained past the cap so the child never blocks on a full pipe.
async fn read_capped<R>(reader: Option<R>, cap: usize) -> std::io::Result<(Vec<u8>, usize)>
where
    R: AsyncRead + Unpin,
{
    let mut kept = Vec::new();
    let mut total = 0;
    let Some(mut reader) = reader else {
        return Ok((kept, total));
    };

    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        total += n;
        let room = cap.saturating_sub(kept.len());
        kept.extend_from_slice(&buf[..n.min(room)]);
    }
    Ok((kept, total))
}
