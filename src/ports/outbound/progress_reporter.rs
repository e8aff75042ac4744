/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so status messages never mix with the command's stdout output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Marks the start of a blocking task (e.g., a pip query)
    fn begin_task(&self, message: &str);

    /// Marks the end of the task started by `begin_task`
    fn end_task(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);
}
