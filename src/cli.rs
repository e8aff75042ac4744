use clap::{ArgAction, Parser, Subcommand};
use pyenv_inspector::application::dto::ExportFormat;
use std::path::PathBuf;

/// Inspect a Python environment: interpreter info, installed packages and dependency trees
#[derive(Parser, Debug)]
#[command(name = "pyenv-inspector")]
#[command(version)]
#[command(
    about = "Inspect a Python environment: interpreter info, installed packages and dependency trees",
    long_about = "Inspect a Python environment: interpreter info, installed packages and dependency trees.\n\n\
                  Without a subcommand, prints the environment info, the package list and the dependency tree."
)]
pub struct Args {
    /// Python interpreter to inspect (defaults to python3, or the config file value)
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Config file path (defaults to ./pyenv-inspector.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Timeout for each pip query, in seconds
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable coloured tree output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show interpreter and virtual environment details
    Info {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List installed packages
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the dependency tree of installed packages
    Tree {
        /// Print JSON instead of an indented tree
        #[arg(long)]
        json: bool,

        /// Give every package its own root, even if it is shown as a dependency
        #[arg(long)]
        all_roots: bool,
    },
    /// Find installed packages whose name contains QUERY (case-insensitive)
    Search {
        query: String,
    },
    /// Export the package list to a file
    Export {
        /// Export format: json or requirements
        #[arg(short, long)]
        format: ExportFormat,

        /// Output file path
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("pyenv-inspector").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_subcommand() {
        let args = parse(&[]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.verbose, 0);
        assert!(!args.no_color);
    }

    #[test]
    fn test_tree_flags() {
        let args = parse(&["tree", "--json", "--all-roots"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Tree {
                json: true,
                all_roots: true
            })
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&["list", "--python", "/opt/py/bin/python", "-vv", "--timeout", "5"]).unwrap();
        assert_eq!(args.python, Some(PathBuf::from("/opt/py/bin/python")));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.command, Some(Command::List { json: false }));
    }

    #[test]
    fn test_export_arguments() {
        let args = parse(&["export", "--format", "Requirements", "--output", "reqs.txt"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Export {
                format: ExportFormat::Requirements,
                output: PathBuf::from("reqs.txt")
            })
        );
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        let err = parse(&["export", "--format", "yaml", "--output", "out"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_export_requires_output() {
        assert!(parse(&["export", "--format", "json"]).is_err());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(parse(&["search"]).is_err());
        let args = parse(&["search", "req"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Search {
                query: "req".to_string()
            })
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse(&["--timeout", "0", "list"]).is_err());
    }
}
