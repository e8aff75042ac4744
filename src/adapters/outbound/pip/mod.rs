/// Interpreter adapters: pip queries run as subprocesses
mod command_runner;
mod pip_client;

pub use command_runner::CommandRunner;
pub use pip_client::PipClient;
