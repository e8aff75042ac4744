/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the seams between the inspection core
/// and the interpreter, the console and the file system.
pub mod outbound;
