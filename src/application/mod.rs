/// Application layer - Use cases, DTOs and read models
///
/// Orchestrates the inspection domain services and reaches the interpreter,
/// console and file system only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
