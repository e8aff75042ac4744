/// Domain layer: package index, dependency forest and environment snapshot
///
/// Pure logic with no I/O; everything here works on values handed in by
/// the application layer.
pub mod domain;
pub mod services;
