/// Result alias used by every layer; typed `InspectorError`s travel inside
/// the `anyhow::Error` and are recovered with `downcast_ref` where needed.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
