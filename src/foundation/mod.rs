/// Shared value types: colours, canvas, frame rate, identifiers.
pub mod core;
/// Crate-wide error taxonomy.
pub mod error;
