//! Frame descriptor -> drawable primitives.

/// Scene assembly from decoded frames.
pub mod builder;
/// The unit handed to renderers.
pub mod primitive;
