// Re-export glam for convenience
pub use glam::*;

// Datlight math types
mod interval;
mod plane;
mod ray;
pub use interval::Interval;
pub use plane::Plane;
pub use ray::{Ray, SELF_HIT_EPSILON};
