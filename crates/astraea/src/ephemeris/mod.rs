pub mod model;
pub mod types;

pub use model::{ascendant, body_longitude, compute_positions, midheaven, normalize_degrees};
pub use types::{BodyPositions, OrbitalElements, ANGLE_POINTS, BODY_NAMES};
