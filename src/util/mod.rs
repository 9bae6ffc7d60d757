pub mod coord;
pub mod error;

pub use coord::{Coordinate, LonLat};
pub use error::SceneError;
