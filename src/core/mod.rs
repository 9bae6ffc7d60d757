pub mod bounds;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod projection;
pub mod spline;

pub use bounds::BoundingBox;
pub use color::{Color, FillerShade};
pub use constants::{
    DEFAULT_FILLER_COUNT, EXCLUSION_RADIUS_DEG, FILLER_FOOTPRINT, FILLER_HEIGHT_RANGE,
    LANDMARK_FOOTPRINT_DIVISOR, LANDMARK_HEIGHT_DIVISOR, MIN_LANDMARK_FOOTPRINT,
    ROAD_SEGMENTS_PER_SPAN, ROAD_WIDTH_SCALE, SCENE_SCALE,
};
pub use geometry::{create_footprint, create_footprint_from_point};
pub use projection::{Projector, ScenePoint, project};
pub use spline::catmull_rom;
