/// Scene units per degree of latitude/longitude
pub const SCENE_SCALE: f64 = 10_000.0;

/// Radius around the layout center (degrees) kept free of filler buildings
pub const EXCLUSION_RADIUS_DEG: f64 = 0.002;

/// Filler building height range in meters [min, max)
pub const FILLER_HEIGHT_RANGE: (f64, f64) = (5.0, 30.0);

/// Default number of filler placement attempts
pub const DEFAULT_FILLER_COUNT: usize = 1500;

/// Filler footprint side length in scene units
pub const FILLER_FOOTPRINT: f64 = 2.0;

/// Landmark heights are divided by this before rendering
pub const LANDMARK_HEIGHT_DIVISOR: f64 = 10.0;

/// Square root of a landmark's area (m2) is divided by this to get its footprint side
pub const LANDMARK_FOOTPRINT_DIVISOR: f64 = 10.0;

/// Smallest landmark footprint side length in scene units
pub const MIN_LANDMARK_FOOTPRINT: f64 = 2.0;

/// Road thickness in scene units per meter of road width
pub const ROAD_WIDTH_SCALE: f64 = 0.1;

/// Spline samples between each pair of road control points
pub const ROAD_SEGMENTS_PER_SPAN: usize = 8;
