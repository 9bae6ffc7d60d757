//! # cityscene-rs
//!
//! There are currently three main entry points.
//!
//! ### 1. `project` / `Projector` - Geographic to Scene Coordinates
//!
//! ```
//! use cityscene_rs::{Coordinate, Projector};
//!
//! let projector = Projector::new(Coordinate::new(19.076, 72.8777));
//! let p = projector.project(&Coordinate::new(19.08, 72.88));
//! assert!(p.x > 0.0 && p.z < 0.0);
//! ```
//!
//! ### 2. `Scene` - Compose a Layout Once
//!
//! ```
//! use cityscene_rs::{GeneratorConfig, Scene, SceneConfig, SceneLayout};
//!
//! # fn main() -> Result<(), cityscene_rs::SceneError> {
//! let layout = SceneLayout::from_json(r#"{
//!     "region": "Mumbai",
//!     "coordinates": {
//!         "center": {"lat": 19.076, "lng": 72.8777},
//!         "bounds": {"north": 19.08, "south": 19.07, "east": 72.88, "west": 72.87}
//!     },
//!     "landmarks": [{
//!         "id": "cst", "name": "Central Station", "type": "transport_hub",
//!         "coordinates": {"lat": 19.0765, "lng": 72.878},
//!         "height_meters": 45.0, "area_m2": 12000.0
//!     }]
//! }"#)?;
//!
//! let config = SceneConfig::new().generator(GeneratorConfig::new().count(500).seed(7));
//! let scene = Scene::compose(&layout, &config)?;
//! println!("{}", scene.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `SceneComposer` - Fetch, Compose and Regenerate
//!
//! Fetches the layout from a [`LayoutSource`], keeps the last good scene on
//! failure, and re-derives it when the view changes:
//!
//! ```no_run
//! use cityscene_rs::{BoundingBox, Coordinate, HttpLayoutSource, SceneComposer, SceneConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), cityscene_rs::SceneError> {
//! let source = HttpLayoutSource::new("http://localhost:8000/digital-twin/3d-model");
//! let mut composer = SceneComposer::new(SceneConfig::default())?;
//!
//! if composer.refresh(&source).await.is_retryable() {
//!     composer.retry(&source).await;
//! }
//!
//! composer.set_view(
//!     Coordinate::new(19.074, 72.874),
//!     BoundingBox::new(19.078, 19.07, 72.878, 72.87)?,
//! )?;
//! if let Some(scene) = composer.compose() {
//!     println!("{}", scene.summary());
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    AnyLayoutSource, BuildingOrigin, BuildingRecord, ComposerState, FetchTicket,
    FileLayoutSource, GeneratorConfig, GeometryFormat, HttpLayoutSource, Landmark,
    LandmarkBuilding, LandmarkKind, LayoutCoordinates, LayoutSource, ProceduralBuilding,
    ProceduralGenerator, Road, RoadPath, RoadStyle, SCENE_METADATA_PREFIX, Scene, SceneComposer,
    SceneConfig, SceneLayout, SceneSummary, SceneToArrow, SceneToGeoParquet, StaticLayoutSource,
    generate_buildings, landmark_color, landmark_color_for, render_landmarks, render_road,
    render_roads, smooth_path, write_geoparquet, write_scene_csv,
};
pub use core::{
    BoundingBox, Color, DEFAULT_FILLER_COUNT, EXCLUSION_RADIUS_DEG, FILLER_FOOTPRINT,
    FILLER_HEIGHT_RANGE, FillerShade, LANDMARK_FOOTPRINT_DIVISOR, LANDMARK_HEIGHT_DIVISOR,
    MIN_LANDMARK_FOOTPRINT, Projector, ROAD_SEGMENTS_PER_SPAN, ROAD_WIDTH_SCALE, SCENE_SCALE,
    ScenePoint, catmull_rom, create_footprint, create_footprint_from_point, project,
};
pub use util::{Coordinate, LonLat, SceneError};

pub use geo_types;
pub use geojson;
