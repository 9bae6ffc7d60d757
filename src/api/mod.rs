pub mod composer;
pub mod config;
pub mod generator;
pub mod landmarks;
pub mod layout;
pub mod roads;
pub mod scene;
pub mod scene_arrow;
pub mod scene_csv;
pub mod scene_geojson;
pub mod scene_parquet;
pub mod source;

pub use composer::{ComposerState, FetchTicket, SceneComposer};
pub use config::SceneConfig;
pub use generator::{GeneratorConfig, ProceduralBuilding, ProceduralGenerator, generate_buildings};
pub use landmarks::{LandmarkBuilding, landmark_color, landmark_color_for, render_landmarks};
pub use layout::{Landmark, LandmarkKind, LayoutCoordinates, Road, SceneLayout};
pub use roads::{RoadPath, RoadStyle, render_road, render_roads, smooth_path};
pub use scene::{BuildingOrigin, BuildingRecord, Scene, SceneSummary};
pub use scene_arrow::SceneToArrow;
pub use scene_csv::{GeometryFormat, write_scene_csv};
pub use scene_parquet::{SCENE_METADATA_PREFIX, SceneToGeoParquet, write_geoparquet};
pub use source::{
    AnyLayoutSource, FileLayoutSource, HttpLayoutSource, LayoutSource, StaticLayoutSource,
};
