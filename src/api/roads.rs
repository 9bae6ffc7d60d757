use crate::api::layout::Road;
use crate::core::constants::{ROAD_SEGMENTS_PER_SPAN, ROAD_WIDTH_SCALE};
use crate::core::projection::{Projector, ScenePoint};
use crate::core::spline::catmull_rom;
use crate::util::coord::Coordinate;
use geo::BoundingRect;
use geo_types::{Coord, LineString, Rect};
use serde::{Deserialize, Serialize};

/// How roads are turned into paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadStyle {
    /// Scene units of thickness per meter of road width.
    pub width_scale: f64,
    pub segments_per_span: usize,
}

impl Default for RoadStyle {
    fn default() -> Self {
        Self {
            width_scale: ROAD_WIDTH_SCALE,
            segments_per_span: ROAD_SEGMENTS_PER_SPAN,
        }
    }
}

/// A smoothed road ready to be swept into a tube or ribbon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadPath {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub points: Vec<ScenePoint>,
    pub thickness: f64,
}

impl RoadPath {
    /// Ground-plane extent of the path as an (x, z) rectangle.
    pub fn extent(&self) -> Option<Rect<f64>> {
        let line: LineString<f64> = self
            .points
            .iter()
            .map(|p| Coord { x: p.x, y: p.z })
            .collect();
        line.bounding_rect()
    }
}

/// Projects `coordinates` and smooths them into a spline.
///
/// Returns `None` for fewer than two points: there is nothing to draw.
pub fn smooth_path(
    coordinates: &[Coordinate],
    projector: &Projector,
    segments_per_span: usize,
) -> Option<Vec<ScenePoint>> {
    if coordinates.len() < 2 {
        return None;
    }
    let control: Vec<ScenePoint> = coordinates.iter().map(|c| projector.project(c)).collect();
    Some(catmull_rom(&control, segments_per_span))
}

pub fn render_road(road: &Road, projector: &Projector, style: &RoadStyle) -> Option<RoadPath> {
    let points = smooth_path(&road.coordinates, projector, style.segments_per_span)?;
    Some(RoadPath {
        id: road.id.clone(),
        name: road.name.clone(),
        kind: road.kind.clone(),
        points,
        thickness: road.width_meters * style.width_scale,
    })
}

/// Renders every road with at least two points; shorter ones are skipped.
pub fn render_roads(roads: &[Road], projector: &Projector, style: &RoadStyle) -> Vec<RoadPath> {
    roads
        .iter()
        .filter_map(|r| render_road(r, projector, style))
        .collect()
}
