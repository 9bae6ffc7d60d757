use crate::core::bounds::BoundingBox;
use crate::core::constants::SCENE_SCALE;
use crate::util::coord::{Coordinate, LonLat};
use geo_types::{Rect, coord};
use serde::Serialize;

/// A position in scene space. X grows eastward, Z grows southward, Y is up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ScenePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }
}

/// Projects a lat/lon onto the ground plane around `(center_lat, center_lon)`.
///
/// Equirectangular local approximation: x is proportional to the longitude
/// offset, z to the negated latitude offset, y is always 0. Only valid for
/// city-sized extents.
///
/// ```
/// use cityscene_rs::project;
///
/// let p = project(19.076, 72.8777, 19.076, 72.8777, 10_000.0);
/// assert_eq!((p.x, p.y, p.z), (0.0, 0.0, 0.0));
/// ```
pub fn project(lat: f64, lon: f64, center_lat: f64, center_lon: f64, scale: f64) -> ScenePoint {
    ScenePoint {
        x: (lon - center_lon) * scale,
        y: 0.0,
        z: (center_lat - lat) * scale,
    }
}

/// A projection anchored at a layout center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub center: Coordinate,
    pub scale: f64,
}

impl Projector {
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            scale: SCENE_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn project(&self, c: &impl LonLat) -> ScenePoint {
        project(
            c.lat(),
            c.lon(),
            self.center.latitude,
            self.center.longitude,
            self.scale,
        )
    }

    /// Inverse of [`Projector::project`], ignoring y.
    pub fn unproject(&self, p: &ScenePoint) -> Coordinate {
        Coordinate::new(
            self.center.latitude - p.z / self.scale,
            self.center.longitude + p.x / self.scale,
        )
    }

    /// Projects the bounds into a scene-space rectangle (x, z).
    pub fn project_bounds(&self, bounds: &BoundingBox) -> Rect<f64> {
        let nw = self.project(&(bounds.west, bounds.north));
        let se = self.project(&(bounds.east, bounds.south));
        Rect::new(coord! { x: nw.x, y: nw.z }, coord! { x: se.x, y: se.z })
    }
}
