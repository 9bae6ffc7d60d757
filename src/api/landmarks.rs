use crate::api::layout::{Landmark, LandmarkKind};
use crate::core::color::Color;
use crate::core::constants::{
    LANDMARK_FOOTPRINT_DIVISOR, LANDMARK_HEIGHT_DIVISOR, MIN_LANDMARK_FOOTPRINT,
};
use crate::core::projection::{Projector, ScenePoint};
use crate::util::coord::Coordinate;
use serde::Serialize;

/// Color for a landmark category. Anything unrecognized is blue.
pub fn landmark_color(kind: &LandmarkKind) -> Color {
    match kind {
        LandmarkKind::TransportHub => Color::RED,
        LandmarkKind::Industrial => Color::ORANGE,
        LandmarkKind::Commercial => Color::VIOLET,
        LandmarkKind::Residential => Color::GREEN,
        LandmarkKind::Other(_) => Color::BLUE,
    }
}

/// Same lookup keyed by the raw `type` string.
pub fn landmark_color_for(kind: &str) -> Color {
    landmark_color(&LandmarkKind::from(kind))
}

/// A landmark ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkBuilding {
    pub id: String,
    pub name: String,
    pub kind: LandmarkKind,
    pub coordinate: Coordinate,
    /// Box center in scene space; `y` is half the scaled height.
    pub position: ScenePoint,
    pub height: f64,
    pub color: Color,
    /// Footprint side length in scene units.
    pub footprint: f64,
}

impl LandmarkBuilding {
    pub fn from_landmark(landmark: &Landmark, projector: &Projector) -> Self {
        let height = landmark.height_meters / LANDMARK_HEIGHT_DIVISOR;
        let footprint = (landmark.area_m2.max(0.0).sqrt() / LANDMARK_FOOTPRINT_DIVISOR)
            .max(MIN_LANDMARK_FOOTPRINT);

        Self {
            id: landmark.id.clone(),
            name: landmark.name.clone(),
            kind: landmark.kind.clone(),
            coordinate: landmark.coordinates,
            position: projector.project(&landmark.coordinates).with_y(height / 2.0),
            height,
            color: landmark_color(&landmark.kind),
            footprint,
        }
    }
}

pub fn render_landmarks(landmarks: &[Landmark], projector: &Projector) -> Vec<LandmarkBuilding> {
    landmarks
        .iter()
        .map(|lm| LandmarkBuilding::from_landmark(lm, projector))
        .collect()
}
