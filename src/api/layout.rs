use crate::core::bounds::BoundingBox;
use crate::util::coord::Coordinate;
use crate::util::error::SceneError;
use serde::{Deserialize, Serialize};

/// Landmark category. Unrecognized strings are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LandmarkKind {
    TransportHub,
    Industrial,
    Commercial,
    Residential,
    Other(String),
}

impl LandmarkKind {
    pub fn as_str(&self) -> &str {
        match self {
            LandmarkKind::TransportHub => "transport_hub",
            LandmarkKind::Industrial => "industrial",
            LandmarkKind::Commercial => "commercial",
            LandmarkKind::Residential => "residential",
            LandmarkKind::Other(s) => s,
        }
    }
}

impl From<&str> for LandmarkKind {
    fn from(s: &str) -> Self {
        match s {
            "transport_hub" => LandmarkKind::TransportHub,
            "industrial" => LandmarkKind::Industrial,
            "commercial" => LandmarkKind::Commercial,
            "residential" => LandmarkKind::Residential,
            other => LandmarkKind::Other(other.to_string()),
        }
    }
}

impl From<String> for LandmarkKind {
    fn from(s: String) -> Self {
        LandmarkKind::from(s.as_str())
    }
}

impl From<LandmarkKind> for String {
    fn from(kind: LandmarkKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A named, explicitly positioned feature of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LandmarkKind,
    pub coordinates: Coordinate,
    pub height_meters: f64,
    #[serde(default)]
    pub area_m2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub coordinates: Vec<Coordinate>,
    pub width_meters: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutCoordinates {
    pub center: Coordinate,
    pub bounds: BoundingBox,
}

/// The layout document served by the backend for one region.
///
/// # Example
///
/// ```
/// use cityscene_rs::SceneLayout;
///
/// # fn main() -> Result<(), cityscene_rs::SceneError> {
/// let layout = SceneLayout::from_json(r#"{
///     "region": "Mumbai",
///     "coordinates": {
///         "center": {"lat": 19.076, "lng": 72.8777},
///         "bounds": {"north": 19.08, "south": 19.07, "east": 72.88, "west": 72.87}
///     },
///     "landmarks": [],
///     "roads": []
/// }"#)?;
/// assert_eq!(layout.region, "Mumbai");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub region: String,
    pub coordinates: LayoutCoordinates,
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl SceneLayout {
    pub fn from_json(s: &str) -> Result<Self, SceneError> {
        serde_json::from_str(s).map_err(|e| SceneError::FetchFailure(e.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, SceneError> {
        serde_json::from_slice(bytes).map_err(|e| SceneError::FetchFailure(e.to_string()))
    }

    pub fn center(&self) -> Coordinate {
        self.coordinates.center
    }

    pub fn bounds(&self) -> BoundingBox {
        self.coordinates.bounds
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const MUMBAI_LAYOUT: &str = r#"{
        "region": "Mumbai Central",
        "coordinates": {
            "center": {"lat": 19.076, "lng": 72.8777},
            "bounds": {"north": 19.08, "south": 19.07, "east": 72.88, "west": 72.87}
        },
        "landmarks": [
            {
                "id": "lm-1",
                "name": "Central Station",
                "type": "transport_hub",
                "coordinates": {"lat": 19.0765, "lng": 72.878},
                "height_meters": 45.0,
                "area_m2": 12000.0
            },
            {
                "id": "lm-2",
                "name": "Textile Mill",
                "type": "industrial",
                "coordinates": {"lat": 19.074, "lng": 72.875},
                "height_meters": 20.0,
                "area_m2": 8000.0
            },
            {
                "id": "lm-3",
                "name": "Observatory",
                "type": "scientific",
                "coordinates": {"lat": 19.078, "lng": 72.879},
                "height_meters": 30.0,
                "area_m2": 900.0
            }
        ],
        "roads": [
            {
                "id": "rd-1",
                "name": "Marine Drive",
                "type": "arterial",
                "coordinates": [
                    {"lat": 19.071, "lng": 72.871},
                    {"lat": 19.075, "lng": 72.876},
                    {"lat": 19.079, "lng": 72.879}
                ],
                "width_meters": 20.0
            },
            {
                "id": "rd-2",
                "name": "Stub Lane",
                "type": "local",
                "coordinates": [{"lat": 19.072, "lng": 72.872}],
                "width_meters": 6.0
            }
        ]
    }"#;
}
