use crate::util::coord::LonLat;
use crate::util::error::SceneError;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};

/// Rectangular lat/lon region in degrees.
///
/// A box is valid when `north > south` and `east > west`. Deserialized
/// boxes are not checked until [`BoundingBox::validate`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Creates a validated bounding box.
    ///
    /// # Example
    /// ```
    /// use cityscene_rs::BoundingBox;
    ///
    /// # fn main() -> Result<(), cityscene_rs::SceneError> {
    /// let bounds = BoundingBox::new(19.08, 19.07, 72.88, 72.87)?;
    /// assert!(BoundingBox::new(19.07, 19.08, 72.88, 72.87).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Result<Self, SceneError> {
        let bounds = Self {
            north,
            south,
            east,
            west,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let finite = [self.north, self.south, self.east, self.west]
            .iter()
            .all(|v| v.is_finite());
        // Edges can be finite while their span overflows.
        let spans_finite = self.height().is_finite() && self.width().is_finite();
        if !finite || !spans_finite || self.north <= self.south || self.east <= self.west {
            return Err(SceneError::InvalidBounds {
                north: self.north,
                south: self.south,
                east: self.east,
                west: self.west,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn contains(&self, c: &impl LonLat) -> bool {
        c.lat() >= self.south
            && c.lat() <= self.north
            && c.lon() >= self.west
            && c.lon() <= self.east
    }

    /// Converts to a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }

    pub(crate) fn bits(&self) -> [u64; 4] {
        [
            self.north.to_bits(),
            self.south.to_bits(),
            self.east.to_bits(),
            self.west.to_bits(),
        ]
    }
}

impl From<&Rect<f64>> for BoundingBox {
    fn from(rect: &Rect<f64>) -> Self {
        Self {
            north: rect.max().y,
            south: rect.min().y,
            east: rect.max().x,
            west: rect.min().x,
        }
    }
}
