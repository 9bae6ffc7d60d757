use crate::api::config::SceneConfig;
use crate::api::generator::{ProceduralBuilding, ProceduralGenerator};
use crate::api::landmarks::{LandmarkBuilding, render_landmarks};
use crate::api::layout::SceneLayout;
use crate::api::roads::{RoadPath, render_roads};
use crate::core::bounds::BoundingBox;
use crate::core::color::Color;
use crate::core::geometry::create_footprint;
use crate::core::projection::{Projector, ScenePoint};
use crate::util::coord::Coordinate;
use crate::util::error::SceneError;
use geo_types::{Polygon, Rect};
use serde::Serialize;

/// One renderable frame: landmarks, filler and roads in scene space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub region: String,
    pub center: Coordinate,
    pub bounds: BoundingBox,
    pub scale: f64,
    pub landmarks: Vec<LandmarkBuilding>,
    pub buildings: Vec<ProceduralBuilding>,
    pub roads: Vec<RoadPath>,
}

impl Scene {
    /// Composes a scene from a layout without memoization.
    ///
    /// # Example
    /// ```
    /// use cityscene_rs::{Scene, SceneConfig, SceneLayout};
    ///
    /// # fn main() -> Result<(), cityscene_rs::SceneError> {
    /// let layout = SceneLayout::from_json(r#"{
    ///     "region": "Mumbai",
    ///     "coordinates": {
    ///         "center": {"lat": 19.076, "lng": 72.8777},
    ///         "bounds": {"north": 19.08, "south": 19.07, "east": 72.88, "west": 72.87}
    ///     }
    /// }"#)?;
    /// let scene = Scene::compose(&layout, &SceneConfig::default())?;
    /// assert!(scene.buildings.len() <= 1500);
    /// # Ok(())
    /// # }
    /// ```
    pub fn compose(layout: &SceneLayout, config: &SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let mut generator =
            ProceduralGenerator::new(config.generator.clone())?.with_scale(config.scale);
        Ok(compose_scene(
            layout,
            layout.center(),
            &layout.bounds(),
            config,
            &mut generator,
        ))
    }

    pub fn projector(&self) -> Projector {
        Projector::new(self.center).with_scale(self.scale)
    }

    /// The layout bounds in scene space as an (x, z) rectangle.
    pub fn extent(&self) -> Rect<f64> {
        self.projector().project_bounds(&self.bounds)
    }

    /// Landmarks followed by procedural buildings, flattened for export.
    pub fn building_records(&self) -> Vec<BuildingRecord<'_>> {
        let landmarks = self.landmarks.iter().map(|l| BuildingRecord {
            origin: BuildingOrigin::Landmark,
            id: Some(l.id.as_str()),
            name: Some(l.name.as_str()),
            category: l.kind.as_str(),
            coordinate: l.coordinate,
            position: l.position,
            height: l.height,
            color: l.color,
            footprint: l.footprint,
        });
        let filler = self.buildings.iter().map(|b| BuildingRecord {
            origin: BuildingOrigin::Procedural,
            id: None,
            name: None,
            category: b.shade.name(),
            coordinate: b.coordinate,
            position: b.position,
            height: b.height,
            color: b.shade.color(),
            footprint: b.footprint,
        });
        landmarks.chain(filler).collect()
    }

    /// Geographic footprint (lon/lat degrees) of a building record.
    pub fn footprint_polygon(&self, record: &BuildingRecord<'_>) -> Polygon<f64> {
        create_footprint(
            record.coordinate.longitude,
            record.coordinate.latitude,
            record.footprint / self.scale,
        )
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            region: self.region.clone(),
            landmarks: self.landmarks.len(),
            buildings: self.buildings.len(),
            roads: self.roads.len(),
            tallest_landmark: self
                .landmarks
                .iter()
                .map(|l| l.height)
                .fold(None, |acc: Option<f64>, h| Some(acc.map_or(h, |a| a.max(h)))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingOrigin {
    Landmark,
    Procedural,
}

impl BuildingOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingOrigin::Landmark => "landmark",
            BuildingOrigin::Procedural => "procedural",
        }
    }
}

/// A borrowed, uniform view over landmark and procedural buildings.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingRecord<'a> {
    pub origin: BuildingOrigin,
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    /// Landmark type or filler shade name.
    pub category: &'a str,
    pub coordinate: Coordinate,
    pub position: ScenePoint,
    pub height: f64,
    pub color: Color,
    pub footprint: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub region: String,
    pub landmarks: usize,
    pub buildings: usize,
    pub roads: usize,
    pub tallest_landmark: Option<f64>,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} landmarks, {} procedural buildings, {} roads",
            self.region, self.landmarks, self.buildings, self.roads
        )
    }
}

/// Derives a full scene for `(center, bounds)`.
///
/// Landmarks and roads are always re-projected; filler comes from the
/// generator's memo when the inputs are unchanged.
pub(crate) fn compose_scene(
    layout: &SceneLayout,
    center: Coordinate,
    bounds: &BoundingBox,
    config: &SceneConfig,
    generator: &mut ProceduralGenerator,
) -> Scene {
    let projector = Projector::new(center).with_scale(config.scale);

    Scene {
        region: layout.region.clone(),
        center,
        bounds: *bounds,
        scale: config.scale,
        landmarks: render_landmarks(&layout.landmarks, &projector),
        buildings: generator.buildings(center, bounds).to_vec(),
        roads: render_roads(&layout.roads, &projector, &config.roads),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::layout::fixtures::MUMBAI_LAYOUT;
    use crate::core::constants::EXCLUSION_RADIUS_DEG;

    #[test]
    fn test_compose_fixture() -> Result<(), SceneError> {
        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        let scene = Scene::compose(&layout, &SceneConfig::default())?;

        assert_eq!(scene.landmarks.len(), 3);
        assert_eq!(scene.roads.len(), 1);
        assert!(!scene.buildings.is_empty());
        assert!(scene.buildings.len() <= 1500);
        assert_eq!(scene.landmarks[0].color, Color::RED);
        assert_eq!(scene.landmarks[2].color, Color::BLUE);

        for b in &scene.buildings {
            assert!(scene.center.degree_distance(&b.coordinate) >= EXCLUSION_RADIUS_DEG);
        }
        Ok(())
    }

    #[test]
    fn test_compose_with_invalid_bounds_keeps_landmarks() -> Result<(), SceneError> {
        let mut layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        layout.coordinates.bounds.north = layout.coordinates.bounds.south;

        let scene = Scene::compose(&layout, &SceneConfig::default())?;
        assert!(scene.buildings.is_empty());
        assert_eq!(scene.landmarks.len(), 3);
        Ok(())
    }

    #[test]
    fn test_compose_rejects_invalid_config() -> Result<(), SceneError> {
        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        let result = Scene::compose(&layout, &SceneConfig::new().scale(-1.0));
        assert!(matches!(result, Err(SceneError::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_summary() -> Result<(), SceneError> {
        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        let scene = Scene::compose(&layout, &SceneConfig::default())?;
        let summary = scene.summary();

        assert_eq!(summary.landmarks, 3);
        assert_eq!(summary.roads, 1);
        assert_eq!(summary.tallest_landmark, Some(4.5));
        assert!(summary.to_string().starts_with("Mumbai Central: 3 landmarks"));
        Ok(())
    }

    #[test]
    fn test_building_records() -> Result<(), SceneError> {
        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        let scene = Scene::compose(&layout, &SceneConfig::default())?;
        let records = scene.building_records();

        assert_eq!(records.len(), scene.landmarks.len() + scene.buildings.len());
        assert_eq!(records[0].origin, BuildingOrigin::Landmark);
        assert_eq!(records[0].id, Some("lm-1"));
        assert_eq!(records[0].category, "transport_hub");
        assert_eq!(records[3].origin, BuildingOrigin::Procedural);
        assert!(records[3].id.is_none());
        Ok(())
    }

    #[test]
    fn test_footprint_polygon_in_degrees() -> Result<(), SceneError> {
        use geo::Centroid;

        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        let scene = Scene::compose(&layout, &SceneConfig::default())?;
        let records = scene.building_records();
        let polygon = scene.footprint_polygon(&records[0]);

        let centroid = polygon.centroid();
        assert!(centroid.is_some());
        if let Some(c) = centroid {
            assert!((c.x() - 72.878).abs() < 1e-9);
            assert!((c.y() - 19.0765).abs() < 1e-9);
        }
        let side = records[0].footprint / scene.scale;
        let rect = polygon.exterior().0[2].x - polygon.exterior().0[0].x;
        assert!((rect - side).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_extent_contains_buildings() -> Result<(), SceneError> {
        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        let scene = Scene::compose(&layout, &SceneConfig::default())?;
        let extent = scene.extent();

        for b in &scene.buildings {
            assert!(b.position.x >= extent.min().x && b.position.x <= extent.max().x);
            assert!(b.position.z >= extent.min().y && b.position.z <= extent.max().y);
        }
        Ok(())
    }
}
