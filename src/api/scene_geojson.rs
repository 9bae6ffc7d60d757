use crate::api::scene::Scene;
use crate::util::error::SceneError;
use geo_types::LineString;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
use std::path::Path;
use tracing::info;

impl Scene {
    /// Exports the scene in geographic coordinates.
    ///
    /// Buildings become footprint polygons and roads become the smoothed
    /// path projected back to lon/lat.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut features = Vec::new();

        for record in self.building_records() {
            let polygon = self.footprint_polygon(&record);
            let mut feature = Feature::from(Geometry::from(&polygon));
            feature.set_property("origin", record.origin.as_str());
            if let Some(id) = record.id {
                feature.set_property("id", id);
            }
            if let Some(name) = record.name {
                feature.set_property("name", name);
            }
            feature.set_property("category", record.category);
            feature.set_property("height", record.height);
            feature.set_property("color", record.color.to_hex());
            features.push(feature);
        }

        let projector = self.projector();
        for road in &self.roads {
            let line: LineString<f64> = road
                .points
                .iter()
                .map(|p| projector.unproject(p).to_point())
                .collect();
            let mut feature = Feature::from(Geometry::from(&line));
            feature.set_property("origin", "road");
            feature.set_property("id", road.id.as_str());
            feature.set_property("name", road.name.as_str());
            feature.set_property("category", road.kind.as_str());
            feature.set_property("thickness", road.thickness);
            features.push(feature);
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> String {
        GeoJson::from(self.to_feature_collection()).to_string()
    }

    pub fn write_geojson(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let collection = self.to_feature_collection();
        let count = collection.features.len();
        std::fs::write(path, GeoJson::from(collection).to_string())
            .map_err(|e| SceneError::IoError(e.to_string()))?;
        info!(features = count, "wrote scene geojson");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::config::SceneConfig;
    use crate::api::generator::GeneratorConfig;
    use crate::api::layout::SceneLayout;
    use crate::api::layout::fixtures::MUMBAI_LAYOUT;
    use crate::api::scene::Scene;
    use crate::util::error::SceneError;
    use geojson::GeoJson;
    use tempfile::tempdir;

    fn scene() -> Result<Scene, SceneError> {
        let layout = SceneLayout::from_json(MUMBAI_LAYOUT)?;
        Scene::compose(
            &layout,
            &SceneConfig::new().generator(GeneratorConfig::new().count(10)),
        )
    }

    #[test]
    fn test_feature_counts() -> Result<(), SceneError> {
        let scene = scene()?;
        let fc = scene.to_feature_collection();

        let expected = scene.landmarks.len() + scene.buildings.len() + scene.roads.len();
        assert_eq!(fc.features.len(), expected);

        let road = fc.features.last();
        assert_eq!(
            road.and_then(|f| f.property("origin")).and_then(|v| v.as_str()),
            Some("road")
        );
        Ok(())
    }

    #[test]
    fn test_road_geometry_returns_to_lonlat() -> Result<(), SceneError> {
        let scene = scene()?;
        let fc = scene.to_feature_collection();
        let road = fc.features.last().and_then(|f| f.geometry.clone());

        match road.map(|g| g.value) {
            Some(geojson::Value::LineString(coords)) => {
                assert!((coords[0][0] - 72.871).abs() < 1e-9);
                assert!((coords[0][1] - 19.071).abs() < 1e-9);
            }
            other => panic!("expected LineString, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_write_geojson_parses_back() -> Result<(), SceneError> {
        let scene = scene()?;
        let dir = tempdir().map_err(|e| SceneError::IoError(e.to_string()))?;
        let path = dir.path().join("scene.geojson");

        scene.write_geojson(&path)?;

        let text = std::fs::read_to_string(&path).map_err(|e| SceneError::IoError(e.to_string()))?;
        let parsed: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| SceneError::IoError(e.to_string()))?;
        assert!(matches!(parsed, GeoJson::FeatureCollection(_)));
        Ok(())
    }
}
