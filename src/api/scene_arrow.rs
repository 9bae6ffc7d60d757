use crate::api::scene::Scene;
use crate::util::error::SceneError;
use arrow_array::{Float64Array, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::{PointArray, PolygonArray};
use geoarrow_array::builder::{PointBuilder, PolygonBuilder};
use geoarrow_schema::{Crs, Dimension, Metadata, PointType, PolygonType};
use rayon::prelude::*;
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Converts the buildings of a [`Scene`] to Arrow arrays.
///
/// Rows follow [`Scene::building_records`]: landmarks first, then filler.
pub trait SceneToArrow {
    /// Building locations as lon/lat points.
    fn to_arrow_points(&self) -> PointArray;
    /// Building footprints as lon/lat polygons.
    fn to_arrow_polygons(&self) -> PolygonArray;
    /// Building attributes plus footprint geometry.
    fn to_record_batch(&self) -> Result<RecordBatch, SceneError>;
}

impl SceneToArrow for Scene {
    fn to_arrow_points(&self) -> PointArray {
        let records = self.building_records();
        let point = PointType::new(Dimension::XY, wgs84_metadata());
        let mut builder = PointBuilder::with_capacity(point, records.len());

        for record in &records {
            builder.push_point(Some(&record.coordinate.to_point()));
        }
        builder.finish()
    }

    fn to_arrow_polygons(&self) -> PolygonArray {
        let records = self.building_records();
        let poly = PolygonType::new(Dimension::XY, wgs84_metadata());
        let polygons: Vec<_> = records
            .par_iter()
            .map(|r| self.footprint_polygon(r))
            .collect();
        PolygonBuilder::from_polygons(&polygons, poly).finish()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, SceneError> {
        let records = self.building_records();
        let polygon_array = self.to_arrow_polygons();

        let origins: StringArray = records.iter().map(|r| Some(r.origin.as_str())).collect();
        let ids: StringArray = records.iter().map(|r| r.id).collect();
        let names: StringArray = records.iter().map(|r| r.name).collect();
        let categories: StringArray = records.iter().map(|r| Some(r.category)).collect();
        let heights: Float64Array = records.iter().map(|r| Some(r.height)).collect();
        let xs: Float64Array = records.iter().map(|r| Some(r.position.x)).collect();
        let zs: Float64Array = records.iter().map(|r| Some(r.position.z)).collect();
        let colors: StringArray = records.iter().map(|r| Some(r.color.to_hex())).collect();

        let geometry_field = polygon_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("origin", DataType::Utf8, false),
            Field::new("id", DataType::Utf8, true),
            Field::new("name", DataType::Utf8, true),
            Field::new("category", DataType::Utf8, false),
            Field::new("height", DataType::Float64, false),
            Field::new("x", DataType::Float64, false),
            Field::new("z", DataType::Float64, false),
            Field::new("color", DataType::Utf8, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(origins),
                Arc::new(ids),
                Arc::new(names),
                Arc::new(categories),
                Arc::new(heights),
                Arc::new(xs),
                Arc::new(zs),
                Arc::new(colors),
                Arc::new(polygon_array.into_arrow()),
            ],
        )
        .map_err(|e| SceneError::IoError(e.to_string()))
    }
}
