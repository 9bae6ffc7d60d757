use crate::api::scene::Scene;
use crate::util::error::SceneError;
use geo_types::Polygon;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Output format for building footprint geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

impl std::str::FromStr for GeometryFormat {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wkt" => Ok(GeometryFormat::Wkt),
            "geojson" => Ok(GeometryFormat::GeoJson),
            other => Err(SceneError::InvalidConfig(format!(
                "unknown geometry format '{}'",
                other
            ))),
        }
    }
}

pub(crate) fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

pub(crate) fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

/// Writes one row per building (landmarks first, then filler).
///
/// Columns: origin, id, name, category, latitude, longitude, x, z, height,
/// color, plus `footprint` when a geometry format is given.
///
/// # Example
///
/// ```no_run
/// use cityscene_rs::{GeometryFormat, Scene, SceneConfig, SceneLayout, write_scene_csv};
///
/// # fn main() -> Result<(), cityscene_rs::SceneError> {
/// let json = std::fs::read_to_string("layout.json")
///     .map_err(|e| cityscene_rs::SceneError::IoError(e.to_string()))?;
/// let scene = Scene::compose(&SceneLayout::from_json(&json)?, &SceneConfig::default())?;
/// write_scene_csv(&scene, "buildings.csv", Some(GeometryFormat::Wkt))?;
/// # Ok(())
/// # }
/// ```
pub fn write_scene_csv(
    scene: &Scene,
    output_path: impl AsRef<Path>,
    footprints: Option<GeometryFormat>,
) -> Result<(), SceneError> {
    let out_file = File::create(output_path).map_err(|e| SceneError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row = vec![
        "origin",
        "id",
        "name",
        "category",
        "latitude",
        "longitude",
        "x",
        "z",
        "height",
        "color",
    ];
    if footprints.is_some() {
        header_row.push("footprint");
    }
    writer
        .write_record(&header_row)
        .map_err(|e| SceneError::CsvError(e.to_string()))?;

    let records = scene.building_records();
    for record in &records {
        let mut row: Vec<String> = vec![
            record.origin.as_str().to_string(),
            record.id.unwrap_or_default().to_string(),
            record.name.unwrap_or_default().to_string(),
            record.category.to_string(),
            record.coordinate.latitude.to_string(),
            record.coordinate.longitude.to_string(),
            record.position.x.to_string(),
            record.position.z.to_string(),
            record.height.to_string(),
            record.color.to_hex(),
        ];

        if let Some(format) = footprints {
            let polygon = scene.footprint_polygon(record);
            row.push(match format {
                GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
            });
        }

        writer
            .write_record(&row)
            .map_err(|e| SceneError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| SceneError::CsvError(e.to_string()))?;

    info!(rows = records.len(), "wrote scene csv");
    Ok(())
}
