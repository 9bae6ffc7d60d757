use crate::api::scene::Scene;
use crate::api::scene_arrow::SceneToArrow;
use crate::util::error::SceneError;
use arrow_array::RecordBatch;
use geoparquet::writer::{
    GeoParquetRecordBatchEncoder, GeoParquetWriterEncoding, GeoParquetWriterOptionsBuilder,
};
use parquet::arrow::ArrowWriter;
use parquet::file::metadata::KeyValue;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Key prefix for the scene entries in the Parquet key-value metadata.
pub const SCENE_METADATA_PREFIX: &str = "cityscene:";

fn io_error(e: impl std::fmt::Display) -> SceneError {
    SceneError::IoError(e.to_string())
}

/// Writes a record batch with a GeoArrow geometry column as WKB-encoded GeoParquet.
///
/// Each `(key, value)` in `extra` is stored as Parquet key-value metadata
/// next to the `geo` entry, with keys prefixed by [`SCENE_METADATA_PREFIX`].
pub fn write_geoparquet<I>(
    batch: &RecordBatch,
    path: impl AsRef<Path>,
    extra: I,
) -> Result<(), SceneError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let path = path.as_ref();
    let options = GeoParquetWriterOptionsBuilder::default()
        .set_encoding(GeoParquetWriterEncoding::WKB)
        .build();
    let mut encoder =
        GeoParquetRecordBatchEncoder::try_new(&batch.schema(), &options).map_err(io_error)?;

    let file = File::create(path).map_err(io_error)?;
    let mut writer =
        ArrowWriter::try_new(file, encoder.target_schema(), None).map_err(io_error)?;

    let encoded = encoder.encode_record_batch(batch).map_err(io_error)?;
    writer.write(&encoded).map_err(io_error)?;

    writer.append_key_value_metadata(encoder.into_keyvalue().map_err(io_error)?);
    for (key, value) in extra {
        debug!(key = %key, value = %value, "geoparquet metadata");
        writer.append_key_value_metadata(KeyValue::new(
            format!("{SCENE_METADATA_PREFIX}{key}"),
            value,
        ));
    }
    writer.finish().map_err(io_error)?;

    info!(path = %path.display(), rows = batch.num_rows(), "wrote geoparquet");
    Ok(())
}

pub trait SceneToGeoParquet: SceneToArrow {
    /// Writes the building records plus region, center and scale metadata.
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), SceneError>;
}

impl SceneToGeoParquet for Scene {
    fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let batch = self.to_record_batch()?;
        let extra = [
            ("region".to_string(), self.region.clone()),
            ("center_lat".to_string(), self.center.latitude.to_string()),
            ("center_lon".to_string(), self.center.longitude.to_string()),
            ("scale".to_string(), self.scale.to_string()),
            ("landmarks".to_string(), self.landmarks.len().to_string()),
        ];
        write_geoparquet(&batch, path, extra)
    }
}
