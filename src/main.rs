use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cityscene_rs::{
    AnyLayoutSource, ComposerState, GeometryFormat, SceneComposer, SceneConfig, SceneError,
    SceneToGeoParquet, write_scene_csv,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Compose a 3D city scene from a layout document.
#[derive(Debug, Parser)]
#[command(name = "cityscene", version)]
struct Args {
    /// Layout location: an http(s) URL or a path to a JSON file
    source: String,

    /// JSON scene config; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Procedural placement attempts
    #[arg(long)]
    count: Option<usize>,

    /// Seed for procedural placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write buildings as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Footprint column format for --csv (wkt or geojson)
    #[arg(long, requires = "csv")]
    footprints: Option<GeometryFormat>,

    /// Write the scene as a GeoJSON FeatureCollection
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Write buildings as GeoParquet
    #[arg(long)]
    parquet: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SceneConfig, SceneError> {
    let mut config = match &args.config {
        Some(path) => SceneConfig::from_json_file(path)?,
        None => SceneConfig::default(),
    };
    if let Some(count) = args.count {
        config.generator.count = count;
    }
    if let Some(seed) = args.seed {
        config.generator.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

async fn run(args: Args) -> Result<(), SceneError> {
    let config = load_config(&args)?;
    let source = AnyLayoutSource::from_location(&args.source);
    let mut composer = SceneComposer::new(config)?;

    if let ComposerState::Error(e) = composer.refresh(&source).await {
        return Err(e.clone());
    }
    let Some(scene) = composer.scene() else {
        return Err(SceneError::FetchFailure("no scene was produced".to_string()));
    };

    println!("{}", scene.summary());

    if let Some(path) = &args.csv {
        write_scene_csv(scene, path, args.footprints)?;
        info!("csv written to {}", path.display());
    }
    if let Some(path) = &args.geojson {
        scene.write_geojson(path)?;
        info!("geojson written to {}", path.display());
    }
    if let Some(path) = &args.parquet {
        scene.to_geoparquet(path)?;
        info!("geoparquet written to {}", path.display());
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprints_requires_csv() {
        let parsed = Args::try_parse_from(["cityscene", "layout.json", "--footprints", "wkt"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_footprints_with_csv() -> Result<(), clap::Error> {
        let args = Args::try_parse_from([
            "cityscene",
            "layout.json",
            "--csv",
            "out.csv",
            "--footprints",
            "geojson",
        ])?;
        assert_eq!(args.footprints, Some(GeometryFormat::GeoJson));
        assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
        Ok(())
    }
}
