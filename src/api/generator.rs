use crate::core::bounds::BoundingBox;
use crate::core::color::FillerShade;
use crate::core::constants::{
    DEFAULT_FILLER_COUNT, EXCLUSION_RADIUS_DEG, FILLER_FOOTPRINT, FILLER_HEIGHT_RANGE, SCENE_SCALE,
};
use crate::core::projection::{Projector, ScenePoint};
use crate::util::coord::Coordinate;
use crate::util::error::SceneError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Parameters for procedural filler generation.
///
/// # Example
/// ```
/// use cityscene_rs::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .count(500)
///     .seed(7)
///     .height_range(8.0, 40.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Placement attempts; the output never exceeds this.
    pub count: usize,
    pub seed: u64,
    /// Degrees around the center kept free of filler.
    pub exclusion_radius: f64,
    pub min_height: f64,
    pub max_height: f64,
    /// Footprint side length in scene units.
    pub footprint: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_FILLER_COUNT,
            seed: 42,
            exclusion_radius: EXCLUSION_RADIUS_DEG,
            min_height: FILLER_HEIGHT_RANGE.0,
            max_height: FILLER_HEIGHT_RANGE.1,
            footprint: FILLER_FOOTPRINT,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn exclusion_radius(mut self, degrees: f64) -> Self {
        self.exclusion_radius = degrees;
        self
    }

    pub fn height_range(mut self, min: f64, max: f64) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    pub fn footprint(mut self, size: f64) -> Self {
        self.footprint = size;
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.min_height.is_finite() && self.max_height.is_finite())
            || self.min_height < 0.0
            || self.min_height >= self.max_height
        {
            return Err(SceneError::InvalidConfig(format!(
                "height range must satisfy 0 <= min < max, got {}..{}",
                self.min_height, self.max_height
            )));
        }
        if !self.exclusion_radius.is_finite() || self.exclusion_radius < 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "exclusion radius must be >= 0, got {}",
                self.exclusion_radius
            )));
        }
        if !self.footprint.is_finite() || self.footprint <= 0.0 {
            return Err(SceneError::InvalidConfig(format!(
                "footprint must be > 0, got {}",
                self.footprint
            )));
        }
        Ok(())
    }
}

/// A filler building with no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProceduralBuilding {
    /// Box center in scene space; `y` is half the height so the box rests on the ground.
    pub position: ScenePoint,
    pub coordinate: Coordinate,
    pub height: f64,
    pub shade: FillerShade,
    pub footprint: f64,
}

/// Upper bound on the up-front reservation; `count` is an attempt budget.
const MAX_RESERVED_BUILDINGS: usize = 4096;

fn initial_capacity(count: usize) -> usize {
    count.min(MAX_RESERVED_BUILDINGS)
}

/// Samples up to `config.count` filler buildings inside `bounds`.
///
/// Samples landing within `config.exclusion_radius` of `center` are dropped,
/// so the result may be shorter than requested. Invalid bounds or config
/// produce an empty set.
pub fn generate_buildings(
    center: Coordinate,
    bounds: &BoundingBox,
    config: &GeneratorConfig,
    scale: f64,
) -> Vec<ProceduralBuilding> {
    if let Err(e) = bounds.validate() {
        warn!("skipping procedural generation: {}", e);
        return Vec::new();
    }
    if let Err(e) = config.validate() {
        warn!("skipping procedural generation: {}", e);
        return Vec::new();
    }

    let projector = Projector::new(center).with_scale(scale);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut buildings = Vec::with_capacity(initial_capacity(config.count));

    for _ in 0..config.count {
        let lat = rng.gen_range(bounds.south..bounds.north);
        let lon = rng.gen_range(bounds.west..bounds.east);
        let height = rng.gen_range(config.min_height..config.max_height);
        let shade = FillerShade::ALL[rng.gen_range(0..FillerShade::ALL.len())];

        let coordinate = Coordinate::new(lat, lon);
        if center.degree_distance(&coordinate) < config.exclusion_radius {
            continue;
        }

        buildings.push(ProceduralBuilding {
            position: projector.project(&coordinate).with_y(height / 2.0),
            coordinate,
            height,
            shade,
            footprint: config.footprint,
        });
    }

    debug!(
        requested = config.count,
        placed = buildings.len(),
        "generated procedural buildings"
    );
    buildings
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    center: (u64, u64),
    bounds: [u64; 4],
}

impl MemoKey {
    fn new(center: &Coordinate, bounds: &BoundingBox) -> Self {
        Self {
            center: center.bits(),
            bounds: bounds.bits(),
        }
    }
}

/// Memoizing wrapper around [`generate_buildings`].
///
/// The building set is recomputed only when the center or bounds differ from
/// the previous call. Changing the config drops the memo.
#[derive(Debug)]
pub struct ProceduralGenerator {
    config: GeneratorConfig,
    scale: f64,
    memo: Option<(MemoKey, Vec<ProceduralBuilding>)>,
    hits: u64,
    misses: u64,
}

impl ProceduralGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self {
            config,
            scale: SCENE_SCALE,
            memo: None,
            hits: 0,
            misses: 0,
        })
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self.memo = None;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeneratorConfig) -> Result<(), SceneError> {
        config.validate()?;
        if config != self.config {
            self.config = config;
            self.memo = None;
        }
        Ok(())
    }

    /// Returns the building set for `(center, bounds)`, reusing the last one if unchanged.
    pub fn buildings(&mut self, center: Coordinate, bounds: &BoundingBox) -> &[ProceduralBuilding] {
        let key = MemoKey::new(&center, bounds);
        let fresh = match &self.memo {
            Some((cached, _)) if *cached == key => false,
            _ => true,
        };

        if fresh {
            self.misses += 1;
            let buildings = generate_buildings(center, bounds, &self.config, self.scale);
            self.memo = Some((key, buildings));
        } else {
            self.hits += 1;
            trace!("procedural building memo hit");
        }

        match &self.memo {
            Some((_, buildings)) => buildings,
            None => &[],
        }
    }

    pub fn invalidate(&mut self) {
        self.memo = None;
    }

    /// (hits, misses) since construction.
    pub fn memo_stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mumbai() -> (Coordinate, BoundingBox) {
        (
            Coordinate::new(19.076, 72.8777),
            BoundingBox {
                north: 19.08,
                south: 19.07,
                east: 72.88,
                west: 72.87,
            },
        )
    }

    #[test]
    fn test_mumbai_example() {
        let (center, bounds) = mumbai();
        let config = GeneratorConfig::new().count(1500);
        let buildings = generate_buildings(center, &bounds, &config, SCENE_SCALE);

        assert!(!buildings.is_empty());
        assert!(buildings.len() <= 1500);

        let rect = Projector::new(center).project_bounds(&bounds);
        for b in &buildings {
            assert!(bounds.contains(&b.coordinate));
            assert!(b.position.x >= rect.min().x && b.position.x <= rect.max().x);
            assert!(b.position.z >= rect.min().y && b.position.z <= rect.max().y);
            assert!(center.degree_distance(&b.coordinate) >= EXCLUSION_RADIUS_DEG);
        }
    }

    #[test]
    fn test_heights_and_shades_in_range() {
        let (center, bounds) = mumbai();
        let config = GeneratorConfig::new().count(300).height_range(5.0, 30.0);
        for b in generate_buildings(center, &bounds, &config, SCENE_SCALE) {
            assert!(b.height >= 5.0 && b.height < 30.0);
            assert!((b.position.y - b.height / 2.0).abs() < 1e-12);
            assert!(FillerShade::ALL.contains(&b.shade));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let (center, bounds) = mumbai();
        let config = GeneratorConfig::new().count(200).seed(99);
        let a = generate_buildings(center, &bounds, &config, SCENE_SCALE);
        let b = generate_buildings(center, &bounds, &config, SCENE_SCALE);
        assert_eq!(a, b);

        let c = generate_buildings(center, &bounds, &config.clone().seed(100), SCENE_SCALE);
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_bounds_yield_empty_set() {
        let (center, _) = mumbai();
        let collapsed = BoundingBox {
            north: 19.07,
            south: 19.07,
            east: 72.88,
            west: 72.87,
        };
        let inverted = BoundingBox {
            north: 19.07,
            south: 19.08,
            east: 72.88,
            west: 72.87,
        };
        let config = GeneratorConfig::new();
        assert!(generate_buildings(center, &collapsed, &config, SCENE_SCALE).is_empty());
        assert!(generate_buildings(center, &inverted, &config, SCENE_SCALE).is_empty());
    }

    #[test]
    fn test_overflowing_bounds_yield_empty_set() {
        let center = Coordinate::new(0.0, 0.0);
        let huge = BoundingBox {
            north: 1e308,
            south: -1e308,
            east: 1e308,
            west: -1e308,
        };
        let buildings = generate_buildings(center, &huge, &GeneratorConfig::new(), SCENE_SCALE);
        assert!(buildings.is_empty());
    }

    #[test]
    fn test_reservation_is_capped() {
        assert_eq!(initial_capacity(0), 0);
        assert_eq!(initial_capacity(1500), 1500);
        assert_eq!(initial_capacity(usize::MAX / 8), MAX_RESERVED_BUILDINGS);
    }

    #[test]
    fn test_box_inside_exclusion_zone_is_empty() {
        let center = Coordinate::new(0.0, 0.0);
        let tiny = BoundingBox {
            north: 0.0005,
            south: -0.0005,
            east: 0.0005,
            west: -0.0005,
        };
        let buildings = generate_buildings(center, &tiny, &GeneratorConfig::new(), SCENE_SCALE);
        assert!(buildings.is_empty());
    }

    #[test]
    fn test_zero_count() {
        let (center, bounds) = mumbai();
        let config = GeneratorConfig::new().count(0);
        assert!(generate_buildings(center, &bounds, &config, SCENE_SCALE).is_empty());
    }

    #[test]
    fn test_config_validation() {
        assert!(GeneratorConfig::new().validate().is_ok());
        assert!(matches!(
            GeneratorConfig::new().height_range(30.0, 5.0).validate(),
            Err(SceneError::InvalidConfig(_))
        ));
        assert!(GeneratorConfig::new().exclusion_radius(-1.0).validate().is_err());
        assert!(GeneratorConfig::new().footprint(0.0).validate().is_err());
        assert!(ProceduralGenerator::new(GeneratorConfig::new().height_range(1.0, 1.0)).is_err());
    }

    #[test]
    fn test_config_from_partial_json() -> Result<(), serde_json::Error> {
        let config: GeneratorConfig = serde_json::from_str(r#"{"count": 10, "seed": 3}"#)?;
        assert_eq!(config.count, 10);
        assert_eq!(config.seed, 3);
        assert_eq!(config.exclusion_radius, EXCLUSION_RADIUS_DEG);
        Ok(())
    }

    #[test]
    fn test_memoization() -> Result<(), SceneError> {
        let (center, bounds) = mumbai();
        let mut generator = ProceduralGenerator::new(GeneratorConfig::new().count(100))?;

        let first = generator.buildings(center, &bounds).to_vec();
        let second = generator.buildings(center, &bounds).to_vec();
        assert_eq!(first, second);
        assert_eq!(generator.memo_stats(), (1, 1));

        let moved = Coordinate::new(19.075, 72.8777);
        generator.buildings(moved, &bounds);
        assert_eq!(generator.memo_stats(), (1, 2));

        generator.buildings(center, &bounds);
        assert_eq!(generator.memo_stats(), (1, 3));
        Ok(())
    }

    #[test]
    fn test_config_change_drops_memo() -> Result<(), SceneError> {
        let (center, bounds) = mumbai();
        let mut generator = ProceduralGenerator::new(GeneratorConfig::new().count(50))?;
        let first = generator.buildings(center, &bounds).to_vec();

        generator.set_config(GeneratorConfig::new().count(50))?;
        generator.buildings(center, &bounds);
        assert_eq!(generator.memo_stats(), (1, 1));

        generator.set_config(GeneratorConfig::new().count(50).seed(1))?;
        let second = generator.buildings(center, &bounds).to_vec();
        assert_eq!(generator.memo_stats(), (1, 2));
        assert_ne!(first, second);
        Ok(())
    }
}
