use crate::api::config::SceneConfig;
use crate::api::generator::ProceduralGenerator;
use crate::api::layout::SceneLayout;
use crate::api::scene::{Scene, compose_scene};
use crate::api::source::LayoutSource;
use crate::core::bounds::BoundingBox;
use crate::util::coord::Coordinate;
use crate::util::error::SceneError;
use tracing::{debug, info, warn};

/// Lifecycle of a [`SceneComposer`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerState {
    /// No layout yet; a fetch is expected or in flight.
    Loading,
    /// A scene is available.
    Ready,
    /// Center or bounds changed; the scene is stale until [`SceneComposer::compose`].
    Regenerating,
    /// The first fetch failed. Call [`SceneComposer::retry`].
    Error(SceneError),
}

impl ComposerState {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ComposerState::Error(e) if e.is_retryable())
    }
}

/// Identifies one layout fetch. Only the newest ticket may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Owns the fetched layout and the scene derived from it.
///
/// Fetches are never retried automatically. A failed fetch keeps the last
/// good scene if there is one; otherwise the composer enters
/// [`ComposerState::Error`].
///
/// # Example
/// ```
/// use cityscene_rs::{ComposerState, SceneComposer, SceneConfig, SceneLayout, StaticLayoutSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), cityscene_rs::SceneError> {
/// let layout = SceneLayout::from_json(r#"{
///     "region": "Mumbai",
///     "coordinates": {
///         "center": {"lat": 19.076, "lng": 72.8777},
///         "bounds": {"north": 19.08, "south": 19.07, "east": 72.88, "west": 72.87}
///     }
/// }"#)?;
///
/// let mut composer = SceneComposer::new(SceneConfig::default())?;
/// composer.refresh(&StaticLayoutSource(layout)).await;
/// assert_eq!(composer.state(), &ComposerState::Ready);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SceneComposer {
    config: SceneConfig,
    generator: ProceduralGenerator,
    state: ComposerState,
    layout: Option<SceneLayout>,
    view: Option<(Coordinate, BoundingBox)>,
    scene: Option<Scene>,
    generation: u64,
    mounted: bool,
    last_error: Option<SceneError>,
}

impl SceneComposer {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let generator =
            ProceduralGenerator::new(config.generator.clone())?.with_scale(config.scale);
        Ok(Self {
            config,
            generator,
            state: ComposerState::Loading,
            layout: None,
            view: None,
            scene: None,
            generation: 0,
            mounted: true,
            last_error: None,
        })
    }

    pub fn state(&self) -> &ComposerState {
        &self.state
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn layout(&self) -> Option<&SceneLayout> {
        self.layout.as_ref()
    }

    /// The most recent fetch failure, including ones masked by a ready scene.
    pub fn last_error(&self) -> Option<&SceneError> {
        self.last_error.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Starts a fetch. Any earlier ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        if self.scene.is_none() {
            self.set_state(ComposerState::Loading);
        }
        debug!(generation = self.generation, "layout fetch started");
        FetchTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` if it was discarded as stale.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<SceneLayout, SceneError>,
    ) -> bool {
        if !self.mounted {
            debug!(generation = ticket.0, "discarding fetch result after unmount");
            return false;
        }
        if ticket.0 != self.generation {
            debug!(
                generation = ticket.0,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(layout) => {
                info!(region = %layout.region, "layout applied");
                self.layout = Some(layout);
                self.last_error = None;
                self.derive();
            }
            Err(e) if self.scene.is_some() => {
                warn!("layout fetch failed, keeping previous scene: {}", e);
                self.last_error = Some(e);
            }
            Err(e) => {
                warn!("layout fetch failed: {}", e);
                self.last_error = Some(e.clone());
                self.set_state(ComposerState::Error(e));
            }
        }
        true
    }

    /// Fetches from `source` and applies the result.
    pub async fn refresh<S: LayoutSource>(&mut self, source: &S) -> &ComposerState {
        let ticket = self.begin_fetch();
        let result = source.fetch().await;
        self.complete_fetch(ticket, result);
        &self.state
    }

    /// Caller-triggered retry after a failure.
    pub async fn retry<S: LayoutSource>(&mut self, source: &S) -> &ComposerState {
        self.refresh(source).await
    }

    /// Overrides the layout's center and bounds.
    ///
    /// Invalid bounds are rejected and leave the composer untouched. When a
    /// scene exists and the view actually changes, the state moves to
    /// `Regenerating` until [`SceneComposer::compose`] runs.
    pub fn set_view(&mut self, center: Coordinate, bounds: BoundingBox) -> Result<(), SceneError> {
        bounds.validate()?;
        if self.current_view() == Some((center, bounds)) {
            return Ok(());
        }
        self.view = Some((center, bounds));
        if self.scene.is_some() {
            self.set_state(ComposerState::Regenerating);
        }
        Ok(())
    }

    /// Drops any view override and goes back to the layout's own center and bounds.
    pub fn clear_view(&mut self) {
        if self.view.take().is_some() && self.scene.is_some() {
            self.set_state(ComposerState::Regenerating);
        }
    }

    /// Re-derives a stale scene and returns the current one.
    pub fn compose(&mut self) -> Option<&Scene> {
        if self.state == ComposerState::Regenerating {
            self.derive();
        }
        self.scene.as_ref()
    }

    /// Marks the owning view as gone. Later fetch results are discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    fn current_view(&self) -> Option<(Coordinate, BoundingBox)> {
        self.view
            .or_else(|| self.layout.as_ref().map(|l| (l.center(), l.bounds())))
    }

    fn derive(&mut self) {
        let (Some(layout), Some((center, bounds))) = (self.layout.as_ref(), self.current_view())
        else {
            return;
        };
        let scene = compose_scene(layout, center, &bounds, &self.config, &mut self.generator);
        debug!(
            landmarks = scene.landmarks.len(),
            buildings = scene.buildings.len(),
            roads = scene.roads.len(),
            "scene derived"
        );
        self.scene = Some(scene);
        self.set_state(ComposerState::Ready);
    }

    fn set_state(&mut self, state: ComposerState) {
        if self.state != state {
            debug!(from = ?self.state, to = ?state, "composer state change");
            self.state = state;
        }
    }
}
