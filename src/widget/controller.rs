//! Widget controller: lifecycle, state ownership and render dispatch.
//!
//! The controller is the only component that writes to the drawing
//! surface or commands the playback source. It owns both between
//! [`WidgetController::attach`] and [`WidgetController::detach`].
//!
//! Lifecycle:
//!
//! ```text
//! Unmounted --attach--> Initializing --first layout--> Ready
//!     ^                                                  |
//!     +--------------------- detach ---------------------+
//! ```
//!
//! While `Ready`, every applied clock event, layout change and highlight
//! replacement renders exactly one frame. A duration-only change renders
//! nothing on its own.

use crate::config::WidgetConfig;
use crate::widget::clock::{PlaybackClock, PlaybackEvent, PlaybackSource, SeekOutcome};
use crate::widget::highlight::HighlightSet;
use crate::widget::input::{resolve_pointer, PointerEvent, PointerOutcome};
use crate::widget::render::{DrawingSurface, RenderPipeline};
use crate::widget::state::{Dimension, PlaybackState, WidgetPhase};

/// Errors from misusing the controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("Widget is already attached to a surface and source")]
    AlreadyAttached,
}

/// Resources held while attached.
#[derive(Debug)]
struct Attachment<P: PlaybackSource, D: DrawingSurface> {
    clock: PlaybackClock<P>,
    surface: D,
}

/// Drives one widget instance.
#[derive(Debug)]
pub struct WidgetController<P: PlaybackSource, D: DrawingSurface> {
    config: WidgetConfig,
    pipeline: RenderPipeline,
    highlights: HighlightSet,
    state: PlaybackState,
    dimension: Option<Dimension>,
    attachment: Option<Attachment<P, D>>,
    frames_rendered: u64,
}

impl<P: PlaybackSource, D: DrawingSurface> WidgetController<P, D> {
    /// Create an unmounted controller.
    pub fn new(config: WidgetConfig) -> Self {
        let pipeline = RenderPipeline::new(config.colors.clone());
        let highlights = config.highlight_set();
        Self {
            config,
            pipeline,
            highlights,
            state: PlaybackState::default(),
            dimension: None,
            attachment: None,
            frames_rendered: 0,
        }
    }

    // === Lifecycle ===

    /// Attach to a playback source and a drawing surface.
    ///
    /// Subscribes to the source, then measures the surface. If the host
    /// has already laid the surface out the widget becomes `Ready` and
    /// draws its first frame; otherwise it stays `Initializing` until
    /// [`sync_layout`](Self::sync_layout) sees a size.
    pub fn attach(&mut self, source: P, surface: D) -> Result<(), WidgetError> {
        if self.attachment.is_some() {
            return Err(WidgetError::AlreadyAttached);
        }

        let mut clock = PlaybackClock::new(source);
        clock.start();
        self.attachment = Some(Attachment { clock, surface });
        self.state = PlaybackState::default();
        self.dimension = None;
        tracing::debug!(source = %self.config.source, "widget initializing");

        self.sync_layout();
        Ok(())
    }

    /// Detach, unsubscribing from the source.
    ///
    /// Returns the source and surface to the caller; `None` if the
    /// widget was not attached.
    pub fn detach(&mut self) -> Option<(P, D)> {
        let Attachment { clock, surface } = self.attachment.take()?;
        self.dimension = None;
        tracing::debug!(frames = self.frames_rendered, "widget detached");
        Some((clock.into_source(), surface))
    }

    pub fn phase(&self) -> WidgetPhase {
        match (&self.attachment, self.dimension) {
            (None, _) => WidgetPhase::Unmounted,
            (Some(_), None) => WidgetPhase::Initializing,
            (Some(_), Some(_)) => WidgetPhase::Ready,
        }
    }

    // === Reactive updates ===

    /// Re-measure the surface and follow layout changes.
    ///
    /// When the laid-out size differs from the backing size (or no
    /// dimension is stored yet), resizes the backing store, stores the
    /// new dimension and renders. Returns true if the dimension changed.
    pub fn sync_layout(&mut self) -> bool {
        let Some(attachment) = self.attachment.as_mut() else {
            return false;
        };
        let Some(measured) = attachment.surface.layout_size() else {
            return false;
        };

        let backing = attachment.surface.backing_size();
        if measured == backing && self.dimension == Some(measured) {
            return false;
        }
        if measured != backing {
            attachment.surface.set_backing_size(measured);
        }

        let first = self.dimension.is_none();
        self.dimension = Some(measured);
        if first {
            tracing::debug!(
                width = measured.width,
                height = measured.height,
                "widget ready"
            );
        } else {
            tracing::debug!(
                width = measured.width,
                height = measured.height,
                "track resized"
            );
        }

        self.render();
        true
    }

    /// Drain pending clock events in emission order.
    ///
    /// Returns the number of events applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self
            .attachment
            .as_mut()
            .and_then(|attachment| attachment.clock.next_event())
        {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    fn apply_event(&mut self, event: PlaybackEvent) {
        if self.state.apply(event) {
            self.render();
        } else {
            tracing::debug!(duration = self.state.duration, "duration updated");
        }
    }

    /// Replace the highlight set and redraw.
    pub fn set_highlights(&mut self, highlights: impl Into<HighlightSet>) {
        self.highlights = highlights.into();
        self.render();
    }

    // === Commands ===

    /// Handle a pointer activation; seeks when it lands inside the track.
    ///
    /// The progress fill moves once the source reports the new time
    /// through [`pump`](Self::pump).
    pub fn click(&mut self, pointer: PointerEvent) -> Option<SeekOutcome> {
        let dimension = self.dimension?;
        let attachment = self.attachment.as_mut()?;
        let bounds = attachment.surface.bounding_box();

        match resolve_pointer(pointer, &bounds, dimension, self.state.duration) {
            PointerOutcome::Seek(time) => Some(attachment.clock.seek(time)),
            PointerOutcome::Miss => None,
        }
    }

    /// Seek to an absolute time (seconds).
    pub fn seek(&mut self, time: f64) -> Option<SeekOutcome> {
        let attachment = self.attachment.as_mut()?;
        Some(attachment.clock.seek(time))
    }

    /// Play if paused, else pause.
    pub fn toggle_playback(&mut self) {
        let is_paused = self.state.is_paused;
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.clock.toggle_playback(is_paused);
        }
    }

    /// Skip forward by the configured amount.
    pub fn skip_forward(&mut self) -> Option<SeekOutcome> {
        self.skip(self.config.effective_skip())
    }

    /// Skip backward by the configured amount.
    pub fn skip_backward(&mut self) -> Option<SeekOutcome> {
        self.skip(-self.config.effective_skip())
    }

    fn skip(&mut self, delta: f64) -> Option<SeekOutcome> {
        let (current, duration) = (self.state.current_time, self.state.duration);
        let attachment = self.attachment.as_mut()?;
        Some(attachment.clock.seek_by(current, delta, duration))
    }

    // === Rendering ===

    /// Render a frame if the widget is `Ready`.
    fn render(&mut self) {
        let (Some(attachment), Some(dimension)) = (self.attachment.as_mut(), self.dimension)
        else {
            return;
        };
        self.pipeline.render(
            &mut attachment.surface,
            dimension,
            &self.state,
            &self.highlights,
        );
        self.frames_rendered += 1;
    }

    // === Accessors ===

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }

    pub fn highlights(&self) -> &HighlightSet {
        &self.highlights
    }

    /// Frames drawn since creation.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn surface(&self) -> Option<&D> {
        self.attachment.as_ref().map(|a| &a.surface)
    }

    /// Mutable surface access for hosts that position it in their layout.
    ///
    /// Call [`sync_layout`](Self::sync_layout) afterwards.
    pub fn surface_mut(&mut self) -> Option<&mut D> {
        self.attachment.as_mut().map(|a| &mut a.surface)
    }

    pub fn source(&self) -> Option<&P> {
        self.attachment.as_ref().map(|a| a.clock.source())
    }

    /// Mutable source access, e.g. to feed a simulated source.
    pub fn source_mut(&mut self) -> Option<&mut P> {
        self.attachment.as_mut().map(|a| a.clock.source_mut())
    }
}
