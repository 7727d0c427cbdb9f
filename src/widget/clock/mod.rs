//! Playback clock: event normalization and commands for a playback source.
//!
//! The clock owns the injected [`PlaybackSource`] and at most one live
//! subscription to it. It turns the source's events into a stream the
//! controller drains, and turns widget commands (seek, toggle, skip)
//! into source calls. Source failures are logged and contained here.

mod simulated;
mod source;

pub use simulated::SimulatedSource;
pub use source::{PlaybackEvent, PlaybackSource, SourceError, Subscription, SubscriptionId};

/// What happened to a seek request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekOutcome {
    /// The source accepted the new position (seconds)
    Issued(f64),
    /// The source refused it; the UI keeps showing the last reported time
    Rejected,
}

impl SeekOutcome {
    pub fn is_issued(&self) -> bool {
        matches!(self, SeekOutcome::Issued(_))
    }
}

/// Wraps a playback source with subscription management and commands.
#[derive(Debug)]
pub struct PlaybackClock<P: PlaybackSource> {
    source: P,
    subscription: Option<Subscription>,
}

impl<P: PlaybackSource> PlaybackClock<P> {
    /// Wrap a source without subscribing yet.
    pub fn new(source: P) -> Self {
        Self {
            source,
            subscription: None,
        }
    }

    /// Subscribe to the source. No-op if already subscribed.
    pub fn start(&mut self) {
        if self.subscription.is_none() {
            let subscription = self.source.subscribe();
            tracing::debug!(id = subscription.id().0, "subscribed to playback source");
            self.subscription = Some(subscription);
        }
    }

    /// Unsubscribe from the source and drop any undelivered events.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription.id());
            tracing::debug!(id = subscription.id().0, "unsubscribed from playback source");
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Next pending event, in the order the source emitted it.
    pub fn next_event(&mut self) -> Option<PlaybackEvent> {
        self.subscription.as_ref().and_then(Subscription::try_next)
    }

    /// Ask the source to jump to `time` seconds.
    ///
    /// A rejection is logged and reported, never retried.
    pub fn seek(&mut self, time: f64) -> SeekOutcome {
        match self.source.set_position(time) {
            Ok(()) => {
                tracing::debug!(time, "seek issued");
                SeekOutcome::Issued(time)
            }
            Err(e) => {
                tracing::warn!(time, error = %e, "seek rejected by playback source");
                SeekOutcome::Rejected
            }
        }
    }

    /// Seek relative to `current_time`.
    ///
    /// The target is clamped to `[0, duration]` once the duration is
    /// known, and to non-negative values before that.
    pub fn seek_by(&mut self, current_time: f64, delta: f64, duration: f64) -> SeekOutcome {
        let target = current_time + delta;
        let target = if duration > 0.0 {
            target.clamp(0.0, duration)
        } else {
            target.max(0.0)
        };
        self.seek(target)
    }

    /// Play if paused, else pause.
    pub fn toggle_playback(&mut self, is_paused: bool) {
        let (action, result) = if is_paused {
            ("play", self.source.play())
        } else {
            ("pause", self.source.pause())
        };
        if let Err(e) = result {
            tracing::warn!(action, error = %e, "playback source command failed");
        }
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut P {
        &mut self.source
    }

    /// Unsubscribe and hand the source back.
    pub fn into_source(mut self) -> P {
        self.stop();
        self.source
    }
}
