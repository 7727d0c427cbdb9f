//! Simulated playback source.
//!
//! Advances a virtual position from wall-clock deltas supplied by the
//! host. Used by the terminal player (no audio is decoded) and by tests.

use std::sync::mpsc::{self, Sender};
use std::time::Duration;

use super::source::{PlaybackEvent, PlaybackSource, SourceError, Subscription, SubscriptionId};

/// A playback source with no audio behind it.
///
/// Behaves like a media element: seeks are refused until a duration is
/// loaded, positions are clamped to the track, and reaching the end
/// pauses playback. New subscribers receive the current duration and
/// position if a track is loaded.
#[derive(Debug)]
pub struct SimulatedSource {
    listeners: Vec<(SubscriptionId, Sender<PlaybackEvent>)>,
    next_id: u64,
    duration: Option<f64>,
    position: f64,
    paused: bool,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
            duration: None,
            position: 0.0,
            paused: true,
        }
    }

    /// Load a track of `duration` seconds and announce it.
    pub fn load(&mut self, duration: f64) {
        let duration = duration.max(0.0);
        self.duration = Some(duration);
        self.emit(PlaybackEvent::DurationKnown(duration));
        if self.position > duration {
            self.position = duration;
            self.emit(PlaybackEvent::TimeProgressed(duration));
        }
    }

    /// Advance playback by `elapsed` wall-clock time.
    ///
    /// Does nothing while paused or unloaded. Reaching the end clamps
    /// the position and pauses.
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(duration) = self.duration else {
            return;
        };
        if self.paused || elapsed.is_zero() {
            return;
        }

        self.position = (self.position + elapsed.as_secs_f64()).min(duration);
        self.emit(PlaybackEvent::TimeProgressed(self.position));

        if self.position >= duration {
            self.paused = true;
            self.emit(PlaybackEvent::Paused);
        }
    }

    /// Publish an arbitrary event to all subscribers.
    ///
    /// Lets hosts and tests reproduce upstream orderings such as a
    /// position arriving before the duration.
    pub fn emit(&mut self, event: PlaybackEvent) {
        // Drop listeners whose subscription was dropped without unsubscribing
        self.listeners.retain(|(_, tx)| tx.send(event).is_ok());
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_loaded(&self) -> bool {
        self.duration.is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSource for SimulatedSource {
    fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (tx, rx) = mpsc::channel();
        if let Some(duration) = self.duration {
            // Catch the new subscriber up; sends cannot fail while rx is alive
            let _ = tx.send(PlaybackEvent::DurationKnown(duration));
            let _ = tx.send(PlaybackEvent::TimeProgressed(self.position));
            if !self.paused {
                let _ = tx.send(PlaybackEvent::Resumed);
            }
        }
        self.listeners.push((id, tx));

        Subscription::new(id, rx)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }

    fn set_position(&mut self, seconds: f64) -> Result<(), SourceError> {
        let duration = self.duration.ok_or(SourceError::NotReady)?;
        if !seconds.is_finite() {
            return Err(SourceError::PositionRejected { position: seconds });
        }
        self.position = seconds.clamp(0.0, duration);
        self.emit(PlaybackEvent::TimeProgressed(self.position));
        Ok(())
    }

    fn play(&mut self) -> Result<(), SourceError> {
        if self.duration.is_none() {
            return Err(SourceError::NotReady);
        }
        if self.paused {
            self.paused = false;
            self.emit(PlaybackEvent::Resumed);
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SourceError> {
        if !self.paused {
            self.paused = true;
            self.emit(PlaybackEvent::Paused);
        }
        Ok(())
    }
}
