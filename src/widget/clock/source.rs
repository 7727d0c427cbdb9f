//! PlaybackSource trait and related types.

use std::sync::mpsc::{Receiver, TryRecvError};

/// Event published by a playback source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    /// Playback position moved (seconds)
    TimeProgressed(f64),
    /// Playback paused
    Paused,
    /// Playback started or resumed
    Resumed,
    /// Track duration became known or changed (seconds)
    DurationKnown(f64),
}

/// Identifier handed out by [`PlaybackSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// A live subscription to a source's events.
///
/// Events arrive in emission order and are drained by the owner of
/// the subscription. Dropping it stops delivery.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    events: Receiver<PlaybackEvent>,
}

impl Subscription {
    pub fn new(id: SubscriptionId, events: Receiver<PlaybackEvent>) -> Self {
        Self { id, events }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take the next pending event without blocking.
    ///
    /// Returns `None` when no event is pending or the source went away.
    pub fn try_next(&self) -> Option<PlaybackEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Errors a playback source can report for a command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("Playback source is not ready")]
    NotReady,

    #[error("Playback source rejected position {position}")]
    PositionRejected { position: f64 },

    #[error("Playback source failed: {0}")]
    Failed(String),
}

/// The external component that produces audio and reports its progress.
///
/// Implementations wrap a real player (or a simulation) and publish
/// [`PlaybackEvent`]s to every live subscription.
pub trait PlaybackSource {
    /// Start delivering events to a new subscription.
    fn subscribe(&mut self) -> Subscription;

    /// Stop delivering events to a subscription.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Move the playback position (seconds).
    ///
    /// Sources that are not loaded yet return `SourceError::NotReady`.
    fn set_position(&mut self, seconds: f64) -> Result<(), SourceError>;

    /// Start or resume playback.
    fn play(&mut self) -> Result<(), SourceError>;

    /// Pause playback.
    fn pause(&mut self) -> Result<(), SourceError>;
}

impl<S: PlaybackSource + ?Sized> PlaybackSource for Box<S> {
    fn subscribe(&mut self) -> Subscription {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }

    fn set_position(&mut self, seconds: f64) -> Result<(), SourceError> {
        (**self).set_position(seconds)
    }

    fn play(&mut self) -> Result<(), SourceError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), SourceError> {
        (**self).pause()
    }
}
