//! Highlight regions drawn as colored bands over the track.
//!
//! Regions are immutable once built. A `HighlightSet` is replaced
//! wholesale when the host supplies a new list; it is never edited in
//! place, so it shares its storage behind an `Arc`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::render::Color;

/// Errors from building a highlight region.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HighlightError {
    #[error("Highlight bounds must be finite (start: {start}, end: {end})")]
    NonFinite { start: f64, end: f64 },

    #[error("Highlight ends before it starts ({end} < {start})")]
    EndBeforeStart { start: f64, end: f64 },
}

/// A labeled time interval on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRegion", into = "RawRegion")]
pub struct HighlightRegion {
    start_time: f64,
    end_time: f64,
    color: Option<Color>,
    label: Option<String>,
}

impl HighlightRegion {
    /// Create a region covering `[start_time, end_time]` seconds.
    pub fn new(start_time: f64, end_time: f64) -> Result<Self, HighlightError> {
        if !start_time.is_finite() || !end_time.is_finite() {
            return Err(HighlightError::NonFinite {
                start: start_time,
                end: end_time,
            });
        }
        if end_time < start_time {
            return Err(HighlightError::EndBeforeStart {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            start_time,
            end_time,
            color: None,
            label: None,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether `time` falls inside the region (bounds inclusive).
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

/// Wire form of a region, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawRegion {
    #[serde(alias = "startTime")]
    start_time: f64,
    #[serde(alias = "endTime")]
    end_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl TryFrom<RawRegion> for HighlightRegion {
    type Error = HighlightError;

    fn try_from(raw: RawRegion) -> Result<Self, Self::Error> {
        let mut region = HighlightRegion::new(raw.start_time, raw.end_time)?;
        region.color = raw.color;
        region.label = raw.label;
        Ok(region)
    }
}

impl From<HighlightRegion> for RawRegion {
    fn from(region: HighlightRegion) -> Self {
        Self {
            start_time: region.start_time,
            end_time: region.end_time,
            color: region.color,
            label: region.label,
        }
    }
}

/// Ordered set of highlight regions.
///
/// Order matters: later regions paint over earlier ones where they overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightSet {
    regions: Arc<[HighlightRegion]>,
}

impl Default for HighlightSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HighlightSet {
    pub fn new(regions: impl Into<Arc<[HighlightRegion]>>) -> Self {
        Self {
            regions: regions.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &[HighlightRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HighlightRegion> {
        self.regions.iter()
    }

    /// Regions covering `time`, in set order.
    pub fn active_at(&self, time: f64) -> impl Iterator<Item = &HighlightRegion> {
        self.regions.iter().filter(move |r| r.contains(time))
    }

    /// True when both sets share the same storage.
    pub fn ptr_eq(&self, other: &HighlightSet) -> bool {
        Arc::ptr_eq(&self.regions, &other.regions)
    }
}

impl From<Vec<HighlightRegion>> for HighlightSet {
    fn from(regions: Vec<HighlightRegion>) -> Self {
        Self::new(regions)
    }
}

impl<'a> IntoIterator for &'a HighlightSet {
    type Item = &'a HighlightRegion;
    type IntoIter = std::slice::Iter<'a, HighlightRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
