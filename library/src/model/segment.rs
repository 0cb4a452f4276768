use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TimelineError;
use crate::ident::IdProvider;

/// One playable interval `[start, end)` of the source media identified by
/// `root_ref`. Segments are created only by the timeline operations; `root_ref`
/// never changes once a segment exists, and every fragment a split produces
/// carries the root of the segment it was cut from.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Segment {
    /// Original source media this segment's content derives from.
    #[serde(rename = "rootRef")]
    pub root_ref: String,
    #[serde(with = "uuid::serde::simple")]
    pub id: Uuid,
    /// Interval start in seconds (inclusive).
    pub start: f64,
    /// Interval end in seconds (exclusive).
    pub end: f64,
}

impl Segment {
    pub(crate) fn mint(
        ids: &mut dyn IdProvider,
        root_ref: &str,
        start: f64,
        end: f64,
    ) -> Result<Self, TimelineError> {
        Ok(Self {
            root_ref: root_ref.to_string(),
            id: ids.mint()?,
            start,
            end,
        })
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Half-open membership test: true for `start <= t < end`.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::SequentialIds;

    fn sample() -> Segment {
        let mut ids = SequentialIds::new();
        Segment::mint(&mut ids, "clip-a", 1.5, 4.25).unwrap()
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["end", "id", "rootRef", "start"]);
    }

    #[test]
    fn test_id_serializes_without_separators() {
        let json = serde_json::to_value(sample()).unwrap();
        let id = json["id"].as_str().unwrap();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_round_trip() {
        let seg = sample();
        let json = serde_json::to_string(&seg).unwrap();
        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seg);
    }

    #[test]
    fn test_contains_is_half_open() {
        let seg = sample();
        assert!(seg.contains(1.5));
        assert!(seg.contains(4.0));
        assert!(!seg.contains(4.25));
        assert!(!seg.contains(1.0));
    }
}
