use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::ident::IdProvider;
use crate::model::segment::Segment;

/// Absolute tolerance used to classify a split whose cut touches the
/// segment's own start boundary.
pub const EPSILON: f64 = 1e-6;

/// Where `Timeline::insert` places the new segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertAt {
    /// Append after the last segment, valid at any length including empty.
    End,
    /// Insert before the segment currently at this index; the index may equal
    /// the current length, which is equivalent to `End`.
    Index(usize),
}

/// Tuning knobs for `Timeline::split_with`.
///
/// `boundary_gap` is the offset applied at the touching edge of a prefix or
/// suffix cut. Earlier releases hard-coded it to 1, a leftover from an
/// integer-indexed model; with fractional-second units the correct value is
/// zero, so that is the default and the unit offset is opt-in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitConfig {
    pub epsilon: f64,
    pub boundary_gap: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            boundary_gap: 0.0,
        }
    }
}

impl SplitConfig {
    /// Compatibility mode reproducing the historical unit-offset boundaries
    /// (`end + 1` / `start - 1`).
    pub fn unit_gap() -> Self {
        Self {
            boundary_gap: 1.0,
            ..Self::default()
        }
    }
}

/// Ordered sequence of segments in playback order.
///
/// The order is caller-defined: it is never re-sorted by interval or root.
/// Segments referencing different roots may interleave freely and the same
/// root may appear at non-adjacent positions. The timeline exclusively owns
/// its segments; collaborators get copies, never live references.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Timeline {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Segment> {
        self.segments.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Sum of segment durations, i.e. the length of the rendered output.
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(Segment::duration).sum()
    }

    /// Create a segment playing `[start, end)` of `root_ref` and place it at
    /// `at`. Later segments shift one position towards the end. Returns a copy
    /// of the created segment.
    ///
    /// The position is validated before an identifier is minted, so a failed
    /// call neither mutates the sequence nor consumes an id.
    pub fn insert(
        &mut self,
        ids: &mut dyn IdProvider,
        root_ref: &str,
        start: f64,
        end: f64,
        at: InsertAt,
    ) -> Result<Segment, TimelineError> {
        let len = self.segments.len();
        let pos = match at {
            InsertAt::End => len,
            InsertAt::Index(pos) if pos <= len => pos,
            InsertAt::Index(pos) => return Err(TimelineError::InvalidPosition { pos, len }),
        };

        let segment = Segment::mint(ids, root_ref, start, end)?;
        self.segments.insert(pos, segment.clone());
        debug!(
            "Inserted segment {} (root {}) at position {}",
            segment.id, segment.root_ref, pos
        );
        Ok(segment)
    }

    /// Remove the segment at `pos`. Later segments shift one position towards
    /// the start; the removed identifier is forgotten, never reused.
    pub fn delete(&mut self, pos: usize) -> Result<(), TimelineError> {
        let len = self.segments.len();
        if pos >= len {
            return Err(TimelineError::InvalidPosition { pos, len });
        }
        let removed = self.segments.remove(pos);
        debug!("Deleted segment {} at position {}", removed.id, pos);
        Ok(())
    }

    /// Split the segment at `pos` with the default `SplitConfig`.
    pub fn split(
        &mut self,
        ids: &mut dyn IdProvider,
        pos: usize,
        start: f64,
        end: f64,
    ) -> Result<Vec<Segment>, TimelineError> {
        self.split_with(ids, pos, start, end, SplitConfig::default())
    }

    /// Cut `[start, end)` out of the segment at `pos`, replacing it in place
    /// with the produced fragments. Every fragment carries the root of the
    /// segment being split and a freshly minted id. Three mutually exclusive
    /// cases, in priority order:
    ///
    /// 1. prefix — `start` touches the segment's own start (within
    ///    `cfg.epsilon`): two fragments, `[start, end)` and
    ///    `[end + gap, S.end)`.
    /// 2. suffix — `end >= S.end`: two fragments, `[S.start, start - gap)`
    ///    and `[start, S.end)`.
    /// 3. interior: three contiguous fragments `[S.start, start)`,
    ///    `[start, end)`, `[end, S.end)`.
    ///
    /// Returns the produced fragments in timeline order. All ids are minted
    /// before the sequence is touched, so an identity failure leaves the
    /// timeline exactly as it was.
    pub fn split_with(
        &mut self,
        ids: &mut dyn IdProvider,
        pos: usize,
        start: f64,
        end: f64,
        cfg: SplitConfig,
    ) -> Result<Vec<Segment>, TimelineError> {
        let len = self.segments.len();
        let Some(target) = self.segments.get(pos) else {
            return Err(TimelineError::InvalidPosition { pos, len });
        };
        let root = target.root_ref.clone();
        let (t_start, t_end) = (target.start, target.end);
        let gap = cfg.boundary_gap;

        let produced = if start <= t_start + cfg.epsilon {
            vec![
                Segment::mint(ids, &root, start, end)?,
                Segment::mint(ids, &root, end + gap, t_end)?,
            ]
        } else if end >= t_end {
            vec![
                Segment::mint(ids, &root, t_start, start - gap)?,
                Segment::mint(ids, &root, start, t_end)?,
            ]
        } else {
            vec![
                Segment::mint(ids, &root, t_start, start)?,
                Segment::mint(ids, &root, start, end)?,
                Segment::mint(ids, &root, end, t_end)?,
            ]
        };

        let tail = self.segments.split_off(pos + 1);
        self.segments.truncate(pos);
        self.segments.extend(produced.iter().cloned());
        self.segments.extend(tail);
        debug!(
            "Split segment at position {} (root {}) into {} fragments",
            pos,
            root,
            produced.len()
        );
        Ok(produced)
    }
}
