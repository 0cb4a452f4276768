//! Non-destructive edit metadata: an ordered sequence of media segments that
//! records cuts, insertions, and splits without touching the underlying media.
//! Rendering, persistence, and undo are the host's job; this crate only owns
//! the sequence and its invariants.

pub mod error;
pub mod ident;
pub mod model;

pub use error::TimelineError;
pub use ident::{IdProvider, RandomIds, SequentialIds};
pub use model::segment::Segment;
pub use model::timeline::{EPSILON, InsertAt, SplitConfig, Timeline};
