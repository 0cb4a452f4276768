pub mod segment;
pub mod timeline;

pub use segment::Segment;
pub use timeline::{EPSILON, InsertAt, SplitConfig, Timeline};
