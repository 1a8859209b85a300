pub mod aggregator;

pub use aggregator::{rank, BaselineDelta, RankedList};
