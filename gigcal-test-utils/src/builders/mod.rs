//! Test data builders for creating test scenarios

mod event;
mod tree;

pub use event::{SampleEvent, SampleEventBuilder, synthesize_location};
pub use tree::{TestTree, TreeBuilder};
