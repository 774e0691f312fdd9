//! Test utilities for the gig-calendar finder
//!
//! This crate provides builders for temporary photo trees and for
//! locations synthesized from known event data.

pub mod builders;

// Re-export commonly used types
pub use builders::{SampleEvent, SampleEventBuilder, TestTree, TreeBuilder, synthesize_location};
