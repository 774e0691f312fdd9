//! Gig Calendar finder
//!
//! Command-line front end over `gigcal_core`: loads the layered
//! configuration, runs the requested metadata source and renders the
//! results.

pub mod config;
pub mod error;
pub mod orchestrators;
pub mod output;
pub mod terminal;
