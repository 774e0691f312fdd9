//! Command orchestrators for business logic
//!
//! This module provides orchestrators that coordinate between the CLI layer
//! and the core library services.

pub mod images_orchestrator;

use std::fmt;
use std::io::{self, Write};

/// Metadata source a run reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Images,
    Tickets,
    Info,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Tickets => "tickets",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flags shared by every source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Report only; nothing is changed
    pub dry_run: bool,
    pub verbose: bool,
    pub debug: bool,
}

/// Print the configuration common to every source
pub fn print_base_config<W: Write + ?Sized>(
    out: &mut W,
    source: Source,
    flags: RunFlags,
) -> io::Result<()> {
    writeln!(out, "Source: {source}")?;
    writeln!(out, "Dryrun: {}", flags.dry_run)?;
    writeln!(out, "Verbose: {}", flags.verbose)?;
    writeln!(out, "Debug: {}", flags.debug)
}
