//! Images source orchestrator
//!
//! Validates the configured pattern, scans the photo tree for directories
//! at the pattern's depth, matches each one and reports the results.

use super::{RunFlags, Source, print_base_config};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, create_formatter, format_summary};
use gigcal_core::{
    BatchResult, MatchOptions, Pattern, ScanOptions, ScanReport, TreeScanner, candidate_location,
    match_candidates,
};
use log::debug;
use std::io::{self, Write};

/// Orchestrator for the images source
pub struct ImagesOrchestrator {
    config: AppConfig,
    pattern: Pattern,
    flags: RunFlags,
    use_color: bool,
}

impl ImagesOrchestrator {
    /// Create the orchestrator, rejecting an invalid pattern up front
    pub fn new(config: AppConfig, flags: RunFlags, use_color: bool) -> CliResult<Self> {
        let pattern = Pattern::compile(&config.images.pattern)
            .map_err(|e| CliError::from_pattern_error(e, &config.images.pattern))?;

        debug!(
            "Compiled pattern '{pattern}' ({} placeholders)",
            pattern.placeholders().count()
        );

        Ok(Self {
            config,
            pattern,
            flags,
            use_color,
        })
    }

    /// Depth at which candidate directories sit below the root
    pub fn depth(&self) -> usize {
        self.pattern
            .separator_depth(self.config.images.include_parent)
    }

    /// Run the scan and print to `out`.
    ///
    /// With a machine readable format only the records go to `out`; the
    /// configuration and summary go to `diag`.
    pub fn run(&self, out: &mut dyn Write, diag: &mut dyn Write) -> CliResult<BatchResult> {
        let machine = self.config.output.format.is_machine_readable();

        {
            let info: &mut dyn Write = if machine { &mut *diag } else { &mut *out };
            self.print_config(info)?;
        }

        if self.flags.dry_run {
            debug!("Dry run: no changes will be made");
        }

        let depth = self.depth();
        let report = self.scan(depth)?;

        if self.flags.verbose || self.flags.debug {
            let info: &mut dyn Write = if machine { &mut *diag } else { &mut *out };
            writeln!(
                info,
                "Ignored {} directories matching ignore list",
                report.ignored
            )?;
        }

        if !machine {
            writeln!(out, "Directories at depth {depth}:")?;
        }

        let batch = if self.pattern.is_empty() {
            if self.flags.verbose && !machine {
                for candidate in &report.candidates {
                    writeln!(out, "  {}", candidate_location(candidate))?;
                }
            }
            BatchResult::default()
        } else {
            let options =
                MatchOptions::new().with_strict_numeric(self.config.images.strict_numeric);
            match_candidates(&self.pattern, &report.candidates, &options)
        };

        self.print_outcomes(out, &batch)?;

        let info: &mut dyn Write = if machine { &mut *diag } else { &mut *out };
        write!(info, "{}", format_summary(&batch))?;

        Ok(batch)
    }

    fn print_config(&self, out: &mut dyn Write) -> io::Result<()> {
        let images = &self.config.images;

        print_base_config(out, Source::Images, self.flags)?;
        writeln!(out, "DateFromExif: {}", images.date_from_exif)?;
        writeln!(out, "RootDir: {}", images.rootdir.display())?;
        writeln!(out, "Pattern: {}", images.pattern)?;
        writeln!(out, "Include Parent: {}", images.include_parent)?;
        writeln!(out, "IgnoreDirs: [{}]", images.ignore_dirs.join(", "))
    }

    fn scan(&self, depth: usize) -> CliResult<ScanReport> {
        let options = ScanOptions::new()
            .with_depth(depth)
            .with_ignore(self.config.ignore_filter())
            .with_include_parent(self.config.images.include_parent);

        let scanner = TreeScanner::new(&self.config.images.rootdir, options)
            .map_err(CliError::from_scan_error)?;
        let report = scanner.scan().map_err(CliError::from_scan_error)?;

        debug!(
            "Scan found {} candidates ({} directories ignored)",
            report.candidates.len(),
            report.ignored
        );
        Ok(report)
    }

    /// Records are shown when verbose, match errors when debugging. Machine
    /// readable formats always get every outcome.
    fn print_outcomes(&self, out: &mut dyn Write, batch: &BatchResult) -> CliResult<()> {
        let format = self.config.output.format;
        let formatter = create_formatter(format, self.use_color);

        if format != OutputFormat::Text {
            writeln!(out, "{}", formatter.format_batch(batch)?)?;
            return Ok(());
        }

        for outcome in &batch.outcomes {
            let show = if outcome.is_success() {
                self.flags.verbose && !self.flags.debug
            } else {
                self.flags.debug
            };

            if show {
                writeln!(out, "{}", formatter.format_single(outcome)?)?;
            }
        }

        Ok(())
    }
}
