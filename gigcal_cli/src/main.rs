use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use gigcal_cli::config::{AppConfig, ConfigManager, ImagesOverrides};
use gigcal_cli::error::{CliError, CliResult, ErrorContext};
use gigcal_cli::orchestrators::images_orchestrator::ImagesOrchestrator;
use gigcal_cli::orchestrators::{RunFlags, Source, print_base_config};
use gigcal_cli::output::OutputFormat;
use gigcal_cli::terminal;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finder")]
#[command(author, version, about = "Gig Calendar - find event metadata in photo archives", long_about = None)]
struct Cli {
    /// Enable debug logging and show parse errors
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract event metadata from the directory names of a photo tree
    Images(ImagesArgs),

    /// Event metadata from tickets
    Tickets {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Event metadata from info files
    Info {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,
}

#[derive(Args, Debug, Clone, Copy)]
struct CommonArgs {
    /// Make no changes, only report what would have been changed
    #[arg(long = "dryrun")]
    dry_run: bool,

    /// Display verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct ImagesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Root of the directories to scan for event metadata
    #[arg(long = "rootdir", value_name = "DIR")]
    rootdir: Option<PathBuf>,

    /// Pattern extracting date, performers, venue and promoters from directory paths
    #[arg(long, value_name = "PATTERN")]
    pattern: Option<String>,

    /// Use the root directory's own name as the first path component
    #[arg(long = "include_parent")]
    include_parent: bool,

    /// Comma separated list of strings; directories whose path contains one are skipped
    #[arg(long = "ignore_dirs", value_name = "LIST")]
    ignore_dirs: Option<String>,

    /// Take the event date from EXIF data
    #[arg(long = "date_from_exif")]
    date_from_exif: bool,

    /// Fail on malformed numbers instead of reading them as zero
    #[arg(long = "strict_numeric")]
    strict_numeric: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

impl CommonArgs {
    fn flags(self, debug: bool) -> RunFlags {
        RunFlags {
            dry_run: self.dry_run,
            verbose: self.verbose,
            debug,
        }
    }
}

impl ImagesArgs {
    fn overrides(self) -> ImagesOverrides {
        ImagesOverrides {
            rootdir: self.rootdir,
            pattern: self.pattern,
            include_parent: self.include_parent,
            ignore_dirs: self.ignore_dirs,
            strict_numeric: self.strict_numeric,
            date_from_exif: self.date_from_exif,
            format: self.format,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    // Initialize logging based on debug flag
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("gigcal_core", log::LevelFilter::Debug)
            .filter_module("gigcal_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(error) = run(cli) {
        eprint!("{}", error.format_for_user(debug));
        std::process::exit(error.exit_code() as i32);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Images(args) => {
            let flags = args.common.flags(cli.debug);
            let mut config = load_config()?;
            config.apply_images_overrides(args.overrides());
            log::debug!("Effective configuration: {config:?}");

            let use_color = terminal::use_color(config.output.color_enabled);
            colored::control::set_override(use_color);

            let orchestrator = ImagesOrchestrator::new(config, flags, use_color)?;
            orchestrator.run(&mut io::stdout().lock(), &mut io::stderr().lock())?;
        }
        Commands::Tickets { common } => {
            print_base_config(&mut io::stdout().lock(), Source::Tickets, common.flags(cli.debug))?;
        }
        Commands::Info { common } => {
            print_base_config(&mut io::stdout().lock(), Source::Info, common.flags(cli.debug))?;
        }
        Commands::Config { command } => {
            config_command(command)?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

fn load_config() -> CliResult<AppConfig> {
    let manager = ConfigManager::new();
    manager.load().map_err(|e| {
        CliError::from(e).with_context("config", &manager.config_path().display().to_string())
    })
}

fn config_command(command: ConfigCommand) -> CliResult<()> {
    let manager = ConfigManager::new();

    match command {
        ConfigCommand::Show => {
            print!("{}", manager.show()?);
        }
        ConfigCommand::Path => {
            println!("{}", manager.config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut io::stdout());
}
