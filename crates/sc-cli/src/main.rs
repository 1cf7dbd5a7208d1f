//! CLI frontend for Skillcheck.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sc",
    about = "Skillcheck: ability-check bonuses as markdown roll links",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one ability check
    Check {
        /// Text shown for the check, usually a skill name
        skill: String,

        /// Ability code: STR, DEX, CON, INT, WIS or CHA
        ability: String,

        /// Proficiency tier code: " ", P or E (default: none)
        #[arg(short, long)]
        prof: Option<String>,

        /// Character sheet to take modifiers from (default: built-in tables)
        #[arg(short, long)]
        sheet: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Render the built-in notebook checks
    Demo,

    /// Render every check on a character sheet
    Sheet {
        /// Path to a JSON character sheet
        file: PathBuf,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// List the standard skills and their default abilities
    Skills,
}

#[derive(Args)]
struct FormatArgs {
    /// Roll mode: regular, adv or dis
    #[arg(short, long, default_value = "regular")]
    mode: String,

    /// Link target: app (dice://) or site (dice.run)
    #[arg(short, long, default_value = "app")]
    target: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            skill,
            ability,
            prof,
            sheet,
            format,
        } => commands::format(&format.mode, &format.target).and_then(|fmt| {
            commands::check::run(&skill, &ability, prof.as_deref(), sheet.as_deref(), fmt)
        }),
        Commands::Demo => commands::demo::run(),
        Commands::Sheet { file, format } => commands::format(&format.mode, &format.target)
            .and_then(|fmt| commands::sheet::run(&file, fmt)),
        Commands::Skills => commands::skills::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
