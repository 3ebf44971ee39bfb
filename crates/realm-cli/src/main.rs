//! CLI frontend for Realm.

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "realm",
    about = "Realm: a kingdom, its barracks, a fighting memory, and the watchtowers",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON config file (armament, recall_mode, chronicle_capacity)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log dispatch details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Visit the kingdom and hear its proclamation
    Kingdom,

    /// Summon warriors from the barracks
    Summon {
        /// How many warriors to summon
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Weapon to arm them with: sword or spear (default: from config)
        #[arg(short, long)]
        armament: Option<String>,
    },

    /// Ask the fighting memory to recall a technique
    Recall {
        /// Technique name (e.g. doubleCut, parry)
        technique: String,

        /// Stop at the first technique that answers
        #[arg(long)]
        first: bool,
    },

    /// Raise an alarm at the watchtowers
    Alarm {
        /// What the lookout saw
        message: String,
    },

    /// List known techniques and watchtowers
    Roster,

    /// Tell the whole tale, from kingdom to watchtowers
    Tale,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Kingdom => commands::kingdom::run(),
            Commands::Summon { count, armament } => {
                commands::summon::run(&config, count, armament.as_deref())
            }
            Commands::Recall { technique, first } => {
                commands::recall::run(&config, &technique, first)
            }
            Commands::Alarm { message } => commands::alarm::run(&config, &message),
            Commands::Roster => commands::roster::run(),
            Commands::Tale => commands::tale::run(&config),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
