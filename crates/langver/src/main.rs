use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use langver_version::LanguageVersion;
use miette::Result;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod features;
pub mod host;

use commands::check::{CheckArgs, check};
use commands::compare::compare;
use commands::parse::parse;
use features::Feature;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Parse a language version and print its canonical form")]
    Parse {
        /// The version to parse, e.g. 2.19
        version: String,
    },

    #[command(about = "Show which language features a version supports")]
    Check(CheckArgs),

    #[command(about = "Compare two language versions")]
    Compare {
        a: LanguageVersion,
        b: LanguageVersion,
    },

    #[command(about = "List the known language features")]
    Features,
}

fn init_logging(verbose: &Verbosity<InfoLevel>) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbose.tracing_level_filter().into())
        .with_env_var("LANGVER_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.verbose);

    match cli.command {
        Commands::Parse { version } => parse(&version)?,
        Commands::Check(args) => check(args)?,
        Commands::Compare { a, b } => compare(a, b),
        Commands::Features => {
            for feature in Feature::all() {
                anstream::println!("{}: {}", feature.name(), feature.since());
            }
        }
    }

    Ok(())
}
