use clap::Args;
use langver_version::LanguageVersion;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use super::{Error, Result};
use crate::{features::Feature, host::host_language_version};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckArgs {
    /// The language version to check, e.g. 2.19
    #[arg(long, env = "LANGVER_VERSION")]
    pub language_version: Option<LanguageVersion>,

    /// A runtime's self-reported version string, e.g. "2.19.6 (stable) on linux_x64".
    /// Ignored when --language-version is set.
    #[arg(long, env = "LANGVER_HOST_VERSION")]
    pub host_version: Option<String>,

    /// Only check these features
    #[arg(long = "feature", value_enum)]
    pub features: Vec<Feature>,

    /// Output format for the feature list
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, PartialEq)]
struct FeatureSupport {
    feature: &'static str,
    since: LanguageVersion,
    supported: bool,
}

/// Work out which version was asked about: an explicit version wins over a host version string.
fn resolve_version(args: &CheckArgs) -> Result<LanguageVersion> {
    if let Some(version) = args.language_version {
        debug!(%version, "Using the given language version");
        return Ok(version);
    }
    if let Some(raw) = &args.host_version {
        let version = host_language_version(raw)?;
        debug!(host = raw, %version, "Using the host's language version");
        return Ok(version);
    }
    Err(Error::MissingVersion)
}

fn support_table(version: LanguageVersion, features: &[Feature]) -> Vec<FeatureSupport> {
    let features = if features.is_empty() {
        Feature::all()
    } else {
        features
    };
    features
        .iter()
        .map(|&feature| FeatureSupport {
            feature: feature.name(),
            since: feature.since(),
            supported: feature.is_supported_by(version),
        })
        .collect()
}

pub fn check(args: CheckArgs) -> Result<()> {
    let version = resolve_version(&args)?;
    let entries = support_table(version, &args.features);

    match args.format {
        OutputFormat::Json => {
            anstream::println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            anstream::println!("Language version {}", version.cyan());
            for entry in &entries {
                if entry.supported {
                    anstream::println!(
                        "{}: {} (since {})",
                        entry.feature,
                        "supported".green(),
                        entry.since
                    );
                } else {
                    anstream::println!(
                        "{}: {} (requires {})",
                        entry.feature,
                        "not supported".red(),
                        entry.since
                    );
                }
            }
        }
    }

    Ok(())
}
