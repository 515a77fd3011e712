use tracing::debug;

use super::Result;

/// Print the canonical form of `version`, or fail with a diagnostic pointing at the bad character.
pub fn parse(version: &str) -> Result<()> {
    let parsed = langver_version::parse(version)?;
    debug!(input = version, %parsed, "Parsed language version");
    anstream::println!("{parsed}");
    Ok(())
}
