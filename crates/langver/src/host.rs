use langver_version::{LanguageVersion, VersionFormatError, parse};

/// Pull the language version out of a runtime's self-reported version string.
///
/// Runtimes report something like `2.19.6 (stable) (Tue Jan 3 2023) on "linux_x64"`. Everything
/// from the first ASCII whitespace character on is dropped, as is everything from the second `.`
/// on. What's left must be a strict `major.minor` version. It's a prefix of `raw`, so error
/// offsets apply to both.
pub fn host_language_version(raw: &str) -> Result<LanguageVersion, VersionFormatError> {
    let release = raw
        .split(|c: char| c.is_ascii_whitespace())
        .next()
        .unwrap_or_default();
    let end = release
        .match_indices('.')
        .nth(1)
        .map_or(release.len(), |(i, _)| i);
    parse(&release[..end])
}
