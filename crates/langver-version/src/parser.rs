use crate::{LanguageVersion, VersionFormatError};

/// Parse a `major.minor` language version.
///
/// Each part is a run of ASCII digits without extra leading zeros, and nothing else is
/// allowed: no whitespace, no third part, no pre-release suffix.
pub fn parse(source: &str) -> Result<LanguageVersion, VersionFormatError> {
    if source.is_empty() {
        return Err(VersionFormatError::new(
            "Language version can't be empty",
            source,
            0,
        ));
    }

    let mut scanner = Scanner::new(source);

    let major = scanner.digits(Part::Major)?;
    if !scanner.eat(b'.') {
        return Err(scanner.error(r#"Expected "." after major version"#));
    }
    let minor = scanner.digits(Part::Minor)?;
    if !scanner.is_done() {
        return Err(scanner.error("Unexpected character after minor version"));
    }

    let major = scanner.number(Part::Major, major)?;
    let minor = scanner.number(Part::Minor, minor)?;
    Ok(LanguageVersion::new(major, minor))
}

/// Like [`parse`], but discards the reason the input was rejected.
pub fn try_parse(source: &str) -> Option<LanguageVersion> {
    parse(source).ok()
}

#[derive(Debug, Clone, Copy)]
enum Part {
    Major,
    Minor,
}

impl Part {
    fn name(self) -> &'static str {
        match self {
            Part::Major => "major",
            Part::Minor => "minor",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Part::Major => "Major",
            Part::Minor => "Minor",
        }
    }
}

/// Where a run of digits sits in the source.
#[derive(Debug, Clone, Copy)]
struct Digits {
    start: usize,
    end: usize,
}

struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> VersionFormatError {
        self.error_at(message, self.pos)
    }

    fn error_at(&self, message: impl Into<String>, offset: usize) -> VersionFormatError {
        VersionFormatError::new(message, self.source, offset)
    }

    /// Consume one version part: a digit, then as many more digits as follow.
    fn digits(&mut self, part: Part) -> Result<Digits, VersionFormatError> {
        let start = self.pos;
        let leading_zero = match self.peek() {
            Some(b) if b.is_ascii_digit() => b == b'0',
            _ => {
                return Err(self.error(format!(
                    "Expected digit at start of {} version",
                    part.name()
                )));
            }
        };
        self.pos += 1;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        if leading_zero && self.pos - start > 1 {
            return Err(self.error_at(
                format!("{} version has unnecessary leading zeros", part.title()),
                start,
            ));
        }

        Ok(Digits {
            start,
            end: self.pos,
        })
    }

    fn number(&self, part: Part, digits: Digits) -> Result<u32, VersionFormatError> {
        // Only digits were consumed, so the only way this fails is overflow.
        self.source[digits.start..digits.end]
            .parse::<u32>()
            .ok()
            .filter(|&n| LanguageVersion::in_range(n))
            .ok_or_else(|| {
                self.error_at(
                    format!(
                        "{} version must be between {} and {}",
                        part.title(),
                        LanguageVersion::MIN_VALUE,
                        LanguageVersion::MAX_VALUE
                    ),
                    digits.start,
                )
            })
    }
}
