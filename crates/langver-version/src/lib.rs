//! Two-component language versions (`major.minor`) and a strict parser for them.
//!
//! ```
//! use langver_version::{LanguageVersion, parse, try_parse};
//!
//! let version = parse("2.19").unwrap();
//! assert_eq!(version, LanguageVersion::new(2, 19));
//! assert!(version < LanguageVersion::new(3, 0));
//!
//! let err = parse("01.5").unwrap_err();
//! assert_eq!(err.to_string(), "Major version has unnecessary leading zeros (at character 1)");
//! assert_eq!(try_parse("2.5 "), None);
//! ```

mod error;
mod parser;
mod version;

pub use error::VersionFormatError;
pub use parser::{parse, try_parse};
pub use version::LanguageVersion;
