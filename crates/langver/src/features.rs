use langver_version::LanguageVersion;
#[cfg(test)]
use proptest_derive::Arbitrary;

/// Language features, and the version each one first shipped in.
///
/// There is no wildcard variant, so adding a feature means giving it a name and a version
/// below, and listing it in [`Feature::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Feature {
    ExtensionMethods,
    NullSafety,
    NonfunctionTypeAliases,
    GenericMetadata,
    TripleShift,
    EnhancedEnums,
    SuperParameters,
    NamedArgsAnywhere,
    Records,
    Patterns,
    ClassModifiers,
    ExtensionTypes,
}

impl Feature {
    /// Every feature, oldest first.
    pub fn all() -> &'static [Feature] {
        &[
            Feature::ExtensionMethods,
            Feature::NullSafety,
            Feature::NonfunctionTypeAliases,
            Feature::GenericMetadata,
            Feature::TripleShift,
            Feature::EnhancedEnums,
            Feature::SuperParameters,
            Feature::NamedArgsAnywhere,
            Feature::Records,
            Feature::Patterns,
            Feature::ClassModifiers,
            Feature::ExtensionTypes,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::ExtensionMethods => "extension-methods",
            Feature::NullSafety => "null-safety",
            Feature::NonfunctionTypeAliases => "nonfunction-type-aliases",
            Feature::GenericMetadata => "generic-metadata",
            Feature::TripleShift => "triple-shift",
            Feature::EnhancedEnums => "enhanced-enums",
            Feature::SuperParameters => "super-parameters",
            Feature::NamedArgsAnywhere => "named-args-anywhere",
            Feature::Records => "records",
            Feature::Patterns => "patterns",
            Feature::ClassModifiers => "class-modifiers",
            Feature::ExtensionTypes => "extension-types",
        }
    }

    /// The first language version with this feature.
    pub fn since(self) -> LanguageVersion {
        let (major, minor) = match self {
            Feature::ExtensionMethods => (2, 7),
            Feature::NullSafety => (2, 12),
            Feature::NonfunctionTypeAliases => (2, 13),
            Feature::GenericMetadata | Feature::TripleShift => (2, 14),
            Feature::EnhancedEnums | Feature::SuperParameters | Feature::NamedArgsAnywhere => {
                (2, 17)
            }
            Feature::Records | Feature::Patterns | Feature::ClassModifiers => (3, 0),
            Feature::ExtensionTypes => (3, 3),
        };
        LanguageVersion::new(major, minor)
    }

    pub fn is_supported_by(self, version: LanguageVersion) -> bool {
        version >= self.since()
    }
}
