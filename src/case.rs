use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use std::{convert::Infallible, fmt, str::FromStr};

/// Naming convention applied to a canonical name before querying a source
///
/// Each style is named after the example string it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseStyle {
    /// `ANY_KIND_OF_STRING`
    ScreamingSnake,
    /// `any_kind_of_string`
    Snake,
    /// `any-kind-of-string`
    Kebab,
    /// `ANY-KIND-OF-STRING`
    ScreamingKebab,
    /// `AnyKindOfString`
    Camel,
    /// `anyKindOfString`
    LowerCamel,
    /// Leaves the name untouched
    Verbatim,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 7] = [
        CaseStyle::ScreamingSnake,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::ScreamingKebab,
        CaseStyle::Camel,
        CaseStyle::LowerCamel,
        CaseStyle::Verbatim,
    ];

    /// The example string this style is named after
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::ScreamingSnake => "ANY_KIND_OF_STRING",
            Self::Snake => "any_kind_of_string",
            Self::Kebab => "any-kind-of-string",
            Self::ScreamingKebab => "ANY-KIND-OF-STRING",
            Self::Camel => "AnyKindOfString",
            Self::LowerCamel => "anyKindOfString",
            Self::Verbatim => "",
        }
    }

    /// Map a pattern or variant name to a style. Unknown input maps to
    /// [`CaseStyle::Verbatim`].
    pub fn from_pattern(s: &str) -> Self {
        match s {
            "ANY_KIND_OF_STRING" | "ScreamingSnake" => Self::ScreamingSnake,
            "any_kind_of_string" | "Snake" => Self::Snake,
            "any-kind-of-string" | "Kebab" => Self::Kebab,
            "ANY-KIND-OF-STRING" | "ScreamingKebab" => Self::ScreamingKebab,
            "AnyKindOfString" | "Camel" => Self::Camel,
            "anyKindOfString" | "LowerCamel" => Self::LowerCamel,
            _ => Self::Verbatim,
        }
    }

    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::ScreamingSnake => raw.to_shouty_snake_case(),
            Self::Snake => raw.to_snake_case(),
            Self::Kebab => raw.to_kebab_case(),
            Self::ScreamingKebab => raw.to_shouty_kebab_case(),
            Self::Camel => raw.to_upper_camel_case(),
            Self::LowerCamel => raw.to_lower_camel_case(),
            Self::Verbatim => raw.to_string(),
        }
    }
}

/// Apply `style` to `raw`
pub fn transform(style: CaseStyle, raw: &str) -> String {
    style.apply(raw)
}

impl FromStr for CaseStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_pattern(s))
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbatim => write!(f, "verbatim"),
            other => write!(f, "{}", other.pattern()),
        }
    }
}
