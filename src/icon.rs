//! Icon resolution - symbolic icon names mapped to glyphs.

use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("Unknown icon name: {0}")]
    UnknownIcon(String),
}

/// Icons the field widgets can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Content is masked; clicking reveals it.
    Eye,
    /// Content is visible; clicking masks it.
    EyeSlash,
    /// Satisfied hint.
    Check,
    /// Unsatisfied hint.
    Times,
}

impl IconName {
    pub const ALL: [IconName; 4] = [
        IconName::Eye,
        IconName::EyeSlash,
        IconName::Check,
        IconName::Times,
    ];

    /// Catalog key of the icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Eye => "FaEye",
            IconName::EyeSlash => "FaEyeSlash",
            IconName::Check => "FaCheck",
            IconName::Times => "FaTimes",
        }
    }

    /// Test id a UI layer attaches to the rendered icon.
    pub fn test_id(&self) -> String {
        format!("wizard-icon-{}", self.as_str())
    }
}

impl FromStr for IconName {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconName::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| IconError::UnknownIcon(s.to_string()))
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of renderable glyphs, supplied by the UI layer.
pub trait IconCatalog {
    fn glyph(&self, icon: IconName) -> &str;
}

/// Plain unicode glyphs, for terminals and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeIcons;

impl IconCatalog for UnicodeIcons {
    fn glyph(&self, icon: IconName) -> &str {
        match icon {
            IconName::Eye => "👁",
            IconName::EyeSlash => "🙈",
            IconName::Check => "✔",
            IconName::Times => "✖",
        }
    }
}

/// Looks up a glyph by catalog name.
///
/// # Errors
/// Returns [`IconError::UnknownIcon`] for names outside [`IconName`].
pub fn resolve_icon<'a, C: IconCatalog + ?Sized>(
    catalog: &'a C,
    name: &str,
) -> Result<&'a str, IconError> {
    let icon = name.parse::<IconName>()?;
    Ok(catalog.glyph(icon))
}
