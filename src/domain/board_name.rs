use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Validated name of a board (e.g. `default`, `work`, `groceries`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoardName(String);

impl BoardName {
    /// Name of the board that records every other board
    pub const REGISTRY: &'static str = "boards";
    pub const DEFAULT: &'static str = "default";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_registry(&self) -> bool {
        self.0 == Self::REGISTRY
    }

    pub(crate) fn registry() -> Self {
        Self(Self::REGISTRY.to_string())
    }
}

impl Default for BoardName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for BoardName {
    type Err = crate::error::KantanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        // Names become part of a file name
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\'])
            && !name.chars().any(char::is_control);

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(crate::error::KantanError::InvalidBoardName(s.to_string()))
        }
    }
}

impl TryFrom<String> for BoardName {
    type Error = crate::error::KantanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoardName> for String {
    fn from(name: BoardName) -> Self {
        name.0
    }
}

impl fmt::Display for BoardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(BoardName::from_str("work").unwrap().as_str(), "work");
        assert_eq!(BoardName::from_str("  todo list ").unwrap().as_str(), "todo list");
        assert!(BoardName::from_str("boards").unwrap().is_registry());
    }

    #[test]
    fn test_invalid_names() {
        assert!(BoardName::from_str("").is_err());
        assert!(BoardName::from_str("   ").is_err());
        assert!(BoardName::from_str("../etc").is_err());
        assert!(BoardName::from_str("a/b").is_err());
        assert!(BoardName::from_str("a\\b").is_err());
        assert!(BoardName::from_str(".hidden").is_err());
    }

    #[test]
    fn test_default_name() {
        assert_eq!(BoardName::default().as_str(), "default");
    }
}
