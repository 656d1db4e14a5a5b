//! Category domain entity
//!
//! A Wikipedia category name, normalized to carry the `Category:` namespace.

use serde::Serialize;

use crate::error::DomainError;

pub const CATEGORY_PREFIX: &str = "Category:";

/// Characters MediaWiki never allows in a page title
const ILLEGAL_TITLE_CHARS: &[char] = &['#', '<', '>', '[', ']', '{', '}', '|'];

/// A validated Wikipedia category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    name: String,
}

impl Category {
    /// Validate and normalize a user supplied category name.
    ///
    /// Surrounding whitespace is removed and a leading `Category:` prefix is
    /// stripped so that `"Physics"` and `"Category:Physics"` are the same
    /// category.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let name = trimmed
            .strip_prefix(CATEGORY_PREFIX)
            .unwrap_or(trimmed)
            .trim();

        if name.is_empty() {
            return Err(DomainError::Validation(
                "Category name is required".to_string(),
            ));
        }

        if let Some(c) = name.chars().find(|c| ILLEGAL_TITLE_CHARS.contains(c)) {
            return Err(DomainError::Validation(format!(
                "Category name cannot contain '{}'",
                c
            )));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Name without the namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full page title, e.g. `Category:Physics`
    pub fn title(&self) -> String {
        format!("{}{}", CATEGORY_PREFIX, self.name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
