/*
 * Responsibility
 * - Content status enumeration and the read policy for brews
 * - Pure functions, no side effects, no error conditions
 */
use serde::{Deserialize, Serialize};

use crate::domain::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Published,
    Draft,
    Archived,
}

impl ContentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "published" => Some(Self::Published),
            "draft" => Some(Self::Draft),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }
}

/// Unpublished brews are readable by admin and superuser only.
pub fn can_read_unpublished_brew(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin) | Some(Role::Superuser))
}

/// Published brews are readable by anyone, session or not; everything else
/// falls through to the unpublished-read policy.
pub fn can_access_brew(status: ContentStatus, role: Option<Role>) -> bool {
    if status == ContentStatus::Published {
        return true;
    }
    can_read_unpublished_brew(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_is_readable_by_everyone() {
        for role in [None, Some(Role::User), Some(Role::Admin), Some(Role::Superuser)] {
            assert!(can_access_brew(ContentStatus::Published, role));
        }
    }

    #[test]
    fn draft_requires_admin_or_superuser() {
        assert!(!can_access_brew(ContentStatus::Draft, None));
        assert!(!can_access_brew(ContentStatus::Draft, Some(Role::User)));
        assert!(can_access_brew(ContentStatus::Draft, Some(Role::Admin)));
        assert!(can_access_brew(ContentStatus::Draft, Some(Role::Superuser)));
    }

    #[test]
    fn archived_follows_the_unpublished_policy() {
        assert!(!can_access_brew(ContentStatus::Archived, Some(Role::User)));
        assert!(can_access_brew(ContentStatus::Archived, Some(Role::Admin)));
    }

    #[test]
    fn parse_round_trips() {
        for s in ["published", "draft", "archived"] {
            assert_eq!(ContentStatus::parse(s).unwrap().as_str(), s);
        }
        assert_eq!(ContentStatus::parse("deleted"), None);
    }
}
