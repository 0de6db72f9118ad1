/*
 * Responsibility
 * - Role and account-status enumerations
 * - Role::satisfies: the role x required-minimum decision table
 */
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Superuser,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            "superuser" => Some(Self::Superuser),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superuser => "superuser",
        }
    }

    /// Decision table: caller role x required minimum -> allow.
    ///
    /// "admin" routes admit admin and superuser; "superuser" routes admit
    /// superuser only. A "user" minimum admits everyone with a session.
    pub fn satisfies(self, min: Role) -> bool {
        use Role::*;
        match (self, min) {
            (_, User) => true,
            (Admin, Admin) | (Superuser, Admin) => true,
            (User, Admin) => false,
            (Superuser, Superuser) => true,
            (User, Superuser) | (Admin, Superuser) => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl AccountStatus {
    /// Anything the store reports other than "active" is treated as blocked;
    /// the guard only distinguishes active from not-active.
    pub fn parse(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            _ => Self::Blocked,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_table_is_exhaustive() {
        use Role::*;
        let table = [
            (User, User, true),
            (Admin, User, true),
            (Superuser, User, true),
            (User, Admin, false),
            (Admin, Admin, true),
            (Superuser, Admin, true),
            (User, Superuser, false),
            (Admin, Superuser, false),
            (Superuser, Superuser, true),
        ];
        for (role, min, expected) in table {
            assert_eq!(role.satisfies(min), expected, "{role} vs min {min}");
        }
    }

    #[test]
    fn parses_known_roles_only() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("superuser"), Some(Role::Superuser));
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn non_active_statuses_are_blocked() {
        assert!(AccountStatus::parse("active").is_active());
        assert!(!AccountStatus::parse("blocked").is_active());
        assert!(!AccountStatus::parse("pending_review").is_active());
    }
}
