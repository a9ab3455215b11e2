use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::User;

/// Sortable user attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    FirstName,
    LastName,
    Email,
    Role,
    Id,
    IsActive,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FirstName => "firstName",
            SortKey::LastName => "lastName",
            SortKey::Email => "email",
            SortKey::Role => "role",
            SortKey::Id => "id",
            SortKey::IsActive => "isActive",
        }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            SortKey::FirstName => locale_compare(&a.first_name, &b.first_name),
            SortKey::LastName => locale_compare(&a.last_name, &b.last_name),
            SortKey::Email => locale_compare(&a.email, &b.email),
            SortKey::Role => locale_compare(a.role.as_str(), b.role.as_str()),
            SortKey::Id => a.id.cmp(&b.id),
            // inactive (0) before active (1)
            SortKey::IsActive => a.is_active.cmp(&b.is_active),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key '{}', expected one of: name, first-name, last-name, email, role, id, active",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    /// Accepts the camelCase field names as well as the CLI spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "name" | "firstname" => Ok(SortKey::FirstName),
            "lastname" => Ok(SortKey::LastName),
            "email" => Ok(SortKey::Email),
            "role" => Ok(SortKey::Role),
            "id" => Ok(SortKey::Id),
            "active" | "isactive" | "status" => Ok(SortKey::IsActive),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header arrow for the active column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Requesting the current key flips its direction; any other key starts ascending.
    pub fn toggled(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec::ascending(key),
        }
    }

    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Dictionary-style ordering. Accents and case are ignored first ("Émile" <
/// "Zoe"), then the unaccented form wins, then lowercase before uppercase, so
/// the result stays total ("ann" < "bob" < "Bob").
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.nfd().count().cmp(&b.nfd().count()))
        .then_with(|| b.cmp(a))
}

/// NFD, combining marks dropped, lowercased.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Stable sort; without a spec the input order is kept.
pub fn sort_users(users: &mut [&User], spec: Option<SortSpec>) {
    if let Some(spec) = spec {
        users.sort_by(|a, b| spec.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn user(id: u64, first: &str, last: &str, role: Role, active: bool) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@x.com", first.to_lowercase()),
            role,
            is_active: active,
        }
    }

    #[test]
    fn test_toggle_cycle_for_same_key() {
        let first = SortSpec::toggled(None, SortKey::FirstName);
        assert_eq!(first.direction, SortDirection::Asc);

        let second = SortSpec::toggled(Some(first), SortKey::FirstName);
        assert_eq!(second.direction, SortDirection::Desc);

        let third = SortSpec::toggled(Some(second), SortKey::FirstName);
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn test_other_key_resets_to_ascending() {
        let desc = SortSpec {
            key: SortKey::Email,
            direction: SortDirection::Desc,
        };
        let next = SortSpec::toggled(Some(desc), SortKey::Id);
        assert_eq!(next, SortSpec::ascending(SortKey::Id));
    }

    #[test]
    fn test_locale_compare_ignores_case() {
        assert_eq!(locale_compare("ann", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("Zed", "adam"), Ordering::Greater);
        assert_eq!(locale_compare("Eve", "Eve"), Ordering::Equal);
        assert_eq!(locale_compare("bob", "Bob"), Ordering::Less);
    }

    #[test]
    fn test_locale_compare_folds_accents() {
        assert_eq!(locale_compare("Émile", "Zoe"), Ordering::Less);
        assert_eq!(locale_compare("élodie", "frank"), Ordering::Less);
        assert_eq!(locale_compare("Åsa", "Anders"), Ordering::Greater);
        assert_eq!(locale_compare("Zoë", "Zoe"), Ordering::Greater);
        assert_eq!(locale_compare("Émile", "Émile"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_among_plain_ones() {
        let a = user(1, "Zoe", "A", Role::Viewer, true);
        let b = user(2, "Émile", "B", Role::Viewer, true);
        let c = user(3, "Frank", "C", Role::Viewer, true);
        let mut users = vec![&a, &b, &c];

        sort_users(&mut users, Some(SortSpec::ascending(SortKey::FirstName)));
        let names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, vec!["Émile", "Frank", "Zoe"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let a = user(1, "Ann", "Zed", Role::Viewer, true);
        let b = user(2, "Bob", "Young", Role::Admin, true);
        let c = user(3, "Cid", "Xu", Role::Viewer, true);
        let mut users = vec![&a, &b, &c];

        sort_users(&mut users, Some(SortSpec::ascending(SortKey::Role)));
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_numeric_and_flag_ordering() {
        let a = user(10, "Ann", "A", Role::Viewer, true);
        let b = user(2, "Bob", "B", Role::Viewer, false);
        let mut users = vec![&a, &b];

        sort_users(&mut users, Some(SortSpec::ascending(SortKey::Id)));
        assert_eq!(users[0].id, 2);

        sort_users(
            &mut users,
            Some(SortSpec {
                key: SortKey::IsActive,
                direction: SortDirection::Desc,
            }),
        );
        assert!(users[0].is_active);
    }

    #[test]
    fn test_no_spec_keeps_order() {
        let a = user(3, "Cid", "C", Role::Viewer, true);
        let b = user(1, "Ann", "A", Role::Viewer, true);
        let mut users = vec![&a, &b];

        sort_users(&mut users, None);
        assert_eq!(users[0].id, 3);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::FirstName);
        assert_eq!("lastName".parse::<SortKey>().unwrap(), SortKey::LastName);
        assert_eq!("last-name".parse::<SortKey>().unwrap(), SortKey::LastName);
        assert_eq!("isActive".parse::<SortKey>().unwrap(), SortKey::IsActive);
        assert!("age".parse::<SortKey>().is_err());
    }
}
