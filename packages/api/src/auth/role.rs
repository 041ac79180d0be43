use std::fmt;

use crate::models::User;

/// Role names the user form offers.
pub const ROLES: [&str; 2] = ["ADMIN", "USER"];

/// Account role. The API stores it as free text. `ADMIN` and `USER` match
/// in any case, a blank role counts as `USER`, and anything else is kept as
/// typed (surrounding whitespace trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    Other(String),
}

impl Role {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("ADMIN") {
            Role::Admin
        } else if value.is_empty() || value.eq_ignore_ascii_case("USER") {
            Role::User
        } else {
            Role::Other(value.to_string())
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self::parse(&user.role)
    }

    /// Everyone but plain `USER` accounts may open the back-office.
    pub fn can_access_admin(&self) -> bool {
        !matches!(self, Role::User)
    }

    /// Heading shown on the profile card.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            _ => "Standard user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("ADMIN"),
            Role::User => f.write_str("USER"),
            Role::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse(" admin "), Role::Admin);
        assert_eq!(Role::parse("USER"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
        assert_eq!(Role::parse("EDITOR"), Role::Other("EDITOR".into()));
    }

    #[test]
    fn test_other_roles_keep_their_spelling() {
        assert_eq!(Role::parse(" editor "), Role::Other("editor".into()));
        assert_eq!(Role::parse("Moderator").to_string(), "Moderator");
        assert_eq!(Role::parse("user"), Role::User);
    }

    #[test]
    fn test_admin_access() {
        assert!(Role::Admin.can_access_admin());
        assert!(Role::Other("EDITOR".into()).can_access_admin());
        assert!(!Role::User.can_access_admin());
    }

    #[test]
    fn test_display_keeps_wire_name() {
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert_eq!(Role::Other("EDITOR".into()).to_string(), "EDITOR");
        assert_eq!(Role::Admin.label(), "Administrator");
        assert_eq!(Role::Other("EDITOR".into()).label(), "Standard user");
    }
}
