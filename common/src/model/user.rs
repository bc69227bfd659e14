use serde::{Deserialize, Serialize};
use std::fmt;

/// The four dashboard audiences. Serialized lowercase, as the remote API stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Bakery,
    Laboratory,
    Delivery,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Bakery, Role::Laboratory, Role::Delivery];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Bakery => "bakery",
            Role::Laboratory => "laboratory",
            Role::Delivery => "delivery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Bakery => "Boulangerie",
            Role::Laboratory => "Laboratoire",
            Role::Delivery => "Livreur",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::parse("Laboratory"), Some(Role::Laboratory));
        assert_eq!(Role::parse(" delivery "), Some(Role::Delivery));
        assert_eq!(Role::parse("chef"), None);
    }

    #[test]
    fn user_accepts_mongo_style_id_and_defaults_active() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","name":"Alice","email":"alice@example.fr","role":"bakery"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Bakery);
        assert!(user.active);
    }
}
