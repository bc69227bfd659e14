//! Session record and role-based navigation.
//!
//! After login the remote API returns a bearer token and the user profile. The
//! frontend persists that pair as JSON in browser local storage under
//! [`SESSION_KEY`]; the layout reads it back to decide whether to show the login
//! page and which sections the navigation offers.

use crate::model::user::Role;
use serde::{Deserialize, Serialize};

pub const SESSION_KEY: &str = "userInfo";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub token: String,
    pub user: SessionUser,
}

impl UserInfo {
    /// Parses the stored session; anything unreadable or without a token counts
    /// as logged out.
    pub fn from_storage(raw: Option<&str>) -> Option<UserInfo> {
        raw.and_then(|raw| serde_json::from_str::<UserInfo>(raw).ok())
            .filter(|info| !info.token.trim().is_empty())
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Dashboard sections, one per page of the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Orders,
    Conflicts,
    Reclamations,
    Users,
    Laboratories,
    Bakeries,
    Products,
    Announcements,
}

impl Section {
    pub fn label(self, role: Role) -> &'static str {
        match (self, role) {
            (Section::Orders, Role::Delivery) => "Livraisons",
            (Section::Orders, Role::Admin) => "Commandes & livraisons",
            (Section::Orders, _) => "Commandes",
            (Section::Conflicts, _) => "Litiges",
            (Section::Reclamations, _) => "Réclamations",
            (Section::Users, _) => "Utilisateurs",
            (Section::Laboratories, _) => "Laboratoires",
            (Section::Bakeries, _) => "Boulangeries",
            (Section::Products, Role::Laboratory) => "Mes produits",
            (Section::Products, _) => "Catalogue",
            (Section::Announcements, _) => "Annonces",
        }
    }

    /// Material icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Section::Orders => "local_shipping",
            Section::Conflicts => "report_problem",
            Section::Reclamations => "assignment_late",
            Section::Users => "people",
            Section::Laboratories => "science",
            Section::Bakeries => "storefront",
            Section::Products => "bakery_dining",
            Section::Announcements => "campaign",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::Orders => "orders",
            Section::Conflicts => "conflicts",
            Section::Reclamations => "reclamations",
            Section::Users => "users",
            Section::Laboratories => "laboratories",
            Section::Bakeries => "bakeries",
            Section::Products => "products",
            Section::Announcements => "announcements",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Section> {
        [
            Section::Orders,
            Section::Conflicts,
            Section::Reclamations,
            Section::Users,
            Section::Laboratories,
            Section::Bakeries,
            Section::Products,
            Section::Announcements,
        ]
        .into_iter()
        .find(|s| s.slug() == slug)
    }
}

pub fn sections_for(role: Role) -> &'static [Section] {
    match role {
        Role::Admin => &[
            Section::Orders,
            Section::Conflicts,
            Section::Users,
            Section::Laboratories,
            Section::Bakeries,
            Section::Products,
            Section::Announcements,
        ],
        Role::Bakery => &[
            Section::Orders,
            Section::Reclamations,
            Section::Products,
            Section::Announcements,
        ],
        Role::Laboratory => &[Section::Orders, Section::Products, Section::Announcements],
        Role::Delivery => &[Section::Orders, Section::Announcements],
    }
}

pub fn home_section(role: Role) -> Section {
    sections_for(role)[0]
}

pub fn can_access(role: Role, section: Section) -> bool {
    sections_for(role).contains(&section)
}

/// URL path of a section (`/admin/users`, `/bakery/orders`...).
pub fn section_path(role: Role, section: Section) -> String {
    format!("/{}/{}", role.as_str(), section.slug())
}

/// Resolves a location path to the section it names, falling back to the role
/// home when the path is unknown or belongs to another role.
pub fn resolve_path(role: Role, path: &str) -> Section {
    let mut parts = path.trim_matches('/').split('/');
    let path_role = parts.next().and_then(Role::parse);
    let section = parts.next().and_then(Section::from_slug);
    match (path_role, section) {
        (Some(r), Some(s)) if r == role && can_access(role, s) => s,
        _ => home_section(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORED: &str = r#"{"token":"abc.def","user":{"_id":"u1","name":"Nina","email":"nina@fournil.fr","role":"bakery"}}"#;

    #[test]
    fn stored_session_is_parsed() {
        let info = UserInfo::from_storage(Some(STORED)).unwrap();
        assert_eq!(info.user.role, Role::Bakery);
        assert_eq!(info.bearer(), "Bearer abc.def");
    }

    #[test]
    fn missing_or_broken_session_means_logged_out() {
        assert!(UserInfo::from_storage(None).is_none());
        assert!(UserInfo::from_storage(Some("not json")).is_none());
        assert!(UserInfo::from_storage(Some(
            r#"{"token":" ","user":{"id":"u1","name":"N","email":"n@x.fr","role":"admin"}}"#
        ))
        .is_none());
    }

    #[test]
    fn navigation_is_role_scoped() {
        assert!(can_access(Role::Admin, Section::Conflicts));
        assert!(!can_access(Role::Bakery, Section::Conflicts));
        assert!(can_access(Role::Bakery, Section::Reclamations));
        assert!(!can_access(Role::Delivery, Section::Products));
        for role in Role::ALL {
            assert!(can_access(role, Section::Announcements));
            assert_eq!(home_section(role), Section::Orders);
        }
    }

    #[test]
    fn paths_resolve_or_fall_back_home() {
        assert_eq!(section_path(Role::Admin, Section::Users), "/admin/users");
        assert_eq!(resolve_path(Role::Admin, "/admin/users"), Section::Users);
        assert_eq!(resolve_path(Role::Bakery, "/admin/users"), Section::Orders);
        assert_eq!(resolve_path(Role::Delivery, "/delivery/products"), Section::Orders);
        assert_eq!(resolve_path(Role::Laboratory, "/"), Section::Orders);
    }
}
