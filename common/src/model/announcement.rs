use crate::model::user::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Normal, Priority::High, Priority::Urgent];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Basse",
            Priority::Normal => "Normale",
            Priority::High => "Haute",
            Priority::Urgent => "Urgente",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Production,
    Delivery,
    Hygiene,
    Event,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Production,
        Category::Delivery,
        Category::Hygiene,
        Category::Event,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Production => "production",
            Category::Delivery => "delivery",
            Category::Hygiene => "hygiene",
            Category::Event => "event",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "Général",
            Category::Production => "Production",
            Category::Delivery => "Livraison",
            Category::Hygiene => "Hygiène",
            Category::Event => "Événement",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub author: String,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Ids of the users who marked the announcement as read.
    #[serde(default)]
    pub read_by: Vec<String>,
}

impl Announcement {
    pub fn is_read_by(&self, user_id: &str) -> bool {
        self.read_by.iter().any(|id| id == user_id)
    }
}

/// Pinned announcements first, then newest first. Priority only changes the
/// badge, not the order.
///
/// `created_at` is an ISO-8601 string, so lexical order is chronological order.
pub fn sort_for_display(announcements: &mut [Announcement]) {
    announcements.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then(b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(id: &str, pinned: bool, priority: Priority, created_at: &str) -> Announcement {
        Announcement {
            id: id.to_string(),
            title: id.to_string(),
            content: String::new(),
            priority,
            category: Category::General,
            pinned,
            author: None,
            created_at: Some(created_at.to_string()),
            comments: Vec::new(),
            read_by: vec!["u1".to_string()],
        }
    }

    #[test]
    fn pinned_then_newest() {
        let mut list = vec![
            announcement("old-normal", false, Priority::Normal, "2024-01-01T08:00:00Z"),
            announcement("new-normal", false, Priority::Normal, "2024-03-01T08:00:00Z"),
            announcement("urgent", false, Priority::Urgent, "2023-12-01T08:00:00Z"),
            announcement("pinned-low", true, Priority::Low, "2022-01-01T08:00:00Z"),
        ];
        sort_for_display(&mut list);
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["pinned-low", "new-normal", "old-normal", "urgent"]);
    }

    #[test]
    fn read_state_is_per_user() {
        let a = announcement("a", false, Priority::Low, "2024-01-01T00:00:00Z");
        assert!(a.is_read_by("u1"));
        assert!(!a.is_read_by("u2"));
    }
}
