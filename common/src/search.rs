//! Client-side list filtering used by every table page.
//!
//! A record matches when the search term is a case-insensitive substring of at
//! least one of its searchable fields. A blank term matches everything.

use crate::model::announcement::Announcement;
use crate::model::establishment::Establishment;
use crate::model::order::Order;
use crate::model::product::Product;
use crate::model::user::User;

/// Records that expose a few text fields to the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

pub fn matches(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(term, &item.search_fields()))
        .collect()
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.reference_id.as_str(), self.bakery_label()];
        if let Some(user) = &self.delivery_user {
            fields.push(user.name.as_str());
        }
        if let Some(address) = &self.address {
            fields.push(address.as_str());
        }
        fields
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.as_str()]
    }
}

impl Searchable for Establishment {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.chef.as_deref(),
            self.city.as_deref(),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Searchable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        if let Some(author) = &self.author {
            fields.push(author.as_str());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::Role;

    fn user(name: &str, email: &str, role: Role) -> User {
        User {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            active: true,
            created_at: None,
        }
    }

    fn users() -> Vec<User> {
        vec![
            user("Camille Martin", "camille@fournil.fr", Role::Bakery),
            user("Hugo Bernard", "hugo@labo-central.fr", Role::Laboratory),
            user("Inès Petit", "ines@livraison.fr", Role::Delivery),
        ]
    }

    #[test]
    fn empty_term_returns_everything() {
        let users = users();
        assert_eq!(filter(&users, "").len(), 3);
        assert_eq!(filter(&users, "   ").len(), 3);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let users = users();
        let found = filter(&users, "MARTIN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Camille Martin");

        assert_eq!(filter(&users, "labo").len(), 1);
        assert_eq!(filter(&users, ".fr").len(), 3);
        assert!(filter(&users, "zzz").is_empty());
    }

    #[test]
    fn accented_fields_match() {
        assert!(matches("inès", &["Inès Petit"]));
        assert!(matches("ÉCLAIR", &["éclair au café"]));
    }

    #[test]
    fn establishment_skips_missing_fields() {
        let lab = Establishment {
            name: "Labo Nord".to_string(),
            city: Some("Lille".to_string()),
            ..Establishment::default()
        };
        assert_eq!(lab.search_fields(), vec!["Labo Nord", "Lille"]);
        assert!(matches("lille", &lab.search_fields()));
    }
}
