//! Laboratories and bakeries share the same record: a named site with a chef,
//! an address, a production capacity and a hygiene inspection grade.

use serde::{Deserialize, Serialize};

/// Official hygiene grade, `A` being the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum HygieneRating {
    #[default]
    A,
    B,
    C,
    D,
    E,
}

impl HygieneRating {
    pub const ALL: [HygieneRating; 5] = [
        HygieneRating::A,
        HygieneRating::B,
        HygieneRating::C,
        HygieneRating::D,
        HygieneRating::E,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HygieneRating::A => "A",
            HygieneRating::B => "B",
            HygieneRating::C => "C",
            HygieneRating::D => "D",
            HygieneRating::E => "E",
        }
    }

    pub fn parse(value: &str) -> Option<HygieneRating> {
        HygieneRating::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// CSS class used by the rating badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            HygieneRating::A | HygieneRating::B => "badge badge-success",
            HygieneRating::C => "badge badge-warning",
            HygieneRating::D | HygieneRating::E => "badge badge-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Establishment {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub chef: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub hygiene_rating: HygieneRating,
    #[serde(default)]
    pub last_inspection: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

pub type Laboratory = Establishment;
pub type Bakery = Establishment;
