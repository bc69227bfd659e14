use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page request rendered as query parameters (`?page=2&limit=10&search=pain`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub status: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            status: None,
        }
    }
}

impl PageQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.map(str::to_string);
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page.max(1), self.limit);
        if let Some(search) = &self.search {
            query.push_str("&search=");
            query.push_str(&encode_component(search));
        }
        if let Some(status) = &self.status {
            query.push_str("&status=");
            query.push_str(&encode_component(status));
        }
        query
    }

    /// Query for the page after `received`, or `None` once the last page (or an
    /// empty one) has come back.
    pub fn following<T>(&self, received: &Paginated<T>) -> Option<PageQuery> {
        let limit = if received.limit == 0 { self.limit } else { received.limit };
        let page = received.page.max(self.page);
        if received.results.is_empty() || page >= total_pages(received.total, limit) {
            return None;
        }
        Some(PageQuery {
            page: page + 1,
            ..self.clone()
        })
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Envelope returned by the paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(alias = "data", alias = "items")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }
}

pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(u64::from(limit)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_encodes_search_and_skips_blank() {
        assert_eq!(PageQuery::default().to_query_string(), "page=1&limit=10");
        assert_eq!(
            PageQuery::page(3).with_search("pain au chocolat").to_query_string(),
            "page=3&limit=10&search=pain%20au%20chocolat"
        );
        assert_eq!(PageQuery::page(0).with_search("  ").to_query_string(), "page=1&limit=10");
        assert_eq!(
            PageQuery::default().with_status(Some("PENDING")).to_query_string(),
            "page=1&limit=10&status=PENDING"
        );
    }

    #[test]
    fn following_walks_to_the_last_page() {
        let query = PageQuery {
            limit: 2,
            ..PageQuery::default()
        }
        .with_status(Some("DELIVERED"));
        let first = Paginated {
            results: vec![1, 2],
            total: 5,
            page: 1,
            limit: 2,
        };
        let second = query.following(&first).unwrap();
        assert_eq!(second.to_query_string(), "page=2&limit=2&status=DELIVERED");

        let last = Paginated {
            results: vec![5],
            total: 5,
            page: 3,
            limit: 2,
        };
        assert_eq!(PageQuery::page(3).following(&last), None);
    }

    #[test]
    fn following_stops_on_an_empty_page() {
        let empty: Paginated<u32> = Paginated {
            results: Vec::new(),
            total: 40,
            page: 1,
            limit: 10,
        };
        assert_eq!(PageQuery::default().following(&empty), None);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 0), 1);
    }

    #[test]
    fn envelope_accepts_data_alias() {
        let page: Paginated<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"total":23,"page":2,"limit":10}"#).unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.total_pages(), 3);
    }
}
