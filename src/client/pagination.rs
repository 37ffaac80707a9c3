//! Pagination types for list requests
//!
//! A list call sends one [`ListRequest`] and receives one [`ListResponse`].
//! Continuation tokens are carried through but no command follows them.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InputError;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Number of items requested per page. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Size as a plain integer.
    #[cfg(test)]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN))
    }
}

impl FromStr for PageSize {
    type Err = InputError;

    /// Parse a user-supplied flag value. Zero, negative and non-numeric input
    /// (including trailing garbage such as `12abc`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| InputError::InvalidPageSize(s.to_string()))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bounded request for one page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
    /// Items per page
    pub page_size: PageSize,
    /// Cursor returned by a previous response
    pub page_token: Option<String>,
}

impl ListRequest {
    /// Request the first page with the given size.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_token: None,
        }
    }

    /// Build a request from the raw `--page-size` flag value.
    pub fn from_flag(page_size: &str) -> Result<Self, InputError> {
        Ok(Self::new(page_size.parse()?))
    }

    /// Continue from a previous response's cursor.
    #[cfg(test)]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Convert to query string parameters (`pageSize`, `pageToken`).
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("pageSize", self.page_size.to_string())];

        if let Some(ref token) = self.page_token {
            params.push(("pageToken", token.clone()));
        }

        params
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Items in server order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Cursor for the next page, if the server has more
    #[serde(
        default,
        deserialize_with = "non_empty_token",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_page_token: Option<String>,
}

impl<T> ListResponse<T> {
    /// Create a single-page response.
    #[cfg(test)]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            next_page_token: None,
        }
    }

    /// Create a response that advertises another page.
    #[cfg(test)]
    pub fn with_next_page(items: Vec<T>, token: impl Into<String>) -> Self {
        Self {
            items,
            next_page_token: Some(token.into()),
        }
    }

    /// Check if the server reported more pages.
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }
}

/// Servers send `""` for "no more pages"; treat it like a missing token.
fn non_empty_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.filter(|t| !t.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_default() {
        assert_eq!(PageSize::default().get(), DEFAULT_PAGE_SIZE);
        assert_eq!(ListRequest::default().page_size.get(), 1000);
    }

    #[test]
    fn test_page_size_parses_positive_integers() {
        for (input, expected) in [("1", 1), ("25", 25), ("1000", 1000), (" 42 ", 42), ("+7", 7)] {
            let size: PageSize = input.parse().unwrap();
            assert_eq!(size.get(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_page_size_rejects_invalid_input() {
        for input in ["abc", "", "0", "-5", "12abc", "1.5", "99999999999"] {
            let err = input.parse::<PageSize>().unwrap_err();
            match err {
                InputError::InvalidPageSize(value) => assert_eq!(value, input),
            }
        }
    }

    #[test]
    fn test_list_request_from_flag() {
        let request = ListRequest::from_flag("50").unwrap();
        assert_eq!(request.page_size.get(), 50);
        assert!(request.page_token.is_none());

        assert!(ListRequest::from_flag("abc").is_err());
    }

    #[test]
    fn test_list_request_to_query() {
        let request = ListRequest::from_flag("50").unwrap();
        assert_eq!(request.to_query_params(), vec![("pageSize", "50".to_string())]);

        let request = request.page_token("cursor-1");
        let query = request.to_query_params();
        assert_eq!(query.len(), 2);
        assert!(query.contains(&("pageToken", "cursor-1".to_string())));
    }

    #[test]
    fn test_list_response_deserialize() {
        let json = r#"{"items": ["a", "b"], "nextPageToken": "next"}"#;
        let response: ListResponse<String> = serde_json::from_str(json).unwrap();
        assert_eq!(response.items, vec!["a", "b"]);
        assert_eq!(response.next_page_token.as_deref(), Some("next"));
        assert!(response.has_next_page());
    }

    #[test]
    fn test_list_response_missing_fields() {
        let response: ListResponse<String> = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_list_response_empty_token_is_absent() {
        let json = r#"{"items": [], "nextPageToken": ""}"#;
        let response: ListResponse<String> = serde_json::from_str(json).unwrap();
        assert!(response.next_page_token.is_none());
    }
}
