//! URL-style round-tripping of a [`ViewQuery`].
//!
//! `search` is omitted when empty; `page` is always written and defaults to
//! 1 when missing or unparseable. Page size is not part of the location and
//! comes from the caller.

use crate::view::ViewQuery;

const SEARCH_PARAM: &str = "search";
const PAGE_PARAM: &str = "page";

impl ViewQuery {
    /// Encode as `search=<term>&page=<n>`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        match self.search_term() {
            Some(term) => format!(
                "{SEARCH_PARAM}={}&{PAGE_PARAM}={}",
                urlencoding::encode(term),
                self.page.max(1)
            ),
            None => format!("{PAGE_PARAM}={}", self.page.max(1)),
        }
    }

    /// Decode a query string (with or without a leading `?`).
    ///
    /// Unknown parameters are ignored. `+` decodes to a space.
    #[must_use]
    pub fn from_query_string(raw: &str, page_size: usize) -> Self {
        let mut query = Self::new(page_size);

        for pair in raw.trim_start_matches('?').split('&') {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let Ok(value) = urlencoding::decode(&value) else {
                tracing::debug!(param = name, "ignoring undecodable query parameter");
                continue;
            };

            match name {
                SEARCH_PARAM => {
                    let term = value.trim();
                    query.search = (!term.is_empty()).then(|| term.to_string());
                }
                PAGE_PARAM => {
                    query.page = value.trim().parse::<usize>().unwrap_or(1).max(1);
                }
                _ => {}
            }
        }

        query
    }
}
