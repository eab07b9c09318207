use std::fmt;

/// Identity of one cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full summary collection.
    Collection,
    /// One detail record.
    Details(String),
    /// A set of detail records, stored as the sorted, comma-joined uid set.
    MultiDetails(String),
}

impl QueryKey {
    pub fn details(uid: impl Into<String>) -> Self {
        Self::Details(uid.into())
    }

    /// Key for a set of uids. Order and repetition of the input do not
    /// matter: `["9", "3"]` and `["3", "9", "3"]` share one key.
    pub fn multi_details<S: AsRef<str>>(uids: &[S]) -> Self {
        let mut ids: Vec<&str> = uids.iter().map(AsRef::as_ref).collect();
        ids.sort_unstable();
        ids.dedup();
        Self::MultiDetails(ids.join(","))
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => f.write_str("basic-starships"),
            Self::Details(uid) => write!(f, "details:{uid}"),
            Self::MultiDetails(uids) => write!(f, "multi-details:{uids}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_details_ignores_order() {
        assert_eq!(
            QueryKey::multi_details(&["9", "3", "10"]),
            QueryKey::multi_details(&["10", "9", "3"])
        );
    }

    #[test]
    fn multi_details_is_lexicographic_and_deduplicated() {
        let key = QueryKey::multi_details(&["9", "10", "3", "9"]);
        assert_eq!(key.to_string(), "multi-details:10,3,9");
    }

    #[test]
    fn display_names() {
        assert_eq!(QueryKey::Collection.to_string(), "basic-starships");
        assert_eq!(QueryKey::details("12").to_string(), "details:12");
    }
}
