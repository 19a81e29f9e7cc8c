use serde::{Deserialize, Serialize};

/// One (keyword, value) pair. `keyword` is unique within its owning group;
/// `value` is an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub value: String,
}

/// A tenant's durable document: immutable `group_id` plus its keyword map,
/// in insertion order.
///
/// Older documents may lack the `keyword_map` field entirely; that state is
/// read back as an empty map and mutated in place like any other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub group_id: String,
    #[serde(default)]
    pub keyword_map: Vec<KeywordEntry>,
}

impl Group {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            keyword_map: Vec::new(),
        }
    }

    /// Exact-match scan; the uniqueness invariant guarantees at most one hit.
    pub fn find_entry(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.keyword_map.iter().find(|entry| entry.keyword == keyword)
    }

    pub fn entry_position(&self, keyword: &str) -> Option<usize> {
        self.keyword_map
            .iter()
            .position(|entry| entry.keyword == keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_without_keyword_map_reads_as_empty() {
        let group: Group = serde_json::from_str(r#"{"group_id": "acme"}"#).unwrap();
        assert_eq!(group.group_id, "acme");
        assert!(group.keyword_map.is_empty());
    }

    #[test]
    fn test_find_entry_is_case_sensitive() {
        let mut group = Group::new("acme");
        group.keyword_map.push(KeywordEntry {
            keyword: "Color".to_string(),
            value: "blue".to_string(),
        });

        assert!(group.find_entry("Color").is_some());
        assert!(group.find_entry("color").is_none());
    }
}
