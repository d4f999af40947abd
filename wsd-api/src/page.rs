use serde::{Deserialize, Serialize};

/// `{data, total}` envelope of the paginated endpoints.
///
/// The server also echoes `page` and `page_size`; they are ignored since the
/// client already knows what it asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Item type without a `Default` impl, like the API records.
    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: String,
    }

    #[test]
    fn missing_fields_decode_for_non_default_items() {
        let page: Page<Row> = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);

        let page: Page<Row> = serde_json::from_str(r#"{"total":3,"data":[{"id":"a"}]}"#).unwrap();
        assert_eq!(page.data, vec![Row { id: "a".into() }]);
        assert_eq!(page.total, 3);
    }
}
