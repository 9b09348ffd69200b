use serde::{Deserialize, Serialize};

/// Paginated listing envelope returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub pages: u32,
    pub results: u32,
}

impl<T> Page<T> {
    /// Wrap `data` as the first and only page
    pub fn single(data: Vec<T>) -> Self {
        let results = u32::try_from(data.len()).unwrap_or(u32::MAX);
        Self {
            data,
            page: 1,
            pages: 1,
            results,
        }
    }
}

/// Pagination parameters sent as query pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Params {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        pairs
    }
}

/// Filter object sent in the `X-Filter` header
pub type Filter = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_page_counts_results() {
        let page = Page::single(vec!["a", "b", "c"]);
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 1);
        assert_eq!(page.results, 3);
    }

    #[test]
    fn test_single_page_empty() {
        let page: Page<u8> = Page::single(Vec::new());
        assert!(page.data.is_empty());
        assert_eq!(page.results, 0);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn test_page_serializes_envelope_shape() {
        let page = Page::single(vec![json!({"id": 1}), json!({"id": 2})]);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"data": [{"id": 1}, {"id": 2}], "page": 1, "pages": 1, "results": 2})
        );
    }

    #[test]
    fn test_params_query_pairs() {
        assert!(Params::default().query_pairs().is_empty());

        let params = Params {
            page: Some(2),
            page_size: Some(25),
        };
        assert_eq!(
            params.query_pairs(),
            vec![("page", "2".to_string()), ("page_size", "25".to_string())]
        );
    }
}
