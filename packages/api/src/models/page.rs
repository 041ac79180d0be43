use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by the projects and timelines endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

impl<T> Page<T> {
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Total reported by the server, or the length of this page.
    pub fn total(&self) -> u64 {
        self.total_elements.unwrap_or(self.content.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_style_envelope() {
        let page: Page<u32> = serde_json::from_str(
            r#"{"content":[1,2],"totalElements":12,"totalPages":6,"number":0,"size":2,"last":false}"#,
        )
        .unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total(), 12);
        assert_eq!(page.total_pages, Some(6));
    }

    #[test]
    fn test_minimal_envelope() {
        let page: Page<u32> = serde_json::from_str(r#"{"content":[5]}"#).unwrap();
        assert_eq!(page.total(), 1);
        assert_eq!(page.into_content(), vec![5]);

        let empty: Page<u32> = serde_json::from_str("{}").unwrap();
        assert!(empty.content.is_empty());
    }
}
