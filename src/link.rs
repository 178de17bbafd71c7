//! Builds links to pages of the host site.

use url::form_urlencoded;

/// Query parameter carrying the category uid on list pages.
pub const CATEGORY_PARAMETER: &str = "category";

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base_url}?id={page_id}` followed by the URL-encoded `params`.
    pub fn page_link(&self, page_id: i64, params: &[(&str, String)]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("id", &page_id.to_string());
        for (key, value) in params {
            query.append_pair(key, value);
        }
        format!("{}?{}", self.base_url, query.finish())
    }

    pub fn category_link(&self, list_page_id: i64, category_uid: i64) -> String {
        self.page_link(
            list_page_id,
            &[(CATEGORY_PARAMETER, category_uid.to_string())],
        )
    }
}
