//! Marker-based HTML templates.
//!
//! Templates contain `###MARKER###` placeholders. Values are inserted as-is;
//! callers are responsible for escaping them.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;
use thiserror::Error;

lazy_static! {
    static ref MARKER: Regex = Regex::new(r"###([A-Z0-9_]+)###").unwrap();
}

pub const CATEGORY_LIST: &str = "category_list";
pub const CATEGORY_LIST_ITEM: &str = "category_list_item";
pub const EVENT_LIST: &str = "event_list";
pub const EVENT_LIST_ITEM: &str = "event_list_item";
pub const MESSAGE: &str = "message";

const BUILT_IN: [(&str, &str); 5] = [
    (
        CATEGORY_LIST,
        "<ul class=\"tx-seminars-category-list\">###ITEMS###</ul>",
    ),
    (
        CATEGORY_LIST_ITEM,
        "<li class=\"tx-seminars-category\">###CATEGORY###</li>",
    ),
    (
        EVENT_LIST,
        "<table class=\"tx-seminars-event-list\"><thead><tr><th>###LABEL_TITLE###</th><th>###LABEL_DATE###</th><th>###LABEL_CATEGORIES###</th></tr></thead><tbody>###ROWS###</tbody></table>",
    ),
    (
        EVENT_LIST_ITEM,
        "<tr><td class=\"title\">###TITLE###</td><td class=\"date\">###DATE###</td><td class=\"categories\">###CATEGORIES###</td></tr>",
    ),
    (MESSAGE, "<p class=\"tx-seminars-message\">###MESSAGE###</p>"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
}

/// Marker values keyed by marker name without the `###` fences.
pub type Markers<'a> = HashMap<&'a str, String>;

#[derive(Debug, Clone)]
pub struct TemplateEngine {
    templates: HashMap<String, String>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::with_built_ins()
    }
}

impl TemplateEngine {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn with_built_ins() -> Self {
        let mut engine = Self::empty();
        for (name, source) in BUILT_IN {
            engine.register(name, source);
        }
        engine
    }

    /// Add a template, replacing any template with the same name.
    pub fn register(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }

    pub fn render(&self, name: &str, markers: &Markers<'_>) -> Result<String, TemplateError> {
        let source = self
            .templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;

        let rendered = MARKER.replace_all(source, |caps: &Captures<'_>| {
            markers.get(&caps[1]).cloned().unwrap_or_default()
        });
        Ok(rendered.into_owned())
    }
}
