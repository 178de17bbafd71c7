//! Renders categories as text, icons, or both.
//!
//! Entries are joined with `", "` unless every entry in the list came out
//! as a bare icon, in which case the images are concatenated without a
//! separator.

use super::model::{Category, DisplayMode};
use crate::html::escape_html;

pub const ENTRY_SEPARATOR: &str = ", ";

/// A single rendered category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub html: String,
    /// True when the entry is an image with no visible title text.
    pub icon_only: bool,
}

#[derive(Debug, Clone)]
pub struct CategoryRenderer {
    icon_base_url: String,
}

impl CategoryRenderer {
    /// `icon_base_url` is prepended to each category's icon file name.
    pub fn new(icon_base_url: impl Into<String>) -> Self {
        Self {
            icon_base_url: icon_base_url.into(),
        }
    }

    /// Render `categories` in the given order. An empty slice renders as
    /// the empty string.
    pub fn render(&self, categories: &[Category], mode: DisplayMode) -> String {
        let entries: Vec<RenderedEntry> = categories
            .iter()
            .map(|category| self.render_entry(category, mode))
            .collect();
        join_entries(&entries)
    }

    pub fn render_entry(&self, category: &Category, mode: DisplayMode) -> RenderedEntry {
        let title = escape_html(&category.title);

        match (mode, category.icon()) {
            (DisplayMode::Icon, Some(icon)) => RenderedEntry {
                html: self.image(icon, &title),
                icon_only: true,
            },
            (DisplayMode::Both, Some(icon)) => RenderedEntry {
                html: format!("{} {}", self.image(icon, &title), title),
                icon_only: false,
            },
            _ => RenderedEntry {
                html: title,
                icon_only: false,
            },
        }
    }

    fn image(&self, icon: &str, escaped_title: &str) -> String {
        format!(
            "<img src=\"{}{}\" title=\"{}\" alt=\"\" />",
            escape_html(&self.icon_base_url),
            escape_html(icon),
            escaped_title
        )
    }
}

/// Join rendered entries. One entry that is not icon-only is enough to make
/// the whole list comma-separated.
pub fn join_entries(entries: &[RenderedEntry]) -> String {
    let separator = if entries.iter().all(|entry| entry.icon_only) {
        ""
    } else {
        ENTRY_SEPARATOR
    };

    entries
        .iter()
        .map(|entry| entry.html.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
