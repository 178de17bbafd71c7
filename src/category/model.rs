use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    #[schema(example = 12)]
    pub uid: i64,
    #[schema(example = "Leadership & Management")]
    pub title: String,
    #[schema(example = "leadership.gif")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(uid: i64, title: impl Into<String>) -> Self {
        Self {
            uid,
            title: title.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The icon file name, treating an empty string the same as no icon.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|icon| !icon.is_empty())
    }
}

/// How category lists are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Text,
    Icon,
    Both,
}

impl DisplayMode {
    /// Parse a display mode setting. Unknown values mean `Text`.
    pub fn from_setting(value: &str) -> Self {
        match value.trim() {
            "icon" => DisplayMode::Icon,
            "both" => DisplayMode::Both,
            _ => DisplayMode::Text,
        }
    }
}

impl FromStr for DisplayMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_setting(s))
    }
}

/// Sort categories by title (ordinal, case-sensitive), then by uid.
pub fn sort_by_title(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.title.cmp(&b.title).then(a.uid.cmp(&b.uid)));
}
