//! Shared collaborators and errors for the HTML views.

use thiserror::Error;

use crate::category::model::DisplayMode;
use crate::category::renderer::CategoryRenderer;
use crate::config::AppConfig;
use crate::event::model::TimeFrame;
use crate::html::escape_html;
use crate::i18n::Translator;
use crate::link::LinkBuilder;
use crate::store::StoreError;
use crate::template::{Markers, TemplateEngine, TemplateError, MESSAGE};

#[derive(Debug, Error)]
pub enum ViewError {
    /// The view was assembled without a collaborator it cannot work without.
    #[error("view is missing its {0}")]
    MissingCollaborator(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Which events the list views show, and how they render categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSettings {
    pub pages: Vec<i64>,
    pub recursive: bool,
    pub time_frame: TimeFrame,
    pub display_mode: DisplayMode,
    pub list_page_id: Option<i64>,
}

impl ListSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            pages: config.pages.clone(),
            recursive: config.recursive,
            time_frame: config.time_frame,
            display_mode: config.category_display,
            list_page_id: config.list_page_id,
        }
    }
}

/// Everything a view needs to turn records into HTML.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub renderer: CategoryRenderer,
    pub templates: TemplateEngine,
    pub translator: Translator,
    pub links: LinkBuilder,
}

impl ViewContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            renderer: CategoryRenderer::new(config.icon_base_url.clone()),
            templates: TemplateEngine::with_built_ins(),
            translator: Translator::new(&config.locale),
            links: LinkBuilder::new(config.base_url.clone()),
        }
    }

    /// Render the translated label `key` in the `message` template.
    pub fn message(&self, key: &str) -> Result<String, TemplateError> {
        let mut markers = Markers::new();
        markers.insert("MESSAGE", escape_html(&self.translator.translate(key)));
        self.templates.render(MESSAGE, &markers)
    }
}

/// Parse a record uid from request input. Anything that is not a positive
/// integer yields `None`, which callers treat as "not found".
pub fn parse_uid(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|uid| *uid > 0)
}

/// Parse a time frame from request input, ignoring unknown values.
pub fn requested_time_frame(value: Option<&str>) -> Option<TimeFrame> {
    let value = value?;
    let parsed = TimeFrame::parse(value);
    if parsed.is_none() {
        log::warn!("Ignoring unknown time frame '{}'", value);
    }
    parsed
}
