//! Locale dictionaries for user-facing labels and messages.

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const DEFAULT_LOCALE: &str = "en";

pub const LABEL_NO_CATEGORIES: &str = "label_no_categories";
pub const LABEL_TITLE: &str = "label_title";
pub const LABEL_DATE: &str = "label_date";
pub const LABEL_CATEGORIES: &str = "label_categories";
pub const MESSAGE_MISSING_CATEGORY: &str = "message_missing_category";
pub const MESSAGE_NO_RESULTS: &str = "message_no_results";
pub const MESSAGE_WILL_BE_ANNOUNCED: &str = "message_will_be_announced";
pub const MESSAGE_PUBLISHING_SUCCESSFUL: &str = "message_publishing_successful";
pub const MESSAGE_PUBLISHING_FAILED: &str = "message_publishing_failed";

type Dictionary = HashMap<&'static str, &'static str>;

lazy_static! {
    static ref DICTIONARIES: HashMap<&'static str, Dictionary> = {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(
            "en",
            HashMap::from([
                (LABEL_NO_CATEGORIES, "There are no categories."),
                (LABEL_TITLE, "Title"),
                (LABEL_DATE, "Date"),
                (LABEL_CATEGORIES, "Categories"),
                (MESSAGE_MISSING_CATEGORY, "The requested category does not exist."),
                (MESSAGE_NO_RESULTS, "There are no events that match your criteria."),
                (MESSAGE_WILL_BE_ANNOUNCED, "will be announced"),
                (
                    MESSAGE_PUBLISHING_SUCCESSFUL,
                    "The event has been published successfully.",
                ),
                (
                    MESSAGE_PUBLISHING_FAILED,
                    "The event could not be published. It may already have been published.",
                ),
            ]),
        );
        dictionaries.insert(
            "de",
            HashMap::from([
                (LABEL_NO_CATEGORIES, "Es gibt keine Kategorien."),
                (LABEL_TITLE, "Titel"),
                (LABEL_DATE, "Datum"),
                (LABEL_CATEGORIES, "Kategorien"),
                (MESSAGE_MISSING_CATEGORY, "Die angeforderte Kategorie existiert nicht."),
                (MESSAGE_NO_RESULTS, "Es gibt keine Veranstaltungen, die Ihren Kriterien entsprechen."),
                (MESSAGE_WILL_BE_ANNOUNCED, "wird bekanntgegeben"),
                (
                    MESSAGE_PUBLISHING_SUCCESSFUL,
                    "Die Veranstaltung wurde erfolgreich veröffentlicht.",
                ),
                (
                    MESSAGE_PUBLISHING_FAILED,
                    "Die Veranstaltung konnte nicht veröffentlicht werden. Möglicherweise wurde sie bereits veröffentlicht.",
                ),
            ]),
        );
        dictionaries
    };
}

/// Looks up labels for one locale.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: &'static str,
}

impl Translator {
    /// Unknown locales fall back to English.
    pub fn new(locale: &str) -> Self {
        match DICTIONARIES.get_key_value(locale) {
            Some((&known, _)) => Self { locale: known },
            None => {
                log::warn!(
                    "No labels for locale '{}', falling back to '{}'",
                    locale,
                    DEFAULT_LOCALE
                );
                Self {
                    locale: DEFAULT_LOCALE,
                }
            }
        }
    }

    pub fn locale(&self) -> &str {
        self.locale
    }

    /// Returns the label for `key`, or the key itself when it is missing.
    pub fn translate(&self, key: &str) -> String {
        DICTIONARIES
            .get(self.locale)
            .and_then(|dictionary| dictionary.get(key))
            .map(|label| label.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}
