use serde::{Deserialize, Serialize};

/// One row of raw string cells as fetched from a sheet tab. Column index is
/// positionally meaningful per entity; cells may be empty strings.
pub type RawRow = Vec<String>;

/// A show as displayed on the site. `date_text` stays the source of truth
/// for display; chronological logic works on its parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowRecord {
    /// Assigned by the external persistence layer, if any.
    pub id: Option<String>,
    pub date_text: String,
    pub venue: String,
    pub location: String,
    pub ticket_link: String,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_published: bool,
}

fn default_true() -> bool {
    true
}

/// Closed set of media kinds; anything unrecognized in the source data is
/// coerced to `Photo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    /// Default title for an item of this kind when the sheet cell is empty.
    pub fn default_title(&self) -> &'static str {
        match self {
            MediaKind::Photo => "Photo",
            MediaKind::Video => "Video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Option<String>,
    pub kind: MediaKind,
    pub url: String,
    pub thumbnail: Option<String>,
    pub title: String,
    pub description: Option<String>,
    /// Free-text "m:ss"; only meaningful for videos.
    pub duration: Option<String>,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Option<String>,
    pub author: String,
    pub role: String,
    pub content: String,
    pub avatar_url: Option<String>,
    pub order: i64,
}

/// Hero section copy. All eight fields are required strings; the shape-check
/// in `reconcile` validates exactly this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
    pub background_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub about_text: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub copyright: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
}

/// Multilingual wrapper: one sub-record per supported locale. Both slots must
/// independently pass the structural shape-check before a record is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub es: T,
}

impl<T> Localized<T> {
    pub fn for_locale(&self, locale: &str) -> &T {
        match locale {
            crate::constants::SECONDARY_LOCALE => &self.es,
            _ => &self.en,
        }
    }
}
