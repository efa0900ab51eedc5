//! Reconciles persisted content blobs into the multilingual shape. Records
//! written before multilingual support lack locale nesting; they are promoted
//! rather than migrated in place.

use crate::constants::{PRIMARY_LOCALE, SECONDARY_LOCALE};
use crate::defaults::SiteDefaults;
use crate::types::{FooterContent, HeroContent, Localized};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

pub const HERO_FIELDS: &[&str] = &[
    "title",
    "subtitle",
    "description",
    "primary_button_text",
    "primary_button_link",
    "secondary_button_text",
    "secondary_button_link",
    "background_image_url",
];

pub const FOOTER_FIELDS: &[&str] = &[
    "about_text",
    "contact_email",
    "phone",
    "address",
    "copyright",
    "facebook_url",
    "instagram_url",
    "youtube_url",
];

/// The three recognized shapes of a persisted blob. Multilingual is checked
/// first; it is the stricter, preferred form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    Multilingual,
    LegacySingleLocale,
    Invalid,
}

/// Structural shape-check: every required field present and string-typed.
/// The error names the offending field for operator diagnostics.
pub fn shape_check(value: &Value, required: &[&str]) -> Result<(), String> {
    let object = value.as_object().ok_or_else(|| "not an object".to_string())?;
    for field in required {
        match object.get(*field) {
            Some(Value::String(_)) => {}
            Some(_) => return Err(format!("field '{field}' is not a string")),
            None => return Err(format!("missing field '{field}'")),
        }
    }
    Ok(())
}

pub fn classify(raw: &Value, required: &[&str]) -> ContentShape {
    let both_locales_valid = [PRIMARY_LOCALE, SECONDARY_LOCALE].iter().all(|locale| {
        raw.get(locale)
            .map(|sub| shape_check(sub, required).is_ok())
            .unwrap_or(false)
    });
    if both_locales_valid {
        return ContentShape::Multilingual;
    }
    if shape_check(raw, required).is_ok() {
        return ContentShape::LegacySingleLocale;
    }
    ContentShape::Invalid
}

/// Normalizes a persisted blob to the multilingual shape. Legacy flat records
/// are promoted to the primary-locale slot with the secondary slot filled
/// from `fallback` (translation is out of scope). Invalid blobs substitute
/// the full fallback record. Reconciling an already-multilingual record
/// returns it unchanged, so the operation is idempotent.
pub fn reconcile<T>(
    raw: &Value,
    required: &[&str],
    fallback: &Localized<T>,
) -> (Localized<T>, ContentShape)
where
    T: DeserializeOwned + Clone,
{
    let shape = classify(raw, required);
    match shape {
        ContentShape::Multilingual => match serde_json::from_value(raw.clone()) {
            Ok(record) => (record, shape),
            Err(e) => {
                warn!("Multilingual record failed deserialization: {e}");
                (fallback.clone(), ContentShape::Invalid)
            }
        },
        ContentShape::LegacySingleLocale => match serde_json::from_value::<T>(raw.clone()) {
            Ok(flat) => (
                Localized {
                    en: flat,
                    es: fallback.es.clone(),
                },
                shape,
            ),
            Err(e) => {
                warn!("Legacy record failed deserialization: {e}");
                (fallback.clone(), ContentShape::Invalid)
            }
        },
        ContentShape::Invalid => {
            warn!("Content blob matched neither shape; using defaults");
            (fallback.clone(), shape)
        }
    }
}

pub fn reconcile_hero(
    raw: &Value,
    defaults: &SiteDefaults,
) -> (Localized<HeroContent>, ContentShape) {
    reconcile(raw, HERO_FIELDS, &defaults.hero)
}

pub fn reconcile_footer(
    raw: &Value,
    defaults: &SiteDefaults,
) -> (Localized<FooterContent>, ContentShape) {
    reconcile(raw, FOOTER_FIELDS, &defaults.footer)
}
