//! Positional row → typed record mapping. Missing required fields drop the
//! whole row; everything else degrades to a documented default.
//!
//! Column contracts (header row already removed by the source layer):
//!   Shows:        date | venue | (unused) | location | ticket_link | is_private
//!   Media:        type | url | thumbnail | title | description | duration | order
//!   Testimonials: author | role | content | avatar_url | order
//!   Content:      section | key | value_en | value_es

use crate::constants::{PRIMARY_LOCALE, SECONDARY_LOCALE};
use crate::locale::ContentTree;
use crate::types::{MediaItem, MediaKind, RawRow, ShowRecord, Testimonial};
use crate::urls::convert_google_drive_url;
use tracing::debug;

fn cell(row: &RawRow, index: usize) -> &str {
    row.get(index).map(|s| s.trim()).unwrap_or("")
}

fn optional(row: &RawRow, index: usize) -> Option<String> {
    let value = cell(row, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Integers come in base 10 or not at all; anything else falls back to the
/// positional default so garbage never reaches a sort key.
fn parse_order(row: &RawRow, index: usize, fallback: i64) -> i64 {
    match cell(row, index).parse::<i64>() {
        Ok(n) => n,
        Err(_) => fallback,
    }
}

pub fn map_show_row(row: &RawRow) -> Option<ShowRecord> {
    let date_text = cell(row, 0);
    let venue = cell(row, 1);
    // column 2 is unused in the sheet layout
    let location = cell(row, 3);
    let ticket_link = cell(row, 4);
    let is_private = cell(row, 5).eq_ignore_ascii_case("true");

    if date_text.is_empty() || venue.is_empty() || location.is_empty() || ticket_link.is_empty() {
        debug!("Dropping show row with missing required fields");
        return None;
    }
    if is_private {
        debug!(venue, "Dropping private show row");
        return None;
    }

    Some(ShowRecord {
        id: None,
        date_text: date_text.to_string(),
        venue: venue.to_string(),
        location: location.to_string(),
        ticket_link: ticket_link.to_string(),
        image_url: None,
        is_published: true,
    })
}

pub fn map_shows(rows: &[RawRow]) -> Vec<ShowRecord> {
    rows.iter().filter_map(map_show_row).collect()
}

/// `index` is the zero-based position among successfully-mapped items, used
/// to default the display order.
pub fn map_media_row(row: &RawRow, index: usize) -> Option<MediaItem> {
    let url = optional(row, 1)?;

    let kind = if cell(row, 0).eq_ignore_ascii_case("video") {
        MediaKind::Video
    } else {
        MediaKind::Photo
    };

    let title = match optional(row, 3) {
        Some(title) => title,
        None => kind.default_title().to_string(),
    };

    let duration = match kind {
        MediaKind::Video => optional(row, 5),
        MediaKind::Photo => None,
    };

    Some(MediaItem {
        id: None,
        kind,
        url: convert_google_drive_url(Some(&url)).unwrap_or(url),
        thumbnail: optional(row, 2)
            .and_then(|thumb| convert_google_drive_url(Some(&thumb))),
        title,
        description: optional(row, 4),
        duration,
        order: parse_order(row, 6, index as i64 + 1),
    })
}

pub fn map_media(rows: &[RawRow]) -> Vec<MediaItem> {
    let mut items = Vec::new();
    for row in rows {
        if let Some(item) = map_media_row(row, items.len()) {
            items.push(item);
        } else {
            debug!("Dropping media row with empty url");
        }
    }
    items
}

pub fn map_testimonial_row(row: &RawRow, index: usize) -> Option<Testimonial> {
    let author = cell(row, 0);
    let content = cell(row, 2);
    if author.is_empty() || content.is_empty() {
        debug!("Dropping testimonial row with missing author or content");
        return None;
    }

    Some(Testimonial {
        id: None,
        author: author.to_string(),
        role: cell(row, 1).to_string(),
        content: content.to_string(),
        avatar_url: optional(row, 3)
            .and_then(|url| convert_google_drive_url(Some(&url))),
        order: parse_order(row, 4, index as i64 + 1),
    })
}

pub fn map_testimonials(rows: &[RawRow]) -> Vec<Testimonial> {
    let mut items = Vec::new();
    for row in rows {
        if let Some(item) = map_testimonial_row(row, items.len()) {
            items.push(item);
        }
    }
    items
}

/// Builds the nested section → key → locale → value mapping consumed by the
/// locale resolution layer. Empty cells are simply not inserted so lookups
/// fall through the fallback chain instead of hitting an empty string early.
pub fn build_content_tree(rows: &[RawRow]) -> ContentTree {
    let mut tree = ContentTree::new();
    for row in rows {
        let section = cell(row, 0);
        let key = cell(row, 1);
        if section.is_empty() || key.is_empty() {
            debug!("Dropping content row with missing section or key");
            continue;
        }

        let entry = tree
            .entry(section.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default();
        if let Some(value) = optional(row, 2) {
            entry.insert(PRIMARY_LOCALE.to_string(), value);
        }
        if let Some(value) = optional(row, 3) {
            entry.insert(SECONDARY_LOCALE.to_string(), value);
        }
    }
    tree
}
