//! Tab and locale name constants to keep naming consistent across the codebase.

// Spreadsheet tab names (used in CLI and as defaults in config)
pub const SHOWS_TAB: &str = "Shows";
pub const MEDIA_TAB: &str = "Media";
pub const TESTIMONIALS_TAB: &str = "Testimonials";
pub const CONTENT_TAB: &str = "Content";

/// Primary display locale; also the fallback locale for content resolution.
pub const PRIMARY_LOCALE: &str = "en";
/// Secondary display locale. The site supports exactly these two.
pub const SECONDARY_LOCALE: &str = "es";

/// Get all tab names the pipeline knows how to map.
pub fn supported_tabs() -> Vec<&'static str> {
    vec![SHOWS_TAB, MEDIA_TAB, TESTIMONIALS_TAB, CONTENT_TAB]
}

/// Number of columns each tab's mapper expects; short rows from the values
/// API are padded to this width with empty strings.
pub fn tab_width(tab: &str) -> usize {
    match tab {
        SHOWS_TAB => 6,
        MEDIA_TAB => 7,
        TESTIMONIALS_TAB => 5,
        CONTENT_TAB => 4,
        _ => 0,
    }
}
