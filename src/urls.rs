use once_cell::sync::Lazy;
use regex::Regex;

static DRIVE_FILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"drive\.google\.com/file/d/([^/?]+)").unwrap());
static DRIVE_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"drive\.google\.com/open\?id=([^&]+)").unwrap());

/// Rewrites Google Drive share links into the direct-view form that can be
/// used in an `img` tag. Non-Drive URLs pass through unchanged; missing or
/// empty input yields `None`.
pub fn convert_google_drive_url(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    if url.is_empty() {
        return None;
    }

    let id = DRIVE_FILE_RE
        .captures(url)
        .or_else(|| DRIVE_OPEN_RE.captures(url))
        .map(|caps| caps[1].to_string());

    match id {
        Some(id) => Some(format!(
            "https://drive.google.com/uc?export=view&id={id}"
        )),
        None => Some(url.to_string()),
    }
}
