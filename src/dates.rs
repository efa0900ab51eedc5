use chrono::NaiveDate;

/// Parses the human-edited date strings that show up in the Shows tab.
///
/// Slash-separated input is read as `day/month/year`. Two-digit years are
/// expanded with a fixed "20" century prefix, which is wrong for anything
/// before the year 2000; this is a known limitation of the data entry
/// convention, kept as documented behavior.
///
/// All failures are `None`; this never panics and never consults the clock.
pub fn parse_show_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains('/') {
        return parse_slash_date(text);
    }

    // Fall back to the common unambiguous formats.
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%B %d, %Y"))
        .or_else(|_| NaiveDate::parse_from_str(text, "%b %d, %Y"))
        .or_else(|_| NaiveDate::parse_from_str(text, "%d %B %Y"))
        .ok()
}

fn parse_slash_date(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;

    let year_part = parts[2].trim();
    let year: i32 = if year_part.len() == 2 {
        format!("20{year_part}").parse().ok()?
    } else {
        year_part.parse().ok()?
    };

    // from_ymd_opt rejects impossible calendar dates (e.g. 31/02).
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_month_year_with_two_digit_year() {
        assert_eq!(
            parse_show_date("5/3/24"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn parses_full_slash_date() {
        assert_eq!(
            parse_show_date("12/08/2025"),
            NaiveDate::from_ymd_opt(2025, 8, 12)
        );
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert_eq!(parse_show_date("31/02/2024"), None);
        assert_eq!(parse_show_date("32/01/2024"), None);
        assert_eq!(parse_show_date("01/13/2024"), None);
    }

    #[test]
    fn rejects_empty_and_garbage_input() {
        assert_eq!(parse_show_date(""), None);
        assert_eq!(parse_show_date("   "), None);
        assert_eq!(parse_show_date("not a date"), None);
        assert_eq!(parse_show_date("1/2"), None);
    }

    #[test]
    fn parses_iso_and_written_formats() {
        assert_eq!(
            parse_show_date("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            parse_show_date("June 1, 2024"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }
}
