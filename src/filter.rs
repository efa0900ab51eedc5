//! View filters over show snapshots. These never mutate the underlying
//! dataset; a show with an unparseable date is merely invisible to the
//! chronological views, not deleted.

use crate::dates::parse_show_date;
use crate::types::ShowRecord;
use chrono::NaiveDate;

/// Shows on or after `as_of`, ascending by date, ties kept in input order.
/// `limit` truncates after sorting so an earlier show is never skipped in
/// favor of a later one. The upcoming view is public-facing, so unpublished
/// shows are excluded here unconditionally.
pub fn select_upcoming(
    shows: &[ShowRecord],
    as_of: NaiveDate,
    limit: Option<usize>,
) -> Vec<ShowRecord> {
    let mut dated: Vec<(NaiveDate, &ShowRecord)> = shows
        .iter()
        .filter(|show| show.is_published)
        .filter_map(|show| parse_show_date(&show.date_text).map(|date| (date, show)))
        .filter(|(date, _)| *date >= as_of)
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    let mut selected: Vec<ShowRecord> = dated.into_iter().map(|(_, show)| show.clone()).collect();
    if let Some(limit) = limit {
        selected.truncate(limit);
    }
    selected
}

/// Every show, chronologically sorted, for the "all shows" listing. Shows
/// whose date never parses sort after all dated ones, keeping input order.
/// Admin contexts pass `published_only = false` to see everything.
pub fn select_all(shows: &[ShowRecord], published_only: bool) -> Vec<ShowRecord> {
    let visible: Vec<&ShowRecord> = shows
        .iter()
        .filter(|show| !published_only || show.is_published)
        .collect();

    let mut dated: Vec<(NaiveDate, &ShowRecord)> = Vec::new();
    let mut undated: Vec<&ShowRecord> = Vec::new();
    for show in visible {
        match parse_show_date(&show.date_text) {
            Some(date) => dated.push((date, show)),
            None => undated.push(show),
        }
    }
    dated.sort_by_key(|(date, _)| *date);

    dated
        .into_iter()
        .map(|(_, show)| show.clone())
        .chain(undated.into_iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(date_text: &str, venue: &str) -> ShowRecord {
        ShowRecord {
            id: None,
            date_text: date_text.to_string(),
            venue: venue.to_string(),
            location: "Austin, TX".to_string(),
            ticket_link: "https://tickets.example.com".to_string(),
            image_url: None,
            is_published: true,
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn show_on_the_reference_date_is_included() {
        let shows = vec![show("01/06/2024", "today"), show("31/05/2024", "yesterday")];
        let upcoming = select_upcoming(&shows, as_of(), None);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue, "today");
    }

    #[test]
    fn upcoming_sorts_ascending_by_date() {
        let shows = vec![
            show("10/07/2024", "later"),
            show("05/06/2024", "sooner"),
            show("01/01/2025", "latest"),
        ];
        let venues: Vec<String> = select_upcoming(&shows, as_of(), None)
            .into_iter()
            .map(|s| s.venue)
            .collect();
        assert_eq!(venues, vec!["sooner", "later", "latest"]);
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let shows = vec![
            show("05/06/2024", "first"),
            show("05/06/2024", "second"),
            show("05/06/2024", "third"),
        ];
        let venues: Vec<String> = select_upcoming(&shows, as_of(), None)
            .into_iter()
            .map(|s| s.venue)
            .collect();
        assert_eq!(venues, vec!["first", "second", "third"]);
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let shows = vec![show("10/07/2024", "later"), show("05/06/2024", "sooner")];
        let upcoming = select_upcoming(&shows, as_of(), Some(1));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue, "sooner");
    }

    #[test]
    fn unparseable_dates_are_excluded_from_upcoming() {
        let shows = vec![show("TBA", "mystery"), show("05/06/2024", "real")];
        let upcoming = select_upcoming(&shows, as_of(), None);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue, "real");
    }

    #[test]
    fn select_all_keeps_past_shows_and_sorts_undated_last() {
        let shows = vec![
            show("TBA", "undated"),
            show("31/05/2024", "past"),
            show("05/06/2024", "future"),
        ];
        let venues: Vec<String> = select_all(&shows, true)
            .into_iter()
            .map(|s| s.venue)
            .collect();
        assert_eq!(venues, vec!["past", "future", "undated"]);
    }

    #[test]
    fn select_all_respects_published_only_flag() {
        let mut hidden = show("05/06/2024", "hidden");
        hidden.is_published = false;
        let shows = vec![hidden, show("06/06/2024", "visible")];

        assert_eq!(select_all(&shows, true).len(), 1);
        assert_eq!(select_all(&shows, false).len(), 2);
    }
}
