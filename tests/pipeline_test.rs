use anyhow::Result;
use bandsite_content::defaults;
use bandsite_content::error::PipelineError;
use bandsite_content::filter::select_upcoming;
use bandsite_content::mapper;
use bandsite_content::reconcile::{reconcile_hero, ContentShape};
use bandsite_content::snapshot::ContentPipeline;
use bandsite_content::source::csv_export::parse_csv;
use bandsite_content::source::SheetSource;
use bandsite_content::types::RawRow;
use chrono::NaiveDate;
use serde_json::json;

/// Deterministic stand-in for the remote spreadsheet.
struct FixtureSource {
    csv: &'static str,
    fail: bool,
}

#[async_trait::async_trait]
impl SheetSource for FixtureSource {
    fn source_name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_tab(&self, _tab: &str) -> bandsite_content::error::Result<Vec<RawRow>> {
        if self.fail {
            return Err(PipelineError::Timeout { seconds: 10 });
        }
        let mut rows = parse_csv(self.csv);
        if !rows.is_empty() {
            rows.remove(0);
        }
        Ok(rows)
    }
}

const SHOWS_CSV: &str = "\
date,venue,notes,location,ticket_link,is_private
15/07/2024,\"The Roxy, Hollywood\",,\"Los Angeles, CA\",https://tickets.example/roxy,false
01/06/2024,Bluebird Cafe,,\"Nashville, TN\",https://tickets.example/bluebird,false
20/06/2024,Secret Loft,,\"Brooklyn, NY\",https://tickets.example/loft,TRUE
soon!,Mystery Hall,,\"Denver, CO\",https://tickets.example/mystery,false
10/06/2024,Empty Row,,,,
";

#[tokio::test]
async fn shows_pipeline_end_to_end() -> Result<()> {
    let source = FixtureSource {
        csv: SHOWS_CSV,
        fail: false,
    };
    let rows = source.fetch_tab("Shows").await?;
    // header discarded, five data rows survive the CSV layer
    assert_eq!(rows.len(), 5);
    // quoted venue keeps its embedded comma
    assert_eq!(rows[0][1], "The Roxy, Hollywood");

    let shows = mapper::map_shows(&rows);
    // private row and the row missing location/ticket_link are dropped;
    // the unparseable date survives mapping
    assert_eq!(shows.len(), 3);

    let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let upcoming = select_upcoming(&shows, as_of, None);
    // the undated show is excluded from the chronological view
    assert_eq!(upcoming.len(), 2);
    // inclusive boundary: the show exactly on as_of comes first
    assert_eq!(upcoming[0].venue, "Bluebird Cafe");
    assert_eq!(upcoming[1].venue, "The Roxy, Hollywood");

    let limited = select_upcoming(&shows, as_of, Some(1));
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].venue, "Bluebird Cafe");
    Ok(())
}

#[tokio::test]
async fn failing_source_degrades_to_defaults() {
    let pipeline = ContentPipeline::new(
        Box::new(FixtureSource {
            csv: "",
            fail: true,
        }),
        defaults::builtin(),
    );

    let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let shows = pipeline.upcoming_shows_snapshot(as_of, None).await;
    assert!(shows.degraded);
    assert!(shows.data.is_empty());

    let hero = pipeline.hero().await;
    assert!(hero.degraded);
    assert_eq!(hero.data, pipeline.defaults().hero);
}

#[test]
fn legacy_hero_promotion_and_idempotence() {
    let defaults = defaults::builtin();
    let flat = json!({
        "title": "Echoes Live",
        "subtitle": "Anniversary Tour",
        "description": "Two hours of wall-to-wall classics.",
        "primary_button_text": "Tickets",
        "primary_button_link": "#shows",
        "secondary_button_text": "Watch",
        "secondary_button_link": "#media",
        "background_image_url": "/images/tour.jpg"
    });

    let (promoted, shape) = reconcile_hero(&flat, &defaults);
    assert_eq!(shape, ContentShape::LegacySingleLocale);
    assert_eq!(promoted.en.title, "Echoes Live");
    assert_eq!(promoted.es, defaults.hero.es);

    // reconciling the promoted record again changes nothing
    let round_tripped = serde_json::to_value(&promoted).unwrap();
    let (again, shape) = reconcile_hero(&round_tripped, &defaults);
    assert_eq!(shape, ContentShape::Multilingual);
    assert_eq!(again, promoted);
}

#[test]
fn media_partition_is_exhaustive() {
    let rows: Vec<RawRow> = vec![
        vec!["video", "https://x.example/v.mp4", "https://x.example/t.jpg", "", "", "2:30", ""],
        vec!["photo", "https://x.example/a.jpg", "", "", "", "", ""],
        vec!["weird", "https://x.example/b.jpg", "", "", "", "", ""],
    ]
    .into_iter()
    .map(|r| r.into_iter().map(String::from).collect())
    .collect();

    let items = mapper::map_media(&rows);
    assert_eq!(items.len(), 3);
    let videos = items
        .iter()
        .filter(|i| i.kind == bandsite_content::types::MediaKind::Video)
        .count();
    let photos = items
        .iter()
        .filter(|i| i.kind == bandsite_content::types::MediaKind::Photo)
        .count();
    // kind is a closed set: every item lands in exactly one bucket
    assert_eq!(videos + photos, items.len());
    assert_eq!(videos, 1);
}
