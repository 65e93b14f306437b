use std::sync::Arc;

use ideologies::{Dataset, Explorer, RawLeaderRow, Selection, TrendPoint};

fn row(entity: &str, year: &str, region: &str, democracy: &str, ideology: &str) -> RawLeaderRow {
    RawLeaderRow {
        country_name: Some(entity.to_string()),
        year: Some(year.to_string()),
        region: Some(region.to_string()),
        democracy: Some(democracy.to_string()),
        hog_ideology: Some(ideology.to_string()),
        ..RawLeaderRow::default()
    }
}

fn explorer() -> Explorer {
    Explorer::new(Arc::new(Dataset::from_rows(vec![
        row("France", "2001", "Europe", "yes", "leftist"),
        row("Spain", "2001", "Europe", "yes", "leftist"),
        row("Italy", "2001", "Europe", "yes", "leftist"),
        row("Japan", "2001", "Asia", "yes", "rightist"),
        row("India", "2001", "Asia", "yes", "rightist"),
        row("France", "2002", "Europe", "yes", "leftist"),
        row("Belarus", "2001", "Europe", "no", "centrist"),
    ])))
}

#[test]
fn counts_split_per_category_when_several_are_selected() {
    let explorer = explorer();
    let selection = Selection {
        ideologies: vec!["leftist".to_string(), "rightist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(trend.series.len(), 2);
    assert_eq!(
        trend.series[0].points,
        vec![
            TrendPoint { year: 2001, count: 3 },
            TrendPoint { year: 2002, count: 1 },
        ]
    );
    assert_eq!(
        trend.series[1].points,
        vec![TrendPoint { year: 2001, count: 2 }]
    );
}

#[test]
fn a_single_selected_category_yields_a_single_series() {
    let explorer = explorer();
    let selection = Selection {
        ideologies: vec!["leftist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(trend.series.len(), 1);
    assert_eq!(
        trend.series[0].points,
        vec![
            TrendPoint { year: 2001, count: 3 },
            TrendPoint { year: 2002, count: 1 },
        ]
    );
}

#[test]
fn region_and_regime_filters_narrow_the_counts_before_aggregation() {
    let explorer = explorer();
    let selection = Selection {
        regions: vec!["Europe".to_string()],
        regimes: Some(vec!["yes".to_string()]),
        ideologies: vec!["leftist".to_string(), "centrist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(trend.series.len(), 2);
    // Belarus is non-democratic, so the centrist series stays empty.
    assert_eq!(
        trend.series[0].points,
        vec![
            TrendPoint { year: 2001, count: 3 },
            TrendPoint { year: 2002, count: 1 },
        ]
    );
    assert!(trend.series[1].points.is_empty());
}

#[test]
fn an_explicitly_empty_regime_selection_empties_every_series() {
    let explorer = explorer();
    let selection = Selection {
        regimes: Some(Vec::new()),
        ideologies: vec!["leftist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(trend.series.len(), 1);
    assert!(trend.series[0].points.is_empty());
}

#[test]
fn the_trend_ignores_the_disclosure_stage_entirely() {
    let explorer = explorer();
    // No region, no regime, year untouched: the map would still be blank,
    // but the trend reflects the category selection directly.
    let selection = Selection {
        ideologies: vec!["rightist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(trend.series.len(), 1);
    assert_eq!(
        trend.series[0].points,
        vec![TrendPoint { year: 2001, count: 2 }]
    );
}

#[test]
fn rows_with_unparseable_years_are_kept_out_of_the_grouping() {
    let mut rows = vec![
        row("France", "2001", "Europe", "yes", "leftist"),
        row("Spain", "2001", "Europe", "yes", "leftist"),
    ];
    rows.push(RawLeaderRow {
        year: Some("unknown".to_string()),
        ..row("Italy", "0", "Europe", "yes", "leftist")
    });
    let explorer = Explorer::new(Arc::new(Dataset::from_rows(rows)));
    let selection = Selection {
        ideologies: vec!["leftist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(
        trend.series[0].points,
        vec![TrendPoint { year: 2001, count: 2 }]
    );
}

#[test]
fn duplicate_observations_count_individually_in_the_full_view() {
    // The map view deduplicates (entity, year); the trend must not.
    let explorer = Explorer::new(Arc::new(Dataset::from_rows(vec![
        row("France", "2001", "Europe", "yes", "leftist"),
        row("France", "2001", "Europe", "yes", "leftist"),
    ])));
    let selection = Selection {
        ideologies: vec!["leftist".to_string()],
        ..Selection::default()
    };
    let trend = explorer.resolve_trend(&selection);
    assert_eq!(
        trend.series[0].points,
        vec![TrendPoint { year: 2001, count: 2 }]
    );
}
