//! Walks the disclosure stages over a small in-memory dataset and prints the
//! artifact each interaction would render.

use std::error::Error;
use std::sync::Arc;

use ideologies::{Dataset, Explorer, MapArtifact, RawLeaderRow, Selection};

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

fn describe(artifact: &MapArtifact) -> String {
    match artifact {
        MapArtifact::Choropleth { rows, .. } => {
            let assignments: Vec<String> = rows
                .iter()
                .map(|r| format!("{}={}", r.entity, r.ideology.as_str()))
                .collect();
            format!("choropleth [{}]", assignments.join(", "))
        }
        MapArtifact::Highlight {
            label, entities, ..
        } => format!("highlight {label} {entities:?}"),
        MapArtifact::Blank => "blank".to_string(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let dataset = Dataset::from_rows(vec![
        row("France", "1990", "Western Europe", "yes", "leftist"),
        row("Spain", "1990", "Western Europe", "yes", "centrist"),
        row("Belarus", "1990", "Eastern Europe", "no", "leftist"),
        row("Japan", "1990", "Asia", "yes", "rightist"),
    ]);
    let explorer = Explorer::new(Arc::new(dataset));

    let mut selection = Selection::default();
    println!("start        -> {}", describe(&explorer.resolve_map(&selection)));

    selection.regions = vec!["Western Europe".to_string(), "Eastern Europe".to_string()];
    println!("region       -> {}", describe(&explorer.resolve_map(&selection)));

    selection.regimes = Some(vec!["yes".to_string()]);
    println!("regime       -> {}", describe(&explorer.resolve_map(&selection)));

    selection.ideologies = vec!["leftist".to_string(), "centrist".to_string()];
    println!("ideology     -> {}", describe(&explorer.resolve_map(&selection)));

    selection.year = Some(1990);
    explorer.observe_year_interaction()?;
    selection.year_confirmed = explorer.year_confirmed()?;
    println!("year locked  -> {}", describe(&explorer.resolve_map(&selection)));

    let trend = explorer.resolve_trend(&selection);
    for series in &trend.series {
        let points: Vec<String> = series
            .points
            .iter()
            .map(|p| format!("{}:{}", p.year, p.count))
            .collect();
        println!("trend {:>8} -> [{}]", series.ideology.as_str(), points.join(", "));
    }

    Ok(())
}
