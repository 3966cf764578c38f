//! Autocomplete Example
//!
//! Replays typing a query against the name-search endpoint with overlapping
//! requests, keeping only the newest response. Then loads the catalog, ranks
//! it locally, and prints level-scaled stats plus a radar path for the best hit.
//!
//! ```text
//! STATDEX_API_BASE_URL=http://localhost:8000 cargo run --example autocomplete -- pika 50
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use statdex_client::{ClientConfig, RequestSequence, StatdexClient};
use statdex_stats::{Level, RadarLayout, RadarMode, Stat, level_stats, radar_chart};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let query = args.next().context("usage: autocomplete <query> [level]")?;
    let level = match args.next() {
        Some(raw) => Level::new(raw.parse().context("level must be a number")?)?,
        None => Level::default(),
    };

    let client = Arc::new(StatdexClient::new(ClientConfig::from_env()));
    let sequence = Arc::new(RequestSequence::new());

    // One request per keystroke, all in flight at once
    let mut pending = Vec::new();
    for end in 1..=query.chars().count() {
        let typed: String = query.chars().take(end).collect();
        let ticket = sequence.begin();
        let client = Arc::clone(&client);
        let sequence = Arc::clone(&sequence);
        pending.push(tokio::spawn(async move {
            let result = client.search_by_name(&typed, 5).await;
            sequence.settle(ticket, (typed, result))
        }));
    }

    let mut applied = 0;
    for task in pending {
        if let Some((typed, result)) = task.await? {
            let names: Vec<String> = result?.into_iter().map(|e| e.name).collect();
            println!("Service matches for '{}': {}", typed, names.join(", "));
            applied += 1;
        }
    }
    println!("Applied {} of {} responses\n", applied, query.chars().count());

    let catalog = client.load_catalog().await?;
    let suggestions = catalog.suggest(&query);
    if suggestions.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    for hit in &suggestions {
        let marked = match hit.highlight {
            Some(span) => {
                let (before, matched, after) = span.split(&hit.entry.name);
                format!("{before}[{matched}]{after}")
            }
            None => hit.entry.name.clone(),
        };
        println!("{:>3}  {}", hit.score, marked);
    }

    let best = suggestions[0].entry;
    let scaled = level_stats(&best.base_stats, level);
    println!("\n{} at Lv.{}", best.name, level.get());
    for stat in Stat::ALL {
        println!(
            "  {:<8} {:>4} -> {:>4}",
            stat.label(),
            best.base_stats.get(stat),
            scaled.get(stat)
        );
    }

    let chart = radar_chart(
        &best.base_stats,
        level,
        RadarMode::Comparison,
        &RadarLayout::default(),
    );
    println!("\n{}: {}", chart.primary.label, chart.primary.path());
    println!("{}: {}", chart.secondary.label, chart.secondary.path());

    Ok(())
}
