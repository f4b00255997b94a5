//! Terminal and JSON rendering of query results.

use anyhow::Result;
use segue_core::TrackSummary;
use segue_search::RankedEntry;
use serde::Serialize;

/// Print any result as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format one ranked entry as a table row.
pub fn ranked_line(position: usize, entry: &RankedEntry) -> String {
    format!(
        "  {:2}. {:<35} - {:<25} ({:5.1}% similar, 🔥{:>4} plays)",
        position,
        entry.title,
        entry.artist,
        entry.similarity * 100.0,
        entry.popularity
    )
}

/// Format one track summary as a table row.
pub fn summary_line(summary: &TrackSummary) -> String {
    format!(
        "  [{}] {} - {} ({})",
        summary.id, summary.title, summary.artist, summary.album
    )
}

pub fn print_ranked(entries: &[RankedEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", ranked_line(i + 1, entry));
    }
}

pub fn print_summaries(summaries: &[TrackSummary]) {
    for summary in summaries {
        println!("{}", summary_line(summary));
    }
}
