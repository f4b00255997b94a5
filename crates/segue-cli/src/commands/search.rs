use anyhow::Result;
use segue_load::Config;

use super::output;

/// Browse the catalog by title or artist.
pub fn run_search(config: &Config, query: &str, json: bool) -> Result<()> {
    let recommender = super::open_recommender(config)?;
    let results = recommender.search(query)?;

    if json {
        return output::print_json(&serde_json::json!({ "results": results }));
    }

    if results.is_empty() {
        println!("No tracks match '{}'", query.trim());
        return Ok(());
    }

    println!("Found {} tracks:", results.len());
    output::print_summaries(&results);
    Ok(())
}
