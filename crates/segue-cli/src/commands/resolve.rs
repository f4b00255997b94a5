use anyhow::Result;
use segue_load::Config;

use super::output;

/// Resolve a title (and optional artist) and show the matching tracks.
pub fn run_resolve(config: &Config, title: &str, artist: Option<&str>, json: bool) -> Result<()> {
    let recommender = super::open_recommender(config)?;
    let resolution = recommender.resolve(title, artist)?;

    if json {
        return output::print_json(&resolution);
    }

    let Some(primary) = &resolution.primary else {
        println!("No track matches '{}'", title.trim());
        return Ok(());
    };

    if let Some(track) = recommender.catalog().get(primary.as_str()) {
        println!("🎵 {} - {} [{}]", track.title, track.artist, track.id);
    }

    if resolution.is_ambiguous() {
        println!("\n{} tracks match:", resolution.candidates.len());
        output::print_summaries(&resolution.candidates);
    }

    Ok(())
}
