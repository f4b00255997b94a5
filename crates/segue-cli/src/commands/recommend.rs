use anyhow::Result;
use segue_load::Config;
use segue_search::Recommendation;

use super::output;

/// Recommend tracks similar to a text query.
pub fn run_recommend(
    config: &Config,
    title: &str,
    artist: Option<&str>,
    limit: usize,
    json: bool,
) -> Result<()> {
    let recommender = super::open_recommender(config)?;
    let result = recommender.recommend(title, artist, limit)?;

    if json {
        return output::print_json(&result);
    }

    match &result {
        Recommendation::Found {
            original,
            recommendations,
            candidates,
        } => {
            println!("\n🎵 Similar to: {} - {}\n", original.title, original.artist);
            output::print_ranked(recommendations);

            if !candidates.is_empty() {
                println!("\nOther tracks matching '{}':", title.trim());
                output::print_summaries(candidates);
                println!("\nAdd --artist to pick a different one");
            }
        }
        Recommendation::NoMatch { error, .. } => {
            println!("{error}");
            println!("\nTry `segue search <text>` to browse the catalog");
        }
    }

    Ok(())
}

/// List the tracks most similar to a track id.
pub fn run_similar(config: &Config, track_id: &str, limit: usize, json: bool) -> Result<()> {
    let recommender = super::open_recommender(config)?;
    let ranked = recommender.similar(track_id, limit)?;

    if json {
        return output::print_json(&ranked);
    }

    println!("\n🎯 {} tracks similar to {}\n", ranked.len(), track_id.trim());
    output::print_ranked(&ranked);
    Ok(())
}

/// Recommend popular tracks far from a track id.
pub fn run_diverse(config: &Config, track_id: &str, limit: usize, json: bool) -> Result<()> {
    let recommender = super::open_recommender(config)?;
    let ranked = recommender.diverse_recommend(track_id, limit)?;

    if json {
        return output::print_json(&serde_json::json!({
            "recommendations": ranked,
            "diverse_mode": true,
        }));
    }

    if ranked.is_empty() {
        println!("No diverse recommendations for {}", track_id.trim());
        return Ok(());
    }

    println!("\n🔀 Popular tracks unlike {}\n", track_id.trim());
    output::print_ranked(&ranked);
    Ok(())
}
