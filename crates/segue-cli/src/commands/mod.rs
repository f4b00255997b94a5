pub mod config;
pub mod output;
pub mod recommend;
pub mod resolve;
pub mod search;
pub mod status;

pub use recommend::{run_diverse, run_recommend, run_similar};
pub use resolve::run_resolve;
pub use search::run_search;
pub use status::show_status;

use anyhow::{Context, Result};
use segue_load::Config;
use segue_search::Recommender;
use std::sync::Arc;

/// Load the configured catalog and wrap it in a recommender.
pub fn open_recommender(config: &Config) -> Result<Recommender> {
    log::debug!("Opening catalog {}", config.catalog_path.display());
    let catalog = segue_load::load_catalog(config).with_context(|| {
        format!(
            "Failed to load catalog from {} and {}",
            config.catalog_path.display(),
            config.embeddings_path.display()
        )
    })?;
    Ok(Recommender::new(Arc::new(catalog)))
}
