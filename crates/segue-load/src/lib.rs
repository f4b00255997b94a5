//! Configuration and catalog loading for segue.
//!
//! Reads the track table (CSV) and the embedding matrix (`.npy`) named by the
//! [`Config`] and assembles them into a ready-to-share
//! [`segue_core::Catalog`].

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod embeddings;
pub mod error;
pub mod tracks;

use std::path::Path;

use segue_core::Catalog;

pub use config::Config;
pub use embeddings::read_embeddings;
pub use error::{LoadError, LoadResult};
pub use tracks::read_tracks;

/// Load the catalog named by the configuration.
pub fn load_catalog(config: &Config) -> LoadResult<Catalog> {
    load_catalog_from(&config.catalog_path, &config.embeddings_path)
}

/// Load a catalog from a track table and a row-aligned embedding file.
pub fn load_catalog_from(
    catalog_path: impl AsRef<Path>,
    embeddings_path: impl AsRef<Path>,
) -> LoadResult<Catalog> {
    let catalog_path = catalog_path.as_ref();
    let embeddings_path = embeddings_path.as_ref();

    log::info!("Loading catalog from {}", catalog_path.display());
    let tracks = read_tracks(catalog_path)?;

    log::info!("Loading embeddings from {}", embeddings_path.display());
    let embeddings = read_embeddings(embeddings_path)?;

    let catalog = Catalog::new(tracks, embeddings)?;
    log::info!(
        "Loaded {} tracks with {}-dimensional embeddings",
        catalog.len(),
        catalog.dimension()
    );
    Ok(catalog)
}
