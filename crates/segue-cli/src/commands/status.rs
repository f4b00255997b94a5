use anyhow::Result;
use segue_load::Config;

pub fn show_status(config: &Config) -> Result<()> {
    println!("\n📊 Segue Status\n");
    println!(
        "  Catalog: {}{}",
        config.catalog_path.display(),
        missing_marker(&config.catalog_path)
    );
    println!(
        "  Embeddings: {}{}",
        config.embeddings_path.display(),
        missing_marker(&config.embeddings_path)
    );

    match segue_load::load_catalog(config) {
        Ok(catalog) => {
            println!("  Tracks: {}", catalog.len());
            println!("  Embedding dimensions: {}", catalog.dimension());
        }
        Err(e) => {
            println!("\n  ✗ Catalog not loadable: {e}");
            println!("\n  Set catalog_path and embeddings_path with `segue config set`");
        }
    }

    Ok(())
}

fn missing_marker(path: &std::path::Path) -> &'static str {
    if path.exists() {
        ""
    } else {
        " (missing)"
    }
}
