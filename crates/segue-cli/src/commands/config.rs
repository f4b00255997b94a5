use anyhow::{Context, Result};
use segue_load::{config, Config};
use toml_edit::{value, DocumentMut};

/// Keys accepted by `segue config set`.
const KEYS: &[&str] = &[
    "catalog_path",
    "embeddings_path",
    "recommend_limit",
    "similar_limit",
    "diverse_limit",
    "logging.level",
    "logging.coloured",
];

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    print!(
        "{}",
        toml::to_string_pretty(config).context("Failed to render configuration")?
    );

    println!("\nPriority: CLI args > ENV vars (SEGUE_*) > Config file > Defaults");

    Ok(())
}

/// Set a config value, preserving the rest of the file's formatting.
pub fn set_config(key: &str, raw: &str) -> Result<()> {
    let config_path = config::config_file_path();

    config::ensure_config_file()?;

    let contents =
        std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = apply_setting(&contents, key, raw)?;

    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, raw);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Return `contents` with `key` set to `raw`, typed according to the key.
fn apply_setting(contents: &str, key: &str, raw: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    let item = match key {
        "catalog_path" | "embeddings_path" | "logging.level" => value(raw),
        "recommend_limit" | "similar_limit" | "diverse_limit" => {
            let limit: i64 = raw
                .parse()
                .ok()
                .filter(|n| *n >= 0)
                .with_context(|| format!("{key} must be a non-negative integer"))?;
            value(limit)
        }
        "logging.coloured" => {
            let flag: bool = raw
                .parse()
                .with_context(|| format!("{key} must be true or false"))?;
            value(flag)
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: {}",
                key,
                KEYS.join(", ")
            );
        }
    };

    match key.split_once('.') {
        Some((table, field)) => doc[table][field] = item,
        None => doc[key] = item,
    }

    Ok(doc.to_string())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file (or use `segue config set`) to point at your catalog.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_path_on_example() {
        let updated =
            apply_setting(config::example_config(), "catalog_path", "/data/meta.csv").unwrap();
        let parsed: Config = toml::from_str(&updated).unwrap();

        assert_eq!(parsed.catalog_path, std::path::PathBuf::from("/data/meta.csv"));
        // Comments survive the edit.
        assert!(updated.contains("# Segue Configuration File"));
    }

    #[test]
    fn test_set_limit_and_logging() {
        let updated = apply_setting(config::example_config(), "similar_limit", "5").unwrap();
        let updated = apply_setting(&updated, "logging.level", "debug").unwrap();
        let updated = apply_setting(&updated, "logging.coloured", "false").unwrap();
        let parsed: Config = toml::from_str(&updated).unwrap();

        assert_eq!(parsed.similar_limit, 5);
        assert_eq!(parsed.logging.level, "debug");
        assert!(!parsed.logging.coloured);
    }

    #[test]
    fn test_set_on_empty_file() {
        let updated = apply_setting("", "logging.level", "warn").unwrap();
        let parsed: Config = toml::from_str(&updated).unwrap();
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        assert!(apply_setting("", "similar_limit", "-1").is_err());
        assert!(apply_setting("", "similar_limit", "many").is_err());
        assert!(apply_setting("", "logging.coloured", "sometimes").is_err());
        assert!(apply_setting("", "volume", "11").is_err());
    }
}
