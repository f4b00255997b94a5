use anyhow::{anyhow, Result};
use segue_load::config::LoggingConfig;
use twyg::{LogLevel, OptsBuilder};

/// Install the global logger.
///
/// Each `-v` raises the configured level by one step.
pub fn init(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => parse_level(&config.level)?,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };

    let opts = OptsBuilder::new()
        .coloured(config.coloured)
        .level(level)
        .build()
        .map_err(|e| anyhow!("Failed to configure logging: {e:?}"))?;

    let _logger = twyg::setup(opts).map_err(|e| anyhow!("Failed to set up logging: {e:?}"))?;
    Ok(())
}

fn parse_level(level: &str) -> Result<LogLevel> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => Err(anyhow!(
            "Unknown log level: {other}\n\nValid levels: trace, debug, info, warn, error"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert!(matches!(parse_level("info"), Ok(LogLevel::Info)));
        assert!(matches!(parse_level(" DEBUG "), Ok(LogLevel::Debug)));
        assert!(matches!(parse_level("warning"), Ok(LogLevel::Warn)));
        assert!(parse_level("loud").is_err());
    }
}
