//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

/// Hide all but the first few characters of a secret.
fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return "(unset)".to_string();
    }
    let shown: String = secret.chars().take(4).collect();
    format!("{}…", shown)
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output.is_json() {
        let mut value = serde_json::to_value(config)?;
        value["store"]["anon_key"] = redact(&config.store.anon_key).into();
        ctx.output.json(&value);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[store]");
    ctx.output.kv("url", if config.store.url.is_empty() { "(unset)" } else { config.store.url.as_str() });
    ctx.output.kv("anon_key", &redact(&config.store.anon_key));
    ctx.output.kv("schema", &config.store.schema);
    if let Err(e) = config.store_config() {
        ctx.output.warn(&format!("{:#}", e));
    }

    ctx.output.info("[checkout]");
    ctx.output.kv("delay_ms", &config.checkout.delay_ms.to_string());
    ctx.output.kv("tax_percent", &config.checkout.tax_percent.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level);
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("ayur.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        assert_eq!(redact(""), "(unset)");
        assert_eq!(redact("eyJhbGciOi"), "eyJh…");
    }
}
