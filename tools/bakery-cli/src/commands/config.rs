//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use bakery_storefront::config::default_toml;
use bakery_storefront::StoreConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    println!("\n[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output
        .kv("default_distance_km", &config.store.default_distance_km.to_string());

    println!("\n[delivery]");
    for tier in &config.delivery.tiers {
        ctx.output
            .list_item(&format!("up to {} km: {}", tier.up_to_km, tier.fee));
    }
    ctx.output
        .list_item(&format!("further: {}", config.delivery.beyond_fee));

    println!("\n[logging]");
    ctx.output
        .kv("level", &config.logging.level.to_string().to_lowercase());
    ctx.output
        .kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, default_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        ctx.output
            .warn("No config file found. Run `bakery config init` to create one.");
        return Ok(());
    };

    ctx.output.header("Validating configuration");
    ctx.output.debug(&format!("Reading {}", path.display()));

    StoreConfig::load(path).with_context(|| format!("{} is invalid", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "valid": true,
        }));
    } else {
        ctx.output.success("Configuration is valid");
    }

    Ok(())
}
