use anyhow::Result;
use clap::Args;
use colored::Colorize;
use doclayout::{LayoutConfig, DEFAULT_CONFIG_NAME};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Default layout mode (view, edit, ...)
    #[arg(short, long, default_value = "view")]
    pub mode: String,

    /// Base URL joined in front of layout hrefs
    #[arg(short, long, default_value = "")]
    pub base_url: String,

    /// Name prefix of layout resources
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = LayoutConfig {
        default_mode: args.mode,
        base_url: args.base_url,
        element_prefix: args.prefix,
        ..LayoutConfig::default()
    };

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    Ok(())
}
