use anyhow::Result;
use clap::Args;
use colored::Colorize;
use doclayout::{Document, LayoutConfig, LayoutMode, LayoutRef};
use serde::Serialize;
use std::path::PathBuf;

use super::load_json;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Document JSON file
    #[arg(short, long)]
    pub document: PathBuf,

    /// Previously displayed document JSON file
    #[arg(short, long)]
    pub previous: Option<PathBuf>,

    /// Layout mode (defaults to the configured mode)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    layout: &'a str,
    href: String,
    reuse_layout: bool,
}

pub fn resolve(args: ResolveArgs, config: &LayoutConfig) -> Result<()> {
    let document: Document = load_json(&args.document)?;
    let previous: Option<Document> = args
        .previous
        .as_deref()
        .map(load_json::<Document>)
        .transpose()?;
    let mode = LayoutMode::new(args.mode.unwrap_or_else(|| config.default_mode.clone()));

    let resolution = doclayout::resolve(Some(&document), &mode, previous.as_ref());
    let layout_ref = resolution
        .layout_ref
        .unwrap_or_else(|| LayoutRef::for_document(&document, &mode));
    let output = ResolveOutput {
        layout: layout_ref.name(),
        href: layout_ref.href(config),
        reuse_layout: resolution.reuse_layout,
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Layout:".bold(), output.layout.bright_white());
    println!("{} {}", "Href:  ".bold(), output.href);
    if output.reuse_layout {
        println!("   {} Layout reused, model swap only", "✓".green());
    } else {
        println!("   {} Fresh layout load (restamp)", "↻".yellow());
    }

    Ok(())
}
