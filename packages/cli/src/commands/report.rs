use anyhow::Result;
use clap::Args;
use colored::Colorize;
use doclayout::{BindingTable, Catalog, Document, DocumentLayout, LayoutConfig, ValidationReport};
use serde::Serialize;
use std::path::PathBuf;

use super::load_json;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Document JSON file the report refers to
    #[arg(short, long)]
    pub document: PathBuf,

    /// Validation report JSON file
    #[arg(short, long)]
    pub report: PathBuf,

    /// Widget binding table JSON file
    #[arg(short, long)]
    pub bindings: Option<PathBuf>,

    /// Message catalog JSON file
    #[arg(short, long)]
    pub messages: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    messages: &'a [String],
    invalid_widgets: Vec<&'a str>,
    invalid: bool,
}

pub fn report(args: ReportArgs, config: &LayoutConfig) -> Result<()> {
    let document: Document = load_json(&args.document)?;
    let report: ValidationReport = load_json(&args.report)?;
    let mut bindings: BindingTable = match &args.bindings {
        Some(path) => load_json(path)?,
        None => BindingTable::new(),
    };
    let catalog = match &args.messages {
        Some(path) => Catalog::load(path)?,
        None => Catalog::new(),
    };

    let mut layout = DocumentLayout::new(config.clone());
    layout.set_document(document);
    layout.report_validation(&report, &mut bindings, &catalog);

    let output = ReportOutput {
        messages: layout.error_messages(),
        invalid_widgets: bindings.invalid_widgets().collect(),
        invalid: layout.is_invalid(),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if output.messages.is_empty() {
        println!("{} No violations", "✓".green());
        return Ok(());
    }

    for message in output.messages {
        println!("{} {}", "│".red(), message.red());
    }
    println!();
    for widget in &output.invalid_widgets {
        println!("   {} {}", "invalid:".yellow(), widget);
    }

    Ok(())
}
