use anyhow::Result;
use clap::Args;
use colored::Colorize;
use doclayout::{find_focusable, Element};
use std::path::PathBuf;

use super::load_json;

#[derive(Args, Debug)]
pub struct FocusArgs {
    /// Element tree snapshot JSON file
    #[arg(short, long)]
    pub tree: PathBuf,
}

pub fn focus(args: FocusArgs) -> Result<()> {
    let root: Element = load_json(&args.tree)?;

    match find_focusable(&root) {
        Some(found) => println!(
            "{} {} <{}> at {:?}",
            "focus:".green().bold(),
            found.element.id,
            found.element.tag,
            found.path.hops
        ),
        None => println!("{} no auto-focus target", "–".dimmed()),
    }

    Ok(())
}
