//! Set command - writes a value at a path.

use treepath::{Document, Node, codec::Format};

use crate::cli::SetArgs;
use crate::commands::resolve_codec;
use crate::output::{OutputFormat, render};

/// Run the set command
pub fn run(
    args: &SetArgs,
    format: Option<Format>,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(&args.file, format)?;
    let mut doc = Document::load_with(&args.file, codec.as_ref())?;

    doc.set(&args.path, parse_value(&args.value))?;

    if args.write {
        doc.save_with(&args.file, codec.as_ref())?;
        tracing::info!(file = %args.file.display(), path = %args.path, "Wrote document");
    } else {
        println!("{}", render(doc.root(), output)?);
    }

    Ok(())
}

/// Parses a command-line value as JSON, keeping it as a plain string otherwise
pub fn parse_value(text: &str) -> Node {
    serde_json::from_str(text).unwrap_or_else(|_| Node::from(text))
}
