//! Get command - prints the value at a path.

use treepath::{Document, codec::Format};

use crate::cli::GetArgs;
use crate::commands::resolve_codec;
use crate::output::{OutputFormat, render};

/// Run the get command
pub fn run(
    args: &GetArgs,
    format: Option<Format>,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(&args.file, format)?;
    let doc = Document::load_with(&args.file, codec.as_ref())?;

    let Some(node) = doc.get(&args.path)? else {
        return Err(format!("No value at path '{}'", args.path).into());
    };
    println!("{}", render(node, output)?);

    Ok(())
}
