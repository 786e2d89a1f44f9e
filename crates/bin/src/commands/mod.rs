//! Subcommand implementations.

use std::path::Path as FsPath;

use treepath::codec::{Format, TextCodec};

pub mod get;
pub mod set;

/// Picks the codec from the `--format` flag, falling back to the file extension
pub fn resolve_codec(
    file: &FsPath,
    format: Option<Format>,
) -> Result<Box<dyn TextCodec>, treepath::Error> {
    let format = match format {
        Some(format) => format,
        None => Format::from_path(file)?,
    };
    Ok(format.codec())
}
