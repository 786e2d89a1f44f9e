//! Output formatting helpers for human-readable and JSON output.

use treepath::{
    Node,
    codec::{JsonCodec, TextCodec},
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render a node for printing.
///
/// Human output prints strings without quotes and other scalars bare;
/// containers are pretty JSON. JSON output is always compact JSON.
pub fn render(node: &Node, format: OutputFormat) -> Result<String, treepath::Error> {
    match (format, node) {
        (OutputFormat::Human, Node::Scalar(scalar)) => Ok(scalar.to_string()),
        (OutputFormat::Human, _) => Ok(JsonCodec::pretty().serialize(node)?),
        (OutputFormat::Json, _) => Ok(JsonCodec::compact().serialize(node)?),
    }
}
