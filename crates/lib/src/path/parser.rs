//! Path string parser.

use std::{iter::Peekable, str::CharIndices};

use super::{PathError, Segment};

pub(super) fn parse(input: &str) -> Result<Vec<Segment>, PathError> {
    let mut segments = Vec::new();
    if input.is_empty() {
        return Ok(segments);
    }

    let mut chars = input.char_indices().peekable();
    // Position of the '.' that introduced the segment being parsed.
    let mut separator: Option<usize> = None;

    loop {
        let start = chars.peek().map_or(input.len(), |(i, _)| *i);
        let name = read_name(&mut chars);

        let mut segment = Segment::from_parts(name, Vec::new());
        while let Some((open, '[')) = chars.peek().copied() {
            chars.next();
            segment.push_index(read_index(&mut chars, open)?);
        }

        if segment.name().is_none() && segment.indices().is_empty() {
            return Err(match (chars.peek(), separator) {
                // Nothing follows the last '.'
                (None, Some(dot)) => PathError::UnexpectedChar {
                    position: dot,
                    found: '.',
                },
                _ => PathError::EmptyPathWhereSegmentRequired { position: start },
            });
        }
        segments.push(segment);

        match chars.next() {
            None => break,
            Some((dot, '.')) => separator = Some(dot),
            Some((position, found)) => return Err(PathError::UnexpectedChar { position, found }),
        }
    }

    Ok(segments)
}

fn read_name(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut name = String::new();
    while let Some((_, c)) = chars.peek().copied() {
        if c == '.' || c == '[' {
            break;
        }
        name.push(c);
        chars.next();
    }
    name
}

/// Reads the digits and closing bracket of an index whose '[' is at `open`.
fn read_index(chars: &mut Peekable<CharIndices<'_>>, open: usize) -> Result<usize, PathError> {
    let mut text = String::new();
    loop {
        match chars.next() {
            None => return Err(PathError::UnterminatedIndex { position: open }),
            Some((_, ']')) => break,
            Some((_, c)) => text.push(c),
        }
    }

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::InvalidIndex {
            position: open,
            text,
        });
    }
    text.parse::<usize>().map_err(|_| PathError::InvalidIndex {
        position: open,
        text,
    })
}
