//! SVG path geometry.

use crate::NodeId;
use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f32),
}

/// Numbers a command consumes per instruction. `None` for commands this
/// parser does not know, `Z` is handled separately since it takes none.
fn arg_count(command: char) -> Option<usize> {
    match command {
        'M' | 'm' | 'L' | 'l' | 'T' | 't' => Some(2),
        'H' | 'h' | 'V' | 'v' => Some(1),
        'S' | 's' | 'Q' | 'q' => Some(4),
        'C' | 'c' => Some(6),
        'A' | 'a' => Some(7),
        _ => None,
    }
}

fn distance(from: (f32, f32), to: (f32, f32)) -> f32 {
    (to.0 - from.0).hypot(to.1 - from.1)
}

/// Split path data into command letters and numbers. Separators (commas,
/// whitespace) and unrecognized bytes are dropped.
fn tokenize(path: &str) -> Vec<Token> {
    let bytes = path.as_bytes();
    let mut tokens = Vec::new();
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        if byte.is_ascii_alphabetic() {
            tokens.push(Token::Command(byte as char));
            index += 1;
        } else if byte == b'+' || byte == b'-' || byte == b'.' || byte.is_ascii_digit() {
            let (number, next) = scan_number(path, index);
            if let Some(value) = number {
                tokens.push(Token::Number(value));
            }
            index = next;
        } else {
            index += 1;
        }
    }
    tokens
}

/// Scan one number starting at `start`: optional sign, digits, optional
/// fraction and exponent. A sign or dot that leads no digits is consumed
/// without producing a token. Returns the value and the index just past it.
fn scan_number(path: &str, start: usize) -> (Option<f32>, usize) {
    let bytes = path.as_bytes();
    let mut index = start;
    if index < bytes.len() && (bytes[index] == b'+' || bytes[index] == b'-') {
        index += 1;
    }
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
    }
    if index < bytes.len() && bytes[index] == b'.' {
        index += 1;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
    }
    if index < bytes.len() && (bytes[index] == b'e' || bytes[index] == b'E') {
        let mut exponent = index + 1;
        if exponent < bytes.len() && (bytes[exponent] == b'+' || bytes[exponent] == b'-') {
            exponent += 1;
        }
        if exponent < bytes.len() && bytes[exponent].is_ascii_digit() {
            index = exponent;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
            }
        }
    }
    // Guarantee progress even when the slice is not a valid number.
    let end = index.max(start + 1);
    (path[start..end].parse().ok(), end)
}

/// Total length of SVG path data.
///
/// Line commands (`M`/`L`/`H`/`V`/`Z`, absolute and relative) are measured
/// exactly. Curve and arc commands contribute the straight-line distance
/// from the current point to their endpoint, a coarse lower bound that
/// keeps the parser free of curve flattening. Malformed trailing data ends
/// the walk with the length accumulated so far.
pub fn path_total_length(path: &str) -> f32 {
    let tokens = tokenize(path);
    let mut index = 0;
    let mut total = 0.0_f32;
    let mut current = (0.0_f32, 0.0_f32);
    let mut subpath_start = current;
    let mut command: Option<char> = None;

    while index < tokens.len() {
        match tokens[index] {
            Token::Command(letter) => {
                index += 1;
                if letter == 'Z' || letter == 'z' {
                    total += distance(current, subpath_start);
                    current = subpath_start;
                    command = None;
                } else if arg_count(letter).is_some() {
                    command = Some(letter);
                } else {
                    log::debug!("svg path: unsupported command {letter:?}");
                    command = None;
                }
            }
            Token::Number(_) => {
                let Some(letter) = command else {
                    log::debug!("svg path: numeric data with no active command");
                    index += 1;
                    continue;
                };
                let Some(needed) = arg_count(letter) else {
                    index += 1;
                    continue;
                };
                let mut args = [0.0_f32; 7];
                if !fill_args(&tokens, index, &mut args[..needed]) {
                    log::debug!("svg path: truncated arguments for {letter:?}");
                    break;
                }
                index += needed;

                let endpoint = match letter {
                    'M' | 'L' | 'T' => (args[0], args[1]),
                    'm' | 'l' | 't' => (current.0 + args[0], current.1 + args[1]),
                    'H' => (args[0], current.1),
                    'h' => (current.0 + args[0], current.1),
                    'V' => (current.0, args[0]),
                    'v' => (current.0, current.1 + args[0]),
                    'S' | 'Q' => (args[2], args[3]),
                    's' | 'q' => (current.0 + args[2], current.1 + args[3]),
                    'C' => (args[4], args[5]),
                    'c' => (current.0 + args[4], current.1 + args[5]),
                    'A' => (args[5], args[6]),
                    'a' => (current.0 + args[5], current.1 + args[6]),
                    _ => current,
                };

                match letter {
                    'M' | 'm' => {
                        subpath_start = endpoint;
                        // Extra coordinate pairs after a moveto are linetos.
                        command = Some(if letter == 'M' { 'L' } else { 'l' });
                    }
                    _ => total += distance(current, endpoint),
                }
                current = endpoint;
            }
        }
    }
    total
}

fn fill_args(tokens: &[Token], start: usize, args: &mut [f32]) -> bool {
    for (offset, slot) in args.iter_mut().enumerate() {
        match tokens.get(start + offset) {
            Some(Token::Number(value)) => *slot = *value,
            _ => return false,
        }
    }
    true
}

impl Document {
    /// Total geometry length of an SVG `<path>` element, `None` when the
    /// node is not a path element. A path with no `d` attribute has length
    /// zero.
    pub fn path_length(&self, node: NodeId) -> Option<f32> {
        let element = self.element(node)?;
        if element.tag_name != "path" {
            return None;
        }
        Some(path_total_length(element.attr("d").unwrap_or("")))
    }
}
