//! Identifier generation for new todos.
//!
//! Ids are fixed-width decimal strings. The next id is one past the largest
//! numeric id in the collection.
//!
//! Existing ids are read the way a loosely typed backend would coerce them
//! to a number: surrounding whitespace is ignored, decimal and exponent
//! forms (`"1e3"`), `0x`/`0o`/`0b` prefixes and `Infinity` are accepted.
//! Anything else, including the empty string, counts as zero. The next value
//! is truncated to an integer and saturates at `u64::MAX` before only its
//! last [`ID_WIDTH`] digits are kept.

use crate::model::Todo;

pub const ID_WIDTH: usize = 5;

pub fn next_id(todos: &[Todo]) -> String {
    let max = todos
        .iter()
        .map(|todo| numeric_value(&todo.id))
        .fold(0.0, f64::max);

    format_id(to_index(max + 1.0))
}

/// Zero-pads `value` to [`ID_WIDTH`] digits, keeping only the last
/// [`ID_WIDTH`] characters when it is wider.
pub fn format_id(value: u64) -> String {
    let padded = format!("{value:0>width$}", width = ID_WIDTH);
    padded[padded.len() - ID_WIDTH..].to_string()
}

fn numeric_value(id: &str) -> f64 {
    let id = id.trim();

    let radix = match id.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&id[2..], radix).unwrap_or(0.0);
    }

    let unsigned = id.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(id);
    match unsigned {
        "Infinity" if id.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        // `f64::from_str` also knows `inf` and `nan`, which are not numbers here.
        s if s.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
            id.parse().unwrap_or(0.0)
        }
        _ => 0.0,
    }
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

// Saturates at both ends; `NaN` cannot reach here.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_index(value: f64) -> u64 {
    value.trunc() as u64
}
