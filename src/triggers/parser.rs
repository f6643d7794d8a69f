//! Trigger annotation parser
//!
//! Annotations are level-designer input, so parsing is permissive: anything
//! that doesn't read as a mode keyword or a rule is skipped, and values that
//! don't read as a usable number disable the rule instead of failing.
//!
//! ```text
//! config := token (whitespace token)*
//! token  := mode | rule
//! mode   := "walk" | "boat" | "ship" | "airship"
//! rule   := ("r" | "x" | "y" | "s") integer
//! ```

use super::types::{TravelMode, TravelModes, TriggerSpec};

/// Parse a trigger annotation such as `r3 s12 airship`
pub fn parse_spec(raw: &str) -> TriggerSpec {
    let mut radius = None;
    let mut x_range = None;
    let mut y_range = None;
    let mut latch = None;
    let mut modes = TravelModes::NONE;
    let mut has_distance_rule = false;

    for token in raw.split_whitespace() {
        let token = token.to_lowercase();

        if let Some(mode) = TravelMode::from_keyword(&token) {
            modes.insert(mode);
            continue;
        }

        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            continue;
        };
        let value = chars.as_str();

        match letter {
            'r' => {
                radius = distance_value(value);
                has_distance_rule = true;
            }
            'x' => {
                x_range = distance_value(value);
                has_distance_rule = true;
            }
            'y' => {
                y_range = distance_value(value);
                has_distance_rule = true;
            }
            's' => latch = switch_value(value),
            _ => log::trace!("Ignoring trigger token: {}", token),
        }
    }

    if modes.is_empty() {
        modes = TravelModes::ALL;
    }

    if !has_distance_rule {
        radius = Some(0);
    }

    TriggerSpec {
        radius,
        x_range,
        y_range,
        latch,
        allowed_modes: modes,
    }
}

/// Distance for r/x/y. Missing, unreadable or negative values disable the rule.
fn distance_value(value: &str) -> Option<u32> {
    let n = leading_int(value)?;
    if n < 0 {
        return None;
    }
    Some(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Switch id for `s`. Only positive ids latch.
fn switch_value(value: &str) -> Option<u32> {
    let n = leading_int(value)?;
    if n <= 0 {
        return None;
    }
    Some(u32::try_from(n).unwrap_or(u32::MAX))
}

/// Read the integer at the start of `s`, ignoring anything after it.
///
/// Accepts an optional sign and either decimal digits or a `0x` hex prefix.
/// Returns `None` when no digits lead the string. Magnitudes saturate.
fn leading_int(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut magnitude: i64 = 0;
    let mut any = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        any = true;
        magnitude = magnitude
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    if !any {
        return None;
    }

    Some(if negative { -magnitude } else { magnitude })
}
