use std::num::ParseFloatError;

use crate::errors::Result;

/// Return a 'minimal' representation of the given number
pub fn fstr(x: f32) -> String {
    if x == (x as i32) as f32 {
        return (x as i32).to_string();
    }
    let result = format!("{x:.3}");
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.')
    } else {
        &result
    };
    // tiny negative values would otherwise render as "-0"
    if result == "-0" {
        "0".to_string()
    } else {
        result.to_string()
    }
}

/// Parse a string to an f32
pub fn strp(s: &str) -> Result<f32> {
    s.trim().parse().map_err(|e: ParseFloatError| e.into())
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
