//! Byte formatting and literal parsing shared by the panel and the
//! command layer.

/// Hex form used across the panel, e.g. `0x2C`.
pub fn to_hex(value: u8) -> String {
    format!("0x{:02X}", value)
}

/// Binary form grouped in nibbles, e.g. `0010 1100`.
pub fn binary_nibbles(value: u8) -> String {
    let bits = format!("{:08b}", value);
    format!("{} {}", &bits[..4], &bits[4..])
}

/// Parses an operand literal: decimal, `0x` hex or `0b` binary, with
/// underscores allowed after a prefix. Returns None for anything else.
/// Range policy belongs to the caller.
pub fn parse_literal(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(&hex.replace('_', ""), 16).ok()
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        i64::from_str_radix(&bin.replace('_', ""), 2).ok()
    } else {
        text.parse::<i64>().ok()
    }
}
