//! Fixed lookup tables for insert and holder codes.

/// Insert relief angle code (`RA`, stringified) to ISO clearance letter
pub const RELIEF_CODES: &[(&str, &str)] = &[("0", "N"), ("7", "C"), ("5", "B")];

/// Boring bar holder style (`THSC`) to its single-letter style
pub const HOLDER_STYLES: &[(&str, &str)] = &[
    ("boring bar p", "P"),
    ("boring bar l", "L"),
    ("boring bar f", "F"),
    ("boring bar q", "Q"),
    ("boring bar u", "U"),
    ("boring bar k", "K"),
    ("boring bar j", "J"),
    ("custom", "X"),
];

/// Vendor and feature tokens that exempt a tool from renaming
pub const DEFAULT_BLOCKED_WORDS: &[&str] = &[
    "FLOW",
    "FLOWDRILL",
    "SHORT",
    "TUNGALOY",
    "TAEGU",
    "TEC",
    "FLATE",
    "HIGH FEED",
    "HIGH",
    "FEED",
    "REVERSED/",
    "ATUM",
    "ISCAR",
    "SANDVIK",
    "U DRILL",
    "GARR",
    "HITACHI-EDMT",
    "JDMT",
    "HITACHI-JDMT",
];

pub fn relief_letter(code: &str) -> Option<&'static str> {
    lookup(RELIEF_CODES, code)
}

pub fn holder_style(style: &str) -> Option<&'static str> {
    lookup(HOLDER_STYLES, style)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
