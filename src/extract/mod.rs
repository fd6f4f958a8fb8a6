//! Offline coordinate extraction
//!
//! Pulls a coordinate out of a free-form location reference without any
//! network access. Strategies run in a fixed priority order; the first
//! one to produce a coordinate wins. A non-match is a normal "no result",
//! never an error.
//!
//! ## Flex Point
//! Adding a new extraction strategy requires:
//! 1. Write a `fn(&str) -> Option<Coordinates>` in this module
//! 2. Register it in `STRATEGIES` at the right priority

use crate::coord::Coordinates;
use crate::olc;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// A signed decimal number: digits, optional leading `-`, optional point.
/// Anything else is excluded at the regex level, so captures always parse.
const DECIMAL: &str = r"-?\d+(?:\.\d+)?";

static AT_SIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"@({DECIMAL}),({DECIMAL})")).expect("valid regex")
});

static QUERY_PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[?&]q=({DECIMAL}),({DECIMAL})")).expect("valid regex")
});

static PLUS_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([A-Z0-9]{4,}\+[A-Z0-9]{2,})").expect("valid regex"));

static PLACE_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/place/([^/?#]+)").expect("valid regex"));

/// An extraction strategy: name plus a pure matcher over the raw reference
type Strategy = (&'static str, fn(&str) -> Option<Coordinates>);

/// Priority-ordered strategy chain
const STRATEGIES: &[Strategy] = &[
    ("at-sign", at_sign),
    ("query-param", query_param),
    ("plus-code", plus_code),
];

/// Try every strategy in order and return the first coordinate found
pub fn extract_coordinates(reference: &str) -> Option<Coordinates> {
    for &(name, strategy) in STRATEGIES {
        if let Some(coords) = strategy(reference) {
            debug!(strategy = name, lat = coords.lat, lng = coords.lng, "extracted coordinates");
            return Some(coords);
        }
        debug!(strategy = name, "no match");
    }
    None
}

/// `@<lat>,<lng>` as embedded in map-share links
fn at_sign(reference: &str) -> Option<Coordinates> {
    capture_pair(&AT_SIGN_RE, reference)
}

/// `?q=<lat>,<lng>` / `&q=<lat>,<lng>` query parameter
fn query_param(reference: &str) -> Option<Coordinates> {
    capture_pair(&QUERY_PARAM_RE, reference)
}

/// A full Plus Code anywhere in the reference, decoded to its cell center
///
/// A block that matches the pattern but fails structural decoding (short
/// code, invalid digits) yields nothing; the chain moves on.
fn plus_code(reference: &str) -> Option<Coordinates> {
    let code = PLUS_CODE_RE
        .captures(reference)
        .and_then(|caps| caps.get(1))?;

    match olc::decode(code.as_str()) {
        Ok(area) => Some(area.center()),
        Err(e) => {
            debug!("plus code decode failed: {}", e);
            None
        }
    }
}

/// Parse the two captures of a lat,lng regex into a range-checked coordinate
fn capture_pair(re: &Regex, reference: &str) -> Option<Coordinates> {
    let caps = re.captures(reference)?;
    let lat: f64 = caps.get(1)?.as_str().parse().ok()?;
    let lng: f64 = caps.get(2)?.as_str().parse().ok()?;
    Coordinates::checked(lat, lng)
}

/// Extract a human-readable place name from a `/place/<name>` path segment
///
/// The segment is percent-decoded and `+` separators become spaces, so
/// `Hyrax+Hill+Museum` comes back as `Hyrax Hill Museum`. Returns `None`
/// when the reference has no place segment.
pub fn extract_place_name(reference: &str) -> Option<String> {
    let segment = PLACE_SEGMENT_RE
        .captures(reference)
        .and_then(|caps| caps.get(1))?
        .as_str();

    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());

    let name = decoded.replace('+', " ").trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
