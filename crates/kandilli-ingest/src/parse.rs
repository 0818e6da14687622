//! Extraction and tokenization of the observatory listing.
//!
//! The listing is a fixed-layout table: five numeric columns, three 3-column
//! magnitude slots, a location that may contain single spaces, and a solution
//! quality tail separated from the location by a run of at least two spaces.
//! A line either matches that layout completely or produces no record.

use kandilli_common::{Error, Event, Result};
use scraper::{Html, Selector};
use tracing::debug;

/// Column-header lines preceding the first data line inside the `<pre>` block.
const HEADER_LINES: usize = 6;

/// Placeholder the listing prints when a magnitude type was not computed.
const NO_MAGNITUDE: &str = "-.-";

/// Extract the text of the first `<pre>` element of the upstream document.
pub fn extract_pre(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("pre").map_err(|e| Error::Parse(format!("invalid selector: {e}")))?;
    let block = document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::Parse("preformatted block missing from upstream document".into()))?;
    Ok(block.text().collect())
}

/// Parse the `<pre>` text into events, upstream order preserved.
///
/// Drops the leading column headers and the trailing boilerplate line, then
/// tokenizes every remaining line. Lines that do not match the layout are
/// skipped; they are counted and reported at debug level only.
pub fn parse_listing(text: &str) -> Vec<Event> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < HEADER_LINES + 2 {
        return Vec::new();
    }

    let mut dropped = 0usize;
    let events = lines[HEADER_LINES..lines.len() - 1]
        .iter()
        .filter_map(|line| {
            let event = parse_line(line);
            if event.is_none() {
                dropped += 1;
            }
            event
        })
        .collect();

    if dropped > 0 {
        debug!(dropped, "skipped listing lines that do not match the event layout");
    }
    events
}

/// Tokenize a single listing line.
///
/// Returns `None` when any field fails validation; no partial record is ever
/// produced.
pub fn parse_line(line: &str) -> Option<Event> {
    let line = line.trim_end();
    let mut pos = 0usize;

    let date = next_token(line, &mut pos).filter(|t| is_date(t))?;
    let time = next_token(line, &mut pos).filter(|t| is_time(t))?;
    let latitude = next_token(line, &mut pos).filter(|t| is_coordinate(t))?;
    let longitude = next_token(line, &mut pos).filter(|t| is_coordinate(t))?;
    let depth = next_token(line, &mut pos).filter(|t| is_depth(t))?;

    let magnitude_duration = magnitude(next_token(line, &mut pos)?)?;
    let magnitude_local = magnitude(next_token(line, &mut pos)?)?;
    let magnitude_moment = magnitude(next_token(line, &mut pos)?)?;

    // Location runs up to the first gap of two or more spaces; the rest of
    // the line is the solution quality.
    let tail = line[pos..].trim_start();
    let gap = tail.find("  ")?;
    let location = tail[..gap].to_string();
    let solution_type = tail[gap..].trim().to_string();

    Some(Event {
        date: date.to_string(),
        time: time.to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        depth: depth.to_string(),
        magnitude_duration,
        magnitude_local,
        magnitude_moment,
        location,
        solution_type,
    })
}

/// Advance past leading whitespace and return the next whitespace-delimited
/// token, updating `pos` to the byte offset just past it.
fn next_token<'a>(line: &'a str, pos: &mut usize) -> Option<&'a str> {
    let rest = &line[*pos..];
    let start = rest.find(|c: char| !c.is_whitespace())?;
    let token = &rest[start..];
    let len = token
        .find(char::is_whitespace)
        .unwrap_or(token.len());
    *pos += start + len;
    Some(&token[..len])
}

/// Validate a 3-column magnitude slot, mapping the placeholder to an empty
/// string.
fn magnitude(token: &str) -> Option<String> {
    if token.chars().count() != 3 {
        return None;
    }
    if token == NO_MAGNITUDE {
        Some(String::new())
    } else {
        Some(token.to_string())
    }
}

fn digits(s: &str, min: usize, max: usize) -> bool {
    s.len() >= min && s.len() <= max && s.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY.M.D` with a 4-digit year and 1–2 digit month and day.
fn is_date(s: &str) -> bool {
    let mut parts = s.split('.');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(y), Some(m), Some(d), None)
            if digits(y, 4, 4) && digits(m, 1, 2) && digits(d, 1, 2)
    )
}

/// `HH:MM:SS`, all three groups exactly two digits.
fn is_time(s: &str) -> bool {
    let mut parts = s.split(':');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(h), Some(m), Some(sec), None)
            if digits(h, 2, 2) && digits(m, 2, 2) && digits(sec, 2, 2)
    )
}

/// Decimal degrees with exactly four fractional digits.
fn is_coordinate(s: &str) -> bool {
    let mut parts = s.split('.');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(whole), Some(frac), None) if digits(whole, 1, 2) && digits(frac, 4, 4)
    )
}

/// Depth in km, 1–2 digits either side of the point.
fn is_depth(s: &str) -> bool {
    let mut parts = s.split('.');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(whole), Some(frac), None) if digits(whole, 1, 2) && digits(frac, 1, 2)
    )
}
