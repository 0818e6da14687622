//! Common types used throughout the Kandilli feed service.

use serde::{Deserialize, Serialize};

/// One seismic event parsed from the observatory listing.
///
/// Every field is carried as the substring extracted from the fixed-layout
/// source line. The three magnitude fields are empty when the listing shows
/// the `-.-` placeholder, meaning no magnitude of that type was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event date, `YYYY.MM.DD`.
    pub date: String,
    /// Event time, `HH:MM:SS`.
    pub time: String,
    /// Latitude in decimal degrees, four fractional digits.
    pub latitude: String,
    /// Longitude in decimal degrees, four fractional digits.
    pub longitude: String,
    /// Depth in kilometers.
    pub depth: String,
    /// Duration magnitude (Md), empty when not reported.
    pub magnitude_duration: String,
    /// Local magnitude (Ml), empty when not reported.
    pub magnitude_local: String,
    /// Moment magnitude (Mw), empty when not reported.
    pub magnitude_moment: String,
    /// Region or settlement name, trimmed.
    pub location: String,
    /// Solution quality tail of the line, trimmed.
    pub solution_type: String,
}
