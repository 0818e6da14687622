//! Filter predicates applied to a freshly fetched listing.
//!
//! All filters are pure functions over the parsed snapshot; they never see
//! the network. Numeric comparisons happen in plain degree-space, not along
//! the geodesic.

use kandilli_common::Event;
use serde::Deserialize;

/// Keep events whose date and time start with the given prefixes.
///
/// An empty prefix matches everything, so absent query parameters degrade to
/// match-all.
pub fn at(events: &[Event], date: &str, time: &str) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.date.starts_with(date) && e.time.starts_with(time))
        .cloned()
        .collect()
}

/// Keep events within `radius` of `(latitude, longitude)`, measured as
/// Euclidean distance on the raw coordinate values.
///
/// Events whose stored coordinates fail to parse are excluded, as is
/// everything when the caller passes NaN for either center coordinate.
pub fn near(events: &[Event], latitude: f64, longitude: f64, radius: f64) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            let (Ok(lat), Ok(lon)) = (e.latitude.parse::<f64>(), e.longitude.parse::<f64>())
            else {
                return false;
            };
            let distance = ((lat - latitude).powi(2) + (lon - longitude).powi(2)).sqrt();
            distance <= radius
        })
        .cloned()
        .collect()
}

/// Keep events whose location contains `needle`, case-insensitively.
pub fn in_location(events: &[Event], needle: &str) -> Vec<Event> {
    let needle = needle.to_lowercase();
    events
        .iter()
        .filter(|e| e.location.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Optional per-field criteria combined as a conjunction.
///
/// Every field is a prefix match on the stored string except `location`,
/// which is a case-insensitive substring match. Absent fields impose
/// nothing, so an empty criteria set keeps the whole listing.
#[derive(Debug, Default, Deserialize)]
pub struct Criteria {
    pub date: Option<String>,
    pub time: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub depth: Option<String>,
    pub md: Option<String>,
    pub ml: Option<String>,
    pub mw: Option<String>,
    pub location: Option<String>,
}

/// Keep events matching every present criterion.
pub fn matching(events: &[Event], criteria: &Criteria) -> Vec<Event> {
    events
        .iter()
        .filter(|e| matches(e, criteria))
        .cloned()
        .collect()
}

fn matches(event: &Event, criteria: &Criteria) -> bool {
    prefix(&event.date, &criteria.date)
        && prefix(&event.time, &criteria.time)
        && prefix(&event.latitude, &criteria.latitude)
        && prefix(&event.longitude, &criteria.longitude)
        && prefix(&event.depth, &criteria.depth)
        && prefix(&event.magnitude_duration, &criteria.md)
        && prefix(&event.magnitude_local, &criteria.ml)
        && prefix(&event.magnitude_moment, &criteria.mw)
        && criteria
            .location
            .as_ref()
            .map_or(true, |needle| {
                event.location.to_lowercase().contains(&needle.to_lowercase())
            })
}

fn prefix(value: &str, wanted: &Option<String>) -> bool {
    wanted.as_ref().map_or(true, |w| value.starts_with(w.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: &str, time: &str, lat: &str, lon: &str, location: &str) -> Event {
        Event {
            date: date.to_string(),
            time: time.to_string(),
            latitude: lat.to_string(),
            longitude: lon.to_string(),
            depth: "7.2".to_string(),
            magnitude_duration: String::new(),
            magnitude_local: "3.1".to_string(),
            magnitude_moment: String::new(),
            location: location.to_string(),
            solution_type: "Quick".to_string(),
        }
    }

    fn listing() -> Vec<Event> {
        vec![
            event("2023.05.12", "14:22:10", "39.1234", "28.5678", "AEGEAN SEA"),
            event("2023.05.12", "09:00:00", "40.0000", "29.0000", "GEMLIK (BURSA)"),
            event("2023.05.11", "23:59:59", "36.2000", "30.1000", "AKDENIZ"),
        ]
    }

    #[test]
    fn test_at_prefixes() {
        let events = listing();

        assert_eq!(at(&events, "2023.05.12", "").len(), 2);
        assert_eq!(at(&events, "2023.05.12", "14").len(), 1);
        assert_eq!(at(&events, "", "").len(), 3);
        assert!(at(&events, "2024", "").is_empty());
    }

    #[test]
    fn test_near_exact_and_wide() {
        let events = listing();

        // radius 0 keeps exact coordinate matches only
        let exact = near(&events, 39.1234, 28.5678, 0.0);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].location, "AEGEAN SEA");

        // a radius covering the whole listing keeps everything
        assert_eq!(near(&events, 38.0, 29.0, 90.0).len(), 3);

        // NaN center coordinates match nothing
        assert!(near(&events, f64::NAN, 28.5678, 10.0).is_empty());
    }

    #[test]
    fn test_near_skips_unparsable_coordinates() {
        let mut events = listing();
        events[0].latitude = "not a number".to_string();

        assert!(near(&events, 39.1234, 28.5678, 0.0).is_empty());
    }

    #[test]
    fn test_in_location_is_case_insensitive() {
        let events = listing();

        let lower = in_location(&events, "gemlik");
        let upper = in_location(&events, "GEMLIK");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);

        assert!(in_location(&events, "istanbul").is_empty());
    }

    #[test]
    fn test_matching_without_criteria_keeps_everything() {
        let events = listing();
        assert_eq!(matching(&events, &Criteria::default()).len(), events.len());
    }

    #[test]
    fn test_matching_is_a_conjunction() {
        let events = listing();

        let criteria = Criteria {
            date: Some("2023.05.12".to_string()),
            ml: Some("3".to_string()),
            location: Some("aegean".to_string()),
            ..Criteria::default()
        };
        let matched = matching(&events, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].location, "AEGEAN SEA");

        // one failing criterion rejects the record
        let criteria = Criteria {
            date: Some("2023.05.12".to_string()),
            ml: Some("9".to_string()),
            ..Criteria::default()
        };
        assert!(matching(&events, &criteria).is_empty());
    }

    #[test]
    fn test_matching_empty_magnitude_prefix() {
        let events = listing();

        // every listed event has an empty duration magnitude; a non-empty
        // prefix on it can never match
        let criteria = Criteria {
            md: Some("3".to_string()),
            ..Criteria::default()
        };
        assert!(matching(&events, &criteria).is_empty());
    }
}
