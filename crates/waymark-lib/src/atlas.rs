use std::collections::HashMap;
use std::sync::Arc;

/// Numeric identifier for a location, assigned in load order.
pub type LocationId = u32;

/// Twice the Earth radius in miles, the scale constant of the haversine
/// great-circle formula (2 * 3958.8).
const EARTH_DIAMETER_MILES: f64 = 7_917.6;

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Great-circle distance to another coordinate in miles, via the
    /// haversine formula.
    pub fn great_circle_to(&self, other: &Self) -> f64 {
        let phi_1 = self.latitude.to_radians();
        let phi_2 = other.latitude.to_radians();
        let lambda_1 = self.longitude.to_radians();
        let lambda_2 = other.longitude.to_radians();

        let h = (haversine(phi_2 - phi_1)
            + phi_1.cos() * phi_2.cos() * haversine(lambda_2 - lambda_1))
        .sqrt();

        EARTH_DIAMETER_MILES * h.min(1.0).asin()
    }
}

fn haversine(theta: f64) -> f64 {
    (1.0 - theta.cos()) / 2.0
}

/// A named place on the map. Highway junctions typically have no coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub coordinate: Option<Coordinate>,
}

/// An undirected road segment between two locations, as loaded from the
/// segment table. A pair of locations may be joined by several records.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRecord {
    pub from: LocationId,
    pub to: LocationId,
    pub length: f64,
    pub speed_limit: f64,
    pub road_name: Arc<str>,
}

/// In-memory representation of the road atlas: the geocoding table plus the
/// ordered list of road segments. Built once, read-only afterwards; a shared
/// reference may serve any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct RoadAtlas {
    locations: Vec<Location>,
    name_to_id: HashMap<String, LocationId>,
    segments: Vec<SegmentRecord>,
}

impl RoadAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identifier for `name`, creating an uncoordinated entry on
    /// first sight.
    pub fn intern(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.locations.len() as LocationId;
        self.locations.push(Location {
            id,
            name: name.to_string(),
            coordinate: None,
        });
        self.name_to_id.insert(name.to_string(), id);
        id
    }

    /// Attach a coordinate to a location, returning the previous value.
    pub fn set_coordinate(
        &mut self,
        id: LocationId,
        coordinate: Coordinate,
    ) -> Option<Coordinate> {
        let location = &mut self.locations[id as usize];
        location.coordinate.replace(coordinate)
    }

    /// Record a road segment between two already-interned locations.
    pub fn push_segment(&mut self, segment: SegmentRecord) {
        self.segments.push(segment);
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.locations.get(id as usize).map(|loc| loc.name.as_str())
    }

    /// Coordinate of a location, if the geocoding table had one.
    pub fn coordinate_of(&self, id: LocationId) -> Option<Coordinate> {
        self.locations.get(id as usize).and_then(|loc| loc.coordinate)
    }

    /// All locations in intern order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All road segments in load order.
    pub fn segments(&self) -> &[SegmentRecord] {
        &self.segments
    }

    /// Closest location names to `name` by Jaro-Winkler similarity, for
    /// "did you mean" suggestions on failed lookups.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|loc| (strsim::jaro_winkler(name, &loc.name), loc.name.as_str()))
            .filter(|(score, _)| *score >= 0.85)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}
