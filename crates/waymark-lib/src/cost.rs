//! Cost model: per cost-function edge increments and heuristic estimates.
//!
//! Each [`CostKind`] pairs an incremental edge cost (the g term) with a
//! great-circle heuristic estimate of the remaining cost (the h term). The
//! `time`, `segments`, and `delivery` heuristics are scaled by the network
//! maxima so they never overestimate; the `distance` heuristic keeps its
//! historical constant offset of 20 miles, which makes it inadmissible for
//! node pairs closer than 20 miles (see DESIGN.md).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::atlas::Coordinate;
use crate::error::Error;
use crate::graph::{RoadEdge, RoadNetwork};

/// Speed limit at or above which routing mistakes are modelled on a segment.
const MISTAKE_SPEED_LIMIT: f64 = 50.0;

/// Distance scale of the mistake probability, `p = tanh(length / 1000)`.
const MISTAKE_LENGTH_SCALE: f64 = 1_000.0;

/// Constant subtracted from the `distance` heuristic.
const DISTANCE_HEURISTIC_OFFSET: f64 = 20.0;

/// Cost function selecting which edge-cost/heuristic pair drives a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    /// Fewest road segments.
    Segments,
    /// Shortest total distance in miles.
    #[default]
    Distance,
    /// Shortest total travel time in hours.
    Time,
    /// Shortest expected delivery time, accounting for redo risk on fast roads.
    Delivery,
}

impl CostKind {
    /// All supported kinds, in the order the CLI documents them.
    pub const ALL: [CostKind; 4] = [
        CostKind::Segments,
        CostKind::Distance,
        CostKind::Time,
        CostKind::Delivery,
    ];
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostKind::Segments => "segments",
            CostKind::Distance => "distance",
            CostKind::Time => "time",
            CostKind::Delivery => "delivery",
        };
        f.write_str(value)
    }
}

impl FromStr for CostKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "segments" => Ok(CostKind::Segments),
            "distance" => Ok(CostKind::Distance),
            "time" => Ok(CostKind::Time),
            "delivery" => Ok(CostKind::Delivery),
            other => Err(Error::UnknownCostKind {
                name: other.to_string(),
            }),
        }
    }
}

/// Metrics accumulated along a path. All four are carried regardless of the
/// active cost kind so the final route can report every total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathTotals {
    pub segments: usize,
    pub miles: f64,
    pub hours: f64,
    pub delivery_hours: f64,
}

impl PathTotals {
    pub const ZERO: PathTotals = PathTotals {
        segments: 0,
        miles: 0.0,
        hours: 0.0,
        delivery_hours: 0.0,
    };

    /// Totals after traversing `edge` from a path with these totals.
    ///
    /// The delivery recurrence models a probability `p` that the driver must
    /// redo the segment round-trip: `delta = t_road + 2 * p * (t_road + t_trip)`
    /// where `t_trip` is the delivery time accumulated so far. Mistakes are
    /// only modelled on segments with a speed limit of 50 or higher.
    pub fn advance(&self, edge: &RoadEdge) -> PathTotals {
        let road_hours = edge.length / edge.speed_limit;
        let mistake_probability = if edge.speed_limit >= MISTAKE_SPEED_LIMIT {
            (edge.length / MISTAKE_LENGTH_SCALE).tanh()
        } else {
            0.0
        };
        let delivery_delta =
            road_hours + 2.0 * mistake_probability * (road_hours + self.delivery_hours);

        PathTotals {
            segments: self.segments + 1,
            miles: self.miles + edge.length,
            hours: self.hours + road_hours,
            delivery_hours: self.delivery_hours + delivery_delta,
        }
    }
}

/// Cost/heuristic pair for one search, parameterised by the network maxima.
#[derive(Debug, Clone, Copy)]
pub struct CostModel {
    kind: CostKind,
    max_speed_limit: f64,
    max_segment_length: f64,
}

impl CostModel {
    pub fn new(kind: CostKind, network: &RoadNetwork) -> Self {
        Self {
            kind,
            max_speed_limit: network.max_speed_limit(),
            max_segment_length: network.max_segment_length(),
        }
    }

    pub fn kind(&self) -> CostKind {
        self.kind
    }

    /// The accumulated metric the active cost kind optimises (the g term).
    pub fn objective(&self, totals: &PathTotals) -> f64 {
        match self.kind {
            CostKind::Segments => totals.segments as f64,
            CostKind::Distance => totals.miles,
            CostKind::Time => totals.hours,
            CostKind::Delivery => totals.delivery_hours,
        }
    }

    /// Heuristic estimate of the remaining cost from `from` to `to`.
    pub fn heuristic(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        let great_circle = from.great_circle_to(to);
        match self.kind {
            CostKind::Distance => great_circle - DISTANCE_HEURISTIC_OFFSET,
            CostKind::Time | CostKind::Delivery => great_circle / self.max_speed_limit,
            CostKind::Segments => great_circle / self.max_segment_length,
        }
    }

    /// Whether the search may re-expand an already finalized location when a
    /// cheaper path to it turns up. Holds for the kinds whose heuristics are
    /// consistent.
    pub fn reopens_visited(&self) -> bool {
        matches!(self.kind, CostKind::Segments | CostKind::Delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn edge(length: f64, speed_limit: f64) -> RoadEdge {
        RoadEdge {
            target: 1,
            length,
            speed_limit,
            road_name: Arc::from("I-1"),
        }
    }

    #[test]
    fn cost_kind_parses_the_four_names() {
        for kind in CostKind::ALL {
            assert_eq!(kind.to_string().parse::<CostKind>().unwrap(), kind);
        }
    }

    #[test]
    fn cost_kind_rejects_unknown_names() {
        let err = "scenic".parse::<CostKind>().unwrap_err();
        assert!(err.to_string().contains("unknown cost function"));
    }

    #[test]
    fn delivery_recurrence_on_a_fast_segment() {
        let totals = PathTotals::ZERO.advance(&edge(1_000.0, 60.0));

        let p = 1.0f64.tanh();
        let t_road = 1_000.0 / 60.0;
        let expected_delta = t_road + 2.0 * p * t_road;

        assert_eq!(totals.segments, 1);
        assert!((totals.miles - 1_000.0).abs() < 1e-9);
        assert!((totals.hours - t_road).abs() < 1e-9);
        assert!((totals.delivery_hours - expected_delta).abs() < 1e-9);
    }

    #[test]
    fn delivery_risk_skips_slow_segments() {
        let totals = PathTotals::ZERO.advance(&edge(1_000.0, 45.0));
        // No mistake term below the 50 mph threshold.
        assert!((totals.delivery_hours - totals.hours).abs() < 1e-9);
    }

    #[test]
    fn delivery_risk_compounds_with_trip_time() {
        let first = PathTotals::ZERO.advance(&edge(100.0, 60.0));
        let second = first.advance(&edge(100.0, 60.0));

        let p = 0.1f64.tanh();
        let t_road = 100.0 / 60.0;
        let expected_second_delta = t_road + 2.0 * p * (t_road + first.delivery_hours);
        assert!(
            (second.delivery_hours - first.delivery_hours - expected_second_delta).abs() < 1e-9
        );
    }

    #[test]
    fn objective_tracks_the_active_kind() {
        let totals = PathTotals {
            segments: 3,
            miles: 120.0,
            hours: 2.0,
            delivery_hours: 2.5,
        };
        let network = RoadNetwork::default();
        assert_eq!(
            CostModel::new(CostKind::Segments, &network).objective(&totals),
            3.0
        );
        assert_eq!(
            CostModel::new(CostKind::Distance, &network).objective(&totals),
            120.0
        );
        assert_eq!(
            CostModel::new(CostKind::Time, &network).objective(&totals),
            2.0
        );
        assert_eq!(
            CostModel::new(CostKind::Delivery, &network).objective(&totals),
            2.5
        );
    }

    #[test]
    fn heuristics_scale_by_network_maxima() {
        let a = Coordinate {
            latitude: 39.0,
            longitude: -86.0,
        };
        let b = Coordinate {
            latitude: 40.0,
            longitude: -86.0,
        };
        let great_circle = a.great_circle_to(&b);

        let model = CostModel {
            kind: CostKind::Time,
            max_speed_limit: 65.0,
            max_segment_length: 140.0,
        };
        assert!((model.heuristic(&a, &b) - great_circle / 65.0).abs() < 1e-9);

        let model = CostModel {
            kind: CostKind::Segments,
            ..model
        };
        assert!((model.heuristic(&a, &b) - great_circle / 140.0).abs() < 1e-9);

        let model = CostModel {
            kind: CostKind::Distance,
            ..model
        };
        assert!((model.heuristic(&a, &b) - (great_circle - 20.0)).abs() < 1e-9);
    }

    #[test]
    fn only_consistent_kinds_reopen_visited_locations() {
        let network = RoadNetwork::default();
        assert!(CostModel::new(CostKind::Segments, &network).reopens_visited());
        assert!(CostModel::new(CostKind::Delivery, &network).reopens_visited());
        assert!(!CostModel::new(CostKind::Distance, &network).reopens_visited());
        assert!(!CostModel::new(CostKind::Time, &network).reopens_visited());
    }
}
