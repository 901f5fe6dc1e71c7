//! High-level route planning: name resolution, anchor resolution, and the
//! search itself, wired together behind one entry point.
//!
//! The atlas and network are borrowed read-only, so a host may run any
//! number of concurrent searches against the same loaded tables; each
//! invocation owns its own frontier.

use tracing::debug;

use crate::anchor::resolve_heuristic;
use crate::atlas::{LocationId, RoadAtlas};
use crate::cost::{CostKind, CostModel, PathTotals};
use crate::error::{Error, Result};
use crate::graph::RoadNetwork;
use crate::search::{find_route, RouteStop};

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub cost: CostKind,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, cost: CostKind) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            cost,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub cost: CostKind,
    pub start: LocationId,
    pub goal: LocationId,
    pub total_segments: usize,
    pub total_miles: f64,
    pub total_hours: f64,
    pub total_delivery_hours: f64,
    pub stops: Vec<RouteStop>,
}

impl Route {
    /// Number of traversed segments in the route.
    pub fn hop_count(&self) -> usize {
        self.stops.len()
    }

    fn from_parts(
        request: &RouteRequest,
        start: LocationId,
        goal: LocationId,
        totals: PathTotals,
        stops: Vec<RouteStop>,
    ) -> Self {
        Self {
            cost: request.cost,
            start,
            goal,
            total_segments: totals.segments,
            total_miles: totals.miles,
            total_hours: totals.hours,
            total_delivery_hours: totals.delivery_hours,
            stops,
        }
    }
}

/// Resolve a location name to its identifier, with fuzzy suggestions when
/// the lookup fails.
fn resolve_location(atlas: &RoadAtlas, name: &str) -> Result<LocationId> {
    atlas.location_id_by_name(name).ok_or_else(|| {
        let suggestions = atlas.fuzzy_location_matches(name, 3);
        Error::UnknownLocation {
            name: name.to_string(),
            suggestions,
        }
    })
}

/// Compute a route between two named locations under the requested cost
/// function.
///
/// Steps:
/// 1. Resolve both names against the atlas.
/// 2. Short-circuit `start == goal` with zero totals and an empty path.
/// 3. Resolve heuristic anchors for uncoordinated endpoints.
/// 4. Run the search; an exhausted frontier surfaces as [`Error::RouteNotFound`].
pub fn plan_route(
    atlas: &RoadAtlas,
    network: &RoadNetwork,
    request: &RouteRequest,
) -> Result<Route> {
    let start = resolve_location(atlas, &request.start)?;
    let goal = resolve_location(atlas, &request.goal)?;

    if start == goal {
        return Ok(Route::from_parts(
            request,
            start,
            goal,
            PathTotals::ZERO,
            Vec::new(),
        ));
    }

    let model = CostModel::new(request.cost, network);
    let heuristic = resolve_heuristic(atlas, network, &model, start, goal)?;
    debug!(
        cost = %request.cost,
        initial_estimate = heuristic.initial,
        "starting route search"
    );

    let metrics = find_route(network, atlas, &model, start, goal, &heuristic).ok_or_else(|| {
        Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        }
    })?;

    Ok(Route::from_parts(
        request,
        start,
        goal,
        metrics.totals,
        metrics.stops,
    ))
}
