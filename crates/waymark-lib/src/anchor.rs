//! Heuristic anchor resolution for endpoints without a coordinate.
//!
//! Highway junctions have no entry in the geocoding table, so the search
//! cannot aim its heuristic at them directly. Resolution runs once before
//! the frontier is seeded and substitutes the nearest coordinated direct
//! neighbour as a fixed geometric surrogate for the rest of the search.

use tracing::debug;

use crate::atlas::{Coordinate, LocationId, RoadAtlas};
use crate::cost::CostModel;
use crate::error::{Error, Result};
use crate::graph::RoadNetwork;

/// Fixed heuristic inputs for one search: the goal coordinate every estimate
/// aims at, and the heuristic value used to seed the frontier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHeuristic {
    pub goal: Coordinate,
    pub initial: f64,
}

/// Resolve the start/goal coordinates for a search, substituting anchors for
/// uncoordinated endpoints.
///
/// Fails with [`Error::NoHeuristicAnchor`] when an uncoordinated endpoint
/// has no coordinated direct neighbour; scanning deeper than one hop is
/// deliberately not attempted.
pub fn resolve_heuristic(
    atlas: &RoadAtlas,
    network: &RoadNetwork,
    model: &CostModel,
    start: LocationId,
    goal: LocationId,
) -> Result<ResolvedHeuristic> {
    let start_coordinate = atlas.coordinate_of(start);
    let goal_coordinate = atlas.coordinate_of(goal);

    let resolved = match (start_coordinate, goal_coordinate) {
        (Some(start_coordinate), Some(goal_coordinate)) => ResolvedHeuristic {
            goal: goal_coordinate,
            initial: model.heuristic(&start_coordinate, &goal_coordinate),
        },
        // Uninformed first step: there is nothing to measure the start
        // against, but the goal itself is usable for every later estimate.
        (None, Some(goal_coordinate)) => ResolvedHeuristic {
            goal: goal_coordinate,
            initial: 0.0,
        },
        (Some(start_coordinate), None) => {
            let (anchor, initial) =
                nearest_anchor(atlas, network, model, goal, &start_coordinate)?;
            debug!(
                goal = atlas.location_name(goal).unwrap_or("<unknown>"),
                "anchored uncoordinated goal to a neighbouring coordinate"
            );
            ResolvedHeuristic {
                goal: anchor,
                initial,
            }
        }
        (None, None) => {
            let start_candidates = coordinated_neighbours(atlas, network, start);
            if start_candidates.is_empty() {
                return Err(no_anchor(atlas, start));
            }
            let goal_candidates = coordinated_neighbours(atlas, network, goal);
            if goal_candidates.is_empty() {
                return Err(no_anchor(atlas, goal));
            }

            let mut best: Option<ResolvedHeuristic> = None;
            for start_candidate in &start_candidates {
                for goal_candidate in &goal_candidates {
                    let estimate = model.heuristic(start_candidate, goal_candidate);
                    if best.map_or(true, |resolved| estimate < resolved.initial) {
                        best = Some(ResolvedHeuristic {
                            goal: *goal_candidate,
                            initial: estimate,
                        });
                    }
                }
            }
            // Both candidate lists are non-empty, so a minimum exists.
            best.expect("anchor candidates were checked non-empty")
        }
    };

    Ok(resolved)
}

/// Coordinated neighbour of `location` minimizing the heuristic from
/// `reference`, with the minimized value.
fn nearest_anchor(
    atlas: &RoadAtlas,
    network: &RoadNetwork,
    model: &CostModel,
    location: LocationId,
    reference: &Coordinate,
) -> Result<(Coordinate, f64)> {
    let mut best: Option<(Coordinate, f64)> = None;
    for edge in network.neighbours(location) {
        let Some(candidate) = atlas.coordinate_of(edge.target) else {
            continue;
        };
        let estimate = model.heuristic(reference, &candidate);
        if best.map_or(true, |(_, value)| estimate < value) {
            best = Some((candidate, estimate));
        }
    }
    best.ok_or_else(|| no_anchor(atlas, location))
}

fn coordinated_neighbours(
    atlas: &RoadAtlas,
    network: &RoadNetwork,
    location: LocationId,
) -> Vec<Coordinate> {
    network
        .neighbours(location)
        .iter()
        .filter_map(|edge| atlas.coordinate_of(edge.target))
        .collect()
}

fn no_anchor(atlas: &RoadAtlas, location: LocationId) -> Error {
    Error::NoHeuristicAnchor {
        name: atlas
            .location_name(location)
            .unwrap_or("<unknown>")
            .to_string(),
    }
}
