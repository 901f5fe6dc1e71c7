//! Priority-ordered A* traversal of the road network.
//!
//! The engine pops the minimum-priority frontier entry, expands its
//! neighbours through the road network, accumulates costs through the cost
//! model, and terminates when the destination is popped. Entries carry their
//! full path so the result can report every traversed segment; states are
//! never mutated in place.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::anchor::ResolvedHeuristic;
use crate::atlas::{LocationId, RoadAtlas};
use crate::cost::{CostModel, PathTotals};
use crate::graph::RoadNetwork;

/// One traversed segment of a discovered route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub location: LocationId,
    pub road_name: Arc<str>,
    pub length: f64,
}

/// Accumulated metrics and path of a finished search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteMetrics {
    pub totals: PathTotals,
    pub stops: Vec<RouteStop>,
}

/// Run the A* search from `start` to `goal` under the given cost model and
/// resolved heuristic anchor. Returns `None` when the frontier empties
/// before the goal is popped.
pub fn find_route(
    network: &RoadNetwork,
    atlas: &RoadAtlas,
    model: &CostModel,
    start: LocationId,
    goal: LocationId,
    heuristic: &ResolvedHeuristic,
) -> Option<RouteMetrics> {
    if start == goal {
        return Some(RouteMetrics::default());
    }

    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;
    // Locations finalized under the first-visit-wins policy.
    let mut visited: HashSet<LocationId> = HashSet::new();
    // Cheapest priority known per location, frontier or finalized. Only
    // consulted for cost kinds that permit re-expansion.
    let mut best_priority: HashMap<LocationId, f64> = HashMap::new();

    frontier.push(FrontierEntry {
        priority: FloatOrd(heuristic.initial),
        sequence,
        state: SearchState {
            location: start,
            totals: PathTotals::ZERO,
            stops: Vec::new(),
        },
    });
    best_priority.insert(start, heuristic.initial);

    let mut expansions = 0usize;
    while let Some(entry) = frontier.pop() {
        let location = entry.state.location;

        if model.reopens_visited() {
            // A cheaper replacement was pushed after this entry; skip the
            // superseded one instead of scanning the heap to remove it.
            if best_priority
                .get(&location)
                .is_some_and(|&best| entry.priority.0 > best)
            {
                continue;
            }
        } else if visited.contains(&location) {
            continue;
        }

        if location == goal {
            debug!(expansions, "search reached the destination");
            return Some(RouteMetrics {
                totals: entry.state.totals,
                stops: entry.state.stops,
            });
        }

        visited.insert(location);
        expansions += 1;

        for edge in network.neighbours(location) {
            if !model.reopens_visited() && visited.contains(&edge.target) {
                continue;
            }

            let totals = entry.state.totals.advance(edge);
            let estimate = atlas
                .coordinate_of(edge.target)
                .map(|coordinate| model.heuristic(&coordinate, &heuristic.goal))
                .unwrap_or(0.0);
            let priority = model.objective(&totals) + estimate;

            if model.reopens_visited() {
                if best_priority
                    .get(&edge.target)
                    .is_some_and(|&best| priority >= best)
                {
                    continue;
                }
                best_priority.insert(edge.target, priority);
                visited.remove(&edge.target);
            }

            let mut stops = entry.state.stops.clone();
            stops.push(RouteStop {
                location: edge.target,
                road_name: Arc::clone(&edge.road_name),
                length: edge.length,
            });

            sequence += 1;
            frontier.push(FrontierEntry {
                priority: FloatOrd(priority),
                sequence,
                state: SearchState {
                    location: edge.target,
                    totals,
                    stops,
                },
            });
        }
    }

    debug!(expansions, "frontier exhausted without reaching the destination");
    None
}

/// Immutable search state attached to a frontier entry.
#[derive(Debug, Clone)]
struct SearchState {
    location: LocationId,
    totals: PathTotals,
    stops: Vec<RouteStop>,
}

/// Frontier entry ordered by priority, ties broken by insertion sequence.
/// Path contents never participate in the ordering.
#[derive(Debug, Clone)]
struct FrontierEntry {
    priority: FloatOrd,
    sequence: u64,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
