//! Waymark library entry points.
//!
//! This crate loads a road atlas from its two flat text tables, builds the
//! routing graph, and computes cost-aware routes between named locations
//! with an A* search. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod anchor;
pub mod atlas;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod output;
pub mod routing;
pub mod search;

pub use anchor::{resolve_heuristic, ResolvedHeuristic};
pub use atlas::{Coordinate, Location, LocationId, RoadAtlas, SegmentRecord};
pub use cost::{CostKind, CostModel, PathTotals};
pub use dataset::load_atlas;
pub use error::{Error, Result};
pub use graph::{build_network, RoadEdge, RoadNetwork};
pub use output::{RouteStep, RouteSummary};
pub use routing::{plan_route, Route, RouteRequest};
pub use search::{RouteMetrics, RouteStop};
