use std::collections::HashMap;
use std::sync::Arc;

use crate::atlas::{LocationId, RoadAtlas};

/// One traversal direction of a road segment within the routing graph.
#[derive(Debug, Clone)]
pub struct RoadEdge {
    pub target: LocationId,
    pub length: f64,
    pub speed_limit: f64,
    pub road_name: Arc<str>,
}

/// Graph structure used by the search engine, with the one-time global
/// maxima consumed by the cost model.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    adjacency: Arc<HashMap<LocationId, Vec<RoadEdge>>>,
    max_speed_limit: f64,
    max_segment_length: f64,
}

impl RoadNetwork {
    /// Return every segment incident to `location`, in segment load order.
    /// Unknown locations simply have no neighbours.
    pub fn neighbours(&self, location: LocationId) -> &[RoadEdge] {
        self.adjacency
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Greatest speed limit over every segment in the network.
    pub fn max_speed_limit(&self) -> f64 {
        self.max_speed_limit
    }

    /// Greatest length over every segment in the network.
    pub fn max_segment_length(&self) -> f64 {
        self.max_segment_length
    }
}

/// Build the symmetric adjacency for the atlas: every segment is traversable
/// in both directions with identical length, speed limit, and road name.
/// Parallel segments between the same pair stay distinct.
pub fn build_network(atlas: &RoadAtlas) -> RoadNetwork {
    let mut adjacency: HashMap<LocationId, Vec<RoadEdge>> = HashMap::new();
    let mut max_speed_limit = 0.0f64;
    let mut max_segment_length = 0.0f64;

    for segment in atlas.segments() {
        max_speed_limit = max_speed_limit.max(segment.speed_limit);
        max_segment_length = max_segment_length.max(segment.length);

        adjacency.entry(segment.from).or_default().push(RoadEdge {
            target: segment.to,
            length: segment.length,
            speed_limit: segment.speed_limit,
            road_name: Arc::clone(&segment.road_name),
        });
        adjacency.entry(segment.to).or_default().push(RoadEdge {
            target: segment.from,
            length: segment.length,
            speed_limit: segment.speed_limit,
            road_name: Arc::clone(&segment.road_name),
        });
    }

    RoadNetwork {
        adjacency: Arc::new(adjacency),
        max_speed_limit,
        max_segment_length,
    }
}
