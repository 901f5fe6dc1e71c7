use std::fmt::Write;

use serde::Serialize;

use crate::atlas::{LocationId, RoadAtlas};
use crate::cost::CostKind;
use crate::routing::Route;

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable segment description, `"<road> for <length> miles"`.
    pub description: String,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub cost: CostKind,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub total_segments: usize,
    pub total_miles: f64,
    pub total_hours: f64,
    pub total_delivery_hours: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a structured summary with resolved names.
    pub fn from_route(atlas: &RoadAtlas, route: &Route) -> Self {
        let steps = route
            .stops
            .iter()
            .enumerate()
            .map(|(index, stop)| RouteStep {
                index,
                id: stop.location,
                name: atlas.location_name(stop.location).map(str::to_string),
                description: format!("{} for {} miles", stop.road_name, stop.length),
            })
            .collect();

        Self {
            cost: route.cost,
            start: endpoint(atlas, route.start),
            goal: endpoint(atlas, route.goal),
            total_segments: route.total_segments,
            total_miles: route.total_miles,
            total_hours: route.total_hours,
            total_delivery_hours: route.total_delivery_hours,
            steps,
        }
    }

    /// Render the step-by-step listing followed by the four summary metrics.
    pub fn render_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Start in {}", self.start.display_name());
        for step in &self.steps {
            let _ = writeln!(
                out,
                "   Then go to {} via {}",
                step.display_name(),
                step.description
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "          Total segments: {:4}", self.total_segments);
        let _ = writeln!(out, "             Total miles: {:8.3}", self.total_miles);
        let _ = writeln!(out, "             Total hours: {:8.3}", self.total_hours);
        let _ = writeln!(
            out,
            "Total hours for delivery: {:8.3}",
            self.total_delivery_hours
        );
        out
    }
}

fn endpoint(atlas: &RoadAtlas, id: LocationId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: atlas.location_name(id).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RouteSummary {
        RouteSummary {
            cost: CostKind::Distance,
            start: RouteEndpoint {
                id: 0,
                name: Some("A".to_string()),
            },
            goal: RouteEndpoint {
                id: 2,
                name: Some("C".to_string()),
            },
            total_segments: 2,
            total_miles: 80.0,
            total_hours: 1.5833333,
            total_delivery_hours: 1.5833333,
            steps: vec![
                RouteStep {
                    index: 0,
                    id: 1,
                    name: Some("B".to_string()),
                    description: "I-1 for 50 miles".to_string(),
                },
                RouteStep {
                    index: 1,
                    id: 2,
                    name: Some("C".to_string()),
                    description: "Hwy-2 for 30 miles".to_string(),
                },
            ],
        }
    }

    #[test]
    fn plain_text_render_lists_steps_and_totals() {
        let text = summary().render_plain_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Start in A");
        assert_eq!(lines[1], "   Then go to B via I-1 for 50 miles");
        assert_eq!(lines[2], "   Then go to C via Hwy-2 for 30 miles");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "          Total segments:    2");
        assert_eq!(lines[5], "             Total miles:   80.000");
        assert_eq!(lines[6], "             Total hours:    1.583");
        assert_eq!(lines[7], "Total hours for delivery:    1.583");
    }

    #[test]
    fn summary_serialises_to_json() {
        let value = serde_json::to_value(summary()).expect("serialise summary");
        assert_eq!(value["cost"], "distance");
        assert_eq!(value["total_segments"], 2);
        assert_eq!(value["steps"][0]["description"], "I-1 for 50 miles");
    }
}
