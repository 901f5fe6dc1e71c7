//! Frontier replacement behaviour for the cost kinds whose heuristics are
//! treated as consistent (`segments` and `delivery`).

mod common;

use common::load_fixture;
use waymark_lib::{plan_route, CostKind, RouteRequest};

/// A and C are coordinated endpoints; X and B are uncoordinated junctions
/// with no heuristic signal. The expensive detour through X discovers C
/// first (X pops before B), so the engine must replace C's frontier entry
/// when the cheaper path through B turns up.
const GPS: &str = "A 39.0 -86.0\nC 39.1 -86.0\n";
const SEGMENTS: &str = "\
A X 1 30 Spur-1
X C 100 30 Spur-2
A B 5 30 Main-1
B C 1 30 Main-2
";

#[test]
fn cheaper_late_discovery_replaces_the_frontier_entry() {
    let (atlas, network) = load_fixture(GPS, SEGMENTS);

    let route = plan_route(&atlas, &network, &RouteRequest::new("A", "C", CostKind::Delivery))
        .expect("route exists");

    let b = atlas.location_id_by_name("B").unwrap();
    let c = atlas.location_id_by_name("C").unwrap();
    assert_eq!(
        route.stops.iter().map(|s| s.location).collect::<Vec<_>>(),
        vec![b, c]
    );
    assert!((route.total_miles - 6.0).abs() < 1e-9);
    // All speed limits sit below the mistake threshold, so delivery time
    // degenerates to plain travel time.
    assert!((route.total_delivery_hours - route.total_hours).abs() < 1e-9);
}

#[test]
fn segments_search_is_not_misled_by_first_discovery_order() {
    // The three-segment chain is listed first and discovered first; the
    // two-segment route must still win under the segments cost.
    let gps = "A 39.0 -86.0\nZ 39.1 -86.0\n";
    let segments = "\
A P 1 30 Chain-1
P Q 1 30 Chain-2
Q Z 1 30 Chain-3
A M 40 55 Direct-1
M Z 40 55 Direct-2
";
    let (atlas, network) = load_fixture(gps, segments);

    let route = plan_route(&atlas, &network, &RouteRequest::new("A", "Z", CostKind::Segments))
        .expect("route exists");
    assert_eq!(route.total_segments, 2);
    let m = atlas.location_id_by_name("M").unwrap();
    assert_eq!(route.stops[0].location, m);
}
