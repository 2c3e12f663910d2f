//! Integrationstests fuer die Graph-Abfragen ueber die oeffentliche API:
//! Geometrie-Eigenschaften, Sackgassen-Definition, Enumerations-Vollstaendigkeit
//! und die Kostenheuristik.

use approx::assert_relative_eq;
use glam::Vec2;
use streetmap_core::{
    CostModel, GraphError, NodeId, RoadId, RoadType, StreetMap, StreetMapBuilder, TravelDirection,
};

/// Drei-Punkte-Strasse [(0,0), (10,0), (10,10)] mit Nodes nur an Punkt 0
/// und Punkt 2 — Punkt 1 ist reiner Zwischenpunkt.
fn three_point_road() -> StreetMap {
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(0.0, 0.0));
    let b = builder.add_node(Vec2::new(10.0, 10.0));
    builder.add_road(
        "Winkelweg",
        RoadType::Street,
        false,
        30,
        vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)],
        vec![Some(a), None, Some(b)],
    );
    builder.build().expect("Build muss gelingen")
}

#[test]
fn test_three_point_road_length_and_neighbors() {
    let map = three_point_road();
    let road = map.road(RoadId(0));

    assert_relative_eq!(road.length(), 20.0);

    let adjacent = road.adjacent_nodes(1);
    assert_eq!(adjacent.earlier, Some((NodeId(0), 0.0)));
    assert_eq!(adjacent.later, Some((NodeId(1), 20.0)));
}

#[test]
fn test_length_equals_distance_over_all_points_for_every_road() {
    let map = three_point_road();
    for road in map.roads() {
        assert_relative_eq!(
            road.length(),
            road.distance_between_points(0, road.point_count() - 1)
        );
    }
}

#[test]
fn test_distance_symmetry_over_all_index_pairs() {
    let map = three_point_road();
    let road = map.road(RoadId(0));
    let n = road.point_count();

    for a in 0..n {
        for b in 0..n {
            assert_relative_eq!(
                road.distance_between_points(a, b),
                road.distance_between_points(b, a)
            );
            if a == b {
                assert_relative_eq!(road.distance_between_points(a, b), 0.0);
            }
        }
    }
}

#[test]
fn test_position_and_location_are_inverse_at_node_points() {
    let map = three_point_road();
    let road = map.road(RoadId(0));

    for (point_index, entry) in road.node_indices.iter().enumerate() {
        if entry.is_none() {
            continue;
        }
        let position = road.position_along_road(point_index);
        let location = road
            .location_along_road(position)
            .expect("Node-Position liegt auf der Strasse");
        assert_relative_eq!(location.x, road.points[point_index].x, epsilon = 1e-4);
        assert_relative_eq!(location.y, road.points[point_index].y, epsilon = 1e-4);
    }
}

#[test]
fn test_nodes_around_position_on_three_point_road() {
    let map = three_point_road();
    let span = map
        .road(RoadId(0))
        .nodes_around_position(12.0)
        .expect("Span erwartet");

    assert_eq!(span.earlier, NodeId(0));
    assert_relative_eq!(span.earlier_position, 0.0);
    assert_eq!(span.later, NodeId(1));
    assert_relative_eq!(span.later_position, 20.0);
}

#[test]
fn test_dead_end_definition_covers_both_directions_of_iff() {
    // Einzelstrasse: Endpunkt-Nodes sind Sackgassen und haben Grad 1
    let map = three_point_road();
    for node in map.nodes() {
        assert!(node.is_dead_end(&map));
        assert!(node.connection_count(&map, TravelDirection::Forward) <= 1);
    }

    // Node mitten auf einer Strasse: Grad 2, keine Sackgasse
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(0.0, 0.0));
    let m = builder.add_node(Vec2::new(50.0, 0.0));
    let b = builder.add_node(Vec2::new(100.0, 0.0));
    builder.add_road(
        "Durchgang",
        RoadType::Street,
        false,
        50,
        vec![Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0)],
        vec![Some(a), Some(m), Some(b)],
    );
    let map = builder.build().expect("Build muss gelingen");

    let middle = map.node(m);
    assert!(!middle.is_dead_end(&map));
    assert_eq!(middle.connection_count(&map, TravelDirection::Forward), 2);
}

#[test]
fn test_one_way_degrees_add_up_to_two_way_degree() {
    // Zwei Einbahnstrassen, beide von A nach B: vorwaerts zaehlt A beide,
    // rueckwaerts keine — die unterdrueckten Connections erklaeren die Differenz.
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(0.0, 0.0));
    let b = builder.add_node(Vec2::new(100.0, 0.0));
    for name in ["Spur1", "Spur2"] {
        builder.add_road(
            name,
            RoadType::Street,
            true,
            50,
            vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
            vec![Some(a), Some(b)],
        );
    }
    let map = builder.build().expect("Build muss gelingen");

    let node_a = map.node(a);
    assert_eq!(node_a.connection_count(&map, TravelDirection::Forward), 2);
    assert_eq!(node_a.connection_count(&map, TravelDirection::Backward), 0);

    let node_b = map.node(b);
    assert_eq!(node_b.connection_count(&map, TravelDirection::Forward), 0);
    assert_eq!(node_b.connection_count(&map, TravelDirection::Backward), 2);
}

#[test]
fn test_enumeration_is_complete_and_duplicate_free() {
    // T-Kreuzung: X liegt auf dem Ende von R1 und in der Mitte von R0
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(-100.0, 0.0));
    let x = builder.add_node(Vec2::new(0.0, 0.0));
    let b = builder.add_node(Vec2::new(100.0, 0.0));
    let c = builder.add_node(Vec2::new(0.0, 100.0));
    builder.add_road(
        "Querstrasse",
        RoadType::Street,
        false,
        50,
        vec![Vec2::new(-100.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
        vec![Some(a), Some(x), Some(b)],
    );
    builder.add_road(
        "Stichstrasse",
        RoadType::Street,
        false,
        50,
        vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0)],
        vec![Some(x), Some(c)],
    );
    let map = builder.build().expect("Build muss gelingen");

    let node_x = map.node(x);
    let count = node_x.connection_count(&map, TravelDirection::Forward);
    assert_eq!(count, 3);

    let mut seen = Vec::new();
    for index in 0..count {
        let connection = node_x
            .connection(&map, index, TravelDirection::Forward)
            .expect("Index im gueltigen Bereich");
        let pair = (connection.road, connection.connected_point_index);
        assert!(!seen.contains(&pair), "Connection doppelt enumeriert");
        seen.push(pair);
    }
    assert_eq!(seen.len(), 3);

    // Ein Index dahinter muss explizit scheitern
    assert!(matches!(
        node_x.connection(&map, count, TravelDirection::Forward),
        Err(GraphError::ConnectionIndexOutOfRange { .. })
    ));
}

#[test]
fn test_highway_cost_formula_is_reproduced_exactly() {
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(0.0, 0.0));
    let b = builder.add_node(Vec2::new(1000.0, 0.0));
    builder.add_road(
        "A8",
        RoadType::Highway,
        false,
        120,
        vec![Vec2::new(0.0, 0.0), Vec2::new(1000.0, 0.0)],
        vec![Some(a), Some(b)],
    );
    let map = builder.build().expect("Build muss gelingen");

    let cost = map
        .node(a)
        .connection_cost(&map, 0, TravelDirection::Forward)
        .expect("Connection 0 existiert");

    // distance * (1 + (1 - speed/120) * 15 * (0.5 + traffic * 0.5)), Highway: 110 km/h, Faktor 0
    let model = CostModel::default();
    assert_relative_eq!(cost, model.scaled_cost(RoadType::Highway, 1000.0));
    assert_relative_eq!(
        cost,
        1000.0 * (1.0 + (1.0 - 110.0 / 120.0) * 15.0 * 0.5),
        epsilon = 1e-2
    );
}

#[test]
fn test_cheapest_road_picks_short_parallel_one_way() {
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(0.0, 0.0));
    let b = builder.add_node(Vec2::new(100.0, 0.0));

    // Laenge 150 zuerst, damit der Gewinner nicht einfach der erste Treffer ist
    builder.add_road(
        "Umweg",
        RoadType::Street,
        true,
        50,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 25.0),
            Vec2::new(100.0, 25.0),
            Vec2::new(100.0, 0.0),
        ],
        vec![Some(a), None, None, Some(b)],
    );
    let direct = builder.add_road(
        "Direkt",
        RoadType::Street,
        true,
        50,
        vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
        vec![Some(a), Some(b)],
    );
    let map = builder.build().expect("Build muss gelingen");

    let (road, point_index) = map
        .node(a)
        .cheapest_road_to(&map, b, TravelDirection::Forward)
        .expect("A und B sind verbunden");

    assert_eq!(road, direct);
    assert_eq!(point_index, 0);
}

#[test]
fn test_loop_road_is_disambiguated_by_point_indices() {
    // Derselbe Node an Punkt 0 und Punkt 3 derselben Strasse
    let mut builder = StreetMapBuilder::new();
    let a = builder.add_node(Vec2::new(0.0, 0.0));
    builder.add_road(
        "Wendeschleife",
        RoadType::Street,
        false,
        30,
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 0.0),
        ],
        vec![Some(a), None, None, Some(a)],
    );
    let map = builder.build().expect("Build muss gelingen");

    let road = map.road(RoadId(0));
    // Gleiche Node-Identitaet, verschiedene Punktpositionen
    assert_relative_eq!(road.position_along_road(0), 0.0);
    assert!(road.position_along_road(3) > 0.0);

    // Beide Vorkommen erzeugen eigene Connections (vor/zurueck je Vorkommen,
    // an den Schleifenenden je eine)
    let node = map.node(a);
    assert_eq!(node.connection_count(&map, TravelDirection::Forward), 2);
    // Schleifen-Node hat zwei Referenzen auf dieselbe Strasse — keine Sackgasse
    assert!(!node.is_dead_end(&map));
}
