//! Serde-Roundtrip der kompletten Karte: alle Entitaetsarrays ueberleben
//! die Serialisierung, der Raumindex wird danach neu aufgebaut.

use approx::assert_relative_eq;
use glam::Vec2;
use indexmap::IndexMap;
use streetmap_core::{
    MiscWayType, NodeId, RailwayType, RoadId, RoadType, StreetMap, StreetMapBuilder,
    TravelDirection,
};

fn sample_map() -> StreetMap {
    let mut builder = StreetMapBuilder::new();
    builder.set_origin(9.1829, 48.7758);

    let a = builder.add_node(Vec2::new(0.0, 0.0));
    let x = builder.add_node(Vec2::new(100.0, 0.0));
    let b = builder.add_node(Vec2::new(200.0, 0.0));

    builder.add_road(
        "Hauptstrasse",
        RoadType::MajorRoad,
        false,
        70,
        vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0)],
        vec![Some(a), Some(x), Some(b)],
    );
    builder.add_railway(
        "S-Bahn",
        RailwayType::LightRail,
        vec![Vec2::new(0.0, 50.0), Vec2::new(200.0, 50.0)],
        vec![None, None],
    );
    builder.add_building(
        "Rathaus",
        vec![
            Vec2::new(10.0, 10.0),
            Vec2::new(30.0, 10.0),
            Vec2::new(30.0, 30.0),
            Vec2::new(10.0, 30.0),
        ],
        12.0,
        3,
    );
    builder.add_misc_way(
        "Stadtpark",
        "leisure",
        MiscWayType::Leisure,
        vec![
            Vec2::new(120.0, 20.0),
            Vec2::new(180.0, 20.0),
            Vec2::new(150.0, 60.0),
        ],
        true,
    );

    builder.build().expect("Build muss gelingen")
}

#[test]
fn test_json_roundtrip_preserves_all_entity_arrays() {
    let map = sample_map();
    let json = serde_json::to_string(&map).expect("Serialisierung muss gelingen");
    let restored: StreetMap = serde_json::from_str(&json).expect("Deserialisierung muss gelingen");

    assert_eq!(restored.road_count(), map.road_count());
    assert_eq!(restored.node_count(), map.node_count());
    assert_eq!(restored.railway_count(), map.railway_count());
    assert_eq!(restored.buildings().len(), 1);
    assert_eq!(restored.misc_ways().len(), 1);

    let road = restored.road(RoadId(0));
    assert_eq!(road.name, "Hauptstrasse");
    assert_eq!(road.road_type, RoadType::MajorRoad);
    assert_relative_eq!(road.length(), 200.0);

    assert_relative_eq!(restored.origin_longitude(), 9.1829);
    assert_relative_eq!(restored.origin_latitude(), 48.7758);
}

#[test]
fn test_back_refs_and_queries_work_after_roundtrip() {
    let map = sample_map();
    let json = serde_json::to_string(&map).expect("Serialisierung muss gelingen");
    let restored: StreetMap = serde_json::from_str(&json).expect("Deserialisierung muss gelingen");

    // Rueckreferenzen sind Teil der Daten, kein abgeleiteter Zustand
    let middle = restored.node(NodeId(1));
    assert_eq!(middle.road_refs.len(), 1);
    assert_eq!(middle.road_refs[0].point_index, 1);
    assert_eq!(middle.connection_count(&restored, TravelDirection::Forward), 2);
}

#[test]
fn test_node_tags_survive_roundtrip_in_insertion_order() {
    let mut builder = StreetMapBuilder::new();

    let mut tags = IndexMap::new();
    tags.insert("highway".to_string(), "traffic_signals".to_string());
    tags.insert("crossing".to_string(), "marked".to_string());
    tags.insert("name".to_string(), "Schlossplatz".to_string());
    let tagged = builder.add_tagged_node(Vec2::new(0.0, 0.0), tags);
    let other = builder.add_node(Vec2::new(50.0, 0.0));

    builder.add_road(
        "Koenigstrasse",
        RoadType::Street,
        false,
        30,
        vec![Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0)],
        vec![Some(tagged), Some(other)],
    );
    let map = builder.build().expect("Build muss gelingen");

    let json = serde_json::to_string(&map).expect("Serialisierung muss gelingen");
    let restored: StreetMap = serde_json::from_str(&json).expect("Deserialisierung muss gelingen");

    let node = restored.node(tagged);
    assert_eq!(
        node.tags.get("highway").map(String::as_str),
        Some("traffic_signals")
    );
    // Einfuege-Reihenfolge bleibt ueber den Roundtrip erhalten
    let keys: Vec<&str> = node.tags.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["highway", "crossing", "name"]);
    assert!(restored.node(other).tags.is_empty());
}

#[test]
fn test_spatial_index_is_not_serialized_and_can_be_rebuilt() {
    let map = sample_map();
    let json = serde_json::to_string(&map).expect("Serialisierung muss gelingen");
    let mut restored: StreetMap =
        serde_json::from_str(&json).expect("Deserialisierung muss gelingen");

    // Frisch deserialisiert ist der Index leer
    assert!(restored.nearest_node(Vec2::new(90.0, 5.0)).is_none());

    restored.rebuild_spatial_index();
    let hit = restored
        .nearest_node(Vec2::new(90.0, 5.0))
        .expect("Treffer erwartet");
    assert_eq!(hit.node, NodeId(1));

    let in_radius = restored.nodes_within_radius(Vec2::new(0.0, 0.0), 120.0);
    assert_eq!(in_radius.len(), 2);
}
