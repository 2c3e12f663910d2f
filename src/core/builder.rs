//! Builder fuer die einmalige Bulk-Load-Phase einer StreetMap.
//!
//! Externe Importer (OSM-Parser, Asset-Loader) schieben hier fertige
//! Entitaeten hinein; `build()` prueft die Parallel-Array-Invarianten,
//! leitet die Node-Rueckverweise ab und friert den Datensatz ein. Nach dem
//! Build gibt es keine Mutation mehr — Handles bleiben stabil.

use super::{
    BoundingBox, Building, MiscWay, MiscWayType, Node, NodeId, Railway, RailwayId, RailwayRef,
    RailwayType, Road, RoadId, RoadRef, RoadType, SpatialIndex, StreetMap,
};
use anyhow::{ensure, Result};
use glam::Vec2;
use indexmap::IndexMap;

/// Sammelt Entitaeten waehrend der Ladephase und baut daraus eine
/// eingefrorene [`StreetMap`].
#[derive(Debug, Default)]
pub struct StreetMapBuilder {
    roads: Vec<Road>,
    nodes: Vec<Node>,
    railways: Vec<Railway>,
    buildings: Vec<Building>,
    misc_ways: Vec<MiscWay>,
    bounds: Option<BoundingBox>,
    origin_longitude: f64,
    origin_latitude: f64,
}

impl StreetMapBuilder {
    /// Erstellt einen leeren Builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuegt einen Node ohne Tags hinzu und vergibt sein Handle.
    pub fn add_node(&mut self, location: Vec2) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, location));
        id
    }

    /// Fuegt einen Node mit OSM-Tags hinzu und vergibt sein Handle.
    pub fn add_tagged_node(&mut self, location: Vec2, tags: IndexMap<String, String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::with_tags(id, location, tags));
        id
    }

    /// Fuegt eine Strasse hinzu. Bounding-Box und Gesamtlaenge werden hier
    /// einmalig berechnet, damit die Abfrageschicht nichts lazy herleiten
    /// muss. `node_indices` muss parallel zu `points` laufen — geprueft
    /// wird das in `build()`.
    pub fn add_road(
        &mut self,
        name: impl Into<String>,
        road_type: RoadType,
        is_one_way: bool,
        speed_limit: i32,
        points: Vec<Vec2>,
        node_indices: Vec<Option<NodeId>>,
    ) -> RoadId {
        let id = RoadId(self.roads.len() as u32);
        let bounds = BoundingBox::from_points(&points);
        let distance = points.windows(2).map(|pair| pair[0].distance(pair[1])).sum();

        self.roads.push(Road {
            id,
            name: name.into(),
            road_type,
            is_one_way,
            speed_limit,
            distance,
            points,
            node_indices,
            bounds,
        });
        id
    }

    /// Fuegt eine Bahnstrecke hinzu.
    pub fn add_railway(
        &mut self,
        name: impl Into<String>,
        railway_type: RailwayType,
        points: Vec<Vec2>,
        node_indices: Vec<Option<NodeId>>,
    ) -> RailwayId {
        let id = RailwayId(self.railways.len() as u32);
        let bounds = BoundingBox::from_points(&points);

        self.railways.push(Railway {
            id,
            name: name.into(),
            railway_type,
            points,
            node_indices,
            bounds,
        });
        id
    }

    /// Fuegt ein Gebaeude hinzu.
    pub fn add_building(
        &mut self,
        name: impl Into<String>,
        points: Vec<Vec2>,
        height: f32,
        levels: i32,
    ) {
        let bounds = BoundingBox::from_points(&points);
        self.buildings.push(Building {
            name: name.into(),
            points,
            height,
            levels,
            bounds,
        });
    }

    /// Fuegt einen sonstigen Way hinzu.
    pub fn add_misc_way(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        way_type: MiscWayType,
        points: Vec<Vec2>,
        is_closed: bool,
    ) {
        let bounds = BoundingBox::from_points(&points);
        self.misc_ways.push(MiscWay {
            name: name.into(),
            category: category.into(),
            way_type,
            points,
            is_closed,
            bounds,
        });
    }

    /// Setzt die globale Bounding-Box explizit. Ohne Aufruf wird sie in
    /// `build()` als Vereinigung aller Entitaets-Bounds berechnet.
    pub fn set_bounds(&mut self, min: Vec2, max: Vec2) {
        self.bounds = Some(BoundingBox::new(min, max));
    }

    /// Setzt den geographischen Ursprung des lokalen Koordinatensystems.
    pub fn set_origin(&mut self, longitude: f64, latitude: f64) {
        self.origin_longitude = longitude;
        self.origin_latitude = latitude;
    }

    /// Prueft die Invarianten, leitet die Node-Rueckverweise ab und friert
    /// den Datensatz ein.
    ///
    /// Harte Fehler (strukturell unmoegliche Eingaben: Parallel-Array-
    /// Laengen passen nicht, Handles zeigen ins Leere) brechen den Build mit
    /// Entitaets-Kontext ab. Weiche Defekte meldet erst
    /// [`StreetMap::validate`] auf dem fertigen Datensatz.
    pub fn build(mut self) -> Result<StreetMap> {
        let node_count = self.nodes.len();

        for road in &self.roads {
            ensure!(
                road.node_indices.len() == road.points.len(),
                "{} ({}): {} Punkte, aber {} Node-Eintraege",
                road.id,
                road.name,
                road.points.len(),
                road.node_indices.len()
            );
            for (point_index, entry) in road.node_indices.iter().enumerate() {
                if let Some(node) = entry {
                    ensure!(
                        node.index() < node_count,
                        "{} ({}): {} an Punkt {} zeigt ins Leere (nur {} Nodes geladen)",
                        road.id,
                        road.name,
                        node,
                        point_index,
                        node_count
                    );
                }
            }
        }

        for railway in &self.railways {
            ensure!(
                railway.node_indices.len() == railway.points.len(),
                "{} ({}): {} Punkte, aber {} Node-Eintraege",
                railway.id,
                railway.name,
                railway.points.len(),
                railway.node_indices.len()
            );
            for (point_index, entry) in railway.node_indices.iter().enumerate() {
                if let Some(node) = entry {
                    ensure!(
                        node.index() < node_count,
                        "{} ({}): {} an Punkt {} zeigt ins Leere (nur {} Nodes geladen)",
                        railway.id,
                        railway.name,
                        node,
                        point_index,
                        node_count
                    );
                }
            }
        }

        // Rueckverweise Node → Road/Railway ableiten. Die Reihenfolge
        // (Roads in Handle-Reihenfolge, Punkte in Polyline-Reihenfolge)
        // ist zugleich die Enumerations-Reihenfolge der
        // Konnektivitaetsabfragen.
        for road in &self.roads {
            for (point_index, entry) in road.node_indices.iter().enumerate() {
                if let Some(node) = entry {
                    self.nodes[node.index()].road_refs.push(RoadRef {
                        road: road.id,
                        point_index: point_index as u32,
                    });
                }
            }
        }
        for railway in &self.railways {
            for (point_index, entry) in railway.node_indices.iter().enumerate() {
                if let Some(node) = entry {
                    self.nodes[node.index()].railway_refs.push(RailwayRef {
                        railway: railway.id,
                        point_index: point_index as u32,
                    });
                }
            }
        }

        let bounds = match self.bounds {
            Some(bounds) => bounds,
            None => {
                let mut union = BoundingBox::EMPTY;
                for road in &self.roads {
                    union = union.union(road.bounds);
                }
                for railway in &self.railways {
                    union = union.union(railway.bounds);
                }
                for building in &self.buildings {
                    union = union.union(building.bounds);
                }
                for way in &self.misc_ways {
                    union = union.union(way.bounds);
                }
                for node in &self.nodes {
                    union.expand_to(node.location);
                }
                if union.is_valid() {
                    union
                } else {
                    BoundingBox::default()
                }
            }
        };

        let spatial = SpatialIndex::from_nodes(&self.nodes);

        log::info!(
            "StreetMap geladen: {} Roads, {} Nodes, {} Railways, {} Gebaeude, {} sonstige Ways",
            self.roads.len(),
            self.nodes.len(),
            self.railways.len(),
            self.buildings.len(),
            self.misc_ways.len()
        );

        Ok(StreetMap::from_parts(
            self.roads,
            self.nodes,
            self.railways,
            self.buildings,
            self.misc_ways,
            bounds,
            self.origin_longitude,
            self.origin_latitude,
            spatial,
        ))
    }
}
