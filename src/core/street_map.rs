//! Die zentrale StreetMap: flache, serialisierbare Arrays aller Entitaeten.

use super::{
    Building, DiagnosticKind, EntityKind, MapDiagnostic, MiscWay, Node, NodeId, Railway,
    RailwayId, Road, RoadId,
};
use super::{BoundingBox, SpatialIndex, SpatialMatch};
use glam::{DVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Ein vollstaendig geladener Strassennetz-Datensatz.
///
/// Wird einmalig vom [`StreetMapBuilder`](super::StreetMapBuilder) gebaut und
/// ist danach eingefroren: alle Arrays sind append-only waehrend des Ladens
/// und unveraenderlich zur Abfragezeit. Handles ([`RoadId`], [`NodeId`],
/// [`RailwayId`]) sind Array-Positionen und bleiben fuer die Lebensdauer des
/// Datensatzes stabil — beliebig viele Leser brauchen kein Locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreetMap {
    roads: Vec<Road>,
    nodes: Vec<Node>,
    railways: Vec<Railway>,
    buildings: Vec<Building>,
    misc_ways: Vec<MiscWay>,
    bounds: BoundingBox,
    origin_longitude: f64,
    origin_latitude: f64,
    /// KD-Tree ueber den Node-Positionen; wird nicht serialisiert und nach
    /// einer Deserialisierung per `rebuild_spatial_index()` neu aufgebaut.
    #[serde(skip, default)]
    spatial: SpatialIndex,
}

impl StreetMap {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        roads: Vec<Road>,
        nodes: Vec<Node>,
        railways: Vec<Railway>,
        buildings: Vec<Building>,
        misc_ways: Vec<MiscWay>,
        bounds: BoundingBox,
        origin_longitude: f64,
        origin_latitude: f64,
        spatial: SpatialIndex,
    ) -> Self {
        Self {
            roads,
            nodes,
            railways,
            buildings,
            misc_ways,
            bounds,
            origin_longitude,
            origin_latitude,
            spatial,
        }
    }

    // ── Entitaets-Zugriff ───────────────────────────────────────────

    /// Alle Strassen (read-only).
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Alle Nodes (read-only).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Alle Bahnstrecken (read-only).
    pub fn railways(&self) -> &[Railway] {
        &self.railways
    }

    /// Alle Gebaeude (read-only).
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Alle sonstigen Ways (read-only).
    pub fn misc_ways(&self) -> &[MiscWay] {
        &self.misc_ways
    }

    /// Strasse zum Handle.
    ///
    /// Panics bei einem Handle, das nicht aus dieser StreetMap stammt —
    /// fuer tolerante Aufrufer gibt es [`get_road`](Self::get_road).
    pub fn road(&self, id: RoadId) -> &Road {
        &self.roads[id.index()]
    }

    /// Strasse zum Handle, `None` bei fremdem Handle.
    pub fn get_road(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(id.index())
    }

    /// Node zum Handle. Panics bei fremdem Handle.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Node zum Handle, `None` bei fremdem Handle.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Bahnstrecke zum Handle. Panics bei fremdem Handle.
    pub fn railway(&self, id: RailwayId) -> &Railway {
        &self.railways[id.index()]
    }

    /// Bahnstrecke zum Handle, `None` bei fremdem Handle.
    pub fn get_railway(&self, id: RailwayId) -> Option<&Railway> {
        self.railways.get(id.index())
    }

    /// Anzahl der Strassen.
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Anzahl der Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Bahnstrecken.
    pub fn railway_count(&self) -> usize {
        self.railways.len()
    }

    // ── Globale Geometrie ───────────────────────────────────────────

    /// Bounding-Box ueber alle Entitaeten der Karte.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Geographische Laenge des Ursprungs des lokalen Koordinatensystems.
    pub fn origin_longitude(&self) -> f64 {
        self.origin_longitude
    }

    /// Geographische Breite des Ursprungs des lokalen Koordinatensystems.
    pub fn origin_latitude(&self) -> f64 {
        self.origin_latitude
    }

    /// Ursprung als (Laenge, Breite)-Paar. Externe Konsumenten reprojizieren
    /// damit lokale Koordinaten zurueck nach geographisch.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.origin_longitude, self.origin_latitude)
    }

    // ── Spatial-Abfragen ────────────────────────────────────────────

    /// Findet den naechstgelegenen Node zur Weltposition.
    pub fn nearest_node(&self, query: Vec2) -> Option<SpatialMatch> {
        self.spatial.nearest(query)
    }

    /// Findet alle Nodes innerhalb eines Radius, nach Distanz sortiert.
    pub fn nodes_within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        self.spatial.within_radius(query, radius)
    }

    /// Findet alle Nodes innerhalb eines Rechtecks.
    pub fn nodes_within_rect(&self, min: Vec2, max: Vec2) -> Vec<NodeId> {
        self.spatial.within_rect(min, max)
    }

    /// Baut den Spatial-Index aus den aktuellen Nodes neu auf.
    /// Noetig nach einer Deserialisierung, da der Index nicht im
    /// Datensatz liegt.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial = SpatialIndex::from_nodes(&self.nodes);
    }

    // ── Diagnose ────────────────────────────────────────────────────

    /// Prueft den Datensatz auf weiche Defekte und meldet jeden als
    /// [`MapDiagnostic`] mit Entitaets-Art und Index.
    ///
    /// Ein Befund bricht nichts ab: Die Ladestufe entscheidet, ob sie die
    /// betroffene Entitaet markiert oder verwirft. Scan-Abfragen auf
    /// Entitaeten mit `MissingEndpointNode` koennen `NoResolvableNode`
    /// liefern — das ist die Laufzeit-Seite desselben Defekts.
    pub fn validate(&self) -> Vec<MapDiagnostic> {
        let mut diagnostics = Vec::new();

        for road in &self.roads {
            check_polyline(
                EntityKind::Road,
                road.id.0,
                &road.points,
                Some(&road.node_indices),
                &mut diagnostics,
            );
        }
        for railway in &self.railways {
            check_polyline(
                EntityKind::Railway,
                railway.id.0,
                &railway.points,
                Some(&railway.node_indices),
                &mut diagnostics,
            );
        }
        for (index, way) in self.misc_ways.iter().enumerate() {
            check_polyline(EntityKind::MiscWay, index as u32, &way.points, None, &mut diagnostics);
        }
        for (index, building) in self.buildings.iter().enumerate() {
            if building.points.len() < 3 {
                diagnostics.push(MapDiagnostic {
                    entity: EntityKind::Building,
                    index: index as u32,
                    kind: DiagnosticKind::DegenerateGeometry {
                        point_count: building.points.len(),
                    },
                });
            }
        }
        for node in &self.nodes {
            if node.is_unreferenced() {
                diagnostics.push(MapDiagnostic {
                    entity: EntityKind::Node,
                    index: node.id.0,
                    kind: DiagnosticKind::UnreferencedNode,
                });
            }
        }

        for diagnostic in &diagnostics {
            log::warn!("StreetMap-Diagnose: {diagnostic}");
        }

        diagnostics
    }
}

/// Gemeinsame Polyline-Pruefung fuer Roads, Railways und MiscWays.
fn check_polyline(
    entity: EntityKind,
    index: u32,
    points: &[Vec2],
    node_indices: Option<&[Option<NodeId>]>,
    diagnostics: &mut Vec<MapDiagnostic>,
) {
    if points.len() < 2 {
        diagnostics.push(MapDiagnostic {
            entity,
            index,
            kind: DiagnosticKind::DegenerateGeometry {
                point_count: points.len(),
            },
        });
        return;
    }

    let Some(node_indices) = node_indices else {
        return;
    };

    // Endpunkte ohne Node: zugelassen, aber meldepflichtig — Scans
    // verlassen sich sonst stillschweigend auf diese Invariante.
    if node_indices.first().copied().flatten().is_none() {
        diagnostics.push(MapDiagnostic {
            entity,
            index,
            kind: DiagnosticKind::MissingEndpointNode { point_index: 0 },
        });
    }
    if node_indices.last().copied().flatten().is_none() {
        diagnostics.push(MapDiagnostic {
            entity,
            index,
            kind: DiagnosticKind::MissingEndpointNode {
                point_index: node_indices.len() - 1,
            },
        });
    }
}
