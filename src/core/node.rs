//! Nodes: Kreuzungen und Endpunkte, geteilt zwischen Roads und Railways.

use super::{NodeId, RailwayId, RoadId};
use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Verweis eines Nodes auf eine Strasse, die ihn beruehrt, samt der Stelle
/// auf deren Punktliste, an der der Node sitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadRef {
    /// Handle der Strasse
    pub road: RoadId,
    /// Punkt-Index auf der Strasse, an dem dieser Node liegt
    pub point_index: u32,
}

/// Verweis eines Nodes auf eine Bahnstrecke, analog zu [`RoadRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailwayRef {
    /// Handle der Bahnstrecke
    pub railway: RailwayId,
    /// Punkt-Index auf der Bahnstrecke, an dem dieser Node liegt
    pub point_index: u32,
}

/// Eine Kreuzung oder ein Endpunkt im Netzwerk.
///
/// Nodes verbinden ueblicherweise mindestens zwei Roads/Railways, koennen aber
/// auch das Ende einer Sackgasse markieren. Die Rueckverweise (`road_refs`,
/// `railway_refs`) werden beim Build aus den Polylines abgeleitet; ihre
/// Reihenfolge (Road-Reihenfolge, dann Punkt-Reihenfolge) ist die
/// Enumerations-Reihenfolge der Konnektivitaetsabfragen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Eigenes Handle (Array-Position im Node-Array)
    pub id: NodeId,
    /// 2D-Position im lokalen projizierten Koordinatensystem
    pub location: Vec2,
    /// Alle Strassen, die diesen Node beruehren
    pub road_refs: Vec<RoadRef>,
    /// Alle Bahnstrecken, die diesen Node beruehren
    pub railway_refs: Vec<RailwayRef>,
    /// OSM-Tags des Nodes, meist leer
    pub tags: IndexMap<String, String>,
}

impl Node {
    /// Erstellt einen Node ohne Referenzen und Tags.
    pub fn new(id: NodeId, location: Vec2) -> Self {
        Self {
            id,
            location,
            road_refs: Vec::new(),
            railway_refs: Vec::new(),
            tags: IndexMap::new(),
        }
    }

    /// Erstellt einen Node mit Tags.
    pub fn with_tags(id: NodeId, location: Vec2, tags: IndexMap<String, String>) -> Self {
        Self {
            id,
            location,
            road_refs: Vec::new(),
            railway_refs: Vec::new(),
            tags,
        }
    }

    /// `true`, wenn der Node weder Road- noch Railway-Referenzen traegt.
    pub fn is_unreferenced(&self) -> bool {
        self.road_refs.is_empty() && self.railway_refs.is_empty()
    }
}
