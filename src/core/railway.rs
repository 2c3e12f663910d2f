//! Bahnstrecken: Polylines mit Node-Verknuepfung, ohne Routing-Abfragen.

use super::{BoundingBox, NodeId, RailwayId};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Bahnstreckenklasse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailwayType {
    /// Vollbahn (Personen-/Gueterverkehr in Regelspur)
    Rail,
    /// Stadtbahn mit eigenem Gleiskoerper
    LightRail,
    /// U-Bahn, ueberwiegend kreuzungsfrei
    Subway,
    /// Strassenbahn, teilt sich meist die Fahrbahn
    Tram,
    /// Sonstiges (Monorail, stillgelegt, im Bau, Standseilbahn, ...)
    OtherRailway,
}

/// Eine Bahnstrecke als Polyline.
///
/// Gleiche Parallel-Array-Invarianten wie bei [`Road`](super::Road):
/// `node_indices.len() == points.len()`, derselbe Node darf mehrfach
/// vorkommen. Einbahn- und Konnektivitaetsabfragen gibt es fuer
/// Bahnstrecken nicht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Railway {
    /// Eigenes Handle (Array-Position im Railway-Array)
    pub id: RailwayId,
    /// Name der Strecke
    pub name: String,
    /// Streckenklasse
    pub railway_type: RailwayType,
    /// Punkte der Polyline im lokalen Koordinatensystem
    pub points: Vec<Vec2>,
    /// Pro Punkt der Node an dieser Stelle, `None` fuer reine Zwischenpunkte
    pub node_indices: Vec<Option<NodeId>>,
    /// Bounding-Box der Punkte, beim Laden berechnet
    pub bounds: BoundingBox,
}

impl Railway {
    /// Anzahl der Polyline-Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Gesamtlaenge der Strecke entlang aller Punkte.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}
