//! Strassen: benannte Polylines mit Node-Verknuepfung und Geometrie-Abfragen.

use super::{BoundingBox, GraphError, NodeId, RoadId};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Strassenklasse, geschlossene Aufzaehlung — Kosten- und Mesh-Logik
/// matchen exhaustiv darueber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadType {
    /// Kleine Strasse oder Wohnstrasse
    Street,
    /// Hauptstrasse oder kleinere Landstrasse
    MajorRoad,
    /// Autobahn/Schnellstrasse
    Highway,
    /// Bruecke
    Bridge,
    /// Sonstiges (Pfad, Buslinie, ...)
    Other,
}

/// Ergebnis von [`Road::adjacent_nodes`]: die unmittelbar frueheren/spaeteren
/// Nachbar-Nodes eines Punkts. Jede Seite darf am Strassenende fehlen —
/// das ist ein normales Ergebnis, kein Fehler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacentNodes {
    /// Naechster Node vor dem Punkt: (Handle, Position entlang der Strasse)
    pub earlier: Option<(NodeId, f32)>,
    /// Naechster Node hinter dem Punkt: (Handle, Position entlang der Strasse)
    pub later: Option<(NodeId, f32)>,
}

/// Ergebnis von [`Road::nodes_around_position`]: das Node-Paar, das eine
/// Position entlang der Strasse einschliesst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadSpan {
    /// Letzter Node vor (oder an) der Position
    pub earlier: NodeId,
    /// Position des frueheren Nodes entlang der Strasse
    pub earlier_position: f32,
    /// Erster Node hinter der Position
    pub later: NodeId,
    /// Position des spaeteren Nodes entlang der Strasse
    pub later_position: f32,
}

/// Eine benannte Strasse als Polyline.
///
/// `node_indices` laeuft parallel zu `points`: pro Punkt entweder der Node,
/// der dort sitzt, oder `None` fuer Zwischenpunkte ohne Kreuzung. Derselbe
/// Node darf auf einer Strasse mehrfach vorkommen (Schleifen) — alle Abfragen
/// adressieren deshalb ueber Punkt-Indizes, nie ueber Node-Identitaet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Eigenes Handle (Array-Position im Road-Array)
    pub id: RoadId,
    /// Name der Strasse
    pub name: String,
    /// Strassenklasse
    pub road_type: RoadType,
    /// Einbahnstrasse? Dann ist sie nur in Punktreihenfolge befahrbar.
    pub is_one_way: bool,
    /// Tempolimit in km/h (0 = unbekannt)
    pub speed_limit: i32,
    /// Gesamtlaenge der Polyline, beim Laden einmalig berechnet
    pub distance: f32,
    /// Punkte der Polyline im lokalen Koordinatensystem
    pub points: Vec<Vec2>,
    /// Pro Punkt der Node an dieser Stelle, `None` fuer reine Zwischenpunkte.
    /// Invariante: `node_indices.len() == points.len()`.
    pub node_indices: Vec<Option<NodeId>>,
    /// Bounding-Box der Punkte, beim Laden berechnet
    pub bounds: BoundingBox,
}

impl Road {
    /// Anzahl der Polyline-Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Summiert die euklidischen Segmentlaengen zwischen zwei Punkt-Indizes.
    ///
    /// Symmetrisch in `a`/`b`, `0.0` bei `a == b`; Indizes werden auf
    /// `[0, N-1]` geklemmt. Ob an den Indizes tatsaechlich Nodes sitzen,
    /// prueft die Funktion bewusst nicht — dieselbe Node-ID kann auf einer
    /// Strasse mehrfach auftauchen, der Aufrufer muss also ohnehin mit
    /// Punkt-Indizes arbeiten.
    pub fn distance_between_points(&self, a: usize, b: usize) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let last = self.points.len() - 1;
        let lower = a.min(b).min(last);
        let upper = a.max(b).min(last);

        self.points[lower..=upper]
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Gesamtlaenge der Strasse entlang aller Punkte.
    pub fn length(&self) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.distance_between_points(0, self.points.len() - 1)
    }

    /// Kumulative Laenge vom Strassenanfang bis zum Punkt-Index.
    pub fn position_along_road(&self, point_index: usize) -> f32 {
        self.distance_between_points(0, point_index.min(self.points.len().saturating_sub(1)))
    }

    /// Punkt auf der Strasse an einer Position entlang der Strasse.
    ///
    /// Laeuft die Segmente ab und interpoliert linear innerhalb des Segments,
    /// in dem die kumulative Laenge die Zielposition erreicht. Positionen
    /// ausserhalb von `[0, Laenge]` sind ein expliziter Fehler, kein Clamping.
    pub fn location_along_road(&self, position: f32) -> Result<Vec2, GraphError> {
        let out_of_range = || GraphError::PositionOutOfRange {
            road: self.id,
            position,
            length: self.length(),
        };

        if position < 0.0 || self.points.len() < 2 {
            return Err(out_of_range());
        }

        let mut current_position = 0.0f32;
        for pair in self.points.windows(2) {
            let segment_length = pair[0].distance(pair[1]);
            let next_position = current_position + segment_length;

            if next_position >= position {
                // Null-Segmente (doppelte Punkte) nicht durch 0 teilen
                if segment_length <= f32::EPSILON {
                    return Ok(pair[0]);
                }
                let alpha = (position - current_position) / segment_length;
                return Ok(pair[0].lerp(pair[1], alpha));
            }

            current_position = next_position;
        }

        Err(out_of_range())
    }

    /// Node am Punkt-Index oder der naechste davor (inklusiver Rueckwaerts-Scan).
    ///
    /// Liefert Handle und tatsaechlichen Punkt-Index. Kein aufloesbarer Node
    /// bis zum Strassenanfang heisst defekte Daten.
    pub fn node_at_point_or_earlier(
        &self,
        point_index: usize,
    ) -> Result<(NodeId, usize), GraphError> {
        let start = point_index.min(self.node_indices.len().saturating_sub(1));
        for index in (0..=start).rev() {
            if let Some(node) = self.node_indices.get(index).copied().flatten() {
                return Ok((node, index));
            }
        }
        Err(GraphError::NoResolvableNode {
            road: self.id,
            point_index,
        })
    }

    /// Node am Punkt-Index oder der naechste dahinter (inklusiver Vorwaerts-Scan).
    pub fn node_at_point_or_later(
        &self,
        point_index: usize,
    ) -> Result<(NodeId, usize), GraphError> {
        for index in point_index..self.node_indices.len() {
            if let Some(node) = self.node_indices[index] {
                return Ok((node, index));
            }
        }
        Err(GraphError::NoResolvableNode {
            road: self.id,
            point_index,
        })
    }

    /// Unmittelbare Nachbar-Nodes eines Punkts, beide Richtungen exklusiv.
    ///
    /// Am Strassenende fehlt die jeweilige Seite — das ist als `None`
    /// repraesentiert, nicht als Fehler.
    pub fn adjacent_nodes(&self, point_index: usize) -> AdjacentNodes {
        let mut earlier = None;
        for index in (0..point_index.min(self.node_indices.len())).rev() {
            if let Some(node) = self.node_indices[index] {
                earlier = Some((node, self.position_along_road(index)));
                break;
            }
        }

        let mut later = None;
        for index in (point_index + 1)..self.node_indices.len() {
            if let Some(node) = self.node_indices[index] {
                later = Some((node, self.position_along_road(index)));
                break;
            }
        }

        AdjacentNodes { earlier, later }
    }

    /// Findet das Node-Paar, das eine Position entlang der Strasse einschliesst.
    ///
    /// Merkt sich beim Ablaufen der Polyline den jeweils letzten gesehenen
    /// Node als "earlier" und stoppt am ersten Node, dessen kumulative
    /// Position die Zielposition erreicht, als "later". Beide Seiten muessen
    /// existieren; fehlt eine, ist die Strasse fuer diese Abfrage defekt.
    pub fn nodes_around_position(&self, position: f32) -> Result<RoadSpan, GraphError> {
        let mut current_position = 0.0f32;
        let mut earlier: Option<(NodeId, f32)> = None;
        let mut later: Option<(NodeId, f32)> = None;

        let point_count = self.points.len();
        for index in 0..point_count.saturating_sub(1) {
            if let Some(node) = self.node_indices[index] {
                earlier = Some((node, current_position));
            }

            let next_position = current_position + self.points[index].distance(self.points[index + 1]);
            if next_position >= position {
                if let Some(node) = self.node_indices[index + 1] {
                    later = Some((node, next_position));
                    break;
                }
            }

            current_position = next_position;
        }

        let (earlier, earlier_position) = earlier.ok_or(GraphError::NoResolvableNode {
            road: self.id,
            point_index: 0,
        })?;
        let (later, later_position) = later.ok_or(GraphError::NoNodePastPosition {
            road: self.id,
            position,
        })?;

        Ok(RoadSpan {
            earlier,
            earlier_position,
            later,
            later_position,
        })
    }
}
