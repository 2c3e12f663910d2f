//! Fehler- und Diagnose-Typen der Graph-Abfragen.
//!
//! Die Abfrageschicht unterscheidet strikt zwischen erwartbarer Abwesenheit
//! (`Option`, z.B. kein frueherer Node am Strassenanfang) und echten
//! Vertragsverletzungen: Die liefern einen [`GraphError`] mit Entitaets-Handle
//! im Kontext, damit ein Batch-Consumer die eine defekte Strasse ueberspringen
//! kann, statt die ganze Session abzubrechen.

use super::{NodeId, RoadId};
use std::fmt;
use thiserror::Error;

/// Fehler der Geometrie- und Konnektivitaetsabfragen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Position entlang der Strasse liegt ausserhalb von `[0, Laenge]`.
    #[error("Position {position} liegt ausserhalb von [0, {length}] auf {road}")]
    PositionOutOfRange {
        /// Betroffene Strasse
        road: RoadId,
        /// Angefragte Position entlang der Strasse
        position: f32,
        /// Gesamtlaenge der Strasse
        length: f32,
    },

    /// Vom Startpunkt aus ist in Scanrichtung kein Node aufloesbar.
    /// Deutet auf eine defekte Strasse ohne Endpunkt-Node hin.
    #[error("{road} hat keinen aufloesbaren Node ab Punkt {point_index}")]
    NoResolvableNode {
        /// Betroffene Strasse
        road: RoadId,
        /// Punkt-Index, ab dem gesucht wurde
        point_index: usize,
    },

    /// Eine Position-Abfrage fand keinen Node hinter der Zielposition.
    #[error("{road} hat keinen Node hinter Position {position}")]
    NoNodePastPosition {
        /// Betroffene Strasse
        road: RoadId,
        /// Angefragte Position entlang der Strasse
        position: f32,
    },

    /// Connection-Index ausserhalb von `[0, connection_count())`.
    #[error("Connection-Index {index} ausserhalb von 0..{count} an {node}")]
    ConnectionIndexOutOfRange {
        /// Node, dessen Connections abgefragt wurden
        node: NodeId,
        /// Angefragter Index
        index: usize,
        /// Gueltige Anzahl Connections
        count: usize,
    },

    /// Zwischen den beiden Nodes existiert keine Connection in Fahrtrichtung.
    #[error("{node} hat keine Connection zu {other}")]
    NotConnected {
        /// Ausgangs-Node
        node: NodeId,
        /// Ziel-Node
        other: NodeId,
    },
}

/// Entitaets-Art fuer Diagnosen und Lade-Fehlermeldungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Strasse
    Road,
    /// Bahnstrecke
    Railway,
    /// Gebaeude
    Building,
    /// Sonstiger Way
    MiscWay,
    /// Node
    Node,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Road => "Road",
            EntityKind::Railway => "Railway",
            EntityKind::Building => "Building",
            EntityKind::MiscWay => "MiscWay",
            EntityKind::Node => "Node",
        };
        f.write_str(label)
    }
}

/// Art eines weichen Datendefekts, den `StreetMap::validate()` meldet.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// Polyline-Endpunkt (erster oder letzter Punkt) traegt keinen Node.
    /// Scan-Abfragen auf dieser Entitaet koennen `NoResolvableNode` liefern.
    MissingEndpointNode {
        /// Punkt-Index des betroffenen Endpunkts
        point_index: usize,
    },
    /// Zu wenig Punkte fuer eine sinnvolle Geometrie.
    DegenerateGeometry {
        /// Tatsaechliche Punktanzahl
        point_count: usize,
    },
    /// Node wird von keiner Road und keiner Railway referenziert.
    UnreferencedNode,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingEndpointNode { point_index } => {
                write!(f, "Endpunkt {point_index} ohne Node")
            }
            DiagnosticKind::DegenerateGeometry { point_count } => {
                write!(f, "degenerierte Geometrie mit {point_count} Punkt(en)")
            }
            DiagnosticKind::UnreferencedNode => f.write_str("Node ohne Road/Railway-Referenz"),
        }
    }
}

/// Ein weicher Datendefekt mit genug Kontext, damit die Ladestufe die
/// betroffene Entitaet markieren oder verwerfen kann.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDiagnostic {
    /// Art der betroffenen Entitaet
    pub entity: EntityKind,
    /// Array-Position der Entitaet
    pub index: u32,
    /// Gefundener Defekt
    pub kind: DiagnosticKind,
}

impl fmt::Display for MapDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}: {}", self.entity, self.index, self.kind)
    }
}
