//! Sonstige Ways: Flaechen und Linien ausserhalb des Verkehrsnetzes.

use super::BoundingBox;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// OSM-Grobklasse eines sonstigen Ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiscWayType {
    /// Unbekannter Typ
    Unknown,
    /// Freizeitflaechen (Parks, Sportplaetze, ...)
    Leisure,
    /// Natuerliche Landmerkmale (Wald, Strand, Wasser, ...)
    Natural,
    /// Landnutzung (Wiese, Acker, Forst, ...)
    LandUse,
}

/// Ein sonstiger Way — Linie oder geschlossenes Polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscWay {
    /// Name des Ways (oft leer)
    pub name: String,
    /// Feinkategorie aus dem OSM-Tag (z.B. "park", "water")
    pub category: String,
    /// Grobklasse
    pub way_type: MiscWayType,
    /// Punkte der Linie bzw. des Polygons
    pub points: Vec<Vec2>,
    /// `true` fuer geschlossene Polygone, `false` fuer Linienzuege
    pub is_closed: bool,
    /// Bounding-Box der Punkte, beim Laden berechnet
    pub bounds: BoundingBox,
}
