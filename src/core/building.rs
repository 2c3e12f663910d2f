//! Gebaeude: geschlossene Polygone mit Hoehen-Metadaten.

use super::BoundingBox;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Gebaeude als geschlossenes Polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Name des Gebaeudes (oft leer)
    pub name: String,
    /// Polygon-Punkte des Umrisses
    pub points: Vec<Vec2>,
    /// Hoehe in Metern (0.0 = unbekannt)
    pub height: f32,
    /// Anzahl Stockwerke (0 = unbekannt)
    pub levels: i32,
    /// Bounding-Box der Punkte, beim Laden berechnet
    pub bounds: BoundingBox,
}
