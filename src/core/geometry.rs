//! Geometrie-Primitive: 2D-Bounding-Box ueber glam-Vektoren.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Achsenparallele 2D-Bounding-Box.
///
/// Wird pro Road/Railway/Building/MiscWay beim Laden berechnet und im
/// Datensatz gespeichert, damit Abfragen sie nicht lazy herleiten muessen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimale Ecke (x, y)
    pub min: Vec2,
    /// Maximale Ecke (x, y)
    pub max: Vec2,
}

impl BoundingBox {
    /// Leere Box als Akkumulator: `expand_to`/`union` starten hiermit.
    /// Nicht serialisieren — `is_valid()` ist fuer diesen Wert `false`.
    pub const EMPTY: Self = Self {
        min: Vec2::splat(f32::INFINITY),
        max: Vec2::splat(f32::NEG_INFINITY),
    };

    /// Box aus expliziten Ecken.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Engste Box um eine Punktmenge. Leere Punktmenge ergibt `EMPTY`.
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut bounds = Self::EMPTY;
        for point in points {
            bounds.expand_to(*point);
        }
        bounds
    }

    /// Erweitert die Box, sodass `point` enthalten ist.
    pub fn expand_to(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Vereinigung zweier Boxen.
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Liegt `point` innerhalb (inklusive Rand)?
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Breite und Hoehe.
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// `false` fuer den `EMPTY`-Akkumulator (min > max).
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
        }
    }
}
