//! Spatial-Index (KD-Tree) fuer schnelle Node-Abfragen.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::{Node, NodeId};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Handle des gefundenen Nodes
    pub node: NodeId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index ueber allen Nodes einer StreetMap.
///
/// Da Node-Handles Array-Positionen sind, ist der KD-Tree-Eintrag `i`
/// direkt `NodeId(i)` — es braucht keine ID-Umrechnungstabelle.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    positions: Vec<Vec2>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index ueber dem Node-Array.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let entries: Vec<[f64; 2]> = nodes
            .iter()
            .map(|node| [node.location.x as f64, node.location.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            positions: nodes.iter().map(|node| node.location).collect(),
        }
    }

    /// Gibt die Anzahl indexierter Nodes zurueck.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurueck, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet den naechsten Node zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        if result.item as usize >= self.positions.len() {
            return None;
        }

        Some(SpatialMatch {
            node: NodeId(result.item as u32),
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Nodes innerhalb eines Radius um die Query-Position.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                if entry.item as usize >= self.positions.len() {
                    return None;
                }
                Some(SpatialMatch {
                    node: NodeId(entry.item as u32),
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Nodes innerhalb eines axis-aligned Rechtecks.
    ///
    /// Nutzt den KD-Tree mit einer umschliessenden Kreisabfrage plus
    /// Nachfilterung, statt O(n) ueber alle Positionen zu iterieren.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<NodeId> {
        if self.is_empty() {
            return Vec::new();
        }

        let center_x = (min.x + max.x) as f64 * 0.5;
        let center_y = (min.y + max.y) as f64 * 0.5;
        let half_w = (max.x - min.x) as f64 * 0.5;
        let half_h = (max.y - min.y) as f64 * 0.5;
        // Radius des umschliessenden Kreises (Diagonale / 2)
        let radius_sq = half_w * half_w + half_h * half_h;

        self.tree
            .within::<SquaredEuclidean>(&[center_x, center_y], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let position = self.positions.get(entry.item as usize)?;
                // Exakte Rechteck-Pruefung nach dem KD-Tree-Vorfilter
                if position.x >= min.x
                    && position.x <= max.x
                    && position.y >= min.y
                    && position.y <= max.y
                {
                    Some(NodeId(entry.item as u32))
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
