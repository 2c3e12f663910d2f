//! Stabile Integer-Handles fuer Entitaeten der StreetMap.
//!
//! Die Identitaet einer Entitaet ist ihre Position im jeweiligen Array der
//! [`StreetMap`](crate::StreetMap). Statt diese Position aus Referenzen
//! abzuleiten, vergibt der Builder beim Laden explizite Handles; alle
//! Querverweise (Node ↔ Road/Railway) laufen ausschliesslich darueber.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle auf einen Node im Node-Array der StreetMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Handle auf eine Strasse im Road-Array der StreetMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoadId(pub u32);

/// Handle auf eine Bahnstrecke im Railway-Array der StreetMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RailwayId(pub u32);

impl NodeId {
    /// Array-Position des Handles.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl RoadId {
    /// Array-Position des Handles.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl RailwayId {
    /// Array-Position des Handles.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node#{}", self.0)
    }
}

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Road#{}", self.0)
    }
}

impl fmt::Display for RailwayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Railway#{}", self.0)
    }
}
