//! streetmap_core — Datenmodell fuer Strassennetzwerke aus OSM-Quellen.
//!
//! Das Herzstueck ist die [`StreetMap`]: flache, serialisierbare Arrays von
//! Strassen, Nodes, Bahnstrecken, Gebaeuden und sonstigen Ways, verknuepft
//! ueber stabile Integer-Handles statt Pointer. Darauf aufbauend liefert die
//! Library die Geometrie- und Konnektivitaetsabfragen, die Mesh-Generatoren,
//! Editoren und Pathfinder brauchen — ohne selbst einen Pathfinder oder
//! Importer mitzubringen.

pub mod core;

pub use core::{
    AdjacentNodes, BoundingBox, Building, CostModel, DiagnosticKind, EntityKind, GraphError,
    MapDiagnostic, MiscWay, MiscWayType, Node, NodeConnection, NodeId, Railway, RailwayId,
    RailwayRef, RailwayType, Road, RoadId, RoadRef, RoadSpan, RoadType, SpatialIndex, SpatialMatch,
    StreetMap, StreetMapBuilder, TravelDirection,
};
