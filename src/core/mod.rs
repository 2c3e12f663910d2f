//! Core-Domaenentypen: StreetMap, Roads, Nodes, Railways, Spatial-Index.

pub mod building;
pub mod builder;
pub mod connectivity;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod misc_way;
pub mod node;
pub mod railway;
pub mod road;
pub mod spatial;
pub mod street_map;

pub use building::Building;
pub use builder::StreetMapBuilder;
pub use connectivity::{CostModel, NodeConnection, TravelDirection};
pub use error::{DiagnosticKind, EntityKind, GraphError, MapDiagnostic};
pub use geometry::BoundingBox;
pub use ids::{NodeId, RailwayId, RoadId};
pub use misc_way::{MiscWay, MiscWayType};
pub use node::{Node, RailwayRef, RoadRef};
pub use railway::{Railway, RailwayType};
pub use road::{AdjacentNodes, Road, RoadSpan, RoadType};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use street_map::StreetMap;
