//! Konnektivitaets- und Kostenabfragen auf Nodes.
//!
//! Hilfsfunktionen fuer externe Pathfinding-Konsumenten: Die Library fuehrt
//! selbst keine Wegsuche aus, liefert aber die richtungsabhaengige
//! Nachbarschafts-Enumeration und eine Kostenheuristik, auf deren Korrektheit
//! jede darauf gebaute Suche angewiesen ist. Alle Abfragen sind reine
//! Funktionen ueber dem eingefrorenen Datensatz.

use super::{GraphError, Node, NodeId, Road, RoadId, RoadType, StreetMap};

/// Fahrtrichtung relativ zur Punktreihenfolge einer Strasse.
///
/// Einbahnstrassen sind nur in Punktreihenfolge befahrbar; entgegen der
/// Richtung unterdruecken sie die Connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelDirection {
    /// In Punktreihenfolge der Strasse
    Forward,
    /// Entgegen der Punktreihenfolge
    Backward,
}

impl TravelDirection {
    /// `true` fuer Fahrt in Punktreihenfolge.
    pub fn is_forward(self) -> bool {
        matches!(self, TravelDirection::Forward)
    }
}

/// Eine aufgeloeste Connection: Nachbar-Node samt verbindender Strasse und
/// den Punkt-Indizes beider Enden auf dieser Strasse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeConnection {
    /// Der verbundene Nachbar-Node
    pub node: NodeId,
    /// Die verbindende Strasse
    pub road: RoadId,
    /// Punkt-Index des abfragenden Nodes auf der Strasse
    pub point_index: usize,
    /// Punkt-Index des Nachbar-Nodes auf der Strasse
    pub connected_point_index: usize,
}

/// Tunables der Kostenschaetzung pro Strassenklasse.
///
/// Bewusst simple Heuristik, keine physikalische Kalibrierung: geringere
/// Geschwindigkeit und hoeherer Verkehrsfaktor blaehen die Kosten gegenueber
/// der reinen Distanz auf. Austauschbar — Konsumenten mit eigenem Modell
/// nutzen die `*_with`-Varianten der Abfragen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Bezugs-Hoechstgeschwindigkeit in km/h
    pub max_speed: f32,
    /// Geschwindigkeit Highway in km/h
    pub highway_speed: f32,
    /// Verkehrsfaktor Highway (0 = keine Stau-Aufschlaege)
    pub highway_traffic: f32,
    /// Geschwindigkeit Hauptstrasse in km/h
    pub major_road_speed: f32,
    /// Verkehrsfaktor Hauptstrasse
    pub major_road_traffic: f32,
    /// Geschwindigkeit Strasse in km/h
    pub street_speed: f32,
    /// Verkehrsfaktor Strasse
    pub street_traffic: f32,
    /// Gewichtung des Geschwindigkeits-/Verkehrsaufschlags
    pub congestion_weight: f32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            max_speed: 120.0,
            highway_speed: 110.0,
            highway_traffic: 0.0,
            major_road_speed: 70.0,
            major_road_traffic: 0.2,
            street_speed: 40.0,
            street_traffic: 1.0,
            congestion_weight: 15.0,
        }
    }
}

impl CostModel {
    /// Skaliert eine Distanz zur Routing-Kostenzahl:
    /// `distance * (1 + (1 - speed/max_speed) * congestion_weight * (0.5 + traffic * 0.5))`.
    ///
    /// `Bridge` faellt in die Strassenklasse — die Referenz kannte dafuer
    /// keinen Parametersatz und brach ab.
    pub fn scaled_cost(&self, road_type: RoadType, distance: f32) -> f32 {
        let (speed, traffic) = match road_type {
            RoadType::Highway => (self.highway_speed, self.highway_traffic),
            RoadType::MajorRoad => (self.major_road_speed, self.major_road_traffic),
            RoadType::Street | RoadType::Bridge | RoadType::Other => {
                (self.street_speed, self.street_traffic)
            }
        };

        let speed_scale = 1.0 - speed / self.max_speed;
        distance * (1.0 + speed_scale * self.congestion_weight * (0.5 + traffic * 0.5))
    }
}

impl Node {
    /// Ist dieser Node das Ende einer Sackgasse?
    ///
    /// `true` genau dann, wenn der Node exakt eine Road-Referenz hat UND an
    /// einem der beiden Strassenenden sitzt. Nodes mitten auf einer Strasse
    /// oder mit mehreren Strassen sind nie Sackgassen.
    pub fn is_dead_end(&self, map: &StreetMap) -> bool {
        if self.road_refs.len() != 1 {
            return false;
        }

        let sole_ref = &self.road_refs[0];
        let road = map.road(sole_ref.road);
        let point = sole_ref.point_index as usize;
        point == 0 || point + 1 == road.node_indices.len()
    }

    /// Richtungsabhaengiger Grad des Nodes.
    ///
    /// Pro Road-Referenz: eine Rueckwaerts-Connection, wenn der Node nicht am
    /// Punkt 0 sitzt und (rueckwaerts gefahren wird ODER die Strasse keine
    /// Einbahn ist); eine Vorwaerts-Connection symmetrisch dazu. Derselbe
    /// Node kann je nach Fahrtrichtung unterschiedlich viele Connections
    /// haben.
    pub fn connection_count(&self, map: &StreetMap, direction: TravelDirection) -> usize {
        // Exakt dieselbe Reihenfolge wie in connection() — darauf verlassen
        // sich Index-basierte Aufrufer.
        let mut total = 0;
        for road_ref in &self.road_refs {
            let road = map.road(road_ref.road);
            let point = road_ref.point_index as usize;

            if point > 0 && (!direction.is_forward() || !road.is_one_way) {
                total += 1;
            }
            if point + 1 < road.node_indices.len() && (direction.is_forward() || !road.is_one_way) {
                total += 1;
            }
        }

        total
    }

    /// Liefert die `index`-te Connection in der deterministischen Reihenfolge
    /// von [`connection_count`](Self::connection_count): Road-Referenzen in
    /// Reihenfolge, pro Referenz rueckwaerts vor vorwaerts.
    ///
    /// Der Scan ueberspringt Zwischenpunkte ohne Node. Ein Index ausserhalb
    /// von `[0, connection_count())` und eine Strasse ohne aufloesbaren Node
    /// in Scanrichtung sind explizite Fehler.
    pub fn connection(
        &self,
        map: &StreetMap,
        index: usize,
        direction: TravelDirection,
    ) -> Result<NodeConnection, GraphError> {
        // Exakt dieselbe Reihenfolge wie in connection_count()!
        let mut current = 0;
        for road_ref in &self.road_refs {
            let road = map.road(road_ref.road);
            let point = road_ref.point_index as usize;

            if point > 0 && (!direction.is_forward() || !road.is_one_way) {
                if current == index {
                    let (node, connected_point_index) = scan_backward(road, point)?;
                    return Ok(NodeConnection {
                        node,
                        road: road.id,
                        point_index: point,
                        connected_point_index,
                    });
                }
                current += 1;
            }

            if point + 1 < road.node_indices.len() && (direction.is_forward() || !road.is_one_way) {
                if current == index {
                    let (node, connected_point_index) = scan_forward(road, point)?;
                    return Ok(NodeConnection {
                        node,
                        road: road.id,
                        point_index: point,
                        connected_point_index,
                    });
                }
                current += 1;
            }
        }

        Err(GraphError::ConnectionIndexOutOfRange {
            node: self.id,
            index,
            count: current,
        })
    }

    /// Schaetzt die Kosten der `index`-ten Connection mit dem
    /// Standard-Kostenmodell.
    pub fn connection_cost(
        &self,
        map: &StreetMap,
        index: usize,
        direction: TravelDirection,
    ) -> Result<f32, GraphError> {
        self.connection_cost_with(map, index, direction, &CostModel::default())
    }

    /// Schaetzt die Kosten der `index`-ten Connection: geometrische Distanz
    /// der beiden Connection-Punkte auf der Strasse, skaliert nach
    /// Strassenklasse ueber das uebergebene [`CostModel`].
    pub fn connection_cost_with(
        &self,
        map: &StreetMap,
        index: usize,
        direction: TravelDirection,
        model: &CostModel,
    ) -> Result<f32, GraphError> {
        let connection = self.connection(map, index, direction)?;
        let road = map.road(connection.road);
        let distance =
            road.distance_between_points(connection.point_index, connection.connected_point_index);

        Ok(model.scaled_cost(road.road_type, distance))
    }

    /// Guenstigste Strasse zu einem als verbunden bekannten Nachbar-Node,
    /// mit dem Standard-Kostenmodell.
    pub fn cheapest_road_to(
        &self,
        map: &StreetMap,
        other: NodeId,
        direction: TravelDirection,
    ) -> Result<(RoadId, usize), GraphError> {
        self.cheapest_road_to_with(map, other, direction, &CostModel::default())
    }

    /// Guenstigste Strasse zu einem Nachbar-Node: globales Kostenminimum
    /// ueber alle Connections, deren Ziel `other` ist.
    ///
    /// Mehrere Strassen zwischen demselben Node-Paar sind selten; beim
    /// einzigen Treffer entfaellt die Kostenauswertung komplett. Liefert
    /// Strasse und den Punkt-Index dieses Nodes auf ihr. Kein Treffer ist
    /// ein expliziter Fehler.
    pub fn cheapest_road_to_with(
        &self,
        map: &StreetMap,
        other: NodeId,
        direction: TravelDirection,
        model: &CostModel,
    ) -> Result<(RoadId, usize), GraphError> {
        let count = self.connection_count(map, direction);

        let mut best: Option<(NodeConnection, usize)> = None;
        let mut best_cost: Option<f32> = None;

        for index in 0..count {
            let connection = self.connection(map, index, direction)?;
            if connection.node != other {
                continue;
            }

            match best {
                None => best = Some((connection, index)),
                Some((_, best_index)) => {
                    // Kosten erst beim zweiten Treffer auswerten — der
                    // Normalfall ist genau eine verbindende Strasse.
                    let current_best = match best_cost {
                        Some(cost) => cost,
                        None => self.connection_cost_with(map, best_index, direction, model)?,
                    };
                    let candidate = self.connection_cost_with(map, index, direction, model)?;

                    if candidate < current_best {
                        best = Some((connection, index));
                        best_cost = Some(candidate);
                    } else {
                        best_cost = Some(current_best);
                    }
                }
            }
        }

        best.map(|(connection, _)| (connection.road, connection.point_index))
            .ok_or(GraphError::NotConnected {
                node: self.id,
                other,
            })
    }
}

/// Scannt von `point` aus strikt rueckwaerts zum naechsten Punkt mit Node.
fn scan_backward(road: &Road, point: usize) -> Result<(NodeId, usize), GraphError> {
    let mut index = point;
    while index > 0 {
        index -= 1;
        if let Some(node) = road.node_indices[index] {
            return Ok((node, index));
        }
    }
    Err(GraphError::NoResolvableNode {
        road: road.id,
        point_index: point,
    })
}

/// Scannt von `point` aus strikt vorwaerts zum naechsten Punkt mit Node.
fn scan_forward(road: &Road, point: usize) -> Result<(NodeId, usize), GraphError> {
    for index in (point + 1)..road.node_indices.len() {
        if let Some(node) = road.node_indices[index] {
            return Ok((node, index));
        }
    }
    Err(GraphError::NoResolvableNode {
        road: road.id,
        point_index: point,
    })
}
