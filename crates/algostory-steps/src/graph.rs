//! Weighted graphs and shortest-path traces.
//!
//! Edges are undirected: declaring `A - B` lets the search travel both ways.
//! Node order matters. Ties between equally distant candidates go to the
//! node declared first, and neighbors are relaxed in edge declaration order.

use crate::error::{Error, Result};
use crate::step::{Action, Outcome, Step};
use crate::trace::Trace;

/// A named place on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// Short identifier ("A")
    pub id: String,
    /// Display name ("Market Square")
    pub name: String,
}

/// An undirected weighted edge between two node positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

impl Edge {
    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// A small undirected weighted graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node and return its position.
    pub fn add_node(&mut self, id: impl Into<String>, name: impl Into<String>) -> Result<usize> {
        let id = id.into();
        if self.position(&id).is_some() {
            return Err(Error::DuplicateNode(id));
        }
        self.nodes.push(Node {
            id,
            name: name.into(),
        });
        Ok(self.nodes.len() - 1)
    }

    /// Connect two declared nodes.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<()> {
        let from = self.require(from)?;
        let to = self.require(to)?;
        self.edges.push(Edge { from, to, weight });
        Ok(())
    }

    /// Position of the node with this id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn require(&self, id: &str) -> Result<usize> {
        self.position(id).ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(neighbor, weight)` pairs of `node`, in edge declaration order.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.edges
            .iter()
            .filter_map(move |e| e.other(node).map(|other| (other, e.weight)))
    }

    fn name(&self, node: usize) -> &str {
        &self.nodes[node].name
    }
}

/// Search state at one step, indexed by node position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphState {
    /// Tentative distance from the source (`None` = not reached yet)
    pub distances: Vec<Option<u64>>,
    /// Predecessor on the best known route
    pub previous: Vec<Option<usize>>,
    /// Nodes whose distance is final
    pub visited: Vec<bool>,
    /// Node selected this round
    pub current: Option<usize>,
    /// Source-to-target route, filled in on the terminal step
    pub path: Vec<usize>,
}

impl GraphState {
    fn new(len: usize, source: usize) -> Self {
        let mut distances = vec![None; len];
        distances[source] = Some(0);
        Self {
            distances,
            previous: vec![None; len],
            visited: vec![false; len],
            current: None,
            path: Vec::new(),
        }
    }

    /// Closest unvisited reachable node; ties go to the earlier node.
    fn closest_unvisited(&self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (node, distance) in self.distances.iter().enumerate() {
            if self.visited[node] {
                continue;
            }
            if let Some(d) = *distance {
                if best.map_or(true, |(_, b)| d < b) {
                    best = Some((node, d));
                }
            }
        }
        best
    }

    /// Walk `previous` back from `target`.
    fn route_to(&self, target: usize) -> Vec<usize> {
        let mut path = vec![target];
        let mut node = target;
        while let Some(prev) = self.previous[node] {
            path.push(prev);
            node = prev;
        }
        path.reverse();
        path
    }
}

/// Trace a Dijkstra search from `source` until `target` is selected.
///
/// Each round emits a `Visit` step for the selected node and one `Relax`
/// step per neighbor whose tentative distance dropped. The search ends when
/// the target is selected (`Reached`, with `path` set on the terminal
/// snapshot) or when no unvisited node is reachable (`Unreachable`).
///
/// An empty graph yields a lone `Done(Unreachable)` step. Unknown `source`
/// or `target` ids on a non-empty graph are rejected.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<Trace<GraphState>> {
    if graph.is_empty() {
        return Ok(Trace::from_generator(vec![Step::new(
            GraphState::default(),
            Action::Done(Outcome::Unreachable),
            "The map is empty",
        )]));
    }

    let source = graph.require(source)?;
    let target = graph.require(target)?;

    let mut state = GraphState::new(graph.len(), source);
    let mut steps = vec![Step::new(
        state.clone(),
        Action::Start,
        format!(
            "Setting out from {} toward {}",
            graph.name(source),
            graph.name(target)
        ),
    )
    .with_focus([source, target])];

    while let Some((current, distance)) = state.closest_unvisited() {
        state.visited[current] = true;
        state.current = Some(current);
        steps.push(
            Step::new(
                state.clone(),
                Action::Visit,
                format!("Visit {} at distance {distance}", graph.name(current)),
            )
            .with_focus([current]),
        );

        if current == target {
            state.path = state.route_to(target);
            let route: Vec<&str> = state.path.iter().map(|&n| graph.name(n)).collect();
            let focus = state.path.clone();
            steps.push(
                Step::new(
                    state,
                    Action::Done(Outcome::Reached { distance }),
                    format!("Shortest route ({distance}): {}", route.join(" → ")),
                )
                .with_focus(focus),
            );
            return Ok(Trace::from_generator(steps));
        }

        for (neighbor, weight) in graph.neighbors(current) {
            if state.visited[neighbor] {
                continue;
            }
            // Routes longer than u64::MAX are treated as no route.
            let Some(candidate) = distance.checked_add(weight) else {
                continue;
            };
            if state.distances[neighbor].map_or(true, |d| candidate < d) {
                state.distances[neighbor] = Some(candidate);
                state.previous[neighbor] = Some(current);
                steps.push(
                    Step::new(
                        state.clone(),
                        Action::Relax,
                        format!(
                            "{} is now {candidate} away via {}",
                            graph.name(neighbor),
                            graph.name(current)
                        ),
                    )
                    .with_focus([current, neighbor]),
                );
            }
        }
    }

    state.current = None;
    steps.push(Step::new(
        state,
        Action::Done(Outcome::Unreachable),
        format!("No road leads to {}", graph.name(target)),
    ));
    Ok(Trace::from_generator(steps))
}
