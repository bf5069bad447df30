use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter, Write},
    ops::RangeInclusive,
    path::Path,
};

use fxhash::FxHashMap;
use geo::{Distance, Euclidean};
use tracing::{debug, info, warn};

use crate::{
    constants::{GHOST_ID_START, VISIBLE_ID_START},
    edge::{Edge, EdgeKey},
    edge_direction::EdgeDirection,
    error::GraphError,
    history::{EditHistory, HistoryAction},
    meters::Meters,
    node::{Node, NodeKind},
    text_format::{self, ParsedRecords},
    types::{EdgeId, NodeId},
};

/// One direction of an edge as seen from the node it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentEdge {
    pub edge_id: EdgeId,
    pub adj_node: NodeId,
    pub direction: EdgeDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeUpsert {
    Inserted,
    Updated,
    /// Self loops and edges without a finite, non-negative length are not stored.
    Rejected,
}

/// The single owner of the campus map.
///
/// Nodes are kept ordered by id and edges in insertion order. The adjacency index and the
/// edge lookup are derived from the edge list and rebuilt after every structural change.
/// Edges whose endpoints are missing stay in the edge list but are left out of the
/// adjacency index, so routing never sees them.
pub struct GraphStore {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    adjacency: FxHashMap<NodeId, Vec<AdjacentEdge>>,
    edge_lookup: FxHashMap<EdgeKey, EdgeId>,
    history: EditHistory,
    next_visible_id: NodeId,
    next_ghost_id: NodeId,
}

impl Default for GraphStore {
    fn default() -> Self {
        GraphStore::new()
    }
}

fn read_file<T>(
    path: &Path,
    parse: impl FnOnce(BufReader<File>) -> std::io::Result<ParsedRecords<T>>,
) -> Result<ParsedRecords<T>, GraphError> {
    File::open(path)
        .and_then(|file| parse(BufReader::new(file)))
        .map_err(|source| GraphError::Load {
            path: path.to_path_buf(),
            source,
        })
}

fn write_file(
    path: &Path,
    header: &str,
    lines: impl Iterator<Item = String>,
) -> Result<(), GraphError> {
    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", header)?;
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    };

    write().map_err(|source| GraphError::Save {
        path: path.to_path_buf(),
        source,
    })
}

/// Ids handed out by [`GraphStore::add_node`] for each kind.
fn id_range(kind: NodeKind) -> RangeInclusive<NodeId> {
    match kind {
        NodeKind::Visible => VISIBLE_ID_START..=GHOST_ID_START - 1,
        NodeKind::Ghost => GHOST_ID_START..=NodeId::MAX,
    }
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            adjacency: FxHashMap::default(),
            edge_lookup: FxHashMap::default(),
            history: EditHistory::new(),
            next_visible_id: VISIBLE_ID_START,
            next_ghost_id: GHOST_ID_START,
        }
    }

    /// Builds a store from already parsed records without recording history.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let mut graph = GraphStore::new();
        graph.populate(nodes, edges);
        graph
    }

    pub fn from_files(
        node_path: impl AsRef<Path>,
        edge_path: impl AsRef<Path>,
    ) -> Result<Self, GraphError> {
        let mut graph = GraphStore::new();
        graph.load(node_path, edge_path)?;
        Ok(graph)
    }

    /// Replaces the whole store with the content of both files.
    ///
    /// The store is cleared first and stays empty if either file cannot be read.
    pub fn load(
        &mut self,
        node_path: impl AsRef<Path>,
        edge_path: impl AsRef<Path>,
    ) -> Result<(), GraphError> {
        self.clear();

        let nodes = read_file(node_path.as_ref(), text_format::read_nodes)?;
        let edges = read_file(edge_path.as_ref(), text_format::read_edges)?;

        let skipped = nodes.skipped + edges.skipped;
        if skipped > 0 {
            warn!("Skipped {} malformed records while loading the map", skipped);
        }

        self.populate(nodes.records, edges.records);

        info!(
            "Loaded {} nodes and {} edges from {} and {}",
            self.node_count(),
            self.edge_count(),
            node_path.as_ref().display(),
            edge_path.as_ref().display()
        );

        Ok(())
    }

    pub fn save(
        &self,
        node_path: impl AsRef<Path>,
        edge_path: impl AsRef<Path>,
    ) -> Result<(), GraphError> {
        write_file(
            node_path.as_ref(),
            text_format::NODE_HEADER,
            self.nodes.values().map(text_format::format_node),
        )?;
        write_file(
            edge_path.as_ref(),
            text_format::EDGE_HEADER,
            self.edges.iter().map(text_format::format_edge),
        )?;

        info!(
            "Saved {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        );

        Ok(())
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
        self.edge_lookup.clear();
        self.history.clear();
        self.next_visible_id = VISIBLE_ID_START;
        self.next_ghost_id = GHOST_ID_START;
    }

    fn populate(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        for node in nodes {
            self.nodes.insert(node.id, node);
        }

        let mut positions: FxHashMap<EdgeKey, EdgeId> = FxHashMap::default();
        for edge in edges {
            if edge.u == edge.v {
                debug!("Skipping self loop on node {}", edge.u);
                continue;
            }
            if !edge.has_valid_distance() {
                debug!("Skipping edge {}-{} with distance {:?}", edge.u, edge.v, edge.distance);
                continue;
            }

            match positions.get(&edge.key()) {
                Some(&index) => self.edges[index] = edge,
                None => {
                    positions.insert(edge.key(), self.edges.len());
                    self.edges.push(edge);
                }
            }
        }

        self.reset_id_counters();
        self.rebuild_index();
    }

    /// Restarts each counter after the highest id of its kind inside its own range.
    fn reset_id_counters(&mut self) {
        let next_after = |kind: NodeKind| {
            let range = id_range(kind);
            self.nodes
                .range(range.clone())
                .filter(|(_, node)| node.kind == kind)
                .map(|(id, _)| id.saturating_add(1))
                .max()
                .unwrap_or(*range.start())
        };

        self.next_visible_id = next_after(NodeKind::Visible);
        self.next_ghost_id = next_after(NodeKind::Ghost);
    }

    /// Next free id in the kind's range, `None` once the range is used up.
    fn allocate_id(&mut self, kind: NodeKind) -> Option<NodeId> {
        let last = *id_range(kind).end();
        let nodes = &self.nodes;
        let counter = match kind {
            NodeKind::Visible => &mut self.next_visible_id,
            NodeKind::Ghost => &mut self.next_ghost_id,
        };

        let id = (*counter..=last).find(|id| !nodes.contains_key(id))?;
        // Stays on the last id of the range, which is then taken
        *counter = id.saturating_add(1);
        Some(id)
    }

    fn rebuild_index(&mut self) {
        self.adjacency.clear();
        self.edge_lookup.clear();

        for (edge_id, edge) in self.edges.iter().enumerate() {
            self.edge_lookup.insert(edge.key(), edge_id);

            if !self.nodes.contains_key(&edge.u) || !self.nodes.contains_key(&edge.v) {
                continue;
            }

            self.adjacency.entry(edge.u).or_default().push(AdjacentEdge {
                edge_id,
                adj_node: edge.v,
                direction: EdgeDirection::Forward,
            });
            self.adjacency.entry(edge.v).or_default().push(AdjacentEdge {
                edge_id,
                adj_node: edge.u,
                direction: EdgeDirection::Backward,
            });
        }
    }

    /// Creates a node with a generated id and name.
    ///
    /// Returns `None` without touching the store when every id of the kind's range is taken.
    pub fn add_node(&mut self, x: f64, y: f64, kind: NodeKind) -> Option<NodeId> {
        let Some(id) = self.allocate_id(kind) else {
            warn!("No {:?} node id left in {:?}", kind, id_range(kind));
            return None;
        };
        let name = match kind {
            NodeKind::Visible => format!("Building {}", id),
            NodeKind::Ghost => format!("Junction {}", id),
        };

        self.nodes.insert(id, Node::new(id, name, x, y, kind));
        self.history.push(HistoryAction::AddNode { id });
        self.rebuild_index();

        debug!("Added {:?} node {}", kind, id);
        Some(id)
    }

    /// Inserts a fully specified node, returns `false` if the id is already taken.
    pub fn insert_node(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }

        let id = node.id;
        self.nodes.insert(id, node);
        self.history.push(HistoryAction::AddNode { id });
        self.rebuild_index();
        true
    }

    /// Removes the node together with every edge touching it.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };

        let mut kept = Vec::with_capacity(self.edges.len());
        let mut removed = Vec::new();
        for (index, edge) in std::mem::take(&mut self.edges).into_iter().enumerate() {
            if edge.u == id || edge.v == id {
                removed.push((index, edge));
            } else {
                kept.push(edge);
            }
        }
        self.edges = kept;

        debug!("Deleted node {} and {} incident edges", id, removed.len());

        self.history.push(HistoryAction::DeleteNode {
            node,
            edges: removed,
        });
        self.rebuild_index();
        true
    }

    pub fn update_node(&mut self, node: Node) -> bool {
        let Some(existing) = self.nodes.get_mut(&node.id) else {
            return false;
        };

        let previous = std::mem::replace(existing, node);
        self.history.push(HistoryAction::UpdateNode { previous });
        true
    }

    pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> bool {
        let Some(mut node) = self.nodes.get(&id).cloned() else {
            return false;
        };

        node.x = x;
        node.y = y;
        self.update_node(node)
    }

    /// Inserts the edge, or replaces the fields of the edge already linking `{u, v}`.
    pub fn add_or_update_edge(&mut self, edge: Edge) -> EdgeUpsert {
        if edge.u == edge.v {
            debug!("Rejected self loop on node {}", edge.u);
            return EdgeUpsert::Rejected;
        }
        if !edge.has_valid_distance() {
            debug!("Rejected edge {}-{} with distance {:?}", edge.u, edge.v, edge.distance);
            return EdgeUpsert::Rejected;
        }

        let key = edge.key();
        let outcome = match self.edge_lookup.get(&key).copied() {
            Some(index) => {
                let previous = std::mem::replace(&mut self.edges[index], edge);
                self.history.push(HistoryAction::AddEdge {
                    key,
                    previous: Some(previous),
                });
                EdgeUpsert::Updated
            }
            None => {
                self.edges.push(edge);
                self.history.push(HistoryAction::AddEdge {
                    key,
                    previous: None,
                });
                EdgeUpsert::Inserted
            }
        };

        self.rebuild_index();
        outcome
    }

    pub fn delete_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let Some(index) = self.edge_lookup.get(&EdgeKey::new(u, v)).copied() else {
            return false;
        };

        let edge = self.edges.remove(index);
        self.history.push(HistoryAction::DeleteEdge { index, edge });
        self.rebuild_index();
        true
    }

    pub fn find_edge(&self, u: NodeId, v: NodeId) -> Option<&Edge> {
        self.edge_lookup
            .get(&EdgeKey::new(u, v))
            .map(|&index| &self.edges[index])
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Reverts the most recent mutation. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop() else {
            return false;
        };

        debug!("Undo {}", action.name());

        match action {
            HistoryAction::AddNode { id } => {
                self.nodes.remove(&id);
            }
            HistoryAction::DeleteNode { node, edges } => {
                self.nodes.insert(node.id, node);
                for (index, edge) in edges {
                    self.edges.insert(index, edge);
                }
            }
            HistoryAction::UpdateNode { previous } => {
                self.nodes.insert(previous.id, previous);
            }
            HistoryAction::AddEdge { key, previous } => {
                if let Some(index) = self.edge_lookup.get(&key).copied() {
                    match previous {
                        Some(previous) => self.edges[index] = previous,
                        None => {
                            self.edges.remove(index);
                        }
                    }
                }
            }
            HistoryAction::DeleteEdge { index, edge } => {
                self.edges.insert(index.min(self.edges.len()), edge);
            }
        }

        self.rebuild_index();
        true
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().filter(|node| node.is_destination())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge ids come from the adjacency index, which is rebuilt with the edge list.
    pub(crate) fn edge(&self, edge_id: EdgeId) -> &Edge {
        &self.edges[edge_id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_edges(&self, node: NodeId) -> &[AdjacentEdge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edges referencing at least one missing node.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|edge| !self.contains_node(edge.u) || !self.contains_node(edge.v))
    }

    pub fn straight_line_distance(&self, u: NodeId, v: NodeId) -> Option<Meters> {
        let a = self.nodes.get(&u)?;
        let b = self.nodes.get(&v)?;
        Some(Meters::new(Euclidean.distance(a.position(), b.position())))
    }
}
