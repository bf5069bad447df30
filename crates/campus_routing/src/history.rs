use crate::{
    edge::{Edge, EdgeKey},
    node::Node,
    types::{EdgeId, NodeId},
};

/// A recorded graph mutation, carrying what is needed to reverse it.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryAction {
    AddNode {
        id: NodeId,
    },
    /// Edges removed by the cascade, with their positions in the edge list.
    DeleteNode {
        node: Node,
        edges: Vec<(EdgeId, Edge)>,
    },
    UpdateNode {
        previous: Node,
    },
    /// `previous` is `None` for an insert, or the replaced edge for an update.
    AddEdge {
        key: EdgeKey,
        previous: Option<Edge>,
    },
    DeleteEdge {
        index: EdgeId,
        edge: Edge,
    },
}

impl HistoryAction {
    pub fn name(&self) -> &'static str {
        match self {
            HistoryAction::AddNode { .. } => "add node",
            HistoryAction::DeleteNode { .. } => "delete node",
            HistoryAction::UpdateNode { .. } => "update node",
            HistoryAction::AddEdge { previous: None, .. } => "add edge",
            HistoryAction::AddEdge { .. } => "update edge",
            HistoryAction::DeleteEdge { .. } => "delete edge",
        }
    }
}

/// Unbounded LIFO stack of [`HistoryAction`]s.
#[derive(Debug, Default)]
pub struct EditHistory {
    actions: Vec<HistoryAction>,
}

impl EditHistory {
    pub fn new() -> Self {
        EditHistory::default()
    }

    pub fn push(&mut self, action: HistoryAction) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<HistoryAction> {
        self.actions.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
