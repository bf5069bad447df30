use std::path::PathBuf;

use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Failed to read {path}: {source}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),
    #[error("No edge between {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read cost model config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid cost model config: {0}")]
    Parse(#[from] serde_json::Error),
}
