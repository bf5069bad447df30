pub mod config;
pub(crate) mod constants;
pub mod cost_model;
pub mod edge;
pub mod edge_direction;
pub mod error;
pub mod graph;
pub mod history;
pub mod meters;
pub mod node;
pub mod recommendation;
pub mod routing;
pub mod speed;
mod stopwatch;
pub mod text_format;
pub mod transport;
pub mod types;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;
