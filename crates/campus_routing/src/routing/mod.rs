pub(crate) mod dijkstra;
pub mod router;
pub mod routing_path;
pub mod shortest_path_algorithm;
