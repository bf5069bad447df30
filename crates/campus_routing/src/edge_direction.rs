/// Traversal direction of an edge relative to its stored `(u, v)` orientation.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum EdgeDirection {
    Forward,
    Backward,
}

