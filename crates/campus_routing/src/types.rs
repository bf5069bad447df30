pub type NodeId = u32;
pub type EdgeId = usize;
