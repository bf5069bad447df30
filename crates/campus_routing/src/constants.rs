use crate::{types::NodeId, weighting::Weight};

pub(crate) const VISIBLE_ID_START: NodeId = 100;
pub(crate) const GHOST_ID_START: NodeId = 900;

pub(crate) const MAX_WEIGHT: Weight = u64::MAX;

/// Grade assumed for edges stored with a legacy boolean slope flag.
pub(crate) const LEGACY_SLOPE_GRADE: f64 = 0.08;
