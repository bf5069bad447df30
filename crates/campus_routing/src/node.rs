use std::{fmt, str::FromStr};

use geo_types::Point;

use crate::types::NodeId;

/// Visible nodes are buildings shown to end users, ghost nodes are routing-only junctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Visible,
    Ghost,
}

impl NodeKind {
    pub fn code(&self) -> u8 {
        match self {
            NodeKind::Visible => 0,
            NodeKind::Ghost => 9,
        }
    }

    pub fn from_code(code: u8) -> Self {
        match code {
            9 => NodeKind::Ghost,
            _ => NodeKind::Visible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeCategory {
    Dorm,
    Canteen,
    Teaching,
    Library,
    Lab,
    Sports,
    Service,
    Gate,
    Admin,
    #[default]
    None,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 10] = [
        NodeCategory::Dorm,
        NodeCategory::Canteen,
        NodeCategory::Teaching,
        NodeCategory::Library,
        NodeCategory::Lab,
        NodeCategory::Sports,
        NodeCategory::Service,
        NodeCategory::Gate,
        NodeCategory::Admin,
        NodeCategory::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Dorm => "Dorm",
            NodeCategory::Canteen => "Canteen",
            NodeCategory::Teaching => "Teaching",
            NodeCategory::Library => "Library",
            NodeCategory::Lab => "Lab",
            NodeCategory::Sports => "Sports",
            NodeCategory::Service => "Service",
            NodeCategory::Gate => "Gate",
            NodeCategory::Admin => "Admin",
            NodeCategory::None => "None",
        }
    }

    /// Total reverse mapping, unknown names fall back to [`NodeCategory::None`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(NodeCategory::None)
    }
}

impl FromStr for NodeCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NodeCategory::from_name(s))
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub kind: NodeKind,
    pub description: String,
    pub category: NodeCategory,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, x: f64, y: f64, kind: NodeKind) -> Self {
        Node {
            id,
            name: name.into(),
            x,
            y,
            z: 0.0,
            kind,
            description: String::new(),
            category: NodeCategory::None,
        }
    }

    pub fn with_category(mut self, category: NodeCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_elevation(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_destination(&self) -> bool {
        self.kind == NodeKind::Visible
    }
}
