use campus_routing::{edge::RoadType, node::NodeKind, types::NodeId};

use crate::edit::EditOp;

pub fn parse_node_id(input: &str) -> Result<NodeId, String> {
    input
        .trim()
        .parse::<NodeId>()
        .map_err(|_| format!("Invalid node id {:?}", input))
}

fn parse_number(input: &str) -> Result<f64, String> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid number {:?}", input))
}

/// Edge lengths in meters, finite and non-negative.
pub fn parse_distance(input: &str) -> Result<f64, String> {
    let distance = parse_number(input)?;
    if !distance.is_finite() || distance < 0.0 {
        return Err(format!("Invalid distance {:?}", input));
    }
    Ok(distance)
}

/// `visible`/`ghost` or their file codes `0`/`9`.
pub fn parse_node_kind(input: &str) -> Result<NodeKind, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "visible" | "building" | "0" => Ok(NodeKind::Visible),
        "ghost" | "junction" | "9" => Ok(NodeKind::Ghost),
        _ => Err(format!("Invalid node kind {:?}", input)),
    }
}

/// Road type by name or by its ordinal in the edge file.
pub fn parse_road_type(input: &str) -> Result<RoadType, String> {
    let input = input.trim();
    if let Some(road_type) = RoadType::from_name(input) {
        return Ok(road_type);
    }

    match input.parse::<u8>() {
        Ok(ordinal) if (ordinal as usize) < RoadType::ALL.len() => {
            Ok(RoadType::from_ordinal(ordinal))
        }
        _ => Err(format!("Invalid road type {:?}", input)),
    }
}

fn expect_args<'a>(
    op: &str,
    args: &'a str,
    min: usize,
    max: usize,
) -> Result<Vec<&'a str>, String> {
    let parts: Vec<&str> = if args.trim().is_empty() {
        vec![]
    } else {
        args.split(',').map(str::trim).collect()
    };

    if parts.len() < min || parts.len() > max {
        return Err(if min == max {
            format!("{} expects {} arguments, got {}", op, min, parts.len())
        } else {
            format!(
                "{} expects {} to {} arguments, got {}",
                op,
                min,
                max,
                parts.len()
            )
        });
    }

    Ok(parts)
}

/// Parses one scripted edit written `name:args`, e.g. `add-edge:101,902,95,path`.
pub fn parse_edit_op(input: &str) -> Result<EditOp, String> {
    let (name, args) = input.split_once(':').unwrap_or((input, ""));
    let name = name.trim().to_ascii_lowercase();

    match name.as_str() {
        "add-node" => {
            let parts = expect_args(&name, args, 2, 3)?;
            Ok(EditOp::AddNode {
                x: parse_number(parts[0])?,
                y: parse_number(parts[1])?,
                kind: match parts.get(2) {
                    Some(kind) => parse_node_kind(kind)?,
                    None => NodeKind::Visible,
                },
            })
        }
        "delete-node" => {
            let parts = expect_args(&name, args, 1, 1)?;
            Ok(EditOp::DeleteNode(parse_node_id(parts[0])?))
        }
        "move-node" => {
            let parts = expect_args(&name, args, 3, 3)?;
            Ok(EditOp::MoveNode {
                id: parse_node_id(parts[0])?,
                x: parse_number(parts[1])?,
                y: parse_number(parts[2])?,
            })
        }
        "add-edge" => {
            let parts = expect_args(&name, args, 2, 5)?;
            Ok(EditOp::AddEdge {
                u: parse_node_id(parts[0])?,
                v: parse_node_id(parts[1])?,
                distance: parts.get(2).map(|d| parse_distance(d)).transpose()?,
                road_type: parts
                    .get(3)
                    .map(|r| parse_road_type(r))
                    .transpose()?
                    .unwrap_or_default(),
                slope: parts
                    .get(4)
                    .map(|s| parse_number(s))
                    .transpose()?
                    .unwrap_or(0.0),
            })
        }
        "delete-edge" => {
            let parts = expect_args(&name, args, 2, 2)?;
            Ok(EditOp::DeleteEdge {
                u: parse_node_id(parts[0])?,
                v: parse_node_id(parts[1])?,
            })
        }
        "undo" => {
            expect_args(&name, args, 0, 0)?;
            Ok(EditOp::Undo)
        }
        _ => Err(format!("Unknown edit operation {:?}", input)),
    }
}
