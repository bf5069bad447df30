//! Line codec for the node and edge files.
//!
//! Node record: `id,name,x,y,z,kind,description,category`
//! Edge record: `u,v,distance,roadType,slope,name,description`
//!
//! Blank lines and lines starting with `#` are ignored. Fields are trimmed. Slopes are
//! written as signed decimal grades; the legacy boolean flags are accepted on read.

use std::io::BufRead;

use tracing::debug;

use crate::{
    constants::LEGACY_SLOPE_GRADE,
    edge::{Edge, RoadType},
    meters::Meters,
    node::{Node, NodeCategory, NodeKind},
};

pub const NODE_HEADER: &str = "# id,name,x,y,z,kind,description,category";
pub const EDGE_HEADER: &str = "# u,v,distance,roadType,slope,name,description";

const NODE_FIELDS: usize = 8;
const EDGE_FIELDS: usize = 7;

pub struct ParsedRecords<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

fn record_fields(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.split(',').map(str::trim).collect())
}

pub fn parse_slope(value: &str) -> Option<f64> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(LEGACY_SLOPE_GRADE),
        "false" | "no" => Some(0.0),
        other => other.parse::<f64>().ok().filter(|grade| grade.is_finite()),
    }
}

fn parse_distance(value: &str) -> Option<Meters> {
    Some(Meters::new(value.parse().ok()?)).filter(Meters::is_valid_length)
}

/// Road types are written as ordinals, names are accepted too.
fn parse_road_type(value: &str) -> Option<RoadType> {
    match value.parse::<u8>() {
        Ok(ordinal) => Some(RoadType::from_ordinal(ordinal)),
        Err(_) => RoadType::from_name(value),
    }
}

pub fn parse_node_fields(fields: &[&str]) -> Option<Node> {
    if fields.len() < NODE_FIELDS {
        return None;
    }

    let last = fields.len() - 1;
    Some(Node {
        id: fields[0].parse().ok()?,
        name: fields[1].to_string(),
        x: fields[2].parse().ok()?,
        y: fields[3].parse().ok()?,
        z: fields[4].parse().ok()?,
        kind: NodeKind::from_code(fields[5].parse().ok()?),
        description: fields[6..last].join(","),
        category: NodeCategory::from_name(fields[last]),
    })
}

pub fn parse_edge_fields(fields: &[&str]) -> Option<Edge> {
    if fields.len() < EDGE_FIELDS {
        return None;
    }

    Some(Edge {
        u: fields[0].parse().ok()?,
        v: fields[1].parse().ok()?,
        distance: parse_distance(fields[2])?,
        road_type: parse_road_type(fields[3])?,
        slope: parse_slope(fields[4])?,
        name: fields[5].to_string(),
        description: fields[6..].join(","),
    })
}

pub fn parse_node_line(line: &str) -> Option<Node> {
    parse_node_fields(&record_fields(line)?)
}

pub fn parse_edge_line(line: &str) -> Option<Edge> {
    parse_edge_fields(&record_fields(line)?)
}

fn parse_records<R, T>(
    reader: R,
    kind: &str,
    parse: impl Fn(&[&str]) -> Option<T>,
) -> std::io::Result<ParsedRecords<T>>
where
    R: BufRead,
{
    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(fields) = record_fields(&line) else {
            continue;
        };

        match parse(&fields) {
            Some(record) => records.push(record),
            None => {
                debug!("Skipping malformed {} record on line {}", kind, index + 1);
                skipped += 1;
            }
        }
    }

    Ok(ParsedRecords { records, skipped })
}

pub fn read_nodes<R: BufRead>(reader: R) -> std::io::Result<ParsedRecords<Node>> {
    parse_records(reader, "node", parse_node_fields)
}

pub fn read_edges<R: BufRead>(reader: R) -> std::io::Result<ParsedRecords<Edge>> {
    parse_records(reader, "edge", parse_edge_fields)
}

/// Commas and line breaks cannot survive the format.
fn sanitize(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            ',' => ';',
            '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

pub fn format_node(node: &Node) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        node.id,
        sanitize(&node.name),
        node.x,
        node.y,
        node.z,
        node.kind.code(),
        sanitize(&node.description),
        node.category.as_str()
    )
}

pub fn format_edge(edge: &Edge) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        edge.u,
        edge.v,
        edge.distance.value(),
        edge.road_type.ordinal(),
        edge.slope,
        sanitize(&edge.name),
        sanitize(&edge.description)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_line_with_trimmed_fields() {
        let node = parse_node_line(" 101 , Library ,12.5, -3, 4.0, 0, Main library , Library ")
            .unwrap();

        assert_eq!(node.id, 101);
        assert_eq!(node.name, "Library");
        assert_eq!((node.x, node.y, node.z), (12.5, -3.0, 4.0));
        assert_eq!(node.kind, NodeKind::Visible);
        assert_eq!(node.description, "Main library");
        assert_eq!(node.category, NodeCategory::Library);
    }

    #[test]
    fn extra_node_fields_belong_to_the_description() {
        let node = parse_node_line("900,Junction,0,0,0,9,north, near gate,None").unwrap();
        assert_eq!(node.kind, NodeKind::Ghost);
        assert_eq!(node.description, "north,near gate");
        assert_eq!(node.category, NodeCategory::None);
    }

    #[test]
    fn rejects_short_or_invalid_records() {
        assert!(parse_node_line("101,Library,1,2").is_none());
        assert!(parse_node_line("abc,Library,1,2,3,0,,Dorm").is_none());
        assert!(parse_edge_line("1,2,10").is_none());
        assert!(parse_edge_line("1,2,ten,0,0,,").is_none());
        assert!(parse_edge_line("# 1,2,10,0,0,,").is_none());
    }

    #[test]
    fn parses_numeric_and_legacy_slopes() {
        assert_eq!(parse_edge_line("1,2,10,0,-0.03,,").unwrap().slope, -0.03);
        assert_eq!(parse_edge_line("1,2,10,4,true,Steps,").unwrap().slope, 0.08);
        assert_eq!(parse_edge_line("1,2,10,0,FALSE,,").unwrap().slope, 0.0);
        assert!(parse_slope("steep").is_none());
        assert!(parse_slope("NaN").is_none());
    }

    #[test]
    fn rejects_unusable_distances() {
        assert!(parse_edge_line("1,2,inf,0,0,,").is_none());
        assert!(parse_edge_line("1,2,NaN,0,0,,").is_none());
        assert!(parse_edge_line("1,2,-5,0,0,,").is_none());
        assert_eq!(parse_edge_line("1,2,0,0,0,,").unwrap().distance, Meters::ZERO);
    }

    #[test]
    fn road_types_parse_by_ordinal_or_name() {
        assert_eq!(parse_edge_line("1,2,10,4,0,,").unwrap().road_type, RoadType::Stairs);
        assert_eq!(parse_edge_line("1,2,10,indoor,0,,").unwrap().road_type, RoadType::Indoor);
        assert_eq!(parse_edge_line("1,2,10,42,0,,").unwrap().road_type, RoadType::Normal);
        assert!(parse_edge_line("1,2,10,highway,0,,").is_none());
    }

    #[test]
    fn reader_counts_skipped_lines() {
        let input = "# header\n\n1,2,10,0,0,a,b\nbroken\n2,3,5,1,0.02,c,d\n";
        let parsed = read_edges(input.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.records[1].road_type, RoadType::Main);
    }

    #[test]
    fn formatted_records_parse_back() {
        let mut node = Node::new(905, "Gate, east", 1.5, 2.25, NodeKind::Ghost)
            .with_category(NodeCategory::Gate)
            .with_elevation(-1.0);
        node.description = "line\nbreak".to_string();

        let parsed = parse_node_line(&format_node(&node)).unwrap();
        assert_eq!(parsed.name, "Gate; east");
        assert_eq!(parsed.description, "line break");
        assert_eq!(parsed.category, NodeCategory::Gate);
        assert_eq!(parsed.z, -1.0);

        let edge = Edge::new(905, 101, 12.75)
            .with_road_type(RoadType::Stairs)
            .with_slope(-0.125)
            .with_name("Steps");
        assert_eq!(parse_edge_line(&format_edge(&edge)).unwrap(), edge);
    }
}
