use campus_routing::{cost_model::PathMetrics, graph::GraphStore, types::NodeId};
use jiff::SignedDuration;

/// `4 min 05 s`, or `48 s` below a minute.
pub fn format_duration(duration: SignedDuration) -> String {
    let total = duration.as_secs_f64().round() as i64;
    let (minutes, seconds) = (total / 60, total % 60);
    if minutes == 0 {
        format!("{} s", seconds)
    } else {
        format!("{} min {:02} s", minutes, seconds)
    }
}

pub fn format_cost(cost: f64) -> String {
    format!("{:.1}", cost)
}

pub fn format_metrics(metrics: &PathMetrics) -> String {
    let mut text = format!(
        "{} · {} · cost {}",
        metrics.distance,
        format_duration(metrics.duration),
        format_cost(metrics.cost)
    );
    if !metrics.accessible {
        text.push_str(" · not accessible");
    }
    text
}

/// Node names joined with arrows, ghost junctions included.
pub fn format_node_sequence(graph: &GraphStore, nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|id| match graph.node(*id) {
            Some(node) => format!("{} ({})", node.name, id),
            None => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
