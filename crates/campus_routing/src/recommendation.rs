use std::fmt;

use tracing::info;

use crate::{
    cost_model::PathMetrics,
    error::RoutingError,
    routing::router::Router,
    types::NodeId,
    weighting::WeightMode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteCategory {
    Fastest,
    Easiest,
    Shortest,
}

impl RouteCategory {
    pub const PRESENTATION_ORDER: [RouteCategory; 3] = [
        RouteCategory::Fastest,
        RouteCategory::Easiest,
        RouteCategory::Shortest,
    ];

    pub fn weight_mode(&self) -> WeightMode {
        match self {
            RouteCategory::Fastest => WeightMode::Time,
            RouteCategory::Easiest => WeightMode::Cost,
            RouteCategory::Shortest => WeightMode::Distance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteCategory::Fastest => "Fastest",
            RouteCategory::Easiest => "Easiest",
            RouteCategory::Shortest => "Shortest",
        }
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggested route. Built only by [`recommend_paths`] and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRecommendation {
    category: RouteCategory,
    label: String,
    nodes: Vec<NodeId>,
    metrics: PathMetrics,
    equivalent_categories: Vec<RouteCategory>,
}

impl PathRecommendation {
    pub fn category(&self) -> RouteCategory {
        self.category
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn metrics(&self) -> &PathMetrics {
        &self.metrics
    }

    /// Other categories whose search ended on this exact node sequence.
    pub fn equivalent_categories(&self) -> &[RouteCategory] {
        &self.equivalent_categories
    }

    /// e.g. `Route 1 · Fastest (= Shortest)`
    pub fn title(&self) -> String {
        let mut title = format!("{} · {}", self.label, self.category);
        if !self.equivalent_categories.is_empty() {
            let others: Vec<&str> = self
                .equivalent_categories
                .iter()
                .map(RouteCategory::as_str)
                .collect();
            title.push_str(&format!(" (= {})", others.join(", ")));
        }
        title
    }
}

/// Runs one search per [`RouteCategory`] and returns them in presentation order.
///
/// A search landing on a node sequence already recommended is folded into that
/// recommendation as an equivalent category instead of being listed twice.
pub fn recommend_paths(
    router: &Router,
    start: NodeId,
    end: NodeId,
) -> Result<Vec<PathRecommendation>, RoutingError> {
    let mut recommendations: Vec<PathRecommendation> = Vec::with_capacity(3);

    for category in RouteCategory::PRESENTATION_ORDER {
        let Some(route) = router.find_path_with_mode(category.weight_mode(), start, end)? else {
            continue;
        };

        if let Some(existing) = recommendations
            .iter_mut()
            .find(|recommendation| recommendation.nodes == route.nodes())
        {
            existing.equivalent_categories.push(category);
            continue;
        }

        recommendations.push(PathRecommendation {
            category,
            label: format!("Route {}", recommendations.len() + 1),
            nodes: route.path.nodes().to_vec(),
            metrics: route.metrics,
            equivalent_categories: Vec::new(),
        });
    }

    info!(
        "{} recommendations from {} to {} by {}",
        recommendations.len(),
        start,
        end,
        router.transport()
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;
    use crate::{
        cost_model::CostModel,
        edge::Edge,
        graph::GraphStore,
        node::{Node, NodeKind},
        test_graph_utils::test_graph::{campus_graph, disconnected_graph, triangle_graph},
        transport::TransportMode,
    };

    #[test]
    fn walking_yields_three_distinct_routes() {
        let graph = campus_graph();
        let model = CostModel::default();
        let router = Router::new(&graph, &model, TransportMode::Walk);

        let recommendations = recommend_paths(&router, 101, 102).unwrap();
        assert_eq!(recommendations.len(), 3);

        let summary: Vec<(&str, RouteCategory, &[NodeId])> = recommendations
            .iter()
            .map(|r| (r.label(), r.category(), r.nodes()))
            .collect();
        let expected: Vec<(&str, RouteCategory, &[NodeId])> = vec![
            ("Route 1", RouteCategory::Fastest, &[101, 904, 102][..]),
            ("Route 2", RouteCategory::Easiest, &[101, 902, 903, 102][..]),
            ("Route 3", RouteCategory::Shortest, &[101, 901, 102][..]),
        ];
        assert_eq!(summary, expected);

        let fastest = recommendations[0].metrics();
        assert_eq!(fastest.distance.value(), 240.0);
        assert_eq!(fastest.duration, SignedDuration::from_secs(192));
        assert_eq!(fastest.cost, 600.0);
        assert!(recommendations.iter().all(|r| r.equivalent_categories().is_empty()));
    }

    #[test]
    fn identical_paths_are_merged() {
        let graph = campus_graph();
        let model = CostModel::default();
        let router = Router::new(&graph, &model, TransportMode::SharedBike);

        let recommendations = recommend_paths(&router, 101, 102).unwrap();
        assert_eq!(recommendations.len(), 2);

        assert_eq!(recommendations[0].category(), RouteCategory::Fastest);
        assert_eq!(recommendations[0].nodes(), &[101, 902, 903, 102]);
        assert_eq!(
            recommendations[0].equivalent_categories(),
            &[RouteCategory::Easiest]
        );
        assert_eq!(recommendations[0].title(), "Route 1 · Fastest (= Easiest)");

        assert_eq!(recommendations[1].label(), "Route 2");
        assert_eq!(recommendations[1].category(), RouteCategory::Shortest);
        assert_eq!(recommendations[1].title(), "Route 2 · Shortest");
    }

    #[test]
    fn bike_durations_include_one_pickup() {
        let graph = campus_graph();
        let model = CostModel::default();
        let router = Router::new(&graph, &model, TransportMode::SharedBike);

        let recommendations = recommend_paths(&router, 101, 102).unwrap();
        // 290 m at 4 m/s plus 90 s to find and park the bike
        assert_eq!(
            recommendations[0].metrics().duration,
            SignedDuration::from_millis(162_500)
        );
    }

    #[test]
    fn tie_collapses_all_categories() {
        let graph = triangle_graph();
        let model = CostModel::default();
        let router = Router::new(&graph, &model, TransportMode::Walk);

        let recommendations = recommend_paths(&router, 1, 3).unwrap();
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].nodes(), &[1, 3]);
        assert_eq!(
            recommendations[0].equivalent_categories(),
            &[RouteCategory::Easiest, RouteCategory::Shortest]
        );
    }

    #[test]
    fn no_route_gives_no_recommendations() {
        let graph = disconnected_graph();
        let model = CostModel::default();
        let router = Router::new(&graph, &model, TransportMode::Walk);

        assert_eq!(recommend_paths(&router, 1, 4), Ok(vec![]));
        assert_eq!(
            recommend_paths(&router, 1, 40),
            Err(RoutingError::UnknownNode(40))
        );
    }

    #[test]
    fn huge_lengths_still_yield_a_recommendation() {
        let graph = GraphStore::from_parts(
            vec![
                Node::new(1, "One", 0.0, 0.0, NodeKind::Visible),
                Node::new(2, "Two", 1.0, 0.0, NodeKind::Visible),
            ],
            vec![Edge::new(1, 2, 1e300)],
        );
        let model = CostModel::default();
        let router = Router::new(&graph, &model, TransportMode::Walk);

        let recommendations = recommend_paths(&router, 1, 2).unwrap();
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].nodes(), &[1, 2]);
        assert_eq!(recommendations[0].metrics().duration, SignedDuration::MAX);
    }
}
