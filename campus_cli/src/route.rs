use campus_routing::{
    recommendation::recommend_paths, routing::router::Router, transport::TransportMode,
    types::NodeId, weighting::WeightMode,
};
use clap::Args;
use comfy_table::Table;
use tracing::info;

use crate::{
    format::{format_cost, format_duration, format_metrics, format_node_sequence},
    map_args::{CostModelArgs, MapArgs},
    parsers,
};

#[derive(Args)]
pub struct TripArgs {
    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    cost_model: CostModelArgs,

    #[arg(short, long, value_parser = parsers::parse_node_id)]
    from: NodeId,

    #[arg(short, long, value_parser = parsers::parse_node_id)]
    to: NodeId,

    /// walk, run, shared_bike, e_bike or bus
    #[arg(long, default_value = "walk")]
    transport: TransportMode,
}

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    trip: TripArgs,

    /// distance, time or cost
    #[arg(short, long, default_value = "distance")]
    mode: WeightMode,
}

#[derive(Args)]
pub struct RecommendArgs {
    #[command(flatten)]
    trip: TripArgs,
}

#[derive(Args)]
pub struct MetricsArgs {
    #[command(flatten)]
    map: MapArgs,

    #[command(flatten)]
    cost_model: CostModelArgs,

    /// Comma separated node ids, e.g. `101,901,102`
    #[arg(
        short,
        long,
        required = true,
        value_delimiter = ',',
        value_parser = parsers::parse_node_id
    )]
    path: Vec<NodeId>,

    #[arg(long, default_value = "walk")]
    transport: TransportMode,
}

pub fn run_route(args: RouteArgs) -> Result<(), anyhow::Error> {
    let trip = args.trip;
    let graph = trip.map.load()?;
    let model = trip.cost_model.load()?;
    let router = Router::new(&graph, &model, trip.transport);

    match router.find_path_with_mode(args.mode, trip.from, trip.to)? {
        Some(route) => {
            println!("{}", format_node_sequence(&graph, route.nodes()));
            println!("{}", format_metrics(&route.metrics));
        }
        None => info!(
            "No {} route from {} to {} by {}",
            args.mode, trip.from, trip.to, trip.transport
        ),
    }

    Ok(())
}

pub fn run_recommend(args: RecommendArgs) -> Result<(), anyhow::Error> {
    let trip = args.trip;
    let graph = trip.map.load()?;
    let model = trip.cost_model.load()?;
    let router = Router::new(&graph, &model, trip.transport);

    let recommendations = recommend_paths(&router, trip.from, trip.to)?;
    if recommendations.is_empty() {
        info!(
            "No route from {} to {} by {}",
            trip.from, trip.to, trip.transport
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Route", "Distance", "Duration", "Cost", "Path"]);
    for recommendation in &recommendations {
        let metrics = recommendation.metrics();
        table.add_row(vec![
            recommendation.title(),
            metrics.distance.to_string(),
            format_duration(metrics.duration),
            format_cost(metrics.cost),
            format_node_sequence(&graph, recommendation.nodes()),
        ]);
    }
    println!("{table}");

    Ok(())
}

pub fn run_metrics(args: MetricsArgs) -> Result<(), anyhow::Error> {
    let graph = args.map.load()?;
    let model = args.cost_model.load()?;

    let metrics = model.path_metrics(&graph, args.transport, &args.path)?;
    println!("{}", format_node_sequence(&graph, &args.path));
    println!("{}", format_metrics(&metrics));

    Ok(())
}
