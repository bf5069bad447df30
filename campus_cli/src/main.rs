use clap::{Parser, Subcommand};

use crate::{
    check::CheckArgs,
    edit::EditArgs,
    route::{MetricsArgs, RecommendArgs, RouteArgs},
};

mod check;
mod edit;
mod format;
mod map_args;
mod parsers;
mod route;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two nodes for a single weight mode
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Fastest, easiest and shortest routes side by side
    Recommend {
        #[command(flatten)]
        args: RecommendArgs,
    },
    /// Distance, duration and cost of an arbitrary node sequence
    Metrics {
        #[command(flatten)]
        args: MetricsArgs,
    },
    /// Summary of the map and its dangling edges
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
    /// Applies scripted edits to the map and saves it
    #[command(visible_alias = "e")]
    Edit {
        #[command(flatten)]
        args: EditArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run_route(args)?,
        Some(Commands::Recommend { args }) => route::run_recommend(args)?,
        Some(Commands::Metrics { args }) => route::run_metrics(args)?,
        Some(Commands::Check { args }) => check::run(args)?,
        Some(Commands::Edit { args }) => edit::run(args)?,
        None => {}
    }

    Ok(())
}
