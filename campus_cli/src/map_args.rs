use std::path::PathBuf;

use anyhow::Context;
use campus_routing::{config::CostModelConfig, cost_model::CostModel, graph::GraphStore};
use clap::Args;
use tracing::info;

pub const COST_MODEL_ENV_VAR: &str = "CAMPUS_COST_MODEL";

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Node file (`id,name,x,y,z,kind,description,category`)
    #[arg(short, long)]
    pub nodes: PathBuf,

    /// Edge file (`u,v,distance,roadType,slope,name,description`)
    #[arg(short, long)]
    pub edges: PathBuf,
}

impl MapArgs {
    pub fn load(&self) -> Result<GraphStore, anyhow::Error> {
        let graph = GraphStore::from_files(&self.nodes, &self.edges)?;
        Ok(graph)
    }
}

#[derive(Args, Debug)]
pub struct CostModelArgs {
    /// JSON file overriding the default speeds and comfort factors
    #[arg(long, env = COST_MODEL_ENV_VAR)]
    pub config: Option<PathBuf>,
}

impl CostModelArgs {
    pub fn load(&self) -> Result<CostModel, anyhow::Error> {
        let Some(path) = &self.config else {
            return Ok(CostModel::default());
        };

        info!("Using cost model {}", path.display());
        let config = CostModelConfig::from_file(path)
            .with_context(|| format!("Cannot load cost model {}", path.display()))?;

        Ok(CostModel::new(config))
    }
}
