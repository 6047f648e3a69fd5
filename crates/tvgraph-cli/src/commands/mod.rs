//! CLI command implementations

pub mod check;
pub mod config;
pub mod entity;
pub mod traverse;

use clap::Args;
use tvgraph_core::{Entity, EntityKind};

use crate::AppContext;

/// An item id plus the kind to read it as
#[derive(Args)]
pub struct EntityRef {
    /// Item identifier (e.g. Q1234)
    pub id: String,
    /// Entity kind: series, season, episode (defaults to the configured kind)
    #[arg(short, long)]
    pub kind: Option<EntityKind>,
}

impl EntityRef {
    pub async fn load(&self, ctx: &AppContext) -> anyhow::Result<Entity> {
        let kind = self.kind.unwrap_or(ctx.config.default_kind);
        tracing::debug!("Loading {} as {}", self.id, kind);
        Ok(Entity::from_identifier(&ctx.session, &self.id, kind).await?)
    }
}
