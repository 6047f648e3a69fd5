//! Parent and next commands

use clap::Args;
use serde::Serialize;
use tvgraph_core::Strategy;

use super::EntityRef;
use crate::output::{to_json, EntityView, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct ParentArgs {
    #[command(flatten)]
    pub entity: EntityRef,
}

#[derive(Args)]
pub struct NextArgs {
    #[command(flatten)]
    pub entity: EntityRef,
}

#[derive(Serialize)]
struct Resolved<'a> {
    from: EntityView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<Strategy>,
    result: Option<EntityView<'a>>,
}

pub async fn run_parent(args: &ParentArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let entity = args.entity.load(ctx).await?;
    let parent = entity.parent(&ctx.session).await?;

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => {
            let resolved = Resolved {
                from: EntityView::from(&entity),
                strategy: None,
                result: parent.as_ref().map(EntityView::from),
            };
            println!("{}", to_json(&resolved));
        }
        OutputFormat::Text => match &parent {
            Some(parent) => println!("{}", parent),
            None => println!("{} has no parent", entity),
        },
    }
    Ok(())
}

pub async fn run_next(args: &NextArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let entity = args.entity.load(ctx).await?;
    let successor = entity.successor(&ctx.session).await?;
    if let Some(successor) = &successor {
        tracing::info!("Resolved next of {} via {:?}", entity, successor.strategy);
    }

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => {
            let resolved = Resolved {
                from: EntityView::from(&entity),
                strategy: successor.as_ref().map(|s| s.strategy),
                result: successor.as_ref().map(|s| EntityView::from(&s.entity)),
            };
            println!("{}", to_json(&resolved));
        }
        OutputFormat::Text => match &successor {
            Some(successor) => println!("{}", successor.entity),
            None => println!("{} has no next {}", entity, entity.kind()),
        },
    }
    Ok(())
}
