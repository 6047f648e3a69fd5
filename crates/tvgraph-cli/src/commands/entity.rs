//! Show command

use clap::Args;

use super::EntityRef;
use crate::output::{to_json, EntityView, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub entity: EntityRef,
}

pub async fn run(args: &ShowArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let entity = args.entity.load(ctx).await?;

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&EntityView::from(&entity))),
        OutputFormat::Text => {
            println!("{}", entity);
            let mut properties: Vec<_> = entity.facts().iter().collect();
            properties.sort_by(|a, b| a.0.cmp(b.0));
            for (property, claims) in properties {
                println!("  {}: {} value(s)", property, claims.len());
            }
        }
    }
    Ok(())
}
