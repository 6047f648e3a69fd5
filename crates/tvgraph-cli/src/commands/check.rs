//! Check command: evaluate an entity's constraints

use clap::Args;
use tvgraph_core::ConstraintReport;

use super::EntityRef;
use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub entity: EntityRef,

    /// Only print failing constraints
    #[arg(long)]
    pub failures: bool,
}

pub async fn run(args: &CheckArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let entity = args.entity.load(ctx).await?;
    let mut report = ConstraintReport::new(&entity, entity.constraints(&ctx.session).await?);
    tracing::info!(
        "Checked {}: {} passed, {} failed",
        report.entity,
        report.passed(),
        report.failed()
    );

    if args.failures {
        report.results.retain(|r| !r.passed);
    }

    match OutputFormat::from(cli.format.as_str()) {
        OutputFormat::Json => println!("{}", to_json(&report)),
        OutputFormat::Text => {
            println!("{}", report.entity);
            for result in &report.results {
                let status = if result.passed { "ok" } else { "FAIL" };
                println!("  [{}] {}: {}", status, result.constraint, result.message);
            }
        }
    }
    Ok(())
}
