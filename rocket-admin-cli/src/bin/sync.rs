//! rocket-sync - reconcile Rocket Engine Backend records against the
//! Truth Ledger

use clap::Parser;

use rocket_admin_cli::args::TargetArgs;
use rocket_admin_cli::{init_tracing, output, run};
use rocket_admin_core::Operation;

#[derive(Parser, Debug)]
#[command(
    name = "rocket-sync",
    author,
    version,
    about = "Sync entities from the Truth Ledger to the Rocket Engine Backend",
    long_about = "Triggers the backend's Truth Ledger sync endpoints over HTTP. The Truth \
                  Ledger is the source of truth for verified entity data; the backend \
                  creates or updates its records from it. Scope the run with --engines or \
                  --vehicles; with neither flag all entities are synced. Targets the \
                  production deployment unless --local is given."
)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,
}

#[tokio::main]
async fn main() {
    init_tracing().ok();
    let cli = Cli::parse();

    if let Err(err) = run::run_operation(Operation::Sync, &cli.target).await {
        output::report_failure(Operation::Sync, &err);
        std::process::exit(1);
    }
}
