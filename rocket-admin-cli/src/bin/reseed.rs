//! rocket-reseed - delete and regenerate Rocket Engine Backend seed data

use clap::Parser;

use rocket_admin_cli::args::TargetArgs;
use rocket_admin_cli::{init_tracing, output, run};
use rocket_admin_core::Operation;

#[derive(Parser, Debug)]
#[command(
    name = "rocket-reseed",
    author,
    version,
    about = "Delete and regenerate seed data on the Rocket Engine Backend",
    long_about = "Triggers the backend's reseed endpoints over HTTP. Scope the run with \
                  --engines or --vehicles; with neither flag everything is reseeded. \
                  Targets the production deployment unless --local is given."
)]
struct Cli {
    #[command(flatten)]
    target: TargetArgs,
}

#[tokio::main]
async fn main() {
    init_tracing().ok();
    let cli = Cli::parse();

    if let Err(err) = run::run_operation(Operation::Reseed, &cli.target).await {
        output::report_failure(Operation::Reseed, &err);
        std::process::exit(1);
    }
}
