use clap::Args;

/// Flags shared by both admin binaries.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Send the request to localhost:8080 instead of the production backend
    #[arg(long)]
    pub local: bool,

    /// Scope the operation to engines only
    #[arg(long)]
    pub engines: bool,

    /// Scope the operation to launch vehicles only (--engines wins if both are given)
    #[arg(long)]
    pub vehicles: bool,

    /// Suppress the progress spinner (for script consumption)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
