//! Shared execution path for both binaries: resolve the endpoint, issue
//! the POST, print the outcome.

use rocket_admin_core::{
    summary, ActionInvoker, EntityScope, InvocationRequest, Operation, Result, Target,
};

use crate::args::TargetArgs;
use crate::output;

/// Run one administrative operation end to end.
///
/// Prints the banner and summary to stdout; failures propagate to the
/// caller, which reports them and sets the exit status.
pub async fn run_operation(op: Operation, args: &TargetArgs) -> Result<()> {
    let target = Target::from_flag(args.local);
    let scope = EntityScope::from_flags(args.engines, args.vehicles);
    let route = op.route(scope);

    for line in output::banner_lines(op, target.base_url()) {
        println!("{}", line);
    }
    println!("⏳ {}", route.description);
    println!();

    let invoker = ActionInvoker::new();
    let request = InvocationRequest::new(target.base_url(), route.path);

    let pb = output::spinner("Waiting for backend response...", args.quiet);
    let outcome = invoker.invoke(&request).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let result = outcome?;

    println!("✅ {} completed successfully!", op.label());
    println!();
    for line in summary::render(op, &result.body) {
        println!("{}", line);
    }

    if op == Operation::Sync {
        println!();
        for line in output::sync_note() {
            println!("{}", line);
        }
    }

    Ok(())
}
