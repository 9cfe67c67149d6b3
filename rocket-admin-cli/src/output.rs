//! Terminal presentation: banner, spinner, failure diagnostics.
//!
//! Summary and progress lines go to stdout; the spinner and all failure
//! output go to stderr, so piped stdout stays machine-friendly.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rocket_admin_core::{InvokeError, Operation};

/// Banner printed before the request is sent.
pub fn banner_lines(op: Operation, base_url: &str) -> Vec<String> {
    let title = match op {
        Operation::Reseed => "🚀 Rocket Engine Backend - Reseed Tool",
        Operation::Sync => "🔄 Rocket Engine Backend - Truth Ledger Sync Tool",
    };

    let mut lines = vec![
        title.to_string(),
        "━".repeat(50),
        format!("📡 Target: {}", base_url),
    ];
    if op == Operation::Sync {
        lines.push("📚 Source: Truth Ledger (verified entity data)".to_string());
    }
    lines.push(String::new());
    lines
}

/// Static remediation tips shown under a failure message.
pub fn tips(op: Operation) -> &'static [&'static str] {
    match op {
        Operation::Reseed => &[
            "   - Make sure the backend is running",
            "   - Use --local flag for localhost:8080",
            "   - Check if the server is awake (Render cold start)",
        ],
        Operation::Sync => &[
            "   - Make sure the backend is running",
            "   - Use --local flag for localhost:8080",
            "   - Check if Truth Ledger is running and accessible",
            "   - Check if the server is awake (Render cold start)",
        ],
    }
}

/// Trailing note printed after a successful sync.
pub fn sync_note() -> [&'static str; 2] {
    [
        "💡 Note: Truth Ledger is the source of truth for verified entity data.",
        "   Entities are created/updated based on verified facts from multiple sources.",
    ]
}

/// Write the failure message and tips to stderr.
pub fn report_failure(op: Operation, err: &InvokeError) {
    eprintln!("❌ {} failed: {}", op.label(), err);
    eprintln!();
    eprintln!("💡 Tips:");
    for tip in tips(op) {
        eprintln!("{}", tip);
    }
}

/// Helper to create a spinner (respects quiet mode and TTY)
pub fn spinner(msg: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet || !std::io::stderr().is_terminal() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}
