use std::io::IsTerminal;

use anyhow::Context;
use menuplan::cli::PlannerApp;
use menuplan::config::Config;
use menuplan::logging::init_logging;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncWriteExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Fixed relative paths; the planner takes no arguments
    let config = Config {
        styled: std::io::stdout().is_terminal(),
        ..Config::default()
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"MenuPlanner\n").await?;

    let mut app = PlannerApp::start(&config, StdRng::from_entropy(), &mut stdout)
        .await
        .context("Failed to start the planner")?;

    app.run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
        .context("Command loop failed")?;

    Ok(())
}
