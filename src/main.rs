use std::io;

use anyhow::Result;
use gambit_cli::Session;
use tracing::info;

fn main() -> Result<()> {
    // Replies go to stdout, so logs must not.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    Session::new().run(io::stdin().lock(), io::stdout().lock())?;

    info!("gambit shutting down");
    Ok(())
}
