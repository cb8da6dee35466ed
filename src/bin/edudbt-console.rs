use tokio::io::{self, BufReader};

use edudbt::EduStore;
use edudbt::config::Config;
use edudbt::console::Console;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;
    // Keep the menu readable: only warnings and errors unless RUST_LOG says otherwise.
    edudbt::logging::init_tracing("warn");

    let store = EduStore::connect(&cfg.store).await?;

    let mut console = Console::new(store.clone(), BufReader::new(io::stdin()), io::stdout());
    let result = console.run().await;

    store.close().await;
    result?;
    Ok(())
}
