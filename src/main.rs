use aws_network_inventory::{load_inventory, output};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    // Optional first argument: a specific cache file to render from.
    let cache_file = std::env::args().nth(1);
    let graph = load_inventory(cache_file.as_deref()).await?;

    output::render(&graph);

    Ok(())
}
