use bookstore::config::Config;
use bookstore::{server, Error};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse();

    server::run(config).await
}
