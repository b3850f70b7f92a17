//! Ping command - Connects and runs a trivial query.

use crate::cli::args::DriverArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::ConnectionFactory;

/// Execute the ping command
pub async fn execute(args: DriverArgs, mut config: Config) -> AppResult<()> {
    super::apply_driver(&args, &mut config);

    let factory = ConnectionFactory::from_config(&config)?;
    tracing::info!(driver = %factory.driver(), "Checking database connectivity...");

    let database = factory.connect().await?;
    let result = database.ping().await;
    database.close().await?;
    result?;

    println!("{}: ok", factory.driver());
    Ok(())
}
