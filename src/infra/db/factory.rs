//! Connection factory - turns a driver selector and a credential into the
//! single live connection used by the whole process.

use std::str::FromStr;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DbBackend};
use url::Url;

use super::Database;
use crate::config::{Config, DRIVER_MYSQL, DRIVER_POSTGRESQL, DRIVER_POSTGRES_ALIAS};
use crate::domain::Credential;
use crate::errors::{AppError, AppResult};

/// Supported database dialects.
///
/// Dialects only differ in how the DSN is built; everything past
/// `connect` goes through the same SeaORM connection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    MySql,
    Postgres,
}

impl FromStr for Driver {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            DRIVER_MYSQL => Ok(Driver::MySql),
            DRIVER_POSTGRESQL | DRIVER_POSTGRES_ALIAS => Ok(Driver::Postgres),
            other => Err(AppError::configuration(format!(
                "unsupported database driver {:?}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Driver::MySql => write!(f, "{}", DRIVER_MYSQL),
            Driver::Postgres => write!(f, "{}", DRIVER_POSTGRESQL),
        }
    }
}

impl Driver {
    /// URL scheme understood by the underlying sqlx driver
    pub fn scheme(&self) -> &'static str {
        match self {
            Driver::MySql => "mysql",
            Driver::Postgres => "postgres",
        }
    }

    /// SeaORM backend matching this dialect
    pub fn backend(&self) -> DbBackend {
        match self {
            Driver::MySql => DbBackend::MySql,
            Driver::Postgres => DbBackend::Postgres,
        }
    }

    /// Build the connection string for this dialect.
    ///
    /// User and password are percent-encoded. PostgreSQL additionally
    /// carries `sslmode` when the credential sets one.
    pub fn dsn(&self, credential: &Credential) -> AppResult<String> {
        let invalid = |what: &str| {
            AppError::configuration(format!(
                "cannot build {} DSN: invalid {}",
                self, what
            ))
        };

        let mut url = Url::parse(&format!("{}://{}/", self.scheme(), credential.host()))
            .map_err(|_| invalid("host"))?;

        url.set_username(credential.username())
            .map_err(|_| invalid("username"))?;
        if !credential.password().is_empty() {
            url.set_password(Some(credential.password()))
                .map_err(|_| invalid("password"))?;
        }
        url.set_path(&format!("/{}", credential.dbname()));

        if let (Driver::Postgres, Some(sslmode)) = (self, credential.sslmode()) {
            url.query_pairs_mut().append_pair("sslmode", sslmode);
        }

        Ok(url.into())
    }
}

/// Opens the process-wide connection for one dialect.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    driver: Driver,
    credential: Credential,
}

impl ConnectionFactory {
    pub fn new(driver: Driver, credential: Credential) -> Self {
        Self { driver, credential }
    }

    /// Select the dialect named by `driver`.
    ///
    /// Fails with `AppError::Configuration` for unknown names, before any
    /// connection attempt is made.
    pub fn select(driver: &str, credential: Credential) -> AppResult<Self> {
        Ok(Self::new(driver.parse()?, credential))
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::select(&config.driver, config.credential.clone())
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    pub fn dsn(&self) -> AppResult<String> {
        self.driver.dsn(&self.credential)
    }

    /// Open the connection.
    ///
    /// Success means the driver accepted the DSN and handed back a pool;
    /// use `Database::ping` to confirm the server actually answers.
    pub async fn connect(&self) -> AppResult<Database> {
        let mut options = ConnectOptions::new(self.dsn()?);
        options.sqlx_logging(false);

        tracing::debug!(
            driver = %self.driver,
            host = self.credential.host(),
            dbname = self.credential.dbname(),
            "Opening database connection"
        );

        let connection = SeaDatabase::connect(options)
            .await
            .map_err(AppError::Connection)?;

        tracing::info!(driver = %self.driver, "Database connection opened");

        Ok(Database::from_connection(connection))
    }
}
