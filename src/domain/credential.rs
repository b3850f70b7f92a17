//! Database connection parameters.

/// Connection parameters for a database backend.
///
/// Immutable once built. `sslmode` is only consulted by the PostgreSQL
/// driver.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
    host: String,
    dbname: String,
    sslmode: Option<String>,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("host", &self.host)
            .field("dbname", &self.dbname)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl Credential {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        dbname: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            host: host.into(),
            dbname: dbname.into(),
            sslmode: None,
        }
    }

    pub fn with_sslmode(mut self, sslmode: impl Into<String>) -> Self {
        let sslmode = sslmode.into();
        self.sslmode = (!sslmode.is_empty()).then_some(sslmode);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    pub fn sslmode(&self) -> Option<&str> {
        self.sslmode.as_deref()
    }
}
