//! Runtime configuration for the HTTP server and the PostgreSQL store.

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on accepted request bodies.
    pub body_limit_bytes: usize,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    /// Schema that owns the `school` table. Validated as a plain identifier.
    pub schema: String,
}

// Hand-written so the password inside `connect_options` never reaches the logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let options = &self.connect_options;
        f.debug_struct("DatabaseConfig")
            .field("host", &options.get_host())
            .field("port", &options.get_port())
            .field("username", &options.get_username())
            .field("database", &options.get_database())
            .field("max_connections", &self.max_connections)
            .field("schema", &self.schema)
            .finish()
    }
}
