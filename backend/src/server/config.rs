//! Server settings and the resolved configuration built from them.

use std::net::SocketAddr;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::{info, warn};

use events_api::domain::EventService;
use events_api::inbound::http::state::HttpState;
use events_api::outbound::memory::InMemoryEventRepository;
use events_api::outbound::persistence::{
    DbPool, DieselEventRepository, PoolConfig, run_pending_migrations,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_RUN_MIGRATIONS: bool = true;

/// Settings loaded from CLI arguments, `EVENTS_*` environment variables and
/// an optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EVENTS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one, events are kept in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Configured pool size, falling back to ten connections.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether to migrate the schema at startup, on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(DEFAULT_RUN_MIGRATIONS)
    }
}

/// Resolved server configuration.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Wrap an already built handler state.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
        }
    }

    /// Parse the bind address and wire the event service to its repository.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the bind address is malformed, the
    /// migrations fail or the pool cannot be built.
    pub async fn from_settings(settings: &ServerSettings) -> std::io::Result<Self> {
        let bind_addr = settings.bind_addr().parse::<SocketAddr>().map_err(|e| {
            std::io::Error::other(format!("invalid bind address {}: {e}", settings.bind_addr()))
        })?;

        let http_state = match &settings.database_url {
            Some(url) => {
                let pool = connect(settings, url).await?;
                let repository = Arc::new(DieselEventRepository::new(pool));
                HttpState::from_service(Arc::new(EventService::new(repository)))
            }
            None => {
                warn!("no database url configured; events are kept in memory");
                let repository = Arc::new(InMemoryEventRepository::new());
                HttpState::from_service(Arc::new(EventService::new(repository)))
            }
        };

        Ok(Self::new(bind_addr, http_state))
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by the settings tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

async fn connect(settings: &ServerSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations() {
        let applied = run_pending_migrations(url)
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database schema is current");
    }

    let config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
    DbPool::new(config).await.map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "EVENTS_BIND_ADDR",
        "EVENTS_DATABASE_URL",
        "EVENTS_DB_MAX_CONNECTIONS",
        "EVENTS_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("events-api")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
        assert!(settings.database_url.is_none());
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn migrations_stay_enabled_when_only_a_database_url_is_set() {
        let _guard = lock_env([
            ("EVENTS_BIND_ADDR", None),
            (
                "EVENTS_DATABASE_URL",
                Some("postgres://events@localhost/events".to_owned()),
            ),
            ("EVENTS_DB_MAX_CONNECTIONS", None),
            ("EVENTS_RUN_MIGRATIONS", None),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.database_url.is_some());
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("EVENTS_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "EVENTS_DATABASE_URL",
                Some("postgres://events@localhost/events".to_owned()),
            ),
            ("EVENTS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("EVENTS_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090");
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://events@localhost/events")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_database_url_falls_back_to_memory() {
        let settings = {
            let _guard = lock_env([
                ("EVENTS_BIND_ADDR", Some("127.0.0.1:0".to_owned())),
                ("EVENTS_DATABASE_URL", None),
                ("EVENTS_DB_MAX_CONNECTIONS", None),
                ("EVENTS_RUN_MIGRATIONS", None),
            ]);
            load_from_empty_args()
        };

        let config = ServerConfig::from_settings(&settings)
            .await
            .expect("in-memory config");
        assert_eq!(config.bind_addr().port(), 0);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_bind_address_is_rejected() {
        let settings = ServerSettings {
            bind_addr: Some("not an address".to_owned()),
            database_url: None,
            db_max_connections: None,
            run_migrations: Some(false),
        };

        let err = ServerConfig::from_settings(&settings)
            .await
            .err()
            .expect("bind address should fail to parse");
        assert!(err.to_string().contains("invalid bind address"));
    }
}
