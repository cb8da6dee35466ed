use crate::config::StoreConfig;
use crate::db::schema::SQLITE_INIT;
use crate::error::EduError;
use backon::{ExponentialBuilder, Retryable};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub type SqlitePool = Pool<Sqlite>;

/// Handle to the relational store. Cheap to clone; every operation borrows a
/// pooled connection for the length of its own unit of work.
#[derive(Clone)]
pub struct EduStore {
    pool: SqlitePool,
}

impl EduStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open the pool, retrying with exponential backoff, then apply the schema.
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, EduError> {
        let connect_opts = SqliteConnectOptions::from_str(&cfg.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(cfg.busy_timeout());

        let retry_policy = ExponentialBuilder::default()
            .with_min_delay(cfg.retry_min_delay())
            .with_max_delay(cfg.retry_max_delay())
            .with_max_times(cfg.connect_retries);

        let (max_connections, min_connections) = (cfg.max_connections, cfg.min_connections);
        let pool = (|| {
            let opts = connect_opts.clone();
            async move {
                SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .min_connections(min_connections)
                    .connect_with(opts)
                    .await
            }
        })
        .retry(retry_policy)
        .notify(|err: &sqlx::Error, delay: Duration| {
            warn!(error = %err, delay = ?delay, "store connection failed; retrying");
        })
        .await
        .map_err(|e| EduError::StoreUnavailable(format!("failed to connect to store: {e}")))?;

        info!(database_url = %cfg.database_url, "connected to store");

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), EduError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Trivial round trip used by the health endpoint.
    pub async fn ping(&self) -> Result<(), EduError> {
        let (one,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;
        if one != 1 {
            return Err(EduError::StoreUnavailable(
                "unexpected health probe result".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("store pool closed");
    }
}
