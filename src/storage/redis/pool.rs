//! Redis connection pool and core connection management
//!
//! One auto-reconnecting multiplexed connection is shared by all callers. A
//! semaphore bounds the number of in-flight commands; callers wait for a permit
//! when the bound is reached instead of failing.
//!
//! Behind a sentinel the connection is rebuilt against a freshly discovered
//! master whenever the current node drops the link or answers READONLY.

use super::sentinel;
use crate::config::RedisConfig;
use crate::utils::error::{RbacError, Result, RetryConfig, RetryPolicy};
use redis::aio::ConnectionManager;
use redis::{Client, ConnectionInfo, ErrorKind, IntoConnectionInfo, RedisResult};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, Semaphore};
use tracing::{debug, info, warn};

/// Current data connection; `generation` increases on every rebuild
#[derive(Clone)]
pub(crate) struct ActiveConnection {
    pub(crate) manager: ConnectionManager,
    pub(crate) generation: u64,
}

/// Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    pub(crate) connection: Arc<RwLock<ActiveConnection>>,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) retry: RetryPolicy,
    pub(crate) config: RedisConfig,
}

impl RedisPool {
    /// Create a new Redis pool
    ///
    /// Resolves the sentinel master first when one is configured. Dial failures
    /// are retried `retry_times` times, `retry_interval_ms` apart.
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating Redis connection pool");
        debug!("Redis URL: {}", config.masked_url());

        let retry = RetryPolicy::new(Self::retry_config(config));
        let timeout = Duration::from_secs(config.connection_timeout);

        let manager = retry
            .call_if(move || Self::dial(config, timeout), is_retryable)
            .await?;

        info!(
            max_in_flight = config.max_connections,
            "Redis connection pool created successfully"
        );
        Ok(Self {
            connection: Arc::new(RwLock::new(ActiveConnection {
                manager,
                generation: 0,
            })),
            permits: Arc::new(Semaphore::new(config.max_connections as usize)),
            retry,
            config: config.clone(),
        })
    }

    /// Target of the data connection, after sentinel discovery and overrides
    pub(crate) async fn resolve_connection_info(config: &RedisConfig) -> Result<ConnectionInfo> {
        let mut info = config
            .url
            .as_str()
            .into_connection_info()
            .map_err(RbacError::Redis)?;

        if let Some(master) = &config.sentinel_master {
            let timeout = Duration::from_secs(config.connection_timeout);
            info.addr = sentinel::discover_master(&info.addr, master, timeout).await?;
        }

        Self::apply_overrides(&mut info, config);
        Ok(info)
    }

    /// Explicit password and database settings win over the URL's
    pub(crate) fn apply_overrides(info: &mut ConnectionInfo, config: &RedisConfig) {
        if let Some(password) = &config.password {
            info.redis.password = Some(password.clone());
        }
        if let Some(db) = config.db {
            info.redis.db = db;
        }
    }

    pub(crate) fn retry_config(config: &RedisConfig) -> RetryConfig {
        RetryConfig::fixed(
            config.retry_times,
            Duration::from_millis(config.retry_interval_ms),
        )
    }

    /// Resolve the target and open a connection manager to it
    async fn dial(config: &RedisConfig, timeout: Duration) -> Result<ConnectionManager> {
        let info = Self::resolve_connection_info(config).await?;
        let client = Client::open(info).map_err(RbacError::Redis)?;
        Self::connect(client, timeout).await
    }

    async fn connect(client: Client, timeout: Duration) -> Result<ConnectionManager> {
        tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| RbacError::unavailable("Timed out connecting to Redis"))?
            .map_err(RbacError::Redis)
    }

    /// Run one command on a pooled connection
    ///
    /// Waits for an in-flight permit, then retries transport failures per the
    /// configured policy. Behind a sentinel, a failure that points at a demoted
    /// or lost master rebuilds the connection before the next attempt.
    pub async fn execute<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: Fn(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| RbacError::unavailable("Redis connection pool is closed"))?;

        let pool = self;
        let op = &op;
        self.retry
            .call_if(
                move || async move {
                    let active = pool.connection.read().await.clone();
                    match op(active.manager).await {
                        Ok(value) => Ok(value),
                        Err(e) => {
                            let error = RbacError::Redis(e);
                            if needs_rediscovery(&pool.config, &error) {
                                pool.rediscover(active.generation).await;
                            }
                            Err(error)
                        }
                    }
                },
                |error| is_retryable(error) || needs_rediscovery(&self.config, error),
            )
            .await
    }

    /// Replace the connection with one to the master the sentinel names now
    ///
    /// Callers that failed on the same generation rebuild only once. A failed
    /// lookup keeps the old connection; the next failure tries again.
    pub(crate) async fn rediscover(&self, failed_generation: u64) {
        let mut active = self.connection.write().await;
        if active.generation != failed_generation {
            return;
        }

        let timeout = Duration::from_secs(self.config.connection_timeout);
        match Self::dial(&self.config, timeout).await {
            Ok(manager) => {
                active.manager = manager;
                active.generation += 1;
                info!(
                    generation = active.generation,
                    "Reconnected to Redis master after sentinel rediscovery"
                );
            }
            Err(e) => warn!("Sentinel rediscovery failed: {}", e),
        }
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing Redis health check");
        let _: String = self
            .execute(|mut conn| async move { redis::cmd("PING").query_async(&mut conn).await })
            .await?;

        debug!("Redis health check passed");
        Ok(())
    }

    /// Close the connection pool
    ///
    /// Waiting and future callers fail with `Unavailable`.
    pub async fn close(&self) -> Result<()> {
        info!("Closing Redis connection pool");
        self.permits.close();
        info!("Redis connection pool closed");
        Ok(())
    }

    pub fn config(&self) -> &RedisConfig {
        &self.config
    }
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("url", &self.config.masked_url())
            .field("available_permits", &self.permits.available_permits())
            .finish()
    }
}

/// Failures that mean the sentinel may have promoted another master
///
/// A dropped or refused connection, or a READONLY reply from a demoted node.
/// Without a sentinel there is nothing to rediscover.
pub(crate) fn needs_rediscovery(config: &RedisConfig, error: &RbacError) -> bool {
    if config.sentinel_master.is_none() {
        return false;
    }
    match error {
        RbacError::Redis(e) => {
            e.kind() == ErrorKind::ReadOnly
                || e.is_connection_dropped()
                || e.is_connection_refusal()
                || e.is_io_error()
        }
        _ => false,
    }
}

/// Transport failures worth another attempt
pub(crate) fn is_retryable(error: &RbacError) -> bool {
    match error {
        RbacError::Redis(e) => {
            e.is_io_error() || e.is_timeout() || e.is_connection_refusal() || e.is_connection_dropped()
        }
        RbacError::Unavailable(_) => true,
        _ => false,
    }
}
