//! Sentinel master discovery

use crate::utils::error::{RbacError, Result};
use redis::{Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use std::time::Duration;
use tracing::{debug, info};

/// Ask the sentinel at `sentinel_addr` where the master `master` currently lives
///
/// The sentinel itself is queried without the data-node credentials.
pub(crate) async fn discover_master(
    sentinel_addr: &ConnectionAddr,
    master: &str,
    timeout: Duration,
) -> Result<ConnectionAddr> {
    debug!(master, "Querying sentinel for master address");

    let client = Client::open(ConnectionInfo {
        addr: sentinel_addr.clone(),
        redis: RedisConnectionInfo::default(),
    })
    .map_err(RbacError::Redis)?;

    let reply: Option<(String, u16)> = tokio::time::timeout(timeout, async {
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("SENTINEL")
            .arg("get-master-addr-by-name")
            .arg(master)
            .query_async(&mut conn)
            .await
    })
    .await
    .map_err(|_| RbacError::unavailable("Timed out querying Redis sentinel"))?
    .map_err(RbacError::Redis)?;

    let (host, port) = reply.ok_or_else(|| {
        RbacError::unavailable(format!("Sentinel does not know master '{}'", master))
    })?;

    info!(master, host = %host, port, "Discovered Redis master");
    Ok(master_addr(host, port))
}

fn master_addr(host: String, port: u16) -> ConnectionAddr {
    ConnectionAddr::Tcp(host, port)
}
