//! Redis set and key operations
//!
//! This module provides the set primitives backing the permission cache.

use super::pool::RedisPool;
use crate::utils::error::Result;
use redis::AsyncCommands;
use std::collections::BTreeSet;
use tracing::debug;

/// Keys fetched per SCAN round trip
const SCAN_BATCH: usize = 500;

impl RedisPool {
    /// Check if key exists
    pub async fn exists(&self, key: &str) -> Result<bool> {
        self.execute(|mut conn| async move { conn.exists(key).await })
            .await
    }

    /// Check set membership
    pub async fn set_is_member(&self, key: &str, member: &str) -> Result<bool> {
        self.execute(|mut conn| async move { conn.sismember(key, member).await })
            .await
    }

    /// Add members to set
    pub async fn set_add(&self, key: &str, members: &[String]) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }
        let _: usize = self
            .execute(|mut conn| async move { conn.sadd(key, members).await })
            .await?;
        Ok(())
    }

    /// Remove members from set
    pub async fn set_remove(&self, key: &str, members: &[String]) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }
        let _: usize = self
            .execute(|mut conn| async move { conn.srem(key, members).await })
            .await?;
        Ok(())
    }

    /// Get set members
    pub async fn set_members(&self, key: &str) -> Result<BTreeSet<String>> {
        self.execute(|mut conn| async move { conn.smembers(key).await })
            .await
    }

    /// Delete key, returning whether it existed
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let removed: usize = self
            .execute(|mut conn| async move { conn.del(key).await })
            .await?;
        Ok(removed > 0)
    }

    /// Unlink every key matching `pattern`, returning how many were removed
    ///
    /// Walks the keyspace with SCAN, so other clients are not blocked. Keys
    /// written after the walk passes them survive.
    pub async fn delete_matching(&self, pattern: &str) -> Result<u64> {
        let mut cursor: u64 = 0;
        let mut removed: u64 = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = self
                .execute(|mut conn| async move {
                    redis::cmd("SCAN")
                        .arg(cursor)
                        .arg("MATCH")
                        .arg(pattern)
                        .arg("COUNT")
                        .arg(SCAN_BATCH)
                        .query_async(&mut conn)
                        .await
                })
                .await?;

            if !keys.is_empty() {
                let keys = &keys;
                let count: u64 = self
                    .execute(|mut conn| async move { conn.unlink(keys).await })
                    .await?;
                removed += count;
            }

            cursor = next;
            if cursor == 0 {
                break;
            }
        }

        debug!(pattern, removed, "Deleted keys matching pattern");
        Ok(removed)
    }
}
