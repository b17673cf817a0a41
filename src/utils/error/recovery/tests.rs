//! Tests for retry handling

use super::{RetryConfig, RetryPolicy};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

#[test]
fn test_retry_config_default() {
    let config = RetryConfig::default();
    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.base_delay, Duration::from_millis(100));
    assert!(config.jitter);
}

#[test]
fn test_retry_config_fixed() {
    let config = RetryConfig::fixed(2, Duration::from_millis(5));
    assert_eq!(config.max_attempts, 3);
    assert_eq!(config.base_delay, config.max_delay);
    assert!(!config.jitter);

    assert_eq!(RetryConfig::none().max_attempts, 1);
}

#[tokio::test]
async fn test_retry_until_success() {
    let policy = RetryPolicy::new(RetryConfig::fixed(3, Duration::ZERO));
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<u32, String> = policy
        .call(|| {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if n < 3 { Err(format!("attempt {}", n)) } else { Ok(n) }
            }
        })
        .await;

    assert_eq!(result, Ok(3));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_retry_gives_up() {
    let policy = RetryPolicy::new(RetryConfig::fixed(1, Duration::ZERO));
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<(), String> = policy
        .call(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err("down".to_string())
            }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_non_retryable_error_returns_immediately() {
    let policy = RetryPolicy::new(RetryConfig::fixed(5, Duration::ZERO));
    let calls = Arc::new(AtomicU32::new(0));

    let counter = calls.clone();
    let result: Result<(), String> = policy
        .call_if(
            || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err("fatal".to_string())
                }
            },
            |e| e != "fatal",
        )
        .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_single_attempt_policy() {
    let policy = RetryPolicy::new(RetryConfig::none());

    let ok: Result<u8, String> = tokio_test::block_on(policy.call(|| async { Ok(7) }));
    tokio_test::assert_ok!(ok);

    let err: Result<u8, String> =
        tokio_test::block_on(policy.call(|| async { Err("down".to_string()) }));
    tokio_test::assert_err!(err);
}
