// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::connectivity::ConnectivityState;
use crate::test_helpers::{operation_from, sample_draft, MockGateway};

fn online() -> ConnectivityMonitor {
    ConnectivityMonitor::new(ConnectivityState::Online)
}

#[test]
fn backoff_delay_stays_within_jitter_bounds() {
    let policy = RetryPolicy {
        max_attempts: 3,
        base_delay_ms: 1000,
    };
    for retry in 0..3u32 {
        let exp = 1000u64 << retry;
        for _ in 0..50 {
            let delay = policy.backoff_delay(retry);
            assert!(delay >= Duration::from_millis(exp / 2), "retry {retry}: {delay:?}");
            assert!(delay < Duration::from_millis(exp), "retry {retry}: {delay:?}");
        }
    }
}

#[tokio::test(start_paused = true)]
async fn transient_failures_are_retried_until_success() {
    let failures = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&failures);
    let mock = MockGateway::with_create(move |draft, _| {
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(GatewayError::Network("connection reset".to_string()))
        } else {
            Ok(operation_from(draft, "srv-9"))
        }
    });

    let gateway = RetryingGateway::new(mock, RetryPolicy::default(), online());
    let draft = sample_draft("Les Ormes");
    let created = gateway.create(&draft, None).await.unwrap();
    assert_eq!(created.id, "srv-9");
    assert_eq!(failures.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn gives_up_after_max_attempts() {
    let mock = MockGateway::with_create(|_, _| {
        Err(GatewayError::Network("unreachable".to_string()))
    });
    let gateway = RetryingGateway::new(mock, RetryPolicy::default(), online());

    let draft = sample_draft("Les Ormes");
    let err = gateway.create(&draft, None).await.unwrap_err();
    match err {
        GatewayError::RetryExhausted { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("expected RetryExhausted, got {other:?}"),
    }
    assert_eq!(gateway.inner.create_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn validation_rejection_is_never_retried() {
    let mock = MockGateway::with_create(|_, _| {
        Err(GatewayError::Server {
            status: 400,
            message: immo_core::messages::COMPANY_NOT_FOUND.to_string(),
        })
    });
    let gateway = RetryingGateway::new(mock, RetryPolicy::default(), online());

    let draft = sample_draft("Les Ormes");
    let err = gateway.create(&draft, None).await.unwrap_err();
    assert!(matches!(err, GatewayError::Server { status: 400, .. }));
    assert_eq!(gateway.inner.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn aborts_when_connectivity_drops() {
    let mock = MockGateway::with_create(|_, _| {
        Err(GatewayError::Network("unreachable".to_string()))
    });
    let monitor = ConnectivityMonitor::new(ConnectivityState::Online);
    monitor.set_state(ConnectivityState::Offline);
    let gateway = RetryingGateway::new(mock, RetryPolicy::default(), monitor);

    let draft = sample_draft("Les Ormes");
    let err = gateway.create(&draft, None).await.unwrap_err();
    match err {
        GatewayError::WentOffline { attempt } => assert_eq!(attempt, 1),
        other => panic!("expected WentOffline, got {other:?}"),
    }
    assert_eq!(gateway.inner.create_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn five_hundreds_are_retried() {
    let mock = MockGateway::with_list(|| {
        Err(GatewayError::Server {
            status: 503,
            message: "maintenance".to_string(),
        })
    });
    let gateway = RetryingGateway::new(mock, RetryPolicy::default(), online());

    let err = gateway.list().await.unwrap_err();
    assert!(matches!(err, GatewayError::RetryExhausted { .. }));
    assert_eq!(gateway.inner.list_calls.load(Ordering::SeqCst), 3);
}
