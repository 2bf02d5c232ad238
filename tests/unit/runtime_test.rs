//! Tests for the tokio expiry scheduler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use seat_ledger::core::Schedule;
use seat_ledger::runtime::TokioExpiryScheduler;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_scheduler_fires_after_deadline() {
    let scheduler = TokioExpiryScheduler::current().unwrap();

    let (tx, rx) = tokio::sync::oneshot::channel();
    let started = Instant::now();
    scheduler.schedule_at(started + Duration::from_millis(30), move || {
        tx.send(Instant::now()).unwrap();
    });

    let fired_at = rx.await.expect("oneshot result");
    assert!(fired_at.duration_since(started) >= Duration::from_millis(30));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_scheduler_cancel() {
    let scheduler = TokioExpiryScheduler::new(tokio::runtime::Handle::current());
    let fired = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&fired);
    let handle = scheduler.schedule_at(Instant::now() + Duration::from_millis(30), move || {
        flag.store(true, Ordering::SeqCst);
    });
    scheduler.cancel(handle);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!fired.load(Ordering::SeqCst));
}

#[test]
fn test_current_fails_outside_runtime() {
    assert!(TokioExpiryScheduler::current().is_err());
}

#[test]
fn test_dedicated_runtime_runs_actions() {
    let scheduler = TokioExpiryScheduler::with_worker_threads(1).unwrap();
    let (tx, rx) = std::sync::mpsc::channel();
    scheduler.schedule_at(Instant::now() + Duration::from_millis(10), move || {
        tx.send(7).unwrap();
    });
    assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), 7);
}
