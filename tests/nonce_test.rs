use std::sync::Arc;

use tokio::sync::Mutex;

use poloniex::auth::NonceCounter;

/// Concurrent authenticated calls share one counter behind a mutex;
/// every request must observe a strictly larger nonce than the one
/// before it, in lock-acquisition order.
#[tokio::test]
async fn concurrent_nonces_are_distinct_and_increasing() {
    let counter = Arc::new(Mutex::new(NonceCounter::new()));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut tasks = Vec::new();
    for _ in 0..100 {
        let counter = Arc::clone(&counter);
        let seen = Arc::clone(&seen);
        tasks.push(tokio::spawn(async move {
            let mut guard = counter.lock().await;
            let nonce = guard.next();
            // Record while still holding the counter so the log order
            // matches acquisition order.
            seen.lock().await.push(nonce);
            drop(guard);
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let seen = seen.lock().await;
    assert_eq!(seen.len(), 100);
    for pair in seen.windows(2) {
        assert!(pair[1] > pair[0], "nonce regressed: {} -> {}", pair[0], pair[1]);
    }
}
