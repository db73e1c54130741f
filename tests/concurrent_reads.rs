// tests/concurrent_reads.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use outcome::{Failure, Outcome, Success};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_outcome_is_send_and_sync() {
    assert_send_sync::<Outcome<i32, String>>();
    assert_send_sync::<Outcome<Vec<u8>, std::io::ErrorKind>>();
}

#[test]
fn test_thread_safe_read_access() {
    let ok: Arc<Outcome<i32, String>> = Arc::new(Success(42));
    let err: Arc<Outcome<i32, String>> = Arc::new(Failure("fail".to_string()));
    let completed = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let ok = Arc::clone(&ok);
            let err = Arc::clone(&err);
            let completed = Arc::clone(&completed);
            thread::spawn(move || {
                assert!(ok.is_ok());
                assert_eq!((*ok).as_ref().map(|v| *v).unwrap().ok(), Some(42));
                assert!(err.is_err());
                assert_eq!((*err).as_ref().map(|v| *v).unwrap_or(-1), -1);
                completed.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(completed.load(Ordering::SeqCst), 50);
    assert_eq!(*ok, Success(42));
    assert_eq!(*err, Failure("fail".to_string()));
}

#[test]
fn test_scoped_threads_borrow_without_arc() {
    let ok: Outcome<&str, &str> = Success("shared");
    let err: Outcome<&str, &str> = Failure("fail");

    let seen: Vec<(bool, &str)> = thread::scope(|s| {
        let handles: Vec<_> = (0..50)
            .map(|_| s.spawn(|| (ok.is_ok(), err.unwrap_or("default"))))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(seen.len(), 50);
    assert!(seen.iter().all(|&(is_ok, v)| is_ok && v == "default"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_read_shared_instances() {
    let ok: Arc<Outcome<i32, String>> = Arc::new(Success(7));
    let err: Arc<Outcome<i32, String>> = Arc::new(Failure("fail".to_string()));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let ok = Arc::clone(&ok);
        let err = Arc::clone(&err);
        handles.push(tokio::spawn(async move {
            let value = (*ok).as_ref().map(|v| *v).unwrap().ok();
            let fallback = (*err).as_ref().map(|v| *v).unwrap_or(0);
            (ok.is_ok(), value, err.is_err(), fallback)
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), (true, Some(7), true, 0));
    }
}
