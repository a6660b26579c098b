use diff_stats::{Outcome, ProgressCounter};
use rayon::prelude::*;
use std::sync::Arc;
use std::thread;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn outcome_for(i: usize) -> Outcome {
    match i % 7 {
        0 | 3 => Outcome::Diff,
        5 => Outcome::Failed,
        _ => Outcome::Same,
    }
}

#[test]
fn test_parallel_records_are_not_lost() {
    init_logger();
    let n = 100_000;
    let counter = ProgressCounter::new(n as u64);

    (0..n).into_par_iter().for_each(|i| counter.record(outcome_for(i)));

    let expected_diff = (0..n).filter(|i| outcome_for(*i) == Outcome::Diff).count() as u64;
    let expected_failed = (0..n).filter(|i| outcome_for(*i) == Outcome::Failed).count() as u64;

    assert_eq!(counter.processed(), n as u64);
    assert_eq!(counter.diff_count(), expected_diff);
    assert_eq!(counter.failed_count(), expected_failed);
    assert_eq!(
        counter.same_count(),
        n as u64 - expected_diff - expected_failed
    );
    assert_eq!(counter.progress_display(), "100.00%");
}

#[test]
fn test_scoped_workers_share_a_reference() {
    init_logger();
    let counter = ProgressCounter::new(8 * 1_000);

    thread::scope(|s| {
        for worker in 0..8 {
            let counter = &counter;
            s.spawn(move || {
                for _ in 0..1_000 {
                    match worker % 3 {
                        0 => counter.record_same(),
                        1 => counter.record_diff(),
                        _ => counter.record_failed(),
                    }
                }
            });
        }
    });

    assert_eq!(counter.processed(), 8_000);
    assert_eq!(counter.same_count(), 3_000);
    assert_eq!(counter.diff_count(), 3_000);
    assert_eq!(counter.failed_count(), 2_000);
}

#[test]
fn test_reporter_resets_while_workers_record() {
    init_logger();
    let counter = Arc::new(ProgressCounter::new(40_000));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..10_000 {
                    counter.record_same();
                }
            })
        })
        .collect();

    let reporters: Vec<_> = (0..2)
        .map(|_| {
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..200 {
                    let _ = counter.snapshot();
                    counter.reset_snapshot();
                }
            })
        })
        .collect();

    for handle in workers.into_iter().chain(reporters) {
        handle.join().unwrap();
    }

    assert_eq!(counter.processed(), 40_000);
    let snapshot = counter.snapshot();
    assert_eq!(snapshot.progress, Some(100.0));
    assert!(snapshot.eta_secs.map_or(true, |eta| eta == 0.0));
}
