//! Unit tests for perf module.

use ideaboard::perf::{PerfMonitor, ScopedTimer, TARGET_EVENT_MS};

#[test]
fn test_perf_monitor_records_per_handler() {
    let mut monitor = PerfMonitor::new();
    monitor.record("pointer_move", 1.0);
    monitor.record("pointer_move", 3.0);
    monitor.record("pointer_down", 0.5);

    let stats = monitor.stats("pointer_move").unwrap();
    assert_eq!(stats.calls(), 2);
    assert!((stats.mean() - 2.0).abs() < 1e-9);
    assert_eq!(stats.worst(), 3.0);
    assert!(monitor.stats("wheel").is_none());
}

#[test]
fn test_slow_handlers_sorted_by_p95() {
    let mut monitor = PerfMonitor::new();
    monitor.record("pointer_down", 0.1);
    monitor.record("wheel", TARGET_EVENT_MS + 1.0);
    monitor.record("pointer_move", TARGET_EVENT_MS * 4.0);

    let names: Vec<_> = monitor.slow_handlers().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["pointer_move", "wheel"]);
    monitor.log_summary_if_slow();
}

#[test]
fn test_time_returns_closure_result() {
    let mut monitor = PerfMonitor::new();
    let value = monitor.time("wheel", || 41 + 1);
    assert_eq!(value, 42);
    assert_eq!(monitor.stats("wheel").unwrap().calls(), 1);
}

#[test]
fn test_scoped_timer_drop_is_quiet() {
    let _scope = ScopedTimer::start("noop");
}
