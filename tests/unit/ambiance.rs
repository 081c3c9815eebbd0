use super::*;

use std::sync::{Mutex, MutexGuard};

// The generation counter is process-global, so tests that init an ambiance
// must not run concurrently with each other.
static TEST_LOCK: Mutex<()> = Mutex::new(());

fn serialize() -> MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn init(sink: MemorySink, now: Instant) -> AmbianceState<MemorySink> {
    AmbianceState::init(
        sink,
        AmbiancePalette::default(),
        Duration::from_millis(5000),
        Duration::from_millis(3000),
        now,
    )
}

#[test]
fn scroll_fraction_writes_interpolated_channels() {
    let _guard = serialize();
    let now = Instant::now();
    let mut state = init(MemorySink::default(), now);

    state.set_scroll_fraction(0.0);
    let day: Vec<String> = AMBIANCE_KEYS
        .iter()
        .map(|k| state_sink_get(&state, k))
        .collect();
    assert_eq!(day, ["244", "240", "232"]);

    state.set_scroll_fraction(1.0);
    let night: Vec<String> = AMBIANCE_KEYS
        .iter()
        .map(|k| state_sink_get(&state, k))
        .collect();
    assert_eq!(night, ["24", "16", "38"]);

    // Halfway sits strictly between the endpoints.
    state.set_scroll_fraction(0.5);
    let mid: i64 = state_sink_get(&state, AMBIANCE_KEYS[0]).parse().unwrap();
    assert!(mid > 24 && mid < 244);
}

#[test]
fn fraction_is_clamped_and_nan_safe() {
    let _guard = serialize();
    let now = Instant::now();
    let mut state = init(MemorySink::default(), now);

    state.set_scroll_fraction(7.0);
    assert_eq!(state_sink_get(&state, AMBIANCE_KEYS[0]), "24");

    state.set_scroll_fraction(f64::NAN);
    assert_eq!(state_sink_get(&state, AMBIANCE_KEYS[0]), "244");
}

#[test]
fn teardown_restores_pre_init_values() {
    let _guard = serialize();
    let now = Instant::now();
    let mut sink = MemorySink::default();
    sink.set(AMBIANCE_KEYS[0], "123".to_string());

    let mut state = init(sink, now);
    state.set_scroll_fraction(0.9);
    let sink = state.into_sink();

    assert_eq!(sink.get(AMBIANCE_KEYS[0]), Some("123".to_string()));
    assert_eq!(sink.get(AMBIANCE_KEYS[1]), None);
    assert_eq!(sink.get(AMBIANCE_KEYS[2]), None);
}

#[test]
fn reinit_supersedes_previous_idle_timers() {
    let _guard = serialize();
    let now = Instant::now();
    let mut first = init(MemorySink::default(), now);
    let mut second = init(MemorySink::default(), now);

    assert!(!first.is_current());
    assert!(second.is_current());

    let later = now + Duration::from_millis(9000);
    let stale = first.poll_idle(later);
    assert!(!stale.idle);
    assert!(!stale.spawn_due);

    let live = second.poll_idle(later);
    assert!(live.idle);
    assert!(live.spawn_due);
}

#[test]
fn superseded_instance_stops_writing() {
    let _guard = serialize();
    let now = Instant::now();
    let mut first = init(MemorySink::default(), now);
    let _second = init(MemorySink::default(), now);

    first.set_scroll_fraction(0.5);
    assert_eq!(first.sink.get(AMBIANCE_KEYS[0]), None);
}

fn state_sink_get(state: &AmbianceState<MemorySink>, key: &str) -> String {
    state.sink.get(key).unwrap_or_default()
}
