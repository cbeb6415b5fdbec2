use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{Value, json};

use crate::engine::{DocumentEngine, Hit, ImportError, SearchRequest};
use crate::shards::{SHARD_SET, ShardError, ShardFetcher};
use crate::types::{DocRecord, MAX_RESULTS, Readiness};

use super::{App, Focus};

fn record(index: usize) -> DocRecord {
    DocRecord {
        page_title: format!("Page {index}"),
        section_title: format!("Section {index}"),
        target_ref: format!("page-{index}/#section"),
    }
}

#[derive(Clone, Default)]
struct EngineProbe {
    search_calls: Arc<AtomicUsize>,
    imported: Arc<Mutex<Vec<String>>>,
}

impl EngineProbe {
    fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    fn imported(&self) -> Vec<String> {
        self.imported.lock().expect("probe lock").clone()
    }
}

/// Engine that answers every query with a fixed number of matches.
struct FakeEngine {
    matches: usize,
    probe: EngineProbe,
}

impl DocumentEngine for FakeEngine {
    fn import(&mut self, shard: &str, _payload: Value) -> Result<(), ImportError> {
        self.probe
            .imported
            .lock()
            .expect("probe lock")
            .push(shard.to_string());
        Ok(())
    }

    fn search(&self, _query: &str, request: &SearchRequest) -> Vec<Hit> {
        self.probe.search_calls.fetch_add(1, Ordering::SeqCst);
        (0..self.matches.min(request.limit))
            .map(|index| Hit {
                id: index.to_string(),
                doc: request.enrich.then(|| record(index)),
            })
            .collect()
    }
}

/// Fetcher with an optional failing shard; everything else succeeds.
struct FakeFetcher {
    fail: Option<&'static str>,
    fetch_calls: Arc<AtomicUsize>,
}

impl FakeFetcher {
    fn reliable() -> Self {
        Self {
            fail: None,
            fetch_calls: Arc::default(),
        }
    }

    fn failing(shard: &'static str) -> Self {
        Self {
            fail: Some(shard),
            fetch_calls: Arc::default(),
        }
    }
}

impl ShardFetcher for FakeFetcher {
    fn fetch(&self, name: &'static str) -> Result<Value, ShardError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail == Some(name) {
            Err(ShardError::Fetch {
                name,
                source: io::Error::new(io::ErrorKind::NotFound, "missing shard"),
            })
        } else {
            Ok(json!({}))
        }
    }
}

fn app_with(matches: usize, fetcher: FakeFetcher, initial_query: &str) -> (App, EngineProbe) {
    let probe = EngineProbe::default();
    let engine = FakeEngine {
        matches,
        probe: probe.clone(),
    };
    let app = App::new(
        Box::new(engine),
        Arc::new(fetcher),
        initial_query.to_string(),
    );
    (app, probe)
}

/// Pump shard events until the load settles or a deadline passes.
fn pump_until_settled(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while app.readiness == Readiness::Loading && Instant::now() < deadline {
        app.pump_shard_events();
        std::thread::sleep(Duration::from_millis(5));
    }
    app.pump_shard_events();
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn first_search_triggers_the_load_and_later_ones_do_not_restart_it() {
    let fetcher = FakeFetcher::reliable();
    let fetch_calls = Arc::clone(&fetcher.fetch_calls);
    let (mut app, _probe) = app_with(3, fetcher, "graph");
    assert_eq!(app.readiness, Readiness::Unloaded);

    app.run_search();
    assert_eq!(app.readiness, Readiness::Loading);

    // Searching again while Loading must not spawn a second fetch batch.
    app.run_search();
    pump_until_settled(&mut app);
    assert_eq!(app.readiness, Readiness::Ready);
    assert_eq!(fetch_calls.load(Ordering::SeqCst), SHARD_SET.len());
}

#[test]
fn successful_load_imports_every_shard_once() {
    let fetcher = FakeFetcher::reliable();
    let fetch_calls = Arc::clone(&fetcher.fetch_calls);
    let (mut app, probe) = app_with(0, fetcher, "");

    app.run_search();
    pump_until_settled(&mut app);

    assert_eq!(app.readiness, Readiness::Ready);
    assert_eq!(fetch_calls.load(Ordering::SeqCst), SHARD_SET.len());
    let mut imported = probe.imported();
    imported.sort_unstable();
    let mut expected: Vec<String> = SHARD_SET.iter().map(ToString::to_string).collect();
    expected.sort_unstable();
    assert_eq!(imported, expected);

    // Ready is terminal: another load attempt is a no-op.
    app.ensure_loaded();
    assert_eq!(app.readiness, Readiness::Ready);
    assert_eq!(fetch_calls.load(Ordering::SeqCst), SHARD_SET.len());
}

#[test]
fn one_failed_shard_fails_the_whole_load() {
    let (mut app, _probe) = app_with(3, FakeFetcher::failing("registry"), "");

    app.run_search();
    pump_until_settled(&mut app);

    assert_eq!(app.readiness, Readiness::Failed);

    // Late sibling results are drained without effect.
    app.pump_shard_events();
    assert_eq!(app.readiness, Readiness::Failed);

    // Failed is terminal for the session.
    app.ensure_loaded();
    assert_eq!(app.readiness, Readiness::Failed);
}

#[test]
fn identical_query_text_suppresses_the_second_search() {
    let (mut app, probe) = app_with(3, FakeFetcher::reliable(), "graph");
    app.run_search();
    pump_until_settled(&mut app);
    assert_eq!(probe.search_calls(), 1);

    // A focus event with unchanged text does not hit the engine again.
    app.run_search();
    assert_eq!(probe.search_calls(), 1);

    assert!(app.input.handle_key(press(KeyCode::Char('s'))));
    app.run_search();
    assert_eq!(probe.search_calls(), 2);
}

#[test]
fn rendered_rows_are_capped_one_below_the_result_limit() {
    let (mut app, _probe) = app_with(100, FakeFetcher::reliable(), "graph");
    app.run_search();
    pump_until_settled(&mut app);

    assert!(app.panel_visible);
    assert_eq!(app.rows.len(), MAX_RESULTS - 1);
    assert_eq!(app.rows[0].index, 0);
    assert_eq!(app.rows[MAX_RESULTS - 2].index, MAX_RESULTS - 2);
}

#[test]
fn empty_result_set_hides_the_panel() {
    let (mut app, probe) = app_with(0, FakeFetcher::reliable(), "zz留");
    app.run_search();
    pump_until_settled(&mut app);

    assert_eq!(probe.search_calls(), 1);
    assert!(!app.panel_visible);
    assert!(app.rows.is_empty());
}

#[test]
fn arrow_keys_wrap_between_input_and_rows() {
    let (mut app, _probe) = app_with(3, FakeFetcher::reliable(), "graph");
    app.run_search();
    pump_until_settled(&mut app);
    assert_eq!(app.rows.len(), 3);

    // Input -> first row, then walk down and wrap back to the input.
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.focus, Focus::Row(0));
    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.focus, Focus::Row(2));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.focus, Focus::Input);

    // Input ArrowUp focuses the last row.
    app.handle_key(press(KeyCode::Up));
    assert_eq!(app.focus, Focus::Row(2));
}

#[test]
fn failed_index_disables_search_and_navigation() {
    let (mut app, probe) = app_with(3, FakeFetcher::failing("store"), "");
    app.run_search();
    pump_until_settled(&mut app);
    assert_eq!(app.readiness, Readiness::Failed);

    app.handle_key(press(KeyCode::Char('g')));
    app.handle_key(press(KeyCode::Char('r')));
    assert_eq!(probe.search_calls(), 0);
    assert!(app.rows.is_empty());

    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.focus, Focus::Input);
}

#[test]
fn slash_jumps_to_the_input_only_from_the_body() {
    let (mut app, _probe) = app_with(0, FakeFetcher::reliable(), "");
    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.focus, Focus::Body);

    app.handle_key(press(KeyCode::Char('/')));
    assert_eq!(app.focus, Focus::Input);

    // While the input is focused, '/' is just a character.
    app.handle_key(press(KeyCode::Char('/')));
    assert_eq!(app.focus, Focus::Input);
    assert_eq!(app.input.text(), "/");
}

#[test]
fn s_is_a_shortcut_from_the_body_too() {
    let (mut app, _probe) = app_with(0, FakeFetcher::reliable(), "");
    app.handle_key(press(KeyCode::Esc));
    app.handle_key(press(KeyCode::Char('s')));
    assert_eq!(app.focus, Focus::Input);
}

#[test]
fn ready_transition_reruns_the_pending_query() {
    let (mut app, probe) = app_with(2, FakeFetcher::reliable(), "graph");

    // Opening the widget triggers the load; no search has run yet.
    app.run_search();
    assert_eq!(probe.search_calls(), 0);
    assert!(app.rows.is_empty());

    pump_until_settled(&mut app);
    assert_eq!(probe.search_calls(), 1);
    assert_eq!(app.rows.len(), 2);
}

#[test]
fn enter_on_a_row_accepts_its_target() {
    let (mut app, _probe) = app_with(3, FakeFetcher::reliable(), "graph");
    app.run_search();
    pump_until_settled(&mut app);

    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.focus, Focus::Row(1));

    let outcome = app.handle_key(press(KeyCode::Enter)).expect("outcome");
    assert!(outcome.accepted);
    assert_eq!(outcome.selection, Some(record(1)));
}

#[test]
fn escape_from_the_body_cancels() {
    let (mut app, _probe) = app_with(0, FakeFetcher::reliable(), "pending");
    app.handle_key(press(KeyCode::Esc));
    let outcome = app.handle_key(press(KeyCode::Esc)).expect("outcome");
    assert!(!outcome.accepted);
    assert_eq!(outcome.query, "pending");
    assert!(outcome.selection.is_none());
}
