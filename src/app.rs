//! Application state management for WeatherPro
//!
//! This module contains the data-refresh state machine driving the dashboard:
//! the current query (location plus unit preference), the fetch lifecycle,
//! keyboard handling, and the animated gauges that the renderer reads.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, warn};

use crate::anim::AnimatedValue;
use crate::cli::StartupConfig;
use crate::data::{FetchError, LocationProvider, WeatherBundle};
use crate::units::{mps_to_kmh, Unit};

/// Lifecycle of the current query's data retrieval
///
/// Exactly one variant is active at a time. `Loading` deliberately carries no
/// data: dispatching a new query clears whatever was displayed before, so the
/// UI can never show stale data under a fresh query.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No query has been dispatched yet
    Idle,
    /// A fetch for the current query is in flight
    Loading,
    /// The current query resolved successfully
    Ready(WeatherBundle),
    /// The current query failed
    Failed {
        /// Short human-readable reason shown in the error panel
        reason: String,
    },
}

/// The user-selected location and unit pair driving what is fetched/displayed
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Free-form location text
    pub location: String,
    /// Temperature unit preference
    pub unit: Unit,
}

/// Whether keystrokes go to commands or to the search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are command shortcuts
    Normal,
    /// Keys edit the search input
    Editing,
}

/// Token handed to the caller when a fetch should be dispatched
///
/// The generation ties an eventual result back to the query that spawned it;
/// a result whose generation no longer matches the current one is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation of the query this ticket belongs to
    pub generation: u64,
    /// Location to fetch
    pub location: String,
}

/// One animated readout per displayed numeric field
///
/// Each gauge is independent; there is no shared state between them. Targets
/// are recomputed from canonical values whenever a new bundle arrives or the
/// unit preference flips.
#[derive(Debug, Default)]
pub struct Gauges {
    pub temperature: AnimatedValue,
    pub feels_like: AnimatedValue,
    pub wind: AnimatedValue,
    pub humidity: AnimatedValue,
    pub visibility: AnimatedValue,
    pub pressure: AnimatedValue,
    /// One gauge per hourly entry, same order as the bundle
    pub hourly_temps: Vec<AnimatedValue>,
    /// One gauge per daily entry (highs), same order as the bundle
    pub daily_highs: Vec<AnimatedValue>,
    /// One gauge per daily entry (lows), same order as the bundle
    pub daily_lows: Vec<AnimatedValue>,
}

impl Gauges {
    /// Re-targets every gauge from the bundle's canonical values
    ///
    /// Temperatures are converted to the display unit here; wind is always
    /// shown in km/h. Running animations restart smoothly from their last
    /// published value.
    pub fn retarget(&mut self, bundle: &WeatherBundle, unit: Unit, now: Instant) {
        let conditions = &bundle.conditions;
        self.temperature
            .set_target(unit.from_celsius(conditions.temperature), now);
        self.feels_like
            .set_target(unit.from_celsius(conditions.feels_like), now);
        self.wind.set_target(mps_to_kmh(conditions.wind_speed), now);
        self.humidity.set_target(f64::from(conditions.humidity), now);
        self.visibility.set_target(conditions.visibility, now);
        self.pressure.set_target(f64::from(conditions.pressure), now);

        self.hourly_temps
            .resize_with(bundle.hourly.len(), AnimatedValue::new);
        for (gauge, entry) in self.hourly_temps.iter_mut().zip(&bundle.hourly) {
            gauge.set_target(unit.from_celsius(entry.temperature), now);
        }

        self.daily_highs
            .resize_with(bundle.daily.len(), AnimatedValue::new);
        self.daily_lows
            .resize_with(bundle.daily.len(), AnimatedValue::new);
        for (gauge, entry) in self.daily_highs.iter_mut().zip(&bundle.daily) {
            gauge.set_target(unit.from_celsius(entry.high), now);
        }
        for (gauge, entry) in self.daily_lows.iter_mut().zip(&bundle.daily) {
            gauge.set_target(unit.from_celsius(entry.low), now);
        }
    }

    /// Advances every gauge; returns `true` if any is still converging
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        animating |= self.temperature.tick(now);
        animating |= self.feels_like.tick(now);
        animating |= self.wind.tick(now);
        animating |= self.humidity.tick(now);
        animating |= self.visibility.tick(now);
        animating |= self.pressure.tick(now);
        for gauge in self
            .hourly_temps
            .iter_mut()
            .chain(&mut self.daily_highs)
            .chain(&mut self.daily_lows)
        {
            animating |= gauge.tick(now);
        }
        animating
    }
}

/// Main application struct managing state and data
pub struct App {
    /// The current query
    pub query: Query,
    /// Fetch lifecycle of the current query
    pub fetch: FetchState,
    /// Search input buffer
    pub input: String,
    /// Whether keys edit the search input or act as commands
    pub mode: InputMode,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Animated readouts driven by the main loop tick
    pub gauges: Gauges,
    /// Frame counter for the loading spinner
    pub spinner_frame: usize,
    /// Generation of the current query; results from older generations are
    /// discarded on apply
    generation: u64,
}

impl App {
    /// Creates a new App in the `Idle` state with the given unit preference
    pub fn new(unit: Unit) -> Self {
        Self {
            query: Query {
                location: String::new(),
                unit,
            },
            fetch: FetchState::Idle,
            input: String::new(),
            mode: InputMode::Normal,
            should_quit: false,
            gauges: Gauges::default(),
            spinner_frame: 0,
            generation: 0,
        }
    }

    /// Creates a new App from startup configuration and returns the ticket
    /// for the initial fetch
    pub fn with_startup_config(config: &StartupConfig) -> (Self, Option<FetchTicket>) {
        let mut app = Self::new(config.unit);
        let ticket = app.set_query(&config.city);
        (app, ticket)
    }

    /// Replaces the current query and transitions to `Loading`.
    ///
    /// Empty or whitespace-only text is rejected silently: no state change,
    /// no ticket. Otherwise any in-flight fetch is superseded (its eventual
    /// result will carry a stale generation and be discarded) and previously
    /// displayed data is cleared immediately.
    pub fn set_query(&mut self, text: &str) -> Option<FetchTicket> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.query.location = trimmed.to_string();
        self.generation += 1;
        self.fetch = FetchState::Loading;
        debug!(
            location = %self.query.location,
            generation = self.generation,
            "query dispatched"
        );

        Some(FetchTicket {
            generation: self.generation,
            location: self.query.location.clone(),
        })
    }

    /// Re-issues the fetch for the current query.
    ///
    /// Callable from any state with a query; in particular from `Failed`,
    /// however many failures came before.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let location = self.query.location.clone();
        self.set_query(&location)
    }

    /// Flips the unit preference.
    ///
    /// Canonical data is unit-independent, so no re-fetch happens; displayed
    /// gauges are re-targeted from converted values.
    pub fn toggle_unit(&mut self, now: Instant) {
        self.query.unit = self.query.unit.toggled();
        if let FetchState::Ready(bundle) = &self.fetch {
            self.gauges.retarget(bundle, self.query.unit, now);
        }
    }

    /// Resolves the device location via `provider`, then runs the normal
    /// search flow with the result.
    ///
    /// A provider failure is logged and leaves query and fetch state
    /// untouched.
    pub fn use_current_location(
        &mut self,
        provider: &dyn LocationProvider,
    ) -> Option<FetchTicket> {
        match provider.locate() {
            Ok(location) => self.set_query(&location),
            Err(err) => {
                warn!(error = %err, "location lookup failed");
                None
            }
        }
    }

    /// Applies a fetch outcome if it belongs to the current query.
    ///
    /// Results carrying a superseded generation are discarded without any
    /// state transition: only the result matching the query active at
    /// resolution time may ever be applied.
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<WeatherBundle, FetchError>,
        now: Instant,
    ) {
        if generation != self.generation {
            warn!(
                stale = generation,
                current = self.generation,
                "discarding result for superseded query"
            );
            return;
        }

        match result {
            Ok(bundle) => {
                self.gauges.retarget(&bundle, self.query.unit, now);
                debug!(location = %bundle.conditions.location, "fetch resolved");
                self.fetch = FetchState::Ready(bundle);
            }
            Err(err) => {
                debug!(error = %err, "fetch failed");
                self.fetch = FetchState::Failed {
                    reason: err.reason(),
                };
            }
        }
    }

    /// Advances animations and the loading spinner by one tick.
    ///
    /// Returns `true` if any readout is still converging.
    pub fn tick(&mut self, now: Instant) -> bool {
        if matches!(self.fetch, FetchState::Loading) {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        self.gauges.tick(now)
    }

    /// Handles keyboard input and returns a ticket when a fetch should start
    ///
    /// # Key Bindings
    /// Normal mode:
    /// - `q` or `Esc`: quit
    /// - `/` or `s`: focus the search input
    /// - `u`: toggle °C/°F
    /// - `r`: retry / refresh the current query
    ///
    /// Editing mode:
    /// - printable characters / `Backspace`: edit the input
    /// - `Enter`: submit the search
    /// - `Esc`: cancel and return to normal mode
    ///
    /// The current-location shortcut (`l`) is handled by the caller because
    /// it needs the location provider.
    pub fn handle_key(&mut self, key_event: KeyEvent, now: Instant) -> Option<FetchTicket> {
        match self.mode {
            InputMode::Normal => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Char('/') | KeyCode::Char('s') => {
                    self.mode = InputMode::Editing;
                    None
                }
                KeyCode::Char('u') => {
                    self.toggle_unit(now);
                    None
                }
                KeyCode::Char('r') => self.retry(),
                _ => None,
            },
            InputMode::Editing => match key_event.code {
                KeyCode::Enter => {
                    let text = std::mem::take(&mut self.input);
                    self.mode = InputMode::Normal;
                    self.set_query(&text)
                }
                KeyCode::Esc => {
                    self.input.clear();
                    self.mode = InputMode::Normal;
                    None
                }
                KeyCode::Backspace => {
                    self.input.pop();
                    None
                }
                KeyCode::Char(c) => {
                    self.input.push(c);
                    None
                }
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::mock_bundle;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_initial_state_is_idle() {
        let app = App::new(Unit::Celsius);
        assert_eq!(app.fetch, FetchState::Idle);
        assert_eq!(app.query.location, "");
        assert_eq!(app.query.unit, Unit::Celsius);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_set_query_transitions_to_loading() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("Paris").expect("ticket expected");

        assert_eq!(app.fetch, FetchState::Loading);
        assert_eq!(app.query.location, "Paris");
        assert_eq!(ticket.location, "Paris");
        assert_eq!(ticket.generation, 1);
    }

    #[test]
    fn test_set_query_trims_whitespace() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("  Paris  ").expect("ticket expected");
        assert_eq!(ticket.location, "Paris");
        assert_eq!(app.query.location, "Paris");
    }

    #[test]
    fn test_empty_query_is_rejected_silently() {
        let mut app = App::new(Unit::Celsius);
        assert!(app.set_query("").is_none());
        assert!(app.set_query("   ").is_none());
        assert!(app.set_query("\t\n").is_none());

        assert_eq!(app.fetch, FetchState::Idle);
        assert_eq!(app.query.location, "");
    }

    #[test]
    fn test_new_query_clears_displayed_data() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("London").unwrap();
        app.apply_fetch(ticket.generation, Ok(mock_bundle("London")), now());
        assert!(matches!(app.fetch, FetchState::Ready(_)));

        app.set_query("Paris");
        assert_eq!(app.fetch, FetchState::Loading);
    }

    #[test]
    fn test_apply_fetch_success_transitions_to_ready() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("Paris").unwrap();

        app.apply_fetch(ticket.generation, Ok(mock_bundle("Paris")), now());

        match &app.fetch {
            FetchState::Ready(bundle) => {
                assert_eq!(bundle.conditions.location, "Paris");
                assert!((bundle.conditions.temperature - 22.0).abs() < f64::EPSILON);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_fetch_failure_transitions_to_failed() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("Paris").unwrap();

        app.apply_fetch(
            ticket.generation,
            Err(FetchError::Failed("network".to_string())),
            now(),
        );

        assert_eq!(
            app.fetch,
            FetchState::Failed {
                reason: "network".to_string()
            }
        );
    }

    #[test]
    fn test_superseded_result_is_discarded() {
        let mut app = App::new(Unit::Celsius);
        let ticket_a = app.set_query("Amsterdam").unwrap();
        let ticket_b = app.set_query("Berlin").unwrap();

        // B resolves first, then A's late result arrives.
        app.apply_fetch(ticket_b.generation, Ok(mock_bundle("Berlin")), now());
        app.apply_fetch(ticket_a.generation, Ok(mock_bundle("Amsterdam")), now());

        match &app.fetch {
            FetchState::Ready(bundle) => {
                assert_eq!(bundle.conditions.location, "Berlin");
            }
            other => panic!("expected Ready with Berlin, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_failure_does_not_clobber_current_state() {
        let mut app = App::new(Unit::Celsius);
        let ticket_a = app.set_query("Amsterdam").unwrap();
        let ticket_b = app.set_query("Berlin").unwrap();

        app.apply_fetch(ticket_b.generation, Ok(mock_bundle("Berlin")), now());
        app.apply_fetch(
            ticket_a.generation,
            Err(FetchError::Failed("timeout".to_string())),
            now(),
        );

        assert!(matches!(app.fetch, FetchState::Ready(_)));
    }

    #[test]
    fn test_retry_from_failed_returns_to_loading() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("Paris").unwrap();
        app.apply_fetch(
            ticket.generation,
            Err(FetchError::Failed("network".to_string())),
            now(),
        );
        assert!(matches!(app.fetch, FetchState::Failed { .. }));

        let retry_ticket = app.retry().expect("retry should yield a ticket");
        assert_eq!(app.fetch, FetchState::Loading);
        assert_eq!(retry_ticket.location, "Paris");
        assert!(retry_ticket.generation > ticket.generation);
    }

    #[test]
    fn test_retry_survives_repeated_failures() {
        let mut app = App::new(Unit::Celsius);
        let mut ticket = app.set_query("Paris").unwrap();

        for _ in 0..3 {
            app.apply_fetch(
                ticket.generation,
                Err(FetchError::Failed("network".to_string())),
                now(),
            );
            ticket = app.retry().expect("retry must stay available");
        }

        // One more resolution can still succeed; there is no lockout.
        app.apply_fetch(ticket.generation, Ok(mock_bundle("Paris")), now());
        assert!(matches!(app.fetch, FetchState::Ready(_)));
    }

    #[test]
    fn test_retry_without_query_is_noop() {
        let mut app = App::new(Unit::Celsius);
        assert!(app.retry().is_none());
        assert_eq!(app.fetch, FetchState::Idle);
    }

    #[test]
    fn test_toggle_unit_flips_preference_without_refetch() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("London").unwrap();
        app.apply_fetch(ticket.generation, Ok(mock_bundle("London")), now());

        app.toggle_unit(now());
        assert_eq!(app.query.unit, Unit::Fahrenheit);
        // Still Ready; no transition back through Loading.
        assert!(matches!(app.fetch, FetchState::Ready(_)));

        app.toggle_unit(now());
        assert_eq!(app.query.unit, Unit::Celsius);
    }

    #[test]
    fn test_toggle_unit_retargets_temperature_gauge() {
        let mut app = App::new(Unit::Celsius);
        let t0 = now();
        let ticket = app.set_query("London").unwrap();
        app.apply_fetch(ticket.generation, Ok(mock_bundle("London")), t0);
        assert!((app.gauges.temperature.target() - 22.0).abs() < f64::EPSILON);

        app.toggle_unit(t0);
        // Canonical 22°C becomes 71.6°F; display rounds to 72.
        assert!((app.gauges.temperature.target() - 71.6).abs() < 0.001);

        app.gauges.tick(t0 + Duration::from_millis(1000));
        assert_eq!(app.gauges.temperature.displayed(), 72);
    }

    #[test]
    fn test_toggle_unit_while_loading_only_flips_unit() {
        let mut app = App::new(Unit::Celsius);
        app.set_query("London");

        app.toggle_unit(now());
        assert_eq!(app.query.unit, Unit::Fahrenheit);
        assert_eq!(app.fetch, FetchState::Loading);
    }

    #[test]
    fn test_gauges_converge_to_snapshot_values() {
        let mut app = App::new(Unit::Celsius);
        let t0 = now();
        let ticket = app.set_query("London").unwrap();
        app.apply_fetch(ticket.generation, Ok(mock_bundle("London")), t0);

        app.tick(t0 + Duration::from_millis(1000));
        assert_eq!(app.gauges.temperature.displayed(), 22);
        assert_eq!(app.gauges.feels_like.displayed(), 25);
        assert_eq!(app.gauges.humidity.displayed(), 65);
        // 3.5 m/s shown as 13 km/h
        assert_eq!(app.gauges.wind.displayed(), 13);
        assert_eq!(app.gauges.pressure.displayed(), 1013);
        assert_eq!(app.gauges.visibility.displayed(), 10);
    }

    #[test]
    fn test_gauges_cover_forecast_entries() {
        let mut app = App::new(Unit::Celsius);
        let t0 = now();
        let ticket = app.set_query("London").unwrap();
        app.apply_fetch(ticket.generation, Ok(mock_bundle("London")), t0);

        assert_eq!(app.gauges.hourly_temps.len(), 8);
        assert_eq!(app.gauges.daily_highs.len(), 5);
        assert_eq!(app.gauges.daily_lows.len(), 5);

        app.tick(t0 + Duration::from_millis(1000));
        assert_eq!(app.gauges.hourly_temps[0].displayed(), 22);
        assert_eq!(app.gauges.daily_highs[0].displayed(), 24);
        assert_eq!(app.gauges.daily_lows[0].displayed(), 18);
    }

    #[test]
    fn test_use_current_location_runs_search_flow() {
        use crate::data::StubLocationProvider;

        let mut app = App::new(Unit::Celsius);
        let ticket = app
            .use_current_location(&StubLocationProvider)
            .expect("stub provider should yield a ticket");

        assert_eq!(ticket.location, "Current Location");
        assert_eq!(app.fetch, FetchState::Loading);
    }

    #[test]
    fn test_failed_location_lookup_leaves_state_untouched() {
        use crate::data::{LocationError, LocationProvider};

        struct FailingProvider;
        impl LocationProvider for FailingProvider {
            fn locate(&self) -> Result<String, LocationError> {
                Err(LocationError::Unavailable("no fix".to_string()))
            }
        }

        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("London").unwrap();
        app.apply_fetch(ticket.generation, Ok(mock_bundle("London")), now());

        assert!(app.use_current_location(&FailingProvider).is_none());
        assert_eq!(app.query.location, "London");
        assert!(matches!(app.fetch, FetchState::Ready(_)));
    }

    #[test]
    fn test_q_quits_in_normal_mode() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('q')), now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_quits_in_normal_mode() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Esc), now());
        assert!(app.should_quit);
    }

    #[test]
    fn test_slash_enters_editing_mode() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('/')), now());
        assert_eq!(app.mode, InputMode::Editing);
    }

    #[test]
    fn test_typing_builds_input_and_enter_submits() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('/')), now());

        for c in "Paris".chars() {
            app.handle_key(key_event(KeyCode::Char(c)), now());
        }
        assert_eq!(app.input, "Paris");

        let ticket = app
            .handle_key(key_event(KeyCode::Enter), now())
            .expect("enter should submit the search");
        assert_eq!(ticket.location, "Paris");
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.input, "");
        assert_eq!(app.fetch, FetchState::Loading);
    }

    #[test]
    fn test_q_does_not_quit_while_editing() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('/')), now());
        app.handle_key(key_event(KeyCode::Char('q')), now());

        assert!(!app.should_quit);
        assert_eq!(app.input, "q");
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('/')), now());
        app.handle_key(key_event(KeyCode::Char('a')), now());
        app.handle_key(key_event(KeyCode::Char('b')), now());
        app.handle_key(key_event(KeyCode::Backspace), now());
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_esc_cancels_editing_without_search() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('/')), now());
        app.handle_key(key_event(KeyCode::Char('x')), now());
        let ticket = app.handle_key(key_event(KeyCode::Esc), now());

        assert!(ticket.is_none());
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.input, "");
        assert_eq!(app.fetch, FetchState::Idle);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_submitting_whitespace_input_changes_nothing() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('/')), now());
        app.handle_key(key_event(KeyCode::Char(' ')), now());
        let ticket = app.handle_key(key_event(KeyCode::Enter), now());

        assert!(ticket.is_none());
        assert_eq!(app.fetch, FetchState::Idle);
        assert_eq!(app.query.location, "");
    }

    #[test]
    fn test_u_key_toggles_unit() {
        let mut app = App::new(Unit::Celsius);
        app.handle_key(key_event(KeyCode::Char('u')), now());
        assert_eq!(app.query.unit, Unit::Fahrenheit);
        app.handle_key(key_event(KeyCode::Char('u')), now());
        assert_eq!(app.query.unit, Unit::Celsius);
    }

    #[test]
    fn test_r_key_retries_from_failed() {
        let mut app = App::new(Unit::Celsius);
        let ticket = app.set_query("Paris").unwrap();
        app.apply_fetch(
            ticket.generation,
            Err(FetchError::Failed("network".to_string())),
            now(),
        );

        let retry_ticket = app.handle_key(key_event(KeyCode::Char('r')), now());
        assert!(retry_ticket.is_some());
        assert_eq!(app.fetch, FetchState::Loading);
    }

    #[test]
    fn test_spinner_advances_only_while_loading() {
        let mut app = App::new(Unit::Celsius);
        app.tick(now());
        assert_eq!(app.spinner_frame, 0);

        app.set_query("Paris");
        app.tick(now());
        app.tick(now());
        assert_eq!(app.spinner_frame, 2);
    }

    #[test]
    fn test_with_startup_config_dispatches_initial_query() {
        let config = StartupConfig {
            city: "Tokyo".to_string(),
            unit: Unit::Fahrenheit,
            mock_delay_ms: None,
            fail_reason: None,
        };
        let (app, ticket) = App::with_startup_config(&config);

        assert_eq!(app.query.unit, Unit::Fahrenheit);
        assert_eq!(app.fetch, FetchState::Loading);
        assert_eq!(ticket.expect("initial ticket").location, "Tokyo");
    }
}
