use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::ui::format::today_ist;
use chrono::NaiveDate;
use football_api::Fixture;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Fixtures,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let today = today_ist();
        let mut state = AppState::new(today);
        if let Some(date) = settings.initial_date {
            state.fixtures.set_date(date, today);
        }

        if let Some(level) = settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        Self { settings, state }
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_fixtures_loaded(&mut self, fixtures: Vec<Fixture>) {
        log::debug!("loaded {} fixtures for {}", fixtures.len(), self.state.fixtures.filters.date);
        self.state.fixtures.on_loaded(fixtures);
    }

    pub fn on_error(&mut self, message: String) {
        self.state.fixtures.on_error(message);
    }

    // -----------------------------------------------------------------------
    // Filters — each returns the date to fetch when a fetch is needed
    // -----------------------------------------------------------------------

    pub fn current_fetch(&mut self) -> NaiveDate {
        self.state.fixtures.begin_fetch()
    }

    pub fn next_day(&mut self) -> Option<NaiveDate> {
        self.state.fixtures.next_day(today_ist())
    }

    pub fn prev_day(&mut self) -> Option<NaiveDate> {
        self.state.fixtures.prev_day(today_ist())
    }

    pub fn reset_filters(&mut self) -> NaiveDate {
        self.state.fixtures.reset(today_ist())
    }

    pub fn cycle_league(&mut self, forward: bool) {
        self.state.fixtures.cycle_league(forward);
    }

    pub fn cycle_team(&mut self, forward: bool) {
        self.state.fixtures.cycle_team(forward);
    }

    pub fn select_next(&mut self) {
        self.state.fixtures.select_next();
    }

    pub fn select_prev(&mut self) {
        self.state.fixtures.select_prev();
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}
