use crate::app::MenuItem;
use chrono::{Days, NaiveDate};
use football_api::Fixture;
use std::collections::HashSet;

pub const ALL_LEAGUES: &str = "All Leagues";
pub const ALL_TEAMS: &str = "All Teams";

// ---------------------------------------------------------------------------
// Facets and filters
// ---------------------------------------------------------------------------

/// One entry in a filter's option list. `value == None` is the wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: Option<String>,
    pub label: String,
}

impl FacetOption {
    fn wildcard(label: &str) -> Self {
        Self { value: None, label: label.to_string() }
    }

    fn named(name: &str) -> Self {
        Self { value: Some(name.to_string()), label: name.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub league: Option<String>,
    pub team: Option<String>,
    pub date: NaiveDate,
}

impl Filters {
    pub fn new(date: NaiveDate) -> Self {
        Self { league: None, team: None, date }
    }

    pub fn matches(&self, fixture: &Fixture) -> bool {
        let league_ok = self.league.as_deref().is_none_or(|l| fixture.league.name == l);
        let team_ok = self.team.as_deref().is_none_or(|t| fixture.involves(t));
        league_ok && team_ok
    }
}

/// Distinct league names in first-seen order, behind the "All Leagues" option.
pub fn league_facets(fixtures: &[Fixture]) -> Vec<FacetOption> {
    distinct_facets(ALL_LEAGUES, fixtures.iter().map(|f| f.league.name.as_str()))
}

/// Distinct team names (home, then away, per fixture) in first-seen order,
/// behind the "All Teams" option.
pub fn team_facets(fixtures: &[Fixture]) -> Vec<FacetOption> {
    distinct_facets(
        ALL_TEAMS,
        fixtures
            .iter()
            .flat_map(|f| [f.teams.home.name.as_str(), f.teams.away.name.as_str()]),
    )
}

fn distinct_facets<'a>(wildcard: &str, names: impl Iterator<Item = &'a str>) -> Vec<FacetOption> {
    let mut seen = HashSet::new();
    std::iter::once(FacetOption::wildcard(wildcard))
        .chain(names.filter(|n| seen.insert(*n)).map(FacetOption::named))
        .collect()
}

pub fn apply_filters(fixtures: &[Fixture], filters: &Filters) -> Vec<Fixture> {
    fixtures.iter().filter(|f| filters.matches(f)).cloned().collect()
}

/// Step through `options` from the one whose value equals `current`.
/// A current value missing from the list restarts at the wildcard.
fn cycle(options: &[FacetOption], current: Option<&str>, forward: bool) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o.value.as_deref() == current) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None => 0,
    };
    options[next].value.clone()
}

// ---------------------------------------------------------------------------
// Fixture browser state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct FixtureState {
    /// Everything the service returned for `filters.date`.
    pub fixtures: Vec<Fixture>,
    /// `fixtures` narrowed by the league/team selection.
    pub visible: Vec<Fixture>,
    pub leagues: Vec<FacetOption>,
    pub teams: Vec<FacetOption>,
    pub filters: Filters,
    /// Earliest date the date filter may take.
    pub today: NaiveDate,
    pub loading: bool,
    pub error: Option<String>,
    /// Row highlighted in the table; indexes `visible`.
    pub selected: usize,
}

impl FixtureState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fixtures: Vec::new(),
            visible: Vec::new(),
            leagues: vec![FacetOption::wildcard(ALL_LEAGUES)],
            teams: vec![FacetOption::wildcard(ALL_TEAMS)],
            filters: Filters::new(today),
            today,
            loading: true,
            error: None,
            selected: 0,
        }
    }

    /// Mark a fetch for the current date as in flight and return that date.
    pub fn begin_fetch(&mut self) -> NaiveDate {
        self.loading = true;
        self.filters.date
    }

    pub fn on_loaded(&mut self, fixtures: Vec<Fixture>) {
        self.leagues = league_facets(&fixtures);
        self.teams = team_facets(&fixtures);
        self.fixtures = fixtures;
        self.loading = false;
        self.error = None;
        self.refilter();
    }

    pub fn on_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Change the date filter. Returns the date to fetch when it changed;
    /// days before `today` are refused. `today` is refreshed on every call so
    /// the lower bound follows the clock past midnight.
    pub fn set_date(&mut self, date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
        self.today = today;
        if date < self.today || date == self.filters.date {
            return None;
        }
        self.filters.date = date;
        Some(self.begin_fetch())
    }

    pub fn next_day(&mut self, today: NaiveDate) -> Option<NaiveDate> {
        let date = self.filters.date.checked_add_days(Days::new(1))?;
        self.set_date(date, today)
    }

    pub fn prev_day(&mut self, today: NaiveDate) -> Option<NaiveDate> {
        let date = self.filters.date.checked_sub_days(Days::new(1))?;
        self.set_date(date, today)
    }

    pub fn set_league(&mut self, league: Option<String>) {
        self.filters.league = league;
        self.refilter();
    }

    pub fn set_team(&mut self, team: Option<String>) {
        self.filters.team = team;
        self.refilter();
    }

    pub fn cycle_league(&mut self, forward: bool) {
        let next = cycle(&self.leagues, self.filters.league.as_deref(), forward);
        self.set_league(next);
    }

    pub fn cycle_team(&mut self, forward: bool) {
        let next = cycle(&self.teams, self.filters.team.as_deref(), forward);
        self.set_team(next);
    }

    /// Clear league and team, move the date back to `today` and return the
    /// date to re-fetch. Always asks for exactly one fetch.
    pub fn reset(&mut self, today: NaiveDate) -> NaiveDate {
        self.today = today;
        self.filters = Filters::new(today);
        self.refilter();
        self.begin_fetch()
    }

    pub fn select_next(&mut self) {
        let max = self.visible.len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_fixture(&self) -> Option<&Fixture> {
        self.visible.get(self.selected)
    }

    pub fn league_label(&self) -> &str {
        self.filters.league.as_deref().unwrap_or(ALL_LEAGUES)
    }

    pub fn team_label(&self) -> &str {
        self.filters.team.as_deref().unwrap_or(ALL_TEAMS)
    }

    fn refilter(&mut self) {
        self.visible = apply_filters(&self.fixtures, &self.filters);
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Top-level app state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub fixtures: FixtureState,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: MenuItem::default(),
            previous_tab: MenuItem::default(),
            show_logs: false,
            fixtures: FixtureState::new(today),
        }
    }
}
