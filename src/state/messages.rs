use crate::state::network::LoadingState;
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use football_api::Fixture;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadFixtures { date: NaiveDate },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    FixturesLoaded { fixtures: Vec<Fixture> },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
