use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    let fetch = match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        (_, Char('?'), _) => {
            guard.update_tab(MenuItem::Help);
            None
        }
        (MenuItem::Help, KeyCode::Esc, _) => {
            guard.exit_help();
            None
        }

        // Date filter — each change re-queries the service
        (MenuItem::Fixtures, Char('l') | KeyCode::Right, _) => guard.next_day(),
        (MenuItem::Fixtures, Char('h') | KeyCode::Left, _) => guard.prev_day(),
        (MenuItem::Fixtures, Char('x'), _) => Some(guard.reset_filters()),

        // League/team filters are local only
        (MenuItem::Fixtures, Char('g'), _) => {
            guard.cycle_league(true);
            None
        }
        (MenuItem::Fixtures, Char('G'), _) => {
            guard.cycle_league(false);
            None
        }
        (MenuItem::Fixtures, Char('t'), _) => {
            guard.cycle_team(true);
            None
        }
        (MenuItem::Fixtures, Char('T'), _) => {
            guard.cycle_team(false);
            None
        }

        // Row selection
        (MenuItem::Fixtures, Char('j') | KeyCode::Down, _) => {
            guard.select_next();
            None
        }
        (MenuItem::Fixtures, Char('k') | KeyCode::Up, _) => {
            guard.select_prev();
            None
        }

        // Global
        (_, Char('f'), _) => {
            guard.toggle_full_screen();
            None
        }
        (_, Char('"'), _) => {
            guard.toggle_show_logs();
            None
        }

        _ => None,
    };

    drop(guard);
    if let Some(date) = fetch {
        let _ = network_requests
            .send(NetworkRequest::LoadFixtures { date })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::AppSettings;
    use chrono::Days;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn requested(rx: &mut mpsc::Receiver<NetworkRequest>) -> Vec<chrono::NaiveDate> {
        let mut dates = Vec::new();
        while let Ok(NetworkRequest::LoadFixtures { date }) = rx.try_recv() {
            dates.push(date);
        }
        dates
    }

    #[tokio::test]
    async fn reset_sends_exactly_one_fetch_for_today() {
        let app = Arc::new(Mutex::new(App::new(AppSettings::default())));
        let (tx, mut rx) = mpsc::channel(8);
        let today = app.lock().await.state.fixtures.today;

        handle_key_bindings(press(Char('l')), &app, &tx).await;
        handle_key_bindings(press(Char('g')), &app, &tx).await;
        assert_eq!(requested(&mut rx), vec![today + Days::new(1)]);

        handle_key_bindings(press(Char('x')), &app, &tx).await;
        let dates = requested(&mut rx);
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0], app.lock().await.state.fixtures.filters.date);
    }

    #[tokio::test]
    async fn league_and_team_keys_never_fetch() {
        let app = Arc::new(Mutex::new(App::new(AppSettings::default())));
        let (tx, mut rx) = mpsc::channel(8);

        for c in ['g', 'G', 't', 'T', 'j', 'k'] {
            handle_key_bindings(press(Char(c)), &app, &tx).await;
        }

        assert!(requested(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn previous_day_from_today_sends_nothing() {
        let app = Arc::new(Mutex::new(App::new(AppSettings::default())));
        let (tx, mut rx) = mpsc::channel(8);

        handle_key_bindings(press(KeyCode::Left), &app, &tx).await;

        assert!(requested(&mut rx).is_empty());
    }
}
