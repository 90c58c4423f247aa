use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::state::app_state::FixtureState;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::format::{format_day, format_kickoff};
use crate::ui::layout::{DETAIL_HEIGHT, LayoutAreas};
use football_api::Fixture;

static TABS: &[&str; 1] = &["Upcoming Football Matches"];

const HEADERS: [&str; 8] = [
    "Sr. No.", "League", "Season", "Round", "Home Team", "Away Team", "Date", "Time",
];

const HELP_TEXT: &str = "\
q=quit  ?=help  Esc=back
h/← l/→   previous / next day (never before today)
g / G     next / previous league
t / T     next / previous team
j/↓ k/↑   move selection
x         reset filters (league, team, date = today)
f         full screen
\"         toggle log pane
Times are shown in India Standard Time (UTC+05:30).";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar);
            draw_filter_bar(f, layout.filter_bar, &app.state.fixtures);
        }

        match app.state.active_tab {
            MenuItem::Fixtures => draw_fixtures(f, layout.main, &app.state.fixtures),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        log::error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2]) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .select(0)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_filter_bar(f: &mut Frame, area: Rect, state: &FixtureState) {
    let text = format!(
        "League: {}   Team: {}   Date: {}   [g/t cycle, h/l day, x reset]",
        state.league_label(),
        state.team_label(),
        format_day(state.filters.date),
    );
    f.render_widget(
        Paragraph::new(text).block(default_border(Color::DarkGray).title(" Filters ")),
        area,
    );
}

fn draw_fixtures(f: &mut Frame, area: Rect, state: &FixtureState) {
    let block = default_border(Color::White).title(" Matches ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.loading {
        f.render_widget(
            Paragraph::new("Loading...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    if let Some(err) = state.error.as_deref() {
        f.render_widget(
            Paragraph::new(err)
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    if state.visible.is_empty() {
        f.render_widget(
            Paragraph::new("No upcoming matches for this selection")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [table_area, detail_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(DETAIL_HEIGHT)]).areas(inner);

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

    let rows = state.visible.iter().enumerate().map(|(idx, fixture)| fixture_row(idx, fixture));

    let widths = [
        Constraint::Length(7),
        Constraint::Fill(2),
        Constraint::Length(6),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(table, table_area, &mut table_state);

    if let Some(fixture) = state.selected_fixture() {
        draw_detail(f, detail_area, fixture);
    }
}

fn fixture_row(idx: usize, fixture: &Fixture) -> Row<'_> {
    let (date, time) = format_kickoff(&fixture.date);
    Row::new(vec![
        Cell::from((idx + 1).to_string()),
        Cell::from(fixture.league.name.as_str()),
        Cell::from(fixture.league.season.to_string()),
        Cell::from(fixture.league.round.as_str()),
        Cell::from(fixture.teams.home.name.as_str()),
        Cell::from(fixture.teams.away.name.as_str()),
        Cell::from(date),
        Cell::from(time),
    ])
}

fn draw_detail(f: &mut Frame, area: Rect, fixture: &Fixture) {
    let status = fixture
        .status
        .get("long")
        .and_then(|s| s.as_str())
        .unwrap_or("Unknown");
    let or_dash = |v: Option<&str>| v.unwrap_or("-").to_string();

    let lines = vec![
        format!(
            "{} vs {}  ({}, {})",
            fixture.teams.home.name,
            fixture.teams.away.name,
            fixture.league.name,
            or_dash(fixture.league.country.as_deref()),
        ),
        format!(
            "Venue: {}, {}   Referee: {}   Status: {}",
            or_dash(fixture.venue.as_deref()),
            or_dash(fixture.city.as_deref()),
            or_dash(fixture.referee.as_deref()),
            status,
        ),
        format!("Home logo: {}", or_dash(fixture.teams.home.logo.as_deref())),
        format!("Away logo: {}", or_dash(fixture.teams.away.logo.as_deref())),
    ];

    f.render_widget(
        Paragraph::new(lines.join("\n"))
            .block(default_border(Color::DarkGray).title(format!(" Fixture #{} ", fixture.fixture_id))),
        area,
    );
}

fn draw_help(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(HELP_TEXT).block(default_border(Color::White).title(" Help ")),
        area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    f.render_widget(
        TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs ")),
        area,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
