// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use std::collections::BTreeSet;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tablas_app::{
    BOUND_MAX, BOUND_MIN, DEFAULT_DEBOUNCE, Debouncer, Field, Session, SessionCommand,
    SessionEvent, TabId, TableView,
};

const POLL_INTERVAL: Duration = Duration::from_millis(120);
const SLIDER_STEP: i64 = 1;
const SLIDER_TRACK_WIDTH: usize = 21;
const GRID_PAGE_ROWS: usize = 10;
const CELL_WIDTH: u16 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub debounce: Duration,
    pub status_ttl: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            status_ttl: Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(Field),
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Field(Field::MinCol) => Self::Field(Field::MaxCol),
            Self::Field(Field::MaxCol) => Self::Field(Field::MinRow),
            Self::Field(Field::MinRow) => Self::Field(Field::MaxRow),
            Self::Field(Field::MaxRow) => Self::Table,
            Self::Table => Self::Field(Field::MinCol),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Field(Field::MinCol) => Self::Table,
            Self::Field(Field::MaxCol) => Self::Field(Field::MinCol),
            Self::Field(Field::MinRow) => Self::Field(Field::MaxCol),
            Self::Field(Field::MaxRow) => Self::Field(Field::MinRow),
            Self::Table => Self::Field(Field::MaxRow),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct DeleteListUiState {
    visible: bool,
    cursor: usize,
    selected: BTreeSet<TabId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct GridScroll {
    row_offset: usize,
    col_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewData {
    focus: Focus,
    sliders: [i64; 4],
    delete_list: DeleteListUiState,
    grid_scroll: GridScroll,
    help_visible: bool,
    status_token: u64,
}

impl Default for ViewData {
    fn default() -> Self {
        Self {
            focus: Focus::Field(Field::MinCol),
            sliders: [0; 4],
            delete_list: DeleteListUiState::default(),
            grid_scroll: GridScroll::default(),
            help_visible: false,
            status_token: 0,
        }
    }
}

pub fn run_app(session: &mut Session, options: &UiOptions) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    sync_sliders_from_form(session, &mut view_data);
    let mut debouncer = Debouncer::new(options.debounce);
    let (internal_tx, internal_rx) = mpsc::channel();

    let mut result = Ok(());
    loop {
        process_internal_events(session, &view_data, &internal_rx);

        if debouncer.fire_due(Instant::now()) {
            run_debounced_submit(session, &mut view_data, &internal_tx, options.status_ttl);
        }

        if let Err(error) = terminal.draw(|frame| render(frame, session, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let timeout = debouncer
            .time_until_due(Instant::now())
            .map_or(POLL_INTERVAL, |until| until.min(POLL_INTERVAL));
        let has_event = event::poll(timeout).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(
                        session,
                        &mut view_data,
                        &mut debouncer,
                        &internal_tx,
                        options.status_ttl,
                        key,
                    ) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    session: &mut Session,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                session.dispatch(SessionCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, ttl: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(ttl);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    ttl: Duration,
    message: impl Into<String>,
) {
    session.dispatch(SessionCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token, ttl);
}

/// The debounced pass: validate the settled form and add a tab when it
/// passes. Normalization may have rewritten a field, so the sliders are
/// re-synced either way.
fn run_debounced_submit(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    ttl: Duration,
) {
    let events = session.dispatch(SessionCommand::Submit);
    sync_sliders_from_form(session, view_data);
    for event in &events {
        match event {
            SessionEvent::TabAdded(_) => {
                view_data.grid_scroll = GridScroll::default();
                let label = session
                    .active_tab()
                    .map(|tab| tab.label.clone())
                    .unwrap_or_default();
                emit_status(session, view_data, internal_tx, ttl, format!("added {label}"));
            }
            SessionEvent::ValidationFailed(field, error) => {
                emit_status(session, view_data, internal_tx, ttl, error.message(*field));
            }
            _ => {}
        }
    }
}

/// Field edits drive the slider: a valid integer inside the bounds moves
/// the handle there, anything else snaps it back to zero so the handle
/// keeps giving feedback while the user is mid-edit.
fn slider_position_for(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(value) if (BOUND_MIN..=BOUND_MAX).contains(&value) => value,
        _ => 0,
    }
}

fn sync_sliders_from_form(session: &Session, view_data: &mut ViewData) {
    for field in Field::ALL {
        view_data.sliders[field.index()] = slider_position_for(session.form().raw(field));
    }
}

fn apply_field_edit(
    session: &mut Session,
    view_data: &mut ViewData,
    debouncer: &mut Debouncer,
    field: Field,
    raw: String,
) {
    session.dispatch(SessionCommand::SetField(field, raw));
    view_data.sliders[field.index()] = slider_position_for(session.form().raw(field));
    debouncer.schedule(Instant::now());
}

/// Slider movement writes its value through to the field, exactly like
/// dragging the handle in a pointer UI.
fn nudge_slider(
    session: &mut Session,
    view_data: &mut ViewData,
    debouncer: &mut Debouncer,
    field: Field,
    delta: i64,
) {
    let slot = &mut view_data.sliders[field.index()];
    *slot = (*slot + delta).clamp(BOUND_MIN, BOUND_MAX);
    let value = *slot;
    session.dispatch(SessionCommand::SetField(field, value.to_string()));
    debouncer.schedule(Instant::now());
}

fn handle_key_event(
    session: &mut Session,
    view_data: &mut ViewData,
    debouncer: &mut Debouncer,
    internal_tx: &Sender<InternalEvent>,
    status_ttl: Duration,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.delete_list.visible {
        handle_delete_list_key(session, view_data, internal_tx, status_ttl, key);
        return false;
    }

    if key.code == KeyCode::Char('?') {
        view_data.help_visible = true;
        return false;
    }

    if let Focus::Field(field) = view_data.focus {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' || ch == '.' => {
                let mut raw = session.form().raw(field).to_owned();
                raw.push(ch);
                apply_field_edit(session, view_data, debouncer, field, raw);
                return false;
            }
            KeyCode::Backspace => {
                let mut raw = session.form().raw(field).to_owned();
                raw.pop();
                apply_field_edit(session, view_data, debouncer, field, raw);
                return false;
            }
            KeyCode::Left => {
                nudge_slider(session, view_data, debouncer, field, -SLIDER_STEP);
                return false;
            }
            KeyCode::Right => {
                nudge_slider(session, view_data, debouncer, field, SLIDER_STEP);
                return false;
            }
            KeyCode::Up => {
                view_data.focus = view_data.focus.prev();
                return false;
            }
            KeyCode::Down => {
                view_data.focus = view_data.focus.next();
                return false;
            }
            _ => {}
        }
    }

    if view_data.focus == Focus::Table
        && matches!(
            key.code,
            KeyCode::Up
                | KeyCode::Down
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::PageUp
                | KeyCode::PageDown
                | KeyCode::Home
                | KeyCode::End
        )
    {
        scroll_grid(session, view_data, key.code);
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => {
            view_data.focus = view_data.focus.next();
        }
        (KeyCode::BackTab, _) => {
            view_data.focus = view_data.focus.prev();
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            session.dispatch(SessionCommand::NextTab);
            view_data.grid_scroll = GridScroll::default();
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => {
            session.dispatch(SessionCommand::PrevTab);
            view_data.grid_scroll = GridScroll::default();
        }
        (KeyCode::Char('x'), KeyModifiers::NONE) => {
            close_active_tab(session, view_data, internal_tx, status_ttl);
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            view_data.delete_list = DeleteListUiState {
                visible: true,
                ..DeleteListUiState::default()
            };
        }
        _ => {}
    }
    false
}

fn close_active_tab(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    ttl: Duration,
) {
    let Some(id) = session.active_tab_id() else {
        emit_status(session, view_data, internal_tx, ttl, "no tab to close");
        return;
    };
    if session.is_pinned(id) {
        emit_status(session, view_data, internal_tx, ttl, "start tab is pinned");
        return;
    }
    let label = session
        .active_tab()
        .map(|tab| tab.label.clone())
        .unwrap_or_default();
    session.dispatch(SessionCommand::RemoveTab(id));
    view_data.grid_scroll = GridScroll::default();
    emit_status(session, view_data, internal_tx, ttl, format!("closed {label}"));
}

fn handle_delete_list_key(
    session: &mut Session,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    ttl: Duration,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('d') => {
            view_data.delete_list.visible = false;
        }
        KeyCode::Up => {
            view_data.delete_list.cursor = view_data.delete_list.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            let count = session.delete_candidates().len();
            if count > 0 {
                view_data.delete_list.cursor = (view_data.delete_list.cursor + 1).min(count - 1);
            }
        }
        KeyCode::Char(' ') => {
            if let Some(candidate) = session
                .delete_candidates()
                .get(view_data.delete_list.cursor)
            {
                let id = candidate.id;
                let selected = &mut view_data.delete_list.selected;
                if !selected.remove(&id) {
                    selected.insert(id);
                }
            }
        }
        KeyCode::Enter => {
            let selected = std::mem::take(&mut view_data.delete_list.selected);
            if selected.is_empty() {
                emit_status(session, view_data, internal_tx, ttl, "nothing selected");
            } else {
                let events = session.dispatch(SessionCommand::RemoveTabs(selected));
                let removed = events
                    .iter()
                    .find_map(|event| match event {
                        SessionEvent::TabsRemoved(ids) => Some(ids.len()),
                        _ => None,
                    })
                    .unwrap_or(0);
                view_data.grid_scroll = GridScroll::default();
                emit_status(
                    session,
                    view_data,
                    internal_tx,
                    ttl,
                    format!("deleted {removed} {}", tab_noun(removed)),
                );
            }
        }
        KeyCode::Char('a') => {
            let events = session.dispatch(SessionCommand::RemoveAll);
            let removed = events
                .iter()
                .find_map(|event| match event {
                    SessionEvent::CollectionCleared(count) => Some(*count),
                    _ => None,
                })
                .unwrap_or(0);
            view_data.delete_list.selected.clear();
            view_data.grid_scroll = GridScroll::default();
            emit_status(
                session,
                view_data,
                internal_tx,
                ttl,
                format!("deleted {removed} {}", tab_noun(removed)),
            );
        }
        _ => {}
    }

    let count = session.delete_candidates().len();
    if view_data.delete_list.cursor >= count {
        view_data.delete_list.cursor = count.saturating_sub(1);
    }
}

const fn tab_noun(count: usize) -> &'static str {
    if count == 1 { "tab" } else { "tabs" }
}

fn scroll_grid(session: &Session, view_data: &mut ViewData, key: KeyCode) {
    let Some(tab) = session.active_tab() else {
        return;
    };
    let scroll = &mut view_data.grid_scroll;
    let last_row = tab.view.row_count().saturating_sub(1);
    let last_col_offset = tab.view.column_count().saturating_sub(2);
    match key {
        KeyCode::Up => scroll.row_offset = scroll.row_offset.saturating_sub(1),
        KeyCode::Down => scroll.row_offset = (scroll.row_offset + 1).min(last_row),
        KeyCode::Left => scroll.col_offset = scroll.col_offset.saturating_sub(1),
        KeyCode::Right => scroll.col_offset = (scroll.col_offset + 1).min(last_col_offset),
        KeyCode::PageUp => scroll.row_offset = scroll.row_offset.saturating_sub(GRID_PAGE_ROWS),
        KeyCode::PageDown => scroll.row_offset = (scroll.row_offset + GRID_PAGE_ROWS).min(last_row),
        KeyCode::Home => *scroll = GridScroll::default(),
        KeyCode::End => scroll.row_offset = last_row,
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame<'_>, session: &Session, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(1)])
        .split(frame.area());

    let form = Paragraph::new(form_panel_lines(session, view_data))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("range").borders(Borders::ALL));
    frame.render_widget(form, layout[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(layout[1]);

    render_tab_strip(frame, right[0], session);
    render_grid(frame, right[1], session, view_data);

    let status = Paragraph::new(status_text(session, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, right[2]);

    if view_data.delete_list.visible {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);
        let list = Paragraph::new(delete_list_text(session, view_data))
            .block(Block::default().title("delete tabs").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    if view_data.help_visible {
        let area = centered_rect(56, 52, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn form_panel_lines(session: &Session, view_data: &ViewData) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for field in Field::ALL {
        let focused = view_data.focus == Focus::Field(field);
        let marker = if focused { "> " } else { "  " };
        let mut input_style = Style::default();
        if focused {
            input_style = input_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::raw(format!("{marker}{:<8} ", field.short_label())),
            Span::styled(
                format!("[{:<7}]", session.form().raw(field)),
                input_style,
            ),
        ]));
        lines.push(Line::from(format!(
            "  {}",
            slider_track(view_data.sliders[field.index()], SLIDER_TRACK_WIDTH)
        )));
        if let Some(error) = session.form().error(field) {
            lines.push(Line::from(Span::styled(
                format!("  {}", error.message(field)),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "a table is added once input settles",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Text slider: a handle positioned proportionally along a fixed track.
fn slider_track(value: i64, width: usize) -> String {
    let span = (BOUND_MAX - BOUND_MIN) as usize;
    let clamped = value.clamp(BOUND_MIN, BOUND_MAX);
    let position = ((clamped - BOUND_MIN) as usize * (width - 1)) / span;
    let track: String = (0..width)
        .map(|index| if index == position { '\u{25cf}' } else { '\u{2500}' })
        .collect();
    format!("{BOUND_MIN} {track} {BOUND_MAX}")
}

fn tab_title(session: &Session, index: usize) -> String {
    let tab = &session.tabs()[index];
    if session.is_pinned(tab.id) {
        format!(" {} [pinned] ", tab.label)
    } else {
        format!(" {} ", tab.label)
    }
}

fn render_tab_strip(frame: &mut ratatui::Frame<'_>, area: Rect, session: &Session) {
    if session.tab_count() == 0 {
        let empty = Paragraph::new(" no tables yet ")
            .block(Block::default().title("tablas").borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let titles: Vec<String> = (0..session.tab_count())
        .map(|index| tab_title(session, index))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().title("tablas").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(session.active_index().unwrap_or(0));
    frame.render_widget(tabs, area);
}

fn render_grid(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    session: &Session,
    view_data: &ViewData,
) {
    let Some(tab) = session.active_tab() else {
        let empty = Paragraph::new("enter a range to generate a table")
            .block(Block::default().borders(Borders::ALL).title("table"));
        frame.render_widget(empty, area);
        return;
    };

    let visible = visible_columns(&tab.view, view_data.grid_scroll, area.width);
    let header_cells = visible.iter().map(|column| {
        Cell::from(tab.view.header[*column].to_string()).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells);

    let rows = tab
        .view
        .rows
        .iter()
        .skip(view_data.grid_scroll.row_offset)
        .map(|row| {
            let cells = visible
                .iter()
                .map(|column| {
                    let mut style = Style::default();
                    if *column == 0 {
                        style = style.fg(Color::White).add_modifier(Modifier::BOLD);
                    }
                    Cell::from(row[*column].to_string()).style(style)
                })
                .collect::<Vec<_>>();
            Row::new(cells)
        });

    let widths = vec![Constraint::Length(CELL_WIDTH); visible.len().max(1)];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title(tab.label.clone())
                .borders(Borders::ALL),
        );
    frame.render_widget(table, area);
}

/// Column window for the current scroll. The row-label column stays
/// pinned; data columns shift by the column offset and fill whatever
/// width is available.
fn visible_columns(view: &TableView, scroll: GridScroll, width: u16) -> Vec<usize> {
    let capacity = ((width.saturating_sub(2) / (CELL_WIDTH + 1)) as usize).max(2);
    let total = view.column_count();
    let first_data = 1 + scroll.col_offset.min(total.saturating_sub(2));
    let mut columns = vec![0];
    columns.extend(first_data..total.min(first_data + capacity - 1));
    columns
}

fn status_text(session: &Session, view_data: &ViewData) -> String {
    if let Some(status) = session.status_line() {
        return status.to_owned();
    }
    match view_data.focus {
        Focus::Field(field) => format!(
            "editing {} -- digits edit, arrows move the slider, ? for help",
            field.label()
        ),
        Focus::Table => {
            "arrows scroll -- f/b switch tabs, x closes, d opens the delete list".to_owned()
        }
    }
}

fn delete_list_text(session: &Session, view_data: &ViewData) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if session.delete_candidates().is_empty() {
        lines.push(Line::from("no deletable tabs"));
    }
    for (index, candidate) in session.delete_candidates().iter().enumerate() {
        let mark = if view_data.delete_list.selected.contains(&candidate.id) {
            "x"
        } else {
            " "
        };
        let cursor = if index == view_data.delete_list.cursor {
            ">"
        } else {
            " "
        };
        let mut style = Style::default();
        if index == view_data.delete_list.cursor {
            style = style.fg(Color::Cyan);
        }
        lines.push(Line::from(Span::styled(
            format!("{cursor} [{mark}] {}", candidate.label),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        "space toggles, enter deletes selected, a deletes all, esc closes",
    ));
    lines
}

fn help_overlay_text() -> Vec<Line<'static>> {
    [
        "tab / shift-tab   cycle focus across fields and the table",
        "digits . -        edit the focused field",
        "left / right      move the focused slider by one",
        "up / down         previous / next field",
        "f / b             next / previous table tab",
        "x                 close the focused tab",
        "d                 open the delete list",
        "?                 toggle this help",
        "ctrl-q            quit",
    ]
    .into_iter()
    .map(Line::from)
    .collect()
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
