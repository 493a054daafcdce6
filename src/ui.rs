//! UI rendering for the terminal user interface.
//!
//! Every player gets a column with its now-playing block above its playlist.
//! The shared library sits to the right of the players.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::config::UiSettings;
use crate::media::MediaEndpoint;
use crate::player::PlayerController;

const CONTROLS: [(&str, &str); 9] = [
    ("tab", "next pane"),
    ("j/k", "up/down"),
    ("enter", "play row / queue pick"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next song"),
    ("+/-", "volume"),
    ("1-9", "queue pick on player N"),
    ("a", "add files"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_padding() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn now_playing_text<M: MediaEndpoint>(player: &PlayerController<M>, ui: &UiSettings) -> String {
    let view = player.view();
    let volume = (player.volume() * 100.0).round() as u32;
    let mut lines = vec![
        format!("[{}]  vol {volume}%", view.play_label),
        format!("Title:  {}", view.title),
        format!("Artist: {}", view.artist),
    ];
    if ui.show_cover {
        lines.push(format!("Cover:  {}", view.image));
    }
    lines.join("\n")
}

fn draw_player<M: MediaEndpoint>(
    frame: &mut Frame,
    app: &App<M>,
    pos: usize,
    area: Rect,
    ui: &UiSettings,
) {
    let Some(player) = app.deck.at(pos) else {
        return;
    };
    let focused = app.focus == Focus::Player(pos);
    let np_height = if ui.show_cover { 7 } else { 5 };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(np_height), Constraint::Min(1)])
        .split(area);

    let now_playing = Paragraph::new(now_playing_text(player, ui))
        .block(pane_block(format!(" player {} ", player.id()), focused).padding(left_padding()))
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, parts[0]);

    let items: Vec<ListItem> = player
        .view()
        .rows()
        .iter()
        .map(|row| {
            let marker = if row.is_active() { "♪ " } else { "  " };
            ListItem::new(format!("{marker}{}", row.label))
        })
        .collect();
    let total = items.len();

    let list = List::new(items)
        .block(pane_block(" playlist ".to_string(), focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if focused && total > 0 {
        state.select(Some(app.row_cursor(pos).min(total - 1)));
    }
    frame.render_stateful_widget(list, parts[1], &mut state);
}

fn draw_library<M: MediaEndpoint>(frame: &mut Frame, app: &App<M>, area: Rect) {
    let focused = app.focus == Focus::Library;
    let items: Vec<ListItem> = app
        .library
        .iter()
        .map(|e| ListItem::new(e.label.as_str()))
        .collect();
    let total = items.len();

    let title = format!(" library -> player {} ", app.bridge.target());
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if focused && total > 0 {
        state.select(Some(app.library_selected.min(total - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into `frame`.
pub fn draw<M: MediaEndpoint>(frame: &mut Frame, app: &App<M>, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Percentage(30)])
        .split(chunks[1]);

    let players = app.deck.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..players).map(|_| Constraint::Ratio(1, players)))
        .split(main[0]);
    for pos in 0..app.deck.len() {
        draw_player(frame, app, pos, columns[pos], ui);
    }
    draw_library(frame, app, main[1]);

    let status = Paragraph::new(app.status.as_deref().unwrap_or(""))
        .block(Block::bordered().padding(left_padding()).title(" status "));
    frame.render_widget(status, chunks[2]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_padding()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);

    if let Some(input) = &app.input {
        let popup = centered_rect_sized(64, 3, chunks[1]);
        frame.render_widget(Clear, popup);
        let prompt = Paragraph::new(input.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" add file or folder (enter adds, esc cancels) ")
                .padding(left_padding()),
        );
        frame.render_widget(prompt, popup);
    }
}
