//! Application model types: `App` and `Focus`.
//!
//! The `App` struct holds the player deck, the shared library and the
//! focus/selection state used by the UI and runtime.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::library::LibraryEntry;
use crate::media::MediaEndpoint;
use crate::player::{Deck, LibraryBridge, PlayerController};

/// Which pane receives key presses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    /// A player deck, by position.
    Player(usize),
    Library,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Player(0)
    }
}

/// The main application model.
pub struct App<M> {
    pub deck: Deck<M>,
    pub library: Vec<LibraryEntry>,
    pub bridge: LibraryBridge,
    pub focus: Focus,

    /// Highlighted row per player, parallel to the deck.
    row_cursor: Vec<usize>,
    pub library_selected: usize,

    /// Path prompt buffer while adding files to the focused player.
    pub input: Option<String>,
    /// Last message for the status line.
    pub status: Option<String>,
}

impl<M: MediaEndpoint> App<M> {
    /// Create a new `App` around `deck`.
    pub fn new(deck: Deck<M>, library: Vec<LibraryEntry>, bridge: LibraryBridge) -> Self {
        let row_cursor = vec![0; deck.len()];
        Self {
            deck,
            library,
            bridge,
            focus: Focus::default(),
            row_cursor,
            library_selected: 0,
            input: None,
            status: None,
        }
    }

    /// The player whose pane has focus, if a player pane has focus.
    pub fn focused_player(&self) -> Option<&PlayerController<M>> {
        match self.focus {
            Focus::Player(pos) => self.deck.at(pos),
            Focus::Library => None,
        }
    }

    pub fn focused_player_mut(&mut self) -> Option<&mut PlayerController<M>> {
        match self.focus {
            Focus::Player(pos) => self.deck.at_mut(pos),
            Focus::Library => None,
        }
    }

    /// Highlighted playlist row of the player at `pos`.
    pub fn row_cursor(&self, pos: usize) -> usize {
        self.row_cursor.get(pos).copied().unwrap_or(0)
    }

    /// Cycle focus forward: players left to right, then the library.
    pub fn focus_next(&mut self) {
        let players = self.deck.len();
        self.focus = match self.focus {
            Focus::Player(p) if p + 1 < players => Focus::Player(p + 1),
            Focus::Player(_) => Focus::Library,
            Focus::Library if players > 0 => Focus::Player(0),
            Focus::Library => Focus::Library,
        };
    }

    /// Cycle focus backward.
    pub fn focus_prev(&mut self) {
        let players = self.deck.len();
        self.focus = match self.focus {
            Focus::Player(0) => Focus::Library,
            Focus::Player(p) => Focus::Player(p - 1),
            Focus::Library if players > 0 => Focus::Player(players - 1),
            Focus::Library => Focus::Library,
        };
    }

    /// Move the highlight of the focused pane down, wrapping to the top.
    pub fn next(&mut self) {
        match self.focus {
            Focus::Player(pos) => {
                let len = self.deck.at(pos).map(|p| p.len()).unwrap_or(0);
                if let Some(c) = self.row_cursor.get_mut(pos) {
                    *c = next_wrapping(*c, len);
                }
            }
            Focus::Library => {
                self.library_selected = next_wrapping(self.library_selected, self.library.len());
            }
        }
    }

    /// Move the highlight of the focused pane up, wrapping to the bottom.
    pub fn prev(&mut self) {
        match self.focus {
            Focus::Player(pos) => {
                let len = self.deck.at(pos).map(|p| p.len()).unwrap_or(0);
                if let Some(c) = self.row_cursor.get_mut(pos) {
                    *c = prev_wrapping(*c, len);
                }
            }
            Focus::Library => {
                self.library_selected = prev_wrapping(self.library_selected, self.library.len());
            }
        }
    }

    /// Play the highlighted row of the focused player.
    pub fn activate_row(&mut self) {
        if let Focus::Player(pos) = self.focus {
            let row = self.row_cursor(pos);
            if let Some(p) = self.deck.at_mut(pos) {
                p.select_row(row);
            }
        }
    }

    /// Nudge the focused player's volume by `delta`, keeping it within `0.0..=1.0`.
    pub fn nudge_volume(&mut self, delta: f32) {
        if let Some(p) = self.focused_player_mut() {
            let level = (p.volume() + delta).clamp(0.0, 1.0);
            p.set_volume(level);
        }
    }

    /// Send the highlighted library entry through the configured bridge.
    pub fn queue_selected(&mut self) -> Result<()> {
        let bridge = self.bridge.clone();
        self.queue_selected_via(&bridge)
    }

    /// Send the highlighted library entry to the player at deck position `pos`.
    pub fn queue_selected_to(&mut self, pos: usize) -> Result<()> {
        let Some(target) = self.deck.at(pos).map(|p| p.id().clone()) else {
            return Err(Error::Config(format!("no player at position {}", pos + 1)));
        };
        self.queue_selected_via(&LibraryBridge::new(target))
    }

    fn queue_selected_via(&mut self, bridge: &LibraryBridge) -> Result<()> {
        let Some(entry) = self.library.get(self.library_selected) else {
            return Ok(());
        };
        bridge.on_library_item_selected(&mut self.deck, &entry.descriptor)?;
        self.status = Some(format!("queued {} on player {}", entry.label, bridge.target()));
        Ok(())
    }

    /// Open the add-files prompt for the focused player.
    pub fn begin_input(&mut self) {
        if self.focused_player().is_some() {
            self.input = Some(String::new());
        }
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    pub fn push_input_char(&mut self, c: char) {
        if let Some(buf) = self.input.as_mut() {
            buf.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        if let Some(buf) = self.input.as_mut() {
            buf.pop();
        }
    }

    /// Close the prompt and return the entered path, if it is not blank.
    pub fn take_input(&mut self) -> Option<PathBuf> {
        let raw = self.input.take()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(expand_home(trimmed)))
        }
    }
}

fn next_wrapping(cur: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (cur + 1) % len }
}

fn prev_wrapping(cur: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cur.min(len - 1) + len - 1) % len
    }
}

/// Expand a leading `~/` using `$HOME`.
fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{home}/{rest}"),
        _ => path.to_string(),
    }
}
