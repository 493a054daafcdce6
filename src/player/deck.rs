use crate::error::{Error, Result};
use crate::media::MediaEndpoint;

use super::controller::PlayerController;
use super::id::PlayerId;

/// The ordered set of players on screen.
#[derive(Debug)]
pub struct Deck<M> {
    players: Vec<PlayerController<M>>,
}

impl<M: MediaEndpoint> Deck<M> {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Add a player. Ids must be unique.
    pub fn push(&mut self, player: PlayerController<M>) -> Result<()> {
        if self.position(player.id()).is_some() {
            return Err(Error::Config(format!("duplicate player id `{}`", player.id())));
        }
        self.players.push(player);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn position(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerController<M>> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut PlayerController<M>> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn at(&self, pos: usize) -> Option<&PlayerController<M>> {
        self.players.get(pos)
    }

    pub fn at_mut(&mut self, pos: usize) -> Option<&mut PlayerController<M>> {
        self.players.get_mut(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerController<M>> {
        self.players.iter()
    }
}

impl<M: MediaEndpoint> Default for Deck<M> {
    fn default() -> Self {
        Self::new()
    }
}
