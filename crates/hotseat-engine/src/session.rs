//! Click-driven interaction on top of a [`Game`].
//!
//! A front end feeds [`InputEvent`]s into a [`Session`] and reads back the
//! game and the current [`Selection`] to draw the next frame. All state
//! changes happen synchronously inside [`Session::handle`].

use crate::game::Game;
use crate::validator::GameStatus;
use hotseat_core::Square;
use tracing::debug;

/// A discrete event delivered by the input shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The player asked to leave.
    Quit,
    /// A board square was clicked.
    Click(Square),
    /// Frame pacing signal; carries no game logic.
    Tick,
}

/// What a single event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selection was dropped without moving.
    Deselected,
    /// A move was committed.
    Moved {
        from: Square,
        to: Square,
        status: GameStatus,
    },
    /// The clicked square is not a legal destination; nothing changed.
    Rejected(Square),
    /// The click had no effect.
    Ignored,
    /// A tick was received.
    Idle,
    /// The shell should shut down.
    Quit,
}

/// The currently selected square and its cached legal destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    square: Option<Square>,
    destinations: Vec<Square>,
}

impl Selection {
    /// Returns the selected square.
    pub fn current(&self) -> Option<Square> {
        self.square
    }

    /// Returns the legal destinations of the selected piece.
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }

    /// Returns true if `square` is a destination of the selected piece.
    pub fn is_destination(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }

    /// Drops the selection.
    pub fn clear(&mut self) {
        self.square = None;
        self.destinations.clear();
    }

    fn select(&mut self, square: Square, destinations: Vec<Square>) {
        self.square = Some(square);
        self.destinations = destinations;
    }
}

/// One game plus the selection state of whoever is at the keyboard.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    selection: Selection,
}

impl Session {
    /// Starts a session on a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on an existing game.
    pub fn with_game(game: Game) -> Self {
        Session {
            game,
            selection: Selection::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Discards the current game and starts over.
    pub fn restart(&mut self) {
        self.game = Game::new();
        self.selection.clear();
    }

    /// Drops the selection without moving.
    pub fn deselect(&mut self) -> Outcome {
        if self.selection.current().is_some() {
            self.selection.clear();
            Outcome::Deselected
        } else {
            Outcome::Ignored
        }
    }

    /// Applies one input event.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Quit => Outcome::Quit,
            InputEvent::Tick => Outcome::Idle,
            InputEvent::Click(square) => self.click(square),
        }
    }

    fn click(&mut self, square: Square) -> Outcome {
        if self.game.is_over() {
            return Outcome::Ignored;
        }

        let owns_square = self
            .game
            .board()
            .piece_at(square)
            .is_some_and(|p| p.side == self.game.active_side());

        let Some(selected) = self.selection.current() else {
            return if owns_square {
                self.select(square)
            } else {
                Outcome::Ignored
            };
        };

        if square == selected {
            return self.deselect();
        }

        if self.selection.is_destination(square) {
            return match self.game.make_move(selected, square) {
                Ok(status) => {
                    self.selection.clear();
                    Outcome::Moved {
                        from: selected,
                        to: square,
                        status,
                    }
                }
                Err(err) => {
                    debug!(%err, "cached destination was refused");
                    Outcome::Rejected(square)
                }
            };
        }

        if owns_square {
            return self.select(square);
        }

        Outcome::Rejected(square)
    }

    fn select(&mut self, square: Square) -> Outcome {
        let destinations = self.game.legal_destinations(square);
        debug!(%square, destinations = destinations.len(), "selected");
        self.selection.select(square, destinations);
        Outcome::Selected(square)
    }
}
