//! Round/match state machine for tic-tac-toe.
//!
//! [`Game`] owns the [`GameState`] and exposes one entry point per user
//! intent. Illegal moves never fail: they are reported back as
//! [`MoveOutcome::Ignored`] and leave the state untouched.

use crate::rules::{find_winning_line, is_full};
use crate::state::{GameState, Outcome, Phase, Win};
use crate::{Player, Players, Position, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A user action forwarded by one of the surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A click on a cell.
    Place(Position),
    /// A new pair of symbols was selected.
    SelectSymbols {
        /// Player one's symbol.
        one: Symbol,
        /// Player two's symbol.
        two: Symbol,
    },
    /// Clear the board, keep the tally.
    ResetBoard,
    /// Clear the board and the tally.
    ResetGame,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// The cell already holds a symbol.
    #[display("{_0} is already taken")]
    Occupied(Position),
    /// The round has already been won or drawn.
    #[display("the round is over")]
    RoundOver,
}

/// Result of [`Game::on_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The round goes on with the given player to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The move completed a line.
    Won(Win),
    /// The move filled the board with no line.
    Drawn,
    /// Nothing happened.
    Ignored(Ignored),
}

/// Tic-tac-toe match engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a match with the given symbols and an empty tally.
    #[instrument]
    pub fn new(players: Players) -> Self {
        if players.shares_symbol() {
            warn!("Both players use the same symbol");
        }
        Self {
            state: GameState::new(players),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the phase of the current round.
    pub fn phase(&self) -> Phase {
        self.state.round().phase()
    }

    /// Routes an intent to its entry point.
    ///
    /// Only [`Intent::Place`] produces a [`MoveOutcome`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Option<MoveOutcome> {
        match intent {
            Intent::Place(pos) => return Some(self.on_move(pos)),
            Intent::SelectSymbols { one, two } => self.on_symbol_change(one, two),
            Intent::ResetBoard => self.on_reset_board(),
            Intent::ResetGame => self.on_reset_game(),
        }
        None
    }

    /// Plays the current player's symbol at `pos`.
    ///
    /// A win is checked first and takes precedence; the draw check only
    /// runs when no line was completed.
    #[instrument(skip(self), fields(player = %self.state.round().current()))]
    pub fn on_move(&mut self, pos: Position) -> MoveOutcome {
        if self.phase() == Phase::RoundOver {
            debug!("Move ignored, round is over");
            return MoveOutcome::Ignored(Ignored::RoundOver);
        }
        if !self.state.round().board().is_empty(pos) {
            debug!("Move ignored, square occupied");
            return MoveOutcome::Ignored(Ignored::Occupied(pos));
        }

        let player = *self.state.round().current();
        let symbol = self.state.current_symbol();
        self.state.round_mut().place(pos, symbol);

        if let Some(line) = find_winning_line(self.state.round().board()) {
            let win = Win::new(player, line.symbol, line.cells);
            self.state.round_mut().finish(Outcome::Win(win));
            self.state.tally_mut().record_win(player);
            info!(
                %player,
                wins = self.state.tally().wins(player),
                "Round won"
            );
            return MoveOutcome::Won(win);
        }

        if is_full(self.state.round().board()) {
            self.state.round_mut().finish(Outcome::Draw);
            info!("Round drawn");
            return MoveOutcome::Drawn;
        }

        self.state.round_mut().pass_turn();
        let next = *self.state.round().current();
        debug!(%next, "Turn passed");
        MoveOutcome::Continue { next }
    }

    /// Stores a new symbol pair and starts a fresh round.
    #[instrument(skip(self))]
    pub fn on_symbol_change(&mut self, one: Symbol, two: Symbol) {
        let players = Players::new(one, two);
        if players.shares_symbol() {
            warn!("Both players now use the same symbol");
        }
        *self.state.players_mut() = players;
        self.on_reset_board();
    }

    /// Clears the board and hands the turn back to player one.
    #[instrument(skip(self))]
    pub fn on_reset_board(&mut self) {
        *self.state.round_mut() = Default::default();
        debug!("Board reset");
    }

    /// Clears the board and both win counters.
    #[instrument(skip(self))]
    pub fn on_reset_game(&mut self) {
        self.on_reset_board();
        self.state.tally_mut().clear();
        info!("Game reset");
    }
}
