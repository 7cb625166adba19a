//! Round and match state.
//!
//! [`GameState`] is the single value the surfaces render from. It is only
//! mutated through [`Game`](crate::Game).

use crate::{Board, Player, Players, Position, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A decided round: who won, with what, and along which triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Win {
    /// The winning player.
    player: Player,
    /// The symbol that completed the line.
    symbol: Symbol,
    /// The completed triple, in table order.
    line: [Position; 3],
}

impl Win {
    pub(crate) fn new(player: Player, symbol: Symbol, line: [Position; 3]) -> Self {
        Self {
            player,
            symbol,
            line,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Win),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the win, if the round was won.
    pub fn win(&self) -> Option<&Win> {
        match self {
            Outcome::Win(win) => Some(win),
            Outcome::Draw => None,
        }
    }
}

/// Phase of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to click an empty cell.
    AwaitingMove,
    /// A win or draw happened; moves are ignored until a reset.
    RoundOver,
}

/// State of a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundState {
    /// The board.
    board: Board,
    /// Player to move, or the player who made the last move once decided.
    current: Player,
    /// Set once the round is won or drawn.
    outcome: Option<Outcome>,
    /// Positions played this round, in order.
    history: Vec<Position>,
}

impl RoundState {
    /// Creates an empty round with player one to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Returns the phase implied by the outcome.
    pub fn phase(&self) -> Phase {
        match self.outcome {
            None => Phase::AwaitingMove,
            Some(_) => Phase::RoundOver,
        }
    }

    pub(crate) fn place(&mut self, pos: Position, symbol: Symbol) {
        self.board.place(pos, symbol);
        self.history.push(pos);
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current = self.current.other();
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

/// Running win counters for the match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    wins: [u32; 2],
}

impl Tally {
    /// Wins recorded for the player.
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.wins = [0, 0];
    }
}

/// Everything the surfaces need to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// Symbols chosen by the two players.
    players: Players,
    /// The round being played.
    round: RoundState,
    /// Wins carried across rounds.
    tally: Tally,
}

impl GameState {
    pub(crate) fn new(players: Players) -> Self {
        Self {
            players,
            round: RoundState::new(),
            tally: Tally::default(),
        }
    }

    /// Symbol of the player whose turn it is.
    pub fn current_symbol(&self) -> Symbol {
        self.players.symbol(self.round.current)
    }

    pub(crate) fn players_mut(&mut self) -> &mut Players {
        &mut self.players
    }

    pub(crate) fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub(crate) fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
