//! Yoked symbol selectors.
//!
//! Each player has a selector over a fixed option list. Changing either
//! selector moves the other to the same option index, so the two players
//! always switch symbols together.

use tally_tictactoe::{Player, Symbol};
use tracing::{debug, instrument};

/// The two symbol selectors of the controls surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSelectors {
    options: [Vec<Symbol>; 2],
    selected: [usize; 2],
}

impl SymbolSelectors {
    /// Creates selectors over equally long option lists, starting at
    /// option `index` (clamped to the last option).
    ///
    /// Returns `None` if a list is empty or the lengths differ.
    pub fn new(one: Vec<Symbol>, two: Vec<Symbol>, index: usize) -> Option<Self> {
        if one.is_empty() || one.len() != two.len() {
            return None;
        }
        let index = index.min(one.len() - 1);
        Some(Self {
            options: [one, two],
            selected: [index, index],
        })
    }

    /// Number of options per selector.
    pub fn len(&self) -> usize {
        self.options[0].len()
    }

    /// Returns true when there is nothing to select.
    pub fn is_empty(&self) -> bool {
        self.options[0].is_empty()
    }

    /// Option index currently shown by the player's selector.
    pub fn selected(&self, player: Player) -> usize {
        self.selected[player.index()]
    }

    /// Options offered to the player.
    pub fn options(&self, player: Player) -> &[Symbol] {
        &self.options[player.index()]
    }

    /// The currently selected symbol pair.
    pub fn current(&self) -> (Symbol, Symbol) {
        (
            self.options[0][self.selected[0]],
            self.options[1][self.selected[1]],
        )
    }

    /// Selects option `index` on the player's selector.
    ///
    /// The other selector follows to the same index. Returns the resulting
    /// symbol pair, or `None` if `index` is out of range.
    #[instrument(skip(self))]
    pub fn select(&mut self, player: Player, index: usize) -> Option<(Symbol, Symbol)> {
        if index >= self.len() {
            return None;
        }
        self.selected[player.index()] = index;
        self.selected[player.other().index()] = index;
        let (one, two) = self.current();
        debug!(%one, %two, "Symbols selected");
        Some((one, two))
    }

    /// Advances the player's selector to the next option, wrapping around.
    #[instrument(skip(self))]
    pub fn advance(&mut self, player: Player) -> Option<(Symbol, Symbol)> {
        let next = (self.selected(player) + 1) % self.len();
        self.select(player, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(marks: &str) -> Vec<Symbol> {
        marks.chars().map(|c| Symbol::new(c).unwrap()).collect()
    }

    fn selectors() -> SymbolSelectors {
        SymbolSelectors::new(symbols("XO+"), symbols("OX-"), 0).unwrap()
    }

    #[test]
    fn test_selecting_one_player_moves_the_other() {
        let mut sel = selectors();
        let pair = sel.select(Player::Two, 2).unwrap();
        assert_eq!((pair.0.as_char(), pair.1.as_char()), ('+', '-'));
        assert_eq!(sel.selected(Player::One), 2);
        assert_eq!(sel.selected(Player::Two), 2);
    }

    #[test]
    fn test_advance_wraps() {
        let mut sel = selectors();
        sel.advance(Player::One);
        sel.advance(Player::Two);
        let pair = sel.advance(Player::One).unwrap();
        assert_eq!(pair.0.as_char(), 'X');
        assert_eq!(sel.selected(Player::Two), 0);
    }

    #[test]
    fn test_out_of_range_select_is_rejected() {
        let mut sel = selectors();
        assert_eq!(sel.select(Player::One, 3), None);
        assert_eq!(sel.selected(Player::One), 0);
    }

    #[test]
    fn test_new_rejects_empty_or_uneven_lists() {
        assert_eq!(SymbolSelectors::new(Vec::new(), Vec::new(), 0), None);
        assert_eq!(SymbolSelectors::new(symbols("XO"), symbols("O"), 0), None);
    }

    #[test]
    fn test_new_clamps_index() {
        let sel = SymbolSelectors::new(symbols("XO"), symbols("OX"), 7).unwrap();
        let (one, two) = sel.current();
        assert_eq!((one.as_char(), two.as_char()), ('O', 'X'));
    }
}
