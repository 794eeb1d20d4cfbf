//! The table: every pile in play, and the deal that sets it up.

use super::action::{DropTarget, Move, MoveError, Source, StockOutcome};
use super::card::Card;
use super::contracts::{Contract, MoveContract};
use super::deck::Deck;
use super::pile::{FoundationSlot, Pile, PileKind, TableauSlot};
use super::rules;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Complete game state: seven tableau piles, stock, waste, four foundations.
///
/// This is the single source of truth. It changes only through
/// [`Table::apply_move`] and [`Table::click_stock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    tableau: [Pile; TABLEAU_PILES],
    foundations: [Pile; FOUNDATION_PILES],
    stock: Pile,
    waste: Pile,
}

impl Table {
    /// Deals a new game from `deck`.
    ///
    /// Tableau pile `i` takes `i + 1` cards popped from the deck's end, the
    /// last of them face-up. The remaining 24 cards become the stock.
    #[instrument(skip(deck))]
    pub fn deal(deck: Deck) -> Self {
        let mut deck = deck;
        let tableau = std::array::from_fn(|i| {
            let mut pile = Pile::new(PileKind::Tableau);
            for j in 0..=i {
                if let Some(mut card) = deck.pop() {
                    if j == i {
                        card.turn_up();
                    }
                    pile.push(card);
                }
            }
            pile
        });
        let stock = Pile::with_cards(PileKind::Stock, deck.into_cards());
        info!(stock = stock.len(), "Dealt new table");
        Self {
            tableau,
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            stock,
            waste: Pile::new(PileKind::Waste),
        }
    }

    /// Deals from a freshly shuffled deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::deal(Deck::shuffled(rng))
    }

    /// Deals from a deck shuffled with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::deal(Deck::from_seed(seed))
    }

    /// Builds a table from explicit pile contents, bottom card first.
    ///
    /// Nothing is validated; this exists to set up specific positions.
    pub fn from_piles(
        tableau: [Vec<Card>; TABLEAU_PILES],
        foundations: [Vec<Card>; FOUNDATION_PILES],
        stock: Vec<Card>,
        waste: Vec<Card>,
    ) -> Self {
        Self {
            tableau: tableau.map(|cards| Pile::with_cards(PileKind::Tableau, cards)),
            foundations: foundations.map(|cards| Pile::with_cards(PileKind::Foundation, cards)),
            stock: Pile::with_cards(PileKind::Stock, stock),
            waste: Pile::with_cards(PileKind::Waste, waste),
        }
    }

    /// Returns a tableau pile.
    pub fn tableau(&self, slot: TableauSlot) -> &Pile {
        &self.tableau[slot.index()]
    }

    /// Returns all tableau piles, left to right.
    pub fn tableau_piles(&self) -> &[Pile; TABLEAU_PILES] {
        &self.tableau
    }

    /// Returns a foundation pile.
    pub fn foundation(&self, slot: FoundationSlot) -> &Pile {
        &self.foundations[slot.index()]
    }

    /// Returns all foundation piles, left to right.
    pub fn foundations(&self) -> &[Pile; FOUNDATION_PILES] {
        &self.foundations
    }

    /// Returns the stock.
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    /// Returns the waste.
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Iterates over every pile on the table.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.stock, &self.waste])
    }

    /// Total number of cards on the table.
    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// Returns the cards `source` would lift.
    ///
    /// Fails if the source has nothing there or any of it is face-down.
    pub fn lift(&self, source: Source) -> Result<&[Card], MoveError> {
        match source {
            Source::Waste => {
                let Some(start) = self.waste.len().checked_sub(1) else {
                    return Err(MoveError::NothingToLift(source));
                };
                if !rules::can_lift_from_waste(&self.waste) {
                    return Err(MoveError::FaceDown(source));
                }
                Ok(&self.waste.cards()[start..])
            }
            Source::Tableau { slot, start } => {
                let pile = self.tableau(slot);
                let Some(run) = pile.run_from(start) else {
                    return Err(MoveError::NothingToLift(source));
                };
                if !rules::can_lift_from_tableau(pile, start) {
                    return Err(MoveError::FaceDown(source));
                }
                Ok(run)
            }
        }
    }

    /// Checks whether `target` takes `run`, using the foundation rule for
    /// foundations and the tableau rule (on the lead card) for tableau piles.
    pub fn accepts(&self, run: &[Card], target: DropTarget) -> bool {
        match target {
            DropTarget::Foundation(slot) => rules::foundation_accepts(run, self.foundation(slot)),
            DropTarget::Tableau(slot) => run
                .first()
                .is_some_and(|lead| rules::tableau_accepts(lead, self.tableau(slot))),
        }
    }

    /// Checks a move without applying it.
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveError> {
        MoveContract::pre(self, mv)
    }

    /// Applies a move, or rejects it without touching the table.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only; on failure the table
    ///   is restored to its state before the move
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        MoveContract::pre(self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let run = match mv.source {
            Source::Waste => self.waste.pop().into_iter().collect(),
            Source::Tableau { slot, start } => {
                let pile = &mut self.tableau[slot.index()];
                let run = pile.split_run(start);
                if pile.expose_top() {
                    debug!(%slot, "Exposed face-down card");
                }
                run
            }
        };

        match mv.destination {
            DropTarget::Foundation(slot) => self.foundations[slot.index()].extend(run),
            DropTarget::Tableau(slot) => self.tableau[slot.index()].extend(run),
        }

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            tracing::warn!(%err, "Postcondition failed, restoring table");
            *self = before;
            return Err(err);
        }

        info!("Move applied");
        Ok(())
    }

    /// Clicks the stock.
    ///
    /// A non-empty stock turns its top card face-up onto the waste. An empty
    /// stock takes the whole waste back, reversed and face-down. Redeals are
    /// unlimited.
    #[instrument(skip(self), fields(stock = self.stock.len(), waste = self.waste.len()))]
    pub fn click_stock(&mut self) -> StockOutcome {
        let total = self.card_count();

        let outcome = match self.stock.pop() {
            Some(mut card) => {
                card.turn_up();
                let id = card.id();
                self.waste.push(card);
                StockOutcome::Drew(id)
            }
            None => {
                let mut recycled = self.waste.take_all();
                recycled.reverse();
                for card in &mut recycled {
                    card.turn_down();
                }
                let count = recycled.len();
                self.stock.extend(recycled);
                StockOutcome::Recycled(count)
            }
        };

        debug_assert_eq!(total, self.card_count(), "Stock click changed the card count");
        debug!(?outcome, "Stock clicked");
        outcome
    }
}

impl Default for Table {
    /// A table with every pile empty.
    fn default() -> Self {
        Self::from_piles(Default::default(), Default::default(), Vec::new(), Vec::new())
    }
}
