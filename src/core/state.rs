//! Authoritative game state and setup.
//!
//! `GameState` is the single source of truth: both players, the shared
//! market, the draw pile, the token economy, the active seat, and the
//! terminal flag all live here. Strategies never touch it directly - they
//! receive a `PlayerView` projection and propose `Action`s that the rules
//! module validates and executes.

use im::Vector;
use rustc_hash::FxHashMap;

use super::action::ActionRecord;
use super::card::Good;
use super::economy::{goods_token_stacks, set_bonus_stacks, starting_deck, TokenStack};
use super::player::{Player, Seat, SeatMap};
use super::rng::GameRng;
use super::view::PlayerView;

/// Hand capacity at the end of every completed action.
pub const MAX_HAND_SIZE: usize = 7;

/// Market size while the game is active.
pub const MARKET_SIZE: usize = 5;

/// One-time end-of-game bonus for the larger herd.
pub const HERD_BONUS: i64 = 5;

/// Camels seeded into the opening market.
const OPENING_CAMELS: usize = 3;

/// Cards dealt to each player at setup.
const OPENING_DEAL: usize = 5;

/// Whether the turn state machine is still accepting actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Terminal,
}

/// The authoritative state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) players: SeatMap<Player>,
    pub(crate) active: Seat,
    /// The shared five-card offer row. Exactly `MARKET_SIZE` cards until a
    /// refill fails.
    pub(crate) market: Vec<Good>,
    /// Draw pile, top at the end.
    pub(crate) deck: Vec<Good>,
    pub(crate) goods_tokens: FxHashMap<Good, TokenStack>,
    pub(crate) bonus_tokens: FxHashMap<usize, TokenStack>,
    pub(crate) failed_to_refill: bool,
    pub(crate) herd_bonus_awarded: bool,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Set up a fresh game from a seed.
    ///
    /// Shuffles the draw pile, seeds the market with three camels plus two
    /// drawn cards, deals five cards to each player (drawn camels go to the
    /// herd, not the hand), and shuffles the set-bonus stacks. The same
    /// seed always produces the same opening position.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = starting_deck(&mut rng);

        let mut market = vec![Good::Camel; OPENING_CAMELS];
        for _ in 0..(MARKET_SIZE - OPENING_CAMELS) {
            if let Some(card) = deck.pop() {
                market.push(card);
            }
        }

        let mut players = SeatMap::new(|_| Player::new());
        for seat in Seat::both() {
            for _ in 0..OPENING_DEAL {
                match deck.pop() {
                    Some(Good::Camel) => players[seat].herd += 1,
                    Some(card) => players[seat].hand.push(card),
                    None => {}
                }
            }
        }

        let bonus_tokens = set_bonus_stacks(&mut rng);

        Self {
            players,
            active: Seat::A,
            market,
            deck,
            goods_tokens: goods_token_stacks(),
            bonus_tokens,
            failed_to_refill: false,
            herd_bonus_awarded: false,
            history: Vector::new(),
            rng,
        }
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Read a player's material.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// A player's cumulative score.
    #[must_use]
    pub fn score(&self, seat: Seat) -> i64 {
        self.players[seat].score
    }

    /// The shared market.
    #[must_use]
    pub fn market(&self) -> &[Good] {
        &self.market
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Remaining payout stack for a good. `None` for the camel.
    #[must_use]
    pub fn tokens(&self, good: Good) -> Option<&TokenStack> {
        self.goods_tokens.get(&good)
    }

    /// Remaining set-bonus stack for a sale-group size (3, 4, or 5).
    #[must_use]
    pub fn bonus_tokens(&self, size: usize) -> Option<&TokenStack> {
        self.bonus_tokens.get(&size)
    }

    /// True once the game has ended: a market refill failed, or all three
    /// set-bonus stacks are empty.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.failed_to_refill
            || self.bonus_tokens.values().filter(|s| s.is_empty()).count()
                >= super::economy::SET_BONUS_SIZES.len()
    }

    /// Current phase of the turn state machine.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Terminal
        } else {
            GameStatus::InProgress
        }
    }

    /// Project the partial-information snapshot for one seat.
    ///
    /// Pure and cheap: own hand exact, opponent hand as a count, everything
    /// public copied verbatim. Call it fresh before every strategy turn.
    #[must_use]
    pub fn view(&self, seat: Seat) -> PlayerView {
        let me = &self.players[seat];
        let opponent = &self.players[seat.opponent()];
        PlayerView {
            hand: me.hand.clone(),
            herd: me.herd,
            opponent_herd: opponent.herd,
            opponent_hand_size: opponent.hand.len(),
            market: self.market.clone(),
            goods_tokens: self.goods_tokens.clone(),
        }
    }

    /// Everything executed so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
