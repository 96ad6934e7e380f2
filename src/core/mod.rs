//! Core data model: cards, seats, economy stacks, RNG, actions, state, views.

pub mod action;
pub mod card;
pub mod economy;
pub mod player;
pub mod rng;
pub mod state;
pub mod view;

pub use action::{Action, ActionRecord, CardList};
pub use card::Good;
pub use economy::TokenStack;
pub use player::{Player, Seat, SeatMap};
pub use rng::GameRng;
pub use state::{GameState, GameStatus, HERD_BONUS, MARKET_SIZE, MAX_HAND_SIZE};
pub use view::PlayerView;
