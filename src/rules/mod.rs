//! Game rules: the legality validator, the legal-move enumerator, and the
//! executor that mutates state.

pub mod enumerate;
pub mod execute;
pub mod legality;

pub use enumerate::{all_legal_actions, goods_subsets, swap_pairs};
pub use execute::{award_herd_bonus, execute};
pub use legality::{can_sell, is_legal};
