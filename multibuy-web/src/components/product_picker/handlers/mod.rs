mod add_to_cart;
mod choose;
mod select_unit;

pub use add_to_cart::{AddToCartOutcome, add_to_cart_outcome, handle_add_to_cart};
pub use choose::{ChoiceChange, handle_choice_change};
pub use select_unit::{SelectUnitOutcome, handle_select_unit, select_unit_outcome};
