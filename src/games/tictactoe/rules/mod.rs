//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Nothing here knows
//! about history or turn order.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};
