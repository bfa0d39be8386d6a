//! Game rules: win and draw detection.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_won, winning_line};
