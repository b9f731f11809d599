//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. Rules never
//! mutate; sequencing moves so that at most one mark completes a line is
//! the job of [`Game`](crate::Game).

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, legal_moves, winner, winning_line};
