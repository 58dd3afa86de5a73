//! Adapters between the board and the outside world.

pub mod quote_sheet;
