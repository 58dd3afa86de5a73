pub mod board;
pub mod sheet;

pub use board::BoardPage;
pub use sheet::SheetPage;
