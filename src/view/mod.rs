pub mod expansion;
pub mod rows;

pub use expansion::ExpansionState;
pub use rows::{visible_rows, Row, RowItem};
