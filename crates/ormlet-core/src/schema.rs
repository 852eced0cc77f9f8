mod column;
pub use column::Column;

mod table;
pub use table::Table;
