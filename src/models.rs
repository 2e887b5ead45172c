pub mod comparison;
pub mod load_state;
pub mod metric;
