pub mod comparison_table;
pub mod microbench_cmp;
pub mod navbar;
pub mod spinner;
