pub mod fetch_comparison;
