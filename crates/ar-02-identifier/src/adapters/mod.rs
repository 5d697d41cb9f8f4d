pub mod static_table;
