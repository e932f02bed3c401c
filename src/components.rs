pub mod footer;
pub mod header;
pub mod tool_table;
