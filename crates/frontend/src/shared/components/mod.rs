pub mod crud_table;
pub mod page_header;
pub mod table_cell_money;
