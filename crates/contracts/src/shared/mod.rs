pub mod collapse;
pub mod money;
pub mod table_sort;
