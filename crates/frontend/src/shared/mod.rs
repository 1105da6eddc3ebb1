pub mod collapse;
pub mod dom;
pub mod table_sort;
