pub mod editor;
pub mod mounted_rows;
pub mod row_view;
pub mod submit_guard;
