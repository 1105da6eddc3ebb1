pub mod draft;
pub mod payload;
pub mod total;
