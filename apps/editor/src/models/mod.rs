pub mod entry;
pub mod tailored;
