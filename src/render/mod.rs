pub mod escape;
pub mod fragment;
pub mod table;
