pub mod host;
pub mod html_page;
pub mod memory_page;
