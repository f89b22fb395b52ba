pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod page_loader;
pub mod tool_modal;
