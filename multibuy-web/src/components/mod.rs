pub mod header;
pub mod notice_host;
pub mod product_picker;
