pub mod codec;
pub mod converter;
pub mod file_info;
pub mod file_kind;
