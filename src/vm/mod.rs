pub mod bridge;
pub mod file_panel;
pub mod status;
pub mod text_panel;
