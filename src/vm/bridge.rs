//! VM桥接层：连接Slint UI与面板状态
//!
//! 注意：绑定实现在main.rs中，因为依赖于Slint生成的类型
//! 这里只提供公共常量与与UI无关的辅助函数

use crate::vm::status::StatusMessage;

// === 常量定义（消除魔法值） ===
pub const STATUS_ENTER_TEXT_TO_ENCODE: &str = "Please enter some text to encode";
pub const STATUS_ENTER_TEXT_TO_DECODE: &str = "Please enter base64 text to decode";
pub const STATUS_ENCODED: &str = "Text encoded successfully!";
pub const STATUS_DECODED: &str = "Text decoded successfully!";
pub const STATUS_COPIED: &str = "Copied to clipboard!";
pub const STATUS_COPY_FAILED: &str = "Failed to copy to clipboard";

pub const FILE_INFO_NONE: &str = "No file selected";
pub const STATUS_INVALID_FILE: &str = "Please select a valid file type (images, icons, or PDFs)";
pub const STATUS_CONVERTED: &str = "File converted successfully!";
pub const STATUS_FILE_COPIED: &str = "Base64 string copied to clipboard!";
pub const STATUS_DOWNLOADED: &str = "File downloaded successfully!";
pub const STATUS_DOWNLOAD_FAILED: &str = "Failed to download file";
pub const STATUS_OPEN_FAILED: &str = "Failed to open the selected file";

/// 状态消息在UI上的呈现：(文本, 是否错误)
pub fn status_view(message: Option<&StatusMessage>) -> (String, bool) {
    match message {
        Some(m) => (m.text.clone(), m.is_error()),
        None => (String::new(), false),
    }
}
