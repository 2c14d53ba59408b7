//! Base64转换工具库
//!
//! 提供Unicode安全的文本Base64编解码、文件分类校验、文件到data URL的异步转换，
//! 以及供Slint界面绑定的面板状态（MVVM）

pub mod config;
pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use config::{AppConfig, ConfigError};
pub use model::codec::{decode_text, encode_text, CodecError};
pub use model::converter::{convert_file, EncodingResult, FileReadError};
pub use model::file_info::{FileInfo, SelectedFile};
pub use model::file_kind::{classify, format_size, is_accepted, FileCategory};
pub use utils::clipboard::{ClipboardWriter, SystemClipboard, WithFallback};
pub use utils::fs::{DialogDownloader, DirectoryDownloader, FileDownloader};
