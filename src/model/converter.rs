//! 文件转换：异步读取整个文件并生成 Base64 data URL
//!
//! 读取在后台线程中完成，结果通过 oneshot 通道送回，调用线程（UI 事件循环）不会被阻塞。
//! 不做重试、不设超时、不支持取消。

use std::{fs, io, thread};

use base64::{engine::general_purpose, Engine as _};
use futures::channel::oneshot;
use serde::Serialize;
use thiserror::Error;

use crate::model::file_info::SelectedFile;

/// 媒体类型为空时使用的 MIME
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// 读取失败：对外只暴露固定的提示，底层原因保留在 `source()` 中
#[derive(Error, Debug)]
#[error("Failed to read file")]
pub struct FileReadError {
    #[source]
    source: io::Error,
}

impl FileReadError {
    fn new(source: io::Error) -> Self {
        Self { source }
    }
}

/// 一次读取得到的两种结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodingResult {
    /// 不带 `data:<mime>;base64,` 前缀的载荷
    pub base64_string: String,
    pub data_url: String,
}

/// data URL 第一个逗号之后的部分
pub fn split_data_url(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, payload)| payload)
}

fn build_data_url(media_type: &str, bytes: &[u8]) -> String {
    let mime = if media_type.is_empty() {
        FALLBACK_MIME
    } else {
        media_type
    };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

/// 读取文件并转换为 data URL
///
/// 调用方负责事先校验（见 [`crate::model::file_kind::is_accepted`]），这里不再重复校验。
pub async fn convert_file(file: &SelectedFile) -> Result<EncodingResult, FileReadError> {
    let path = file.path.clone();
    let (tx, rx) = oneshot::channel();

    thread::Builder::new()
        .name("file-reader".into())
        .spawn(move || {
            // 接收端已被丢弃时结果无人关心
            let _ = tx.send(fs::read(&path));
        })
        .map_err(FileReadError::new)?;

    let bytes = match rx.await {
        Ok(read) => read.map_err(FileReadError::new)?,
        Err(canceled) => {
            return Err(FileReadError::new(io::Error::new(
                io::ErrorKind::Interrupted,
                canceled,
            )))
        }
    };

    let data_url = build_data_url(&file.info.media_type, &bytes);
    let base64_string = split_data_url(&data_url).unwrap_or_default().to_string();
    Ok(EncodingResult {
        base64_string,
        data_url,
    })
}
