//! IO helper: 下载（保存 Base64 文本到本地文件）

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// 下载文件名的默认后缀
pub const DEFAULT_DOWNLOAD_SUFFIX: &str = "_base64.txt";

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("写入文件失败: {0}")]
    Io(#[from] io::Error),
}

/// 保存文本到本地文件的能力
pub trait FileDownloader {
    /// 返回实际写入的路径；用户取消时返回 `None`
    fn save_text(&mut self, suggested_name: &str, content: &str) -> Result<Option<PathBuf>, DownloadError>;
}

impl<D: FileDownloader + ?Sized> FileDownloader for &mut D {
    fn save_text(&mut self, suggested_name: &str, content: &str) -> Result<Option<PathBuf>, DownloadError> {
        (**self).save_text(suggested_name, content)
    }
}

/// 弹出原生保存对话框
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogDownloader;

impl FileDownloader for DialogDownloader {
    fn save_text(&mut self, suggested_name: &str, content: &str) -> Result<Option<PathBuf>, DownloadError> {
        use rfd::FileDialog;

        let Some(path) = FileDialog::new()
            .add_filter("文本文件", &["txt"])
            .set_file_name(suggested_name)
            .set_title("保存 Base64 文本")
            .save_file()
        else {
            tracing::info!("用户取消了保存");
            return Ok(None);
        };

        write_text_file(&path, content)?;
        Ok(Some(path))
    }
}

/// 直接写入固定目录（无界面场景）
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileDownloader for DirectoryDownloader {
    fn save_text(&mut self, suggested_name: &str, content: &str) -> Result<Option<PathBuf>, DownloadError> {
        let path = self.dir.join(suggested_name);
        write_text_file(&path, content)?;
        Ok(Some(path))
    }
}

/// 写文本文件，必要时创建父目录
pub fn write_text_file(path: &Path, content: &str) -> Result<(), DownloadError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

/// 去掉最后一个扩展名再追加后缀：`photo.png` -> `photo_base64.txt`
pub fn download_file_name(original: &str, suffix: &str) -> String {
    let stem = match original.rfind('.') {
        Some(dot) if !original[dot + 1..].is_empty() && !original[dot + 1..].contains('/') => &original[..dot],
        _ => original,
    };
    format!("{}{}", stem, suffix)
}
