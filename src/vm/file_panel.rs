//! 文件面板：选择 -> 校验 -> 异步转换 -> 复制/下载

use std::path::PathBuf;

use crate::model::converter::{EncodingResult, FileReadError};
use crate::model::file_info::SelectedFile;
use crate::model::file_kind::{classify, format_size, is_accepted};
use crate::utils::clipboard::ClipboardWriter;
use crate::utils::fs::{download_file_name, DownloadError, FileDownloader, DEFAULT_DOWNLOAD_SUFFIX};
use crate::vm::bridge::*;
use crate::vm::status::{StatusMessage, StatusSlot, StatusTicket};

#[derive(Debug)]
pub struct FilePanel {
    pub selected: Option<SelectedFile>,
    pub file_info: String,
    pub output: String,
    pub loading: bool,
    pub status: StatusSlot,
    download_suffix: String,
}

impl Default for FilePanel {
    fn default() -> Self {
        Self::new(DEFAULT_DOWNLOAD_SUFFIX)
    }
}

impl FilePanel {
    pub fn new(download_suffix: impl Into<String>) -> Self {
        Self {
            selected: None,
            file_info: FILE_INFO_NONE.to_string(),
            output: String::new(),
            loading: false,
            status: StatusSlot::default(),
            download_suffix: download_suffix.into(),
        }
    }

    /// 处理文件选择；不被接受的文件在入口处直接拦截
    pub fn select(&mut self, file: Option<SelectedFile>) -> Option<StatusTicket> {
        let Some(file) = file else {
            self.file_info = FILE_INFO_NONE.to_string();
            self.selected = None;
            return None;
        };

        if !is_accepted(&file.info) {
            tracing::warn!("拒绝不支持的文件: {} ({})", file.info.name, file.info.media_type);
            self.selected = None;
            return Some(self.status.show(StatusMessage::error(STATUS_INVALID_FILE)));
        }

        self.file_info = format!(
            "{}: {} ({})",
            classify(&file.info),
            file.info.name,
            format_size(file.info.size)
        );
        tracing::info!(
            "已选择文件: {}",
            serde_json::to_string(&file.info).unwrap_or_else(|_| file.info.name.clone())
        );
        self.selected = Some(file);
        None
    }

    /// 选中的路径无法读取元数据
    pub fn open_failed(&mut self, err: &std::io::Error) -> StatusTicket {
        tracing::error!("打开文件失败: {}", err);
        self.selected = None;
        self.file_info = FILE_INFO_NONE.to_string();
        self.status.show(StatusMessage::error(STATUS_OPEN_FAILED))
    }

    /// 开始转换：没有选中文件或已在转换中时返回 `None`
    pub fn begin_convert(&mut self) -> Option<SelectedFile> {
        if self.loading {
            return None;
        }
        let file = self.selected.clone()?;
        self.loading = true;
        Some(file)
    }

    pub fn finish_convert(&mut self, result: Result<EncodingResult, FileReadError>) -> StatusTicket {
        self.loading = false;
        match result {
            Ok(result) => {
                tracing::info!("文件转换完成，data URL 长度: {}", result.data_url.len());
                self.output = result.data_url;
                self.status.show(StatusMessage::success(STATUS_CONVERTED))
            }
            Err(e) => {
                match std::error::Error::source(&e) {
                    Some(cause) => tracing::error!("文件转换失败: {}: {}", e, cause),
                    None => tracing::error!("文件转换失败: {}", e),
                }
                self.output.clear();
                self.status.show(StatusMessage::error(e.to_string()))
            }
        }
    }

    pub fn copy(&mut self, clipboard: &mut dyn ClipboardWriter) -> Option<StatusTicket> {
        if self.output.is_empty() || self.loading {
            return None;
        }

        let message = match clipboard.write_text(&self.output) {
            Ok(()) => StatusMessage::success(STATUS_FILE_COPIED),
            Err(e) => {
                tracing::error!("复制失败: {}", e);
                StatusMessage::error(STATUS_COPY_FAILED)
            }
        };
        Some(self.status.show(message))
    }

    /// 待下载的 (建议文件名, 内容)；没有输出或仍在转换时返回 `None`
    ///
    /// 与 [`Self::download_finished`] 分开，便于在弹出模态保存对话框期间不持有面板借用
    pub fn download_request(&self) -> Option<(String, String)> {
        if self.output.is_empty() || self.loading {
            return None;
        }
        let file = self.selected.as_ref()?;
        let suggested = download_file_name(&file.info.name, &self.download_suffix);
        Some((suggested, self.output.clone()))
    }

    /// 用户取消保存时不显示任何消息
    pub fn download_finished(&mut self, result: Result<Option<PathBuf>, DownloadError>) -> Option<StatusTicket> {
        match result {
            Ok(Some(path)) => {
                tracing::info!("已保存到: {}", path.display());
                Some(self.status.show(StatusMessage::success(STATUS_DOWNLOADED)))
            }
            Ok(None) => None,
            Err(e) => {
                tracing::error!("保存失败: {}", e);
                Some(self.status.show(StatusMessage::error(STATUS_DOWNLOAD_FAILED)))
            }
        }
    }

    pub fn download(&mut self, downloader: &mut dyn FileDownloader) -> Option<StatusTicket> {
        let (suggested, content) = self.download_request()?;
        let result = downloader.save_text(&suggested, &content);
        self.download_finished(result)
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.file_info = FILE_INFO_NONE.to_string();
        self.output.clear();
    }
}
