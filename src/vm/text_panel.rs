//! 文本面板：输入 -> Base64 编码/解码 -> 输出

use crate::model::codec::{decode_text, encode_text};
use crate::utils::clipboard::ClipboardWriter;
use crate::vm::bridge::*;
use crate::vm::status::{StatusMessage, StatusSlot, StatusTicket};

#[derive(Debug, Default)]
pub struct TextPanel {
    pub input: String,
    pub output: String,
    pub status: StatusSlot,
}

impl TextPanel {
    pub fn encode(&mut self) -> StatusTicket {
        if self.input.trim().is_empty() {
            return self.status.show(StatusMessage::error(STATUS_ENTER_TEXT_TO_ENCODE));
        }

        self.output = encode_text(&self.input);
        tracing::info!("文本编码完成，输入 {} 字节，输出 {} 字符", self.input.len(), self.output.len());
        self.status.show(StatusMessage::success(STATUS_ENCODED))
    }

    pub fn decode(&mut self) -> StatusTicket {
        if self.input.trim().is_empty() {
            return self.status.show(StatusMessage::error(STATUS_ENTER_TEXT_TO_DECODE));
        }

        match decode_text(&self.input) {
            Ok(text) => {
                self.output = text;
                tracing::info!("文本解码完成，输出 {} 字节", self.output.len());
                self.status.show(StatusMessage::success(STATUS_DECODED))
            }
            Err(e) => {
                tracing::error!("文本解码失败: {}", e);
                self.output.clear();
                self.status.show(StatusMessage::error(e.to_string()))
            }
        }
    }

    /// 输出为空时不做任何事
    pub fn copy(&mut self, clipboard: &mut dyn ClipboardWriter) -> Option<StatusTicket> {
        if self.output.is_empty() {
            return None;
        }

        let message = match clipboard.write_text(&self.output) {
            Ok(()) => StatusMessage::success(STATUS_COPIED),
            Err(e) => {
                tracing::error!("复制失败: {}", e);
                StatusMessage::error(STATUS_COPY_FAILED)
            }
        };
        Some(self.status.show(message))
    }
}
