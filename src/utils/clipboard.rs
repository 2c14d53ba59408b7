//! Clipboard  cross-platform clipboard helpers
//!
//! 通过 [`ClipboardWriter`] 抽象写剪贴板，方便在测试中替换为假实现

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Clip(String),
}

/// 写入文本到剪贴板的能力
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<W: ClipboardWriter + ?Sized> ClipboardWriter for &mut W {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// 系统剪贴板（copypasta）
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        copy_to_clipboard(text)
    }
}

/// 主通道失败时改用备用通道
#[derive(Debug)]
pub struct WithFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> WithFallback<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ClipboardWriter, F: ClipboardWriter> ClipboardWriter for WithFallback<P, F> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!("系统剪贴板不可用，改用备用方式: {}", e);
                self.fallback.write_text(text)
            }
        }
    }
}

/// 将文本复制到系统剪贴板
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::Clip(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        fail: bool,
        written: Vec<String>,
    }

    impl ClipboardWriter for Recorder {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Clip("不可用".into()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_primary_success_skips_fallback() {
        let mut primary = Recorder::default();
        let mut fallback = Recorder::default();
        let mut writer = WithFallback::new(&mut primary, &mut fallback);

        writer.write_text("QUJD").expect("复制应该成功");

        assert_eq!(primary.written, vec!["QUJD".to_string()]);
        assert!(fallback.written.is_empty());
    }

    #[test]
    fn test_primary_failure_uses_fallback() {
        let mut primary = Recorder { fail: true, ..Default::default() };
        let mut fallback = Recorder::default();
        let mut writer = WithFallback::new(&mut primary, &mut fallback);

        writer.write_text("🚀 Unicode").expect("备用方式应该成功");

        assert!(primary.written.is_empty());
        assert_eq!(fallback.written, vec!["🚀 Unicode".to_string()]);
    }

    #[test]
    fn test_both_failing_reports_fallback_error() {
        let mut writer = WithFallback::new(
            Recorder { fail: true, ..Default::default() },
            Recorder { fail: true, ..Default::default() },
        );
        let err = writer.write_text("x").unwrap_err();
        assert_eq!(err.to_string(), "clipboard error: 不可用");
    }
}
