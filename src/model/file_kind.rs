//! 文件分类与校验：仅依据声明的媒体类型与文件名扩展名

use std::fmt;

use crate::model::file_info::FileInfo;

/// 允许转换的媒体类型
pub const SUPPORTED_MEDIA_TYPES: [&str; 8] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/x-icon",
    "application/pdf",
];

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// 文件分类标签（不是身份，每次按需重新计算）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Pdf,
    SvgIcon,
    Icon,
    File,
}

impl FileCategory {
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Image => "Image",
            FileCategory::Pdf => "PDF",
            FileCategory::SvgIcon => "SVG Icon",
            FileCategory::Icon => "Icon",
            FileCategory::File => "File",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn has_extension(name: &str, ext: &str) -> bool {
    name.to_lowercase().ends_with(ext)
}

/// 按顺序匹配，首个命中即返回
///
/// 注意 `image/svg+xml` 本身以 `image/` 开头，会先落入 [`FileCategory::Image`]，
/// 只有依靠扩展名回退时才会得到 [`FileCategory::SvgIcon`]。
pub fn classify(info: &FileInfo) -> FileCategory {
    let media_type = info.media_type.to_lowercase();
    if media_type.starts_with("image/") {
        return FileCategory::Image;
    }
    if media_type == "application/pdf" {
        return FileCategory::Pdf;
    }
    if media_type == "image/svg+xml" || has_extension(&info.name, ".svg") {
        return FileCategory::SvgIcon;
    }
    if media_type == "image/x-icon" || has_extension(&info.name, ".ico") {
        return FileCategory::Icon;
    }
    FileCategory::File
}

/// 是否为可接受的输入文件
///
/// `.svg` / `.ico` 扩展名回退：部分平台对图标、矢量文件报告空的或通用的媒体类型
pub fn is_accepted(info: &FileInfo) -> bool {
    let media_type = info.media_type.to_lowercase();
    SUPPORTED_MEDIA_TYPES.contains(&media_type.as_str())
        || has_extension(&info.name, ".svg")
        || has_extension(&info.name, ".ico")
}

/// 人类可读的文件大小（1024 进制，两位小数后去掉多余的 0）
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut scale: u64 = 1;
    while index + 1 < SIZE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        index += 1;
    }

    let fixed = format!("{:.2}", bytes as f64 / scale as f64);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[index])
}

/// 根据文件名扩展名推断媒体类型，未知扩展名返回空字符串
pub fn guess_media_type(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    let ext = match lower.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return "",
    };
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "zip" => "application/zip",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, media_type: &str) -> FileInfo {
        FileInfo {
            name: name.to_string(),
            size: 0,
            media_type: media_type.to_string(),
            last_modified: None,
        }
    }

    #[test]
    fn test_classify_image_by_media_type() {
        assert_eq!(classify(&info("whatever.bin", "image/png")), FileCategory::Image);
        assert_eq!(classify(&info("photo.JPG", "IMAGE/JPEG")), FileCategory::Image);
        // image/svg+xml 先命中 image/ 前缀
        assert_eq!(classify(&info("logo.svg", "image/svg+xml")), FileCategory::Image);
    }

    #[test]
    fn test_classify_pdf() {
        assert_eq!(classify(&info("report.pdf", "application/pdf")), FileCategory::Pdf);
    }

    #[test]
    fn test_classify_by_extension_fallback() {
        assert_eq!(classify(&info("icon.svg", "")), FileCategory::SvgIcon);
        assert_eq!(classify(&info("ICON.SVG", "application/octet-stream")), FileCategory::SvgIcon);
        assert_eq!(classify(&info("favicon.ico", "")), FileCategory::Icon);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(&info("report.docx", "")), FileCategory::File);
        assert_eq!(classify(&info("notes.txt", "text/plain")), FileCategory::File);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(FileCategory::Image.to_string(), "Image");
        assert_eq!(FileCategory::Pdf.to_string(), "PDF");
        assert_eq!(FileCategory::SvgIcon.to_string(), "SVG Icon");
        assert_eq!(FileCategory::Icon.to_string(), "Icon");
        assert_eq!(FileCategory::File.to_string(), "File");
    }

    #[test]
    fn test_is_accepted() {
        assert!(is_accepted(&info("a.png", "image/png")));
        assert!(is_accepted(&info("a.pdf", "application/pdf")));
        assert!(is_accepted(&info("a.jpg", "image/JPG")));
        assert!(is_accepted(&info("vector.SVG", "")));
        assert!(is_accepted(&info("favicon.ico", "application/octet-stream")));
        assert!(!is_accepted(&info("notes.txt", "text/plain")));
        assert!(!is_accepted(&info("image.bmp", "image/bmp")));
        assert!(!is_accepted(&info("svg", "")));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1300), "1.27 KB");
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024 / 2), "2.5 GB");
    }

    #[test]
    fn test_format_size_clamps_to_gb() {
        assert_eq!(format_size(1024u64.pow(4)), "1024 GB");
    }

    #[test]
    fn test_guess_media_type() {
        assert_eq!(guess_media_type("photo.JPEG"), "image/jpeg");
        assert_eq!(guess_media_type("icon.svg"), "image/svg+xml");
        assert_eq!(guess_media_type("favicon.ico"), "image/x-icon");
        assert_eq!(guess_media_type("doc.pdf"), "application/pdf");
        assert_eq!(guess_media_type("archive.unknownext"), "");
        assert_eq!(guess_media_type("README"), "");
    }
}
