//! 文件描述：名称、大小、声明的媒体类型与修改时间

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Serialize, Serializer};

use crate::model::file_kind::guess_media_type;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    /// 声明的媒体类型；未知时为空字符串
    #[serde(rename = "type")]
    pub media_type: String,
    /// 序列化为 Unix 毫秒时间戳
    #[serde(serialize_with = "serialize_epoch_millis")]
    pub last_modified: Option<SystemTime>,
}

fn serialize_epoch_millis<S: Serializer>(time: &Option<SystemTime>, serializer: S) -> Result<S::Ok, S::Error> {
    let millis = time
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64);
    millis.serialize(serializer)
}

impl FileInfo {
    /// 读取元数据并按扩展名推断媒体类型
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self {
            media_type: guess_media_type(&name).to_string(),
            name,
            size: metadata.len(),
            last_modified: metadata.modified().ok(),
        })
    }
}

/// 用户选中的文件句柄：路径 + 描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub info: FileInfo,
}

impl SelectedFile {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let info = FileInfo::from_path(&path)?;
        Ok(Self { path, info })
    }
}
