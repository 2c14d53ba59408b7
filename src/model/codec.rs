//! 文本编解码：Unicode 文本 <-> 标准 Base64
//!
//! 先显式转换为 UTF-8 字节序列，再映射到标准字母表（`A–Z a–z 0–9 + /`，`=` 填充）。

use base64::alphabet::STANDARD;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use thiserror::Error;

/// 标准字母表，填充必须规范；末字符多余的位不要求为 0（与浏览器 `atob` 一致）
const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// 输入不是合法的 Base64，或解码结果不是合法的 UTF-8
    #[error("Failed to decode base64: {0}")]
    Decode(String),
}

/// 将任意 Unicode 文本编码为 Base64
///
/// `&str` 必然是合法的 UTF-8，因此编码不会失败
pub fn encode_text(text: &str) -> String {
    BASE64_ENGINE.encode(text.as_bytes())
}

/// 将 Base64 文本解码回 Unicode 字符串
pub fn decode_text(base64_text: &str) -> Result<String, CodecError> {
    let bytes = BASE64_ENGINE
        .decode(base64_text)
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_unicode() {
        let samples = [
            "",
            "Hello, World!",
            "Crème brûlée à la carte",
            "🚀 Base64 转换工具 ✨",
            "日本語のテキスト",
            // e + 组合重音符
            "e\u{0301}\u{0323}",
            "line1\nline2\t\0end",
        ];

        for s in samples {
            let encoded = encode_text(s);
            assert_eq!(decode_text(&encoded).as_deref(), Ok(s), "往返失败: {:?}", s);
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_text(""), "");
        assert_eq!(decode_text("").as_deref(), Ok(""));
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode_text("Man"), "TWFu");
        assert_eq!(encode_text("Ma"), "TWE=");
        assert_eq!(encode_text("M"), "TQ==");
        // UTF-8 多字节：é = C3 A9
        assert_eq!(encode_text("é"), "w6k=");
        assert_eq!(encode_text("😀"), "8J+YgA==");
    }

    #[test]
    fn test_output_uses_standard_alphabet_and_padding() {
        let encoded = encode_text("??>>??>>~~");
        assert_eq!(encoded.len() % 4, 0);
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
        assert!(encoded.contains('/') || encoded.contains('+'));
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        for bad in ["SGVs*G8=", "SGVs bG8=", "SGVs-G8=", "SGVs_G8=", "你好"] {
            let err = decode_text(bad).unwrap_err();
            assert!(
                err.to_string().starts_with("Failed to decode base64: "),
                "错误信息前缀不正确: {}",
                err
            );
        }
    }

    #[test]
    fn test_decode_rejects_bad_length_and_padding() {
        assert!(decode_text("SGVsbG8").is_err());
        assert!(decode_text("A").is_err());
        assert!(decode_text("SG=VsbG8").is_err());
        assert!(decode_text("TQ=").is_err());
    }

    #[test]
    fn test_decode_accepts_nonzero_trailing_bits() {
        assert_eq!(decode_text("TR==").as_deref(), Ok("M"));
        assert_eq!(decode_text("TWF=").as_deref(), Ok("Ma"));
        // 填充仍然必须完整
        assert!(decode_text("TR").is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        // 0xFF 0xFE 不是合法的 UTF-8
        let err = decode_text("//4=").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode base64: "));
    }

    #[test]
    fn test_functions_are_repeatable() {
        let s = "重复调用";
        assert_eq!(encode_text(s), encode_text(s));
        let encoded = encode_text(s);
        assert_eq!(decode_text(&encoded), decode_text(&encoded));
    }
}
