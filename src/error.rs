//! # 错误类型模块
//!
//! 隐写库自身的错误。图像读写失败由 `image::ImageError` 表示，
//! 在命令处理层通过 `anyhow` 附加上下文。

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StegoError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 每个通道的位数只能是 1、2、4 或 8。
    #[error("unsupported bits per channel: {0} (expected 1, 2, 4 or 8)")]
    UnsupportedBitsPerSlot(u8),

    #[error("invalid bits per channel: '{0}' (expected 1, 2, 4 or 8)")]
    InvalidBitsPerSlot(String),

    /// `encode` 模式下没有提供要隐藏的文本。
    #[error("The 'encode' mode needs a string as message. Please use the -s option to provide a string.")]
    MissingMessage,

    #[error("The file is not found: {}. Please fix or provide a path with the -p option.", .0.display())]
    InputNotFound(PathBuf),
}

impl StegoError {
    /// 是否属于应直接提示用户、且不以错误状态退出的情况。
    pub fn is_user_facing(&self) -> bool {
        matches!(self, StegoError::MissingMessage | StegoError::InputNotFound(_))
    }
}
