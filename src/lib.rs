//! # lsb_tile 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：文本会被转换为比特组，
//! 循环平铺写入图像每个通道的最低有效位，解码时再通过重复单元检测还原原始信息。

pub mod bit_codec;
pub mod bit_plane;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod logging;
pub mod pattern;
pub mod steganography;
