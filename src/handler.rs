//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责校验参数、协调图像 I/O、调用核心隐写算法以及向用户报告结果。
//! 所有失败情况都在写出任何文件之前被检测到。

use crate::bit_plane::PixelBitPlane;
use crate::cli::{DecodeArgs, EncodeArgs};
use crate::error::StegoError;
use crate::steganography::{Decoded, EncodeSummary, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

fn ensure_input_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(StegoError::InputNotFound(path.to_path_buf()).into());
    }
    Ok(())
}

fn open_plane(path: &Path) -> Result<PixelBitPlane> {
    PixelBitPlane::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 读取图像、把文本循环写入全部槽、保存结果，并重新解码一次以向用户确认。
/// 文本超出容量时只打印警告，编码照常进行。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 没有提供要隐藏的文本 (`StegoError::MissingMessage`)，此时不会进行任何 I/O。
/// * 输入文件不存在 (`StegoError::InputNotFound`)。
/// * 无法读取输入图像或无法写入输出图像。
pub fn handle_encode(args: EncodeArgs) -> Result<EncodeSummary> {
    let message = args.string.ok_or(StegoError::MissingMessage)?;
    ensure_input_exists(&args.path)?;

    let mut plane = open_plane(&args.path)?;
    let summary = encode(&mut plane, &message, args.bits);

    if summary.exceeds_capacity() {
        println!(
            "{} The message needs {} bits, but the image can only hold {}.",
            "Warning:".yellow().bold(),
            summary.message_bits.to_string().red().bold(),
            summary.capacity_bits.to_string().green().bold()
        );
    }

    plane.save(&args.output).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    let verification = decode(&plane, args.bits, args.raw);
    println!("'{}' was encoded successfully", verification);
    println!(
        "The image has been saved: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(summary)
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 读取图像并输出解码结果。找不到重复单元时输出提示文本，这并不视为错误。
///
/// # Errors
///
/// * 输入文件不存在 (`StegoError::InputNotFound`)。
/// * 无法读取输入图像。
pub fn handle_decode(args: DecodeArgs) -> Result<Decoded> {
    ensure_input_exists(&args.path)?;

    let plane = open_plane(&args.path)?;
    let decoded = decode(&plane, args.bits, args.raw);

    match &decoded {
        Decoded::Message(message) => println!("{message}"),
        Decoded::NoRepeatingPattern => println!("{}", decoded.to_string().yellow()),
    }

    Ok(decoded)
}
