//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::bit_codec::BitsPerSlot;
use crate::constants::{DEFAULT_BITS_PER_SLOT, DEFAULT_IMAGE_PATH, DEFAULT_OUTPUT_PATH};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，把文本反复写满无损格式图像 (如 PNG) 的每个颜色通道。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具。文本被转换为比特后循环写入图像每个颜色通道的低位，解码时通过重复检测还原原始文本，无需保存长度信息。"
)]
pub struct Cli {
    /// 输出调试日志 (也可通过 RUST_LOG 环境变量控制)。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (编码) 和 decode (解码)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 将文本反复写入图像，结果默认保存为当前目录下的 out.png。
    Encode(EncodeArgs),

    /// 从图像中读出隐藏的文本，默认只输出一次重复单元。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 输入图像文件路径。
    #[arg(short, long, default_value = DEFAULT_IMAGE_PATH)]
    pub path: PathBuf,

    /// 要隐藏的文本。
    #[arg(short, long)]
    pub string: Option<String>,

    /// 每个颜色通道使用的低位数 (1, 2, 4 或 8)。
    #[arg(short, long, default_value_t = DEFAULT_BITS_PER_SLOT)]
    pub bits: BitsPerSlot,

    /// 编码结果的保存路径。
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// 校验时输出完整的解码数据，而不是单个重复单元。
    #[arg(short, long)]
    pub raw: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏文本的图像文件路径。
    #[arg(short, long, default_value = DEFAULT_IMAGE_PATH)]
    pub path: PathBuf,

    /// 每个颜色通道使用的低位数 (1, 2, 4 或 8)，必须与编码时一致。
    #[arg(short, long, default_value_t = DEFAULT_BITS_PER_SLOT)]
    pub bits: BitsPerSlot,

    /// 输出完整的解码数据，而不是单个重复单元。
    #[arg(short, long)]
    pub raw: bool,
}
