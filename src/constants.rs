use crate::bit_codec::BitsPerSlot;

/// 未指定 `--path` 时读取的默认输入图像。
pub const DEFAULT_IMAGE_PATH: &str = "img.png";

/// 编码结果写入的默认输出图像 (位于当前工作目录)。
pub const DEFAULT_OUTPUT_PATH: &str = "out.png";

/// 每个通道默认使用的低位数。
pub const DEFAULT_BITS_PER_SLOT: BitsPerSlot = BitsPerSlot::One;

/// 图像统一转换为 RGB，每个像素恰好 3 个通道。
pub const CHANNELS_PER_PIXEL: usize = 3;

/// 第 0 行与第 0 列不参与隐写。
/// 编码与解码必须跳过相同的边缘，否则无法恢复信息。
pub const SKIPPED_EDGE: u32 = 1;

/// 解码时未找到重复单元所返回的提示文本。
pub const NO_PATTERN_FOUND: &str = "No repeating string found.";
