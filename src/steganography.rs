//! # 隐写核心模块
//!
//! 编码：把信息的比特组循环平铺到图像的全部槽中。
//! 解码：读出全部槽的低位，拼接为比特序列后还原为文本，
//! 再通过重复单元检测得到原始信息。

use crate::bit_codec::{BitBuffer, BitsPerSlot, bits_to_text, text_to_bits};
use crate::bit_plane::PixelBitPlane;
use crate::constants::NO_PATTERN_FOUND;
use crate::pattern::shortest_repeating_unit;
use log::{debug, warn};
use std::fmt;

/// 第 `slot_offset` 个槽应写入的比特组序号。
///
/// 这是一个纯函数，因此任意一段槽都可以独立计算，不依赖遍历状态。
#[inline]
pub fn target_bit_group(slot_offset: usize, num_groups: usize) -> usize {
    slot_offset % num_groups
}

/// 图像在给定位深下可承载的比特数。
pub fn capacity_bits(plane: &PixelBitPlane, bits: BitsPerSlot) -> usize {
    plane.slot_count() * bits.get() as usize
}

/// 一次编码的统计信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    pub slots_written: usize,
    pub message_bits: usize,
    pub capacity_bits: usize,
}

impl EncodeSummary {
    /// 信息是否超出了图像容量。超出时编码仍会继续，只是无法完整保存一次信息。
    pub fn exceeds_capacity(&self) -> bool {
        self.message_bits > self.capacity_bits
    }

    /// 图像中完整写入信息的次数。
    pub fn whole_tiles(&self) -> usize {
        self.capacity_bits.checked_div(self.message_bits).unwrap_or(0)
    }
}

/// 将 `message` 循环平铺写入图像的全部槽，原地修改图像。
///
/// 保存结果由调用方负责。信息超出容量时只记录警告，不会中止。
pub fn encode(plane: &mut PixelBitPlane, message: &str, bits: BitsPerSlot) -> EncodeSummary {
    let groups = text_to_bits(message, bits);
    let summary = EncodeSummary {
        slots_written: plane.slot_count(),
        message_bits: groups.bit_len(),
        capacity_bits: capacity_bits(plane, bits),
    };

    if summary.exceeds_capacity() {
        warn!(
            "message needs {} bits but the image only holds {}; only its beginning will be stored",
            summary.message_bits, summary.capacity_bits
        );
    }
    debug!(
        "encoding {} groups of {} bit(s) into {} slots ({} whole tiles)",
        groups.len(),
        bits,
        summary.slots_written,
        summary.whole_tiles()
    );

    let pattern = groups.as_slice();
    for offset in 0..summary.slots_written {
        if let Some(slot) = plane.address(offset) {
            let group = pattern[target_bit_group(offset, pattern.len())];
            plane.write_low_bits(slot, bits, group);
        }
    }

    summary
}

/// 读取全部槽的低位，还原出完整的 (平铺的) 文本。
pub fn decode_raw(plane: &PixelBitPlane, bits: BitsPerSlot) -> String {
    let mut buffer = BitBuffer::with_capacity(capacity_bits(plane, bits));
    plane
        .slots()
        .for_each(|slot| buffer.push_group(plane.read_low_bits(slot, bits), bits));
    buffer.truncate_to_bytes();

    debug!(
        "read {} bits ({} bytes) from {} slots",
        buffer.len(),
        buffer.len() / 8,
        plane.slot_count()
    );

    bits_to_text(&buffer)
}

/// 解码结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Message(String),
    /// 文本中没有找到重复单元。这不是错误，比特层面的解码总能成功。
    NoRepeatingPattern,
}

impl Decoded {
    pub fn message(&self) -> Option<&str> {
        match self {
            Decoded::Message(message) => Some(message),
            Decoded::NoRepeatingPattern => None,
        }
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Message(message) => f.write_str(message),
            Decoded::NoRepeatingPattern => f.write_str(NO_PATTERN_FOUND),
        }
    }
}

/// 解码图像中隐藏的信息。
///
/// `raw` 为 `true` 时返回完整的解码文本 (包含全部重复与尾部残片)，
/// 否则返回其中最短的重复单元。
pub fn decode(plane: &PixelBitPlane, bits: BitsPerSlot, raw: bool) -> Decoded {
    let text = decode_raw(plane, bits);
    if raw {
        return Decoded::Message(text);
    }

    match shortest_repeating_unit(&text) {
        Some(unit) => Decoded::Message(unit.to_string()),
        None => Decoded::NoRepeatingPattern,
    }
}
