//! # 比特编解码模块
//!
//! 负责文本与比特序列之间的相互转换。
//!
//! 文本先按 UTF-8 编码为字节，再按大端、高位在前的顺序展开为比特，
//! 最后切分成宽度为 `bits_per_slot` 的比特组，每组写入一个通道。
//! 解码时把比特重新拼接为字节，丢弃不足一字节的尾部，
//! 并按照大端整数的语义去掉前导零字节，最后宽松地解码为 UTF-8。

use crate::constants::DEFAULT_BITS_PER_SLOT;
use crate::error::StegoError;
use std::fmt;
use std::str::FromStr;

/// 每个通道用于承载数据的低位数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitsPerSlot {
    One,
    Two,
    Four,
    Eight,
}

impl BitsPerSlot {
    pub const ALL: [BitsPerSlot; 4] = [
        BitsPerSlot::One,
        BitsPerSlot::Two,
        BitsPerSlot::Four,
        BitsPerSlot::Eight,
    ];

    pub const fn get(self) -> u8 {
        match self {
            BitsPerSlot::One => 1,
            BitsPerSlot::Two => 2,
            BitsPerSlot::Four => 4,
            BitsPerSlot::Eight => 8,
        }
    }

    /// 覆盖低位数据部分的掩码，例如 2 位时为 `0b0000_0011`。
    pub const fn mask(self) -> u8 {
        u8::MAX >> (8 - self.get())
    }
}

impl Default for BitsPerSlot {
    fn default() -> Self {
        DEFAULT_BITS_PER_SLOT
    }
}

impl TryFrom<u8> for BitsPerSlot {
    type Error = StegoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BitsPerSlot::One),
            2 => Ok(BitsPerSlot::Two),
            4 => Ok(BitsPerSlot::Four),
            8 => Ok(BitsPerSlot::Eight),
            other => Err(StegoError::UnsupportedBitsPerSlot(other)),
        }
    }
}

impl FromStr for BitsPerSlot {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| StegoError::InvalidBitsPerSlot(s.to_string()))?;
        BitsPerSlot::try_from(value)
    }
}

impl fmt::Display for BitsPerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// 定宽比特组序列，每个元素的低 `width` 位有效。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGroups {
    groups: Vec<u8>,
    width: BitsPerSlot,
}

impl BitGroups {
    pub fn width(&self) -> BitsPerSlot {
        self.width
    }

    /// 比特组的数量，至少为 1。
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 全部比特组所占的比特数。
    pub fn bit_len(&self) -> usize {
        self.groups.len() * self.width.get() as usize
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.groups.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.groups
    }
}

impl fmt::Display for BitGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width.get() as usize;
        self.groups
            .iter()
            .try_for_each(|group| write!(f, "{:0width$b}", group, width = width))
    }
}

/// 将文本转换为宽度为 `width` 的比特组。
///
/// 每个字节展开为 8 个比特，高位在前；首字节中的前导零同样保留，
/// 因此任何以可打印 ASCII 开头的信息都能按字节对齐地平铺。
/// 末尾不足一组的比特在右侧补零。
///
/// 空文本被视为一个全零的比特组，这样编码空字符串时所有数据位都会被清零。
pub fn text_to_bits(text: &str, width: BitsPerSlot) -> BitGroups {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return BitGroups {
            groups: vec![0],
            width,
        };
    }

    let w = width.get() as usize;
    let total = bytes.len() * 8;
    let groups = (0..total)
        .step_by(w)
        .map(|start| {
            (start..start + w).fold(0u8, |acc, pos| {
                let bit = if pos < total {
                    (bytes[pos / 8] >> (7 - pos % 8)) & 1
                } else {
                    0
                };
                (acc << 1) | bit
            })
        })
        .collect();

    BitGroups { groups, width }
}

/// 按高位在前的顺序逐位累积的比特缓冲区。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// 缓冲区中的比特数。
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let index = self.len / 8;
            self.bytes[index] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// 追加 `value` 的低 `width` 位。
    pub fn push_group(&mut self, value: u8, width: BitsPerSlot) {
        (0..width.get())
            .rev()
            .for_each(|shift| self.push_bit((value >> shift) & 1 == 1));
    }

    /// 从末尾丢弃多余的比特，使长度成为 8 的倍数。
    pub fn truncate_to_bytes(&mut self) {
        let excess = self.len % 8;
        if excess != 0 {
            self.bytes.pop();
            self.len -= excess;
        }
    }

    /// 完整字节部分，不含末尾不足 8 位的比特。
    pub fn whole_bytes(&self) -> &[u8] {
        &self.bytes[..self.len / 8]
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buffer = BitBuffer::new();
        iter.into_iter().for_each(|bit| buffer.push_bit(bit));
        buffer
    }
}

impl fmt::Display for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.len).try_for_each(|i| {
            let bit = (self.bytes[i / 8] >> (7 - i % 8)) & 1;
            write!(f, "{bit}")
        })
    }
}

/// 将比特序列还原为文本。
///
/// 尾部不足一字节的比特会被丢弃。剩余字节按大端无符号整数解释，
/// 因此前导的零字节不会出现在结果中（以 `0x00` 开头的信息会丢失这些字节）。
/// 无效的 UTF-8 序列被直接忽略，全零或空的输入得到空字符串。
pub fn bits_to_text(bits: &BitBuffer) -> String {
    let bytes = bits.whole_bytes();
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());

    bytes[start..].utf8_chunks().map(|chunk| chunk.valid()).collect()
}
