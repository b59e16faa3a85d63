//! # 像素位平面模块
//!
//! 把 RGB 图像的通道值抽象为一串线性排列的 8 位槽 (slot)。
//!
//! 槽按行优先顺序访问：从第 1 行开始 (跳过第 0 行)，每行从第 1 列开始
//! (跳过第 0 列)，同一像素内按 R、G、B 的顺序。
//! 写入时只替换低 `bits_per_slot` 位，高位保持不变。

use crate::bit_codec::BitsPerSlot;
use crate::constants::{CHANNELS_PER_PIXEL, SKIPPED_EDGE};
use image::{ImageResult, RgbImage};
use std::path::Path;

/// 单个槽的坐标：像素位置与通道序号 (0 = R, 1 = G, 2 = B)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotAddress {
    pub x: u32,
    pub y: u32,
    pub channel: usize,
}

#[derive(Debug, Clone)]
pub struct PixelBitPlane {
    image: RgbImage,
}

impl PixelBitPlane {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// 读取图像文件，并统一转换为 3 通道 RGB (丢弃 alpha 等额外通道)。
    ///
    /// # Errors
    ///
    /// 文件无法读取或格式无法识别时返回 `image::ImageError`。
    pub fn open(path: impl AsRef<Path>) -> ImageResult<Self> {
        let image = image::open(path)?.to_rgb8();
        Ok(Self::new(image))
    }

    /// 保存图像，格式由扩展名决定。
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.image.save(path)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 每一行可用的槽数。
    fn slots_per_row(&self) -> usize {
        self.image.width().saturating_sub(SKIPPED_EDGE) as usize * CHANNELS_PER_PIXEL
    }

    /// 可用槽的总数：(宽 - 1) × (高 - 1) × 3。
    pub fn slot_count(&self) -> usize {
        self.slots_per_row() * self.image.height().saturating_sub(SKIPPED_EDGE) as usize
    }

    /// 第 `offset` 个槽的坐标。超出容量时返回 `None`。
    pub fn address(&self, offset: usize) -> Option<SlotAddress> {
        if offset >= self.slot_count() {
            return None;
        }
        let per_row = self.slots_per_row();
        let row = offset / per_row;
        let within = offset % per_row;

        Some(SlotAddress {
            x: (within / CHANNELS_PER_PIXEL) as u32 + SKIPPED_EDGE,
            y: row as u32 + SKIPPED_EDGE,
            channel: within % CHANNELS_PER_PIXEL,
        })
    }

    /// 按访问顺序遍历全部槽的坐标。
    pub fn slots(&self) -> impl Iterator<Item = SlotAddress> + '_ {
        (0..self.slot_count()).filter_map(|offset| self.address(offset))
    }

    pub fn slot_value(&self, address: SlotAddress) -> u8 {
        self.image.get_pixel(address.x, address.y).0[address.channel]
    }

    /// 用 `group` 的低 `bits` 位替换槽的低位，其余高位保持原值。
    pub fn write_low_bits(&mut self, address: SlotAddress, bits: BitsPerSlot, group: u8) {
        let mask = bits.mask();
        let value = &mut self.image.get_pixel_mut(address.x, address.y).0[address.channel];
        *value = (*value & !mask) | (group & mask);
    }

    /// 槽的低 `bits` 位。
    pub fn read_low_bits(&self, address: SlotAddress, bits: BitsPerSlot) -> u8 {
        self.slot_value(address) & bits.mask()
    }
}

impl From<RgbImage> for PixelBitPlane {
    fn from(image: RgbImage) -> Self {
        Self::new(image)
    }
}
