use image::{Rgb, RgbImage};
use lsb_tile::{
    bit_codec::{BitsPerSlot, text_to_bits},
    bit_plane::{PixelBitPlane, SlotAddress},
    steganography::{Decoded, capacity_bits, decode, decode_raw, encode, target_bit_group},
};
use rand::RngCore;

/// 一个辅助函数，用于创建一个带有随机像素的位平面
fn random_plane(width: u32, height: u32) -> PixelBitPlane {
    let mut raw_pixels = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);
    let image = RgbImage::from_raw(width, height, raw_pixels).expect("buffer matches dimensions");
    PixelBitPlane::new(image)
}

/// 信息循环平铺后，完整字节部分应有的解码结果
fn tiled(message: &str, plane: &PixelBitPlane, bits: BitsPerSlot) -> String {
    let whole_bytes = capacity_bits(plane, bits) / 8;
    message.bytes().cycle().take(whole_bytes).map(char::from).collect()
}

/// 4×4 图像、每通道 1 位、信息 "ab"：27 个槽，前 16 个写入一次完整信息，其余 11 个从头回绕
#[test]
fn four_by_four_ab_wraps_after_sixteen_slots() {
    let mut plane = random_plane(4, 4);
    let original = plane.image().clone();

    let summary = encode(&mut plane, "ab", BitsPerSlot::One);
    assert_eq!(summary.slots_written, 27);
    assert_eq!(summary.message_bits, 16);
    assert_eq!(summary.capacity_bits, 27);
    assert_eq!(summary.whole_tiles(), 1);
    assert!(!summary.exceeds_capacity());

    let groups = text_to_bits("ab", BitsPerSlot::One);
    assert_eq!(plane.address(0), Some(SlotAddress { x: 1, y: 1, channel: 0 }));
    for (offset, slot) in plane.slots().enumerate() {
        let expected = groups.get(target_bit_group(offset, groups.len())).unwrap();
        assert_eq!(plane.read_low_bits(slot, BitsPerSlot::One), expected, "slot {offset}");
    }

    // 第 0 行与第 0 列保持原样
    for i in 0..4 {
        assert_eq!(plane.image().get_pixel(i, 0), original.get_pixel(i, 0));
        assert_eq!(plane.image().get_pixel(0, i), original.get_pixel(0, i));
    }
}

#[test]
fn round_trip_for_every_depth() {
    let message = "Hello, steganography!";
    for bits in BitsPerSlot::ALL {
        let mut plane = random_plane(40, 30);
        encode(&mut plane, message, bits);

        let raw = decode_raw(&plane, bits);
        assert_eq!(raw, tiled(message, &plane, bits), "bits = {bits}");
        assert!(raw.starts_with(message));

        assert_eq!(
            decode(&plane, bits, false),
            Decoded::Message(message.to_string()),
            "bits = {bits}"
        );
        assert_eq!(decode(&plane, bits, true), Decoded::Message(raw));
    }
}

#[test]
fn messages_starting_with_low_ascii_round_trip() {
    let message = "1 + 1 = 2";
    let mut plane = random_plane(20, 20);
    encode(&mut plane, message, BitsPerSlot::Two);
    assert_eq!(
        decode(&plane, BitsPerSlot::Two, false).message(),
        Some(message)
    );
}

#[test]
fn partial_final_tile_does_not_corrupt_the_first_copy() {
    // 3 × 3 × 3 = 27 个槽 × 8 位 = 27 字节，信息长 5 字节，最后一份只剩 2 字节
    let message = "tiles";
    let mut plane = random_plane(4, 4);
    encode(&mut plane, message, BitsPerSlot::Eight);

    assert_eq!(decode_raw(&plane, BitsPerSlot::Eight), "tilestilestilestilestilesti");
    assert_eq!(
        decode(&plane, BitsPerSlot::Eight, false),
        Decoded::Message("tiles".to_string())
    );
}

#[test]
fn high_bits_are_preserved() {
    for bits in [BitsPerSlot::One, BitsPerSlot::Two, BitsPerSlot::Four] {
        let mut plane = random_plane(16, 12);
        let original = plane.image().clone();
        encode(&mut plane, "keep the high bits", bits);

        let keep = !bits.mask();
        original
            .as_raw()
            .iter()
            .zip(plane.image().as_raw())
            .for_each(|(&before, &after)| assert_eq!(before & keep, after & keep));
    }
}

#[test]
fn writing_the_same_group_twice_is_idempotent() {
    let mut plane = random_plane(5, 5);
    let slot = SlotAddress { x: 2, y: 3, channel: 1 };

    plane.write_low_bits(slot, BitsPerSlot::Four, 0b1001);
    let once = plane.slot_value(slot);
    plane.write_low_bits(slot, BitsPerSlot::Four, 0b1001);
    assert_eq!(plane.slot_value(slot), once);
}

#[test]
fn empty_message_clears_payload_bits() {
    let mut plane = random_plane(8, 8);
    let summary = encode(&mut plane, "", BitsPerSlot::Two);
    assert_eq!(summary.message_bits, 2);

    assert!(
        plane
            .slots()
            .all(|slot| plane.read_low_bits(slot, BitsPerSlot::Two) == 0)
    );
    assert_eq!(decode_raw(&plane, BitsPerSlot::Two), "");
    assert_eq!(decode(&plane, BitsPerSlot::Two, false), Decoded::NoRepeatingPattern);
}

#[test]
fn structureless_content_yields_sentinel() {
    // 每个槽的值互不相同，解码出的字符不存在任何重复
    let mut image = RgbImage::new(10, 10);
    image
        .pixels_mut()
        .enumerate()
        .for_each(|(i, pixel)| {
            let base = (i * 3) as u8;
            *pixel = Rgb([base, base.wrapping_add(1), base.wrapping_add(2)]);
        });
    let plane = PixelBitPlane::new(image);

    let decoded = decode(&plane, BitsPerSlot::Eight, false);
    assert_eq!(decoded, Decoded::NoRepeatingPattern);
    assert_eq!(decoded.to_string(), "No repeating string found.");
}

#[test]
fn random_noise_never_fails() {
    for bits in BitsPerSlot::ALL {
        let plane = random_plane(32, 32);
        let raw = decode_raw(&plane, bits);
        assert!(raw.len() <= capacity_bits(&plane, bits) / 8);
        let _ = decode(&plane, bits, false);
    }
}

#[test]
fn message_larger_than_capacity_still_encodes_its_beginning() {
    let mut plane = random_plane(3, 3);
    let summary = encode(&mut plane, "hello", BitsPerSlot::One);
    assert!(summary.exceeds_capacity());
    assert_eq!(summary.whole_tiles(), 0);

    let groups = text_to_bits("hello", BitsPerSlot::One);
    let written: Vec<u8> = plane
        .slots()
        .map(|slot| plane.read_low_bits(slot, BitsPerSlot::One))
        .collect();
    assert_eq!(written.as_slice(), &groups.as_slice()[..12]);
}

/// 以 0x00 开头的信息：解码按大端整数处理，第一份的前导零字节会丢失
#[test]
fn leading_nul_byte_is_lost_on_decode() {
    let mut plane = random_plane(4, 4);
    encode(&mut plane, "\0hi", BitsPerSlot::Eight);

    let raw = decode_raw(&plane, BitsPerSlot::Eight);
    assert!(raw.starts_with("hi\0hi\0"));
    assert_eq!(raw.len(), 26);
    assert_eq!(
        decode(&plane, BitsPerSlot::Eight, false),
        Decoded::Message("hi\0".to_string())
    );
}

#[test]
fn images_without_slots_decode_to_nothing() {
    let mut plane = random_plane(1, 7);
    let summary = encode(&mut plane, "abc", BitsPerSlot::One);
    assert_eq!(summary.slots_written, 0);
    assert!(summary.exceeds_capacity());
    assert_eq!(decode_raw(&plane, BitsPerSlot::One), "");
}
