//! # 重复单元检测模块
//!
//! 编码时信息被循环写满整张图像，因此解码得到的文本是同一段信息的多次重复，
//! 末尾通常还带有一段被截断的残片。本模块从这样的文本中找出最短的重复单元。

/// 返回 `text` 最短的重复前缀。
///
/// 从长度 1 开始逐个尝试候选长度 `L`（按字符计），只要紧随其后的 `L` 个字符
/// 与前缀相同即视为匹配成功，也就是至少出现两次连续重复。
/// 匹配不要求覆盖整个字符串，尾部残缺的重复或任意杂讯都被容忍。
///
/// 重复单元不能包含换行符 `\n`：一旦候选前缀包含换行即停止搜索。
///
/// 注意：以重复字符开头的信息（如 `"aardvark"`）只会得到该单个字符。
///
/// # Examples
///
/// ```
/// use lsb_tile::pattern::shortest_repeating_unit;
///
/// assert_eq!(shortest_repeating_unit("hello hello hel"), Some("hello "));
/// assert_eq!(shortest_repeating_unit("abcdef"), None);
/// ```
pub fn shortest_repeating_unit(text: &str) -> Option<&str> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    for unit_len in 1..=char_count / 2 {
        let unit_end = boundaries[unit_len];
        let unit = &text[..unit_end];
        if unit.ends_with('\n') {
            break;
        }
        let next = &text[unit_end..boundaries[unit_len * 2]];
        if next == unit {
            return Some(unit);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_tiling() {
        assert_eq!(shortest_repeating_unit("abcabcabc"), Some("abc"));
    }

    #[test]
    fn trailing_partial_copy_is_tolerated() {
        assert_eq!(shortest_repeating_unit("abcabcab"), Some("abc"));
        assert_eq!(shortest_repeating_unit("abcabc\u{1}x#"), Some("abc"));
    }

    #[test]
    fn single_occurrence_is_not_a_pattern() {
        assert_eq!(shortest_repeating_unit("abc"), None);
        assert_eq!(shortest_repeating_unit("abcab"), None);
        assert_eq!(shortest_repeating_unit(""), None);
        assert_eq!(shortest_repeating_unit("a"), None);
    }

    #[test]
    fn doubled_first_character_wins() {
        assert_eq!(shortest_repeating_unit("aardvarkaardvark"), Some("a"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(shortest_repeating_unit("隐写隐写隐"), Some("隐写"));
    }

    #[test]
    fn units_never_span_a_line_feed() {
        assert_eq!(shortest_repeating_unit("a\nb a\nb "), None);
        assert_eq!(shortest_repeating_unit("\n\n"), None);
    }
}
