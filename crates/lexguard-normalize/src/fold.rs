//! Per-code-point folding tables.

/// Map a fullwidth form (U+FF01..=U+FF5E) to its ASCII counterpart and the
/// ideographic space to an ASCII space. Everything else passes through.
pub fn fold_width(ch: char) -> char {
    match ch {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch),
        _ => ch,
    }
}

/// ASCII digit for a digit variant or CJK numeral, or `None` when `ch` is not
/// a recognized numeral.
///
/// `十` maps to `0`, so "二十" reads as "20" but "十五" reads as "05".
pub fn fold_numeral(ch: char) -> Option<char> {
    let digit = match ch {
        '0'..='9' => return Some(ch),
        '０'..='９' => ch as u32 - '０' as u32,
        '⓪' => 0,
        '①'..='⑨' => ch as u32 - '①' as u32 + 1,
        '㈠'..='㈨' => ch as u32 - '㈠' as u32 + 1,
        '㈩' => 0,
        '零' | '〇' => 0,
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' => 0,
        _ => return None,
    };
    char::from_digit(digit, 10)
}
