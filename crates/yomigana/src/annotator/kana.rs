//! 文字種の判定と変換

/// カタカナ → ひらがな のコードポイント差
const KATAKANA_TO_HIRAGANA_OFFSET: u32 = 0x60;

/// 漢字（CJK 統合漢字 U+4E00–U+9FAF）または踊り字「々」か
pub fn is_kanji(c: char) -> bool {
  matches!(c, '\u{4E00}'..='\u{9FAF}' | '々')
}

/// 文字列に漢字が 1 文字でも含まれるか
pub fn contains_kanji(text: &str) -> bool {
  text.chars().any(is_kanji)
}

/// カタカナ（ァ U+30A1 – ヶ U+30F6）をひらがなへ変換する
///
/// 長音符「ー」や中黒など範囲外の文字はそのまま残す。
pub fn katakana_to_hiragana(text: &str) -> String {
  text
    .chars()
    .map(|c| {
      if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - KATAKANA_TO_HIRAGANA_OFFSET).unwrap_or(c)
      } else {
        c
      }
    })
    .collect()
}
