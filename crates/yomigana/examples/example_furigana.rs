//! yomigana sample code
//!
//! 初回はプリセット辞書 (IPADIC) をダウンロードし、2 回目以降はキャッシュからロードする。

use std::error::Error;

use yomigana::{FuriganaOptions, YomiganaConfig, YomiganaService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  let config = YomiganaConfig::default();
  let service = YomiganaService::from_config(&config)?;

  // 構造化モード
  let input_text = "今日は東京で雨が降りました。";
  println!("Target text: {}", input_text);
  let tokens = service.annotate(input_text).await?;
  println!("Annotation result: ");
  for token in tokens.iter() {
    println!("{}\t{}", token.surface, token.reading);
  }

  // ふりがなモード（行単位）
  let input_text = "人々は漢字を読む。\n明日は晴れです。";
  println!("Target text: {}", input_text);
  let html = service.furigana(input_text, &FuriganaOptions::default()).await?;
  println!("Furigana result: ");
  println!("{}", html);

  Ok(())
}
