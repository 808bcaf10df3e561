//! tokenizer モジュール用統合テスト

use std::sync::Arc;

use vibrato_rkyv::dictionary::PresetDictionaryKind;
use yomigana::dictionary::DictionaryManager;
use yomigana::tokenizer::{Tokenize, TokenizerProvider, VibratoTokenizer};

/// キャッシュ済み IPADIC から VibratoTokenizer を構築する。
/// キャッシュが無ければ `None`（テストはスキップ）。
fn cached_tokenizer() -> Option<VibratoTokenizer> {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).ok()?;
  if !manager.cache_dir().join(PresetDictionaryKind::Ipadic.name()).exists() {
    eprintln!("辞書キャッシュが存在しないためスキップ");
    return None;
  }
  let dict = manager.load().ok()?;
  Some(VibratoTokenizer::from_shared_dictionary(dict))
}

/// 表層形を連結すると入力に戻ることを確認。
#[test]
fn surfaces_reconstruct_input() {
  let Some(tokenizer) = cached_tokenizer() else {
    return;
  };

  let text = "東京タワーは東京の観光名所です";
  let morphemes = tokenizer.tokenize(text).expect("トークナイズ失敗");

  assert!(!morphemes.is_empty(), "トークンが空です");
  let joined: String = morphemes.iter().map(|m| m.surface.as_str()).collect();
  assert_eq!(joined, text);
}

/// IPADIC の読みがカタカナで得られることを確認。
#[test]
fn readings_are_katakana() {
  let Some(tokenizer) = cached_tokenizer() else {
    return;
  };

  let morphemes = tokenizer.tokenize("東京").expect("トークナイズ失敗");
  assert_eq!(morphemes.len(), 1);
  assert_eq!(morphemes[0].reading.as_deref(), Some("トウキョウ"));
}

/// 存在しないローカル辞書を指すプロバイダーはエラーを返し、初期化済みにならない。
#[tokio::test]
async fn provider_with_missing_dictionary_fails_without_caching() {
  let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリーの作成に失敗");
  let path = temp_dir.path().join("system.dic");

  let provider = TokenizerProvider::new(move || {
    let manager = DictionaryManager::from_local_path(&path)?;
    let tokenizer: Arc<dyn Tokenize> =
      Arc::new(VibratoTokenizer::from_shared_dictionary(manager.load()?));
    Ok(tokenizer)
  });

  assert!(provider.get().await.is_err());
  assert!(!provider.is_initialized());
  assert!(provider.get().await.is_err());
}
