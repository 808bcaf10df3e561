//! dictionary 用のテスト
//! 辞書管理の統合テスト

use vibrato_rkyv::dictionary::PresetDictionaryKind;
use yomigana::dictionary::DictionaryManager;
use yomigana::errors::DictionaryError;

/// DictionaryManager のコンストラクタが正常に動作することを確認する。
#[test]
fn create_dictionary_manager_with_preset() {
  let result = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic);

  // コンストラクタ自体はネットワーク不要なので成功するはず
  assert!(
    result.is_ok(),
    "DictionaryManager の構築に失敗: {:?}",
    result.err()
  );
}

/// 存在しないパスを指定した場合にエラーが返ることを確認する。
#[test]
fn from_local_path_with_nonexistent_file() {
  let result = DictionaryManager::from_local_path("/nonexistent/path/to/system.dic");

  let err = result.unwrap_err();
  assert!(
    matches!(err, DictionaryError::DictionaryNotFound(_)),
    "期待されるエラー型ではありません: {:?}",
    err
  );
}

/// キャッシュディレクトリーを指定した場合、そのパスが使われることを確認する。
#[test]
fn with_preset_in_uses_given_cache_dir() {
  let temp_dir = tempfile::TempDir::new().expect("一時ディレクトリーの作成に失敗");
  let manager = DictionaryManager::with_preset_in(PresetDictionaryKind::Ipadic, temp_dir.path());

  assert_eq!(manager.cache_dir(), temp_dir.path());
  assert_eq!(manager.preset_kind(), Some(PresetDictionaryKind::Ipadic));
}

/// プリセット辞書のダウンロード＆ロード テスト。
///
/// ネットワークアクセスと大容量ファイルの処理が必要なため
/// `#[ignore]` を付けている。
///
/// 実行方法:
/// ```bash
/// cargo test -- --ignored download_and_load_ipadic
/// ```
#[test]
#[ignore = "辞書ダウンロードは時間がかかるため通常テストから除外"]
fn download_and_load_ipadic() {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager の構築に失敗");

  // 辞書をロード（初回はダウンロードが発生する）
  let dict = manager.load();
  assert!(dict.is_ok(), "辞書のロードに失敗: {:?}", dict.err());

  // 2回目のロードはキャッシュから取得される
  let dict2 = manager.load();
  assert!(dict2.is_ok(), "2回目のロードに失敗");
}

/// キャッシュ済み辞書のロードテスト。
///
/// キャッシュが存在しない場合は自動スキップする。
#[test]
fn load_cached_dictionary() {
  let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic)
    .expect("DictionaryManager の構築に失敗");

  let dict_subdir = manager.cache_dir().join(PresetDictionaryKind::Ipadic.name());
  if !dict_subdir.exists() {
    eprintln!(
      "辞書キャッシュが存在しないためスキップ: {}",
      dict_subdir.display()
    );
    return;
  }

  let dict = manager.load();
  assert!(
    dict.is_ok(),
    "キャッシュ辞書のロードに失敗: {:?}",
    dict.err()
  );
}
