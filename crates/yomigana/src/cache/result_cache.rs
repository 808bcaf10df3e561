//! 結果キャッシュ
//!
//! 入力テキスト（完全一致）→ 計算済み結果 の上限付きマップ。
//! 上限に達した状態で新しいキーを追加すると、最も古く挿入されたキーを 1 件捨てる（FIFO）。
//! `get` は順序を更新しないため LRU ではない。有効期限は無い。

use std::collections::{HashMap, VecDeque};

use tracing::trace;

/// 挿入順で追い出す上限付きキャッシュ
#[derive(Debug, Clone)]
pub struct ResultCache<V> {
  capacity: usize,
  /// 挿入順のキー（先頭が最古）
  order: VecDeque<String>,
  entries: HashMap<String, V>,
}

impl<V> ResultCache<V> {
  /// 上限 `capacity` 件のキャッシュを作成する
  ///
  /// `capacity` が 0 の場合は 1 として扱う。
  pub fn new(capacity: usize) -> Self {
    let capacity = capacity.max(1);
    Self {
      capacity,
      order: VecDeque::with_capacity(capacity),
      entries: HashMap::with_capacity(capacity),
    }
  }

  /// 上限件数
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// 現在の件数
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// 空かどうか
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// キーが存在するか
  pub fn contains_key(&self, text: &str) -> bool {
    self.entries.contains_key(text)
  }

  /// 完全一致で検索する。挿入順は変わらない。
  pub fn get(&self, text: &str) -> Option<&V> {
    self.entries.get(text)
  }

  /// 結果を保存する
  ///
  /// - 既存キー: 値だけ置き換え、挿入位置は維持（追い出し無し）
  /// - 新規キー: 上限に達していれば最古の 1 件を追い出してから追加
  pub fn insert(&mut self, text: impl Into<String>, value: V) {
    let text = text.into();

    if let Some(slot) = self.entries.get_mut(&text) {
      *slot = value;
      return;
    }

    if self.entries.len() >= self.capacity
      && let Some(oldest) = self.order.pop_front()
    {
      self.entries.remove(&oldest);
      trace!(evicted_len = oldest.len(), "Evicted oldest cache entry");
    }

    self.order.push_back(text.clone());
    self.entries.insert(text, value);
  }
}
