//! cache モジュール
pub mod result_cache;

/// 再エクスポート
pub use result_cache::ResultCache;
