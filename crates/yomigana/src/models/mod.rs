//! models モジュール
pub mod model_definition;

/// 再エクスポート
pub use model_definition::{AnnotationMode, FuriganaOptions, KanaTarget, Morpheme, RomajiSystem, Token};
