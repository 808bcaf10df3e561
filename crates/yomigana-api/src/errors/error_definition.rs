//! APIエラー定義

use axum::{
  Json,
  extract::rejection::BytesRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// yomigana クレートのエラー型をインポート
use yomigana::errors::{OptionError, YomiganaError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// リクエストボディが上限を超えた
  PayloadTooLarge,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::PayloadTooLarge => "payload_too_large",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
///
/// `Display` の文字列がそのままレスポンスの `error` になる。
#[derive(Debug, Error)]
pub enum ApiError {
  /// `text` が無い / null / 空文字列
  #[error("Missing 'text' field")]
  MissingText,

  /// `text` が空白のみ
  #[error("Text cannot be empty")]
  EmptyText,

  /// テキストが長すぎる（実際のバイト数, 上限）
  #[error("Text too long")]
  TextTooLong(usize, usize),

  /// `str` が無い、または文字列ではない
  #[error("Missing or invalid 'str' field")]
  InvalidStr,

  /// 未対応の `mode`
  #[error("Unsupported mode")]
  UnsupportedMode,

  /// 未対応の `to`
  #[error("Unsupported target")]
  UnsupportedTarget,

  /// 未対応の `romajiSystem`
  #[error("Unsupported romaji system")]
  UnsupportedRomajiSystem,

  /// リクエストボディの上限超過
  #[error("{0}")]
  PayloadTooLarge(String),

  /// 内部エラー（メッセージはそのまま返す）
  #[error("{0}")]
  Internal(String),

  /// 設定エラー
  #[error("{0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::MissingText
      | Self::EmptyText
      | Self::TextTooLong(_, _)
      | Self::InvalidStr
      | Self::UnsupportedMode
      | Self::UnsupportedTarget
      | Self::UnsupportedRomajiSystem => ApiErrorKind::InvalidInput,
      Self::PayloadTooLarge(_) => ApiErrorKind::PayloadTooLarge,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(code = self.code(), error = %self, "リクエスト処理に失敗しました");
    } else {
      tracing::warn!(code = self.code(), error = %self, "リクエストを拒否しました");
    }

    let body = ErrorResponse {
      error: self.to_string(),
    };

    (status, Json(body)).into_response()
  }
}

impl From<OptionError> for ApiError {
  fn from(err: OptionError) -> Self {
    match err {
      OptionError::UnsupportedMode(_) => ApiError::UnsupportedMode,
      OptionError::UnsupportedTarget(_) => ApiError::UnsupportedTarget,
      OptionError::UnsupportedRomajiSystem(_) => ApiError::UnsupportedRomajiSystem,
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// ボディ読み取りの失敗を JSON エラーへ変換する
///
/// 上限超過は 413、それ以外（切断など）は 500。
impl From<BytesRejection> for ApiError {
  fn from(rejection: BytesRejection) -> Self {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
      ApiError::PayloadTooLarge(rejection.body_text())
    } else {
      ApiError::internal(rejection.body_text())
    }
  }
}

/// YomiganaError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
/// オプション不正のみ 400、それ以外は 500 でメッセージをそのまま返す。
impl From<YomiganaError> for ApiError {
  fn from(err: YomiganaError) -> Self {
    match err {
      YomiganaError::Option(err) => err.into(),
      YomiganaError::Config(err) => ApiError::config(err.to_string()),
      YomiganaError::Dictionary(_) | YomiganaError::Tokenizer(_) | YomiganaError::Cache(_) => {
        ApiError::internal(err.to_string())
      }
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
