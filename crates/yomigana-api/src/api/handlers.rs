//! HTTPハンドラー定義

use std::any::Any;

use axum::{
  Json,
  body::Bytes,
  extract::{State, rejection::BytesRejection},
  response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnnotateRequest, FuriganaRequest, TokenDto};

use super::state::AppState;

/// POST /annotate エンドポイント
///
/// テキスト全体を 1 回で形態素解析し、表層形と読みの組を返す。
///
/// # Request Body
/// ```json
/// { "text": "今日は晴れです" }
/// ```
///
/// # Response
/// - 200 OK: `[{"surface": "今日", "reading": "キョウ"}, ...]`
/// - 400 Bad Request: `text` 欠落、空白のみ、長さ超過
/// - 413 Payload Too Large: ボディが `Config::body_limit` を超えた
/// - 500 Internal Server Error: JSON 不正、辞書ロード失敗などの内部エラー
pub async fn post_annotate(
  State(state): State<AppState>,
  body: Result<Bytes, BytesRejection>,
) -> Result<Json<Vec<TokenDto>>, ApiError> {
  let request: AnnotateRequest = parse_body(&body?)?;
  let text = request.cleaned_text()?;
  check_length(text, state.config.max_text_length)?;

  debug!(text_len = text.len(), "構造化注釈リクエストを受信");

  let tokens = state.service.annotate(text).await?;

  info!(token_count = tokens.len(), "構造化注釈完了");

  Ok(Json(tokens.iter().map(TokenDto::from).collect()))
}

/// POST /furigana エンドポイント
///
/// 行ごとに形態素解析し、漢字を含むトークンを `<ruby>` で囲んだ HTML を返す。
///
/// # Request Body
/// ```json
/// { "str": "今日は晴れです", "mode": "furigana", "to": "hiragana", "romajiSystem": "hepburn" }
/// ```
///
/// # Response
/// - 200 OK: ルビ付き HTML の JSON 文字列
/// - 400 Bad Request: `str` 欠落・非文字列、未対応のオプション値、長さ超過
/// - 413 Payload Too Large: ボディが `Config::body_limit` を超えた
/// - 500 Internal Server Error: 内部エラー
pub async fn post_furigana(
  State(state): State<AppState>,
  body: Result<Bytes, BytesRejection>,
) -> Result<Json<String>, ApiError> {
  let request: FuriganaRequest = parse_body(&body?)?;
  let (text, options) = request.validate()?;
  check_length(text, state.config.max_text_length)?;

  debug!(text_len = text.len(), ?options, "ふりがなリクエストを受信");

  let html = state.service.furigana(text, &options).await?;

  info!(html_len = html.len(), "ふりがな生成完了");

  Ok(Json(html))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}

/// ハンドラー内の panic を 500 の JSON エラーへ変換する
///
/// `CatchPanicLayer::custom` に渡す。
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
  let message = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    (*s).to_string()
  } else {
    "Unknown panic".to_string()
  };

  error!(%message, "ハンドラーで panic が発生しました");
  ApiError::internal(message).into_response()
}

/// ボディを JSON として解釈する
///
/// Content-Type は見ない。解釈できなければ内部エラー（500）。
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
  serde_json::from_slice(body).map_err(|e| {
    error!(error = %e, "リクエストボディの JSON 解析に失敗");
    ApiError::internal(e.to_string())
  })
}

fn check_length(text: &str, max: usize) -> Result<(), ApiError> {
  if text.len() > max {
    debug!(text_len = text.len(), max, "テキスト長の上限を超過");
    return Err(ApiError::text_too_long(text.len(), max));
  }
  Ok(())
}
