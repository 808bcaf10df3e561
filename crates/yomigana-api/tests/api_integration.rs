//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! スタブトークナイザーを使用するため、辞書ロード不要で軽量かつ高速なテスト。

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
  routing::get,
};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

use yomigana::YomiganaService;
use yomigana::errors::TokenizerError;
use yomigana::models::Morpheme;
use yomigana::tokenizer::{Tokenize, TokenizerProvider};
use yomigana_api::{
  api::{AppState, create_router, handle_panic},
  config::Config,
};

/// 統合テスト用の軽量スタブトークナイザー
///
/// - 既知の語は読み付き、それ以外は 1 文字ずつ読み無し
/// - "故障" を含むテキストはエラー
#[derive(Default)]
struct StubTokenizer {
  calls: AtomicUsize,
}

const LEXICON: &[(&str, &str)] = &[
  ("今日", "キョウ"),
  ("は", "ハ"),
  ("晴れ", "ハレ"),
  ("です", "デス"),
  ("明日", "アシタ"),
  ("雨", "アメ"),
];

impl Tokenize for StubTokenizer {
  fn tokenize(&self, text: &str) -> Result<Vec<Morpheme>, TokenizerError> {
    self.calls.fetch_add(1, Ordering::SeqCst);

    if text.contains("故障") {
      return Err(TokenizerError::InvalidInput {
        reason: "tokenizer exploded".to_string(),
      });
    }

    let mut morphemes = Vec::new();
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
      match LEXICON.iter().find(|(surface, _)| rest.starts_with(surface)) {
        Some((surface, reading)) => {
          morphemes.push(Morpheme::new(*surface, *reading));
          rest = &rest[surface.len()..];
        }
        None => {
          morphemes.push(Morpheme::without_reading(ch.to_string()));
          rest = &rest[ch.len_utf8()..];
        }
      }
    }
    Ok(morphemes)
  }
}

/// テスト用の Router を構築する
fn test_app_with(config: Config, stub: Arc<StubTokenizer>) -> Router {
  let provider = TokenizerProvider::with_tokenizer(stub as Arc<dyn Tokenize>);
  let service = Arc::new(YomiganaService::new(provider, 1000));
  create_router(AppState::new(config, service))
}

fn test_app() -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    ..Config::default()
  };
  test_app_with(config, Arc::new(StubTokenizer::default()))
}

async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> Response {
  app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap(),
    )
    .await
    .expect("request should succeed")
}

async fn read_json(response: Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

fn is_json(response: &Response) -> bool {
  response
    .headers()
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v.starts_with("application/json"))
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn annotate_returns_surface_reading_pairs() {
  let payload = serde_json::json!({ "text": "今日は晴れです" });
  let response = post_json(test_app(), "/annotate", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::OK);
  assert!(is_json(&response));

  let json = read_json(response).await;
  assert_eq!(
    json,
    serde_json::json!([
      { "surface": "今日", "reading": "キョウ" },
      { "surface": "は", "reading": "ハ" },
      { "surface": "晴れ", "reading": "ハレ" },
      { "surface": "です", "reading": "デス" },
    ])
  );
}

#[tokio::test]
async fn annotate_trims_and_defaults_missing_reading() {
  let payload = serde_json::json!({ "text": "  雨Ｘ\n" });
  let json = read_json(post_json(test_app(), "/annotate", payload.to_string()).await).await;

  assert_eq!(
    json,
    serde_json::json!([
      { "surface": "雨", "reading": "アメ" },
      { "surface": "Ｘ", "reading": "" },
    ])
  );
}

#[tokio::test]
async fn annotate_repeat_is_served_from_cache() {
  let stub = Arc::new(StubTokenizer::default());
  let app = test_app_with(Config::default(), Arc::clone(&stub));
  let payload = serde_json::json!({ "text": "今日は晴れです" }).to_string();

  let first = read_json(post_json(app.clone(), "/annotate", payload.clone()).await).await;
  let second = read_json(post_json(app, "/annotate", payload).await).await;

  assert_eq!(first, second);
  assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn furigana_returns_ruby_html_string() {
  let payload = serde_json::json!({ "str": "今日は晴れです\n明日は雨" });
  let response = post_json(test_app(), "/furigana", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::OK);
  assert!(is_json(&response));

  let json = read_json(response).await;
  assert_eq!(
    json,
    serde_json::json!(
      "<ruby>今日<rt>きょう</rt></ruby>は<ruby>晴れ<rt>はれ</rt></ruby>です\n<ruby>明日<rt>あした</rt></ruby>は<ruby>雨<rt>あめ</rt></ruby>"
    )
  );
}

#[tokio::test]
async fn furigana_accepts_explicit_supported_options() {
  let payload = serde_json::json!({
    "str": "雨",
    "mode": "furigana",
    "to": "hiragana",
    "romajiSystem": "hepburn",
  });
  let response = post_json(test_app(), "/furigana", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(read_json(response).await, serde_json::json!("<ruby>雨<rt>あめ</rt></ruby>"));
}

// ============================================================================
// 異常系テスト（検証エラー）
// ============================================================================

async fn assert_bad_request(uri: &str, payload: serde_json::Value, message: &str) {
  let response = post_json(test_app(), uri, payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");
  assert!(is_json(&response));
  assert_eq!(read_json(response).await, serde_json::json!({ "error": message }));
}

#[tokio::test]
async fn annotate_missing_text_returns_400() {
  assert_bad_request("/annotate", serde_json::json!({ "foo": "bar" }), "Missing 'text' field").await;
  assert_bad_request("/annotate", serde_json::json!({ "text": "" }), "Missing 'text' field").await;
}

#[tokio::test]
async fn annotate_blank_text_returns_400() {
  assert_bad_request("/annotate", serde_json::json!({ "text": "   " }), "Text cannot be empty").await;
}

#[tokio::test]
async fn furigana_invalid_str_returns_400() {
  assert_bad_request("/furigana", serde_json::json!({}), "Missing or invalid 'str' field").await;
  assert_bad_request("/furigana", serde_json::json!({ "str": 1 }), "Missing or invalid 'str' field")
    .await;
}

#[tokio::test]
async fn furigana_unsupported_options_return_400() {
  assert_bad_request(
    "/furigana",
    serde_json::json!({ "str": "雨", "mode": "romaji" }),
    "Unsupported mode",
  )
  .await;
  assert_bad_request(
    "/furigana",
    serde_json::json!({ "str": "雨", "to": "katakana" }),
    "Unsupported target",
  )
  .await;
  assert_bad_request(
    "/furigana",
    serde_json::json!({ "str": "雨", "romajiSystem": "kunrei" }),
    "Unsupported romaji system",
  )
  .await;
}

fn small_limit_app(max_text_length: usize) -> Router {
  let config = Config {
    max_text_length,
    ..Config::default()
  };
  test_app_with(config, Arc::new(StubTokenizer::default()))
}

async fn assert_too_long(app: Router, uri: &str, payload: serde_json::Value) {
  let response = post_json(app, uri, payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
  assert!(is_json(&response));
  assert_eq!(read_json(response).await, serde_json::json!({ "error": "Text too long" }));
}

#[tokio::test]
async fn too_long_text_returns_400() {
  // 3 文字 = 9 バイト
  assert_too_long(small_limit_app(8), "/annotate", serde_json::json!({ "text": "今日は" })).await;
}

#[tokio::test]
async fn too_long_str_returns_400() {
  assert_too_long(small_limit_app(8), "/furigana", serde_json::json!({ "str": "今日は" })).await;
}

#[tokio::test]
async fn falsy_text_returns_missing_text() {
  assert_bad_request("/annotate", serde_json::json!({ "text": false }), "Missing 'text' field").await;
  assert_bad_request("/annotate", serde_json::json!({ "text": 0 }), "Missing 'text' field").await;
}

// ============================================================================
// ボディサイズ（axum の既定 2MB 上限を超える入力）
// ============================================================================

#[tokio::test]
async fn body_above_two_megabytes_reaches_validation() {
  // 3MB の空白はトリムで消えるので、結果はトークナイザーに渡る "今日" のみ
  let text = format!("今日{}", " ".repeat(3_000_000));
  let payload = serde_json::json!({ "text": text });
  let response = post_json(test_app(), "/annotate", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(
    read_json(response).await,
    serde_json::json!([{ "surface": "今日", "reading": "キョウ" }])
  );
}

#[tokio::test]
async fn text_over_default_max_returns_400_json() {
  let text = "a".repeat(yomigana_api::config::MAX_TEXT_LENGTH + 1);
  assert_too_long(test_app(), "/furigana", serde_json::json!({ "str": text })).await;
}

#[tokio::test]
async fn body_over_limit_returns_413_json() {
  let config = Config {
    max_text_length: 8,
    ..Config::default()
  };
  let body_limit = config.body_limit();
  let app = test_app_with(config, Arc::new(StubTokenizer::default()));

  let payload = serde_json::json!({ "text": "a".repeat(body_limit + 1) });
  let response = post_json(app, "/annotate", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
  assert!(is_json(&response));
  let json = read_json(response).await;
  assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

// ============================================================================
// 異常系テスト（内部エラー）
// ============================================================================

#[tokio::test]
async fn invalid_json_returns_500_with_message() {
  let response = post_json(test_app(), "/annotate", "{ invalid json").await;

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let json = read_json(response).await;
  assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn tokenizer_failure_returns_500_with_message() {
  let payload = serde_json::json!({ "text": "故障" });
  let response = post_json(test_app(), "/annotate", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let json = read_json(response).await;
  assert!(json["error"].as_str().is_some_and(|m| m.contains("tokenizer exploded")));
}

#[tokio::test]
async fn one_failing_line_fails_whole_furigana_request() {
  let payload = serde_json::json!({ "str": "今日\n故障\n明日" });
  let response = post_json(test_app(), "/furigana", payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn tokenizer_load_failure_returns_500_and_is_retried() {
  let attempts = Arc::new(AtomicUsize::new(0));
  let counter = Arc::clone(&attempts);
  let provider = TokenizerProvider::new(move || {
    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
      return Err(TokenizerError::InvalidInput {
        reason: "dictionary unavailable".to_string(),
      });
    }
    let tokenizer: Arc<dyn Tokenize> = Arc::new(StubTokenizer::default());
    Ok(tokenizer)
  });
  let service = Arc::new(YomiganaService::new(provider, 1000));
  let app = create_router(AppState::new(Config::default(), service));
  let payload = serde_json::json!({ "text": "雨" }).to_string();

  let first = post_json(app.clone(), "/annotate", payload.clone()).await;
  assert_eq!(first.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let second = post_json(app, "/annotate", payload).await;
  assert_eq!(second.status(), StatusCode::OK);
  assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn panic_is_converted_to_500_json() {
  async fn boom() -> &'static str {
    panic!("handler blew up")
  }

  let app: Router = Router::new().route("/boom", get(boom)).layer(CatchPanicLayer::custom(handle_panic));

  let response = app
    .oneshot(Request::builder().method("GET").uri("/boom").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert!(is_json(&response));
  assert_eq!(read_json(response).await, serde_json::json!({ "error": "handler blew up" }));
}

// ============================================================================
// 実辞書を使う E2E テスト（with_dict_tests フィーチャーで有効化）
// ============================================================================

#[tokio::test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
async fn end_to_end_with_real_dictionary() {
  let config = Config::default();
  let service = Arc::new(
    YomiganaService::from_config(&config.yomigana)
      .expect("Failed to build service: check test environment"),
  );
  let app = create_router(AppState::new(config, service));

  let payload = serde_json::json!({ "text": "今日は晴れです" });
  let json = read_json(post_json(app.clone(), "/annotate", payload.to_string()).await).await;
  let surfaces: String = json
    .as_array()
    .expect("array response")
    .iter()
    .filter_map(|token| token["surface"].as_str())
    .collect();
  assert_eq!(surfaces, "今日は晴れです");

  let payload = serde_json::json!({ "str": "今日は晴れです\n東京" });
  let json = read_json(post_json(app, "/furigana", payload.to_string()).await).await;
  let html = json.as_str().expect("string response");
  assert!(html.contains("<ruby>今日<rt>きょう</rt></ruby>は"));
  assert!(html.ends_with("\n<ruby>東京<rt>とうきょう</rt></ruby>"));
}
