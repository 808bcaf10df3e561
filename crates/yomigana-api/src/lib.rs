//! yomigana-api crate
//!
//! Web server exposing furigana generation as HTTP API.
//!
//! ## Endpoints
//! - `POST /annotate` - `{surface, reading}` pairs for the whole text
//! - `POST /furigana` - `<ruby>` annotated HTML, line by line
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5530/annotate \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "今日は晴れです"}'
//!
//! curl -X POST http://127.0.0.1:5530/furigana \
//!   -H "Content-Type: application/json" \
//!   -d '{"str": "今日は晴れです\n明日は雨", "to": "hiragana"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnnotateRequest, FuriganaRequest, TokenDto};
