//! モデルモジュール

mod request;
mod response;

pub use request::{AnnotateRequest, FuriganaRequest};
pub use response::TokenDto;
