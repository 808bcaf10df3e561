//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{handle_panic, health_check, post_annotate, post_furigana};
pub use routes::{create_router, run_server};
pub use state::AppState;
