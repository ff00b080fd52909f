use std::path::Path;

use dioxus::prelude::*;
use store::BoardConfig;

fn main() {
    dioxus::launch(App);
}

/// Configuration file in the working directory, then `FEEDBACK_BOARD_URL`
/// (from the environment or a `.env` file) on top.
fn load_config() -> BoardConfig {
    dotenvy::dotenv().ok();

    let config = BoardConfig::load_or_default(Path::new(BoardConfig::filename()));
    match std::env::var(store::BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => {
            tracing::info!("using base url from {}", store::BASE_URL_ENV);
            config.with_base_url(url.trim())
        }
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Title { "Feedback Board" }
        ui::FeedbackBoardView { config: config }
    }
}
