use dioxus::prelude::*;
use store::BoardConfig;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = BoardConfig::default();
        tracing::info!("feedback board at {}", config.collection_url());
        config
    });

    rsx! {
        document::Title { "Feedback Board" }
        ui::FeedbackBoardView { config: config }
    }
}
