use std::time::Duration;

use dioxus::prelude::*;
use store::{BoardConfig, FeedbackId};

use crate::board::{BoardState, BoardViewModel, SubmitOutcome};
use crate::theme::ThemeController;
use crate::{make_preferences, make_store, timer, FeedbackForm, FeedbackList, ThemeToggle};

const BOARD_CSS: Asset = asset!("/assets/styling/board.css");

/// The whole feedback board: header with theme toggle, form, list.
///
/// Owns the board state and the theme for its subtree. Platform packages only
/// choose the configuration.
#[component]
pub fn FeedbackBoardView(config: BoardConfig) -> Element {
    let state = use_signal(BoardState::default);
    let mut theme = use_signal(|| ThemeController::load(make_preferences()));
    let board = use_hook(|| BoardViewModel::new(make_store(&config), state));
    let clear_after = Duration::from_secs(config.ui.status_clear_secs);

    // Initial listing
    let _loader = use_future({
        let board = board.clone();
        move || {
            let board = board.clone();
            async move {
                let _ = board.refresh().await;
            }
        }
    });

    let on_name = {
        let board = board.clone();
        move |value: String| board.set_name(value)
    };
    let on_email = {
        let board = board.clone();
        move |value: String| board.set_email(value)
    };
    let on_comment = {
        let board = board.clone();
        move |value: String| board.set_comment(value)
    };

    let on_submit = {
        let board = board.clone();
        move |_: ()| {
            let board = board.clone();
            spawn(async move {
                if let SubmitOutcome::Submitted { status, .. } = board.submit().await {
                    timer::sleep(clear_after).await;
                    board.clear_status(status);
                }
            });
        }
    };

    let on_delete = {
        let board = board.clone();
        move |id: FeedbackId| {
            let board = board.clone();
            spawn(async move {
                let _ = board.remove(&id).await;
            });
        }
    };

    let current_theme = theme.read().current();
    let snapshot = state.read().clone();

    rsx! {
        document::Stylesheet { href: BOARD_CSS }
        div {
            class: "board {current_theme}",
            header {
                class: "board-header",
                h1 { "Feedback Board" }
                ThemeToggle {
                    theme: current_theme,
                    on_toggle: move |_: ()| {
                        theme.write().toggle();
                    },
                }
            }
            FeedbackForm {
                draft: snapshot.draft,
                status: snapshot.status,
                on_name: on_name,
                on_email: on_email,
                on_comment: on_comment,
                on_submit: on_submit,
            }
            FeedbackList {
                entries: snapshot.collection,
                loaded: snapshot.loaded,
                on_delete: on_delete,
            }
        }
    }
}
