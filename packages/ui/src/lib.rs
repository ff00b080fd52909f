//! This crate contains all shared UI for the workspace.

pub mod board;
pub use board::{
    BoardState, BoardViewModel, Clock, StateCell, StatusLevel, StatusMessage, SubmitOutcome,
    SystemClock,
};

pub mod theme;
pub use theme::{toggle_label, ThemeController};

mod repo;
pub use repo::{make_preferences, make_store};

mod timer;

pub mod views;
pub use views::FeedbackBoardView;

mod feedback_form;
pub use feedback_form::FeedbackForm;

mod feedback_list;
pub use feedback_list::{FeedbackItem, FeedbackList};

mod status_line;
pub use status_line::StatusLine;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;
