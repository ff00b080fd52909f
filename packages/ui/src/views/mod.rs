mod board;
pub use board::FeedbackBoardView;
