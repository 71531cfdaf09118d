pub mod history_screen;
pub mod history_table;

pub use history_screen::HistoryScreen;
