pub mod confirmation_modal;
pub mod countdown_display;
pub mod forms;
pub mod header;
pub mod history;
pub mod option_management_modal;
pub mod progress_bar;
pub mod tab_bar;
pub mod tab_menu;

pub use confirmation_modal::ConfirmationModal;
pub use countdown_display::CountdownDisplay;
pub use forms::EntryFormCard;
pub use header::Header;
pub use history::HistoryScreen;
pub use option_management_modal::OptionManagementModal;
pub use progress_bar::ProgressBar;
pub use tab_bar::TabBar;
pub use tab_menu::TabMenu;
