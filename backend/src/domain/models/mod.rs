pub mod entry_form;
pub mod option_list;

pub use entry_form::EntryForm;
pub use option_list::{OptionList, RenameOutcome};
