//! The category catalog page
//!
//! State lives in [`PageState`] and only changes through [`reduce`]. A load
//! fetches the category and the filtered book search together and folds both
//! responses into a single [`PagePatch`]; [`PageController`] commits it unless
//! a newer load has started in the meantime.

pub mod book;
pub mod controller;
pub mod load;
pub mod state;

pub use book::Book;
pub use controller::{LoadTicket, PageController};
pub use load::{CATEGORY_ERROR_MESSAGE, SEARCH_ERROR_MESSAGE, fold_responses, load};
pub use state::{FilterChange, Filters, PagePatch, PageState, reduce};
