//! Page state and the reducer that advances it.

use crate::client::{Category, SortOrder};

use super::book::Book;

/// Search constraints edited through the filter form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub keywords: String,
    pub title: String,
    pub order: SortOrder,
}

/// A single edit to one filter input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Keywords(String),
    Title(String),
    Order(SortOrder),
}

impl Filters {
    /// Apply one input edit.
    pub fn with(mut self, change: FilterChange) -> Self {
        match change {
            FilterChange::Keywords(keywords) => self.keywords = keywords,
            FilterChange::Title(title) => self.title = title,
            FilterChange::Order(order) => self.order = order,
        }
        self
    }
}

/// Everything the catalog page renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// `false` turns the next render into a redirect to the login page.
    pub is_logged_in: bool,
    pub category: Option<Category>,
    pub books: Vec<Book>,
    /// Transient notice; empty means none.
    pub message: String,
    pub filters: Filters,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            is_logged_in: true,
            category: None,
            books: Vec::new(),
            message: String::new(),
            filters: Filters::default(),
        }
    }
}

impl PageState {
    /// Apply a filter input edit. Nothing is fetched.
    pub fn with_filter_change(self, change: FilterChange) -> Self {
        let filters = self.filters.clone().with(change);
        reduce(
            self,
            PagePatch {
                filters: Some(filters),
                ..PagePatch::default()
            },
        )
    }
}

/// A partial update to [`PageState`]. `None` fields leave state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PagePatch {
    pub is_logged_in: Option<bool>,
    pub category: Option<Category>,
    pub books: Option<Vec<Book>>,
    pub message: Option<String>,
    pub filters: Option<Filters>,
}

impl PagePatch {
    /// Combine two patches; fields set in `later` take precedence.
    pub fn then(self, later: PagePatch) -> PagePatch {
        PagePatch {
            is_logged_in: later.is_logged_in.or(self.is_logged_in),
            category: later.category.or(self.category),
            books: later.books.or(self.books),
            message: later.message.or(self.message),
            filters: later.filters.or(self.filters),
        }
    }
}

/// Produce the next state from `prev` and a patch.
pub fn reduce(prev: PageState, patch: PagePatch) -> PageState {
    PageState {
        is_logged_in: patch.is_logged_in.unwrap_or(prev.is_logged_in),
        category: patch.category.or(prev.category),
        books: patch.books.unwrap_or(prev.books),
        message: patch.message.unwrap_or(prev.message),
        filters: patch.filters.unwrap_or(prev.filters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> PageState {
        PageState {
            is_logged_in: true,
            category: Some(Category {
                category_id: 7,
                name: "Science fiction".into(),
            }),
            books: vec![Book {
                book_id: 1,
                title: "Solaris".into(),
                ..Book::default()
            }],
            message: "Request Error".into(),
            filters: Filters::default(),
        }
    }

    #[test]
    fn default_state_is_logged_in_and_empty() {
        let state = PageState::default();

        assert!(state.is_logged_in);
        assert!(state.category.is_none());
        assert!(state.books.is_empty());
        assert_eq!(state.message, "");
        assert_eq!(state.filters.order, SortOrder::TitleAsc);
    }

    #[test]
    fn empty_patch_keeps_everything() {
        let prev = loaded_state();
        let next = reduce(prev.clone(), PagePatch::default());

        assert_eq!(next, prev);
    }

    #[test]
    fn present_fields_replace_absent_fields_stay() {
        let prev = loaded_state();
        let next = reduce(
            prev.clone(),
            PagePatch {
                books: Some(Vec::new()),
                message: Some(String::new()),
                ..PagePatch::default()
            },
        );

        assert!(next.books.is_empty());
        assert_eq!(next.message, "");
        assert_eq!(next.category, prev.category);
        assert!(next.is_logged_in);
    }

    #[test]
    fn later_patch_wins_on_overlap() {
        let first = PagePatch {
            message: Some("Please wait...or try to refresh".into()),
            is_logged_in: Some(false),
            ..PagePatch::default()
        };
        let second = PagePatch {
            message: Some(String::new()),
            ..PagePatch::default()
        };

        let merged = first.then(second);

        assert_eq!(merged.message.as_deref(), Some(""));
        assert_eq!(merged.is_logged_in, Some(false));
    }

    #[test]
    fn filter_changes_update_only_their_field() {
        let state = PageState::default()
            .with_filter_change(FilterChange::Keywords("desert".into()))
            .with_filter_change(FilterChange::Order(SortOrder::YearDesc));

        assert_eq!(state.filters.keywords, "desert");
        assert_eq!(state.filters.title, "");
        assert_eq!(state.filters.order, SortOrder::YearDesc);
        assert!(state.books.is_empty());
    }
}
