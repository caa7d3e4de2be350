//! HTML rendering for the catalog page

use std::fmt::Write as _;

use crate::client::SortOrder;
use crate::config::SiteConfig;
use crate::page::{Book, Filters, PageState};

/// What a render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Send the visitor elsewhere instead of showing content.
    Redirect(String),
    Html(String),
}

/// Renders the category page, or a redirect to the login page when the
/// visitor is not logged in.
pub fn render_page(state: &PageState, category_id: u32, config: &SiteConfig) -> Rendered {
    if !state.is_logged_in {
        return Rendered::Redirect(config.login_path.clone());
    }

    let name = state
        .category
        .as_ref()
        .map(|c| escape(&c.name))
        .unwrap_or_default();

    let content = format!(
        r#"<div class="card">
    <h1 class="card-title">&#128220; {name}</h1>
    {message}
    <div class="row">
        <aside class="filters">{filters}</aside>
        <section class="books">{books}</section>
    </div>
</div>"#,
        message = optional_message(&state.message),
        filters = filter_form(category_id, &state.filters),
        books = book_grid(&state.books, config),
    );

    Rendered::Html(base_template(&name, &content))
}

fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title} - Catalog</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; }}
        .container {{ max-width: 1140px; margin: 0 auto; padding: 20px; }}
        .card {{ border: 1px solid #ddd; border-radius: 6px; padding: 20px; margin-top: 16px; }}
        .row {{ display: flex; flex-wrap: wrap; gap: 20px; }}
        .filters {{ flex: 1 1 220px; max-width: 280px; }}
        .filters label, .filters input, .filters select, .filters button {{ display: block; width: 100%; margin-bottom: 10px; }}
        .books {{ flex: 3 1 480px; }}
        .grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; }}
        .book-card img {{ width: 100%; }}
        .btn {{ display: block; text-align: center; padding: 6px 12px; background: #0d6efd; color: #fff; border-radius: 4px; text-decoration: none; }}
    </style>
</head>
<body>
    <main class="container">
{content}
    </main>
</body>
</html>"#
    )
}

fn optional_message(message: &str) -> String {
    if message.is_empty() {
        return String::new();
    }
    format!(r#"<p class="card-text message">{}</p>"#, escape(message))
}

fn filter_form(category_id: u32, filters: &Filters) -> String {
    let mut options = String::new();
    for order in SortOrder::ALL {
        let selected = if order == filters.order { " selected" } else { "" };
        let _ = write!(
            options,
            r#"<option value="{}"{selected}>{}</option>"#,
            order.as_str(),
            order.label()
        );
    }

    format!(
        r#"<form method="get" action="/category/{category_id}">
    <label for="keywords">Keywords</label>
    <input type="text" id="keywords" name="keywords" value="{keywords}">
    <label for="title">Title</label>
    <input type="text" id="title" name="title" value="{title}">
    <select id="sortOrder" name="order">{options}</select>
    <button type="submit" class="btn">Start search</button>
</form>"#,
        keywords = escape(&filters.keywords),
        title = escape(&filters.title),
    )
}

fn book_grid(books: &[Book], config: &SiteConfig) -> String {
    if books.is_empty() {
        return "<div>There are no books to show.</div>".to_string();
    }

    let cards: String = books.iter().map(|book| book_card(book, config)).collect();
    format!(r#"<div class="grid">{cards}</div>"#)
}

fn book_card(book: &Book, config: &SiteConfig) -> String {
    let title = escape(&book.title);
    format!(
        r#"<div class="book-card">
    <img alt="{title}" src="{src}">
    <p><strong>{title}</strong></p>
    <a href="{href}" class="btn">Click to open</a>
</div>"#,
        src = escape(&config.photo_url("small", &book.image_front)),
        href = book.detail_path(),
    )
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Category;

    fn config() -> SiteConfig {
        SiteConfig {
            photo_path: "/photos/".into(),
            ..SiteConfig::default()
        }
    }

    fn html(rendered: Rendered) -> String {
        match rendered {
            Rendered::Html(html) => html,
            Rendered::Redirect(to) => panic!("unexpected redirect to {to}"),
        }
    }

    #[test]
    fn logged_out_redirects_to_login() {
        let state = PageState {
            is_logged_in: false,
            ..PageState::default()
        };

        assert_eq!(
            render_page(&state, 7, &config()),
            Rendered::Redirect("/login".into())
        );
    }

    #[test]
    fn renders_category_books_and_links() {
        let state = PageState {
            category: Some(Category {
                category_id: 7,
                name: "Science fiction".into(),
            }),
            books: vec![Book {
                book_id: 5,
                title: "Dune".into(),
                image_front: "a.jpg".into(),
                ..Book::default()
            }],
            ..PageState::default()
        };

        let page = html(render_page(&state, 7, &config()));

        assert!(page.contains("Science fiction"));
        assert!(page.contains("<strong>Dune</strong>"));
        assert!(page.contains(r#"src="/photos/small/a.jpg""#));
        assert!(page.contains(r#"href="/book/5/""#));
        assert_eq!(page.matches("class=\"book-card\"").count(), 1);
        assert!(!page.contains("There are no books to show."));
    }

    #[test]
    fn empty_grid_and_message() {
        let state = PageState {
            message: "Request Error".into(),
            ..PageState::default()
        };

        let page = html(render_page(&state, 7, &config()));

        assert!(page.contains("There are no books to show."));
        assert!(page.contains(r#"<p class="card-text message">Request Error</p>"#));
    }

    #[test]
    fn no_message_paragraph_when_empty() {
        let page = html(render_page(&PageState::default(), 7, &config()));

        assert!(!page.contains("card-text message"));
    }

    #[test]
    fn form_reflects_current_filters() {
        let state = PageState {
            filters: Filters {
                keywords: "desert \"planet\"".into(),
                title: "Dune".into(),
                order: SortOrder::YearDesc,
            },
            ..PageState::default()
        };

        let page = html(render_page(&state, 7, &config()));

        assert!(page.contains(r#"action="/category/7""#));
        assert!(page.contains(r#"value="desert &quot;planet&quot;""#));
        assert!(page.contains(r#"value="Dune""#));
        assert!(page.contains(r#"<option value="year desc" selected>"#));
        assert!(page.contains(r#"<option value="title asc">"#));
        assert_eq!(page.matches("<option ").count(), 4);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }
}
