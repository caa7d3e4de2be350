//! Book card view model.

use crate::client::{BookRecord, Cover};

/// A book as the catalog grid shows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Book {
    pub book_id: u32,
    pub title: String,
    pub original_title: String,
    pub publication_year: u32,
    pub pages: u32,
    pub isbn: String,
    pub language: String,
    pub catalog_number: String,
    /// Relative path of the front cover, empty when there is none.
    pub image_front: String,
    /// Relative path of the back cover, empty when there is none.
    pub image_back: String,
}

impl Book {
    /// Link to the book's detail page.
    pub fn detail_path(&self) -> String {
        format!("/book/{}/", self.book_id)
    }
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        let mut image_front = String::new();
        let mut image_back = String::new();

        // Later photos of the same side win.
        for photo in record.photos {
            match photo.cover {
                Cover::Front => image_front = photo.image_path,
                Cover::Back => image_back = photo.image_path,
            }
        }

        Self {
            book_id: record.book_id,
            title: record.title,
            original_title: record.original_title,
            publication_year: record.publication_year,
            pages: record.pages,
            isbn: record.isbn,
            language: record.language,
            catalog_number: record.catalog_number,
            image_front,
            image_back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Photo;

    fn record(photos: Vec<Photo>) -> BookRecord {
        BookRecord {
            book_id: 5,
            title: "Dune".into(),
            original_title: "Dune".into(),
            publication_year: 1965,
            pages: 412,
            isbn: "978-0441013593".into(),
            language: "en".into(),
            catalog_number: "SF-001".into(),
            photos,
        }
    }

    fn photo(cover: Cover, path: &str) -> Photo {
        Photo {
            photo_id: None,
            cover,
            image_path: path.into(),
        }
    }

    #[test]
    fn front_and_back_are_resolved_by_cover() {
        let book = Book::from(record(vec![
            photo(Cover::Back, "b.jpg"),
            photo(Cover::Front, "a.jpg"),
        ]));

        assert_eq!(book.image_front, "a.jpg");
        assert_eq!(book.image_back, "b.jpg");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.pages, 412);
    }

    #[test]
    fn no_photos_leaves_both_images_empty() {
        let book = Book::from(record(Vec::new()));

        assert_eq!(book.image_front, "");
        assert_eq!(book.image_back, "");
    }

    #[test]
    fn front_only() {
        let book = Book::from(record(vec![photo(Cover::Front, "a.jpg")]));

        assert_eq!(book.image_front, "a.jpg");
        assert_eq!(book.image_back, "");
        assert_eq!(book.detail_path(), "/book/5/");
    }
}
