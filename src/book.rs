use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use strum::VariantNames;

pub type BookId = i64;

/// A single record in the catalogue. The `id` is supplied by the client on creation and is the key
/// the record is stored under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
}

/// The closed set of genres a book may belong to. Values travel over the wire as their display
/// names, e.g. `"Science Fiction"`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::VariantNames,
)]
pub enum Genre {
    #[strum(serialize = "Science Fiction")]
    SciFi,
    #[strum(serialize = "Fantasy")]
    Fantasy,
    #[strum(serialize = "Horror")]
    Horror,
    #[strum(serialize = "Mystery")]
    Mystery,
    #[strum(serialize = "Romance")]
    Romance,
    #[strum(serialize = "Thriller")]
    Thriller,
}

impl Serialize for Genre {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Genre::from_str(&value).map_err(|_| de::Error::unknown_variant(&value, Genre::VARIANTS))
    }
}

/// The records every fresh catalogue starts with.
pub fn seed() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: String::from("The Hobbit"),
            author: String::from("J.R.R. Tolkien"),
            publication_year: 1937,
            genre: Genre::SciFi,
        },
        Book {
            id: 2,
            title: String::from("The Lord of the Rings"),
            author: String::from("J.R.R. Tolkien"),
            publication_year: 1954,
            genre: Genre::Fantasy,
        },
        Book {
            id: 3,
            title: String::from("The Return of the King"),
            author: String::from("J.R.R. Tolkien"),
            publication_year: 1955,
            genre: Genre::Fantasy,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn genre_uses_display_names_on_the_wire() {
        assert_eq!(Genre::SciFi.to_string(), "Science Fiction");
        assert_eq!(Genre::from_str("Thriller").unwrap(), Genre::Thriller);
        assert_eq!(
            serde_json::to_value(Genre::SciFi).unwrap(),
            json!("Science Fiction")
        );
    }

    #[test]
    fn unknown_genre_lists_accepted_values() {
        let err = serde_json::from_value::<Genre>(json!("SCI_FI")).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("unknown variant `SCI_FI`"), "{}", msg);
        assert!(msg.contains("Science Fiction"), "{}", msg);
        assert!(msg.contains("Thriller"), "{}", msg);
    }

    #[test]
    fn book_from_json() {
        let book: Book = serde_json::from_value(json!({
            "id": 7,
            "title": "Dune",
            "author": "Frank Herbert",
            "publication_year": 1965,
            "genre": "Science Fiction",
            "isbn": "ignored"
        }))
        .unwrap();

        assert_eq!(
            book,
            Book {
                id: 7,
                title: String::from("Dune"),
                author: String::from("Frank Herbert"),
                publication_year: 1965,
                genre: Genre::SciFi,
            }
        );
    }

    #[test]
    fn book_missing_field() {
        let res = serde_json::from_value::<Book>(json!({
            "id": 7,
            "title": "Dune",
            "genre": "Science Fiction"
        }));

        assert!(res.is_err());
    }

    #[test]
    fn seed_has_three_unique_ids() {
        let ids: Vec<BookId> = seed().iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
