//! Movie catalog types.
//!
//! The catalog is static: a fixed list of titles created at process start and
//! never mutated. Everything downstream reads from it; nothing writes to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A movie identifier.
///
/// Ids are small integers assigned by the catalog; they also appear verbatim
/// in the storage key for each movie's occupied-seat set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u32);

impl MovieId {
    /// Create a movie id from a raw integer.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Return the raw integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// The catalog identifier.
    pub id: MovieId,

    /// Display title.
    pub title: String,

    /// Poster image URL.
    pub poster_url: String,
}

/// The built-in movie catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        let entries: [(u32, &str, &str); 10] = [
            (
                1,
                "Noites de Cabíria",
                "https://br.web.img3.acsta.net/pictures/210/182/21018246_20130708173323076.jpg",
            ),
            (
                2,
                "Harakiri",
                "https://upload.wikimedia.org/wikipedia/pt/a/ab/Harakiri_%28filme%29.jpg",
            ),
            (
                3,
                "Os Fuzis",
                "https://upload.wikimedia.org/wikipedia/pt/7/7f/Fuzis.jpg",
            ),
            (
                4,
                "O Homem de Palha",
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS87psWrO5RYgydCx-olJXodzS1YJbneENXGg&s",
            ),
            (
                5,
                "Ladrões de Bicicleta",
                "https://br.web.img2.acsta.net/pictures/210/073/21007343_20130521200209704.jpg",
            ),
            (
                6,
                "A coisa",
                "https://m.media-amazon.com/images/M/MV5BYTA3NDU5MWEtNTk4Yy00ZDNkLThmZTQtMjU3ZGVhYzAyMzU4XkEyXkFqcGc@._V1_FMjpg_UX1000_.jpg",
            ),
            (
                7,
                "Vertigo",
                "https://upload.wikimedia.org/wikipedia/commons/thumb/7/75/Vertigomovie_restoration.jpg/1200px-Vertigomovie_restoration.jpg",
            ),
            (
                8,
                "Onibaba",
                "https://images.squarespace-cdn.com/content/v1/58b866f417bffc4dc469acab/1617768125124-W0XKFYZBSVGX576YASDG/MV5BMWRiYmNmNTEtM2FlNC00ODRlLWFiMmQtYmNlNzgxY2MzMzNkL2ltYWdlXkEyXkFqcGdeQXVyNjc1NTYyMjg%40._V1_.jpg",
            ),
            (
                9,
                "O Massacre da Serra Elétrica",
                "https://m.media-amazon.com/images/M/MV5BYjE1MGJkMjUtY2VkNi00N2U1LWI2NWEtMDExNGYzYjRkZTM0XkEyXkFqcGc@._V1_FMjpg_UX1000_.jpg",
            ),
            (
                10,
                "Aliens 2",
                "https://br.web.img3.acsta.net/medias/nmedia/18/96/31/17/20459002.jpg",
            ),
        ];

        let movies = entries
            .into_iter()
            .map(|(id, title, poster_url)| Movie {
                id: MovieId::new(id),
                title: title.to_string(),
                poster_url: poster_url.to_string(),
            })
            .collect();

        Self { movies }
    }

    /// All movies, in catalog order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id.
    #[must_use]
    pub fn find(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_movies_with_sequential_ids() {
        let catalog = Catalog::new();
        assert_eq!(catalog.movies().len(), 10);

        for (index, movie) in catalog.movies().iter().enumerate() {
            let expected = u32::try_from(index).unwrap() + 1;
            assert_eq!(movie.id, MovieId::new(expected));
        }
    }

    #[test]
    fn find_known_and_unknown_ids() {
        let catalog = Catalog::new();

        let vertigo = catalog.find(MovieId::new(7)).unwrap();
        assert_eq!(vertigo.title, "Vertigo");

        assert!(catalog.find(MovieId::new(9999)).is_none());
    }

    #[test]
    fn movie_id_display_and_parse() {
        let id = MovieId::new(42);
        assert_eq!(id.to_string(), "42");

        let parsed: MovieId = "42".parse().unwrap();
        assert_eq!(parsed, id);

        assert!("not-a-number".parse::<MovieId>().is_err());
    }

    #[test]
    fn movie_serde_layout() {
        let movie = Movie {
            id: MovieId::new(3),
            title: "Os Fuzis".to_string(),
            poster_url: "https://example.com/poster.jpg".to_string(),
        };

        let json = serde_json::to_string(&movie).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"title":"Os Fuzis","posterUrl":"https://example.com/poster.jpg"}"#
        );

        let parsed: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, movie);
    }
}
