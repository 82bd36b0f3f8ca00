//! In-memory film collection and its CRUD operations.
//!
//! The store owns a `Vec<Film>` in insertion order. Ids are assigned as
//! `max(existing ids, 0) + 1` at creation time; there is no separate
//! counter, so deleting the highest id makes it available again.

use crate::error::CoreError;
use crate::film::{Film, FilmPatch, NewFilm};
use crate::types::FilmId;

/* --------------------------------------------------------------------------
   Path / query scalar parsing
   -------------------------------------------------------------------------- */

/// Parse a path segment as a film id.
pub fn parse_film_id(raw: &str) -> Result<FilmId, CoreError> {
    raw.parse().map_err(|_| {
        CoreError::InvalidParameter(format!("film id must be an integer, got '{raw}'"))
    })
}

/// Parse the `minimum-duration` filter value.
///
/// The value must be a finite number strictly greater than zero.
pub fn parse_min_duration(raw: &str) -> Result<f64, CoreError> {
    let min: f64 = raw.parse().map_err(|_| {
        CoreError::InvalidParameter(format!("minimum-duration must be a number, got '{raw}'"))
    })?;
    if !min.is_finite() || min <= 0.0 {
        return Err(CoreError::InvalidParameter(
            "minimum-duration must be strictly positive".to_string(),
        ));
    }
    Ok(min)
}

/* --------------------------------------------------------------------------
   FilmStore
   -------------------------------------------------------------------------- */

/// The in-memory film collection.
#[derive(Debug, Default)]
pub struct FilmStore {
    films: Vec<Film>,
}

impl FilmStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the fixed five-film seed list (ids 1 to 5).
    pub fn with_seed_films() -> Self {
        Self {
            films: seed_films(),
        }
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    fn next_id(&self) -> FilmId {
        self.films.iter().map(|f| f.id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: FilmId) -> Option<usize> {
        self.films.iter().position(|f| f.id == id)
    }

    /// All films, or only those with `duration >= min_duration`, in
    /// insertion order.
    pub fn list(&self, min_duration: Option<f64>) -> Vec<Film> {
        match min_duration {
            None => self.films.clone(),
            Some(min) => self
                .films
                .iter()
                .filter(|f| f.duration >= min)
                .cloned()
                .collect(),
        }
    }

    pub fn get(&self, id: FilmId) -> Result<Film, CoreError> {
        self.films
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { id })
    }

    /// Append a new film under a fresh id.
    ///
    /// Fails with [`CoreError::Conflict`] when a stored film already has
    /// the same title and director (case-insensitive).
    pub fn create(&mut self, new_film: NewFilm) -> Result<Film, CoreError> {
        let duplicate = self.films.iter().any(|f| {
            f.title.to_lowercase() == new_film.title.to_lowercase()
                && f.director.to_lowercase() == new_film.director.to_lowercase()
        });
        if duplicate {
            return Err(CoreError::Conflict(format!(
                "film '{}' by {} already exists",
                new_film.title, new_film.director
            )));
        }

        let film = new_film.into_film(self.next_id());
        self.films.push(film.clone());
        Ok(film)
    }

    /// Replace the film with the given id, or create a new one when no
    /// film matches. Returns the stored film and whether it was created.
    ///
    /// On the create path the requested id is ignored and a fresh id is
    /// assigned. No duplicate title/director check runs on either path;
    /// that check belongs to [`FilmStore::create`] only.
    pub fn replace_or_create(&mut self, id: FilmId, new_film: NewFilm) -> (Film, bool) {
        match self.position(id) {
            Some(pos) => {
                // Every field except the id comes from the candidate;
                // optional fields absent from it are cleared.
                let film = new_film.into_film(id);
                self.films[pos] = film.clone();
                (film, false)
            }
            None => {
                let film = new_film.into_film(self.next_id());
                self.films.push(film.clone());
                (film, true)
            }
        }
    }

    /// Merge a validated patch over the film with the given id.
    ///
    /// A missing target surfaces as [`CoreError::InvalidParameter`] (400),
    /// not `NotFound`; the original API answered 400 here and the behavior
    /// is kept.
    pub fn partial_update(&mut self, id: FilmId, patch: FilmPatch) -> Result<Film, CoreError> {
        let pos = self.position(id).ok_or_else(|| {
            CoreError::InvalidParameter(format!("no film with id {id} to update"))
        })?;

        patch.apply(&mut self.films[pos]);
        Ok(self.films[pos].clone())
    }

    /// Remove and return the film with the given id.
    pub fn delete(&mut self, id: FilmId) -> Result<Film, CoreError> {
        let pos = self.position(id).ok_or(CoreError::NotFound { id })?;
        Ok(self.films.remove(pos))
    }
}

/* --------------------------------------------------------------------------
   Seed data
   -------------------------------------------------------------------------- */

fn seed_films() -> Vec<Film> {
    vec![
        Film {
            id: 1,
            title: "Shang-Chi and the Legend of the Ten Rings".to_string(),
            director: "Destin Daniel Cretton".to_string(),
            duration: 132.0,
            budget: Some(150.0),
            description: Some(
                "Shang-Chi, the master of unarmed weaponry-based Kung Fu, is forced to confront \
                 his past after being drawn into the Ten Rings organization."
                    .to_string(),
            ),
            image_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/7/74/Shang-Chi_and_the_Legend_of_the_Ten_Rings_poster.jpeg"
                    .to_string(),
            ),
        },
        Film {
            id: 2,
            title: "The Matrix".to_string(),
            director: "Lana Wachowski, Lilly Wachowski".to_string(),
            duration: 136.0,
            budget: Some(63.0),
            description: Some(
                "A computer hacker learns from mysterious rebels about the true nature of his \
                 reality and his role in the war against its controllers."
                    .to_string(),
            ),
            image_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/c/c1/The_Matrix_Poster.jpg".to_string(),
            ),
        },
        Film {
            id: 3,
            title: "Summer Wars".to_string(),
            director: "Mamoru Hosoda".to_string(),
            duration: 114.0,
            budget: Some(18.7),
            description: Some(
                "A young math genius solves a complex equation and inadvertently puts a virtual \
                 world's artificial intelligence in a position to destroy Earth."
                    .to_string(),
            ),
            image_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/7/7d/Summer_Wars_poster.jpg".to_string(),
            ),
        },
        Film {
            id: 4,
            title: "The Meyerowitz Stories".to_string(),
            director: "Noah Baumbach".to_string(),
            duration: 112.0,
            budget: None,
            description: Some(
                "An estranged family gathers together in New York City for an event celebrating \
                 the artistic work of their father."
                    .to_string(),
            ),
            image_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/a/af/The_Meyerowitz_Stories.png"
                    .to_string(),
            ),
        },
        Film {
            id: 5,
            title: "her".to_string(),
            director: "Spike Jonze".to_string(),
            duration: 126.0,
            budget: Some(23.0),
            description: Some(
                "In a near future, a lonely writer develops an unlikely relationship with an \
                 operating system designed to meet his every need."
                    .to_string(),
            ),
            image_url: Some(
                "https://upload.wikimedia.org/wikipedia/en/4/44/Her2013Poster.jpg".to_string(),
            ),
        },
    ]
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
