/// Identifier type for film records.
pub type FilmId = i64;
