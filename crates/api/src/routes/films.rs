//! Route definitions for the film catalogue, mounted at `/films`.
//!
//! ```text
//! GET    /       -> list_films
//! POST   /       -> create_film
//! GET    /{id}   -> get_film
//! PUT    /{id}   -> replace_film
//! PATCH  /{id}   -> patch_film
//! DELETE /{id}   -> delete_film
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(films::list_films).post(films::create_film))
        .route(
            "/{id}",
            get(films::get_film)
                .put(films::replace_film)
                .patch(films::patch_film)
                .delete(films::delete_film),
        )
}
