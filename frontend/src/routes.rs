//! Hash-based routing.
//!
//! The app lives behind URL fragments (`#/study`, `#/study/lessons/3`, ...)
//! so it can be served as a static bundle next to the API without any
//! server-side rewrite rules. Parsing and printing are pure so they can be
//! tested off the browser; `app.rs` wires them to `location.hash`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Study,
    StudyLesson(i64),
    Admin,
    AdminLesson(i64),
}

impl Route {
    /// Parses a `location.hash` value. Unknown or malformed hashes fall
    /// back to the home page rather than erroring.
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["study"] => Route::Study,
            ["study", "lessons", id] => match id.parse() {
                Ok(id) => Route::StudyLesson(id),
                Err(_) => Route::Study,
            },
            ["study", "lessons"] => Route::Study,
            ["admin"] => Route::Admin,
            ["admin", "lessons"] => Route::Admin,
            ["admin", "lessons", id] => match id.parse() {
                Ok(id) => Route::AdminLesson(id),
                Err(_) => Route::Admin,
            },
            _ => Route::Home,
        }
    }

    /// The `href` fragment for this route, usable directly on anchors.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Study => "#/study".to_string(),
            Route::StudyLesson(id) => format!("#/study/lessons/{}", id),
            Route::Admin => "#/admin".to_string(),
            Route::AdminLesson(id) => format!("#/admin/lessons/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/study"), Route::Study);
        assert_eq!(Route::parse("#/study/lessons/3"), Route::StudyLesson(3));
        assert_eq!(Route::parse("#/admin"), Route::Admin);
        assert_eq!(Route::parse("#/admin/lessons/12"), Route::AdminLesson(12));
    }

    #[test]
    fn malformed_ids_fall_back_to_the_listing() {
        assert_eq!(Route::parse("#/study/lessons/abc"), Route::Study);
        assert_eq!(Route::parse("#/admin/lessons/"), Route::Admin);
    }

    #[test]
    fn unknown_hashes_fall_back_home() {
        assert_eq!(Route::parse("#/nowhere"), Route::Home);
        assert_eq!(Route::parse("#/study/extra/deep/path"), Route::Home);
    }

    #[test]
    fn href_round_trips() {
        for route in [
            Route::Home,
            Route::Study,
            Route::StudyLesson(7),
            Route::Admin,
            Route::AdminLesson(7),
        ] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
