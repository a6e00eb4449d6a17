use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Created response helper: 201 with a `Location` header and no body
pub struct Created {
    pub location: String,
}

impl Created {
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl IntoResponse for Created {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, [(header::LOCATION, self.location)]).into_response()
    }
}

/// No content response helper (common pattern for PUT and DELETE endpoints)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

/// Not found response helper: 404 with an empty body
pub struct NotFound;

impl IntoResponse for NotFound {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NOT_FOUND.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sets_location_header() {
        let response = Created::at("/v1/users/abc").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/v1/users/abc"
        );
    }

    #[test]
    fn no_content_is_204() {
        assert_eq!(NoContent.into_response().status(), StatusCode::NO_CONTENT);
    }
}
