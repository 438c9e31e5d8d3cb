//! Problem Details Finalization
//!
//! Error responses leave `instance` empty because handlers do not know the
//! full request path once routes are nested. This middleware runs outside
//! the router, fills `instance` in and logs server-side failures.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::error::ProblemDetails;

pub async fn problem_details(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    let Some(mut problem) = response.extensions_mut().remove::<ProblemDetails>() else {
        return response;
    };

    if let Some(cause) = problem.log_cause.take() {
        tracing::error!(
            path = %path,
            status = problem.status,
            error = %cause,
            "Request failed"
        );
    }

    problem.instance = path;
    problem.into_response()
}
