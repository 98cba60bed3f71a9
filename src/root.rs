use std::error::Error;

use actix_web::{http, HttpResponse};

/// Canonical deployment confirmation banner. The pipeline greps the deployed
/// instance for this exact text, so any edit here must be mirrored in the
/// pipeline's expected-output check.
pub(crate) const DEPLOY_BANNER: &str = "CI/CD Pipeline Working on Jenkins + Docker! If you're seeing this page, it means updates have been automatically Served successfully. CICD Webhook trigger validation test count - 2";

pub(crate) async fn get() -> Result<HttpResponse, Box<dyn Error>> {
    Ok(HttpResponse::Ok()
        .insert_header(http::header::ContentType(mime::TEXT_PLAIN_UTF_8))
        .body(DEPLOY_BANNER))
}
