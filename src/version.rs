use std::error::Error;

use actix_web::HttpResponse;

use crate::{CARGO_NAME, CARGO_VERSION};

pub(crate) async fn get() -> Result<HttpResponse, Box<dyn Error>> {
    Ok(HttpResponse::Ok().body(format!("{CARGO_NAME} {CARGO_VERSION}")))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::*;

    #[actix_web::test]
    async fn reports_package_name_and_version() {
        let app = test::init_service(App::new().route("/version", web::get().to(get))).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/version").to_request()).await;
        assert!(res.status().is_success());
        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert_eq!(body, format!("{CARGO_NAME} {CARGO_VERSION}"));
    }
}
