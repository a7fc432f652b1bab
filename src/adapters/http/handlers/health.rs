use actix_web::HttpResponse;

/// Liveness probe
///
/// GET /health
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().body("OK")
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{App, test, web};

  #[actix_web::test]
  async fn test_health() {
    let app =
      test::init_service(App::new().route("/health", web::get().to(health_handler))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, "OK");
  }
}
