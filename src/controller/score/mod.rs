pub mod http_handlers;

use actix_web::{HttpResponse, web};

/// Registers the scoring routes. Callers provide `web::Data<TeeService>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(HttpResponse::Ok))
        .route("/rounds", web::post().to(http_handlers::create_round))
        .route(
            "/rounds/posting",
            web::post().to(http_handlers::posting_payload),
        )
        .route("/statistics", web::post().to(http_handlers::statistics))
        .route("/differential", web::post().to(http_handlers::differential))
        .route("/handicap", web::post().to(http_handlers::handicap))
        .route("/tees", web::post().to(http_handlers::tees));
}
