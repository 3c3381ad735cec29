pub mod auth;
pub mod creators;
pub mod orders;
pub mod startups;

use actix_web::web;

use crate::realtime;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedProfile extractor) ──
    cfg.service(
        web::scope("/auth")
            .route("/me", web::get().to(auth::me))
            .route("/choose-role", web::post().to(auth::choose_role)),
    );

    // ── Creator directory (all protected — require valid JWT) ──
    cfg.service(
        web::scope("/creators")
            .route("", web::get().to(creators::list_creators))
            .route("/me", web::put().to(creators::upsert_my_profile))
            .route("/{user_id}", web::get().to(creators::get_creator)),
    );

    // ── Startup company profile ──
    cfg.service(
        web::scope("/startups")
            .route("/me", web::get().to(startups::my_profile))
            .route("/me", web::put().to(startups::upsert_my_profile)),
    );

    // ── Order lifecycle ──
    // /ws and /metrics are registered before /{id} so they are not captured
    // by the id matcher.
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(orders::list_orders))
            .route("", web::post().to(orders::create_order))
            .route("/ws", web::get().to(realtime::ws_connect))
            .route("/metrics", web::get().to(orders::get_metrics))
            .route("/{id}", web::get().to(orders::get_order))
            .route("/{id}/accept", web::post().to(orders::accept_order))
            .route("/{id}/reject", web::post().to(orders::reject_order))
            .route("/{id}/deliver", web::post().to(orders::deliver_order))
            .route(
                "/{id}/request-revision",
                web::post().to(orders::request_revision),
            )
            .route("/{id}/complete", web::post().to(orders::complete_order)),
    );
}
