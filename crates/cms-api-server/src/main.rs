use anyhow::Result;
use axum::{
    routing::{get, put},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;

use cms_api_server::config::Settings;
use cms_api_server::database::{ensure_schema, DbPool};
use cms_api_server::handlers;
use cms_api_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,cms_api_server=debug".to_string()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .init();

    info!("🚀 Starting CMS API Server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Initialize database pool
    let db_pool = DbPool::new(&settings.database).await?;
    info!("✅ Database connection established");

    ensure_schema(db_pool.get_pool()).await?;
    info!("✅ Database schema ready");

    let state = AppState::new(db_pool, settings.clone());
    let app = build_router(state);

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("🎯 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Public routes (site navigation and probes)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check))
        .route("/navigation", get(handlers::navigation::navigation_handler));

    // Admin routes (menu management and link pickers)
    let admin_routes = Router::new()
        .route(
            "/menus",
            get(handlers::menus::list_menus_handler)
                .post(handlers::menus::create_menu_handler)
                .patch(handlers::menus::reorder_menus_handler),
        )
        .route(
            "/menus/{id}",
            put(handlers::menus::update_menu_handler)
                .delete(handlers::menus::delete_menu_handler),
        )
        .route("/pages", get(handlers::lookups::list_pages_handler))
        .route("/pages/{id}", get(handlers::lookups::get_page_handler))
        .route("/courses", get(handlers::lookups::list_courses_handler))
        .route("/courses/{id}", get(handlers::lookups::get_course_handler))
        .route("/news", get(handlers::lookups::list_news_handler))
        .route("/news/{id}", get(handlers::lookups::get_news_handler));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
        // CORS
        .layer(CorsLayer::permissive())
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}
