use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use musicdb::{auth, db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/musicdb.db".to_string());
    let pool = db::init_pool(&database_path);
    db::run_migrations(&pool);

    // Seed app name and the admin credential if this is a fresh database
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    db::seed_settings(&pool, &admin_password);

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+) — generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Marketing pages
            .route("/", web::get().to(handlers::page_handlers::landing))
            .route("/about", web::get().to(handlers::page_handlers::about))
            // Onboarding flow
            .route("/onboarding", web::get().to(handlers::onboarding_handlers::start))
            .route("/onboarding/step/{step}", web::get().to(handlers::onboarding_handlers::step_page))
            .route("/onboarding/step/{step}", web::post().to(handlers::onboarding_handlers::step_submit))
            .route("/onboarding/step/{step}/back", web::post().to(handlers::onboarding_handlers::step_back))
            .route("/onboarding/resume/{token}", web::get().to(handlers::onboarding_handlers::resume))
            .route("/onboarding/complete", web::get().to(handlers::onboarding_handlers::complete))
            // Admin login
            .route("/admin/login", web::get().to(handlers::admin_handlers::login_page))
            .route("/admin/login", web::post().to(handlers::admin_handlers::login_submit))
            // Protected admin routes
            .service(
                web::scope("/admin")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_admin))
                    .route("/dashboard", web::get().to(handlers::admin_handlers::dashboard))
                    .route("/logout", web::post().to(handlers::admin_handlers::logout))
                    .route("/submissions/{id}/delete", web::post().to(handlers::admin_handlers::delete)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
