use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizdeck_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let state = Arc::new(
        AppState::new(config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    log::info!(
        "starting HTTP server on {}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.cors_allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::admin_login)
            .service(handlers::create_quiz)
            .service(handlers::get_quizzes)
            .service(handlers::update_quiz)
            .service(handlers::delete_quiz)
            .service(handlers::create_question)
            .service(handlers::get_questions)
            .service(handlers::update_question)
            .service(handlers::delete_question)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(handlers::health_check_live)
    })
    .bind(bind_addr)?
    .run()
    .await
}
