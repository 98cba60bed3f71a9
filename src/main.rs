use actix_web::{web, App, HttpServer};

mod config;
mod health;
mod root;
mod version;

pub(crate) const CARGO_NAME: &str = env!("CARGO_PKG_NAME");
pub(crate) const CARGO_VERSION: &str = env!("CARGO_PKG_VERSION");

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root::get))
        .route("/health", web::get().to(health::get))
        .route("/version", web::get().to(version::get));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config::load() {
        Ok(v) => v,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    log::info!("listening on {}", config.bind);
    HttpServer::new(|| App::new().configure(routes))
        .workers(config.workers)
        .max_connection_rate(config.max_connection_rate)
        .bind(config.bind.clone())?
        .run()
        .await
}
