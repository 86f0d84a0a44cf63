use actix_web::web::Data;
use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;
use log::info;
use sqlx::postgres::PgPoolOptions;
use tripvote::config::Config;
use tripvote::database::sqlx::PgSqlxManager;
use tripvote::impls::tokener::jwt::JWT;
use tripvote::{routes, AccessTtl};

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env().expect("failed to load configuration");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    sqlx::migrate!().run(&pool).await.expect("failed to run migrations");
    let ttl = AccessTtl(chrono::Duration::minutes(config.token_ttl_minutes));
    info!("listening on {}:{}", config.bind_address, config.port);
    let secret = config.token_secret.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(PgSqlxManager::new(pool.clone())))
            .app_data(Data::new(JWT::new(secret.clone())))
            .app_data(Data::new(ttl))
            .app_data(routes::json_config())
            .configure(routes::configure::<PgSqlxManager>(secret.clone()))
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
