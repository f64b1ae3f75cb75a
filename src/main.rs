mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::{
    infrastructure::{
        client_repository::PostgresClientRepository, credit_service::HttpCreditService,
        system_clock::SystemClock, user_repository::PostgresUserRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::register_user_usecase::RegisterUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let mut opt = ConnectOptions::new(dotenvy::var("DATABASE_URL")?);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    let db = Database::connect(opt).await?;
    let client_repository = PostgresClientRepository::new(db.clone());
    let user_repository = PostgresUserRepository::new(db);
    let credit_service = HttpCreditService::new(dotenvy::var("CREDIT_SERVICE_URL")?);
    let register_service = RegisterUserUsecase::new(
        client_repository,
        credit_service,
        user_repository,
        SystemClock,
    );

    let app = Router::new().nest("/api", create_user_router(register_service));

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
