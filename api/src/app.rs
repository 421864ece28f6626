//! Application state and factory
//!
//! This module wires repositories into services and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use bnb_core::repositories::{
    BookingRepository, FavoriteRepository, ListingRepository, MockBookingRepository,
    MockFavoriteRepository, MockListingRepository, MockReviewRepository,
    MockRevokedTokenRepository, MockUserRepository, ReviewRepository, RevokedTokenRepository,
    UserRepository,
};
use bnb_core::services::{
    AdminService, AuthService, AuthServiceConfig, BookingService, Cascade, FavoriteService,
    ListingService, ReviewService, TokenService, TokenServiceConfig, UserService,
};
use bnb_infra::database::MySqlRepositories;
use bnb_shared::config::{CorsConfig, ServerConfig};

use crate::handlers::error::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes;

/// Storage behind the services
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub listings: Arc<dyn ListingRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub revoked_tokens: Arc<dyn RevokedTokenRepository>,
}

impl Repositories {
    /// Process-local storage, used by tests and local experiments
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            listings: Arc::new(MockListingRepository::new()),
            bookings: Arc::new(MockBookingRepository::new()),
            favorites: Arc::new(MockFavoriteRepository::new()),
            reviews: Arc::new(MockReviewRepository::new()),
            revoked_tokens: Arc::new(MockRevokedTokenRepository::new()),
        }
    }
}

impl From<MySqlRepositories> for Repositories {
    fn from(repos: MySqlRepositories) -> Self {
        Self {
            users: repos.users,
            listings: repos.listings,
            bookings: repos.bookings,
            favorites: repos.favorites,
            reviews: repos.reviews,
            revoked_tokens: repos.revoked_tokens,
        }
    }
}

/// Services shared by every worker
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub listings: Arc<ListingService>,
    pub bookings: Arc<BookingService>,
    pub favorites: Arc<FavoriteService>,
    pub reviews: Arc<ReviewService>,
    pub admin: Arc<AdminService>,
}

impl AppState {
    pub fn new(repos: Repositories, tokens: TokenServiceConfig, auth: AuthServiceConfig) -> Self {
        let cascade = Cascade::new(
            repos.listings.clone(),
            repos.bookings.clone(),
            repos.favorites.clone(),
            repos.reviews.clone(),
        );
        let auth = Arc::new(AuthService::new(
            repos.users.clone(),
            repos.revoked_tokens.clone(),
            Arc::new(TokenService::new(tokens)),
            auth,
        ));

        Self {
            users: Arc::new(UserService::new(
                repos.users.clone(),
                cascade.clone(),
                auth.password_hasher(),
            )),
            listings: Arc::new(ListingService::new(repos.listings.clone(), cascade)),
            bookings: Arc::new(BookingService::new(
                repos.listings.clone(),
                repos.bookings.clone(),
            )),
            favorites: Arc::new(FavoriteService::new(
                repos.favorites.clone(),
                repos.listings.clone(),
            )),
            reviews: Arc::new(ReviewService::new(repos.reviews.clone(), repos.listings.clone())),
            admin: Arc::new(AdminService::new(repos.bookings, repos.listings)),
            auth,
        }
    }
}

/// Create and configure the application
pub fn create_app(
    app_state: web::Data<AppState>,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(
            web::JsonConfig::default()
                .limit(server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .wrap(JwtAuth::new())
                .configure(routes::configure),
        )
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "fullstackbnb-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
