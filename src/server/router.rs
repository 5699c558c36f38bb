//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here with its OpenAPI specification. Swagger UI is served
//! at `/docs` with the generated document at `/docs/openapi.json`.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::{
        security::{Http, HttpAuthScheme, SecurityScheme},
        server::Server,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the `bearer_auth` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                Http::builder()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /signup` - Register a user
/// - `POST /login` - Exchange credentials for an access token
/// - `GET /users` - List users
/// - `GET|POST /characters`, `GET /characters/{id}` - Characters
/// - `GET|POST /planets`, `GET /planets/{id}` - Planets
/// - `GET|POST /vehicles`, `GET /vehicles/{id}` - Vehicles
/// - `GET /user/favorites` - Logged in user's favourites
/// - `POST|DELETE /user/favorites/{kind}/{id}` - Add or remove a favourite
///
/// `backend_url` is advertised as the server in the OpenAPI document.
pub fn routes(backend_url: &str) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Holocron", description = "Holocron API"),
        modifiers(&SecurityAddon),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Signup and login"),
            (name = controller::user::USER_TAG, description = "Registered users"),
            (name = controller::catalog::CATALOG_TAG, description = "Characters, planets and vehicles"),
            (name = controller::favourite::FAVOURITE_TAG, description = "The logged in user's favourites"),
        )
    )]
    struct ApiDoc;

    let mut openapi = ApiDoc::openapi();
    openapi.servers = Some(vec![Server::new(backend_url)]);

    let (routes, api) = OpenApiRouter::with_openapi(openapi)
        .routes(routes!(controller::auth::signup))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(
            controller::catalog::get_characters,
            controller::catalog::create_character
        ))
        .routes(routes!(controller::catalog::get_character))
        .routes(routes!(
            controller::catalog::get_planets,
            controller::catalog::create_planet
        ))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(
            controller::catalog::get_vehicles,
            controller::catalog::create_vehicle
        ))
        .routes(routes!(controller::catalog::get_vehicle))
        .routes(routes!(controller::favourite::get_favourites))
        .routes(routes!(
            controller::favourite::add_favourite,
            controller::favourite::remove_favourite
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}

/// Builds the complete application: routes, request tracing, permissive CORS and state.
pub fn app(state: AppState, backend_url: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes(backend_url)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
