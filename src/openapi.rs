use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

use crate::extractors::auth::SESSION_COOKIE;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Work Journal API",
        version = "0.1.0",
        description = "Backend API for a personal work journal: dated entries grouped by week",
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Auth
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::logout,
        crate::handlers::auth_handler::get_me,

        // Entries
        crate::handlers::entries_handler::list_entries,
        crate::handlers::entries_handler::get_entry,
        crate::handlers::entries_handler::create_entry,
        crate::handlers::entries_handler::update_entry,
        crate::handlers::entries_handler::delete_entry,
    ),
    components(
        schemas(
            crate::models::Entry,
            crate::models::EntryType,
            crate::models::WeekBucket,
            crate::models::EntryInput,
            crate::models::EntryMutationResponse,
            crate::handlers::auth_handler::LoginRequest,
            crate::handlers::auth_handler::SessionResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Owner session endpoints"),
        (name = "entries", description = "Journal entry management"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
            )
        }
    }
}
