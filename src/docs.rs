use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{auth, records};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "medtrack",
        description = "Personal medication-tracking API: log morning/afternoon/evening doses per day."
    ),
    paths(
        auth::handlers::login,
        auth::handlers::register,
        auth::handlers::me,
        auth::handlers::list_users,
        auth::handlers::update_user,
        records::handlers::create_record,
        records::handlers::list_records,
        records::handlers::recent_records,
        records::handlers::update_record,
        records::handlers::list_all_records,
    ),
    components(schemas(
        auth::dto::RegisterRequest,
        auth::dto::LoginForm,
        auth::dto::TokenResponse,
        auth::dto::UserResponse,
        auth::dto::UpdateUserRequest,
        records::dto::RecordPayload,
        records::dto::RecordResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and token issuance"),
        (name = "users", description = "User information"),
        (name = "records", description = "Medication dose logs"),
        (name = "admin", description = "Administrator endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_endpoint_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/token",
            "/register",
            "/users/me",
            "/users",
            "/medication-records",
            "/medication-records/recent",
            "/medication-records/{id}",
            "/admin/users/{id}",
            "/admin/medication-records",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
