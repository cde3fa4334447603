//! OpenAPI 3 document assembled from handler annotations.
//!
//! Served as JSON at `/api-docs/openapi.json` and rendered by the Swagger UI
//! page at `/api-docs`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Society Management API",
        description = "Residents, units, billing, visitors, facilities and community tools for a housing society."
    ),
    paths(
        routes::health::health_check,
        handlers::auth::login,
        handlers::auth::me,
        handlers::users::list,
        handlers::users::create,
        handlers::users::get_by_id,
        handlers::users::update,
        handlers::users::delete,
        handlers::staff::list,
        handlers::staff::create,
        handlers::staff::update,
        handlers::staff::delete,
        handlers::staff::record,
        handlers::units::list,
        handlers::units::get_by_id,
        handlers::units::create,
        handlers::units::update,
        handlers::units::delete,
        handlers::household::add_family_member,
        handlers::household::update_family_member,
        handlers::household::remove_family_member,
        handlers::household::add_vehicle,
        handlers::household::update_vehicle,
        handlers::household::remove_vehicle,
        handlers::household::add_pet,
        handlers::household::remove_pet,
        handlers::tickets::list,
        handlers::tickets::my,
        handlers::tickets::get_by_id,
        handlers::tickets::create,
        handlers::tickets::update,
        handlers::bills::list,
        handlers::bills::my,
        handlers::bills::summary,
        handlers::bills::create,
        handlers::bills::update,
        handlers::bills::pay,
        handlers::bills::delete,
        handlers::visitors::list,
        handlers::visitors::check_in,
        handlers::visitors::check_out,
        handlers::visitors::update,
        handlers::visitors::delete,
        handlers::facilities::list,
        handlers::facilities::create,
        handlers::facilities::update,
        handlers::facilities::delete,
        handlers::facilities::list_bookings,
        handlers::facilities::create_booking,
        handlers::facilities::update_booking,
        handlers::facilities::delete_booking,
        handlers::notices::list,
        handlers::notices::create,
        handlers::notices::update,
        handlers::notices::delete,
        handlers::polls::list,
        handlers::polls::create,
        handlers::polls::update,
        handlers::polls::vote,
        handlers::polls::delete,
        handlers::vendors::list,
        handlers::vendors::get_by_id,
        handlers::vendors::create,
        handlers::vendors::update,
        handlers::vendors::delete,
        handlers::documents::list,
        handlers::documents::create,
        handlers::documents::delete,
        handlers::parking::list,
        handlers::parking::create,
        handlers::parking::update,
        handlers::emergency::list,
        handlers::emergency::create,
        handlers::emergency::update,
        handlers::emergency::delete,
    ),
    components(schemas(
        society_db::models::user::UserSummary,
        society_db::models::unit::UnitSummary,
        society_db::models::facility::FacilitySummary,
        society_core::household::FamilyMember,
        society_core::household::Vehicle,
        society_core::household::Pet,
        society_core::poll::PollOption,
        society_core::staff::AttendanceEntry,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and current user"),
        (name = "users", description = "Resident and staff accounts"),
        (name = "staff", description = "Society staff register and attendance"),
        (name = "units", description = "Units and their households"),
        (name = "tickets", description = "Maintenance tickets"),
        (name = "bills", description = "Maintenance and utility bills"),
        (name = "visitors", description = "Gate visitor log"),
        (name = "facilities", description = "Shared facilities and bookings"),
        (name = "notices", description = "Notice board"),
        (name = "polls", description = "Community polls"),
        (name = "vendors", description = "Service vendors"),
        (name = "documents", description = "Society documents"),
        (name = "parking", description = "Parking slots"),
        (name = "emergency", description = "Emergency contacts"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected operations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_protected_and_public_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/auth/login"));
        assert!(doc.paths.paths.contains_key("/api/polls/{id}/vote"));
        assert!(doc.paths.paths.contains_key("/api/users/staff/{id}/attendance"));
    }

    #[test]
    fn bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
