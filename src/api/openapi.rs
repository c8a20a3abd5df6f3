//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    appointments, auth, checklists, clients, equipment, health, installations, reports, stats,
    users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediparc API",
        version = "1.0.0",
        description = "Field Service Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Mediparc Team", email = "contact@mediparc.fr")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Clients
        clients::list_clients,
        clients::map_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Catalog
        equipment::list_catalog,
        equipment::get_catalog_equipment,
        equipment::create_catalog_equipment,
        equipment::update_catalog_equipment,
        equipment::delete_catalog_equipment,
        // Installations
        installations::list_client_equipment,
        installations::create_installation,
        installations::update_installation,
        installations::record_maintenance,
        installations::delete_installation,
        // Reports
        reports::list_reports,
        reports::get_report,
        reports::create_report,
        reports::update_report,
        reports::delete_report,
        // Checklists
        checklists::list_checklists,
        checklists::get_checklist,
        checklists::create_checklist,
        checklists::update_checklist,
        checklists::delete_checklist,
        checklists::create_checklist_item,
        checklists::delete_checklist_item,
        // Appointments
        appointments::list_appointments,
        appointments::get_appointment,
        appointments::create_appointment,
        appointments::update_appointment,
        appointments::delete_appointment,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            crate::error::ErrorResponse,
            crate::maintenance::Tier,
            crate::maintenance::MaintenanceStatus,
            crate::models::user::Role,
            crate::models::user::User,
            crate::models::user::UserInfo,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::client::Client,
            crate::models::client::ClientSummary,
            crate::models::client::ClientDetails,
            crate::models::client::ClientMapMarker,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            crate::models::equipment::CatalogEquipment,
            crate::models::equipment::CreateCatalogEquipment,
            crate::models::equipment::UpdateCatalogEquipment,
            crate::models::installation::Installation,
            crate::models::installation::InstallationDetails,
            crate::models::installation::CreateInstallation,
            crate::models::installation::UpdateInstallation,
            crate::models::installation::RecordMaintenance,
            crate::models::report::Report,
            crate::models::report::CreateReport,
            crate::models::report::UpdateReport,
            crate::models::checklist::Checklist,
            crate::models::checklist::ChecklistItem,
            crate::models::checklist::ChecklistDetails,
            crate::models::checklist::CreateChecklist,
            crate::models::checklist::UpdateChecklist,
            crate::models::checklist::CreateChecklistItem,
            crate::models::appointment::Appointment,
            crate::models::appointment::CreateAppointment,
            crate::models::appointment::UpdateAppointment,
            auth::LoginRequest,
            auth::LoginResponse,
            health::HealthResponse,
            stats::DashboardStats,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Session authentication"),
        (name = "users", description = "User management"),
        (name = "clients", description = "Client practices"),
        (name = "catalog", description = "Equipment catalog"),
        (name = "installations", description = "Installed equipment and maintenance"),
        (name = "reports", description = "Service reports"),
        (name = "checklists", description = "Checklist templates"),
        (name = "appointments", description = "Scheduled interventions"),
        (name = "stats", description = "Dashboard statistics"),
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
