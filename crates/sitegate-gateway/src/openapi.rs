// OpenAPI specification generation
//
// Served at /api-doc/openapi.json for the dashboard tooling.

use sitegate_contracts::{
    ChatData, ChatOption, CheckResponse, HeaderUpdateRequest, HeroData, LoginRequest,
    LoginResponse, LogoutResponse, NavigationLink, SessionUser, SignupRequest, StatsResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Sitegate gateway
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::auth::routes::signup,
        crate::auth::routes::login,
        crate::auth::routes::logout,
        crate::auth::routes::check,
        crate::hero::get_hero,
        crate::hero::list_heroes,
        crate::hero::create_hero,
        crate::hero::update_hero,
        crate::hero::delete_hero,
        crate::footer::get_footer,
        crate::footer::create_footer,
        crate::footer::update_about,
        crate::footer::update_contact,
        crate::footer::delete_contact_item,
        crate::footer::update_social_links,
        crate::footer::delete_social_link,
        crate::footer::update_section,
        crate::footer::delete_section,
        crate::header::get_header,
        crate::header::update_links,
        crate::services::list_services,
        crate::services::create_service,
        crate::services::update_service,
        crate::services::delete_service,
        crate::testimonials::list_testimonials,
        crate::testimonials::create_testimonial,
        crate::testimonials::update_testimonial,
        crate::testimonials::update_status,
        crate::testimonials::delete_testimonial,
        crate::announcements::list_announcements,
        crate::announcements::create_announcement,
        crate::announcements::update_announcement,
        crate::announcements::update_status,
        crate::announcements::delete_announcement,
        crate::how::list_sections,
        crate::how::get_section,
        crate::how::create_section,
        crate::how::update_section,
        crate::how::delete_section,
        crate::users::list_users,
        crate::users::update_users,
        crate::users::delete_user,
        crate::webpages::get_webpages,
        crate::webpages::get_stats,
    ),
    components(
        schemas(
            SignupRequest, LoginRequest, LoginResponse, LogoutResponse,
            CheckResponse, SessionUser,
            HeroData, ChatData, ChatOption,
            HeaderUpdateRequest, NavigationLink,
            StatsResponse,
        )
    ),
    tags(
        (name = "auth", description = "Session endpoints"),
        (name = "hero", description = "Hero section proxy endpoints"),
        (name = "footer", description = "Footer content proxy endpoints"),
        (name = "header", description = "Header navigation proxy endpoints"),
        (name = "services", description = "Service package proxy endpoints"),
        (name = "testimonials", description = "Testimonial proxy endpoints"),
        (name = "announcements", description = "Announcement proxy endpoints"),
        (name = "how", description = "How-it-works section proxy endpoints"),
        (name = "users", description = "User administration proxy endpoints"),
        (name = "webpages", description = "Public website aggregate endpoints")
    ),
    info(
        title = "Sitegate Gateway",
        description = "Authenticated proxy gateway for the website content backend",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
