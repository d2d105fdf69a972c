use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin_group, auth, key, list, log, role, user, whitelist},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        admin_group::get_admin_groups,
        admin_group::get_permission_catalog,
        admin_group::create_admin_group,
        admin_group::update_admin_group,
        admin_group::delete_admin_group,
        role::get_roles,
        role::get_server_roles,
        role::create_role,
        role::update_role,
        role::delete_role,
        whitelist::get_whitelist_profile,
        whitelist::submit_whitelist,
        list::get_public_list,
        list::get_lists,
        list::create_list,
        list::update_list,
        list::delete_list,
        key::get_keys,
        key::create_key,
        key::delete_key,
        user::get_users,
        user::update_user,
        log::get_logs,
    ),
    info(
        title = "Slotboard API",
        description = "Discord-linked whitelist and admin group management for a game server"
    )
)]
struct ApiDoc;

/// Every route the application serves.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/admingroups", get(admin_group::get_admin_groups))
        .route(
            "/api/admingroups/permissions",
            get(admin_group::get_permission_catalog),
        )
        .route("/api/admingroups", post(admin_group::create_admin_group))
        .route(
            "/api/admingroups/{group_name}",
            put(admin_group::update_admin_group),
        )
        .route(
            "/api/admingroups/{group_name}",
            delete(admin_group::delete_admin_group),
        )
        .route("/api/roles", get(role::get_roles))
        .route("/api/roles", post(role::create_role))
        .route("/api/roles/{role_id}", put(role::update_role))
        .route("/api/roles/{role_id}", delete(role::delete_role))
        .route("/api/serverroles", get(role::get_server_roles))
        .route(
            "/api/profile/whitelist",
            get(whitelist::get_whitelist_profile),
        )
        .route("/api/profile/whitelist", post(whitelist::submit_whitelist))
        .route("/api/lists", get(list::get_lists))
        .route("/api/lists", post(list::create_list))
        .route("/api/lists/{list_name}", put(list::update_list))
        .route("/api/lists/{list_name}", delete(list::delete_list))
        .route("/lists/{list_name}", get(list::get_public_list))
        .route("/api/keys", get(key::get_keys))
        .route("/api/keys", post(key::create_key))
        .route("/api/keys/{key}", delete(key::delete_key))
        .route("/api/users", get(user::get_users))
        .route("/api/users/{discord_id}", put(user::update_user))
        .route("/api/logs", get(log::get_logs))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
