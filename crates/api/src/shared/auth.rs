use crate::error::MoyeoraError;
use actix_web::HttpRequest;
use moyeora_domain::ID;
use moyeora_infra::MoyeoraContext;

/// Set by the gateway in front of this service to the id of the signed in user
pub const USER_ID_HEADER: &str = "moyeora-user-id";
pub const ADMIN_KEY_HEADER: &str = "moyeora-admin-key";

/// The user making the request. It is extracted per request and passed to
/// the use cases explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestUser {
    pub user_id: ID,
}

fn get_header<'a>(req: &'a HttpRequest, name: &str) -> Result<Option<&'a str>, MoyeoraError> {
    match req.headers().get(name) {
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| MoyeoraError::Unauthorized(format!("Malformed {} header", name))),
        None => Ok(None),
    }
}

/// Route guard for routes acting on behalf of a user
pub fn protect_route(req: &HttpRequest) -> Result<RequestUser, MoyeoraError> {
    let user_id = get_header(req, USER_ID_HEADER)?.ok_or_else(|| {
        MoyeoraError::Unauthorized(format!("Unable to find user id in {} header", USER_ID_HEADER))
    })?;

    user_id
        .parse::<ID>()
        .map(|user_id| RequestUser { user_id })
        .map_err(|e| MoyeoraError::Unauthorized(e.to_string()))
}

/// Route guard for operator routes
pub fn protect_admin_route(req: &HttpRequest, ctx: &MoyeoraContext) -> Result<(), MoyeoraError> {
    match get_header(req, ADMIN_KEY_HEADER)? {
        Some(key) if key == ctx.config.admin_secret_code => Ok(()),
        Some(_) => Err(MoyeoraError::Unauthorized(format!(
            "Invalid admin key provided in {} header",
            ADMIN_KEY_HEADER
        ))),
        None => Err(MoyeoraError::Unauthorized(format!(
            "Unable to find admin key in {} header",
            ADMIN_KEY_HEADER
        ))),
    }
}
