use serde::Deserialize;
use web_sys::window;

const USER_KEY: &str = "user";

/// The connected user, as left in localStorage by the login flow
/// (which is outside this app).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: String,
    #[serde(default)]
    pub email: String,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the session once at startup. Pages receive the user by value and
/// never consult storage themselves.
pub fn current_user() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}
