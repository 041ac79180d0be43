//! Login against the user list.
//!
//! The API has no login endpoint: the client downloads `/api/users` and
//! looks for a record whose username or email matches the identifier and
//! whose password equals the one typed. Whatever matched is projected into a
//! [`store::Session`] by the caller.

mod role;

pub use role::{Role, ROLES};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

/// First user whose username or email equals `identifier` and whose password
/// equals `password`. An empty identifier never matches.
pub fn find_user<'a>(users: &'a [User], identifier: &str, password: &str) -> Option<&'a User> {
    if identifier.is_empty() {
        return None;
    }
    users.iter().find(|u| {
        (u.username == identifier || u.email == identifier) && u.password == password
    })
}

/// Fetch the user list and check the credentials against it.
pub async fn authenticate(
    client: &ApiClient,
    identifier: &str,
    password: &str,
) -> Result<User, ApiError> {
    let users = client.list_users().await?;
    match find_user(&users, identifier, password) {
        Some(user) => {
            tracing::info!("signed in as {}", user.username);
            Ok(user.clone())
        }
        None => {
            tracing::info!("rejected sign-in for {identifier:?}");
            Err(ApiError::InvalidCredentials)
        }
    }
}
