use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered account. Held only by the user store; the password hash
/// never crosses the API boundary.
#[derive(Clone, Debug)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub email: String,
}

/// Public view of a [`User`].
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Login/registration response: the user plus a freshly issued bearer token
/// the client attaches to subsequent requests.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub token: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}
