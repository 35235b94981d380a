use crate::{
    data::{user::UserRepository, Storage},
    error::{auth::AuthError, Error},
    model::user::{LoginDto, RegisterDto, User},
};

/// Credential store operations: account creation and password login.
/// Token issuance and session handling stay with the controllers; this
/// service only decides whether the credentials are acceptable.
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Registers a new account. Both username and email must be unused.
    pub async fn register(&self, payload: RegisterDto) -> Result<User, Error> {
        let users = UserRepository::new(self.storage);

        if users.get_by_username(&payload.username).await.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }
        if users.get_by_email(&payload.email).await.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)?;

        Ok(users
            .create(payload.username, password_hash, payload.email)
            .await)
    }

    /// Verifies a username/password pair. Unknown usernames and wrong
    /// passwords produce the same error.
    pub async fn login(&self, payload: LoginDto) -> Result<User, Error> {
        let users = UserRepository::new(self.storage);

        let Some(user) = users.get_by_username(&payload.username).await else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&payload.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
