use crate::{data::Storage, model::user::User};

pub struct UserRepository<'a> {
    storage: &'a Storage,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Creates a new user. Uniqueness of username and email is checked by
    /// the auth service before this is called.
    pub async fn create(&self, username: String, password_hash: String, email: String) -> User {
        let mut tables = self.storage.write().await;

        let id = tables.next_user_id();
        let user = User {
            id,
            username,
            password_hash,
            email,
        };

        tables.users.insert(id, user.clone());

        user
    }

    pub async fn get(&self, id: i32) -> Option<User> {
        self.storage.read().await.users.get(&id).cloned()
    }

    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.storage
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        self.storage
            .read()
            .await
            .users
            .values()
            .find(|user| user.email == email)
            .cloned()
    }
}
