use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::{
    DocumentStore,
    entities::{User, UserId},
};

#[derive(Clone, Debug)]
pub struct UserDao {
    store: DocumentStore,
}

impl DaoBase for UserDao {
    const ENTITY: &'static str = "User";

    fn new(store: &DocumentStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    fn store(&self) -> &DocumentStore {
        &self.store
    }
}

impl UserDao {
    /// Inserts a user unless the email is taken. The uniqueness check and the
    /// insert share one store write.
    pub async fn create_user(&self, email: &str, password_hash: &str) -> DaoResult<User> {
        let email = email.to_string();
        let password_hash = password_hash.to_string();
        self.store
            .read_modify_write(move |doc| {
                if doc.user_by_email(&email).is_some() {
                    return Err(DaoLayerError::AlreadyExists {
                        entity: Self::ENTITY,
                        key: email,
                    });
                }
                Ok(doc.insert_user(email, password_hash))
            })
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<User>> {
        let doc = self.store.read().await?;
        Ok(doc.user_by_email(email).cloned())
    }

    /// Replaces email and password hash. The new email may not belong to a
    /// different user.
    pub async fn update_credentials(
        &self,
        id: UserId,
        email: &str,
        password_hash: &str,
    ) -> DaoResult<User> {
        let email = email.to_string();
        let password_hash = password_hash.to_string();
        self.store
            .read_modify_write(move |doc| {
                if doc
                    .user_by_email(&email)
                    .is_some_and(|other| other.id != id)
                {
                    return Err(DaoLayerError::AlreadyExists {
                        entity: Self::ENTITY,
                        key: email,
                    });
                }
                let user = doc.users.get_mut(&id).ok_or(DaoLayerError::NotFound {
                    entity: Self::ENTITY,
                    id,
                })?;
                user.email = email;
                user.password_hash = password_hash;
                Ok(user.clone())
            })
            .await
    }

    pub async fn upgrade(&self, id: UserId) -> DaoResult<User> {
        self.store
            .read_modify_write(move |doc| {
                let user = doc.users.get_mut(&id).ok_or(DaoLayerError::NotFound {
                    entity: Self::ENTITY,
                    id,
                })?;
                user.upgraded = true;
                Ok(user.clone())
            })
            .await
    }
}
