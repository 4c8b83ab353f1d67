use crate::{
    auth::password::hash_password,
    db::{
        dao::UserDao,
        entities::{User, UserId},
    },
    error::AppError,
};

#[derive(Clone, Debug)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    /// Registers a user. Fails with `Conflict` when the email is taken.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = require_email(email)?;
        let password_hash = hash_password(password)?;
        let user = self.user_dao.create_user(email, &password_hash).await?;
        tracing::info!(user_id = user.id, "registered user");
        Ok(user)
    }

    pub async fn update_user(
        &self,
        id: UserId,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let email = require_email(email)?;
        let password_hash = hash_password(password)?;
        Ok(self
            .user_dao
            .update_credentials(id, email, &password_hash)
            .await?)
    }

    pub async fn upgrade_user(&self, id: UserId) -> Result<User, AppError> {
        let user = self.user_dao.upgrade(id).await?;
        tracing::info!(user_id = user.id, "upgraded user");
        Ok(user)
    }
}

fn require_email(email: &str) -> Result<&str, AppError> {
    if email.trim().is_empty() {
        return Err(AppError::bad_request("Email required"));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use crate::{
        auth::password::verify_password,
        auth::TokenService,
        db::DocumentStore,
        error::AppError,
        services::ServiceContext,
    };

    async fn fixture() -> (tempfile::TempDir, super::UserService) {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let store = DocumentStore::open(dir.path().join("database.json"))
            .await
            .expect("store should open");
        let tokens = TokenService::new(b"unit-test-secret").expect("secret should be accepted");
        (dir, ServiceContext::new(&store, &tokens).user())
    }

    #[tokio::test]
    async fn create_user_stores_a_hash_not_the_password() {
        let (_dir, service) = fixture().await;

        let user = service
            .create_user("a@x.com", "pw1")
            .await
            .expect("create should succeed");

        assert_eq!(user.id, 1);
        assert!(!user.upgraded);
        assert_ne!(user.password_hash, "pw1");
        assert!(verify_password("pw1", &user.password_hash));
    }

    #[tokio::test]
    async fn create_user_rejects_blank_email() {
        let (_dir, service) = fixture().await;

        let err = service
            .create_user("   ", "pw1")
            .await
            .expect_err("create should fail");

        assert_eq!(err, AppError::bad_request("Email required"));
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let (_dir, service) = fixture().await;
        service
            .create_user("a@x.com", "pw1")
            .await
            .expect("create should succeed");

        let err = service
            .create_user("a@x.com", "pw2")
            .await
            .expect_err("create should fail");

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_user_rehashes_password() {
        let (_dir, service) = fixture().await;
        let user = service
            .create_user("a@x.com", "pw1")
            .await
            .expect("create should succeed");

        let updated = service
            .update_user(user.id, "b@x.com", "pw2")
            .await
            .expect("update should succeed");

        assert_eq!(updated.email, "b@x.com");
        assert!(verify_password("pw2", &updated.password_hash));
        assert!(!verify_password("pw1", &updated.password_hash));
    }

    #[tokio::test]
    async fn upgrade_unknown_user_is_not_found() {
        let (_dir, service) = fixture().await;

        let err = service.upgrade_user(4).await.expect_err("upgrade should fail");

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
