use std::collections::HashSet;

use chirpy::{
    auth::{AuthError, TokenKind, TokenService},
    db::{DocumentStore, dao::DaoContext},
    error::AppError,
    services::ServiceContext,
};

async fn open_store() -> (tempfile::TempDir, DocumentStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::open(dir.path().join("database.json"))
        .await
        .unwrap();
    (dir, store)
}

#[tokio::test]
async fn end_to_end_scenario() {
    let (_dir, store) = open_store().await;
    let tokens = TokenService::new(b"scenario-secret").unwrap();
    let services = ServiceContext::new(&store, &tokens);

    let user = services.user().create_user("a@x.com", "pw1").await.unwrap();
    assert_eq!(user.id, 1);

    let err = services
        .user()
        .create_user("a@x.com", "pw2")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(store.read().await.unwrap().users.len(), 1);

    let chirp = services.chirp().create_chirp("hello", 1).await.unwrap();
    assert_eq!(chirp.id, 1);
    assert_eq!(chirp.body, "hello");

    let access = tokens.issue(1, TokenKind::Access).unwrap();
    let claims = tokens.verify(&access).unwrap();
    assert!(matches!(
        TokenService::require_kind(&claims, TokenKind::Refresh),
        Err(AuthError::WrongTokenKind {
            expected: TokenKind::Refresh,
            ..
        })
    ));

    let refresh = tokens.issue(1, TokenKind::Refresh).unwrap();
    let ledger = DaoContext::new(&store).revoked_token();
    let fresh = tokens.refresh(&refresh, &ledger).await.unwrap();
    let claims = tokens.verify(&fresh).unwrap();
    assert_eq!(TokenService::require_kind(&claims, TokenKind::Access), Ok(1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_emails_admit_exactly_one() {
    let (_dir, store) = open_store().await;
    let users = DaoContext::new(&store).user();

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let users = users.clone();
            tokio::spawn(async move {
                users
                    .create_user("dup@x.com", &format!("hash-{n}"))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    let doc = store.read().await.unwrap();
    assert_eq!(doc.users.len(), 1);
    assert_eq!(doc.next_user_id, 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_chirps_get_consecutive_ids_across_deletes() {
    let (_dir, store) = open_store().await;
    let daos = DaoContext::new(&store);
    let author = daos.user().create_user("a@x.com", "hash").await.unwrap();

    let author_id = author.id;
    let first = daos.chirp().create("first", author_id).await.unwrap();
    daos.chirp().delete_owned(first.id, author_id).await.unwrap();

    let handles: Vec<_> = (0..20)
        .map(|n| {
            let chirps = daos.chirp();
            tokio::spawn(async move { chirps.create(&format!("chirp {n}"), author_id).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().id);
    }

    assert_eq!(ids, (2..=21).collect::<HashSet<_>>());
}

#[tokio::test]
async fn state_survives_reopen() {
    let (dir, store) = open_store().await;
    let daos = DaoContext::new(&store);
    let author = daos.user().create_user("a@x.com", "hash").await.unwrap();
    daos.chirp().create("persisted", author.id).await.unwrap();
    daos.revoked_token().revoke_token("tok").await.unwrap();
    drop(store);

    let reopened = DocumentStore::open(dir.path().join("database.json"))
        .await
        .unwrap();
    let daos = DaoContext::new(&reopened);

    assert_eq!(daos.chirp().find_by_id(1).await.unwrap().body, "persisted");
    assert!(daos.revoked_token().is_token_revoked("tok").await.unwrap());
    let next = daos.user().create_user("b@x.com", "hash").await.unwrap();
    assert_eq!(next.id, 2);
}
