/// Chirp service tests
mod common;

use chirpy_core::{AuthorFilter, ChirpId, ChirpyError, Rejection, SortOrder, UserId};
use chirpy_server::services::{credentials::MIN_COST, AccountService, ChirpService};
use common::{create_test_store, fixtures};

/// Register, log in, post, delete and look up again
#[tokio::test]
async fn test_account_and_chirp_lifecycle() {
    let (store, _temp_dir) = create_test_store();
    let accounts = AccountService::new(store.clone(), MIN_COST);
    let chirps = ChirpService::new(store);

    let user = accounts
        .register(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD)
        .await
        .unwrap();
    accounts
        .authenticate(fixtures::TEST_EMAIL, fixtures::TEST_PASSWORD)
        .await
        .unwrap();
    assert!(matches!(
        accounts.authenticate(fixtures::TEST_EMAIL, "wrong").await,
        Err(ChirpyError::Rejected(Rejection::BadCredentials))
    ));

    let chirp = chirps.create(user.id, "hello").await.unwrap();
    assert_eq!(chirp.id, ChirpId::new(0));
    assert_eq!(chirp.author_id, user.id);

    chirps.delete(chirp.id, user.id).await.unwrap();
    assert!(chirps
        .list(AuthorFilter::All, SortOrder::Asc)
        .await
        .unwrap()
        .is_empty());
    assert!(matches!(
        chirps.get(chirp.id).await,
        Err(ChirpyError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_list_filters_and_sorts() {
    let (store, _temp_dir) = create_test_store();
    let chirps = ChirpService::new(store);
    let alice = UserId::new(0);
    let bob = UserId::new(1);

    chirps.create(alice, "one").await.unwrap();
    chirps.create(bob, "two").await.unwrap();
    chirps.create(alice, "three").await.unwrap();

    let all = chirps.list(AuthorFilter::All, SortOrder::Asc).await.unwrap();
    let bodies: Vec<_> = all.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, ["one", "two", "three"]);

    let alice_desc = chirps
        .list(AuthorFilter::Author(alice), SortOrder::Desc)
        .await
        .unwrap();
    let bodies: Vec<_> = alice_desc.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, ["three", "one"]);
}

#[tokio::test]
async fn test_delete_requires_ownership() {
    let (store, _temp_dir) = create_test_store();
    let chirps = ChirpService::new(store);
    let author = UserId::new(0);
    let intruder = UserId::new(1);

    let chirp = chirps.create(author, "mine").await.unwrap();

    let err = chirps.delete(chirp.id, intruder).await.unwrap_err();
    assert!(matches!(err, ChirpyError::Forbidden(_)));
    assert_eq!(chirps.get(chirp.id).await.unwrap(), chirp);
}

#[tokio::test]
async fn test_delete_missing_chirp() {
    let (store, _temp_dir) = create_test_store();
    let chirps = ChirpService::new(store);

    let err = chirps
        .delete(ChirpId::new(9), UserId::new(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ChirpyError::NotFound { .. }));
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let (store, _temp_dir) = create_test_store();
    let chirps = ChirpService::new(store);
    let author = UserId::new(0);

    let first = chirps.create(author, "first").await.unwrap();
    chirps.delete(first.id, author).await.unwrap();
    let second = chirps.create(author, "second").await.unwrap();

    assert_eq!(second.id, ChirpId::new(1));
}
