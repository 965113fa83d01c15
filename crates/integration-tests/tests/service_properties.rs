//! CRUD contract of the resource services against a real SQLite store

mod common;

use common::{jane_doe, setup_services};
use rms_core::domain::{Author, IpAsset, Publication, Resource, User};
use rms_core::error::AppError;
use std::collections::HashSet;
use std::sync::Arc;

/// Jane Doe: create, partial update, delete
#[tokio::test]
async fn test_author_lifecycle_scenario() {
    let (_pool, services) = setup_services().await;
    let authors = &services.authors;

    let created = authors.create(jane_doe()).await.unwrap();
    assert!(!created.author_id.is_empty());
    assert_eq!(created.author_name, "Jane Doe");
    assert_eq!(created.gender, "F");
    assert_eq!(created.affiliation, "CS Dept");
    assert_eq!(created.email, "jane@example.edu");

    authors
        .update(Author {
            author_id: created.author_id.clone(),
            affiliation: "EE Dept".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let fetched = authors.get(created.author_id.clone()).await.unwrap();
    assert_eq!(fetched.author_name, "Jane Doe");
    assert_eq!(fetched.affiliation, "EE Dept");

    assert!(authors.delete(created.author_id.clone()).await.unwrap());

    let err = authors.get(created.author_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_duplicate_user_id_fails_creation() {
    let (_pool, services) = setup_services().await;

    let user = User {
        user_id: 1001,
        sr_code: "21-01001".to_string(),
        email: "first@example.edu".to_string(),
        ..Default::default()
    };
    services.users.create(user.clone()).await.unwrap();

    let duplicate = User {
        email: "second@example.edu".to_string(),
        ..user
    };
    let err = services.users.create(duplicate).await.unwrap_err();
    assert!(matches!(err, AppError::CreationFailed(_)), "got {:?}", err);

    // First insert is untouched
    let stored = services.users.get(1001).await.unwrap();
    assert_eq!(stored.email, "first@example.edu");
}

#[tokio::test]
async fn test_store_rejected_insert_fails_creation() {
    let (pool, services) = setup_services().await;

    sqlx::query(
        "CREATE TRIGGER reject_authors BEFORE INSERT ON table_authors \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = services.authors.create(jane_doe()).await.unwrap_err();
    assert!(matches!(err, AppError::CreationFailed(_)), "got {:?}", err);
    assert!(services.authors.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_requires_caller_key() {
    let (_pool, services) = setup_services().await;
    let err = services.users.create(User::default()).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
    assert!(services.users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_generated_keys_are_distinct() {
    let (_pool, services) = setup_services().await;

    let mut keys = HashSet::new();
    for i in 0..25 {
        let asset = services
            .ip_assets
            .create(IpAsset {
                title_of_work: format!("Work {}", i),
                ..Default::default()
            })
            .await
            .unwrap();
        keys.insert(asset.registration_number);
    }
    assert_eq!(keys.len(), 25);
}

#[tokio::test]
async fn test_caller_key_ignored_for_generated_entities() {
    let (_pool, services) = setup_services().await;

    let created = services
        .publications
        .create(Publication {
            publication_id: "chosen-by-caller".to_string(),
            title_of_paper: "On Records".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_ne!(created.publication_id, "chosen-by-caller");
    assert!(services
        .publications
        .get("chosen-by-caller".to_string())
        .await
        .is_err());
}

#[tokio::test]
async fn test_round_trip_all_fields() {
    let (_pool, services) = setup_services().await;

    let input = Publication {
        publication_id: String::new(),
        date_published: "2023-05-01".to_string(),
        quartile: "Q1".to_string(),
        authors: "Doe, J.; Roe, R.".to_string(),
        department: "Computer Science".to_string(),
        college: "Engineering".to_string(),
        campus: "Main".to_string(),
        title_of_paper: "Sparse Merges in Practice".to_string(),
        type_of_publication: "Journal".to_string(),
        funding_source: "Internal".to_string(),
        number_of_citations: "12".to_string(),
        google_scholar_details: "https://scholar.example/abc".to_string(),
        sdg_no: "9".to_string(),
        funding_type: "Grant".to_string(),
        nature_of_fundings: "Research".to_string(),
        publisher: "Example Press".to_string(),
        abstract_text: "We study partial updates.".to_string(),
    };

    let created = services.publications.create(input.clone()).await.unwrap();
    let fetched = services
        .publications
        .get(created.publication_id.clone())
        .await
        .unwrap();

    assert_eq!(
        Publication {
            publication_id: String::new(),
            ..fetched
        },
        input
    );
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields() {
    let (_pool, services) = setup_services().await;

    let stored = services
        .ip_assets
        .create(IpAsset {
            title_of_work: "Widget".to_string(),
            type_of_document: "Patent".to_string(),
            campus: "North".to_string(),
            authors: "Doe".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = services
        .ip_assets
        .update(IpAsset {
            registration_number: stored.registration_number.clone(),
            campus: "South".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        updated,
        IpAsset {
            campus: "South".to_string(),
            ..stored
        }
    );
}

#[tokio::test]
async fn test_absent_keys_are_not_found() {
    let (_pool, services) = setup_services().await;
    let never_issued = "00000000-0000-0000-0000-000000000000".to_string();

    let get = services.authors.get(never_issued.clone()).await.unwrap_err();
    assert!(matches!(get, AppError::NotFound(_)));

    let update = services
        .authors
        .update(Author {
            author_id: never_issued.clone(),
            email: "x@example.edu".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(update, AppError::NotFound(_)));

    let delete = services.authors.delete(never_issued).await.unwrap_err();
    assert!(matches!(delete, AppError::NotFound(_)));

    let user = services.users.get(424242).await.unwrap_err();
    assert!(matches!(user, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_empty_list_is_success() {
    let (_pool, services) = setup_services().await;
    assert!(services.authors.list().await.unwrap().is_empty());
    assert!(services.users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_entities_are_independent() {
    let (_pool, services) = setup_services().await;

    services.authors.create(jane_doe()).await.unwrap();
    services
        .users
        .create(User {
            user_id: 7,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(services.authors.list().await.unwrap().len(), 1);
    assert_eq!(services.users.list().await.unwrap().len(), 1);
    assert!(services.publications.list().await.unwrap().is_empty());
    assert!(services.ip_assets.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_creates() {
    let (_pool, services) = setup_services().await;
    let authors = Arc::clone(&services.authors);

    let tasks = (0..20).map(|i| {
        let authors = Arc::clone(&authors);
        tokio::spawn(async move {
            authors
                .create(Author {
                    author_name: format!("Author {}", i),
                    ..Default::default()
                })
                .await
        })
    });

    let results = futures::future::join_all(tasks).await;
    let keys: HashSet<String> = results
        .into_iter()
        .map(|r| r.unwrap().unwrap().key().clone())
        .collect();

    assert_eq!(keys.len(), 20);
    assert_eq!(authors.list().await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_closed_store_is_unavailable() {
    let (pool, services) = setup_services().await;
    pool.close().await;

    let err = services.authors.list().await.unwrap_err();
    assert!(matches!(err, AppError::StoreUnavailable(_)), "got {:?}", err);
}
