//! Request handler tests against a real database, bypassing HTTP
mod common;

use common::{fixtures, TestApp};
use roster_core::{seed, ErrorKind, UserFields};
use roster_server::handler::{CREATED_MESSAGE, DELETED_MESSAGE, INDEX_TITLE, SHOW_TITLE};

fn ada_fields() -> UserFields {
    UserFields {
        name: Some(fixtures::ADA_NAME.to_string()),
        email: Some(fixtures::ADA_EMAIL.to_string()),
        password: Some(fixtures::ADA_PASSWORD.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_seeded_scenario() {
    let app = TestApp::new().await.unwrap();
    let inserted = seed::seed(&app.store).await.unwrap();
    assert_eq!(inserted, 3);

    let list = app.handler.index().await.unwrap();
    assert_eq!(list.count, 3);
    assert_eq!(list.page_title, INDEX_TITLE);

    let jane = list
        .users
        .iter()
        .find(|u| u.email == "jane@example.com")
        .unwrap();
    assert_eq!(jane.name, "Jane Smith");
    assert_eq!(jane.age, 30);
    assert_eq!(jane.city.as_deref(), Some("Los Angeles"));
    assert!(jane.is_active);

    let bob = list.users.iter().find(|u| u.name == "Bob Wilson").unwrap();
    assert!(!bob.is_active);

    let deleted = app.handler.delete(&bob.id.to_string()).await.unwrap();
    assert_eq!(deleted.message, DELETED_MESSAGE);

    let list = app.handler.index().await.unwrap();
    assert_eq!(list.count, 2);
    assert!(list.users.iter().all(|u| u.name != "Bob Wilson"));
}

#[tokio::test]
async fn test_seed_twice_inserts_nothing_new() {
    let app = TestApp::new().await.unwrap();
    seed::seed(&app.store).await.unwrap();

    let inserted = seed::seed(&app.store).await.unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(app.handler.index().await.unwrap().count, 3);
}

#[tokio::test]
async fn test_store_then_show() {
    let app = TestApp::new().await.unwrap();

    let created = app.handler.store(ada_fields()).await.unwrap();
    assert_eq!(created.message, CREATED_MESSAGE);
    let user = created.user.unwrap();

    let shown = app.handler.show(&user.id.to_string()).await.unwrap();
    assert_eq!(shown.user, user);
    assert_eq!(shown.page_title, SHOW_TITLE);
}

#[tokio::test]
async fn test_update_then_show() {
    let app = TestApp::new().await.unwrap();
    let user = app.handler.store(ada_fields()).await.unwrap().user.unwrap();

    let fields = UserFields {
        name: Some("Ada King".to_string()),
        email: Some(fixtures::ADA_EMAIL.to_string()),
        age: Some(36),
        city: Some("London".to_string()),
        is_active: Some(false),
        ..Default::default()
    };
    app.handler
        .update(&user.id.to_string(), fields)
        .await
        .unwrap();

    let shown = app.handler.show(&user.id.to_string()).await.unwrap().user;
    assert_eq!(shown.name, "Ada King");
    assert_eq!(shown.age, 36);
    assert_eq!(shown.city.as_deref(), Some("London"));
    assert!(!shown.is_active);
    assert_eq!(shown.password, fixtures::ADA_PASSWORD);
    assert_eq!(shown.created_at, user.created_at);
}

#[tokio::test]
async fn test_errors_carry_kinds() {
    let app = TestApp::new().await.unwrap();
    app.handler.store(ada_fields()).await.unwrap();

    let err = app.handler.store(ada_fields()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConstraintViolation);

    let err = app.handler.show("12345").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = app.handler.delete("not-a-number").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = app
        .handler
        .store(UserFields {
            age: Some(-1),
            ..ada_fields()
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
