use anyhow::Result;
use sea_orm::EntityTrait;

use super::{acme, setup_test_db};
use crate::company::{self, CompanyData};
use crate::errors::ModelError;
use crate::user::{self, UserData};

fn bob(company_id: Option<i32>) -> UserData {
    UserData {
        username: "bob".into(),
        password: "secret".into(),
        email: Some("bob@example.com".into()),
        notes: None,
        phone: Some(5550000),
        company_id,
    }
}

#[tokio::test]
async fn test_company_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = company::create(&db, acme()).await?;
    assert_eq!(created.name, "Acme");
    assert_eq!(created.phone, 5551234);
    assert_eq!(created.notes.as_deref(), Some(""));

    let found = company::find(&db, created.id).await?.expect("company exists");
    assert_eq!(found, created);
    assert!(company::exists(&db, created.id).await?);

    let data = CompanyData { name: "Acme Corp".into(), notes: None, ..acme() };
    let replaced = company::replace(&db, created.id, data).await?;
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Acme Corp");
    assert!(replaced.notes.is_none());

    company::delete(&db, created.id).await?;
    assert!(company::find(&db, created.id).await?.is_none());
    assert!(!company::exists(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_company_ids_are_unique_and_listed_in_order() -> Result<()> {
    let db = setup_test_db().await?;
    let a = company::create(&db, acme()).await?;
    let b = company::create(&db, CompanyData { name: "Globex".into(), ..acme() }).await?;
    assert_ne!(a.id, b.id);

    let all = company::list(&db).await?;
    let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    Ok(())
}

#[tokio::test]
async fn test_company_missing_rows_are_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(company::find(&db, 4242).await?.is_none());
    assert!(matches!(company::replace(&db, 4242, acme()).await, Err(ModelError::NotFound("company"))));
    assert!(matches!(company::delete(&db, 4242).await, Err(ModelError::NotFound("company"))));
    Ok(())
}

#[tokio::test]
async fn test_user_crud() -> Result<()> {
    let db = setup_test_db().await?;
    let c = company::create(&db, acme()).await?;

    let created = user::create(&db, bob(Some(c.id))).await?;
    assert_eq!(created.username, "bob");
    assert_eq!(created.company_id, Some(c.id));

    let found = user::Entity::find_by_id(created.id).one(&db).await?.expect("user exists");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password, "secret");

    let data = UserData { username: "robert".into(), email: None, phone: None, company_id: None, ..bob(None) };
    let replaced = user::replace(&db, created.id, data).await?;
    assert_eq!(replaced.username, "robert");
    assert!(replaced.email.is_none());
    assert!(replaced.phone.is_none());
    assert!(replaced.company_id.is_none());
    assert_eq!(replaced.created_at, created.created_at);

    assert_eq!(user::list(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_user_replace_missing_row_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let res = user::replace(&db, 99, bob(None)).await;
    assert!(matches!(res, Err(ModelError::NotFound("user"))));
    assert!(user::list(&db).await?.is_empty());
    Ok(())
}
