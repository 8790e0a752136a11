use std::net::SocketAddr;

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serve the full router over a fresh in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app = server::startup::build_app(db);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn acme() -> Value {
    json!({
        "name": "Acme",
        "address": "1 Main St",
        "phone": 5551234,
        "email": "a@acme.com",
        "notes": "",
        "primaryContact": "Jane"
    })
}

async fn list(c: &reqwest::Client, url: String) -> anyhow::Result<Vec<Value>> {
    let res = c.get(url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json::<Vec<Value>>().await?)
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_company_then_get_returns_identical_object() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/companies")).json(&acme()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert!(created["id"].is_i64());
    for (k, v) in acme().as_object().unwrap() {
        assert_eq!(&created[k], v, "field {k}");
    }

    let id = created["id"].as_i64().unwrap();
    let res = c.get(app.url(&format!("/companies/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let all = list(&c, app.url("/companies")).await?;
    assert_eq!(all, vec![created]);
    Ok(())
}

#[tokio::test]
async fn e2e_update_company_changes_only_target() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let a = c.post(app.url("/companies")).json(&acme()).send().await?.json::<Value>().await?;
    let mut globex = acme();
    globex["name"] = json!("Globex");
    let b = c.post(app.url("/companies")).json(&globex).send().await?.json::<Value>().await?;

    let mut changed = a.clone();
    changed["name"] = json!("Acme Corp");
    changed["phone"] = json!(1);
    let res = c.put(app.url(&format!("/companies/{}", a["id"]))).json(&changed).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["id"], a["id"]);
    assert_eq!(updated["name"], "Acme Corp");
    assert_eq!(updated["phone"], 1);

    let b_after = c.get(app.url(&format!("/companies/{}", b["id"]))).send().await?.json::<Value>().await?;
    assert_eq!(b_after, b);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_company_then_get_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let created = c.post(app.url("/companies")).json(&acme()).send().await?.json::<Value>().await?;
    let path = app.url(&format!("/companies/{}", created["id"]));

    let res = c.delete(&path).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Company deleted successfully");

    let res = c.get(&path).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["error"], "Company not found");

    let res = c.delete(&path).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.put(&path).json(&acme()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_ids_and_bodies_are_client_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    for bad in ["abc", "0", "-3", "1.5"] {
        let res = c.get(app.url(&format!("/companies/{bad}"))).send().await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "id {bad}");
        assert!(res.json::<Value>().await?["error"].is_string());
    }

    let res = c
        .post(app.url("/companies"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.post(app.url("/companies")).json(&json!({"name": "Acme"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(list(&c, app.url("/companies")).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_create_user_without_username_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/users")).json(&json!({"password": "secret"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["error"].as_str().unwrap().contains("required"));

    let res = c.post(app.url("/users")).json(&json!({"username": "bob"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    assert!(list(&c, app.url("/users")).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_user_create_and_full_replace() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let company = c.post(app.url("/companies")).json(&acme()).send().await?.json::<Value>().await?;
    let res = c
        .post(app.url("/users"))
        .json(&json!({
            "username": "bob",
            "password": "secret",
            "email": "",
            "phone": 5550000,
            "companyId": company["id"]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let user = res.json::<Value>().await?;
    assert!(user["id"].is_i64());
    assert!(user["createdAt"].is_string());
    assert_eq!(user["email"], Value::Null);
    assert_eq!(user["notes"], Value::Null);
    assert_eq!(user["phone"], 5550000);
    assert_eq!(user["companyId"], company["id"]);

    let res = c
        .put(app.url(&format!("/users/{}", user["id"])))
        .json(&json!({"id": user["id"], "username": "robert", "password": "secret2", "notes": "moved"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["username"], "robert");
    assert_eq!(updated["password"], "secret2");
    assert_eq!(updated["notes"], "moved");
    assert_eq!(updated["phone"], Value::Null);
    assert_eq!(updated["companyId"], Value::Null);
    assert_eq!(updated["createdAt"], user["createdAt"]);

    let users = list(&c, app.url("/api/users")).await?;
    assert_eq!(users, vec![updated]);
    Ok(())
}

#[tokio::test]
async fn e2e_user_with_unknown_company_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let res = c
        .post(app.url("/api/users"))
        .json(&json!({"username": "bob", "password": "secret", "companyId": 999}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .put(app.url("/users/41"))
        .json(&json!({"username": "bob", "password": "secret"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_user_update_with_unknown_company_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = c
        .post(app.url("/users"))
        .json(&json!({"username": "bob", "password": "secret"}))
        .send()
        .await?
        .json::<Value>()
        .await?;

    let res = c
        .put(app.url(&format!("/users/{}", created["id"])))
        .json(&json!({"username": "robert", "password": "secret", "companyId": 999}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await?["error"].as_str().unwrap().contains("999"));

    let users = list(&c, app.url("/users")).await?;
    assert_eq!(users, vec![created]);
    Ok(())
}

#[tokio::test]
async fn e2e_company_routes_under_api_prefix() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/api/companies")).json(&acme()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    let path = app.url(&format!("/api/companies/{}", created["id"]));

    let res = c.get(&path).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);

    let mut incomplete = acme();
    incomplete.as_object_mut().unwrap().remove("address");
    let res = c.put(&path).json(&incomplete).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await?["error"].as_str().unwrap().contains("address"));

    let mut renamed = acme();
    renamed["name"] = json!("Acme Corp");
    let res = c.put(&path).json(&renamed).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["name"], "Acme Corp");

    let all = list(&c, app.url("/api/companies")).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["name"], "Acme Corp");

    let res = c.delete(&path).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(c.get(&path).send().await?.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(app.url("/api-docs/openapi.json")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/companies/{id}"].is_object());
    Ok(())
}
