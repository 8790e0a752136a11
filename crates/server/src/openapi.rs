use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CompanyDoc {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: i64,
    pub email: String,
    pub notes: Option<String>,
    pub primary_contact: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CompanyPayloadDoc {
    pub name: String,
    pub address: String,
    pub phone: i64,
    pub email: String,
    pub notes: Option<String>,
    pub primary_contact: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub phone: Option<i64>,
    pub company_id: Option<i32>,
    /// RFC 3339 insertion timestamp
    pub created_at: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserPayloadDoc {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub phone: Option<i64>,
    pub company_id: Option<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::list,
        crate::routes::companies::create,
        crate::routes::companies::get,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::users::list,
        crate::routes::users::create,
        crate::routes::users::update,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            CompanyDoc,
            CompanyPayloadDoc,
            UserDoc,
            UserPayloadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "users")
    )
)]
pub struct ApiDoc;
