use chrono::Utc;
use sea_orm::{
    entity::prelude::*, sea_query::ForeignKeyAction, ActiveValue, DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::company;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub phone: Option<i64>,
    pub company_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .on_delete(ForeignKeyAction::SetNull)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Writable columns of a user row; `id` and `created_at` are owned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserData {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub phone: Option<i64>,
    pub company_id: Option<i32>,
}

impl UserData {
    fn into_active_model(self, id: ActiveValue<i32>) -> ActiveModel {
        ActiveModel {
            id,
            username: Set(self.username),
            password: Set(self.password),
            email: Set(self.email),
            notes: Set(self.notes),
            phone: Set(self.phone),
            company_id: Set(self.company_id),
            created_at: ActiveValue::NotSet,
        }
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn create(db: &DatabaseConnection, data: UserData) -> Result<Model, ModelError> {
    let mut am = data.into_active_model(ActiveValue::NotSet);
    am.created_at = Set(Utc::now().into());
    Ok(am.insert(db).await?)
}

/// Overwrite every writable column; `created_at` is left as inserted.
pub async fn replace(db: &DatabaseConnection, id: i32, data: UserData) -> Result<Model, ModelError> {
    let am = data.into_active_model(ActiveValue::Unchanged(id));
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ModelError::NotFound("user"),
        other => other.into(),
    })
}
