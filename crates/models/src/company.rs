use sea_orm::{
    entity::prelude::*, sea_query::Expr, ActiveValue, DatabaseConnection, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    pub phone: i64,
    pub email: String,
    pub notes: Option<String>,
    pub primary_contact: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::User => Entity::has_many(user::Entity).into() }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of a company row, everything except the generated id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyData {
    pub name: String,
    pub address: String,
    pub phone: i64,
    pub email: String,
    pub notes: Option<String>,
    pub primary_contact: String,
}

impl CompanyData {
    fn into_active_model(self, id: ActiveValue<i32>) -> ActiveModel {
        ActiveModel {
            id,
            name: Set(self.name),
            address: Set(self.address),
            phone: Set(self.phone),
            email: Set(self.email),
            notes: Set(self.notes),
            primary_contact: Set(self.primary_contact),
        }
    }
}

/// All companies in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}

pub async fn create(db: &DatabaseConnection, data: CompanyData) -> Result<Model, ModelError> {
    let am = data.into_active_model(ActiveValue::NotSet);
    Ok(am.insert(db).await?)
}

/// Overwrite every column of an existing company.
pub async fn replace(db: &DatabaseConnection, id: i32, data: CompanyData) -> Result<Model, ModelError> {
    let am = data.into_active_model(ActiveValue::Unchanged(id));
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ModelError::NotFound("company"),
        other => other.into(),
    })
}

/// Delete a company and detach the users that pointed at it.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let txn = db.begin().await?;
    let detached = user::Entity::update_many()
        .col_expr(user::Column::CompanyId, Expr::value(Option::<i32>::None))
        .filter(user::Column::CompanyId.eq(id))
        .exec(&txn)
        .await?;
    let res = Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Err(ModelError::NotFound("company"));
    }
    txn.commit().await?;
    debug!(id, detached_users = detached.rows_affected, "company deleted");
    Ok(())
}
