use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};
use serde::Serialize;

use crate::models::code_mapping::CodeMapping;

/// A trainer-authored coding task.
///
/// `language` is the runtime template tag the editor boots with (`react`,
/// `vanilla`, `node`, ...). `default_code` is the starter file set; when it is
/// empty the practice view falls back to the template for `language`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    /// Problem statement in markdown.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub language: String,
    pub due_date: DateTime<Utc>,
    #[sea_orm(column_type = "Json")]
    pub default_code: CodeMapping,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submission::Entity")]
    Submissions,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Editable fields of an assignment; used for both create and edit.
#[derive(Debug, Clone)]
pub struct AssignmentFields {
    pub title: String,
    pub description: String,
    pub language: String,
    pub due_date: DateTime<Utc>,
    pub default_code: CodeMapping,
}

impl Model {
    pub async fn create(db: &DbConn, fields: AssignmentFields) -> Result<Model, DbErr> {
        let now = Utc::now();

        let active_model = ActiveModel {
            title: Set(fields.title),
            description: Set(fields.description),
            language: Set(fields.language),
            due_date: Set(fields.due_date),
            default_code: Set(fields.default_code),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    /// Replaces every editable field of an existing assignment.
    pub async fn edit(db: &DbConn, id: i64, fields: AssignmentFields) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Assignment {id} not found")))?;

        let mut active_model: ActiveModel = model.into();
        active_model.title = Set(fields.title);
        active_model.description = Set(fields.description);
        active_model.language = Set(fields.language);
        active_model.due_date = Set(fields.due_date);
        active_model.default_code = Set(fields.default_code);
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All assignments, earliest due date first.
    pub async fn list_ordered(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.due_date
    }
}
