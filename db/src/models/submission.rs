use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ActiveValue::Set, Condition, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::code_mapping::CodeMapping;
use crate::models::{assignment, user};

/// A student's solution to one assignment.
///
/// There is exactly one row per (assignment, student); the primary key is the
/// deterministic string built by [`key`]. Student and assignment details are
/// copied in at submit time so trainer listings never need a join.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub assignment_id: i64,
    pub user_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub batch_id: Option<String>,
    pub batch_name: Option<String>,
    pub assignment_title: String,
    #[sea_orm(column_type = "Text")]
    pub assignment_description: String,
    pub language: String,
    #[sea_orm(column_type = "Json")]
    pub code: CodeMapping,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    /// 0 to 5 stars, set by the reviewing trainer.
    pub rating: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<i64>,
    pub version: i32,
    pub is_latest: bool,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "reviewed")]
    Reviewed,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id",
        on_delete = "Cascade"
    )]
    Assignment,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Primary key of the submission for `(assignment_id, user_id)`.
pub fn key(assignment_id: i64, user_id: i64) -> String {
    format!("{assignment_id}_{user_id}")
}

/// Everything a student submit writes.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub assignment_id: i64,
    pub user_id: i64,
    pub student_name: String,
    pub student_email: String,
    pub batch_id: Option<String>,
    pub batch_name: Option<String>,
    pub assignment_title: String,
    pub assignment_description: String,
    pub language: String,
    pub code: CodeMapping,
}

impl NewSubmission {
    /// Snapshots the assignment and student profile next to the submitted files.
    pub fn from_parts(
        assignment: &assignment::Model,
        student: &user::Model,
        code: CodeMapping,
    ) -> Self {
        Self {
            assignment_id: assignment.id,
            user_id: student.id,
            student_name: student.name.clone(),
            student_email: student.email.clone(),
            batch_id: student.batch_id.clone(),
            batch_name: student.batch_name.clone(),
            assignment_title: assignment.title.clone(),
            assignment_description: assignment.description.clone(),
            language: assignment.language.clone(),
            code,
        }
    }
}

/// Equality filters for trainer listings. `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    pub assignment_id: Option<i64>,
    pub user_id: Option<i64>,
    pub batch_id: Option<String>,
    pub status: Option<SubmissionStatus>,
}

impl Model {
    /// Writes the whole record under its deterministic key, replacing any earlier one.
    ///
    /// A resubmission discards the previous review and bumps `version`. The
    /// increment happens inside the conflict clause, so racing writes each count.
    pub async fn upsert(db: &DbConn, new: NewSubmission) -> Result<Model, DbErr> {
        let id = key(new.assignment_id, new.user_id);

        let active_model = ActiveModel {
            id: Set(id.clone()),
            assignment_id: Set(new.assignment_id),
            user_id: Set(new.user_id),
            student_name: Set(new.student_name),
            student_email: Set(new.student_email),
            batch_id: Set(new.batch_id),
            batch_name: Set(new.batch_name),
            assignment_title: Set(new.assignment_title),
            assignment_description: Set(new.assignment_description),
            language: Set(new.language),
            code: Set(new.code),
            submitted_at: Set(Utc::now()),
            status: Set(SubmissionStatus::Submitted),
            rating: Set(None),
            feedback: Set(None),
            reviewed_at: Set(None),
            reviewed_by: Set(None),
            version: Set(1),
            is_latest: Set(true),
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::StudentName,
                        Column::StudentEmail,
                        Column::BatchId,
                        Column::BatchName,
                        Column::AssignmentTitle,
                        Column::AssignmentDescription,
                        Column::Language,
                        Column::Code,
                        Column::SubmittedAt,
                        Column::Status,
                        Column::Rating,
                        Column::Feedback,
                        Column::ReviewedAt,
                        Column::ReviewedBy,
                        Column::IsLatest,
                    ])
                    .value(Column::Version, Expr::col((Entity, Column::Version)).add(1))
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Entity::find_by_id(id.clone())
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Submission {id} not found")))
    }

    pub async fn find_by_key(
        db: &DbConn,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(key(assignment_id, user_id)).one(db).await
    }

    /// Records a trainer review. The submitted code is left untouched.
    pub async fn review(
        db: &DbConn,
        assignment_id: i64,
        user_id: i64,
        rating: i32,
        feedback: String,
        reviewer_id: i64,
    ) -> Result<Model, DbErr> {
        let id = key(assignment_id, user_id);
        let model = Entity::find_by_id(id.clone())
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Submission {id} not found")))?;

        let mut active_model: ActiveModel = model.into();
        active_model.status = Set(SubmissionStatus::Reviewed);
        active_model.rating = Set(Some(rating));
        active_model.feedback = Set(Some(feedback));
        active_model.reviewed_at = Set(Some(Utc::now()));
        active_model.reviewed_by = Set(Some(reviewer_id));
        active_model.update(db).await
    }

    /// Newest submissions first.
    pub async fn filter(db: &DbConn, filter: &SubmissionFilter) -> Result<Vec<Model>, DbErr> {
        let mut condition = Condition::all();
        if let Some(assignment_id) = filter.assignment_id {
            condition = condition.add(Column::AssignmentId.eq(assignment_id));
        }
        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(batch_id) = &filter.batch_id {
            condition = condition.add(Column::BatchId.eq(batch_id.as_str()));
        }
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status));
        }

        Entity::find()
            .filter(condition)
            .order_by_desc(Column::SubmittedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn list_for_user(db: &DbConn, user_id: i64) -> Result<Vec<Model>, DbErr> {
        Self::filter(
            db,
            &SubmissionFilter {
                user_id: Some(user_id),
                ..Default::default()
            },
        )
        .await
    }
}
