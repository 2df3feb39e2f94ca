use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, Condition, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name shown to trainers.
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    /// Training batch the student belongs to. Trainers usually have none.
    pub batch_id: Option<String>,
    pub batch_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserRole {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "trainer")]
    Trainer,
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

/// Profile fields for a new account.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: UserRole,
    pub batch_id: Option<&'a str>,
    pub batch_name: Option<&'a str>,
}

impl Model {
    /// Inserts a user, hashing the password with argon2.
    pub async fn create(db: &DbConn, new: NewUser<'_>) -> Result<Model, DbErr> {
        let password_hash = Self::hash_password(new.password)?;
        let now = Utc::now();

        let active_model = ActiveModel {
            name: Set(new.name.trim().to_owned()),
            email: Set(new.email.trim().to_lowercase()),
            password_hash: Set(password_hash),
            role: Set(new.role),
            batch_id: Set(new.batch_id.map(str::to_owned)),
            batch_name: Set(new.batch_name.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(db)
            .await
    }

    /// Equality filters over role and batch, ordered by name.
    pub async fn filter(
        db: &DbConn,
        role: Option<UserRole>,
        batch_id: Option<&str>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut condition = Condition::all();
        if let Some(role) = role {
            condition = condition.add(Column::Role.eq(role));
        }
        if let Some(batch_id) = batch_id {
            condition = condition.add(Column::BatchId.eq(batch_id));
        }

        Entity::find()
            .filter(condition)
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.password_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    pub fn is_trainer(&self) -> bool {
        self.role == UserRole::Trainer
    }

    fn hash_password(password: &str) -> Result<String, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))
    }
}
