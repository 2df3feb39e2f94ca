use db::models::user::{Model, NewUser, UserRole};
use sea_orm::DatabaseConnection;

use crate::error::ServiceError;

#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub batch_id: Option<String>,
    pub batch_name: Option<String>,
}

pub struct UserService;

impl UserService {
    pub async fn register(
        db: &DatabaseConnection,
        params: RegisterUser,
    ) -> Result<Model, ServiceError> {
        if params.name.trim().is_empty() {
            return Err(ServiceError::Validation("Name is required".into()));
        }
        if Model::find_by_email(db, &params.email).await?.is_some() {
            return Err(ServiceError::Conflict(
                "A user with this email already exists".into(),
            ));
        }

        let user = Model::create(
            db,
            NewUser {
                name: &params.name,
                email: &params.email,
                password: &params.password,
                role: params.role,
                batch_id: params.batch_id.as_deref(),
                batch_name: params.batch_name.as_deref(),
            },
        )
        .await?;
        tracing::info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Checks credentials. Unknown email and wrong password look the same to the caller.
    pub async fn login(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<Model, ServiceError> {
        let invalid = || ServiceError::Unauthorized("Invalid email or password".into());

        let user = Model::find_by_email(db, email).await?.ok_or_else(invalid)?;
        if !user.verify_password(password) {
            tracing::warn!(user_id = user.id, "Failed login attempt");
            return Err(invalid());
        }
        Ok(user)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> Result<Model, ServiceError> {
        Model::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {id} not found")))
    }

    pub async fn list(
        db: &DatabaseConnection,
        role: Option<UserRole>,
        batch_id: Option<&str>,
    ) -> Result<Vec<Model>, ServiceError> {
        Ok(Model::filter(db, role, batch_id).await?)
    }
}
