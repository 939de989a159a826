use async_graphql::{Enum, SimpleObject};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Enum, sqlx::Type)]
#[graphql(name = "UserRole", rename_items = "PascalCase")]
#[sqlx(type_name = "user_role")]
pub enum Role {
    Client,
    Owner,
    Delivery,
}

#[derive(Serialize, Deserialize, Clone, Debug, SimpleObject, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// The only place the password hash leaves the database.
#[derive(FromRow)]
pub struct Credentials {
    pub id: String,
    pub password: String,
}

pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug)]
pub enum Error {
    EmailAlreadyInUse,
    UnexpectedError,
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|err| err.is_unique_violation())
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, email, password, role, verified)
        VALUES ($1, $2, $3, $4, false)
        RETURNING id, email, role, verified, created_at, updated_at
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.password)
    .bind(payload.role)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            tracing::warn!("Tried to create an account with a taken email: {}", err);
            return Error::EmailAlreadyInUse;
        }
        tracing::error!("Error occurred while creating a user account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, role, verified, created_at, updated_at FROM users WHERE id = $1",
    )
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, email, role, verified, created_at, updated_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred in find_by_email: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_credentials_by_email<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
) -> Result<Option<Credentials>> {
    sqlx::query_as::<_, Credentials>("SELECT id, password FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_credentials_by_email: {}", err);
            Error::UnexpectedError
        })
}

pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub password: Option<String>,
    pub verified: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateUserPayload,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            email = COALESCE($1, email),
            password = COALESCE($2, password),
            verified = COALESCE($3, verified),
            updated_at = NOW()
        WHERE
            id = $4
        RETURNING id, email, role, verified, created_at, updated_at
        ",
    )
    .bind(payload.email)
    .bind(payload.password)
    .bind(payload.verified)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            tracing::warn!("User {} tried to take a used email: {}", id, err);
            return Error::EmailAlreadyInUse;
        }
        tracing::error!(
            "Error occurred while trying to update a user by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub fn is_role(user: &User, role: Role) -> bool {
    user.role == role
}
