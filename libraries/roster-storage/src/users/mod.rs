//! User record queries

use chrono::{DateTime, Utc};
use roster_core::{error::Result, NewUser, RosterError, User, UserId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_USER: &str = "SELECT id, name, email, password, age, city, is_active, created_at, updated_at
     FROM users";

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!("{SELECT_USER} ORDER BY id"))
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query(&format!("{SELECT_USER} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(from_row).transpose()
}

/// Insert a user and return the stored row
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let result = sqlx::query(
        "INSERT INTO users (name, email, password, age, city, is_active)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .bind(user.age)
    .bind(&user.city)
    .bind(user.is_active)
    .execute(pool)
    .await
    .map_err(|e| write_error(e, &user.email))?;

    let id = UserId::new(result.last_insert_rowid());

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| RosterError::storage("Failed to retrieve created user"))
}

/// Write the editable columns of an existing user
///
/// `password` and `created_at` are never touched. Returns `false` if no row matched.
pub async fn update(pool: &SqlitePool, user: &User) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE users
         SET name = ?, email = ?, age = ?, city = ?, is_active = ?,
             updated_at = CAST(strftime('%s', 'now') AS INTEGER)
         WHERE id = ?",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.age)
    .bind(&user.city)
    .bind(user.is_active)
    .bind(user.id)
    .execute(pool)
    .await
    .map_err(|e| write_error(e, &user.email))?;

    Ok(result.rows_affected() > 0)
}

/// Hard delete. Returns `false` if no row matched.
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        age: row.try_get::<Option<i64>, _>("age")?.unwrap_or(0),
        city: row.try_get("city")?,
        is_active: row.try_get("is_active")?,
        created_at: timestamp(row.try_get("created_at")?)?,
        updated_at: timestamp(row.try_get("updated_at")?)?,
    })
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| RosterError::storage("Invalid timestamp"))
}

fn write_error(err: sqlx::Error, email: &str) -> RosterError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RosterError::constraint(format!("email already exists: {}", email))
        }
        _ => err.into(),
    }
}
