// src/db/auth.rs
use rusqlite::{params, Connection};

use crate::errors::ServerError;

/// Insert or refresh a user from a Google sign-in and return the user id.
/// Email should already be normalized by caller (trim/lowercase); name,
/// picture and the Google `sub` are refreshed on every sign-in.
pub fn upsert_google_user(
    conn: &Connection,
    email: &str,
    name: &str,
    picture: Option<&str>,
    google_sub: Option<&str>,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into users (email, name, picture, google_sub, created_at)
        values (?, ?, ?, ?, ?)
        on conflict (email) do update set
            name = excluded.name,
            picture = excluded.picture,
            google_sub = coalesce(excluded.google_sub, users.google_sub)
        "#,
        params![email, name, picture, google_sub, now],
    )
    .map_err(|e| ServerError::DbError(format!("upsert user failed: {e}")))?;

    let id: i64 = conn
        .query_row(
            "select id from users where email = ?",
            params![email],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))?;

    Ok(id)
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}
