// src/auth/sessions.rs
use crate::errors::ServerError;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// Generate an opaque session token: 32 random bytes, URL-safe base64,
/// no padding. Only the SHA-256 hash of the token is ever stored.
pub fn generate_token() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}

pub fn hash_token(token: &str) -> [u8; 32] {
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&Sha256::digest(token.as_bytes()));
    arr
}

/// Issue a session for a signed-in user and return the raw token.
pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token();
    let hash = hash_token(&raw_token);
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// Revoke the session behind a presented token. Idempotent; revoking an
/// unknown or already-revoked token is a no-op.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);

    conn.execute(
        r#"
        update sessions
        set revoked_at = ?
        where token_hash = ?
          and revoked_at is null
        "#,
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;

    Ok(())
}

/// Resolve a presented token to `(user_id, email)` if the session is live.
pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<(i64, String)>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.email
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}
