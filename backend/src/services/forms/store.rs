//! SQL for the `forms` table. `fields` is stored as JSON text and parsed
//! back into the closed `FieldValue` model on read.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use common::model::submission::{Fields, FormEnvelope, FormSubmission, STATUS_SUBMITTED};
use common::requests::PageQuery;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const COLUMNS: &str = "id, form_type, title, status, fields, submitted_by, submitted_at";

pub fn insert(
    conn: &Connection,
    envelope: FormEnvelope,
    submitted_by: &str,
) -> Result<FormSubmission, ApiError> {
    let record = FormSubmission {
        id: Uuid::new_v4().to_string(),
        form_type: envelope.form_type,
        title: envelope.title,
        status: STATUS_SUBMITTED.to_string(),
        submitted_at: Utc::now(),
        submitted_by: submitted_by.to_string(),
        fields: envelope.fields,
    };
    let fields = serde_json::to_string(&record.fields)
        .map_err(|e| ApiError::Internal(format!("could not encode fields: {}", e)))?;

    conn.execute(
        &format!("INSERT INTO forms ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)", COLUMNS),
        params![
            record.id,
            record.form_type,
            record.title,
            record.status,
            fields,
            record.submitted_by,
            record.submitted_at
        ],
    )?;
    Ok(record)
}

pub fn count_by_type(conn: &Connection, form_type: &str) -> Result<u64, ApiError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM forms WHERE form_type = ?1",
        params![form_type],
        |row| row.get(0),
    )?;
    Ok(count.max(0) as u64)
}

/// Newest first, `query.limit` rows starting at `query.offset()`.
pub fn list_by_type(
    conn: &Connection,
    form_type: &str,
    query: PageQuery,
) -> Result<Vec<FormSubmission>, ApiError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM forms WHERE form_type = ?1
         ORDER BY submitted_at DESC, rowid DESC LIMIT ?2 OFFSET ?3",
        COLUMNS
    ))?;
    let rows = stmt.query_map(
        params![form_type, i64::from(query.limit), query.offset() as i64],
        read_row,
    )?;

    let mut records = Vec::new();
    for row in rows {
        records.push(decode(row?)?);
    }
    Ok(records)
}

pub fn find(conn: &Connection, id: &str) -> Result<Option<FormSubmission>, ApiError> {
    let row = conn
        .query_row(
            &format!("SELECT {} FROM forms WHERE id = ?1", COLUMNS),
            params![id],
            read_row,
        )
        .optional()?;
    row.map(decode).transpose()
}

/// Returns whether a row was removed.
pub fn delete(conn: &Connection, id: &str) -> Result<bool, ApiError> {
    let removed = conn.execute("DELETE FROM forms WHERE id = ?1", params![id])?;
    Ok(removed > 0)
}

/// Raw row with `fields` still encoded.
struct StoredForm {
    id: String,
    form_type: String,
    title: String,
    status: String,
    fields: String,
    submitted_by: String,
    submitted_at: DateTime<Utc>,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<StoredForm> {
    Ok(StoredForm {
        id: row.get(0)?,
        form_type: row.get(1)?,
        title: row.get(2)?,
        status: row.get(3)?,
        fields: row.get(4)?,
        submitted_by: row.get(5)?,
        submitted_at: row.get(6)?,
    })
}

fn decode(stored: StoredForm) -> Result<FormSubmission, ApiError> {
    let fields: Fields = serde_json::from_str(&stored.fields).map_err(|e| {
        ApiError::Internal(format!("corrupt fields for form {}: {}", stored.id, e))
    })?;
    Ok(FormSubmission {
        id: stored.id,
        form_type: stored.form_type,
        title: stored.title,
        status: stored.status,
        submitted_at: stored.submitted_at,
        submitted_by: stored.submitted_by,
        fields,
    })
}
