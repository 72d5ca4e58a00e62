//! Contact repository for database operations.
//!
//! Every lookup and mutation is keyed by `(owner, id)`: a contact owned by
//! another user produces the same "no rows" outcome as a contact that does
//! not exist.

use domain::models::ContactFilters;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContactEntity;
use crate::metrics::QueryTimer;

const CONTACT_COLUMNS: &str =
    "id, username, first_name, last_name, email, phone, created_at, updated_at";

/// Shared predicate for search queries: owner scope plus optional
/// case-insensitive substring filters. `name` matches first OR last name.
const SEARCH_PREDICATE: &str = r#"
    username = $1
    AND ($2::TEXT IS NULL OR first_name ILIKE '%' || $2 || '%' OR last_name ILIKE '%' || $2 || '%')
    AND ($3::TEXT IS NULL OR email ILIKE '%' || $3 || '%')
    AND ($4::TEXT IS NULL OR phone ILIKE '%' || $4 || '%')
"#;

/// Repository for contact-related database operations.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new contact owned by `owner`.
    pub async fn create(
        &self,
        id: Uuid,
        owner: &str,
        first_name: &str,
        last_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<ContactEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_contact");
        let result = sqlx::query_as::<_, ContactEntity>(&format!(
            r#"
            INSERT INTO contacts (id, username, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a contact by the combined `(owner, id)` key.
    pub async fn find_by_owner_and_id(
        &self,
        owner: &str,
        id: Uuid,
    ) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_contact_by_owner_and_id");
        let result = sqlx::query_as::<_, ContactEntity>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts WHERE username = $1 AND id = $2"
        ))
        .bind(owner)
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Replace all mutable fields of a contact in one statement.
    ///
    /// Returns `None` when the `(owner, id)` key matches no row.
    pub async fn update(
        &self,
        owner: &str,
        id: Uuid,
        first_name: &str,
        last_name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Option<ContactEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_contact");
        let result = sqlx::query_as::<_, ContactEntity>(&format!(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6, updated_at = NOW()
            WHERE username = $1 AND id = $2
            RETURNING {CONTACT_COLUMNS}
            "#
        ))
        .bind(owner)
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a contact by the combined `(owner, id)` key.
    ///
    /// Returns whether a row was actually removed.
    pub async fn delete(&self, owner: &str, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_contact");
        let result = sqlx::query("DELETE FROM contacts WHERE username = $1 AND id = $2")
            .bind(owner)
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected() > 0)
    }

    /// Whether any contact with this id exists, regardless of owner.
    pub async fn exists(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("contact_exists");
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM contacts WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        timer.record();
        Ok(row.0)
    }

    /// Search the owner's contacts with optional filters and page/size
    /// bounds. Returns the page of rows plus the total match count.
    pub async fn search(
        &self,
        owner: &str,
        filters: &ContactFilters,
        limit: u32,
        offset: i64,
    ) -> Result<(Vec<ContactEntity>, i64), sqlx::Error> {
        let timer = QueryTimer::new("search_contacts");

        let total: (i64,) = sqlx::query_as(&format!(
            "SELECT COUNT(*) FROM contacts WHERE {SEARCH_PREDICATE}"
        ))
        .bind(owner)
        .bind(filters.name.as_deref())
        .bind(filters.email.as_deref())
        .bind(filters.phone.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, ContactEntity>(&format!(
            r#"
            SELECT {CONTACT_COLUMNS}
            FROM contacts
            WHERE {SEARCH_PREDICATE}
            ORDER BY first_name ASC, id ASC
            LIMIT $5 OFFSET $6
            "#
        ))
        .bind(owner)
        .bind(filters.name.as_deref())
        .bind(filters.email.as_deref())
        .bind(filters.phone.as_deref())
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        timer.record();
        Ok((rows, total.0))
    }
}

#[cfg(test)]
mod tests {
    // Note: ContactRepository tests require a database connection and are
    // covered by integration environments.
}
