/// Row ids (`BIGSERIAL`), also used for household owners, tenants and voters.
pub type DbId = i64;

/// `TIMESTAMPTZ` columns, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
