//! Site settings - Key-value configuration editable at runtime.
//!
//! The only key in use is the header label. Writes are unconditional; the last one wins.

use crate::{
    entities::{SiteSetting, site_setting},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use tracing::info;

/// Key under which the header label is stored.
pub const HEADER_KEY: &str = "header_title";

/// Reads a stored setting, or `None` if it was never written.
pub async fn get_setting(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    let setting = SiteSetting::find()
        .filter(site_setting::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(setting.map(|s| s.value))
}

/// Stores `value` under `key`, replacing any previous value.
pub async fn set_setting(
    db: &DatabaseConnection,
    key: &str,
    value: &str,
) -> Result<site_setting::Model> {
    let now = Utc::now().naive_utc();

    let existing = SiteSetting::find()
        .filter(site_setting::Column::Key.eq(key))
        .one(db)
        .await?;

    let saved = if let Some(setting) = existing {
        let mut active_model: site_setting::ActiveModel = setting.into();
        active_model.value = Set(value.to_string());
        active_model.updated_at = Set(now);
        active_model.update(db).await?
    } else {
        site_setting::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?
    };

    Ok(saved)
}

/// Current header label, or `default` if none has been stored.
pub async fn get_header(db: &DatabaseConnection, default: &str) -> Result<String> {
    Ok(get_setting(db, HEADER_KEY)
        .await?
        .unwrap_or_else(|| default.to_string()))
}

/// Replaces the header label.
pub async fn update_header(db: &DatabaseConnection, value: &str) -> Result<()> {
    set_setting(db, HEADER_KEY, value).await?;
    info!(header = value, "Updated header label");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_header_defaults_until_set() -> Result<()> {
        let db = setup_test_db().await?;

        assert_eq!(get_header(&db, "Default Title").await?, "Default Title");

        update_header(&db, "X").await?;
        assert_eq!(get_header(&db, "Default Title").await?, "X");

        Ok(())
    }

    #[tokio::test]
    async fn test_last_write_wins_without_duplicates() -> Result<()> {
        let db = setup_test_db().await?;

        update_header(&db, "First").await?;
        update_header(&db, "Second").await?;
        assert_eq!(get_header(&db, "unused").await?, "Second");

        let rows = SiteSetting::find()
            .filter(site_setting::Column::Key.eq(HEADER_KEY))
            .all(&db)
            .await?;
        assert_eq!(rows.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_setting_unknown_key() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_setting(&db, "nope").await?.is_none());
        Ok(())
    }
}
