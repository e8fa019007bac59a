//! Settings read and validated partial update.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::Settings;
use crate::store::JsonStore;

/// A partial settings update. Unknown fields are rejected at
/// deserialization; absent fields leave the stored value unchanged.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsPatch {
    pub dynamic_pricing_enabled: Option<bool>,
    pub min_commission: Option<Decimal>,
    pub default_commission: Option<Decimal>,
    pub deals_enabled: Option<bool>,
}

/// Validate a patch, reporting the first violated constraint.
fn validate(patch: &SettingsPatch) -> Result<()> {
    if let Some(value) = patch.min_commission {
        check_commission("min_commission", value)?;
    }
    if let Some(value) = patch.default_commission {
        check_commission("default_commission", value)?;
    }
    Ok(())
}

fn check_commission(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(AppError::Validation(format!(
            "{field} must be between 0 and 1"
        )));
    }
    Ok(())
}

/// Merge the present fields of a patch over the stored settings.
fn apply(settings: &mut Settings, patch: &SettingsPatch) {
    if let Some(value) = patch.dynamic_pricing_enabled {
        settings.dynamic_pricing_enabled = value;
    }
    if let Some(value) = patch.min_commission {
        settings.min_commission = value;
    }
    if let Some(value) = patch.default_commission {
        settings.default_commission = value;
    }
    if let Some(value) = patch.deals_enabled {
        settings.deals_enabled = value;
    }
}

/// Read the current settings.
pub async fn get(store: &JsonStore) -> Settings {
    store.load().await.settings
}

/// Validate and persist a partial update, returning the merged settings.
///
/// # Errors
///
/// Returns `AppError::Validation` naming the first out-of-range field, or a
/// store error if the save fails. No mutation occurs on validation failure.
pub async fn update(store: &JsonStore, patch: SettingsPatch) -> Result<Settings> {
    validate(&patch)?;

    let merged = store
        .update(|doc| {
            apply(&mut doc.settings, &patch);
            doc.settings.clone()
        })
        .await?;

    Ok(merged)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::open(dir.path().join("db.json"))
    }

    #[tokio::test]
    async fn test_partial_update_leaves_absent_fields_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let patch = SettingsPatch {
            deals_enabled: Some(false),
            ..SettingsPatch::default()
        };
        let merged = update(&store, patch).await.unwrap();

        let defaults = Settings::default();
        assert!(!merged.deals_enabled);
        assert_eq!(merged.min_commission, defaults.min_commission);
        assert_eq!(merged.default_commission, defaults.default_commission);
        assert_eq!(
            merged.dynamic_pricing_enabled,
            defaults.dynamic_pricing_enabled
        );

        // persisted too
        assert_eq!(get(&store).await, merged);
    }

    #[tokio::test]
    async fn test_commission_above_one_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let patch = SettingsPatch {
            default_commission: Some(Decimal::new(15, 1)), // 1.5
            ..SettingsPatch::default()
        };
        let err = update(&store, patch).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("default_commission"));

        // nothing persisted
        assert_eq!(get(&store).await, Settings::default());
    }

    #[tokio::test]
    async fn test_negative_commission_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let patch = SettingsPatch {
            min_commission: Some(Decimal::new(-1, 2)),
            ..SettingsPatch::default()
        };
        assert!(update(&store, patch).await.is_err());
    }

    #[test]
    fn test_unknown_field_rejected_by_serde() {
        let result = serde_json::from_str::<SettingsPatch>(r#"{"surprise": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_min_above_default_is_not_rejected() {
        // The relationship between the two bounds is deliberately unchecked.
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"min_commission": 0.9, "default_commission": 0.1}"#).unwrap();
        assert!(validate(&patch).is_ok());
    }
}
