//! Settings Loader
//!
//! Reads dialog settings from a JSON script element in the host page:
//! `<script id="shopping-list-settings" type="application/json">{...}</script>`

use shopping_core::FormSettings;

pub const SETTINGS_ELEMENT_ID: &str = "shopping-list-settings";

/// Load settings, falling back to defaults when missing or invalid
pub fn load_settings() -> FormSettings {
    match read_settings() {
        Ok(Some(settings)) => {
            log::info!("[SETTINGS] Loaded {:?}", settings);
            settings
        }
        Ok(None) => FormSettings::default(),
        Err(e) => {
            log::warn!("[SETTINGS] {}, using defaults", e);
            FormSettings::default()
        }
    }
}

fn read_settings() -> Result<Option<FormSettings>, String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document available".to_string())?;

    let Some(element) = document.get_element_by_id(SETTINGS_ELEMENT_ID) else {
        return Ok(None);
    };

    parse_settings(&element.text_content().unwrap_or_default())
}

/// Blank content counts as "no settings"
fn parse_settings(json: &str) -> Result<Option<FormSettings>, String> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    FormSettings::from_json(json).map(Some).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_blank() {
        assert_eq!(parse_settings("  \n "), Ok(None));
    }

    #[test]
    fn test_parse_settings_values() {
        let parsed = parse_settings(r#"{"clear_on_cancel": true}"#).unwrap().unwrap();
        assert!(parsed.clear_on_cancel);
        assert!(!parsed.prefill_on_edit);
    }

    #[test]
    fn test_parse_settings_invalid() {
        assert!(parse_settings("{").is_err());
    }
}
