//! Card configuration.
//!
//! The one place the card's owner edits: personal details, social links,
//! asset paths, animation timings. Loaded from a JSON document handed over
//! by the embedder and validated up front, so the exporter downstream can
//! assume a complete, well-formed [`ContactRecord`] — obtained by explicit
//! construction here, never reached for through shared state.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::error::{ConfigError, ConfigResult};
use crate::models::{Address, ContactRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Personal details shown on the card and exported in the vCard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PersonalConfig {
    pub name: String,
    pub organization: String,
    pub title: String,
    pub office_phone: String,
    pub personal_phone: String,
    pub email: String,
    pub website: String,
    pub address: Address,
}

/// Social and messaging destinations. Empty `github`/`portfolio` mean the
/// embedding UI hides those buttons.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SocialConfig {
    pub linkedin: String,
    pub facebook: String,
    pub github: String,
    pub portfolio: String,
    pub whatsapp_number: String,
}

/// Paths to the card's image assets, relative to the page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssetConfig {
    pub company_logo: String,
    pub profile_image: String,
    pub light_background: String,
    pub dark_background: String,
    pub favicon: String,
}

/// Animation timings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub notification_duration_ms: u64,
    pub transition_delay_ms: u64,
    pub icon_rotation_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            notification_duration_ms: 3000,
            transition_delay_ms: 100,
            icon_rotation_delay_ms: 150,
        }
    }
}

/// The full card configuration document.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardConfig {
    pub personal: PersonalConfig,
    pub social: SocialConfig,
    pub assets: AssetConfig,
    pub animation: AnimationConfig,
}

impl CardConfig {
    /// Parse a configuration document from JSON text.
    ///
    /// Parsing alone; field validation happens in [`CardConfig::contact_record`],
    /// which is where malformed values get their field-precise errors.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Validate the personal section and build the immutable [`ContactRecord`]
    /// the exporter is constructed with.
    ///
    /// Rules:
    /// - `personal.name` must be non-empty (everything else keys off it)
    /// - `personal.website`, when present, must be an absolute http(s) URL
    /// - `personal.email` and both phones, when present, must pass domain
    ///   validation
    /// - `social.whatsapp_number`, when present, must be a phone number; it
    ///   is normalized to its bare digits, the form deep links expect
    ///
    /// Absent optional values stay empty strings so the generated document
    /// keeps its fixed line structure.
    pub fn contact_record(&self) -> ConfigResult<ContactRecord> {
        let personal = &self.personal;

        if personal.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "personal.name".to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        if !personal.website.is_empty()
            && !personal.website.starts_with("http://")
            && !personal.website.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "personal.website".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        if !personal.email.is_empty() {
            EmailAddress::new(&personal.email).map_err(|e| invalid("personal.email", e))?;
        }
        if !personal.office_phone.is_empty() {
            PhoneNumber::new(&personal.office_phone)
                .map_err(|e| invalid("personal.office_phone", e))?;
        }
        if !personal.personal_phone.is_empty() {
            PhoneNumber::new(&personal.personal_phone)
                .map_err(|e| invalid("personal.personal_phone", e))?;
        }

        let whatsapp_number = if self.social.whatsapp_number.is_empty() {
            String::new()
        } else {
            PhoneNumber::new(&self.social.whatsapp_number)
                .map_err(|e| invalid("social.whatsapp_number", e))?
                .digits()
        };

        Ok(ContactRecord {
            name: personal.name.clone(),
            organization: personal.organization.clone(),
            title: personal.title.clone(),
            office_phone: personal.office_phone.clone(),
            personal_phone: personal.personal_phone.clone(),
            email: personal.email.clone(),
            website: personal.website.clone(),
            address: personal.address.clone(),
            whatsapp_number,
        })
    }
}

fn invalid(field: &str, err: ValidationError) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: err.to_string(),
    }
}
