//! Argentine government checks.
//!
//! MetaMap validates the submitted document against the National Direction of
//! Migration (DNI check) or the National Registry of Persons (RENAPER checks).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::{GovCheckRequest, GovCheckResponse, Metadata};

/// Gender as printed on the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Male,
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    Female,
}

/// Validates that a DNI number exists and that its date of issue matches the
/// last card issued to the holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgentinaDniRequest {
    /// Document number from either a national ID or a driver license
    pub document_number: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub gender: Gender,
    /// Document issue date, `YYYY-MM-DD`
    pub date_of_issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Internal references echoed back in outputs and webhooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ArgentinaDniRequest {
    /// Creates a request with the required fields
    #[must_use]
    pub fn new(
        document_number: impl Into<String>,
        date_of_birth: impl Into<String>,
        gender: Gender,
        date_of_issue: impl Into<String>,
    ) -> Self {
        Self {
            document_number: document_number.into(),
            date_of_birth: date_of_birth.into(),
            gender,
            date_of_issue: date_of_issue.into(),
            callback_url: None,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl GovCheckRequest for ArgentinaDniRequest {
    const PATH: &'static str = "govchecks/v1/ar/dni";
    type Data = ArgentinaDniData;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArgentinaDniData {
    pub date_of_issue: Option<String>,
    pub document_number: Option<String>,
}

pub type ArgentinaDniResponse = GovCheckResponse<ArgentinaDniData>;

/// Validates that a DNI number exists and that its owner matches the data held
/// by RENAPER.
///
/// Run the DNI check first to validate the card itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgentinaRenaperRequest {
    /// Document number from either a national ID or a driver license
    pub document_number: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub gender: Gender,
    /// Document issue date, `YYYY-MM-DD`
    pub date_of_issue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Internal references echoed back in outputs and webhooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ArgentinaRenaperRequest {
    /// Creates a request with the required fields
    #[must_use]
    pub fn new(
        document_number: impl Into<String>,
        date_of_birth: impl Into<String>,
        gender: Gender,
        date_of_issue: impl Into<String>,
    ) -> Self {
        Self {
            document_number: document_number.into(),
            date_of_birth: date_of_birth.into(),
            gender,
            date_of_issue: date_of_issue.into(),
            callback_url: None,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl GovCheckRequest for ArgentinaRenaperRequest {
    const PATH: &'static str = "govchecks/v1/ar/renaper";
    type Data = ArgentinaRenaperData;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArgentinaRenaperData {
    pub date_of_birth: Option<String>,
    pub full_name: Option<String>,
    pub dni_number: Option<String>,
    pub cuit: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone_numbers: Vec<String>,
    pub deceased: Option<Deceased>,
}

pub type ArgentinaRenaperResponse = GovCheckResponse<ArgentinaRenaperData>;

/// RENAPER reports the deceased status with no fixed shape: booleans, strings
/// and objects all occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deceased {
    Flag(bool),
    Text(String),
    Details(Map<String, Value>),
    Other(Value),
}

impl Deceased {
    /// Reads the status as a boolean when the shape allows it.
    ///
    /// Returns `None` for objects and for strings that are not a recognised
    /// yes/no answer.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(text) => match text.trim().to_lowercase().as_str() {
                "true" | "yes" | "si" | "sí" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
            Self::Details(_) | Self::Other(_) => None,
        }
    }
}

/// RENAPER check that also validates the copy and issue date of the card and
/// returns the full document record.
///
/// Includes the DNI check, no need to run it separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgentinaRenaperPremiumRequest {
    /// Document number from either a national ID or a driver license
    pub document_number: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    /// Document issue date, `YYYY-MM-DD`
    pub issue_date: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Internal references echoed back in outputs and webhooks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ArgentinaRenaperPremiumRequest {
    /// Creates a request with the required fields
    #[must_use]
    pub fn new(
        document_number: impl Into<String>,
        date_of_birth: impl Into<String>,
        issue_date: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            document_number: document_number.into(),
            date_of_birth: date_of_birth.into(),
            issue_date: issue_date.into(),
            gender,
            callback_url: None,
            metadata: None,
        }
    }

    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl GovCheckRequest for ArgentinaRenaperPremiumRequest {
    const PATH: &'static str = "govchecks/v1/ar/renaper-premium";
    type Data = ArgentinaRenaperPremiumData;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArgentinaRenaperPremiumData {
    pub id_main_issue: Option<String>,
    pub id_reprint: Option<String>,
    pub copy_code: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub street_name: Option<String>,
    pub street_number: Option<String>,
    pub floor: Option<String>,
    pub apartment: Option<String>,
    pub zip_code: Option<String>,
    pub neighborhood: Option<String>,
    pub monobloc: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub death_notice: Option<String>,
    pub date_of_death: Option<String>,
    pub citizen_id: Option<String>,
    pub nationality: Option<String>,
    pub place_of_birth: Option<String>,
    pub taxid: Option<String>,
    pub gender: Option<String>,
    pub national_id: Option<String>,
    pub national_id_validation: Option<String>,
    pub issue_date_validation: Option<String>,
    pub gender_validation: Option<String>,
}

pub type ArgentinaRenaperPremiumResponse = GovCheckResponse<ArgentinaRenaperPremiumData>;

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
