//! Thai national ID card record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::extract::rules::dates::parse_card_date;

/// Names of the fields extracted from a card, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    CitizenId,
    Prefix,
    NameTh,
    LastnameTh,
    NameEn,
    LastnameEn,
    Dob,
    Religion,
    Address,
    Village,
    Subdistrict,
    District,
    Province,
    IssuedDate,
    ExpiredDate,
}

impl FieldName {
    /// Every field, in output order.
    pub const ALL: [FieldName; 15] = [
        FieldName::CitizenId,
        FieldName::Prefix,
        FieldName::NameTh,
        FieldName::LastnameTh,
        FieldName::NameEn,
        FieldName::LastnameEn,
        FieldName::Dob,
        FieldName::Religion,
        FieldName::Address,
        FieldName::Village,
        FieldName::Subdistrict,
        FieldName::District,
        FieldName::Province,
        FieldName::IssuedDate,
        FieldName::ExpiredDate,
    ];

    /// Output key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::CitizenId => "citizen_id",
            FieldName::Prefix => "prefix",
            FieldName::NameTh => "name_th",
            FieldName::LastnameTh => "lastname_th",
            FieldName::NameEn => "name_en",
            FieldName::LastnameEn => "lastname_en",
            FieldName::Dob => "dob",
            FieldName::Religion => "religion",
            FieldName::Address => "address",
            FieldName::Village => "village",
            FieldName::Subdistrict => "subdistrict",
            FieldName::District => "district",
            FieldName::Province => "province",
            FieldName::IssuedDate => "issued_date",
            FieldName::ExpiredDate => "expired_date",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields recovered from one ID card.
///
/// Every field is always serialized; a field that was not found is written as
/// `null` rather than omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCardRecord {
    /// 13-digit citizen identification number, without spaces.
    pub citizen_id: Option<String>,
    /// Thai title (นาย, นาง, พล.ต., ...).
    pub prefix: Option<String>,
    pub name_th: Option<String>,
    pub lastname_th: Option<String>,
    pub name_en: Option<String>,
    pub lastname_en: Option<String>,
    /// Date of birth, as printed on the card.
    pub dob: Option<String>,
    pub religion: Option<String>,
    /// House number and street part of the address.
    pub address: Option<String>,
    /// Village number (หมู่ที่).
    pub village: Option<String>,
    pub subdistrict: Option<String>,
    pub district: Option<String>,
    pub province: Option<String>,
    pub issued_date: Option<String>,
    pub expired_date: Option<String>,
}

impl IdCardRecord {
    /// Get a field by name.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.slot(field).as_deref()
    }

    fn slot(&self, field: FieldName) -> &Option<String> {
        match field {
            FieldName::CitizenId => &self.citizen_id,
            FieldName::Prefix => &self.prefix,
            FieldName::NameTh => &self.name_th,
            FieldName::LastnameTh => &self.lastname_th,
            FieldName::NameEn => &self.name_en,
            FieldName::LastnameEn => &self.lastname_en,
            FieldName::Dob => &self.dob,
            FieldName::Religion => &self.religion,
            FieldName::Address => &self.address,
            FieldName::Village => &self.village,
            FieldName::Subdistrict => &self.subdistrict,
            FieldName::District => &self.district,
            FieldName::Province => &self.province,
            FieldName::IssuedDate => &self.issued_date,
            FieldName::ExpiredDate => &self.expired_date,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: FieldName) -> &mut Option<String> {
        match field {
            FieldName::CitizenId => &mut self.citizen_id,
            FieldName::Prefix => &mut self.prefix,
            FieldName::NameTh => &mut self.name_th,
            FieldName::LastnameTh => &mut self.lastname_th,
            FieldName::NameEn => &mut self.name_en,
            FieldName::LastnameEn => &mut self.lastname_en,
            FieldName::Dob => &mut self.dob,
            FieldName::Religion => &mut self.religion,
            FieldName::Address => &mut self.address,
            FieldName::Village => &mut self.village,
            FieldName::Subdistrict => &mut self.subdistrict,
            FieldName::District => &mut self.district,
            FieldName::Province => &mut self.province,
            FieldName::IssuedDate => &mut self.issued_date,
            FieldName::ExpiredDate => &mut self.expired_date,
        }
    }

    /// Iterate over `(field, value)` pairs in output order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, Option<&str>)> + '_ {
        FieldName::ALL.iter().map(move |&f| (f, self.get(f)))
    }

    /// Fields that were not found.
    pub fn missing_fields(&self) -> Vec<FieldName> {
        self.fields()
            .filter(|(_, v)| v.is_none())
            .map(|(f, _)| f)
            .collect()
    }

    /// Check if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, v)| v.is_none())
    }

    /// Parsed date of birth.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.dob.as_deref().and_then(parse_card_date)
    }

    /// Parsed issue date.
    pub fn issue_date(&self) -> Option<NaiveDate> {
        self.issued_date.as_deref().and_then(parse_card_date)
    }

    /// Parsed expiry date.
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expired_date.as_deref().and_then(parse_card_date)
    }

    /// Whether the card is expired on `today`. `None` if the expiry date is
    /// missing or unreadable.
    pub fn is_expired(&self, today: NaiveDate) -> Option<bool> {
        self.expiry_date().map(|d| d < today)
    }

    /// Check the record for problems worth reporting to a user.
    pub fn validate(&self, today: NaiveDate) -> Vec<String> {
        let mut issues = Vec::new();

        if self.citizen_id.is_none() {
            issues.push("Citizen ID not found".to_string());
        }

        for (field, value) in [
            (FieldName::Dob, &self.dob),
            (FieldName::IssuedDate, &self.issued_date),
            (FieldName::ExpiredDate, &self.expired_date),
        ] {
            if let Some(value) = value {
                if parse_card_date(value).is_none() {
                    issues.push(format!("Unreadable {}: {}", field, value));
                }
            }
        }

        if let (Some(issued), Some(expires)) = (self.issue_date(), self.expiry_date()) {
            if issued > expires {
                issues.push(format!(
                    "Issue date {} is after expiry date {}",
                    issued, expires
                ));
            }
        }

        if self.is_expired(today) == Some(true) {
            issues.push(format!(
                "Card expired on {}",
                self.expiry_date().map(|d| d.to_string()).unwrap_or_default()
            ));
        }

        issues
    }
}

/// Document handed to transports: the plain space-joined OCR text and the
/// extracted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub full_text: String,
    pub fields: IdCardRecord,
}
