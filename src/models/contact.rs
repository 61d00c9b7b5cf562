//! Contact record: the single person a business card describes.

use serde::{Deserialize, Serialize};

/// A postal address as a street/city/country triple.
///
/// Segments may be empty; the vCard line keeps empty segments in place so
/// the generated structure never shifts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Address {
    /// Street line, including floor/sector details
    pub street: String,

    /// City
    pub city: String,

    /// Country
    pub country: String,
}

impl Address {
    /// The single display line the card UI shows, comma-joined.
    pub fn formatted(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.country)
    }
}

/// The contact a card exports.
///
/// An immutable value created once at configuration load and held for the
/// page session. No field is optional for correct output; an absent value is
/// the empty string so the generated document keeps its fixed line
/// structure and stays parseable by downstream contact-import tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// Display name, space-separated given/family convention
    pub name: String,

    /// Organization name
    pub organization: String,

    /// Job title
    pub title: String,

    /// Office phone number
    pub office_phone: String,

    /// Personal (cell) phone number
    pub personal_phone: String,

    /// Email address
    pub email: String,

    /// Website, absolute URL
    pub website: String,

    /// Postal address
    pub address: Address,

    /// Messaging destination: digit string, no leading `+`
    pub whatsapp_number: String,
}

impl ContactRecord {
    /// Serialize the key fields as human-readable text, used when delivery
    /// fails and the contact is offered for clipboard copy instead.
    pub fn clipboard_text(&self) -> String {
        format!(
            "{}\n{}\n{}\nOffice: {}\nPersonal: {}\nEmail: {}\nWebsite: {}\nAddress: {}",
            self.name,
            self.title,
            self.organization,
            self.office_phone,
            self.personal_phone,
            self.email,
            self.website,
            self.address.formatted(),
        )
    }
}
