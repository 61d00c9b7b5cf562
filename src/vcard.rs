//! vCard 3.0 document generation.
//!
//! Pure string construction: no I/O, no shared state, deterministic output.
//! Two calls over the same record yield byte-identical text, which is what
//! makes the delivery layer free to regenerate instead of caching.

use crate::models::ContactRecord;

/// Mime label for the generated document.
pub const VCARD_MIME: &str = "text/vcard;charset=utf-8";

/// Standard contact-file extension (without the dot).
pub const VCARD_EXTENSION: &str = "vcf";

/// Split a display name into `(given, family)`.
///
/// The last whitespace-separated token is the family name; everything before
/// it, joined by single spaces, is the given name. A single-word name yields
/// an empty given name ("Madonna" → family "Madonna", given "") — a
/// documented edge case, not an error.
pub fn split_name(name: &str) -> (String, String) {
    let mut parts: Vec<&str> = name.split_whitespace().collect();
    let family = parts.pop().unwrap_or_default().to_string();
    let given = parts.join(" ");
    (given, family)
}

/// Generate the vCard document for a contact.
///
/// Line order is fixed regardless of which fields are empty: an empty
/// organization yields `ORG:` with no trailing content, never a dropped
/// line, so downstream import tools always see the same structure.
///
/// Field values are emitted verbatim. Embedded `;`/`,`/newlines are NOT
/// escaped, which does not conform to the vCard escaping rule; cards
/// produced by every deployed revision of this exporter have that shape, so
/// changing it is a compatibility decision, not a bug fix.
pub fn generate_document(contact: &ContactRecord) -> String {
    let (given, family) = split_name(&contact.name);

    format!(
        "BEGIN:VCARD\n\
         VERSION:3.0\n\
         FN:{name}\n\
         N:{family};{given};;;\n\
         ORG:{organization}\n\
         TITLE:{title}\n\
         TEL;TYPE=WORK,VOICE:{office_phone}\n\
         TEL;TYPE=CELL,VOICE:{personal_phone}\n\
         EMAIL:{email}\n\
         URL:{website}\n\
         ADR;TYPE=WORK:;;{street};{city};;{country}\n\
         END:VCARD",
        name = contact.name,
        family = family,
        given = given,
        organization = contact.organization,
        title = contact.title,
        office_phone = contact.office_phone,
        personal_phone = contact.personal_phone,
        email = contact.email,
        website = contact.website,
        street = contact.address.street,
        city = contact.address.city,
        country = contact.address.country,
    )
}

/// Derive the download file name: lowercased display name with whitespace
/// collapsed to hyphens, suffixed `-contact.vcf`.
pub fn file_name(contact: &ContactRecord) -> String {
    let stem: Vec<String> = contact
        .name
        .split_whitespace()
        .map(|part| part.to_lowercase())
        .collect();

    format!("{}-contact.{}", stem.join("-"), VCARD_EXTENSION)
}
