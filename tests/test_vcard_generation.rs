//! Integration tests for vCard document generation.
//!
//! Generation is pure string construction; these tests pin the exact line
//! structure downstream contact-import tools depend on.

use ecard_exporter::models::{Address, ContactRecord};
use ecard_exporter::vcard;

fn full_record() -> ContactRecord {
    ContactRecord {
        name: "Nure Alam".to_string(),
        organization: "Mind Mentor Overseas LTD.".to_string(),
        title: "Managing Partner at Roaming Tours and Travel".to_string(),
        office_phone: "01329739725".to_string(),
        personal_phone: "8801757903911".to_string(),
        email: "info@roamingbd.com".to_string(),
        website: "https://roamingbd.com/".to_string(),
        address: Address {
            street: "House-25 (2nd Floor), Road-02, Sector-03, Uttara".to_string(),
            city: "Dhaka".to_string(),
            country: "Bangladesh".to_string(),
        },
        whatsapp_number: "8801757903911".to_string(),
    }
}

/// Two calls over an identical record produce identical output text.
#[test]
fn test_generation_is_pure_and_deterministic() {
    let record = full_record();
    let first = vcard::generate_document(&record);
    let second = vcard::generate_document(&record);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

/// The document begins and ends with the envelope markers and carries the
/// version line.
#[test]
fn test_envelope_and_version() {
    let doc = vcard::generate_document(&full_record());
    assert!(doc.starts_with("BEGIN:VCARD\nVERSION:3.0\n"));
    assert!(doc.ends_with("END:VCARD"));
}

/// "Nure Alam" splits into family "Alam", given "Nure".
#[test]
fn test_name_line_two_token_name() {
    let doc = vcard::generate_document(&full_record());
    assert!(doc.contains("\nFN:Nure Alam\n"));
    assert!(doc.contains("\nN:Alam;Nure;;;\n"));
}

/// A single-token name becomes the family name with an empty given name.
#[test]
fn test_name_line_single_token_name() {
    let record = ContactRecord {
        name: "Madonna".to_string(),
        ..Default::default()
    };
    let doc = vcard::generate_document(&record);
    assert!(doc.contains("\nN:Madonna;;;;\n"));
}

/// Line order is fixed regardless of which fields are empty; an empty
/// organization yields `ORG:` with no trailing content, not a dropped line.
#[test]
fn test_empty_fields_do_not_drop_lines() {
    let sparse = ContactRecord {
        name: "Nure Alam".to_string(),
        email: "info@roamingbd.com".to_string(),
        ..Default::default()
    };
    let doc = vcard::generate_document(&sparse);
    let lines: Vec<&str> = doc.lines().collect();

    let full_lines: Vec<String> = vcard::generate_document(&full_record())
        .lines()
        .map(|line| line.split(':').next().unwrap_or_default().to_string())
        .collect();
    let sparse_tags: Vec<String> = lines
        .iter()
        .map(|line| line.split(':').next().unwrap_or_default().to_string())
        .collect();

    // Same tag sequence whether or not fields hold values.
    assert_eq!(sparse_tags, full_lines);
    assert!(lines.contains(&"ORG:"));
    assert!(lines.contains(&"TITLE:"));
}

/// Phone lines carry their WORK,VOICE / CELL,VOICE type tags.
#[test]
fn test_phone_type_tags() {
    let doc = vcard::generate_document(&full_record());
    assert!(doc.contains("\nTEL;TYPE=WORK,VOICE:01329739725\n"));
    assert!(doc.contains("\nTEL;TYPE=CELL,VOICE:8801757903911\n"));
}

/// Address segments land in the WORK address line, empty segments preserved.
#[test]
fn test_address_line_segments() {
    let doc = vcard::generate_document(&full_record());
    assert!(doc.contains(
        "\nADR;TYPE=WORK:;;House-25 (2nd Floor), Road-02, Sector-03, Uttara;Dhaka;;Bangladesh\n"
    ));
}

/// File name is the lowercased, hyphenated display name plus the contact
/// suffix and extension.
#[test]
fn test_file_name_derivation() {
    assert_eq!(vcard::file_name(&full_record()), "nure-alam-contact.vcf");

    let multi = ContactRecord {
        name: "M S Kamran".to_string(),
        ..Default::default()
    };
    assert_eq!(vcard::file_name(&multi), "m-s-kamran-contact.vcf");
}
