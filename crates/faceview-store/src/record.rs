//! Identity profile records and their persisted document shape.

use serde::{Deserialize, Serialize};

/// Derive the filesystem-safe storage key for a display name:
/// `"Jane Doe"` → `"Jane_Doe"`. The key is both the document filename
/// stem and the image subdirectory name, so names differing only in
/// space-vs-underscore collide and the later write wins.
pub fn storage_key(name: &str) -> String {
    name.replace(' ', "_")
}

/// One enrolled person's profile document.
///
/// All fields are free-text strings as collected at enrollment. Field
/// declaration order is the persisted JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Father's Name")]
    pub father_name: String,
    #[serde(rename = "Mother's Name")]
    pub mother_name: String,
    #[serde(rename = "Date of Birth")]
    pub date_of_birth: String,
    #[serde(rename = "Mobile Number")]
    pub mobile_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Pincode")]
    pub pincode: String,
    /// Original filesystem path of the enrollment image. Storage-only:
    /// stripped from the display view.
    #[serde(rename = "Image Path")]
    pub image_path: String,
}

impl IdentityRecord {
    pub fn key(&self) -> String {
        storage_key(&self.name)
    }

    /// Ordered (label, value) pairs of every persisted field, for echoing
    /// the record back at enrollment time.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("Name", self.name.as_str()),
            ("Gender", self.gender.as_str()),
            ("Age", self.age.as_str()),
            ("Father's Name", self.father_name.as_str()),
            ("Mother's Name", self.mother_name.as_str()),
            ("Date of Birth", self.date_of_birth.as_str()),
            ("Mobile Number", self.mobile_number.as_str()),
            ("Email", self.email.as_str()),
            ("Address", self.address.as_str()),
            ("Pincode", self.pincode.as_str()),
            ("Image Path", self.image_path.as_str()),
        ]
    }

    /// Display view of this record: every field except Image Path, in the
    /// same order.
    pub fn into_details(self) -> IdentityDetails {
        IdentityDetails {
            name: self.name,
            gender: self.gender,
            age: self.age,
            father_name: self.father_name,
            mother_name: self.mother_name,
            date_of_birth: self.date_of_birth,
            mobile_number: self.mobile_number,
            email: self.email,
            address: self.address,
            pincode: self.pincode,
        }
    }
}

/// The display view of an [`IdentityRecord`] — the ten presentation
/// fields, Image Path removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityDetails {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "Father's Name")]
    pub father_name: String,
    #[serde(rename = "Mother's Name")]
    pub mother_name: String,
    #[serde(rename = "Date of Birth")]
    pub date_of_birth: String,
    #[serde(rename = "Mobile Number")]
    pub mobile_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Pincode")]
    pub pincode: String,
}

impl IdentityDetails {
    /// Ordered (label, value) pairs for rendering.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Name", self.name.as_str()),
            ("Gender", self.gender.as_str()),
            ("Age", self.age.as_str()),
            ("Father's Name", self.father_name.as_str()),
            ("Mother's Name", self.mother_name.as_str()),
            ("Date of Birth", self.date_of_birth.as_str()),
            ("Mobile Number", self.mobile_number.as_str()),
            ("Email", self.email.as_str()),
            ("Address", self.address.as_str()),
            ("Pincode", self.pincode.as_str()),
        ]
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> IdentityRecord {
    IdentityRecord {
        name: "Jane Doe".into(),
        gender: "Female".into(),
        age: "34".into(),
        father_name: "John Doe".into(),
        mother_name: "Mary Doe".into(),
        date_of_birth: "1991-06-02".into(),
        mobile_number: "5550001234".into(),
        email: "jane@example.com".into(),
        address: "12 High Street".into(),
        pincode: "560001".into(),
        image_path: "/tmp/jane.jpg".into(),
    }
}
