//! Database schemas and request validation.
//!
//! Every persistable type implements [`DocumentSchema`], which binds it to
//! the document-store collection it lives in. Collection names are the
//! lowercase type name: `ContactRequest` → `contactrequest`, `Cuvee` →
//! `cuvee`, and so on.
//!
//! [`ContactRequest`] is the only entity with a real lifecycle: created
//! exactly once per successful submission and owned by the store thereafter.
//! The remaining types are declared so the database viewer can read the
//! schema, but no endpoint populates them.
//!
//! [`DocumentSchema`]: crate::db::DocumentSchema

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::DocumentSchema;

fn default_true() -> bool {
    true
}

// =============================================================================
// Contact
// =============================================================================

/// Payload accepted by `POST /contact`.
///
/// Deserialization enforces the required fields; [`Validate::validate`]
/// checks field constraints and reports every violated field in one pass.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    /// Full name.
    #[validate(length(min = 2))]
    pub name: String,
    /// Valid email address.
    #[validate(email)]
    pub email: String,
    /// Market / Region.
    #[serde(default)]
    pub market_region: Option<String>,
    /// What brings you: Allocation / Event / Professional / Press.
    pub interest: String,
    /// Free message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Contact requests from the website.
///
/// Immutable once created; there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub market_region: Option<String>,
    pub interest: String,
    pub message: Option<String>,
}

impl DocumentSchema for ContactRequest {
    const COLLECTION: &'static str = "contactrequest";
}

impl From<ContactForm> for ContactRequest {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            market_region: form.market_region,
            interest: form.interest,
            message: form.message,
        }
    }
}

// =============================================================================
// Catalogue
// =============================================================================

/// Cuvée catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cuvee {
    /// Cuvée name.
    pub name: String,
    /// Collection the cuvée belongs to, e.g. "GC-5", "GC-4", "Iroise 769", "Alba".
    pub collection: String,
    /// Vintage year or NV.
    #[serde(default)]
    pub vintage: Option<String>,
    #[serde(default)]
    pub tasting_notes: Option<String>,
    #[serde(default)]
    pub technical_notes: Option<String>,
    /// Image URLs.
    #[serde(default)]
    pub imagery: Option<Vec<String>>,
    #[serde(default)]
    pub key_story: Option<String>,
}

impl DocumentSchema for Cuvee {
    const COLLECTION: &'static str = "cuvee";
}

// =============================================================================
// Reference schemas
// =============================================================================

/// Website user. Declared for reference; no endpoint reads or writes it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub address: String,
    /// Age in years.
    #[serde(default)]
    #[validate(range(min = 0, max = 120))]
    pub age: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl DocumentSchema for User {
    const COLLECTION: &'static str = "user";
}

/// Catalogue product. Declared for reference; no endpoint reads or writes it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in dollars.
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl DocumentSchema for Product {
    const COLLECTION: &'static str = "product";
}
