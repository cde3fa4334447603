//! Vocabularies for the simple record types: visitors, vendors, documents,
//! parking slots.

use crate::error::CoreError;
use crate::validation::{validate_one_of, validate_required};

/* --------------------------------------------------------------------------
Visitors
-------------------------------------------------------------------------- */

pub const VALID_VISITOR_TYPES: &[&str] = &["visitor", "delivery", "service"];

pub fn validate_visitor(
    name: &str,
    phone: &str,
    purpose: &str,
    visitor_type: &str,
) -> Result<(), CoreError> {
    validate_required("name", name)?;
    validate_required("phone", phone)?;
    validate_required("purpose", purpose)?;
    validate_one_of("visitor type", visitor_type, VALID_VISITOR_TYPES)
}

/* --------------------------------------------------------------------------
Vendors
-------------------------------------------------------------------------- */

pub const MAX_VENDOR_RATING: f64 = 5.0;

pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !(0.0..=MAX_VENDOR_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between 0 and {MAX_VENDOR_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Documents
-------------------------------------------------------------------------- */

pub const VALID_DOCUMENT_CATEGORIES: &[&str] = &["rules", "minutes", "budget", "contract", "other"];

pub const VALID_FILE_TYPES: &[&str] = &["pdf", "doc", "image"];

pub fn validate_document(title: &str, category: &str, file_type: &str) -> Result<(), CoreError> {
    validate_required("title", title)?;
    validate_one_of("document category", category, VALID_DOCUMENT_CATEGORIES)?;
    validate_one_of("file type", file_type, VALID_FILE_TYPES)
}

/* --------------------------------------------------------------------------
Parking
-------------------------------------------------------------------------- */

pub const VALID_SLOT_TYPES: &[&str] = &["resident", "visitor"];

pub fn validate_slot_type(slot_type: &str) -> Result<(), CoreError> {
    validate_one_of("slot type", slot_type, VALID_SLOT_TYPES)
}
