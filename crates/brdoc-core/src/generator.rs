//! Random identifiers for test fixtures.
//!
//! Not suitable for issuing real identifiers: the base is drawn uniformly and
//! only the check digits are guaranteed.

use rand::Rng;

use crate::checksum::complete;
use crate::document::insert_delimiters;
use crate::schema::IdClass;

/// Draws a random valid identifier using the thread-local generator.
pub fn random(class: IdClass, formatted: bool) -> String {
    random_with(class, &mut rand::rng(), formatted)
}

/// Draws a random valid identifier from `rng`.
///
/// Pass a seeded generator for reproducible fixtures.
pub fn random_with<R: Rng + ?Sized>(class: IdClass, rng: &mut R, formatted: bool) -> String {
    let schema = class.schema();
    let base: String = (0..schema.base_width)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    let canonical = complete(schema, &base);
    tracing::trace!(%class, value = %canonical, "generated identifier");
    if formatted {
        insert_delimiters(class, &canonical)
    } else {
        canonical
    }
}
