use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ManageError, Result};

/// Accepts lowercase kebab-case only: `hello-world`, `rust-2024`.
/// Anything else could escape the content dir or break the front matter.
pub fn validate_slug(slug: &str) -> Result<()> {
    lazy_static! {
        static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
    }

    if SLUG_REGEX.is_match(slug) {
        Ok(())
    } else {
        Err(ManageError::InvalidSlug(slug.to_string()))
    }
}
