//! Managed resources: thin async orchestration over the API client,
//! the value codec, and the lease encoding.

pub mod assign;
pub mod pool;

use crate::error::Error;
use crate::value::Attr;

/// Read a required attribute cell, failing when it is still null or
/// unknown at apply time.
pub(crate) fn required<T: Clone>(attr: &Attr<T>, name: &str) -> Result<T, Error> {
    attr.known()
        .cloned()
        .ok_or_else(|| Error::InvalidValue(format!("{name} must be known during apply")))
}
