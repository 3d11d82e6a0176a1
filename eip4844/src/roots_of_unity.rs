use std::sync::OnceLock;

use bls12_381::Scalar;
use polynomial::domain::Domain;

use crate::constants::FIELD_ELEMENTS_PER_BLOB;

static BLOB_DOMAIN: OnceLock<Domain> = OnceLock::new();

/// The bit-reversed roots of unity domain that blobs are evaluated over.
///
/// Computed on first access and shared by every `Context` in the process.
pub(crate) fn blob_domain() -> &'static Domain {
    BLOB_DOMAIN.get_or_init(|| {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("compute roots of unity").entered();
        Domain::new(FIELD_ELEMENTS_PER_BLOB)
    })
}

/// The `FIELD_ELEMENTS_PER_BLOB` roots of unity in bit-reversed order.
///
/// Blob chunk `i` is the evaluation of the blob polynomial at `roots_of_unity()[i]`.
pub fn roots_of_unity() -> &'static [Scalar] {
    &blob_domain().roots
}
