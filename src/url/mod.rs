//! URL handling for websift
//!
//! Input lines arrive raw from the URL list. The only canonicalization
//! performed is the legacy `www.` prefix rule; everything else is passed
//! through untouched and left to fail at fetch time.

mod normalize;

pub use normalize::{has_explicit_scheme, normalize_url};
