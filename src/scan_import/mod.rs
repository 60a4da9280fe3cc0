//! Scan import domain: the untrusted upload shape, the normalized scan
//! record, and the pure validation/normalization steps between them.
pub mod domain;
pub mod services;
