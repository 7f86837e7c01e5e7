//! Link-form types that own their syntax knowledge.
//!
//! All scheme prefixes and domain structure rules live here, not scattered
//! in scanner code. The scanner calls these constants and predicates; it
//! never hardcodes `http://` or label char classes.

pub mod bare_domain;
pub mod scheme_url;

pub use bare_domain::BareDomain;
pub use scheme_url::SchemeUrl;
