//! # Link Scanning
//!
//! Cursor-based detection of URL-like substrings in plain text.
//!
//! ## Architecture
//!
//! Scanning is a pure function over a string: it knows nothing about the
//! document model and emits string-relative [`LinkSpan`]s. The scanner is a
//! single left-to-right cursor walk with `try_match_*` helpers per link
//! form, rather than a regex, so the boundary and trimming rules are
//! explicit and portable.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for char-by-char scanning with byte positions
//! - **`kinds`**: link forms with owned syntax rules (`SchemeUrl`,
//!   `BareDomain`)
//! - **`domain`**: the `DomainValidator` collaborator deciding whether a
//!   bare token is a plausible hostname
//! - **`scanner`**: `scan_links()` entry point and the `LinkScanner`
//!   iterator
//!
//! ## Precedence
//!
//! At each candidate boundary the scheme form is tried first, then the bare
//! domain. The two cannot match the same token (a bare label stops at `:`),
//! so the order only mirrors the alternation of the original pattern.

pub mod cursor;
pub mod domain;
pub mod kinds;
pub mod scanner;

pub use domain::{DomainValidator, HostnameValidator};
pub use scanner::{LinkScanner, LinkSpan, scan_links};
