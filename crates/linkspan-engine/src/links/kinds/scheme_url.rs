/// Scheme-prefixed URL form with owned prefix constants.
///
/// A scheme match runs from the prefix to the next whitespace and is
/// emitted verbatim.
pub struct SchemeUrl;

impl SchemeUrl {
    pub const HTTP: &'static str = "http://";
    pub const HTTPS: &'static str = "https://";
}
