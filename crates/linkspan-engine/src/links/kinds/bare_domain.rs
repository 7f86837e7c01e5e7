/// Bare-domain link form with owned structure rules.
///
/// A bare domain is a letter-led label followed by one or more dotted
/// alphanumeric groups (`example.com`), optionally continued by any
/// non-whitespace tail (`example.com/path?q=1`). The dotted part must pass
/// the domain validator before the match is accepted; the emitted URL is
/// synthesized by prefixing the scheme below.
pub struct BareDomain;

impl BareDomain {
    /// Scheme prepended to accepted bare-domain matches.
    pub const SYNTHESIZED_SCHEME: &'static str = "https://";
    /// Label separator.
    pub const DOT: char = '.';

    /// First char of the leading label. Matching is ASCII-case-insensitive.
    pub fn is_label_start(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    /// Chars allowed inside dotted labels.
    pub fn is_label_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }
}
