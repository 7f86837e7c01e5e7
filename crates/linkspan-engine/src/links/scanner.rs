use serde::Serialize;

use super::cursor::Cursor;
use super::domain::DomainValidator;
use super::kinds::{BareDomain, SchemeUrl};

/// Sentence punctuation trimmed (once) from the tail of a raw match.
const TRAILING_PUNCTUATION: [char; 5] = ['.', ',', ';', '!', '?'];

/// A link detected within a single piece of text.
///
/// `from`/`to` are byte offsets relative to the scanned string; the
/// decoration layer shifts them to absolute document positions. `url` is
/// the resolved absolute URL: verbatim for scheme-prefixed matches,
/// scheme-synthesized for bare domains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSpan {
    pub from: usize,
    pub to: usize,
    pub url: String,
}

enum RawKind {
    Scheme,
    Bare { domain_end: usize },
}

struct RawMatch {
    start: usize,
    end: usize,
    kind: RawKind,
}

/// Lazy iterator over the links in a piece of text.
///
/// Candidates must begin at the start of the text, after whitespace, or
/// after an opening parenthesis; this keeps the scanner off the tails of
/// longer tokens such as the domain half of an email address. Matches are
/// found in a single left-to-right pass, so emitted spans never overlap and
/// arrive in `from` order.
pub struct LinkScanner<'a> {
    cur: Cursor<'a>,
    validator: &'a dyn DomainValidator,
}

/// Scans `text` for link-like substrings.
///
/// The returned iterator is lazy and finite; create a fresh one to rescan.
pub fn scan_links<'a>(text: &'a str, validator: &'a dyn DomainValidator) -> LinkScanner<'a> {
    LinkScanner {
        cur: Cursor::new(text),
        validator,
    }
}

impl Iterator for LinkScanner<'_> {
    type Item = LinkSpan;

    fn next(&mut self) -> Option<LinkSpan> {
        while !self.cur.eof() {
            if !at_candidate_start(&self.cur) {
                self.cur.bump_char();
                continue;
            }

            let raw = match try_match_scheme(&mut self.cur) {
                Some(raw) => raw,
                None => match try_match_bare(&mut self.cur) {
                    Some(raw) => raw,
                    None => {
                        self.cur.bump_char();
                        continue;
                    }
                },
            };

            // The cursor now sits at the raw end; scanning resumes there
            // whether or not this match survives validation and trimming.
            if let RawKind::Bare { domain_end } = raw.kind {
                let domain = &self.cur.s[raw.start..domain_end];
                if !self.validator.is_valid_domain(domain) {
                    continue;
                }
            }

            let Some(to) = trim_trailing(self.cur.s, raw.start, raw.end) else {
                continue;
            };

            let matched = &self.cur.s[raw.start..to];
            let url = match raw.kind {
                RawKind::Scheme => matched.to_string(),
                RawKind::Bare { .. } => {
                    format!("{}{}", BareDomain::SYNTHESIZED_SCHEME, matched)
                }
            };

            return Some(LinkSpan {
                from: raw.start,
                to,
                url,
            });
        }
        None
    }
}

/// A candidate may start at the beginning of the text, after whitespace, or
/// after `(`.
fn at_candidate_start(cur: &Cursor<'_>) -> bool {
    match cur.prev_char() {
        None => true,
        Some(c) => c.is_whitespace() || c == '(',
    }
}

/// Consumes non-whitespace chars, returning how many were consumed.
fn bump_non_whitespace(cur: &mut Cursor<'_>) -> usize {
    let mut n = 0;
    while let Some(c) = cur.peek_char() {
        if c.is_whitespace() {
            break;
        }
        cur.bump_char();
        n += 1;
    }
    n
}

/// Attempts to match `http://...` / `https://...` at the current position.
///
/// The prefix comparison ignores ASCII case. At least one non-whitespace
/// char must follow the prefix; on failure the cursor is restored.
fn try_match_scheme(cur: &mut Cursor<'_>) -> Option<RawMatch> {
    let prefix = if cur.starts_with_ignore_ascii_case(SchemeUrl::HTTPS) {
        SchemeUrl::HTTPS
    } else if cur.starts_with_ignore_ascii_case(SchemeUrl::HTTP) {
        SchemeUrl::HTTP
    } else {
        return None;
    };

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(prefix.len());

    if bump_non_whitespace(cur) == 0 {
        *cur = saved;
        return None;
    }

    Some(RawMatch {
        start,
        end: cur.pos(),
        kind: RawKind::Scheme,
    })
}

/// Attempts to match a bare domain (`example.com/path`) at the current
/// position.
///
/// Consumes a letter-led label, one or more dotted alphanumeric groups, and
/// any non-whitespace continuation. Returns the end of the dotted part so
/// the caller can validate it. On failure the cursor is restored.
fn try_match_bare(cur: &mut Cursor<'_>) -> Option<RawMatch> {
    if !cur.peek_char().is_some_and(BareDomain::is_label_start) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_char();
    while cur.peek_char().is_some_and(BareDomain::is_label_char) {
        cur.bump_char();
    }

    // At least one `.`-separated suffix group is required.
    let mut groups = 0;
    while cur.peek_char() == Some(BareDomain::DOT) {
        let dot = cur.clone();
        cur.bump_char(); // '.'
        let mut n = 0;
        while cur.peek_char().is_some_and(BareDomain::is_label_char) {
            cur.bump_char();
            n += 1;
        }
        if n == 0 {
            // Dangling dot is not part of the domain.
            *cur = dot;
            break;
        }
        groups += 1;
    }
    if groups == 0 {
        *cur = saved;
        return None;
    }
    let domain_end = cur.pos();

    // Anything non-whitespace after the domain rides along (path, query).
    bump_non_whitespace(cur);

    Some(RawMatch {
        start,
        end: cur.pos(),
        kind: RawKind::Bare { domain_end },
    })
}

/// Applies the tail-trimming rules to a raw match, returning the final `to`.
///
/// One trailing sentence-punctuation char is dropped, then one trailing `)`
/// when the match itself contains no `(` - a URL with its own parenthesis
/// keeps the closer. Returns `None` when trimming leaves nothing.
fn trim_trailing(text: &str, from: usize, raw_to: usize) -> Option<usize> {
    let mut to = raw_to;

    if let Some(c) = text[from..to].chars().next_back() {
        if TRAILING_PUNCTUATION.contains(&c) {
            to -= c.len_utf8();
        }
    }

    let matched = &text[from..to];
    if matched.ends_with(')') && !matched.contains('(') {
        to -= 1;
    }

    (to > from).then_some(to)
}

#[cfg(test)]
mod tests {
    use super::super::domain::HostnameValidator;
    use super::*;
    use rstest::rstest;

    fn scan(text: &str) -> Vec<LinkSpan> {
        scan_links(text, &HostnameValidator).collect()
    }

    fn span(from: usize, to: usize, url: &str) -> LinkSpan {
        LinkSpan {
            from,
            to,
            url: url.to_string(),
        }
    }

    #[test]
    fn bare_domain_is_detected_and_synthesized() {
        assert_eq!(
            scan("visit example.com now"),
            vec![span(6, 17, "https://example.com")]
        );
    }

    #[test]
    fn invalid_label_shape_produces_nothing() {
        assert_eq!(scan("see xn--1 now"), vec![]);
    }

    #[test]
    fn scheme_url_is_passed_through_verbatim() {
        assert_eq!(
            scan("go to http://foo.test/path now"),
            vec![span(6, 26, "http://foo.test/path")]
        );
    }

    #[rstest]
    #[case('.')]
    #[case(',')]
    #[case(';')]
    #[case('!')]
    #[case('?')]
    fn trailing_punctuation_is_stripped(#[case] punct: char) {
        let text = format!("check http://foo.test{punct}");
        assert_eq!(scan(&text), vec![span(6, 21, "http://foo.test")]);
    }

    #[test]
    fn only_one_trailing_punctuation_char_is_stripped() {
        assert_eq!(
            scan("wow example.com!!"),
            vec![span(4, 16, "https://example.com!")]
        );
    }

    #[test]
    fn paren_in_url_keeps_trailing_paren() {
        assert_eq!(
            scan("(http://foo.test/a(b))"),
            vec![span(1, 22, "http://foo.test/a(b))")]
        );
    }

    #[test]
    fn surrounding_parens_are_excluded() {
        assert_eq!(
            scan("(see http://foo.test)"),
            vec![span(5, 20, "http://foo.test")]
        );
        assert_eq!(
            scan("(example.com)"),
            vec![span(1, 12, "https://example.com")]
        );
    }

    #[test]
    fn punctuation_rule_runs_before_paren_rule() {
        // One pass each, punctuation first: "example.com.)" loses only the
        // paren because the final char check sees ')'.
        assert_eq!(
            scan("(see example.com.)"),
            vec![span(5, 17, "https://example.com.")]
        );
    }

    #[test]
    fn spans_are_ordered_and_disjoint() {
        let spans = scan("see example.com and http://foo.test, also bar.example.org.");
        assert_eq!(
            spans,
            vec![
                span(4, 15, "https://example.com"),
                span(20, 35, "http://foo.test"),
                span(42, 57, "https://bar.example.org"),
            ]
        );
        for pair in spans.windows(2) {
            assert!(pair[0].to <= pair[1].from);
        }
    }

    #[test]
    fn email_domains_are_not_matched() {
        assert_eq!(scan("mail me@example.com now"), vec![]);
    }

    #[test]
    fn glued_tokens_are_not_matched() {
        assert_eq!(scan("foohttp://x.test"), vec![]);
        assert_eq!(scan("see 0example.com"), vec![]);
    }

    #[test]
    fn scheme_without_body_is_not_a_link() {
        assert_eq!(scan("http:// nothing"), vec![]);
        assert_eq!(scan("https://"), vec![]);
    }

    #[test]
    fn scheme_matching_ignores_case() {
        assert_eq!(
            scan("HTTP://EXAMPLE.COM"),
            vec![span(0, 18, "HTTP://EXAMPLE.COM")]
        );
    }

    #[test]
    fn bare_domain_matching_ignores_case() {
        assert_eq!(
            scan("Example.com is fine"),
            vec![span(0, 11, "https://Example.com")]
        );
    }

    #[test]
    fn rejected_candidate_does_not_stop_the_scan() {
        // "foo.c" matches the bare structure but fails validation; the link
        // after it must still be found.
        assert_eq!(
            scan("see foo.c example.com"),
            vec![span(10, 21, "https://example.com")]
        );
    }

    #[test]
    fn newline_counts_as_a_boundary() {
        assert_eq!(
            scan("first line\nexample.com"),
            vec![span(11, 22, "https://example.com")]
        );
    }

    #[test]
    fn offsets_are_correct_after_multibyte_text() {
        let text = "πλ http://x.test 😀 example.com";
        let spans = scan(text);
        assert_eq!(
            spans,
            vec![
                span(5, 18, "http://x.test"),
                span(24, 35, "https://example.com"),
            ]
        );
        assert_eq!(&text[spans[0].from..spans[0].to], "http://x.test");
        assert_eq!(&text[spans[1].from..spans[1].to], "example.com");
    }

    #[test]
    fn bare_domain_keeps_its_continuation() {
        assert_eq!(
            scan("try example.com/path?q=1#frag ok"),
            vec![span(4, 29, "https://example.com/path?q=1#frag")]
        );
    }

    #[test]
    fn scanner_is_restartable() {
        let text = "a example.com b http://foo.test";
        let first = scan(text);
        let second = scan(text);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn scanner_is_lazy() {
        let mut scanner = scan_links("example.com and http://foo.test", &HostnameValidator);
        let first = scanner.next().unwrap();
        assert_eq!(first.url, "https://example.com");
        // Remaining input is still scannable from where we stopped.
        assert_eq!(scanner.next().unwrap().url, "http://foo.test");
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn empty_and_plain_text_produce_nothing() {
        assert_eq!(scan(""), vec![]);
        assert_eq!(scan("no links in here at all"), vec![]);
    }

    #[test]
    fn trim_guard_drops_degenerate_matches() {
        // Not reachable through the matchers (every raw match is longer than
        // the trimmed tail), but the guard must hold on its own.
        assert_eq!(trim_trailing(".", 0, 1), None);
        assert_eq!(trim_trailing("x.", 0, 2), Some(1));
    }
}
