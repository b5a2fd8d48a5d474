//! Contact field extraction from raw OCR text.
//!
//! Business cards have no reliable layout, so this is a heuristic: ordered
//! regex pattern lists with first-match-wins resolution. Pattern order
//! encodes a priority among formats; overlapping patterns deliberately
//! shadow one another.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ExtractedContact;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w\.-]+@[\w\.-]+\.\w+").unwrap());

/// Phone patterns in priority order: optionally prefixed NANP number,
/// bare separated digit groups, parenthesized area code.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\+?1?[-.\s]?\(?(\d{3})\)?[-.\s]?(\d{3})[-.\s]?(\d{4})").unwrap(),
        Regex::new(r"\d{3}[-.\s]\d{3}[-.\s]\d{4}").unwrap(),
        Regex::new(r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}").unwrap(),
    ]
});

/// Website patterns in priority order: full URL, bare www form, bare
/// domain restricted to a TLD allow-list.
static WEBSITE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)https?://[\w\.-]+\.\w+[^\s]*").unwrap(),
        Regex::new(r"(?i)www\.[\w\.-]+\.\w+").unwrap(),
        Regex::new(r"(?i)[\w-]+\.(?:com|org|net|io|co|ai|dev|app|tech|biz)[^\s,]*").unwrap(),
    ]
});

static PHONE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3}.*\d{3}.*\d{4}").unwrap());
static WWW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)www\.").unwrap());
static URL_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://").unwrap());

/// Lines starting with these words are labels or company suffixes, not
/// person names.
const NAME_STOP_WORDS: &[&str] = &[
    "inc", "llc", "ltd", "corp", "company", "address", "phone", "email", "fax", "tel", "mobile",
];

/// Parse raw OCR text into structured contact fields.
///
/// Never fails; fields with no match come back as empty strings. Pure and
/// deterministic, so safe to call concurrently from any handler.
pub fn extract_contact(raw_text: &str) -> ExtractedContact {
    let email = EMAIL_RE
        .find(raw_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let phone = first_match(&PHONE_RES, raw_text);
    let website = first_match(&WEBSITE_RES, raw_text);
    let name = extract_name(raw_text);

    ExtractedContact {
        name,
        email,
        phone,
        website,
    }
}

/// Return the full match of the first pattern (in list order) that matches
/// anywhere in the text.
///
/// Matches are trimmed: the optional separator at the head of the phone
/// patterns can swallow the whitespace before the number, and that
/// whitespace is not part of the field value.
fn first_match(patterns: &[Regex], text: &str) -> String {
    patterns
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// The name is usually the first substantial line that isn't contact info.
fn extract_name(raw_text: &str) -> String {
    for line in raw_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Skip lines that look like contact info
        if trimmed.contains('@')
            || PHONE_SHAPE_RE.is_match(trimmed)
            || WWW_RE.is_match(trimmed)
            || URL_PREFIX_RE.is_match(trimmed)
        {
            continue;
        }

        // Skip very short or very long lines
        let len = trimmed.chars().count();
        if len < 3 || len > 50 {
            continue;
        }

        // Skip lines with too many digits (addresses, dates)
        let digit_count = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
        if digit_count > 3 {
            continue;
        }

        let lower = trimmed.to_lowercase();
        if NAME_STOP_WORDS.iter().any(|word| lower.starts_with(word)) {
            continue;
        }

        return trimmed.to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "John Smith\nCEO, Acme Inc\njohn@acme.com\n(555) 123-4567\nwww.acme.com";

    #[test]
    fn full_card_extracts_all_fields() {
        let contact = extract_contact(CARD);
        assert_eq!(contact.name, "John Smith");
        assert_eq!(contact.email, "john@acme.com");
        assert_eq!(contact.phone, "(555) 123-4567");
        assert_eq!(contact.website, "www.acme.com");
    }

    #[test]
    fn empty_input_returns_all_empty_fields() {
        let contact = extract_contact("");
        assert_eq!(contact.name, "");
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.website, "");
    }

    #[test]
    fn single_line_without_newlines_does_not_panic() {
        let contact = extract_contact("Jane Doe jane@corp.io 555-123-4567");
        assert_eq!(contact.email, "jane@corp.io");
        assert_eq!(contact.phone, "555-123-4567");
    }

    #[test]
    fn first_email_wins_by_scan_order() {
        let contact = extract_contact("reach alice@first.com or bob@second.com");
        assert_eq!(contact.email, "alice@first.com");
    }

    #[test]
    fn first_email_wins_on_same_line() {
        // Scan order, not line order
        let contact = extract_contact("b@z.com a@y.com\nfirst line");
        assert_eq!(contact.email, "b@z.com");
    }

    #[test]
    fn phone_with_country_code_matches_first_pattern() {
        let contact = extract_contact("call +1 (212) 555-0147 today");
        assert_eq!(contact.phone, "+1 (212) 555-0147");
    }

    #[test]
    fn bare_hyphenated_phone_matches() {
        let contact = extract_contact("dial 415.555.2671 now");
        assert_eq!(contact.phone, "415.555.2671");
    }

    #[test]
    fn first_phone_wins() {
        let contact = extract_contact("212-555-0100 or 646-555-0200");
        assert_eq!(contact.phone, "212-555-0100");
    }

    #[test]
    fn phone_on_its_own_line_has_no_leading_whitespace() {
        // The optional separator at the head of the first pattern can
        // consume the preceding newline; the field value must not keep it
        let contact = extract_contact("Acme Inc\n(555) 123-4567");
        assert_eq!(contact.phone, "(555) 123-4567");

        let contact = extract_contact("call  555-123-4567");
        assert_eq!(contact.phone, "555-123-4567");
    }

    #[test]
    fn full_url_preferred_over_bare_domain() {
        let contact = extract_contact("acme.com https://acme.com/contact");
        assert_eq!(contact.website, "https://acme.com/contact");
    }

    #[test]
    fn www_form_recognized() {
        let contact = extract_contact("visit www.example.org for more");
        assert_eq!(contact.website, "www.example.org");
    }

    #[test]
    fn bare_domain_recognized_only_for_allowed_tlds() {
        assert_eq!(extract_contact("example.io").website, "example.io");
        assert_eq!(extract_contact("example.xyz").website, "");
    }

    #[test]
    fn bare_domain_excludes_trailing_comma() {
        let contact = extract_contact("see acme.dev, for details");
        assert_eq!(contact.website, "acme.dev");
    }

    #[test]
    fn name_skips_stop_word_prefixes_case_insensitively() {
        let contact = extract_contact("LLC Solutions\nMaria Garcia");
        assert_eq!(contact.name, "Maria Garcia");
    }

    #[test]
    fn name_skips_lines_with_four_or_more_digits() {
        let contact = extract_contact("Suite 1234\nAlan Turing");
        assert_eq!(contact.name, "Alan Turing");
    }

    #[test]
    fn name_accepts_lines_with_up_to_three_digits() {
        let contact = extract_contact("Bond 007");
        assert_eq!(contact.name, "Bond 007");
    }

    #[test]
    fn name_skips_emails_phones_and_urls() {
        let text = "john@acme.com\n555-123-4567\nwww.acme.com\nhttps://acme.com\nJohn Smith";
        assert_eq!(extract_contact(text).name, "John Smith");
    }

    #[test]
    fn name_skips_too_short_and_too_long_lines() {
        let long = "x".repeat(51);
        let text = format!("Jo\n{long}\nJohn Smith");
        assert_eq!(extract_contact(&text).name, "John Smith");
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert_eq!(extract_contact("Ada").name, "Ada");
        let exactly_fifty = "a".repeat(50);
        assert_eq!(extract_contact(&exactly_fifty).name, exactly_fifty);
    }

    #[test]
    fn name_empty_when_no_line_qualifies() {
        let contact = extract_contact("john@acme.com\n555-123-4567");
        assert_eq!(contact.name, "");
    }

    #[test]
    fn blank_lines_are_ignored_for_name() {
        let contact = extract_contact("\n   \n\nGrace Hopper\n");
        assert_eq!(contact.name, "Grace Hopper");
    }

    #[test]
    fn extraction_is_idempotent() {
        let a = extract_contact(CARD);
        let b = extract_contact(CARD);
        assert_eq!(a, b);
    }

    #[test]
    fn inc_prefix_rejected_but_embedded_inc_allowed() {
        // Stop words are prefix checks only
        assert_eq!(extract_contact("Inc Magazine Office").name, "");
        assert_eq!(
            extract_contact("Vincent Adultman").name,
            "Vincent Adultman"
        );
    }
}
