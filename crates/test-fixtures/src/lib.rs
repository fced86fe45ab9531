//! Shared (original, redacted) document pairs for integration tests across
//! the workspace.
//!
//! Each fixture is a small Polish document and its independently produced
//! redaction. The pairs are chosen to exercise specific recovery paths:
//! adjacent placeholders, close neighbors, repeated anchor context, both
//! bracket styles.

/// One original document and its redacted counterpart.
#[derive(Debug, Clone, Copy)]
pub struct DocumentPair {
    pub original: &'static str,
    pub redacted: &'static str,
}

/// A complaint letter with the full spread of category classes: adjacent
/// `[name] [surname]` (ambiguous for the aligner, partially recoverable by
/// context), a close-neighbor phone/pesel pair, a repeated pesel literal,
/// and values with trailing punctuation.
pub fn complaint_letter() -> DocumentPair {
    DocumentPair {
        original: "Szanowni Państwo,\n\nnazywam się Jan Kowalski i mieszkam w Krakowie przy ul. Krakowskiej 12.\nMój PESEL to 90010112345, a adres e-mail to jan.kowalski@example.com.\nProszę o kontakt pod numerem 601 202 303.\nPowtarzam: 90010112345.\n\nZ poważaniem,\nJan Kowalski\n",
        redacted: "Szanowni Państwo,\n\nnazywam się [name] [surname] i mieszkam w [city] przy ul. [address].\nMój PESEL to [pesel], a adres e-mail to [email].\nProszę o kontakt pod numerem [phone].\nPowtarzam: [pesel].\n\nZ poważaniem,\n[name] [surname]\n",
    }
}

/// The same e-mail address twice, with identical anchor context, but only the
/// first occurrence redacted. Exercises the first-occurrence-only context
/// search and value-based span fan-out.
pub fn duplicated_email() -> DocumentPair {
    DocumentPair {
        original: "adres e-mail do kontaktu to jan@firma.pl\nadres e-mail do kontaktu to jan@firma.pl",
        redacted: "adres e-mail do kontaktu to [email]\nadres e-mail do kontaktu to jan@firma.pl",
    }
}

/// Two sentences sharing a 30-character anchor verbatim, with different
/// values; only the second is redacted. First-in-document matching
/// misattributes the first value, nearest-position matching recovers the
/// second.
pub fn vehicle_registry() -> DocumentPair {
    DocumentPair {
        original: "Numer rejestracyjny pojazdu to KR111, dziękuję bardzo. Numer rejestracyjny pojazdu to KR222, dziękuję bardzo.",
        redacted: "Numer rejestracyjny pojazdu to KR111, dziękuję bardzo. Numer rejestracyjny pojazdu to [document-number], dziękuję bardzo.",
    }
}

/// Curly bracket style end to end.
pub fn curly_phone_note() -> DocumentPair {
    DocumentPair {
        original: "Telefon: 555 123 456, proszę dzwonić.",
        redacted: "Telefon: {phone}, proszę dzwonić.",
    }
}

/// Minimal separated-placeholder scenario: every placeholder is isolated by
/// literal tokens, so both strategies can recover every value.
pub fn separated_note() -> DocumentPair {
    DocumentPair {
        original: "Jan mieszka w Krakowie.",
        redacted: "[name] mieszka w [city].",
    }
}

/// Adjacent placeholders with a delimiter in the trailing context:
/// `[name] ([age] lat)`.
pub fn parenthesized_age() -> DocumentPair {
    DocumentPair {
        original: "Dane pacjenta: Piotr (44 lat), przyjęty wczoraj.",
        redacted: "Dane pacjenta: [name] ([age] lat), przyjęty wczoraj.",
    }
}
