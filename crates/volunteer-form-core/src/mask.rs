//! Input masks
//!
//! Each mask keeps only ASCII digits, clamps them to the field's maximum and
//! inserts punctuation progressively, so a partially typed value is always
//! rendered as the longest valid prefix of the display pattern.

use serde::{Deserialize, Serialize};

/// Maximum digits in a CPF (national individual id)
pub const NATIONAL_ID_DIGITS: usize = 11;
/// Maximum digits in a phone number, area code included
pub const PHONE_DIGITS: usize = 11;
/// Maximum digits in a CEP (postal code)
pub const POSTAL_CODE_DIGITS: usize = 8;

/// The masked fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaskKind {
    /// CPF: `###.###.###-##`
    NationalId,
    /// Phone: `(##) #####-####` or `(##) ####-####`
    Phone,
    /// CEP: `#####-###`
    PostalCode,
}

impl MaskKind {
    pub const ALL: [MaskKind; 3] = [MaskKind::NationalId, MaskKind::Phone, MaskKind::PostalCode];

    /// Parse a mask kind from its JavaScript-facing name
    ///
    /// # Examples
    /// ```
    /// use volunteer_form_core::MaskKind;
    /// assert_eq!(MaskKind::parse("phone"), Some(MaskKind::Phone));
    /// assert_eq!(MaskKind::parse("zip"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "nationalId" => Some(MaskKind::NationalId),
            "phone" => Some(MaskKind::Phone),
            "postalCode" => Some(MaskKind::PostalCode),
            _ => None,
        }
    }

    pub fn max_digits(self) -> usize {
        match self {
            MaskKind::NationalId => NATIONAL_ID_DIGITS,
            MaskKind::Phone => PHONE_DIGITS,
            MaskKind::PostalCode => POSTAL_CODE_DIGITS,
        }
    }

    /// Display template of a complete value, `#` standing for a digit
    pub fn pattern(self) -> &'static str {
        match self {
            MaskKind::NationalId => "###.###.###-##",
            MaskKind::Phone => "(##) #####-####",
            MaskKind::PostalCode => "#####-###",
        }
    }

    pub fn apply(self, raw: &str) -> String {
        let masked = match self {
            MaskKind::NationalId => mask_national_id(raw),
            MaskKind::Phone => mask_phone(raw),
            MaskKind::PostalCode => mask_postal_code(raw),
        };
        tracing::debug!(kind = ?self, masked = %masked, "mask applied");
        masked
    }
}

/// Keeps only the ASCII digits of `raw`
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Recovers the digits behind a masked value
pub fn unmask(masked: &str) -> String {
    digits_only(masked)
}

fn clamped_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// CPF mask: `12345678901` becomes `123.456.789-01`
pub fn mask_national_id(raw: &str) -> String {
    let digits = clamped_digits(raw, NATIONAL_ID_DIGITS);
    let mut out = String::with_capacity(digits.len() + 3);

    for (i, digit) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(digit);
    }

    out
}

/// Phone mask: `11987654321` becomes `(11) 98765-4321`
///
/// The area code is wrapped once a third digit is typed; the hyphen moves so
/// that it always precedes the last four digits of the subscriber number.
pub fn mask_phone(raw: &str) -> String {
    let digits = clamped_digits(raw, PHONE_DIGITS);
    if digits.len() < 3 {
        return digits;
    }

    let (area, number) = digits.split_at(2);
    if number.len() < 5 {
        return format!("({}) {}", area, number);
    }

    let (head, tail) = number.split_at(number.len() - 4);
    format!("({}) {}-{}", area, head, tail)
}

/// CEP mask: `12345678` becomes `12345-678`
pub fn mask_postal_code(raw: &str) -> String {
    let digits = clamped_digits(raw, POSTAL_CODE_DIGITS);
    if digits.len() <= 5 {
        return digits;
    }

    let (head, tail) = digits.split_at(5);
    format!("{}-{}", head, tail)
}
