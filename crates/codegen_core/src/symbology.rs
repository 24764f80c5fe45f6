//! Linear barcode symbologies
//!
//! Resolves symbology names to encoders from the `barcoders` crate and turns a
//! payload into a module sequence (`1` = bar, `0` = space). Some names are
//! aliases that only prepare the payload differently (UPC-A, ISBN, ISSN are
//! all EAN-13 underneath, GS1-128 is Code 128 led by FNC1, PZN is Code 39).

use std::fmt;
use std::str::FromStr;

use barcoders::sym::{
    codabar::Codabar, code11::Code11, code128::Code128, code39::Code39, code93::Code93,
    ean13::EAN13, ean8::EAN8, tf::TF,
};

use crate::errors::GenerationError;

#[cfg(test)]
#[path = "symbology_tests.rs"]
mod tests;

/// Code 128 character set B selector understood by `barcoders`.
const CODE128_SET_B: char = 'Ɓ';

/// Code 128 character set C selector understood by `barcoders`.
const CODE128_SET_C: char = 'Ć';

/// Code 128 FNC1 marker understood by `barcoders`.
const CODE128_FNC1: char = 'Ź';

/// Codabar start and stop characters.
const CODABAR_GUARDS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A supported linear barcode symbology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    #[default]
    Code128,
    Gs1_128,
    Code39,
    Pzn,
    Code93,
    Code11,
    Ean13,
    Jan,
    Ean8,
    UpcA,
    Isbn13,
    Isbn10,
    Issn,
    Itf,
    Codabar,
}

impl Symbology {
    /// All supported symbologies, in the order they are listed to clients.
    pub const ALL: [Symbology; 15] = [
        Symbology::Code128,
        Symbology::Gs1_128,
        Symbology::Code39,
        Symbology::Pzn,
        Symbology::Code93,
        Symbology::Code11,
        Symbology::Ean13,
        Symbology::Jan,
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::Isbn13,
        Symbology::Isbn10,
        Symbology::Issn,
        Symbology::Itf,
        Symbology::Codabar,
    ];

    /// Canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::Code128 => "code128",
            Symbology::Gs1_128 => "gs1_128",
            Symbology::Code39 => "code39",
            Symbology::Pzn => "pzn",
            Symbology::Code93 => "code93",
            Symbology::Code11 => "code11",
            Symbology::Ean13 => "ean13",
            Symbology::Jan => "jan",
            Symbology::Ean8 => "ean8",
            Symbology::UpcA => "upca",
            Symbology::Isbn13 => "isbn13",
            Symbology::Isbn10 => "isbn10",
            Symbology::Issn => "issn",
            Symbology::Itf => "itf",
            Symbology::Codabar => "codabar",
        }
    }

    /// Resolve a symbology from its name or one of its aliases (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, GenerationError> {
        let symbology = match name.trim().to_ascii_lowercase().as_str() {
            "code128" => Symbology::Code128,
            "gs1_128" | "gs1-128" | "gs1" => Symbology::Gs1_128,
            "code39" => Symbology::Code39,
            "pzn" | "pzn7" => Symbology::Pzn,
            "code93" => Symbology::Code93,
            "code11" => Symbology::Code11,
            "ean13" | "ean" | "gtin" | "ean13-guard" => Symbology::Ean13,
            "jan" => Symbology::Jan,
            "ean8" | "ean8-guard" => Symbology::Ean8,
            "upca" | "upc" => Symbology::UpcA,
            "isbn13" | "isbn" => Symbology::Isbn13,
            "isbn10" => Symbology::Isbn10,
            "issn" => Symbology::Issn,
            "itf" => Symbology::Itf,
            "codabar" | "nw-7" => Symbology::Codabar,
            _ => {
                return Err(GenerationError::UnknownSymbology {
                    name: name.to_string(),
                })
            }
        };
        Ok(symbology)
    }

    /// Encode `data` into a module sequence where `1` is a bar and `0` a space.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidPayload`] when the payload is rejected
    /// by the symbology (wrong length, bad check digit, disallowed characters).
    pub fn encode(&self, data: &str) -> Result<Vec<u8>, GenerationError> {
        let invalid = |e: barcoders::error::Error| GenerationError::invalid_payload(self.name(), e);

        let modules = match self {
            Symbology::Code128 | Symbology::Gs1_128 => {
                Code128::new(self.code128_payload(data)?)
                    .map_err(invalid)?
                    .encode()
            }
            Symbology::Code39 => Code39::new(data).map_err(invalid)?.encode(),
            Symbology::Pzn => Code39::new(self.pzn_payload(data)?)
                .map_err(invalid)?
                .encode(),
            Symbology::Code93 => Code93::new(data).map_err(invalid)?.encode(),
            Symbology::Code11 => Code11::new(data).map_err(invalid)?.encode(),
            Symbology::Ean8 => EAN8::new(data).map_err(invalid)?.encode(),
            Symbology::Itf => TF::interleaved(data).map_err(invalid)?.encode(),
            Symbology::Codabar => Codabar::new(self.codabar_payload(data)?)
                .map_err(invalid)?
                .encode(),
            Symbology::Ean13
            | Symbology::Jan
            | Symbology::UpcA
            | Symbology::Isbn13
            | Symbology::Isbn10
            | Symbology::Issn => {
                let digits = self.ean13_payload(data)?;
                EAN13::new(digits).map_err(invalid)?.encode()
            }
        };

        Ok(modules)
    }

    /// Rewrite a payload for the symbologies that are carried by EAN-13.
    fn ean13_payload(&self, data: &str) -> Result<String, GenerationError> {
        let stripped: String = data.chars().filter(|c| *c != '-').collect();

        match self {
            Symbology::Jan => {
                if !(stripped.starts_with("45") || stripped.starts_with("49")) {
                    return Err(GenerationError::invalid_payload(
                        self.name(),
                        "JAN codes must start with 45 or 49",
                    ));
                }
                Ok(stripped)
            }
            Symbology::UpcA => Ok(format!("0{}", stripped)),
            Symbology::Isbn13 => {
                if !(stripped.starts_with("978") || stripped.starts_with("979")) {
                    return Err(GenerationError::invalid_payload(
                        self.name(),
                        "ISBN-13 codes must start with 978 or 979",
                    ));
                }
                Ok(stripped)
            }
            Symbology::Isbn10 => {
                let body = leading_digits(self.name(), &stripped, 9)?;
                Ok(format!("978{}", body))
            }
            Symbology::Issn => {
                let body = leading_digits(self.name(), &stripped, 7)?;
                Ok(format!("977{}00", body))
            }
            _ => Ok(data.to_string()),
        }
    }

    /// Prefix a payload with the Code 128 character set that can carry it.
    ///
    /// Set C packs digit pairs and is only usable for even-length digit runs;
    /// everything else goes through set B. GS1-128 adds FNC1 after the
    /// selector. Non-ASCII input is rejected because `barcoders` reads some
    /// of those characters as set switches and function codes.
    fn code128_payload(&self, data: &str) -> Result<String, GenerationError> {
        if let Some(c) = data.chars().find(|c| !c.is_ascii()) {
            return Err(GenerationError::invalid_payload(
                self.name(),
                format!("character '{}' cannot be encoded", c),
            ));
        }

        let all_digits = !data.is_empty() && data.chars().all(|c| c.is_ascii_digit());
        let set = if all_digits && data.len() % 2 == 0 {
            CODE128_SET_C
        } else {
            CODE128_SET_B
        };

        let mut payload = String::with_capacity(data.len() + 4);
        payload.push(set);
        if *self == Symbology::Gs1_128 {
            payload.push(CODE128_FNC1);
        }
        payload.push_str(data);
        Ok(payload)
    }

    /// Build `PZN-` + six digits + the modulo 11 check digit.
    ///
    /// Numbers whose check digit would be 10 are not valid PZNs.
    fn pzn_payload(&self, data: &str) -> Result<String, GenerationError> {
        let stripped: String = data
            .trim_start_matches("PZN")
            .chars()
            .filter(|c| *c != '-')
            .collect();
        let body = leading_digits(self.name(), &stripped, 6)?;

        let sum: u32 = body
            .chars()
            .filter_map(|c| c.to_digit(10))
            .zip(2..)
            .map(|(digit, weight)| digit * weight)
            .sum();
        let check = sum % 11;
        if check == 10 {
            return Err(GenerationError::invalid_payload(
                self.name(),
                format!("{} has check digit 10 and is not a valid PZN", body),
            ));
        }

        Ok(format!("PZN-{}{}", body, check))
    }

    /// Codabar symbols are framed by one of A-D at each end and nowhere else.
    fn codabar_payload<'a>(&self, data: &'a str) -> Result<&'a str, GenerationError> {
        let guard = |c: &char| CODABAR_GUARDS.contains(c);
        let chars: Vec<char> = data.chars().collect();

        let framed = match chars.as_slice() {
            [first, inner @ .., last] => guard(first) && guard(last) && !inner.iter().any(guard),
            _ => false,
        };

        if !framed {
            return Err(GenerationError::invalid_payload(
                self.name(),
                "data must start and end with one of A, B, C or D",
            ));
        }

        Ok(data)
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbology {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Take the first `count` characters of `data`, which must all be digits.
fn leading_digits<'a>(
    symbology: &str,
    data: &'a str,
    count: usize,
) -> Result<&'a str, GenerationError> {
    let body = data.get(..count).ok_or_else(|| {
        GenerationError::invalid_payload(
            symbology,
            format!("at least {} digits are required", count),
        )
    })?;

    if !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(GenerationError::invalid_payload(
            symbology,
            format!("the first {} characters must be digits", count),
        ));
    }

    Ok(body)
}
