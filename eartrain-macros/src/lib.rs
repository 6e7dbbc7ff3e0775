use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates an `Interval` at compile time from a string literal.
///
/// This macro validates the interval name at compile time and generates
/// the corresponding `Interval` literal with its semitone offset already
/// resolved. A misspelled name becomes a compile error instead of the
/// runtime root-frequency fallback.
///
/// # Format
///
/// Any name from the standard catalog, matched case-insensitively and
/// expanded to its canonical spelling: "Unison", "Minor 2nd", "Major 2nd",
/// "Minor 3rd", "Major 3rd", "Perfect 4th", "Tritone", "Augmented 4th",
/// "Diminished 5th", "Perfect 5th", "Minor 6th", "Major 6th", "Minor 7th",
/// "Major 7th", "Octave".
///
/// # Examples
///
/// ```ignore
/// use eartrain::interval;
///
/// let third = interval!("Minor 3rd");
/// assert_eq!(third.semitones, 3);
///
/// // Aliases resolve to the same offset as the canonical name
/// let tritone = interval!("Augmented 4th");
/// assert_eq!(tritone.semitones, 6);
/// ```
#[proc_macro]
pub fn interval(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name_str = input.value();

    // Resolve the interval name at compile time
    match lookup_interval(&name_str) {
        Ok((canonical, semitones)) => {
            let expanded = quote! {
                {
                    eartrain::catalog::Interval {
                        name: #canonical,
                        semitones: #semitones,
                    }
                }
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid interval name '{}': {}", name_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

/// The interval table, kept in lockstep with the library's catalog.
const INTERVALS: &[(&str, u8)] = &[
    ("Unison", 0),
    ("Minor 2nd", 1),
    ("Major 2nd", 2),
    ("Minor 3rd", 3),
    ("Major 3rd", 4),
    ("Perfect 4th", 5),
    ("Tritone", 6),
    ("Augmented 4th", 6),
    ("Diminished 5th", 6),
    ("Perfect 5th", 7),
    ("Minor 6th", 8),
    ("Major 6th", 9),
    ("Minor 7th", 10),
    ("Major 7th", 11),
    ("Octave", 12),
];

fn lookup_interval(s: &str) -> Result<(&'static str, u8), String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let wanted = s.to_lowercase();
    INTERVALS
        .iter()
        .find(|(name, _)| name.to_lowercase() == wanted)
        .map(|&(name, semitones)| (name, semitones))
        .ok_or_else(|| format!("unknown interval '{}'", s))
}
