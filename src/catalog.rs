//! Interval catalog: named musical intervals and equal-temperament
//! frequency math.
//!
//! The catalog is the static mapping from interval names (e.g. "Minor 3rd")
//! to semitone offsets, plus the frequency formula used to turn a root pitch
//! and an interval name into a target pitch.

use std::fmt;

/// A named musical interval with its size in semitones.
///
/// Several names may share an offset: "Tritone", "Augmented 4th", and
/// "Diminished 5th" all resolve to 6 semitones. Lookup is one-directional
/// (name to offset); reverse lookup is not unique and not offered.
///
/// # Examples
///
/// ```
/// use eartrain::catalog::Interval;
///
/// let octave = Interval { name: "Octave", semitones: 12 };
/// assert_eq!(octave.frequency_from(261.63), 523.26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Display name of the interval
    pub name: &'static str,

    /// Size in semitones above the root (0 = unison)
    pub semitones: u8,
}

impl Interval {
    /// Returns the frequency of this interval above the given root, in Hz.
    ///
    /// Uses the equal-temperament formula: `root * 2^(semitones / 12)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::catalog::Interval;
    ///
    /// let fifth = Interval { name: "Perfect 5th", semitones: 7 };
    /// let hz = fifth.frequency_from(261.63); // C4 root
    /// assert!((hz - 392.00).abs() < 0.01);   // G4
    /// ```
    pub fn frequency_from(&self, root_hz: f64) -> f64 {
        root_hz * 2.0_f64.powf(self.semitones as f64 / 12.0)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Error returned by the strict lookup variants when an interval name is
/// not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInterval {
    /// The name that failed to resolve
    pub name: String,
}

impl fmt::Display for UnknownInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown interval name: '{}'", self.name)
    }
}

impl std::error::Error for UnknownInterval {}

/// The thirteen guessable intervals, in display order.
const GUESSABLE: &[Interval] = &[
    Interval { name: "Unison", semitones: 0 },
    Interval { name: "Minor 2nd", semitones: 1 },
    Interval { name: "Major 2nd", semitones: 2 },
    Interval { name: "Minor 3rd", semitones: 3 },
    Interval { name: "Major 3rd", semitones: 4 },
    Interval { name: "Perfect 4th", semitones: 5 },
    Interval { name: "Tritone", semitones: 6 },
    Interval { name: "Perfect 5th", semitones: 7 },
    Interval { name: "Minor 6th", semitones: 8 },
    Interval { name: "Major 6th", semitones: 9 },
    Interval { name: "Minor 7th", semitones: 10 },
    Interval { name: "Major 7th", semitones: 11 },
    Interval { name: "Octave", semitones: 12 },
];

/// Alternate names that resolve in lookup but are not offered as guesses.
const ALIASES: &[Interval] = &[
    Interval { name: "Augmented 4th", semitones: 6 },
    Interval { name: "Diminished 5th", semitones: 6 },
];

/// The static name-to-semitones mapping and frequency math.
///
/// `frequency_for` is deliberately total: an unknown name falls back to the
/// root frequency instead of failing. This keeps playback paths free of
/// error handling at the cost of masking typos, so a strict variant
/// (`try_frequency_for`) is available for validation paths.
///
/// # Examples
///
/// ```
/// use eartrain::IntervalCatalog;
///
/// let catalog = IntervalCatalog::standard();
///
/// // Known name: equal-temperament frequency
/// let hz = catalog.frequency_for(261.63, "Octave");
/// assert!((hz - 523.26).abs() < 0.01);
///
/// // Unknown name: the root comes back unchanged
/// assert_eq!(catalog.frequency_for(261.63, "Major 9th"), 261.63);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntervalCatalog {
    guessable: &'static [Interval],
    aliases: &'static [Interval],
}

impl IntervalCatalog {
    /// Returns the standard catalog: thirteen guessable intervals from
    /// Unison through Octave, plus the two tritone aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    /// assert_eq!(catalog.guessable().len(), 13);
    /// assert_eq!(catalog.semitones("Augmented 4th"), Some(6));
    /// ```
    pub fn standard() -> Self {
        Self {
            guessable: GUESSABLE,
            aliases: ALIASES,
        }
    }

    /// Looks up the semitone offset for an interval name.
    ///
    /// The match is exact and case-sensitive. Returns `None` for names not
    /// in the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    /// assert_eq!(catalog.semitones("Perfect 5th"), Some(7));
    /// assert_eq!(catalog.semitones("perfect 5th"), None);
    /// ```
    pub fn semitones(&self, name: &str) -> Option<u8> {
        self.interval(name).map(|i| i.semitones)
    }

    /// Looks up a catalog entry by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    /// let third = catalog.interval("Major 3rd").unwrap();
    /// assert_eq!(third.semitones, 4);
    /// assert!(catalog.interval("Major 9th").is_none());
    /// ```
    pub fn interval(&self, name: &str) -> Option<Interval> {
        self.guessable
            .iter()
            .chain(self.aliases.iter())
            .find(|i| i.name == name)
            .copied()
    }

    /// Returns true if the name is in the catalog (guessable or alias).
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    /// assert!(catalog.contains("Tritone"));
    /// assert!(catalog.contains("Diminished 5th"));
    /// assert!(!catalog.contains("Major 10th"));
    /// ```
    pub fn contains(&self, name: &str) -> bool {
        self.interval(name).is_some()
    }

    /// Returns the target frequency for an interval above the given root.
    ///
    /// Known names use the equal-temperament formula
    /// `root * 2^(semitones / 12)`. Unknown names return `root_hz`
    /// unchanged: the lenient fallback, not an error. This function is
    /// pure and total.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    ///
    /// let fifth = catalog.frequency_for(261.63, "Perfect 5th");
    /// assert!((fifth - 392.00).abs() < 0.01);
    ///
    /// // Unison and unknown names both come back as the root, but for
    /// // different reasons
    /// assert_eq!(catalog.frequency_for(440.0, "Unison"), 440.0);
    /// assert_eq!(catalog.frequency_for(440.0, "Quintuple 13th"), 440.0);
    /// ```
    pub fn frequency_for(&self, root_hz: f64, name: &str) -> f64 {
        match self.interval(name) {
            Some(interval) => interval.frequency_from(root_hz),
            None => root_hz,
        }
    }

    /// Strict variant of [`frequency_for`](Self::frequency_for): unknown
    /// names return an error instead of the root frequency.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    /// assert!(catalog.try_frequency_for(261.63, "Octave").is_ok());
    ///
    /// let err = catalog.try_frequency_for(261.63, "Octav").unwrap_err();
    /// assert_eq!(err.name, "Octav");
    /// ```
    pub fn try_frequency_for(&self, root_hz: f64, name: &str) -> Result<f64, UnknownInterval> {
        self.interval(name)
            .map(|interval| interval.frequency_from(root_hz))
            .ok_or_else(|| UnknownInterval {
                name: name.to_string(),
            })
    }

    /// Returns the guessable intervals in display order.
    ///
    /// These thirteen names seed the default enabled set and are the ones a
    /// presentation layer should offer as guess options. Aliases resolve in
    /// lookup but are not listed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use eartrain::IntervalCatalog;
    ///
    /// let catalog = IntervalCatalog::standard();
    /// let names: Vec<&str> = catalog.guessable().iter().map(|i| i.name).collect();
    /// assert_eq!(names.first(), Some(&"Unison"));
    /// assert_eq!(names.last(), Some(&"Octave"));
    /// ```
    pub fn guessable(&self) -> &'static [Interval] {
        self.guessable
    }

    /// Iterates over every entry in the catalog, guessable names first,
    /// then aliases.
    pub fn iter(&self) -> impl Iterator<Item = &'static Interval> {
        self.guessable.iter().chain(self.aliases.iter())
    }
}

impl Default for IntervalCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
