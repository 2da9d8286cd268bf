//! Identifier management using string interning
//!
//! Hole and pin identifiers such as `main-12-c` or `digital-P13-L` are
//! compared on every pointer event, so they are interned once and handled as
//! the small `Copy` type [`Id`].

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned identifier type
///
/// # Examples
///
/// ```
/// use pinboard_core::identifier::Id;
///
/// let hole = Id::new("main-1-a");
/// assert_eq!(hole, "main-1-a");
/// assert_eq!(hole, Id::new("main-1-a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the interned identifier if `name` was interned before.
    ///
    /// Used to look up user-supplied identifiers without growing the
    /// interner with names that no board produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::identifier::Id;
    ///
    /// let known = Id::new("pwr-left-neg-1-1");
    /// assert_eq!(Id::lookup("pwr-left-neg-1-1"), Some(known));
    /// assert_eq!(Id::lookup("never-interned-hole"), None);
    /// ```
    pub fn lookup(name: &str) -> Option<Self> {
        interner().get(name).map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "main-1-a"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
