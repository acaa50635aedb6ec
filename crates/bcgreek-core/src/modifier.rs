// Modifier flags and the modifier reader.
//
// A vowel (or the capital marker `*`) may be followed by modifier
// characters encoding breathings, accents, iota subscript, diaeresis and
// vowel length marks. Each category is one bit flag. An admissibility mask
// tracks which flags may still be read for the current token; the mask is
// narrowed after every accepted modifier, so no category is ever read twice
// and mutually exclusive marks never combine.

use std::io::{self, Read};
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// A set of diacritic/capitalization flags attached to one base letter.
///
/// Doubles as the admissibility mask during modifier reading: the same flag
/// space describes both "what has been read" and "what may still be read".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mods(u16);

impl Mods {
    /// The empty set.
    pub const NONE: Mods = Mods(0);

    /// Smooth breathing, written `)`.
    pub const SMOOTH: Mods = Mods(1);
    /// Rough breathing, written `(`.
    pub const ROUGH: Mods = Mods(1 << 1);
    /// Acute accent, written `/`.
    pub const ACUTE: Mods = Mods(1 << 2);
    /// Grave accent, written `\`.
    pub const GRAVE: Mods = Mods(1 << 3);
    /// Circumflex accent, written `=`.
    pub const CIRCUMFLEX: Mods = Mods(1 << 4);
    /// Iota subscript, written `|`.
    pub const IOTA_SUB: Mods = Mods(1 << 5);
    /// Diaeresis, written `+`.
    pub const DIAERESIS: Mods = Mods(1 << 6);
    /// Long vowel mark, written `&`.
    pub const MACRON: Mods = Mods(1 << 7);
    /// Short vowel mark, written `'`.
    pub const BREVE: Mods = Mods(1 << 8);
    /// Capital letter marker, set while processing a `*` token.
    pub const CAPITAL: Mods = Mods(1 << 9);

    /// Either breathing mark.
    pub const BREATHINGS: Mods = Mods(Self::SMOOTH.0 | Self::ROUGH.0);
    /// Any accent mark.
    pub const ACCENTS: Mods = Mods(Self::ACUTE.0 | Self::GRAVE.0 | Self::CIRCUMFLEX.0);
    /// Either vowel length mark.
    pub const LENGTHS: Mods = Mods(Self::MACRON.0 | Self::BREVE.0);

    /// All ten flags.
    pub const fn all() -> Mods {
        Mods(0x3FF)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag of `other` is set in `self`.
    pub const fn contains(self, other: Mods) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any flag of `other` is set in `self`.
    pub const fn intersects(self, other: Mods) -> bool {
        self.0 & other.0 != 0
    }

    /// Union, usable in const context.
    pub const fn union(self, other: Mods) -> Mods {
        Mods(self.0 | other.0)
    }

    /// The set with every flag of `other` cleared.
    pub const fn without(self, other: Mods) -> Mods {
        Mods(self.0 & !other.0)
    }
}

impl BitOr for Mods {
    type Output = Mods;
    fn bitor(self, rhs: Mods) -> Mods {
        self.union(rhs)
    }
}

impl BitOrAssign for Mods {
    fn bitor_assign(&mut self, rhs: Mods) {
        *self = self.union(rhs);
    }
}

impl BitAnd for Mods {
    type Output = Mods;
    fn bitand(self, rhs: Mods) -> Mods {
        Mods(self.0 & rhs.0)
    }
}

/// Map one input byte to its modifier flag, honoring the admissibility mask.
///
/// Returns the flag if the byte denotes a modifier that is still admissible
/// and `Mods::NONE` otherwise (for both inadmissible modifiers and bytes
/// that are not modifiers at all). On success the mask is narrowed by the
/// flag's mutual-exclusion group:
///
/// - a breathing excludes further breathings, lengths and diaeresis;
/// - an accent excludes further accents and lengths;
/// - iota subscript excludes itself, diaeresis and lengths;
/// - diaeresis excludes itself, iota subscript, lengths and breathings;
/// - a length mark excludes everything.
pub fn classify(byte: u8, admissible: &mut Mods) -> Mods {
    let (flag, excluded) = match byte {
        b')' => (
            Mods::SMOOTH,
            Mods::BREATHINGS.union(Mods::LENGTHS).union(Mods::DIAERESIS),
        ),
        b'(' => (
            Mods::ROUGH,
            Mods::BREATHINGS.union(Mods::LENGTHS).union(Mods::DIAERESIS),
        ),
        b'/' => (Mods::ACUTE, Mods::ACCENTS.union(Mods::LENGTHS)),
        b'\\' => (Mods::GRAVE, Mods::ACCENTS.union(Mods::LENGTHS)),
        b'=' => (Mods::CIRCUMFLEX, Mods::ACCENTS.union(Mods::LENGTHS)),
        b'|' => (
            Mods::IOTA_SUB,
            Mods::IOTA_SUB.union(Mods::DIAERESIS).union(Mods::LENGTHS),
        ),
        b'+' => (
            Mods::DIAERESIS,
            Mods::IOTA_SUB
                .union(Mods::DIAERESIS)
                .union(Mods::LENGTHS)
                .union(Mods::BREATHINGS),
        ),
        b'&' => (Mods::MACRON, Mods::all()),
        b'\'' => (Mods::BREVE, Mods::all()),
        _ => return Mods::NONE,
    };
    if admissible.contains(flag) {
        *admissible = admissible.without(excluded);
        flag
    } else {
        Mods::NONE
    }
}

/// Read modifier bytes from `src` while they classify as admissible,
/// OR-ing the accumulated flags.
///
/// Returns the accumulated set together with the first unconsumed byte
/// (`None` at end of stream). The rejected byte is never lost: the caller
/// must treat it as the next character to process.
pub fn read_mods<R: Read>(
    mut admissible: Mods,
    src: &mut io::Bytes<R>,
) -> io::Result<(Mods, Option<u8>)> {
    let mut mods = Mods::NONE;
    loop {
        let Some(byte) = src.next().transpose()? else {
            return Ok((mods, None));
        };
        let flag = classify(byte, &mut admissible);
        if flag.is_empty() {
            return Ok((mods, Some(byte)));
        }
        mods |= flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_all(admissible: Mods, input: &[u8]) -> (Mods, Option<u8>) {
        let mut src = input.bytes();
        read_mods(admissible, &mut src).expect("slice reads cannot fail")
    }

    #[test]
    fn classify_grants_admissible_flag() {
        let mut mask = Mods::all();
        assert_eq!(classify(b')', &mut mask), Mods::SMOOTH);
    }

    #[test]
    fn classify_rejects_second_breathing() {
        let mut mask = Mods::all();
        assert_eq!(classify(b')', &mut mask), Mods::SMOOTH);
        assert_eq!(classify(b'(', &mut mask), Mods::NONE);
        assert_eq!(classify(b')', &mut mask), Mods::NONE);
    }

    #[test]
    fn breathing_excludes_diaeresis_and_lengths() {
        let mut mask = Mods::all();
        classify(b'(', &mut mask);
        assert_eq!(classify(b'+', &mut mask), Mods::NONE);
        assert_eq!(classify(b'&', &mut mask), Mods::NONE);
        assert_eq!(classify(b'\'', &mut mask), Mods::NONE);
        // accents and iota subscript are still open
        assert_eq!(classify(b'/', &mut mask), Mods::ACUTE);
        assert_eq!(classify(b'|', &mut mask), Mods::IOTA_SUB);
    }

    #[test]
    fn diaeresis_excludes_breathings_and_iota() {
        let mut mask = Mods::all();
        classify(b'+', &mut mask);
        assert_eq!(classify(b')', &mut mask), Mods::NONE);
        assert_eq!(classify(b'|', &mut mask), Mods::NONE);
        assert_eq!(classify(b'/', &mut mask), Mods::ACUTE);
    }

    #[test]
    fn length_mark_excludes_everything() {
        let mut mask = Mods::all();
        assert_eq!(classify(b'&', &mut mask), Mods::MACRON);
        assert_eq!(mask, Mods::NONE);
    }

    #[test]
    fn classify_ignores_non_modifiers() {
        let mut mask = Mods::all();
        assert_eq!(classify(b'a', &mut mask), Mods::NONE);
        assert_eq!(classify(b'*', &mut mask), Mods::NONE);
        assert_eq!(mask, Mods::all());
    }

    #[test]
    fn read_mods_accumulates_and_returns_leftover() {
        let (mods, next) = read_all(Mods::all(), b")/a");
        assert_eq!(mods, Mods::SMOOTH | Mods::ACUTE);
        assert_eq!(next, Some(b'a'));
    }

    #[test]
    fn read_mods_at_end_of_stream() {
        let (mods, next) = read_all(Mods::all(), b"(=");
        assert_eq!(mods, Mods::ROUGH | Mods::CIRCUMFLEX);
        assert_eq!(next, None);
    }

    #[test]
    fn read_mods_stops_on_inadmissible_modifier() {
        // diaeresis not admissible: the byte stays for the caller
        let mask = Mods::BREATHINGS.union(Mods::ACCENTS);
        let (mods, next) = read_all(mask, b"+x");
        assert_eq!(mods, Mods::NONE);
        assert_eq!(next, Some(b'+'));
    }

    #[test]
    fn read_mods_never_consumes_a_category_twice() {
        let (mods, next) = read_all(Mods::all(), b"))a");
        assert_eq!(mods, Mods::SMOOTH);
        assert_eq!(next, Some(b')'));
    }

    #[test]
    fn read_mods_empty_input() {
        let (mods, next) = read_all(Mods::all(), b"");
        assert_eq!(mods, Mods::NONE);
        assert_eq!(next, None);
    }
}
