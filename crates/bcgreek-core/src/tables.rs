// Precomposed glyph tables, one per vowel family.
//
// Each table packs the lowercase half followed by the capital half and is
// indexed by the dense slot number computed in `variant`. `None` marks a
// slot whose modifier combination is syntactically reachable but has no
// precomposed Unicode character, or a reserved slot in the accent stride
// (the accent component skips index 3).
//
// Row layout within a half:
// - alpha, eta, omega: rows of three (bare, smooth, rough) per accent
//   (none, acute, grave, reserved, circumflex), first without then with
//   iota subscript; alpha additionally ends its halves with macron and
//   breve slots.
// - iota, upsilon: rows of five (bare, acute, grave, reserved, circumflex)
//   per breathing row (none, smooth, rough, diaeresis), then macron and
//   breve slots.
// - epsilon, omicron: rows of three (bare, smooth, rough) per accent
//   (none, acute, grave).
//
// A few capital-half slots hold lowercase glyphs (e.g. the bare circumflex
// rows): Unicode has no precomposed capital there and the legality rules in
// `capital` only let the lookup reach them where the lowercase form is the
// accepted rendering.

use crate::modifier::Mods;

/// A family's glyph table. `None` slots have no precomposed character.
pub type GlyphTable = [Option<&'static str>];

/// Modifiers a lowercase alpha may take: everything except diaeresis.
pub const ALPHA_ADMISSIBLE: Mods = Mods::BREATHINGS
    .union(Mods::ACCENTS)
    .union(Mods::IOTA_SUB)
    .union(Mods::LENGTHS);

/// Modifiers a lowercase eta or omega may take: no diaeresis, no lengths.
pub const ETA_OMEGA_ADMISSIBLE: Mods =
    Mods::BREATHINGS.union(Mods::ACCENTS).union(Mods::IOTA_SUB);

/// Modifiers a lowercase iota or upsilon may take: everything except iota
/// subscript.
pub const IOTA_UPSILON_ADMISSIBLE: Mods = Mods::BREATHINGS
    .union(Mods::ACCENTS)
    .union(Mods::DIAERESIS)
    .union(Mods::LENGTHS);

/// Modifiers a lowercase epsilon or omicron may take. The short vowels
/// never carry circumflex, iota subscript, diaeresis or length marks.
pub const EPSILON_OMICRON_ADMISSIBLE: Mods =
    Mods::BREATHINGS.union(Mods::ACUTE).union(Mods::GRAVE);

pub static ALPHA: [Option<&'static str>; 64] = [
    // lowercase
    Some("α"), Some("ἀ"), Some("ἁ"),
    Some("ά"), Some("ἄ"), Some("ἅ"),
    Some("ὰ"), Some("ἂ"), Some("ἃ"),
    None, None, None,
    Some("ᾶ"), Some("ἆ"), Some("ἇ"),
    // lowercase with iota subscript
    Some("ᾳ"), Some("ᾀ"), Some("ᾁ"),
    Some("ᾴ"), Some("ᾄ"), Some("ᾅ"),
    Some("ᾲ"), Some("ᾂ"), Some("ᾃ"),
    None, None, None,
    Some("ᾷ"), Some("ᾆ"), Some("ᾇ"),
    Some("ᾱ"), Some("ᾰ"),
    // capital
    Some("Α"), Some("Ἀ"), Some("Ἁ"),
    Some("Ά"), Some("Ἄ"), Some("Ἅ"),
    Some("Ὰ"), Some("Ἂ"), Some("Ἃ"),
    None, None, None,
    Some("ᾶ"), Some("Ἆ"), Some("Ἇ"),
    // capital with iota subscript
    Some("ᾼ"), Some("ᾈ"), Some("ᾉ"),
    Some("ᾴ"), Some("ᾌ"), Some("ᾍ"),
    Some("ᾲ"), Some("ᾊ"), Some("ᾋ"),
    None, None, None,
    Some("ᾷ"), Some("ᾎ"), Some("ᾏ"),
    Some("Ᾱ"), Some("Ᾰ"),
];

pub static ETA: [Option<&'static str>; 60] = [
    // lowercase
    Some("η"), Some("ἠ"), Some("ἡ"),
    Some("ή"), Some("ἤ"), Some("ἥ"),
    Some("ὴ"), Some("ἢ"), Some("ἣ"),
    None, None, None,
    Some("ῆ"), Some("ἦ"), Some("ἧ"),
    // lowercase with iota subscript
    Some("ῃ"), Some("ᾐ"), Some("ᾑ"),
    Some("ῄ"), Some("ᾔ"), Some("ᾕ"),
    Some("ῂ"), Some("ᾒ"), Some("ᾓ"),
    None, None, None,
    Some("ῇ"), Some("ᾖ"), Some("ᾗ"),
    // capital
    Some("Η"), Some("Ἠ"), Some("Ἡ"),
    Some("Ή"), Some("Ἤ"), Some("Ἥ"),
    Some("Ὴ"), Some("Ἢ"), Some("Ἣ"),
    None, None, None,
    Some("ῆ"), Some("Ἦ"), Some("Ἧ"),
    // capital with iota subscript
    Some("ῌ"), Some("ᾘ"), Some("ᾙ"),
    Some("ῄ"), Some("ᾜ"), Some("ᾝ"),
    Some("ῂ"), Some("ᾚ"), Some("ᾛ"),
    None, None, None,
    Some("ῇ"), Some("ᾞ"), Some("ᾟ"),
];

pub static OMEGA: [Option<&'static str>; 60] = [
    // lowercase
    Some("ω"), Some("ὠ"), Some("ὡ"),
    Some("ώ"), Some("ὤ"), Some("ὥ"),
    Some("ὼ"), Some("ὢ"), Some("ὣ"),
    None, None, None,
    Some("ῶ"), Some("ὦ"), Some("ὧ"),
    // lowercase with iota subscript
    Some("ῳ"), Some("ᾠ"), Some("ᾡ"),
    Some("ῴ"), Some("ᾤ"), Some("ᾥ"),
    Some("ῲ"), Some("ᾢ"), Some("ᾣ"),
    None, None, None,
    Some("ῷ"), Some("ᾦ"), Some("ᾧ"),
    // capital
    Some("Ω"), Some("Ὠ"), Some("Ὡ"),
    Some("Ώ"), Some("Ὤ"), Some("Ὥ"),
    Some("Ὼ"), Some("Ὢ"), Some("Ὣ"),
    None, None, None,
    Some("ῶ"), Some("Ὦ"), Some("Ὧ"),
    // capital with iota subscript
    Some("ῼ"), Some("ᾨ"), Some("ᾩ"),
    Some("ῴ"), Some("ᾬ"), Some("ᾭ"),
    Some("ῲ"), Some("ᾪ"), Some("ᾫ"),
    None, None, None,
    Some("ῷ"), Some("ᾮ"), Some("ᾯ"),
];

pub static IOTA: [Option<&'static str>; 44] = [
    // lowercase
    Some("ι"), Some("ί"), Some("ὶ"), None, Some("ῖ"),
    Some("ἰ"), Some("ἴ"), Some("ἲ"), None, Some("ἶ"),
    Some("ἱ"), Some("ἵ"), Some("ἳ"), None, Some("ἷ"),
    Some("ϊ"), Some("ΐ"), Some("ῒ"), None, Some("ῗ"),
    Some("ῑ"), Some("ῐ"),
    // capital
    Some("Ι"), Some("Ί"), Some("Ὶ"), None, Some("ῖ"),
    Some("Ἰ"), Some("Ἴ"), Some("Ἲ"), None, Some("Ἶ"),
    Some("Ἱ"), Some("Ἵ"), Some("Ἳ"), None, Some("Ἷ"),
    Some("Ϊ"), None, None, None, None,
    Some("Ῑ"), Some("Ῐ"),
];

pub static UPSILON: [Option<&'static str>; 44] = [
    // lowercase
    Some("υ"), Some("ύ"), Some("ὺ"), None, Some("ῦ"),
    Some("ὐ"), Some("ὔ"), Some("ὒ"), None, Some("ὖ"),
    Some("ὑ"), Some("ὕ"), Some("ὓ"), None, Some("ὗ"),
    Some("ϋ"), Some("ΰ"), Some("ῢ"), None, Some("ῧ"),
    Some("ῡ"), Some("ῠ"),
    // capital (no precomposed smooth-breathing forms exist)
    Some("Υ"), Some("Ύ"), Some("Ὺ"), None, Some("ῦ"),
    None, None, None, None, None,
    Some("Ὑ"), Some("Ὕ"), Some("Ὓ"), None, Some("Ὗ"),
    Some("Ϋ"), None, None, None, None,
    Some("Ῡ"), Some("Ῠ"),
];

pub static EPSILON: [Option<&'static str>; 18] = [
    Some("ε"), Some("ἐ"), Some("ἑ"),
    Some("έ"), Some("ἔ"), Some("ἕ"),
    Some("ὲ"), Some("ἒ"), Some("ἓ"),
    Some("Ε"), Some("Ἐ"), Some("Ἑ"),
    Some("Έ"), Some("Ἔ"), Some("Ἕ"),
    Some("Ὲ"), Some("Ἒ"), Some("Ἓ"),
];

pub static OMICRON: [Option<&'static str>; 18] = [
    Some("ο"), Some("ὀ"), Some("ὁ"),
    Some("ό"), Some("ὄ"), Some("ὅ"),
    Some("ὸ"), Some("ὂ"), Some("ὃ"),
    Some("Ο"), Some("Ὀ"), Some("Ὁ"),
    Some("Ό"), Some("Ὄ"), Some("Ὅ"),
    Some("Ὸ"), Some("Ὂ"), Some("Ὃ"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(ALPHA.len(), 64);
        assert_eq!(ETA.len(), 60);
        assert_eq!(OMEGA.len(), 60);
        assert_eq!(IOTA.len(), 44);
        assert_eq!(UPSILON.len(), 44);
        assert_eq!(EPSILON.len(), 18);
        assert_eq!(OMICRON.len(), 18);
    }

    #[test]
    fn reserved_accent_rows_are_empty() {
        for table in [&ALPHA[..], &ETA[..], &OMEGA[..]] {
            for half in 0..2 {
                let base = half * (table.len() / 2);
                for iota in [0, 15] {
                    assert!(table[base + iota + 9..base + iota + 12]
                        .iter()
                        .all(Option::is_none));
                }
            }
        }
    }

    #[test]
    fn capital_halves_start_with_the_bare_capital() {
        assert_eq!(ALPHA[32], Some("Α"));
        assert_eq!(ETA[30], Some("Η"));
        assert_eq!(OMEGA[30], Some("Ω"));
        assert_eq!(IOTA[22], Some("Ι"));
        assert_eq!(UPSILON[22], Some("Υ"));
        assert_eq!(EPSILON[9], Some("Ε"));
        assert_eq!(OMICRON[9], Some("Ο"));
    }

    #[test]
    fn capital_omega_iota_subscript_block_is_aligned() {
        // The whole capital iota-subscript block, slot by slot.
        assert_eq!(OMEGA[45], Some("ῼ"));
        assert_eq!(OMEGA[46], Some("ᾨ"));
        assert_eq!(OMEGA[47], Some("ᾩ"));
        assert_eq!(OMEGA[49], Some("ᾬ"));
        assert_eq!(OMEGA[50], Some("ᾭ"));
        assert_eq!(OMEGA[52], Some("ᾪ"));
        assert_eq!(OMEGA[53], Some("ᾫ"));
        assert_eq!(OMEGA[57], Some("ῷ"));
        assert_eq!(OMEGA[58], Some("ᾮ"));
        assert_eq!(OMEGA[59], Some("ᾯ"));
    }

    #[test]
    fn length_slots_close_the_alpha_halves() {
        assert_eq!(ALPHA[30], Some("ᾱ"));
        assert_eq!(ALPHA[31], Some("ᾰ"));
        assert_eq!(ALPHA[62], Some("Ᾱ"));
        assert_eq!(ALPHA[63], Some("Ᾰ"));
    }
}
