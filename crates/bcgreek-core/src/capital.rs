// Capital-letter legality rules.
//
// A `*` token accumulates modifiers before its base letter, so the letter
// arrives with the full modifier set already read. Whether that exact
// combination denotes a real precomposed Greek capital depends on the
// letter; the rules here must accept a combination before any table lookup
// happens, because the tables only enumerate the legal part of the space.

use crate::modifier::Mods;
use crate::tables;
use crate::variant;

/// Modifiers that never combine with anything else on a capital alpha, eta
/// or omega.
const NO_COMBINING: Mods = Mods::DIAERESIS.union(Mods::LENGTHS);

/// Resolve a capital-marker token.
///
/// `letter` is the byte that terminated the modifier read and `mods` the
/// accumulated set, which always contains [`Mods::CAPITAL`]. Returns the
/// precomposed glyph, or `None` when the combination does not denote a real
/// Greek letter; the caller then falls back to literal output. Total over
/// every reachable modifier set.
pub fn capital_variant(letter: u8, mods: Mods) -> Option<&'static str> {
    if mods == Mods::CAPITAL {
        return bare_capital(letter);
    }
    match letter.to_ascii_lowercase() {
        b'a' => {
            if long_vowel_combo(mods)
                || mods == Mods::CAPITAL | Mods::MACRON
                || mods == Mods::CAPITAL | Mods::BREVE
            {
                variant::alpha_variant(mods)
            } else {
                None
            }
        }
        b'h' => {
            if long_vowel_combo(mods) {
                variant::eta_omega_variant(mods, &tables::ETA)
            } else {
                None
            }
        }
        b'w' => {
            if long_vowel_combo(mods) {
                variant::eta_omega_variant(mods, &tables::OMEGA)
            } else {
                None
            }
        }
        b'i' => {
            let legal = !mods.intersects(NO_COMBINING)
                || mods == Mods::CAPITAL | Mods::DIAERESIS
                || mods == Mods::CAPITAL | Mods::MACRON
                || mods == Mods::CAPITAL | Mods::BREVE;
            if legal && !mods.contains(Mods::IOTA_SUB) {
                variant::iota_upsilon_variant(mods, &tables::IOTA)
            } else {
                None
            }
        }
        b'u' => {
            // capital upsilon takes breathing-plus-accent forms only with
            // rough breathing; otherwise a single bare mark
            let legal = mods.contains(Mods::ROUGH)
                || mods == Mods::CAPITAL | Mods::ACUTE
                || mods == Mods::CAPITAL | Mods::GRAVE
                || mods == Mods::CAPITAL | Mods::DIAERESIS
                || mods == Mods::CAPITAL | Mods::MACRON
                || mods == Mods::CAPITAL | Mods::BREVE;
            if legal && !mods.contains(Mods::IOTA_SUB) {
                variant::iota_upsilon_variant(mods, &tables::UPSILON)
            } else {
                None
            }
        }
        b'e' => short_vowel(mods, &tables::EPSILON),
        b'o' => short_vowel(mods, &tables::OMICRON),
        b'r' => {
            if mods == Mods::CAPITAL | Mods::ROUGH {
                Some("Ῥ")
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Shared rule for capital alpha, eta and omega: no diaeresis or length in
/// combination, no bare circumflex (no precomposed capital exists) and no
/// accent on top of iota subscript.
fn long_vowel_combo(mods: Mods) -> bool {
    !mods.intersects(NO_COMBINING)
        && mods != Mods::CAPITAL | Mods::CIRCUMFLEX
        && mods != Mods::CAPITAL | Mods::IOTA_SUB | Mods::ACUTE
        && mods != Mods::CAPITAL | Mods::IOTA_SUB | Mods::GRAVE
        && mods != Mods::CAPITAL | Mods::IOTA_SUB | Mods::CIRCUMFLEX
}

/// Capital epsilon/omicron: breathings and acute/grave only.
fn short_vowel(mods: Mods, table: &'static tables::GlyphTable) -> Option<&'static str> {
    if mods.intersects(Mods::IOTA_SUB | Mods::DIAERESIS | Mods::LENGTHS | Mods::CIRCUMFLEX) {
        None
    } else {
        variant::epsilon_omicron_variant(mods, table)
    }
}

/// The fixed capital alphabet for a bare `*letter` token, either case.
fn bare_capital(letter: u8) -> Option<&'static str> {
    let glyph = match letter.to_ascii_lowercase() {
        b'a' => "Α",
        b'b' => "Β",
        b'c' => "Ξ",
        b'd' => "Δ",
        b'e' => "Ε",
        b'f' => "Φ",
        b'g' => "Γ",
        b'h' => "Η",
        b'i' => "Ι",
        b'k' => "Κ",
        b'l' => "Λ",
        b'm' => "Μ",
        b'n' => "Ν",
        b'o' => "Ο",
        b'p' => "Π",
        b'q' => "Θ",
        b'r' => "Ρ",
        b's' => "Σ",
        b't' => "Τ",
        b'u' => "Υ",
        b'v' => "Ϝ",
        b'w' => "Ω",
        b'x' => "Χ",
        b'y' => "Ψ",
        b'z' => "Ζ",
        _ => return None,
    };
    Some(glyph)
}
