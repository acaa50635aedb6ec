// Slot computation for the glyph tables.
//
// Every resolver decomposes the modifier set into its independent
// components (breathing, accent, iota subscript or diaeresis, length,
// capital) and builds the table slot from explicit strides. Component
// indices are bounded, so the slot is in range for every possible `Mods`
// value and the lookups cannot panic; flags a family never takes (for
// example a length mark reaching the eta resolver) simply do not
// contribute to the slot.

use crate::modifier::Mods;
use crate::tables::{self, GlyphTable};

/// Breathing component: 0 bare, 1 smooth, 2 rough.
fn breathing_index(mods: Mods) -> usize {
    if mods.contains(Mods::SMOOTH) {
        1
    } else if mods.contains(Mods::ROUGH) {
        2
    } else {
        0
    }
}

/// Accent component: 0 bare, 1 acute, 2 grave, 4 circumflex.
///
/// The gap at 3 mirrors the reserved rows in the tables.
fn accent_index(mods: Mods) -> usize {
    if mods.contains(Mods::ACUTE) {
        1
    } else if mods.contains(Mods::GRAVE) {
        2
    } else if mods.contains(Mods::CIRCUMFLEX) {
        4
    } else {
        0
    }
}

/// Alpha family: rows of three by accent, iota-subscript block at 15,
/// macron and breve in the last two slots of each half, capital half at 32.
pub fn alpha_variant(mods: Mods) -> Option<&'static str> {
    let half = if mods.contains(Mods::MACRON) {
        30
    } else if mods.contains(Mods::BREVE) {
        31
    } else {
        let iota = if mods.contains(Mods::IOTA_SUB) { 15 } else { 0 };
        breathing_index(mods) + 3 * accent_index(mods) + iota
    };
    let capital = if mods.contains(Mods::CAPITAL) { 32 } else { 0 };
    tables::ALPHA[half + capital]
}

/// Eta/omega family: like alpha but without length slots; capital half at
/// 30.
pub fn eta_omega_variant(mods: Mods, table: &'static GlyphTable) -> Option<&'static str> {
    let iota = if mods.contains(Mods::IOTA_SUB) { 15 } else { 0 };
    let half = breathing_index(mods) + 3 * accent_index(mods) + iota;
    let capital = if mods.contains(Mods::CAPITAL) { 30 } else { 0 };
    table[half + capital]
}

/// Iota/upsilon family: accent within a five-wide row, rows by breathing
/// with diaeresis as row 3, macron and breve in the last two slots of each
/// half, capital half at 22.
pub fn iota_upsilon_variant(mods: Mods, table: &'static GlyphTable) -> Option<&'static str> {
    let half = if mods.contains(Mods::MACRON) {
        20
    } else if mods.contains(Mods::BREVE) {
        21
    } else {
        let row = if mods.contains(Mods::DIAERESIS) {
            3
        } else {
            breathing_index(mods)
        };
        accent_index(mods) + 5 * row
    };
    let capital = if mods.contains(Mods::CAPITAL) { 22 } else { 0 };
    table[half + capital]
}

/// Epsilon/omicron family: rows of three by accent (acute and grave only),
/// capital half at 9.
pub fn epsilon_omicron_variant(mods: Mods, table: &'static GlyphTable) -> Option<&'static str> {
    let accent = if mods.contains(Mods::ACUTE) {
        1
    } else if mods.contains(Mods::GRAVE) {
        2
    } else {
        0
    };
    let capital = if mods.contains(Mods::CAPITAL) { 9 } else { 0 };
    table[breathing_index(mods) + 3 * accent + capital]
}
