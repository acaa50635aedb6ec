// The dispatch loop: a single pass over the input, one token at a time.
//
// Each dispatch step receives the current byte, may consume a bounded
// amount of lookahead, writes the resolved glyph (or the original bytes)
// and returns the next byte still to be processed. Lookahead that turned
// out not to belong to the current token is handed back this way instead of
// being re-read from the stream, so no byte is ever dropped or duplicated.

use std::io::{self, Read, Write};

use crate::capital::capital_variant;
use crate::modifier::{self, Mods};
use crate::tables;
use crate::variant;

/// Run-time configuration for a conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Emit final sigma for `s` unless a Latin letter follows.
    pub final_sigma: bool,
}

/// Beta code to polytonic Greek converter.
///
/// Conversion is total: malformed or unsupported sequences degrade to
/// literal passthrough, never to an error. Only I/O errors from the
/// underlying streams propagate.
pub struct Converter {
    options: Options,
}

impl Converter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Convert the whole input stream, writing UTF-8 Greek to `output`.
    ///
    /// Bytes that are not beta code pass through unchanged, so UTF-8
    /// already present in the input survives byte for byte.
    pub fn convert<R: Read, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        let mut src = input.bytes();
        let mut current = next_byte(&mut src)?;
        while let Some(byte) = current {
            current = self.dispatch(byte, &mut src, &mut output)?;
        }
        output.flush()
    }

    /// Convert an in-memory string.
    pub fn convert_str(&self, input: &str) -> String {
        let mut out = Vec::with_capacity(input.len() * 2);
        self.convert(input.as_bytes(), &mut out)
            .expect("in-memory streams do not fail");
        // the input is valid UTF-8 and every emitted glyph is too
        String::from_utf8(out).expect("converter output is valid UTF-8")
    }

    /// Process one token starting at `byte`; returns the next unconsumed
    /// byte (`None` at end of stream).
    fn dispatch<R: Read, W: Write>(
        &self,
        byte: u8,
        src: &mut io::Bytes<R>,
        out: &mut W,
    ) -> io::Result<Option<u8>> {
        match byte.to_ascii_lowercase() {
            b'b' => emit_and_advance("β", src, out),
            b'c' => emit_and_advance("ξ", src, out),
            b'd' => emit_and_advance("δ", src, out),
            b'f' => emit_and_advance("φ", src, out),
            b'g' => emit_and_advance("γ", src, out),
            b'j' => emit_and_advance("ς", src, out),
            b'k' => emit_and_advance("κ", src, out),
            b'l' => emit_and_advance("λ", src, out),
            b'm' => emit_and_advance("μ", src, out),
            b'n' => emit_and_advance("ν", src, out),
            b'p' => emit_and_advance("π", src, out),
            b'q' => emit_and_advance("θ", src, out),
            b't' => emit_and_advance("τ", src, out),
            b'v' => emit_and_advance("ϝ", src, out),
            b'x' => emit_and_advance("χ", src, out),
            b'y' => emit_and_advance("ψ", src, out),
            b'z' => emit_and_advance("ζ", src, out),
            b'\'' => emit_and_advance("'", src, out),
            b':' => emit_and_advance("·", src, out),
            b'a' => vowel(tables::ALPHA_ADMISSIBLE, variant::alpha_variant, src, out),
            b'h' => vowel(
                tables::ETA_OMEGA_ADMISSIBLE,
                |m| variant::eta_omega_variant(m, &tables::ETA),
                src,
                out,
            ),
            b'w' => vowel(
                tables::ETA_OMEGA_ADMISSIBLE,
                |m| variant::eta_omega_variant(m, &tables::OMEGA),
                src,
                out,
            ),
            b'i' => vowel(
                tables::IOTA_UPSILON_ADMISSIBLE,
                |m| variant::iota_upsilon_variant(m, &tables::IOTA),
                src,
                out,
            ),
            b'u' => vowel(
                tables::IOTA_UPSILON_ADMISSIBLE,
                |m| variant::iota_upsilon_variant(m, &tables::UPSILON),
                src,
                out,
            ),
            b'e' => vowel(
                tables::EPSILON_OMICRON_ADMISSIBLE,
                |m| variant::epsilon_omicron_variant(m, &tables::EPSILON),
                src,
                out,
            ),
            b'o' => vowel(
                tables::EPSILON_OMICRON_ADMISSIBLE,
                |m| variant::epsilon_omicron_variant(m, &tables::OMICRON),
                src,
                out,
            ),
            b'r' => rho(src, out),
            b's' => self.sigma(src, out),
            b'*' => capital(src, out),
            _ => {
                out.write_all(&[byte])?;
                next_byte(src)
            }
        }
    }

    /// Sigma has no modifiers but may take the word-final form: with the
    /// option on, the final glyph is chosen unless a Latin letter follows.
    fn sigma<R: Read, W: Write>(
        &self,
        src: &mut io::Bytes<R>,
        out: &mut W,
    ) -> io::Result<Option<u8>> {
        if self.options.final_sigma {
            let next = next_byte(src)?;
            let glyph = match next {
                Some(b) if b.is_ascii_alphabetic() => "σ",
                _ => "ς",
            };
            out.write_all(glyph.as_bytes())?;
            Ok(next)
        } else {
            emit_and_advance("σ", src, out)
        }
    }
}

/// Pull one byte from the stream.
fn next_byte<R: Read>(src: &mut io::Bytes<R>) -> io::Result<Option<u8>> {
    src.next().transpose()
}

fn emit_and_advance<R: Read, W: Write>(
    glyph: &str,
    src: &mut io::Bytes<R>,
    out: &mut W,
) -> io::Result<Option<u8>> {
    out.write_all(glyph.as_bytes())?;
    next_byte(src)
}

/// A vowel token: read the admissible modifiers, resolve, emit.
fn vowel<R: Read, W: Write>(
    admissible: Mods,
    resolve: impl Fn(Mods) -> Option<&'static str>,
    src: &mut io::Bytes<R>,
    out: &mut W,
) -> io::Result<Option<u8>> {
    let (mods, next) = modifier::read_mods(admissible, src)?;
    if let Some(glyph) = resolve(mods) {
        out.write_all(glyph.as_bytes())?;
    }
    Ok(next)
}

/// Rho only distinguishes the two breathing forms; any other lookahead byte
/// belongs to the next token.
fn rho<R: Read, W: Write>(src: &mut io::Bytes<R>, out: &mut W) -> io::Result<Option<u8>> {
    match next_byte(src)? {
        Some(b'(') => emit_and_advance("ῥ", src, out),
        Some(b')') => emit_and_advance("ῤ", src, out),
        other => {
            out.write_all("ρ".as_bytes())?;
            Ok(other)
        }
    }
}

/// A `*` token: buffer the marker and its modifiers, then let the legality
/// rules decide. On rejection the buffered bytes are replayed verbatim and
/// the terminating byte is processed as the next token.
fn capital<R: Read, W: Write>(src: &mut io::Bytes<R>, out: &mut W) -> io::Result<Option<u8>> {
    // mask narrowing admits at most three modifiers per token, so the
    // marker plus its modifiers always fit
    let mut buf = [0u8; 4];
    buf[0] = b'*';
    let mut len = 1;

    let mut admissible = Mods::all();
    let mut mods = Mods::CAPITAL;

    let terminator = loop {
        let Some(byte) = next_byte(src)? else {
            break None;
        };
        let flag = modifier::classify(byte, &mut admissible);
        if flag.is_empty() {
            break Some(byte);
        }
        mods |= flag;
        buf[len] = byte;
        len += 1;
    };

    match terminator.and_then(|letter| capital_variant(letter, mods)) {
        Some(glyph) => emit_and_advance(glyph, src, out),
        None => {
            out.write_all(&buf[..len])?;
            Ok(terminator)
        }
    }
}
