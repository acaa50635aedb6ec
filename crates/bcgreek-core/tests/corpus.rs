//! Corpus tests: whole passages of real beta code against their known
//! polytonic renderings, plus determinism and passthrough checks.

use bcgreek_core::{Converter, Options};

fn convert(input: &str) -> String {
    Converter::new(Options::default()).convert_str(input)
}

fn convert_final_sigma(input: &str) -> String {
    Converter::new(Options { final_sigma: true }).convert_str(input)
}

#[test]
fn iliad_opening() {
    assert_eq!(
        convert_final_sigma("mh=nin a)/eide qea\\ *phlhi+a/dew *)axilh=os"),
        "μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος"
    );
}

#[test]
fn iliad_second_line() {
    assert_eq!(
        convert_final_sigma("ou)lome/nhn, h(\\ muri/' *)axaioi=s a)/lge' e)/qhke"),
        "οὐλομένην, ἣ μυρί' Ἀχαιοῖς ἄλγε' ἔθηκε"
    );
}

#[test]
fn john_opening_with_final_sigma() {
    assert_eq!(
        convert_final_sigma("*)en a)rxh=| h)=n o( lo/gos, kai\\ o( lo/gos h)=n pro\\s to\\n qeo/n"),
        "Ἐν ἀρχῇ ἦν ὁ λόγος, καὶ ὁ λόγος ἦν πρὸς τὸν θεόν"
    );
}

#[test]
fn capitals_and_punctuation() {
    assert_eq!(
        convert_final_sigma("*(h *(ella/s: h( patri/s."),
        "Ἡ Ἑλλάς· ἡ πατρίς."
    );
    // without the option every sigma stays medial
    assert_eq!(convert("patri/s."), "πατρίσ.");
}

#[test]
fn invalid_sequences_survive_conversion() {
    assert_eq!(convert("*=h abc *&w"), "*=η αβξ *&ω");
    assert_eq!(convert("e= o| u|"), "ε= ο| υ|");
}

#[test]
fn conversion_is_deterministic() {
    let corpus = "mh=nin a)/eide qea\\ *phlhi+a/dew *)axilh=os\n\
                  ou)lome/nhn, h(\\ muri/' *)axaioi=s a)/lge' e)/qhke\n\
                  *=h invalid *)/w mixed with plain ASCII and 123\n";
    let first = convert(corpus);
    for _ in 0..3 {
        assert_eq!(convert(corpus), first);
    }
}

#[test]
fn stream_and_string_conversion_agree() {
    let corpus = "a)/nqrwpos me/tron a(pa/ntwn";
    let converter = Converter::new(Options::default());
    let mut out = Vec::new();
    converter
        .convert(corpus.as_bytes(), &mut out)
        .expect("in-memory streams do not fail");
    assert_eq!(String::from_utf8(out).unwrap(), converter.convert_str(corpus));
}
