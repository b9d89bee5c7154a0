//! Character sanitization for the target rendering surface.
//!
//! The downstream renderer only handles Latin-1 plus a small set of named
//! character references reliably. [`sanitize`] rewrites everything else:
//! first a fixed symbol table, then a numeric-character-reference fallback
//! for any remaining code point above 0xFF outside the safe ranges.

/// Literal symbol replacements, consulted before the code-point fallback.
///
/// Each entry maps one source character to a plain-ASCII equivalent or a
/// named character reference. The table is exhaustive by intent; characters
/// not listed here fall through to the range rules in [`sanitize`].
const REPLACEMENTS: &[(char, &str)] = &[
    // Directional arrows
    ('\u{2190}', "<-"),
    ('\u{2192}', "->"),
    ('\u{2194}', "<->"),
    ('\u{21D0}', "<="),
    ('\u{21D2}', "=>"),
    // Math operators
    ('\u{2212}', "-"),
    ('\u{00D7}', "&times;"),
    ('\u{00F7}', "&divide;"),
    ('\u{00B1}', "&plusmn;"),
    ('\u{2264}', "&le;"),
    ('\u{2265}', "&ge;"),
    ('\u{2260}', "&ne;"),
    ('\u{2248}', "&asymp;"),
    ('\u{221E}', "&infin;"),
    // Currency signs
    ('\u{20AC}', "&euro;"),
    ('\u{00A3}', "&pound;"),
    ('\u{00A5}', "&yen;"),
    ('\u{00A2}', "&cent;"),
    // Typographic quotes
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', ","),
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    // Ellipsis and en-dash
    ('\u{2026}', "..."),
    ('\u{2013}', "&ndash;"),
    // Greek letters
    ('\u{03B1}', "&alpha;"),
    ('\u{03B2}', "&beta;"),
    ('\u{03B3}', "&gamma;"),
    ('\u{03B4}', "&delta;"),
    ('\u{0394}', "&Delta;"),
    ('\u{03B8}', "&theta;"),
    ('\u{03BB}', "&lambda;"),
    ('\u{03C0}', "&pi;"),
    ('\u{03C3}', "&sigma;"),
    ('\u{03A3}', "&Sigma;"),
    ('\u{03C9}', "&omega;"),
    ('\u{03A9}', "&Omega;"),
    // Degree, micro, vulgar fractions
    ('\u{00B0}', "&deg;"),
    ('\u{00B5}', "&micro;"),
    ('\u{00BC}', "&frac14;"),
    ('\u{00BD}', "&frac12;"),
    ('\u{00BE}', "&frac34;"),
];

/// Code-point ranges that pass through the fallback untouched.
/// Latin Extended-A, Latin Extended-B, and the hyphen/dash cluster the
/// renderer's fonts are known to carry.
const SAFE_RANGES: &[(u32, u32)] = &[
    (0x0100, 0x017F),
    (0x0180, 0x024F),
    (0x2010, 0x2012),
];

fn is_safe_codepoint(cp: u32) -> bool {
    SAFE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Rewrites `text` so every character is representable on the rendering
/// surface. Pure; semantic content is preserved.
pub fn sanitize(text: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(&(_, replacement)) = REPLACEMENTS.iter().find(|&&(c, _)| c == ch) {
            out.push_str(replacement);
            continue;
        }
        let cp = ch as u32;
        if cp > 0xFF && !is_safe_codepoint(cp) {
            // Writing into a String cannot fail.
            let _ = write!(out, "&#{cp};");
        } else {
            out.push(ch);
        }
    }
    out
}
