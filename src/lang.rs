//! Lexicon used by the lexical rules.
//!
//! Guarani stopwords, very common Spanish words and the Spanish words that
//! contain sequences otherwise diagnostic of Guarani.
//!
//! All entries are lowercase: lookups happen on normalized tokens.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

/// Nasal vowels (`ã ẽ ĩ õ ũ ỹ`).
pub const NASAL_VOWELS: [char; 6] = ['ã', 'ẽ', 'ĩ', 'õ', 'ũ', 'ỹ'];

/// Marks the glottal stop (puso).
pub const APOSTROPHE: char = '\'';

lazy_static! {

    /// Common Guarani words.
    pub static ref GUARANI_STOPWORDS: HashSet<&'static str> = [
        "ha", "hague", "upéi", "upe", "ko", "katu", "añete",
        "che", "nde", "aha", "ejú", "oho", "ikatu", "ndaha",
        "japo", "rejapo", "ojapo", "mba'e", "máva", "moõ",
        "pe", "rehe", "gui", "peve", "rupi", "ndive", "rire",
        "ára", "óga", "mitã", "kuña", "kuimba'e", "sy", "ru",
        "mba'eichagua", "mba'eichapa", "aipo", "upérõ",
        "avañe'ẽ", "ñanduti", "ka'a", "ka'aguy", "ñandu",
        "teko", "jehe'a", "mandu'a", "porã", "vai", "tuicha",
        "michĩ", "pyahu", "tuja", "karú", "hype", "yvára",
        "aiko", "reiko", "oiko", "ahecha", "rehecha", "ohecha",
        "ahendu", "rehendu", "ohendu", "aipota", "reipota", "oipota",
        "peteĩ", "mokõi", "mbohapy", "irundy", "po", "poteĩ",
        "mbae", "mava", "moo", "anete", "upei",
    ]
    .into_iter()
    .collect();

    /// Very common Spanish words, never accepted as Guarani.
    // Proper nouns are lowercased too, so that they match lowercased tokens.
    pub static ref SPANISH_COMMON: HashSet<&'static str> = [
        "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no",
        "te", "lo", "le", "da", "su", "por", "son", "con", "para", "del",
        "los", "las", "una", "como", "pero", "fue", "han", "más", "muy",
        "también", "año", "años", "día", "mundo", "hombre", "paraguay",
        "donde", "cuando", "siendo", "embargo", "grandes", "pequeño",
        "segundo", "nombre", "cambio", "ningún", "mañana", "paraguayo",
        "paraguaya", "paraguayos", "asunción", "español", "española",
        "brasil", "argentina", "diciembre", "noviembre", "señor",
        "señora", "señores", "durante", "después", "antes", "siempre",
        "nunca", "todos", "todas", "cada", "otro", "otra", "otros",
        "otras", "mismo", "misma", "primer", "primera", "último",
        "última", "mejor", "peor", "mayor", "menor", "nuevo", "nueva",
        "viejo", "vieja", "bueno", "buena", "malo", "mala", "guaraní",
    ]
    .into_iter()
    .collect();

    /// Spanish words that explain an occurrence of a Guarani pattern.
    ///
    /// A pattern listed here is not counted in a chunk that contains any of
    /// its words. Patterns missing from the table are always counted.
    pub static ref SPANISH_FALSE_POSITIVES: HashMap<&'static str, &'static [&'static str]> = {
        let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        m.insert("mb", &["también", "embargo", "nombre", "hombre", "iembre"]);
        m.insert("nd", &["cuando", "segundo", "mundo", "donde", "durante"]);
        m.insert("ng", &["lenguaje", "ningún", "español"]);
        m.insert("ñ", &["año", "años", "señor", "señora", "mañana", "español", "pequeño"]);
        m
    };
}

/// Spanish word endings.
pub const SPANISH_SUFFIXES: [&str; 9] = [
    "ción", "sión", "dad", "idad", "mente", "ando", "endo", "iero", "iera",
];

/// Spanish word beginnings.
pub const SPANISH_PREFIXES: [&str; 6] = ["des", "pre", "sub", "sobre", "anti", "contra"];

/// Guarani morpheme endings used to flag a word as Guarani-looking.
///
/// `va.e` is matched with any character in third position.
pub const GUARANI_MORPHEMES: [&str; 8] =
    ["kue", "gua", "va.e", "rã", "ngo", "piko", "hague", "rangue"];

/// Guarani morpheme endings that add to a word score (includes `mi`).
pub const GUARANI_SCORED_MORPHEMES: [&str; 9] = [
    "kue", "gua", "va.e", "rã", "ngo", "piko", "mi", "hague", "rangue",
];

/// Guarani word beginnings.
pub const GUARANI_PREFIXES: [&str; 6] = ["ñe", "ño", "ñu", "nd", "mb", "ng"];

/// Word-initial prenasalized consonants.
pub const GUARANI_CLUSTERS: [&str; 3] = ["mb", "nd", "ng"];

/// Character patterns counted over a whole chunk.
pub const GUARANI_PATTERNS: [&str; 11] = [
    "mb", "nd", "ng", "ñ", "kue", "gua", "va'e", "rã", "ngo", "mi", "piko",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_lowercase() {
        for w in GUARANI_STOPWORDS.iter().chain(SPANISH_COMMON.iter()) {
            assert_eq!(&w.to_lowercase(), w);
        }
    }

    #[test]
    fn lexicons_are_disjoint() {
        assert!(GUARANI_STOPWORDS.is_disjoint(&SPANISH_COMMON));
    }

    #[test]
    fn false_positive_patterns_are_counted_patterns() {
        for pattern in SPANISH_FALSE_POSITIVES.keys() {
            assert!(GUARANI_PATTERNS.contains(pattern));
        }
    }
}
