/*! Rule-based Guarani detection.

Works on normalized tokens, without any model:

- a single token goes through a strict path: Spanish-looking words are vetoed,
  known Guarani words are accepted, other words need a weighted score of at least [WORD_SCORE_CUTOFF].
- several tokens go through the chunk path: at least 2 of 3 criteria
  (stopword ratio, nasal vowel count, pattern count) must hold.

Several very common Spanish words contain sequences that would otherwise count as Guarani patterns
(`nombre` and `mb`, `cuando` and `nd`...), see [crate::lang::SPANISH_FALSE_POSITIVES].
!*/
use log::debug;

use crate::lang::{
    APOSTROPHE, GUARANI_CLUSTERS, GUARANI_MORPHEMES, GUARANI_PATTERNS, GUARANI_PREFIXES,
    GUARANI_SCORED_MORPHEMES, GUARANI_STOPWORDS, NASAL_VOWELS, SPANISH_COMMON,
    SPANISH_FALSE_POSITIVES, SPANISH_PREFIXES, SPANISH_SUFFIXES,
};

/// Single words shorter than this (in chars) are rejected.
pub const MIN_WORD_CHARS: usize = 3;

/// Minimum score for a single, unknown word.
pub const WORD_SCORE_CUTOFF: u8 = 4;

/// Stopword ratio has to be strictly greater than this.
pub const RATIO_THRESHOLD: f64 = 0.20;

/// Minimum number of nasal vowels in a chunk.
pub const MIN_NASAL_COUNT: usize = 2;

/// Minimum number of pattern occurrences in a chunk.
pub const MIN_PATTERN_COUNT: usize = 3;

/// Number of chunk criteria that have to hold.
pub const MIN_CRITERIA: usize = 2;

/// Lowercase `text`, replace anything that is not a word character,
/// whitespace or an apostrophe by a space, and split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == APOSTROPHE || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Rule-based verdict on a word or a chunk.
///
/// Dispatches to [check_word] when `text` normalizes to exactly one token,
/// to [check_chunk] otherwise.
pub fn check(text: &str) -> bool {
    if text.chars().count() < 2 {
        return false;
    }

    let tokens = tokenize(text);
    match tokens.as_slice() {
        [] => false,
        [word] => check_word(word),
        _ => check_chunk(text, &tokens),
    }
}

fn has_nasal(word: &str) -> bool {
    word.chars().any(|c| NASAL_VOWELS.contains(&c))
}

/// Suffix match where `.` in `pattern` matches any char.
fn ends_with_pattern(word: &str, pattern: &str) -> bool {
    let mut chars = word.chars().rev();
    pattern
        .chars()
        .rev()
        .all(|p| matches!(chars.next(), Some(c) if p == '.' || p == c))
}

/// `ll`, `rr`, `ch` not followed by `e`/`ẽ`, `qu` followed by `e`/`i`/`u`.
fn has_spanish_cluster(word: &str) -> bool {
    if word.contains("ll") || word.contains("rr") {
        return true;
    }

    let chars: Vec<char> = word.chars().collect();
    chars.windows(2).enumerate().any(|(idx, pair)| {
        let next = chars.get(idx + 2);
        match (pair[0], pair[1]) {
            ('c', 'h') => !matches!(next, Some('e') | Some('ẽ')),
            ('q', 'u') => matches!(next, Some('e') | Some('i') | Some('u')),
            _ => false,
        }
    })
}

/// Word-initial prenasalized consonant (start of the word or right after a glottal stop).
fn has_initial_cluster(word: &str) -> bool {
    word.split(APOSTROPHE)
        .any(|part| GUARANI_CLUSTERS.iter().any(|c| part.starts_with(c)))
}

pub fn looks_spanish(word: &str) -> bool {
    SPANISH_SUFFIXES.iter().any(|s| word.ends_with(s))
        || SPANISH_PREFIXES.iter().any(|p| word.starts_with(p))
        || has_spanish_cluster(word)
}

pub fn looks_guarani(word: &str) -> bool {
    has_nasal(word)
        || word.contains(APOSTROPHE)
        || GUARANI_STOPWORDS.contains(word)
        || GUARANI_MORPHEMES.iter().any(|m| ends_with_pattern(word, m))
        || GUARANI_PREFIXES.iter().any(|p| word.starts_with(p))
}

/// Weighted Guarani features of a single word.
pub fn word_score(word: &str) -> u8 {
    let mut score = 0;
    if has_nasal(word) {
        score += 3;
    }
    if word.contains(APOSTROPHE) {
        score += 3;
    }
    if has_initial_cluster(word) {
        score += 2;
    }
    if word.contains('ñ') {
        score += 1;
    }
    if GUARANI_SCORED_MORPHEMES
        .iter()
        .any(|m| ends_with_pattern(word, m))
    {
        score += 2;
    }
    score
}

/// Strict single-word path. `word` has to be a normalized token.
pub fn check_word(word: &str) -> bool {
    if SPANISH_COMMON.contains(word) || word.chars().count() < MIN_WORD_CHARS {
        return false;
    }

    if looks_spanish(word) && !looks_guarani(word) {
        debug!("rejected Spanish-looking word: {word:?}");
        return false;
    }

    if GUARANI_STOPWORDS.contains(word) {
        debug!("known Guarani word: {word:?}");
        return true;
    }

    let score = word_score(word);
    debug!("word {word:?} scored {score}");
    score >= WORD_SCORE_CUTOFF
}

/// Chunk-level measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkStats {
    /// weighted stopword hits / tokens left after Spanish filtering.
    pub ratio: f64,
    pub nasal_count: usize,
    pub pattern_count: usize,
}

impl ChunkStats {
    /// Compute stats over `text`, given its normalized `tokens`.
    ///
    /// Returns `None` if no token survives Spanish filtering.
    pub fn new(text: &str, tokens: &[String]) -> Option<Self> {
        let remaining: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !SPANISH_COMMON.contains(t))
            .collect();

        if remaining.is_empty() {
            return None;
        }

        let hits: f64 = remaining.iter().map(|t| stopword_weight(t)).sum();
        let lowered = text.to_lowercase();

        Some(Self {
            ratio: hits / remaining.len() as f64,
            nasal_count: lowered.chars().filter(|c| NASAL_VOWELS.contains(c)).count(),
            pattern_count: pattern_count(&lowered),
        })
    }

    pub fn criteria_met(&self) -> usize {
        [
            self.ratio > RATIO_THRESHOLD,
            self.nasal_count >= MIN_NASAL_COUNT,
            self.pattern_count >= MIN_PATTERN_COUNT,
        ]
        .iter()
        .filter(|c| **c)
        .count()
    }

    pub fn is_guarani(&self) -> bool {
        self.criteria_met() >= MIN_CRITERIA
    }
}

/// 1 for a stopword, 0.5 for a token that contains a stopword longer than 3 chars.
fn stopword_weight(token: &str) -> f64 {
    if GUARANI_STOPWORDS.contains(token) {
        1.0
    } else if GUARANI_STOPWORDS
        .iter()
        .any(|sw| sw.chars().count() > 3 && token.contains(sw))
    {
        0.5
    } else {
        0.0
    }
}

/// Occurrences of Guarani patterns in an already lowercased text.
///
/// A pattern is skipped entirely when the text contains one of its Spanish false positives.
fn pattern_count(lowered: &str) -> usize {
    GUARANI_PATTERNS
        .iter()
        .filter(|pattern| lowered.contains(**pattern))
        .filter(|pattern| match SPANISH_FALSE_POSITIVES.get(**pattern) {
            Some(words) => !words.iter().any(|w| lowered.contains(w)),
            None => true,
        })
        .map(|pattern| lowered.matches(*pattern).count())
        .sum()
}

/// Chunk path. `tokens` are the normalized tokens of `text`.
pub fn check_chunk(text: &str, tokens: &[String]) -> bool {
    match ChunkStats::new(text, tokens) {
        Some(stats) => {
            debug!("chunk stats: {stats:?}");
            stats.is_guarani()
        }
        None => {
            debug!("all tokens filtered out as Spanish");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(text: &str) -> Option<ChunkStats> {
        ChunkStats::new(text, &tokenize(text))
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("¡Mba'éichapa, CHE  ryvy!"),
            vec!["mba'éichapa", "che", "ryvy"]
        );
        assert!(tokenize("... ¿? !!").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_nasals() {
        assert_eq!(tokenize("Avañe'ẽ porã."), vec!["avañe'ẽ", "porã"]);
    }

    #[test]
    fn spanish_common_words_rejected() {
        for word in SPANISH_COMMON.iter() {
            assert!(!check_word(word), "{word} accepted");
            assert!(!check(word), "{word} accepted");
        }
    }

    #[test]
    fn nasal_and_apostrophe_accepted() {
        for word in ["ñe'ẽ", "ka'ã", "y'õ", "ta'ỹra", "jeroky'ũ", "che'ĩ"] {
            assert!(word_score(word) >= 6);
            assert!(check_word(word), "{word} rejected");
        }
    }

    #[test]
    fn short_words_rejected() {
        assert!(!check_word("ñe"));
        assert!(!check("a"));
    }

    #[test]
    fn stopwords_accepted() {
        for word in ["mba'e", "ikatu", "ndive", "upe", "teko"] {
            assert!(check_word(word), "{word} rejected");
        }
    }

    #[test]
    fn spanish_patterns_vetoed() {
        // ends with "ción", no Guarani pattern
        assert!(!check_word("canción"));
        // "ll" cluster
        assert!(!check_word("calle"));
        // "qu" + vowel
        assert!(!check_word("queso"));
        // "des" prefix
        assert!(!check_word("desarrollo"));
    }

    #[test]
    fn che_is_not_a_spanish_cluster() {
        assert!(!has_spanish_cluster("cherã"));
        assert!(has_spanish_cluster("chapa"));
        assert!(has_spanish_cluster("quinta"));
        assert!(!has_spanish_cluster("quaro"));
    }

    #[test]
    fn test_word_score() {
        // initial cluster + morpheme
        assert_eq!(word_score("mbyjagua"), 2 + 2);
        assert!(check_word("mbyjagua"));
        // ñ only
        assert_eq!(word_score("ñakati"), 1);
        assert!(!check_word("ñakati"));
        // cluster after glottal stop
        assert!(has_initial_cluster("ka'ndu"));
        assert!(!has_initial_cluster("kanda"));
    }

    #[test]
    fn test_morpheme_wildcard() {
        assert!(ends_with_pattern("mba'apova'e", "va.e"));
        assert!(ends_with_pattern("ohova'e", "va.e"));
        assert!(!ends_with_pattern("ae", "va.e"));
        assert!(ends_with_pattern("tekomi", "mi"));
    }

    #[test]
    fn ratio_threshold_is_strict() {
        let at = ChunkStats {
            ratio: 0.20,
            nasal_count: 0,
            pattern_count: 0,
        };
        assert_eq!(at.criteria_met(), 0);

        // 1 stopword out of 5 remaining tokens
        let s = stats("ko casa verde libro tabla").unwrap();
        assert_eq!(s.ratio, 0.20);
        assert!(!(s.ratio > RATIO_THRESHOLD));
    }

    #[test]
    fn ratio_above_threshold() {
        let mut text = "ko ".repeat(21);
        text.push_str(&"casa ".repeat(79));
        let tokens = tokenize(&text);
        assert_eq!(tokens.len(), 100);

        let s = ChunkStats::new(&text, &tokens).unwrap();
        assert!((s.ratio - 0.21).abs() < 1e-9);
        assert!(s.ratio > RATIO_THRESHOLD);
    }

    #[test]
    fn partial_stopword_credit() {
        // "ikatuhína" contains "ikatu"
        let s = stats("ikatuhína casa").unwrap();
        assert_eq!(s.ratio, 0.25);
        // short stopwords do not give partial credit ("pe" in "pera")
        let s = stats("pera casa").unwrap();
        assert_eq!(s.ratio, 0.0);
    }

    #[test]
    fn all_spanish_chunk_rejected() {
        assert!(stats("el la de que").is_none());
        assert!(!check("el la de que"));
    }

    #[test]
    fn false_positives_suppress_patterns() {
        // "mb" comes from "nombre": not counted
        assert_eq!(stats("el nombre mbarete").unwrap().pattern_count, 0);
        // without the Spanish word, both occurrences count
        assert_eq!(stats("mbarete mbokaja").unwrap().pattern_count, 2);
        // patterns without a table entry are always counted
        assert_eq!(stats("karaikue piko").unwrap().pattern_count, 2);
    }

    #[test]
    fn guarani_chunk_accepted() {
        let text = "Ko ára porã ha che aiko upépe. Mba'e piko rejapo nde? \
                    Avañe'ẽ ha'e peteĩ ñe'ẽ tuicha mba'e ñanderehegua.";
        let s = stats(text).unwrap();
        assert!(s.criteria_met() >= 2, "{s:?}");
        assert!(check(text));
    }

    #[test]
    fn spanish_chunk_rejected() {
        let text = "Durante el segundo semestre del año, el gobierno nacional presentó \
                    un nuevo plan de desarrollo para las comunidades rurales del país.";
        assert!(!check(text));
    }

    #[test]
    fn check_dispatches_on_token_count() {
        // punctuation around a single word keeps the single-word path
        assert!(check("«mba'e»"));
        // two tokens go through the chunk path
        assert!(!check("mba'e casa"));
    }
}
