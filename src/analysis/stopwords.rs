//! Named-language stopword lists.
//!
//! Italian, the language of the PAISÀ corpus, ships with an embedded copy of
//! the NLTK list so that the default corpus configuration has no external data
//! dependency. Other languages are resolved through the `stop-words` crate.
//!
//! # Examples
//!
//! ```
//! use corpora::analysis::stopwords::load_stopwords;
//!
//! let words = load_stopwords("italian").unwrap();
//! assert!(words.contains("il"));
//! assert!(!words.contains("gatto"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use stop_words::{LANGUAGE, get};

use crate::error::{CorporaError, Result};

/// NLTK Italian stopword list.
const ITALIAN_STOP_WORDS: &[&str] = &[
    "ad", "al", "allo", "ai", "agli", "all", "agl", "alla", "alle", "con", "col", "coi", "da",
    "dal", "dallo", "dai", "dagli", "dall", "dagl", "dalla", "dalle", "di", "del", "dello", "dei",
    "degli", "dell", "degl", "della", "delle", "in", "nel", "nello", "nei", "negli", "nell",
    "negl", "nella", "nelle", "su", "sul", "sullo", "sui", "sugli", "sull", "sugl", "sulla",
    "sulle", "per", "tra", "contro", "io", "tu", "lui", "lei", "noi", "voi", "loro", "mio", "mia",
    "miei", "mie", "tuo", "tua", "tuoi", "tue", "suo", "sua", "suoi", "sue", "nostro", "nostra",
    "nostri", "nostre", "vostro", "vostra", "vostri", "vostre", "mi", "ti", "ci", "vi", "lo",
    "la", "li", "le", "gli", "ne", "il", "un", "uno", "una", "ma", "ed", "se", "perché", "anche",
    "come", "dov", "dove", "che", "chi", "cui", "non", "più", "quale", "quanto", "quanti",
    "quanta", "quante", "quello", "quelli", "quella", "quelle", "questo", "questi", "questa",
    "queste", "si", "tutto", "tutti", "a", "c", "e", "i", "l", "o", "ho", "hai", "ha", "abbiamo",
    "avete", "hanno", "abbia", "abbiate", "abbiano", "avrò", "avrai", "avrà", "avremo", "avrete",
    "avranno", "avrei", "avresti", "avrebbe", "avremmo", "avreste", "avrebbero", "avevo", "avevi",
    "aveva", "avevamo", "avevate", "avevano", "ebbi", "avesti", "ebbe", "avemmo", "aveste",
    "ebbero", "avessi", "avesse", "avessimo", "avessero", "avendo", "avuto", "avuta", "avuti",
    "avute", "sono", "sei", "è", "siamo", "siete", "sia", "siate", "siano", "sarò", "sarai",
    "sarà", "saremo", "sarete", "saranno", "sarei", "saresti", "sarebbe", "saremmo", "sareste",
    "sarebbero", "ero", "eri", "era", "eravamo", "eravate", "erano", "fui", "fosti", "fu",
    "fummo", "foste", "furono", "fossi", "fosse", "fossimo", "fossero", "essendo", "faccio",
    "fai", "facciamo", "fanno", "faccia", "facciate", "facciano", "farò", "farai", "farà",
    "faremo", "farete", "faranno", "farei", "faresti", "farebbe", "faremmo", "fareste",
    "farebbero", "facevo", "facevi", "faceva", "facevamo", "facevate", "facevano", "feci",
    "facesti", "fece", "facemmo", "faceste", "fecero", "facessi", "facesse", "facessimo",
    "facessero", "facendo", "sto", "stai", "sta", "stiamo", "stanno", "stia", "stiate", "stiano",
    "starò", "starai", "starà", "staremo", "starete", "staranno", "starei", "staresti",
    "starebbe", "staremmo", "stareste", "starebbero", "stavo", "stavi", "stava", "stavamo",
    "stavate", "stavano", "stetti", "stesti", "stette", "stemmo", "steste", "stettero", "stessi",
    "stesse", "stessimo", "stessero", "stando",
];

/// Italian stop words as a HashSet.
pub static ITALIAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ITALIAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Load the stopword list for a language name or ISO 639-1 code.
///
/// Names are matched case-insensitively. Unknown languages are a
/// configuration error rather than a silent fallback.
pub fn load_stopwords(language: &str) -> Result<HashSet<String>> {
    let lang = match language.to_lowercase().as_str() {
        "it" | "italian" => return Ok(ITALIAN_STOP_WORDS_SET.clone()),
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        other => {
            return Err(CorporaError::config(format!(
                "No stopword list for language '{other}'"
            )));
        }
    };

    let words: HashSet<String> = get(lang).iter().map(|s| s.to_string()).collect();
    debug!("Loaded {} stopwords for '{}'", words.len(), language);
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_italian_stopwords() {
        let words = load_stopwords("italian").unwrap();
        assert_eq!(words.len(), ITALIAN_STOP_WORDS.len());
        for word in ["il", "la", "di", "è", "perché", "stando"] {
            assert!(words.contains(word), "missing {word}");
        }
        assert!(!words.contains("gatto"));
        assert!(!words.contains(""));
    }

    #[test]
    fn test_language_codes_are_case_insensitive() {
        assert_eq!(load_stopwords("IT").unwrap(), load_stopwords("italian").unwrap());
    }

    #[test]
    fn test_english_stopwords() {
        let words = load_stopwords("english").unwrap();
        assert!(words.contains("the"));
    }

    #[test]
    fn test_unknown_language() {
        let err = load_stopwords("klingon").unwrap_err();
        assert!(matches!(err, CorporaError::Config(_)));
    }
}
