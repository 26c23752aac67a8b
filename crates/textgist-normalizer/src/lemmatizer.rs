//! Token lemmatization
//!
//! `NounLemmatizer` follows WordNet's morphy rules for nouns: an irregular
//! form table is consulted first, then plural suffixes are rewritten. It has
//! no dictionary, so the suffix rules are restricted to the ones that are
//! safe without a lookup and the ambiguous cases live in the table.

use std::collections::HashMap;

/// Reduces a single token to its base form
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize one lowercase token, with no surrounding context
    fn lemmatize(&self, token: &str) -> String;
}

/// Irregular and ambiguous plural forms
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("quizzes", "quiz"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("stimuli", "stimulus"),
    ("alumni", "alumnus"),
    ("radii", "radius"),
    ("syllabi", "syllabus"),
    ("bacteria", "bacterium"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("calories", "calorie"),
    ("zombies", "zombie"),
    ("aches", "ache"),
    ("headaches", "headache"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("avalanches", "avalanche"),
    ("moustaches", "moustache"),
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("economics", "economics"),
    ("politics", "politics"),
    ("ethics", "ethics"),
];

/// Endings of singular nouns that only look plural
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Plural suffix rewrites, most specific first
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("ies", "y"),
    ("s", ""),
];

/// Shortest token the suffix rules are applied to
const MIN_RULE_LENGTH: usize = 4;

/// Rule-based noun lemmatizer
pub struct NounLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl NounLemmatizer {
    /// Load the irregular form table
    pub fn new() -> Self {
        Self {
            irregular: IRREGULAR_NOUNS.iter().copied().collect(),
        }
    }

    fn apply_rules(&self, token: &str) -> Option<String> {
        if token.chars().count() < MIN_RULE_LENGTH
            || !token.chars().all(|c| c.is_alphabetic())
            || SINGULAR_ENDINGS.iter().any(|end| token.ends_with(end))
        {
            return None;
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = token.strip_suffix(suffix) {
                // "ties", "lies", "pies": the short -ies words drop only the s
                if *suffix == "ies" && stem.chars().count() < 2 {
                    return Some(format!("{}ie", stem));
                }
                return Some(format!("{}{}", stem, replacement));
            }
        }

        None
    }
}

impl Default for NounLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = self.irregular.get(token) {
            return (*lemma).to_string();
        }

        self.apply_rules(token).unwrap_or_else(|| token.to_string())
    }
}
