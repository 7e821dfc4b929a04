//! Compiled question-text patterns, Italian and English phrasing.
//!
//! Patterns run against lower-cased text. A pattern that fails to compile
//! is `None` and simply never matches.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! question_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Rating scales ──────────────────────────────────────────────────────────
question_pattern!(RE_SCALE_IT, r"scala da \d+ a \d+");
question_pattern!(RE_SCALE_EN, r"scale (?:of|from) \d+ to \d+|scale \d+\s*[-–]\s*\d+");
question_pattern!(RE_SCALE_BOUNDS, r"(?:da|from|of) (\d+) (?:a|to) (\d+)|(\d+)\s*[-–]\s*(\d+)");

// ── Numeric counts ─────────────────────────────────────────────────────────
question_pattern!(RE_NUMERIC_IT, r"\bquant[ie] (?:anni|ore)\b");
question_pattern!(RE_NUMERIC_EN, r"\bhow many (?:hours|years)\b|\bhow old\b");

// ── Multi-select ───────────────────────────────────────────────────────────
question_pattern!(
    RE_MULTI_IT,
    r"seleziona tutte|più opzioni|\(seleziona|quali sono gli strumenti|quali strumenti|per quali (?:scopi|tipi di attività)"
);
question_pattern!(RE_MULTI_EN, r"\bselect all\b|\bwhich tools\b");

// ── Single-select demographics ─────────────────────────────────────────────
question_pattern!(
    RE_SINGLE_IT,
    r"il tuo genere|titolo di studio|che scuola|quale ordine|\bmateria\b|\bsettore\b"
);
question_pattern!(RE_SINGLE_EN, r"\bgender\b|\bwhich school\b");

// ── Yes / no ───────────────────────────────────────────────────────────────
question_pattern!(
    RE_YES_NO_IT,
    r"^utilizzi\b.*\?$|quotidiana utilizzi\b|attualmente insegni|\bsì\s*/\s*no\b"
);
question_pattern!(RE_YES_NO_EN, r"\bdo you (?:use|currently)\b|\byes\s*/\s*no\b");

// ── Open-ended ─────────────────────────────────────────────────────────────
question_pattern!(
    RE_OPEN_IT,
    r"puoi.*spiegare|in che modo|quali sono.*perché|puoi.*(?:fornire|darci).*esempi|secondo te|secondo la tua esperienza|in base alla tua esperien|quali difficoltà|pro e (?:i )?contro"
);
question_pattern!(RE_OPEN_EN, r"\bexplain\b|\bdescribe\b|\bin what way\b|\bwhy\b");

// ── Long-form heuristic ────────────────────────────────────────────────────
question_pattern!(RE_LONG_FORM_CUE, r"\bcome\b|perché|\bmodo\b");

/// True when `regex` compiled and matches `text`.
pub fn matches(regex: &LazyLock<Option<Regex>>, text: &str) -> bool {
    regex.as_ref().is_some_and(|re| re.is_match(text))
}

/// True when any of `regexes` matches `text`.
pub fn any_match(regexes: &[&LazyLock<Option<Regex>>], text: &str) -> bool {
    regexes.iter().any(|re| matches(re, text))
}
