use std::borrow::Cow;

use lazy_static::lazy_static;

use super::identifier::Identifier;
use super::initialisms::InitialismSet;

/// Spelled-out digits substituted for a leading `0`-`9`.
pub const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

lazy_static! {
    static ref DEFAULT_NORMALIZER: Normalizer = Normalizer::default();
}

/// Normalize `raw` with the default initialism table.
///
/// Examples:
/// - `"ruby_on_rails"` -> `"RubyOnRails"`
/// - `"httpRequestId"` -> `"HTTPRequestID"`
/// - `"Ruby on rails"` -> `"Ruby_on_rails"`
/// - `"___"` -> `"_"`
pub fn normalize(raw: &str) -> Identifier {
    DEFAULT_NORMALIZER.normalize(raw)
}

/// Replace a leading ASCII digit with its English word followed by `_`.
///
/// `"1ruby"` becomes `"one_ruby"`; anything else is returned untouched.
pub fn spell_leading_digit(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match chars.next().and_then(|c| c.to_digit(10)) {
        Some(digit) => Cow::Owned(format!("{}_{}", DIGIT_WORDS[digit as usize], chars.as_str())),
        None => Cow::Borrowed(name),
    }
}

/// Converts raw schema names into exported, PascalCase identifiers.
///
/// Holds no state besides the read-only initialism table, so a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    initialisms: InitialismSet,
}

impl Normalizer {
    /// Create a normalizer consulting `initialisms`.
    pub fn new(initialisms: InitialismSet) -> Self {
        Self { initialisms }
    }

    /// The initialism table in use.
    pub fn initialisms(&self) -> &InitialismSet {
        &self.initialisms
    }

    /// Normalize `raw` into an identifier. Never fails; the worst case is `"_"`.
    ///
    /// Sanitizing turns separators such as spaces into underscores, which a
    /// second pass may read differently (`"ABC DEF"` -> `"ABC_DEF"` -> `"AbcDef"`).
    /// The pass is repeated until the name is stable, so the result is always
    /// a fixed point.
    pub fn normalize(&self, raw: &str) -> Identifier {
        let Some(mut current) = self.single_pass(raw) else {
            return Identifier::placeholder();
        };
        // Repeats settle within a few passes; the bound keeps pathological input from looping.
        let max_passes = 2 * current.chars().count() + 4;
        for _ in 0..max_passes {
            match self.single_pass(&current) {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }
        Identifier::new_unchecked(current)
    }

    fn single_pass(&self, raw: &str) -> Option<String> {
        let stripped = raw.trim_start_matches(|c: char| !is_letter(c) && !c.is_ascii_digit());
        if stripped.is_empty() {
            return None;
        }
        // The underscore after a spelled-out digit always separates words.
        let spelled_break = stripped
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|digit| DIGIT_WORDS[digit as usize].len());
        let spelled = spell_leading_digit(stripped);
        let cased = self.apply_casing(&spelled, spelled_break);
        let sanitized = sanitize(&cased);
        let trimmed = sanitized.trim_matches('_');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Capitalize words and canonicalize initialisms.
    fn apply_casing(&self, name: &str, forced_break: Option<usize>) -> String {
        if name == Identifier::PLACEHOLDER {
            return name.to_string();
        }

        if name.chars().all(is_lower) {
            return match self.initialisms.canonical(name) {
                Some(canonical) => canonical.to_string(),
                None => capitalize(name),
            };
        }

        // SCREAMING_SNAKE_CASE is lowered so it splits like snake_case. Runs of
        // initialisms (`APIURL`) are already canonical and cannot be re-split.
        if name.chars().all(|c| is_upper(c) || c == '_')
            && !self.initialisms.is_concatenation(name)
        {
            let lowered: String = name.chars().map(lower_char).collect();
            return self.split_words(&lowered, forced_break);
        }

        self.split_words(name, forced_break)
    }

    /// Scan left to right, closing a word at the end of input, before an
    /// underscore run and at every lower -> non-lower step.
    ///
    /// `forced_break` is the char index of an underscore that separates words
    /// regardless of casing.
    fn split_words(&self, name: &str, forced_break: Option<usize>) -> String {
        let chars: Vec<char> = name.chars().collect();
        let snake = chars
            .iter()
            .all(|&c| is_lower(c) || c.is_ascii_digit() || c == '_');

        let mut out = String::with_capacity(name.len());
        let mut word = String::new();
        let mut i = 0;
        while i < chars.len() {
            let current = chars[i];
            word.push(current);

            let Some(&next) = chars.get(i + 1) else {
                self.push_word(&mut out, &word);
                break;
            };

            let run_end = (next == '_').then(|| {
                chars[i + 1..]
                    .iter()
                    .position(|&c| c != '_')
                    .map_or(chars.len(), |offset| i + 1 + offset)
            });
            // Outside snake_case an underscore run followed by a lower-case
            // letter is kept verbatim: it may be a sanitized space
            // (`Ruby_on_rails`) and capitalizing after it would not be stable.
            let separates = run_end.is_some_and(|end| {
                snake
                    || forced_break == Some(i + 1)
                    || !chars.get(end).copied().is_some_and(is_lower)
            });

            if let (true, Some(run_end)) = (separates, run_end) {
                self.push_word(&mut out, &word);
                word.clear();

                // A lone underscore between digits survives (`v1_2`).
                let lone_between_digits = run_end - i == 2
                    && current.is_ascii_digit()
                    && chars.get(run_end).is_some_and(char::is_ascii_digit);
                if lone_between_digits {
                    word.push('_');
                }
                i = run_end;
                continue;
            }

            if is_lower(current) && !is_lower(next) {
                self.push_word(&mut out, &word);
                word.clear();
            }
            i += 1;
        }
        out
    }

    fn push_word(&self, out: &mut String, word: &str) {
        if word.is_empty() {
            return;
        }
        if let Some(canonical) = self.initialisms.canonical(word) {
            out.push_str(canonical);
        } else if word.chars().all(|c| lower_char(c) == c) {
            out.push_str(&capitalize(word));
        } else {
            out.push_str(word);
        }
    }
}

/// Replace anything that is not a letter or numeric character with `_`; the
/// first character must be a letter.
fn sanitize(name: &str) -> String {
    name.chars()
        .enumerate()
        .map(|(idx, c)| {
            let valid = if idx == 0 {
                is_letter(c)
            } else {
                is_letter(c) || is_digit(c)
            };
            if valid {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(upper_char(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_digit(c: char) -> bool {
    c.is_numeric()
}

fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

// Only one-to-one case mappings are applied: `ß` stays `ß` rather than
// becoming `SS`, which would not map back.
fn upper_char(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

fn lower_char(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}
