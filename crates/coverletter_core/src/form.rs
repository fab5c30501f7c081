use std::fmt;
use std::str::FromStr;

use letter_logging::{letter_debug, letter_warn};
use serde::Serialize;
use serde_json::Value;

pub const MIN_WORD_COUNT: u32 = 50;
pub const MAX_WORD_COUNT: u32 = 1000;
pub const DEFAULT_WORD_COUNT: u32 = 300;

/// Storage key the form snapshot is persisted under.
pub const SNAPSHOT_KEY: &str = "coverLetterInputs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ResumeUrl,
    JobDescriptionUrl,
    JobDescriptionText,
    WordCount,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::ResumeUrl,
        FormField::JobDescriptionUrl,
        FormField::JobDescriptionText,
        FormField::WordCount,
    ];

    /// Field name as used in snapshots and by the form driver.
    pub fn name(self) -> &'static str {
        match self {
            FormField::ResumeUrl => "resume_url",
            FormField::JobDescriptionUrl => "job_description_url",
            FormField::JobDescriptionText => "job_description_text",
            FormField::WordCount => "word_count",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Current values of the form. `word_count` always lies in
/// `[MIN_WORD_COUNT, MAX_WORD_COUNT]`; string fields hold exactly what the
/// user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormInputs {
    resume_url: String,
    job_description_url: String,
    job_description_text: String,
    word_count: u32,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            resume_url: String::new(),
            job_description_url: String::new(),
            job_description_text: String::new(),
            word_count: DEFAULT_WORD_COUNT,
        }
    }
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume_url(&self) -> &str {
        &self.resume_url
    }

    pub fn job_description_url(&self) -> &str {
        &self.job_description_url
    }

    pub fn job_description_text(&self) -> &str {
        &self.job_description_text
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Display value of a field.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::ResumeUrl => self.resume_url.clone(),
            FormField::JobDescriptionUrl => self.job_description_url.clone(),
            FormField::JobDescriptionText => self.job_description_text.clone(),
            FormField::WordCount => self.word_count.to_string(),
        }
    }

    /// Applies a raw edit. Word counts are coerced and clamped; everything
    /// else is stored untouched (trimming happens at submission).
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::ResumeUrl => self.resume_url = raw.to_string(),
            FormField::JobDescriptionUrl => self.job_description_url = raw.to_string(),
            FormField::JobDescriptionText => self.job_description_text = raw.to_string(),
            FormField::WordCount => self.word_count = coerce_word_count(raw),
        }
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_url.trim().is_empty()
    }

    pub fn has_job_description(&self) -> bool {
        !self.job_description_url.trim().is_empty() || !self.job_description_text.trim().is_empty()
    }

    /// Rebuilds inputs from persisted snapshot text, merging it over the
    /// defaults. Missing or malformed snapshots yield the defaults.
    pub fn restore(raw: Option<&str>) -> Self {
        let mut inputs = Self::default();
        let Some(raw) = raw else {
            letter_debug!("No persisted form snapshot; using defaults");
            return inputs;
        };

        let snapshot = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                letter_warn!("Ignoring form snapshot that is not an object: {}", other);
                return inputs;
            }
            Err(err) => {
                letter_warn!("Ignoring malformed form snapshot: {}", err);
                return inputs;
            }
        };

        // Each field merges on its own; a bad value keeps only that default.
        for field in FormField::ALL {
            let Some(value) = snapshot.get(field.name()) else {
                continue;
            };
            match field {
                FormField::WordCount => inputs.word_count = restored_word_count(value),
                _ => match value.as_str() {
                    Some(text) => inputs.set_field(field, text),
                    None if value.is_null() => {}
                    None => letter_warn!("Ignoring non-string snapshot value for {}", field),
                },
            }
        }
        inputs
    }

    /// Serializes the snapshot written to storage. `word_count` is always a
    /// JSON number.
    pub fn to_snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// Older writers stored the count as a string.
fn restored_word_count(value: &Value) -> u32 {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n != 0.0 => clamp_word_count(n.trunc() as i64),
        _ => DEFAULT_WORD_COUNT,
    }
}

/// Clamps any integer into the accepted word-count range.
pub fn clamp_word_count(n: i64) -> u32 {
    // The clamped value always fits in u32.
    n.clamp(i64::from(MIN_WORD_COUNT), i64::from(MAX_WORD_COUNT)) as u32
}

/// Leniently parses a typed word count: leading whitespace and sign, then the
/// leading digits. Anything without digits becomes the minimum.
pub fn coerce_word_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return MIN_WORD_COUNT;
    }

    let magnitude = rest.as_bytes()[..digit_len].iter().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    clamp_word_count(if negative { -magnitude } else { magnitude })
}
