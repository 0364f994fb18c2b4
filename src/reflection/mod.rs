//! Short daily reflection on the day's readings
//!
//! Generation is best-effort: any failure, including a missing API key,
//! yields [`FALLBACK_REFLECTION`] instead of an error.

pub mod gemini;

use thiserror::Error;

use crate::schedule::DailyAssignment;

pub use gemini::GeminiReflection;

/// Shown whenever a reflection cannot be generated
pub const FALLBACK_REFLECTION: &str = "أَلَا بِذِكْرِ اللَّهِ تَطْمَئِنُّ الْقُلُوبُ.";

#[derive(Error, Debug)]
pub enum ReflectionError {
    #[error("No API key set in ${0}")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response contained no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, ReflectionError>;

/// Anything that can answer a reflection prompt
pub trait ReflectionProvider: Send + Sync {
    fn reflect(&self, prompt: &str) -> Result<String>;
}

/// Prompt asking for a very short, motivating reflection on both readings
pub fn reflection_prompt(assignment: &DailyAssignment) -> String {
    format!(
        "أعطني تدبراً روحانياً قصيراً جداً ومحفزاً (30 كلمة) لورد اليوم: {} و {}",
        assignment.morning_label(),
        assignment.evening_label()
    )
}

/// Reflection for the day, or the fallback quote on any failure
pub fn reflection_for(provider: &dyn ReflectionProvider, assignment: &DailyAssignment) -> String {
    match provider.reflect(&reflection_prompt(assignment)) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            log::warn!("Reflection unavailable for {}: {}", assignment.date, e);
            FALLBACK_REFLECTION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::compute;
    use chrono::NaiveDate;

    struct Fixed(&'static str);

    impl ReflectionProvider for Fixed {
        fn reflect(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl ReflectionProvider for Failing {
        fn reflect(&self, _prompt: &str) -> Result<String> {
            Err(ReflectionError::MissingApiKey("GEMINI_API_KEY".to_string()))
        }
    }

    fn thursday() -> DailyAssignment {
        let date = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        compute(date, date, 58).unwrap()
    }

    #[test]
    fn test_prompt_mentions_both_labels() {
        let prompt = reflection_prompt(&thursday());
        assert!(prompt.contains("الحزب 58"));
        assert!(prompt.contains("سورة الكهف"));
    }

    #[test]
    fn test_reflection_is_trimmed() {
        assert_eq!(reflection_for(&Fixed("  نور  \n"), &thursday()), "نور");
    }

    #[test]
    fn test_failure_uses_fallback() {
        assert_eq!(reflection_for(&Failing, &thursday()), FALLBACK_REFLECTION);
    }
}
