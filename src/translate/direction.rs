//! Direction resolution: picks the instruction sent to the model and the
//! orientation the result is laid out in.

use serde::{Deserialize, Serialize};

use super::detect::{identify_or_unknown, LanguageIdentifier};

/// System prompt for English input.
pub const EN_TO_UR_INSTRUCTION: &str = "You are a professional translator. Translate the user's text from English to Urdu.\n\
Use natural, conversational Urdu. Preserve technical terms and code snippets.\n\
Do not add explanations—only return the translation.";

/// System prompt for Urdu input.
pub const UR_TO_EN_INSTRUCTION: &str = "You are a professional translator. Translate the user's text from Urdu to English.\n\
Use natural, fluent English. Preserve technical terms and code snippets.\n\
Do not add explanations—only return the translation.";

/// Languages written in Arabic script that are routed to the Urdu → English prompt.
const URDU_LIKE_EXACT: [&str; 3] = ["fa", "ar", "ps"];

/// The user's chosen translation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionPreference {
    #[default]
    Auto,
    EnToUr,
    UrToEn,
}

impl DirectionPreference {
    pub const ALL: [DirectionPreference; 3] = [Self::Auto, Self::EnToUr, Self::UrToEn];

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto-detect",
            Self::EnToUr => "English → Urdu",
            Self::UrToEn => "Urdu → English",
        }
    }

    /// Next mode in sidebar order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::EnToUr,
            Self::EnToUr => Self::UrToEn,
            Self::UrToEn => Self::Auto,
        }
    }

    /// Previous mode in sidebar order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Auto => Self::UrToEn,
            Self::EnToUr => Self::Auto,
            Self::UrToEn => Self::EnToUr,
        }
    }
}

/// Flow direction of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOrientation {
    Ltr,
    Rtl,
}

/// Which of the two fixed prompts is sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    EnglishToUrdu,
    UrduToEnglish,
}

impl Instruction {
    pub fn text(self) -> &'static str {
        match self {
            Self::EnglishToUrdu => EN_TO_UR_INSTRUCTION,
            Self::UrduToEnglish => UR_TO_EN_INSTRUCTION,
        }
    }

    /// Urdu output flows right-to-left, English output left-to-right.
    pub fn orientation(self) -> LayoutOrientation {
        match self {
            Self::EnglishToUrdu => LayoutOrientation::Rtl,
            Self::UrduToEnglish => LayoutOrientation::Ltr,
        }
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub instruction: Instruction,
    pub orientation: LayoutOrientation,
}

impl From<Instruction> for Resolution {
    fn from(instruction: Instruction) -> Self {
        Self {
            instruction,
            orientation: instruction.orientation(),
        }
    }
}

/// True for language codes handled by the Urdu → English prompt.
pub fn is_urdu_like(code: &str) -> bool {
    code.starts_with("ur") || URDU_LIKE_EXACT.contains(&code)
}

/// Decide instruction and orientation for `text` under `preference`.
///
/// Explicit preferences never look at the text. `Auto` asks `identifier`;
/// a failed identification counts as "unknown" and falls through to
/// English → Urdu.
pub fn resolve(
    text: &str,
    preference: DirectionPreference,
    identifier: &dyn LanguageIdentifier,
) -> Resolution {
    let instruction = match preference {
        DirectionPreference::EnToUr => Instruction::EnglishToUrdu,
        DirectionPreference::UrToEn => Instruction::UrduToEnglish,
        DirectionPreference::Auto => {
            let code = identify_or_unknown(identifier, text);
            tracing::debug!(language = %code, "Auto-detected input language");
            if is_urdu_like(&code) {
                Instruction::UrduToEnglish
            } else {
                Instruction::EnglishToUrdu
            }
        }
    };
    Resolution::from(instruction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urdu_prefix_matches() {
        assert!(is_urdu_like("ur"));
        assert!(is_urdu_like("urd"));
        assert!(is_urdu_like("ur-PK"));
    }

    #[test]
    fn related_scripts_match_exactly() {
        assert!(is_urdu_like("fa"));
        assert!(is_urdu_like("ar"));
        assert!(is_urdu_like("ps"));
        assert!(!is_urdu_like("fas"));
        assert!(!is_urdu_like("ara"));
        assert!(!is_urdu_like("psx"));
    }

    #[test]
    fn other_codes_do_not_match() {
        for code in ["en", "fr", "hi", "unknown", "", "u"] {
            assert!(!is_urdu_like(code), "{code} should not be urdu-like");
        }
    }

    #[test]
    fn orientation_follows_instruction() {
        assert_eq!(Instruction::EnglishToUrdu.orientation(), LayoutOrientation::Rtl);
        assert_eq!(Instruction::UrduToEnglish.orientation(), LayoutOrientation::Ltr);
    }

    #[test]
    fn preference_cycles_through_all_modes() {
        let mut pref = DirectionPreference::Auto;
        for expected in DirectionPreference::ALL.iter().cycle().skip(1).take(3) {
            pref = pref.next();
            assert_eq!(pref, *expected);
        }
        assert_eq!(DirectionPreference::Auto.prev(), DirectionPreference::UrToEn);
        assert_eq!(DirectionPreference::UrToEn.prev().prev(), DirectionPreference::Auto);
    }

    #[test]
    fn preference_parses_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            direction: DirectionPreference,
        }
        let w: Wrapper = toml::from_str(r#"direction = "ur-to-en""#).unwrap();
        assert_eq!(w.direction, DirectionPreference::UrToEn);
    }

    #[test]
    fn instruction_texts_name_their_direction() {
        assert!(EN_TO_UR_INSTRUCTION.contains("from English to Urdu"));
        assert!(UR_TO_EN_INSTRUCTION.contains("from Urdu to English"));
        assert!(EN_TO_UR_INSTRUCTION.ends_with("only return the translation."));
    }
}
