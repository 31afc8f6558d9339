mod common;

use common::FixedIdentifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use tarjuman::translate::{
    identify_or_unknown, is_urdu_like, resolve, DetectionError, DirectionPreference, Instruction,
    LanguageIdentifier, LayoutOrientation, WhatlangIdentifier, EN_TO_UR_INSTRUCTION,
    UNKNOWN_LANGUAGE, UR_TO_EN_INSTRUCTION,
};

/// Counts calls so explicit modes can be shown not to consult it.
struct CountingIdentifier(AtomicUsize);

impl LanguageIdentifier for CountingIdentifier {
    fn identify(&self, _text: &str) -> Result<String, DetectionError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok("ur".to_string())
    }
}

const SAMPLES: &[&str] = &["Hello, how are you?", "آپ کیسے ہیں؟", "سلام", "!!!", "", "42"];

#[test]
fn explicit_en_to_ur_ignores_text() {
    let identifier = CountingIdentifier(AtomicUsize::new(0));
    for text in SAMPLES {
        let resolution = resolve(text, DirectionPreference::EnToUr, &identifier);
        assert_eq!(resolution.instruction, Instruction::EnglishToUrdu);
        assert_eq!(resolution.orientation, LayoutOrientation::Rtl);
    }
    assert_eq!(identifier.0.load(Ordering::SeqCst), 0);
}

#[test]
fn explicit_ur_to_en_ignores_text() {
    let identifier = CountingIdentifier(AtomicUsize::new(0));
    for text in SAMPLES {
        let resolution = resolve(text, DirectionPreference::UrToEn, &identifier);
        assert_eq!(resolution.instruction, Instruction::UrduToEnglish);
        assert_eq!(resolution.orientation, LayoutOrientation::Ltr);
    }
    assert_eq!(identifier.0.load(Ordering::SeqCst), 0);
}

#[test]
fn auto_routes_arabic_script_languages_to_english() {
    for code in ["ur", "ur-PK", "urd", "fa", "ar", "ps"] {
        let identifier = FixedIdentifier(Some(code));
        let resolution = resolve("text", DirectionPreference::Auto, &identifier);
        assert_eq!(
            resolution.instruction,
            Instruction::UrduToEnglish,
            "code {code}"
        );
        assert_eq!(resolution.orientation, LayoutOrientation::Ltr);
    }
}

#[test]
fn auto_routes_everything_else_to_urdu() {
    for code in ["en", "hi", "fr", "far", "ara", "pus", "u", "unknown"] {
        let identifier = FixedIdentifier(Some(code));
        let resolution = resolve("text", DirectionPreference::Auto, &identifier);
        assert_eq!(
            resolution.instruction,
            Instruction::EnglishToUrdu,
            "code {code}"
        );
        assert_eq!(resolution.orientation, LayoutOrientation::Rtl);
    }
}

#[test]
fn urdu_like_codes() {
    assert!(is_urdu_like("ur"));
    assert!(is_urdu_like("urd"));
    assert!(is_urdu_like("fa"));
    assert!(is_urdu_like("ar"));
    assert!(is_urdu_like("ps"));
    assert!(!is_urdu_like("fas"));
    assert!(!is_urdu_like("en"));
    assert!(!is_urdu_like(UNKNOWN_LANGUAGE));
}

#[test]
fn identification_failure_becomes_unknown() {
    let identifier = FixedIdentifier(None);
    assert_eq!(identify_or_unknown(&identifier, "!!!"), UNKNOWN_LANGUAGE);
    assert_eq!(identify_or_unknown(&identifier, ""), UNKNOWN_LANGUAGE);
}

#[test]
fn scenario_english_input_auto() {
    let resolution = resolve(
        "Hello, how are you?",
        DirectionPreference::Auto,
        &FixedIdentifier(Some("en")),
    );
    assert_eq!(resolution.instruction.text(), EN_TO_UR_INSTRUCTION);
    assert_eq!(resolution.orientation, LayoutOrientation::Rtl);
}

#[test]
fn scenario_urdu_input_auto() {
    let resolution = resolve(
        "آپ کیسے ہیں؟",
        DirectionPreference::Auto,
        &FixedIdentifier(Some("ur")),
    );
    assert_eq!(resolution.instruction.text(), UR_TO_EN_INSTRUCTION);
    assert_eq!(resolution.orientation, LayoutOrientation::Ltr);
}

#[test]
fn scenario_forced_direction_against_script() {
    let resolution = resolve(
        "سلام",
        DirectionPreference::EnToUr,
        &FixedIdentifier(Some("ur")),
    );
    assert_eq!(resolution.instruction.text(), EN_TO_UR_INSTRUCTION);
    assert_eq!(resolution.orientation, LayoutOrientation::Rtl);
}

#[test]
fn scenario_undetectable_input() {
    let resolution = resolve("!!!", DirectionPreference::Auto, &FixedIdentifier(None));
    assert_eq!(resolution.instruction.text(), EN_TO_UR_INSTRUCTION);
    assert_eq!(resolution.orientation, LayoutOrientation::Rtl);

    // Same outcome with the real identifier: punctuation carries no language.
    let resolution = resolve("!!!", DirectionPreference::Auto, &WhatlangIdentifier);
    assert_eq!(resolution.instruction, Instruction::EnglishToUrdu);
}

#[test]
fn instruction_texts_are_exact() {
    assert_eq!(
        EN_TO_UR_INSTRUCTION,
        "You are a professional translator. Translate the user's text from English to Urdu.\n\
         Use natural, conversational Urdu. Preserve technical terms and code snippets.\n\
         Do not add explanations—only return the translation."
    );
    assert_eq!(
        UR_TO_EN_INSTRUCTION,
        "You are a professional translator. Translate the user's text from Urdu to English.\n\
         Use natural, fluent English. Preserve technical terms and code snippets.\n\
         Do not add explanations—only return the translation."
    );
}
