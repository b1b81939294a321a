//! Property tests for lookups through the controller.
//!
//! Whatever the candidate list, every assigned code must inject exactly the
//! word it was rendered next to, and codes past the end must do nothing.

use dragonwords_backend::{MemoryHost, ViewId};
use dragonwords_core::{CODE_SPACE, codes};
use dragonwords_runtime::{LookupOutcome, PanelController, SkipReason, ToggleOutcome};
use proptest::prelude::*;

fn session(words: &[String]) -> (MemoryHost, ViewId, PanelController) {
    let mut host = MemoryHost::new();
    let window = host.open_window();
    let source = host.open_view(window).unwrap();
    host.set_candidates(source, Some(words.iter().cloned()));
    let mut controller = PanelController::default();
    let created = controller.toggle(&mut host, window);
    assert!(matches!(created, ToggleOutcome::Created(_)));
    (host, source, controller)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_code_injects_its_word(words in prop::collection::vec("[a-z]{1,10}", 0..60)) {
        let (mut host, source, controller) = session(&words);

        for (code, word) in codes().zip(&words) {
            let outcome = controller.lookup(&mut host, source, code.as_str());
            let injected = matches!(outcome, LookupOutcome::Injected { word: ref w, .. } if w == word);
            prop_assert!(injected, "code {} did not inject {}", code, word);
        }
        prop_assert_eq!(host.snippets(source), words.as_slice());
    }

    #[test]
    fn codes_past_the_end_are_skipped(len in 0usize..CODE_SPACE) {
        let words: Vec<String> = (0..len).map(|i| format!("w{i}")).collect();
        let (mut host, source, controller) = session(&words);

        for code in codes().skip(len) {
            prop_assert_eq!(
                controller.lookup(&mut host, source, code.as_str()),
                LookupOutcome::Skipped(SkipReason::UnknownCode)
            );
        }
        prop_assert!(host.snippets(source).is_empty());
    }
}
