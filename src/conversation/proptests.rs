//! Property-based tests for the conversation state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use proptest::prelude::*;
use std::time::Duration;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn arb_question() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z?!]{1,12}( [a-zA-Z]{1,8}){0,3}[ ]{0,3}"
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![
        Just(ConvState::Idle),
        Just(ConvState::Submitting),
        (0u64..20).prop_map(|id| ConvState::Revealing { target: TurnId(id) }),
    ]
}

/// UI-level actions, including ones that should be ignored
#[derive(Debug, Clone)]
enum Action {
    Submit(String),
    Answer(String),
    FinishReveal,
    StaleReveal(u64),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => prop_oneof![arb_question(), arb_blank()].prop_map(Action::Submit),
        2 => "[a-zA-Z ]{0,20}".prop_map(Action::Answer),
        2 => Just(Action::FinishReveal),
        1 => (0u64..30).prop_map(Action::StaleReveal),
    ]
}

// ============================================================================
// Transition properties
// ============================================================================

proptest! {
    #[test]
    fn prop_busy_states_reject_submit(
        state in arb_state().prop_filter("busy", |s| !s.is_idle()),
        text in arb_question(),
    ) {
        let err = transition(&state, TurnId(50), Event::Submit { text }).unwrap_err();
        prop_assert_eq!(err, TransitionError::Busy);
    }

    #[test]
    fn prop_blank_submit_rejected_when_idle(text in arb_blank()) {
        let err = transition(&ConvState::Idle, TurnId(1), Event::Submit { text }).unwrap_err();
        prop_assert_eq!(err, TransitionError::EmptyInput);
    }

    #[test]
    fn prop_idle_submit_appends_one_user_turn_and_sends_once(text in arb_question()) {
        let result = transition(&ConvState::Idle, TurnId(7), Event::Submit { text: text.clone() }).unwrap();
        prop_assert_eq!(result.new_state, ConvState::Submitting);

        let appended: Vec<_> = result.effects.iter().filter_map(|e| match e {
            Effect::AppendTurn { id, speaker, text } => Some((*id, *speaker, text.clone())),
            _ => None,
        }).collect();
        prop_assert_eq!(appended, vec![(TurnId(7), Speaker::User, text.trim().to_string())]);

        let sent: Vec<_> = result.effects.iter().filter_map(|e| match e {
            Effect::SendQuestion { question } => Some(question.clone()),
            _ => None,
        }).collect();
        prop_assert_eq!(sent, vec![text.trim().to_string()]);
    }

    #[test]
    fn prop_answer_targets_the_new_turn(next in 1u64..100, answer in "[a-z ]{0,30}") {
        let result = transition(
            &ConvState::Submitting,
            TurnId(next),
            Event::AnswerReceived { answer },
        ).unwrap();
        prop_assert_eq!(result.new_state, ConvState::Revealing { target: TurnId(next) });
    }
}

// ============================================================================
// Driver invariants over action sequences
// ============================================================================

proptest! {
    #[test]
    fn prop_conversation_invariants(actions in proptest::collection::vec(arb_action(), 0..40)) {
        let mut conv = Conversation::with_greeting(WELCOME_TEXT);
        let mut accepted_questions = Vec::new();
        let mut sent_questions = Vec::new();

        for action in actions {
            let before_len = conv.transcript().len();
            let before_state = *conv.state();

            let outcome = match action {
                Action::Submit(text) => {
                    conv.set_input(text);
                    conv.submit()
                }
                Action::Answer(answer) => conv.handle(Event::AnswerReceived { answer }),
                Action::FinishReveal => match conv.reveal_target() {
                    Some(turn) => conv.handle(Event::RevealComplete { turn }),
                    None => Ok(vec![]),
                },
                Action::StaleReveal(id) => conv.handle(Event::RevealComplete { turn: TurnId(id) }),
            };

            match outcome {
                Ok(effects) => {
                    for effect in effects {
                        if let Effect::SendQuestion { question } = effect {
                            sent_questions.push(question);
                        }
                    }
                    if before_state.is_idle() && conv.transcript().len() > before_len {
                        accepted_questions.push(conv.transcript().last().unwrap().text().to_string());
                    }
                }
                Err(_) => {
                    // Rejected events are no-ops
                    prop_assert_eq!(conv.transcript().len(), before_len);
                    prop_assert_eq!(*conv.state(), before_state);
                }
            }

            // Ids strictly increase in transcript order
            let ids: Vec<_> = conv.transcript().turns().iter().map(Turn::id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));

            // awaiting_reply is exactly "not idle"
            prop_assert_eq!(conv.awaiting_reply(), !conv.state().is_idle());

            // The reveal target, if any, is the newest turn and an assistant turn
            if let Some(target) = conv.reveal_target() {
                let last = conv.transcript().last().unwrap();
                prop_assert_eq!(last.id(), target);
                prop_assert_eq!(last.speaker(), Speaker::Assistant);
            }

            // While submitting, the newest turn is the question in flight
            if *conv.state() == ConvState::Submitting {
                prop_assert_eq!(conv.transcript().last().unwrap().speaker(), Speaker::User);
            }
        }

        // One request per accepted question, in submission order
        prop_assert_eq!(&sent_questions, &accepted_questions);
        let user_turns: Vec<_> = conv
            .transcript()
            .turns()
            .iter()
            .filter(|t| t.speaker() == Speaker::User)
            .map(|t| t.text().to_string())
            .collect();
        prop_assert_eq!(user_turns, accepted_questions);
    }

    #[test]
    fn prop_reveal_shows_growing_prefix(
        text in "[a-zA-Z \u{4e00}-\u{4e10}]{0,40}",
        steps in proptest::collection::vec(0u64..200, 1..30),
    ) {
        let mut reveal = Reveal::with_interval(Duration::from_millis(60));
        reveal.start(TurnId(1));
        let mut previous = 0;
        let mut completions = 0;

        for ms in steps {
            if reveal.advance(Duration::from_millis(ms), &text) {
                completions += 1;
            }
            let shown = reveal.visible(TurnId(1), &text);
            prop_assert!(text.starts_with(shown));
            prop_assert!(shown.len() >= previous);
            previous = shown.len();
        }

        // Plenty of time always finishes the reveal
        if reveal.advance(Duration::from_secs(60), &text) {
            completions += 1;
        }
        prop_assert_eq!(completions, 1);
        prop_assert_eq!(reveal.visible(TurnId(1), &text), text.as_str());
    }
}
