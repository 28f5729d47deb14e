//! The ordered scoring pipeline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Die, Face, TurnState, WHITE_DICE};
use crate::turn::choice::{ask, ChoiceProvider, Prompt, TrioCandidates};

use super::{points, Interrupt};

/// One of the five scoring rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Four white dice and the black die on the same face.
    FiveOfAKind,
    /// Three white dice, or a white pair plus the black die, on one face.
    ThreeOfAKind,
    /// A white pair completed by a black sun.
    SunTrio,
    /// Fives and tens scoring on their own.
    SingleScoringDice,
    /// The black sun counted as five or ten points.
    SingleSun,
}

/// Rules that fired during one resolution pass, in pipeline order.
pub type RuleReport = SmallVec<[ScoringRule; 5]>;

impl ScoringRule {
    /// Pipeline order.
    pub const ORDER: [ScoringRule; 5] = [
        ScoringRule::FiveOfAKind,
        ScoringRule::ThreeOfAKind,
        ScoringRule::SunTrio,
        ScoringRule::SingleScoringDice,
        ScoringRule::SingleSun,
    ];

    /// Apply this rule to `state`, returning whether it scored.
    pub fn apply(
        self,
        state: &mut TurnState,
        choices: &mut dyn ChoiceProvider,
    ) -> Result<bool, Interrupt> {
        match self {
            ScoringRule::FiveOfAKind => five_of_a_kind(state),
            ScoringRule::ThreeOfAKind => Ok(three_of_a_kind(state)),
            ScoringRule::SunTrio => sun_trio(state, choices),
            ScoringRule::SingleScoringDice => Ok(single_scoring_dice(state)),
            ScoringRule::SingleSun => single_sun(state, choices),
        }
    }
}

/// Run every rule over the current roll, in order.
///
/// The caller is expected to have cleared the per-pass flags
/// (`TurnState::begin_pass`) beforehand.
pub fn evaluate(
    state: &mut TurnState,
    choices: &mut dyn ChoiceProvider,
) -> Result<RuleReport, Interrupt> {
    let mut fired = RuleReport::new();
    for rule in ScoringRule::ORDER {
        if rule.apply(state, choices)? {
            fired.push(rule);
        }
    }
    Ok(fired)
}

fn five_of_a_kind(state: &mut TurnState) -> Result<bool, Interrupt> {
    let Some(face) = state.black_die_roll else {
        return Ok(false);
    };
    if state.white_die_rolls.get(face) != WHITE_DICE {
        return Ok(false);
    }

    let points = points::five_of_a_kind(face)?;
    debug!(face = %face, points, "rolled five of a kind");
    state.award(points);
    state.consume_white(face, WHITE_DICE);
    state.consume_black();
    Ok(true)
}

fn three_of_a_kind(state: &mut TurnState) -> bool {
    let mut fired = false;
    for &face in Die::White.faces() {
        let count = state.white_die_rolls.get(face);
        if count >= 3 {
            score_trio(state, face, 3, false);
        } else if count == 2 && state.black_die_roll == Some(face) {
            score_trio(state, face, 2, true);
        } else {
            continue;
        }
        fired = true;
    }
    fired
}

fn sun_trio(state: &mut TurnState, choices: &mut dyn ChoiceProvider) -> Result<bool, Interrupt> {
    if state.black_die_roll != Some(Face::Sun) {
        return Ok(false);
    }

    let candidates: TrioCandidates = Die::White
        .faces()
        .iter()
        .copied()
        .filter(|&face| state.white_die_rolls.get(face) == 2)
        .collect();

    let face = match candidates.as_slice() {
        [] => return Ok(false),
        [only] => *only,
        _ => {
            let prompt = Prompt::SunTrioFace {
                candidates: candidates.clone(),
            };
            candidates[ask(choices, &prompt)? - 1]
        }
    };

    score_trio(state, face, 2, true);
    Ok(true)
}

fn single_scoring_dice(state: &mut TurnState) -> bool {
    let black = state.black_die_roll;
    let mut fired = false;

    for face in [Face::Five, Face::Ten] {
        let Some(each) = points::single(face) else {
            continue;
        };

        let count = state.white_die_rolls.get(face);
        if count > 0 {
            state.consume_white(face, count);
            state.award(each * u32::from(count));
            debug!(face = %face, count, points = each * u32::from(count), "scored single white dice");
            fired = true;
        }

        if black == Some(face) {
            state.consume_black();
            state.award(each);
            debug!(face = %face, points = each, "scored single black die");
            fired = true;
        }
    }

    fired
}

fn single_sun(state: &mut TurnState, choices: &mut dyn ChoiceProvider) -> Result<bool, Interrupt> {
    if state.black_die_roll != Some(Face::Sun) {
        return Ok(false);
    }

    // Only optional once something else has scored this pass
    if state.scoring_dice && ask(choices, &Prompt::SunDieUse)? == Prompt::SUN_KEEP {
        debug!("kept the sun die for the next roll");
        return Ok(false);
    }

    let points = points::SUN_VALUES[ask(choices, &Prompt::SunDiePoints)? - 1];
    debug!(points, "scored the sun die");
    state.award(points);
    state.consume_black();
    Ok(true)
}

/// Score three of `face`, consuming `white` white dice plus the black die if
/// `with_black`, and mark `face` as the face to clear.
fn score_trio(state: &mut TurnState, face: Face, white: u8, with_black: bool) {
    let points = points::three_of_a_kind(face);
    state.award(points);
    state.clearing_face = Some(face);
    state.consume_white(face, white);
    if with_black {
        state.consume_black();
    }
    debug!(face = %face, points, with_black, "rolled three of a kind");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::InstantOutcome;
    use crate::turn::{ChoiceError, ScriptedChoices};
    use Face::*;

    fn no_choices() -> ScriptedChoices {
        ScriptedChoices::new([])
    }

    fn run(white: &[Face], black: Option<Face>, answers: &[usize]) -> (TurnState, RuleReport) {
        let mut state = TurnState::with_roll(white, black);
        let mut choices = ScriptedChoices::new(answers.iter().copied());
        let report = evaluate(&mut state, &mut choices).unwrap();
        assert_eq!(choices.remaining(), 0, "unused scripted answers");
        (state, report)
    }

    // === Five of a kind ===

    #[test]
    fn test_five_twos_scores_200_and_consumes_everything() {
        let (state, report) = run(&[Two, Two, Two, Two], Some(Two), &[]);
        assert_eq!(state.score, 200);
        assert!(state.all_consumed());
        assert!(state.black_die_roll.is_none());
        assert!(state.scoring_dice);
        assert_eq!(report.as_slice(), &[ScoringRule::FiveOfAKind]);
    }

    #[test]
    fn test_five_fives_scores_500_without_single_dice() {
        let (state, report) = run(&[Five, Five, Five, Five], Some(Five), &[]);
        assert_eq!(state.score, 500);
        assert_eq!(report.as_slice(), &[ScoringRule::FiveOfAKind]);
    }

    #[test]
    fn test_five_sixes_wins_without_scoring() {
        let mut state = TurnState::with_roll(&[Six, Six, Six, Six], Some(Six));
        state.score = 35;
        let result = evaluate(&mut state, &mut no_choices());

        assert!(matches!(result, Err(Interrupt::Instant(InstantOutcome::Won))));
        assert_eq!(state.score, 35);
        assert_eq!(state.white_die_rolls.get(Six), 4);
    }

    #[test]
    fn test_five_tens_loses_without_scoring() {
        let mut state = TurnState::with_roll(&[Ten, Ten, Ten, Ten], Some(Ten));
        let result = evaluate(&mut state, &mut no_choices());

        assert!(matches!(result, Err(Interrupt::Instant(InstantOutcome::Lost))));
        assert_eq!(state.score, 0);
        assert!(!state.scoring_dice);
    }

    #[test]
    fn test_four_white_sixes_and_sun_is_not_five_of_a_kind() {
        // Sun completes nothing here: four sixes score as a trio of sixes,
        // the leftover six is dead, and the sun is asked about afterwards.
        let (state, report) = run(&[Six, Six, Six, Six], Some(Sun), &[Prompt::SUN_USE, Prompt::SUN_TEN]);
        assert_eq!(state.score, 60 + 10);
        assert_eq!(state.clearing_face, Some(Six));
        assert_eq!(state.remaining_white, 1);
        assert!(!state.remaining_black);
        assert_eq!(
            report.as_slice(),
            &[ScoringRule::ThreeOfAKind, ScoringRule::SingleSun]
        );
    }

    // === Three of a kind ===

    #[test]
    fn test_three_white_twos() {
        let (state, report) = run(&[Two, Two, Two, Three], Some(Four), &[]);
        assert_eq!(state.score, 20);
        assert_eq!(state.clearing_face, Some(Two));
        assert_eq!(state.remaining_white, 1);
        assert!(state.remaining_black);
        assert!(state.scoring_dice);
        assert_eq!(report.as_slice(), &[ScoringRule::ThreeOfAKind]);
    }

    #[test]
    fn test_pair_plus_black_fires_before_single_fives() {
        let (state, report) = run(&[Five, Five, Three, Four], Some(Five), &[]);
        // 50 for the trio, nothing left over for the single-five rule
        assert_eq!(state.score, 50);
        assert_eq!(state.clearing_face, Some(Five));
        assert_eq!(state.remaining_white, 2);
        assert!(!state.remaining_black);
        assert!(state.black_die_roll.is_none());
        assert_eq!(report.as_slice(), &[ScoringRule::ThreeOfAKind]);
    }

    #[test]
    fn test_four_white_fives_leave_one_single() {
        let (state, report) = run(&[Five, Five, Five, Five], Some(Two), &[]);
        assert_eq!(state.score, 50 + 5);
        assert_eq!(state.remaining_white, 0);
        assert!(state.remaining_black);
        assert_eq!(
            report.as_slice(),
            &[ScoringRule::ThreeOfAKind, ScoringRule::SingleScoringDice]
        );
    }

    #[test]
    fn test_black_die_unused_beside_single_matching_white() {
        // Three twos from white; the black four has only one white four to join
        let (state, _) = run(&[Two, Two, Two, Four], Some(Four), &[]);
        assert_eq!(state.score, 20);
        assert_eq!(state.clearing_face, Some(Two));
        assert_eq!(state.black_die_roll, Some(Four));
        assert!(state.remaining_black);
    }

    #[test]
    fn test_pair_plus_black_ten() {
        let (state, _) = run(&[Ten, Ten, Two, Three], Some(Ten), &[]);
        assert_eq!(state.score, 100);
        assert_eq!(state.clearing_face, Some(Ten));
        assert_eq!(state.white_die_rolls.get(Ten), 0);
    }

    // === Sun trio ===

    #[test]
    fn test_sun_completes_only_pair() {
        let (state, report) = run(&[Four, Four, Two, Six], Some(Sun), &[]);
        assert_eq!(state.score, 40);
        assert_eq!(state.clearing_face, Some(Four));
        assert_eq!(state.remaining_white, 2);
        assert!(!state.remaining_black);
        assert_eq!(report.as_slice(), &[ScoringRule::SunTrio]);
    }

    #[test]
    fn test_sun_trio_choice_between_pairs() {
        // Second candidate (in face order: Two, Six) is chosen
        let (state, _) = run(&[Six, Two, Six, Two], Some(Sun), &[2]);
        assert_eq!(state.score, 60);
        assert_eq!(state.clearing_face, Some(Six));
        assert_eq!(state.white_die_rolls.get(Two), 2);
        assert_eq!(state.white_die_rolls.get(Six), 0);
    }

    #[test]
    fn test_sun_trio_with_fives_pair_blocks_single_fives() {
        let (state, report) = run(&[Five, Five, Ten, Three], Some(Sun), &[]);
        // 50 for the sun trio, 10 for the lone ten
        assert_eq!(state.score, 60);
        assert_eq!(
            report.as_slice(),
            &[ScoringRule::SunTrio, ScoringRule::SingleScoringDice]
        );
        assert_eq!(state.remaining_white, 1);
    }

    #[test]
    fn test_sun_trio_bad_choice_is_reported() {
        let mut state = TurnState::with_roll(&[Six, Two, Six, Two], Some(Sun));
        let mut choices = ScriptedChoices::new([3]);
        let result = evaluate(&mut state, &mut choices);
        assert!(matches!(
            result,
            Err(Interrupt::Choice(ChoiceError::OutOfRange { choice: 3, .. }))
        ));
    }

    // === Single dice ===

    #[test]
    fn test_single_fives_and_tens_together() {
        let (state, report) = run(&[Five, Ten, Ten, Three], Some(Five), &[]);
        assert_eq!(state.score, 5 + 20 + 5);
        assert_eq!(state.remaining_white, 1);
        assert!(!state.remaining_black);
        assert_eq!(report.as_slice(), &[ScoringRule::SingleScoringDice]);
    }

    #[test]
    fn test_black_ten_alone() {
        let (state, _) = run(&[Two, Three, Four, Six], Some(Ten), &[]);
        assert_eq!(state.score, 10);
        assert_eq!(state.remaining_white, 4);
        assert!(!state.remaining_black);
    }

    // === Sun die ===

    #[test]
    fn test_lone_sun_must_be_scored() {
        // Nothing else scored, so no use/keep question is asked
        let (state, report) = run(&[Two, Three, Four, Six], Some(Sun), &[Prompt::SUN_FIVE]);
        assert_eq!(state.score, 5);
        assert!(!state.remaining_black);
        assert_eq!(report.as_slice(), &[ScoringRule::SingleSun]);
    }

    #[test]
    fn test_sun_can_be_kept_after_other_scoring() {
        let (state, report) = run(&[Five, Three, Four, Six], Some(Sun), &[Prompt::SUN_KEEP]);
        assert_eq!(state.score, 5);
        assert!(state.remaining_black);
        assert_eq!(state.black_die_roll, Some(Sun));
        assert_eq!(report.as_slice(), &[ScoringRule::SingleScoringDice]);
    }

    #[test]
    fn test_sun_used_after_other_scoring() {
        let (state, _) = run(&[Ten, Three, Four, Six], Some(Sun), &[Prompt::SUN_USE, Prompt::SUN_TEN]);
        assert_eq!(state.score, 20);
        assert!(!state.remaining_black);
    }

    // === Bust ===

    #[test]
    fn test_nothing_scores() {
        let (state, report) = run(&[Three, Three], None, &[]);
        assert!(!state.scoring_dice);
        assert_eq!(state.score, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_order_is_fixed() {
        assert_eq!(ScoringRule::ORDER[0], ScoringRule::FiveOfAKind);
        assert_eq!(ScoringRule::ORDER[4], ScoringRule::SingleSun);
    }
}
