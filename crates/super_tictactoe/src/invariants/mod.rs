//! Properties of legal play, checked as values.
//!
//! [`StateInvariants`] hold for every reachable snapshot.
//! [`TransitionInvariants`] relate the snapshots on either side of an
//! accepted move.

use crate::action::Move;
use crate::state::GameState;

/// A property checked against a subject, either a snapshot or a
/// [`Transition`].
pub trait Invariant<S> {
    /// True if the property holds.
    fn holds(subject: &S) -> bool;

    /// What the property says, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The failed invariant's description.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked in one pass.
///
/// Implemented for tuples of two to four invariants over the same subject.
pub trait InvariantSet<S> {
    /// Checks every member, collecting all failures rather than stopping at
    /// the first.
    fn check_all(subject: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(subject: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($member::holds(subject), $member::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

/// The snapshots on either side of an accepted move.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State the move was applied to.
    pub before: &'a GameState,
    /// State the move produced.
    pub after: &'a GameState,
    /// The applied move.
    pub mov: Move,
}

pub mod alternating_turn;
pub mod game_over;
pub mod last_move;
pub mod write_once;

pub use alternating_turn::{AlternatingTurnInvariant, TurnPassedInvariant};
pub use game_over::GameOverInvariant;
pub use last_move::LastMoveInvariant;
pub use write_once::WriteOnceInvariant;

/// Invariants every reachable snapshot satisfies.
pub type StateInvariants = (AlternatingTurnInvariant, LastMoveInvariant, GameOverInvariant);

/// Invariants every accepted move satisfies.
pub type TransitionInvariants = (WriteOnceInvariant, TurnPassedInvariant);
