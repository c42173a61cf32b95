//! Transition table of the reveal layout.
//!
//! Pure data: [`next_step`] maps the current phase and an incoming event to
//! the phase to enter and the step the controller must schedule next. It never
//! touches the host or the clock.

/// Which child surface is logically active once nothing is animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    MainVisible,
    SecondaryVisible,
}

/// Stage of an in-flight transition, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionStage {
    /// Button travels to the center of the main surface while it fades out.
    FabToCenter,
    /// Mask grows from its minimum radius to full coverage.
    ExpandingMask,
    /// Mask shrinks back while the secondary surface fades out.
    ContractingMask,
    /// Button travels back to its rest position.
    FabToOrigin,
}

impl TransitionStage {
    /// State the layout was settled in when this transition began.
    pub fn origin(self) -> RevealState {
        match self {
            TransitionStage::FabToCenter | TransitionStage::ExpandingMask => {
                RevealState::MainVisible
            }
            TransitionStage::ContractingMask | TransitionStage::FabToOrigin => {
                RevealState::SecondaryVisible
            }
        }
    }

    /// State the layout settles in when this transition completes.
    pub fn target(self) -> RevealState {
        match self.origin() {
            RevealState::MainVisible => RevealState::SecondaryVisible,
            RevealState::SecondaryVisible => RevealState::MainVisible,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Settled(RevealState),
    Transitioning(TransitionStage),
}

impl Phase {
    /// The settled state, or the state a running transition started from.
    pub fn state(self) -> RevealState {
        match self {
            Phase::Settled(state) => state,
            Phase::Transitioning(stage) => stage.origin(),
        }
    }

    pub fn is_transitioning(self) -> bool {
        matches!(self, Phase::Transitioning(_))
    }

    pub fn stage(self) -> Option<TransitionStage> {
        match self {
            Phase::Settled(_) => None,
            Phase::Transitioning(stage) => Some(stage),
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Settled(RevealState::MainVisible)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    RevealRequested,
    RestoreRequested,
    /// The animation of the current stage delivered its last frame.
    StageFinished,
}

/// Work the controller schedules when entering a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    MoveFabToCenter,
    ExpandMask,
    ContractMask,
    MoveFabToOrigin,
    /// Swap surface visibility and notify the listener.
    Settle(RevealState),
}

pub fn next_step(phase: Phase, event: RevealEvent) -> Option<(Phase, Step)> {
    use RevealEvent::*;
    use RevealState::*;
    use TransitionStage::*;

    let next = match (phase, event) {
        (Phase::Settled(MainVisible), RevealRequested) => {
            (Phase::Transitioning(FabToCenter), Step::MoveFabToCenter)
        }
        (Phase::Transitioning(FabToCenter), StageFinished) => {
            (Phase::Transitioning(ExpandingMask), Step::ExpandMask)
        }
        (Phase::Transitioning(ExpandingMask), StageFinished) => (
            Phase::Settled(SecondaryVisible),
            Step::Settle(SecondaryVisible),
        ),
        (Phase::Settled(SecondaryVisible), RestoreRequested) => {
            (Phase::Transitioning(ContractingMask), Step::ContractMask)
        }
        (Phase::Transitioning(ContractingMask), StageFinished) => {
            (Phase::Transitioning(FabToOrigin), Step::MoveFabToOrigin)
        }
        (Phase::Transitioning(FabToOrigin), StageFinished) => {
            (Phase::Settled(MainVisible), Step::Settle(MainVisible))
        }
        _ => return None,
    };
    Some(next)
}

#[cfg(test)]
#[path = "tests/state_machine_tests.rs"]
mod tests;
