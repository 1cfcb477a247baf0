/// Where the client stands within the round cycle.
/// There is no terminal phase: rounds repeat for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Joined, no round announced yet.
    #[default]
    Idle,
    /// A location is announced and clicks are answers.
    Answering,
    /// Answers are revealed until the next announcement.
    RevealedWaiting,
}

/// Inputs that may move the round between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Announce,
    Click,
    Reveal,
    Results,
    Legend,
    Color,
}

impl Phase {
    /// Phase after `trigger`, or `None` when the trigger is ignored here.
    pub fn next(self, trigger: Trigger) -> Option<Self> {
        match (self, trigger) {
            (_, Trigger::Announce) => Some(Self::Answering),
            (Self::Answering, Trigger::Click) => Some(Self::Answering),
            (_, Trigger::Click) => None,
            (Self::Idle, Trigger::Reveal) => None,
            (_, Trigger::Reveal) => Some(Self::RevealedWaiting),
            (Self::Idle, Trigger::Results) => None,
            (phase, Trigger::Results) => Some(phase),
            (phase, Trigger::Legend) => Some(phase),
            (phase, Trigger::Color) => Some(phase),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Answering => write!(f, "answering"),
            Self::RevealedWaiting => write!(f, "revealed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const PHASES: [Phase; 3] = [Phase::Idle, Phase::Answering, Phase::RevealedWaiting];
    #[test]
    fn announce_always_answers() {
        for phase in PHASES {
            assert_eq!(phase.next(Trigger::Announce), Some(Phase::Answering));
        }
    }
    #[test]
    fn clicks_only_while_answering() {
        assert_eq!(Phase::Idle.next(Trigger::Click), None);
        assert_eq!(Phase::RevealedWaiting.next(Trigger::Click), None);
        assert_eq!(Phase::Answering.next(Trigger::Click), Some(Phase::Answering));
    }
    #[test]
    fn reveal_needs_a_round() {
        assert_eq!(Phase::Idle.next(Trigger::Reveal), None);
        assert_eq!(
            Phase::Answering.next(Trigger::Reveal),
            Some(Phase::RevealedWaiting)
        );
        assert_eq!(
            Phase::RevealedWaiting.next(Trigger::Reveal),
            Some(Phase::RevealedWaiting)
        );
    }
    #[test]
    fn side_channels_keep_phase() {
        for phase in PHASES {
            assert_eq!(phase.next(Trigger::Legend), Some(phase));
            assert_eq!(phase.next(Trigger::Color), Some(phase));
        }
        assert_eq!(Phase::Idle.next(Trigger::Results), None);
    }
}
