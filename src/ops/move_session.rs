use super::projection::DisplaySequence;

/// Direction of a single move step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Move-mode state for the day view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveState {
    #[default]
    Idle,
    /// `anchor` is the slot currently holding the item being moved
    Armed { anchor: usize },
}

/// Why a step request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRejection {
    NotArmed,
    OutOfBounds,
    Separator,
    CrossesPartition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { from: usize, to: usize },
    Rejected(StepRejection),
}

impl MoveState {
    pub fn is_armed(&self) -> bool {
        matches!(self, MoveState::Armed { .. })
    }

    pub fn anchor(&self) -> Option<usize> {
        match self {
            MoveState::Armed { anchor } => Some(*anchor),
            MoveState::Idle => None,
        }
    }

    /// Arm on slot `index`. Only item slots can be armed; returns whether
    /// the session started. Already-armed sessions are left alone.
    pub fn begin(&mut self, seq: &DisplaySequence, index: usize) -> bool {
        if self.is_armed() || seq.record_at(index).is_none() {
            return false;
        }
        *self = MoveState::Armed { anchor: index };
        true
    }

    /// Swap the anchored item with its neighbour in `direction`.
    ///
    /// The target must be in bounds, must not be the separator, and must be
    /// in the same partition as the anchored item. Rejected steps leave both
    /// the sequence and the anchor untouched.
    pub fn step(&mut self, seq: &mut DisplaySequence, direction: Direction) -> StepOutcome {
        let MoveState::Armed { anchor } = *self else {
            return StepOutcome::Rejected(StepRejection::NotArmed);
        };

        let target = match direction {
            Direction::Up => anchor.checked_sub(1),
            Direction::Down => Some(anchor + 1).filter(|&t| t < seq.len()),
        };
        let Some(target) = target else {
            return StepOutcome::Rejected(StepRejection::OutOfBounds);
        };

        let moving = match seq.partition_at(anchor) {
            Some(p) => p,
            // Anchor no longer on an item: sequence was replaced underneath us
            None => return StepOutcome::Rejected(StepRejection::OutOfBounds),
        };
        match seq.partition_at(target) {
            None => return StepOutcome::Rejected(StepRejection::Separator),
            Some(p) if p != moving => {
                return StepOutcome::Rejected(StepRejection::CrossesPartition);
            }
            Some(_) => {}
        }

        seq.swap(anchor, target);
        *self = MoveState::Armed { anchor: target };
        StepOutcome::Moved {
            from: anchor,
            to: target,
        }
    }

    /// End the session, returning where the item ended up
    pub fn confirm(&mut self) -> Option<usize> {
        let anchor = self.anchor();
        *self = MoveState::Idle;
        anchor
    }

    /// Drop the session without reconciling
    pub fn abort(&mut self) {
        *self = MoveState::Idle;
    }
}
