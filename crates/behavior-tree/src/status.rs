//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node completes within the tick it is evaluated in:
/// - conditions answer immediately ("is an enemy in range?")
/// - actions either record a command or decline to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The condition held, or the action recorded a command.
    Success,

    /// The condition did not hold, or the action had nothing to do.
    Failure,
}

impl Status {
    /// Maps a predicate result onto a status.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        Status::from_bool(value)
    }
}
