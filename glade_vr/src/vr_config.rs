use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn index(self) -> usize {
        match self {
            Handedness::Left => 0,
            Handedness::Right => 1,
        }
    }
}

/// The two tracked controller slots, in the order the XR runtime enumerates them.
///
/// `First` takes aim priority over `Second` when both are selecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerId {
    First,
    Second,
}

impl ControllerId {
    pub const ALL: [ControllerId; 2] = [ControllerId::First, ControllerId::Second];

    pub fn index(self) -> usize {
        match self {
            ControllerId::First => 0,
            ControllerId::Second => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<ControllerId> {
        match index {
            0 => Some(ControllerId::First),
            1 => Some(ControllerId::Second),
            _ => None,
        }
    }

    /// Hand paired with this slot; the runtime reports hand 0 as the left hand.
    pub fn handedness(self) -> Handedness {
        match self {
            ControllerId::First => Handedness::Left,
            ControllerId::Second => Handedness::Right,
        }
    }
}
