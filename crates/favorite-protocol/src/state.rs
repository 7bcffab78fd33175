//! Toggle State
//!
//! Per-request lifecycle. Kept in the request flow and logged; the page only
//! changes when a reply is applied.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Idle,
    AwaitingResponse,
    Updated,
    Errored,
}

impl ToggleState {
    pub fn as_str(self) -> &'static str {
        match self {
            ToggleState::Idle => "idle",
            ToggleState::AwaitingResponse => "awaiting",
            ToggleState::Updated => "updated",
            ToggleState::Errored => "errored",
        }
    }

    /// Final state for a finished request
    pub fn settled<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ToggleState::Updated,
            Err(_) => ToggleState::Errored,
        }
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
