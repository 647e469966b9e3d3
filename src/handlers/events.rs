use std::fmt::{Display, Formatter};
use crate::models::coordinate::Coordinate;
use crate::models::error::InputParseError;

pub enum Command {
    RequestLongitude(String),
    Append(Coordinate),
    PrintLog,
    InputError(InputParseError),
    Transition(StateKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    AwaitingInput,
    Terminated,
}

impl Display for StateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StateKind::AwaitingInput => write!(f, "AwaitingInput"),
            StateKind::Terminated => write!(f, "Terminated"),
        }
    }
}
