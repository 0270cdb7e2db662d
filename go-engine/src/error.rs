use std::fmt;

/// Why a move or pass was refused. The engine state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    OutOfTurn,
    Overwrite,
    Suicide,
    NotOnBoard,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::Overwrite => write!(f, "intersection occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::NotOnBoard => write!(f, "not on board"),
        }
    }
}

impl std::error::Error for GoError {}
