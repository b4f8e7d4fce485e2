//! `Corridor`: a single straight corridor walk.
//!
//! The walker starts at position 0 and the goal sits at the far end. The
//! state space is a line, so both strategies expand exactly the same
//! states; this is the calibration puzzle for the comparison arithmetic
//! (length 3: path `[forward, forward, forward]`, 4 expansions).
//!
//! A corridor may carry a locked gate. Forward is illegal on the gate
//! square, which cuts the goal out of the reachable component and makes
//! the unreachable-instance behavior (both strategies exhaust after
//! expanding `gate + 1` states) cheap to pin down in tests.

use quarry_solver::contract::{IllegalMove, Puzzle};
use quarry_solver::fingerprint::{digest, Fingerprint};

const DOMAIN_CORRIDOR: &[u8] = b"QUARRY::CORRIDOR::V1\0";

/// One step along the corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Toward the goal end.
    Forward,
    /// Back toward the start.
    Backward,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}

/// A walker at `pos` in a corridor of `length` squares past the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corridor {
    pos: u32,
    length: u32,
    gate: Option<u32>,
}

impl Corridor {
    /// An open corridor: the goal at `length` is reachable in `length`
    /// forward steps.
    #[must_use]
    pub fn open(length: u32) -> Self {
        Self {
            pos: 0,
            length,
            gate: None,
        }
    }

    /// A corridor with a locked gate at `gate < length`: forward is
    /// illegal there, so the goal is unreachable and the reachable
    /// component is `{0, ..., gate}`.
    ///
    /// # Panics
    ///
    /// Panics if `gate >= length` (the gate would sit on or past the
    /// goal square).
    #[must_use]
    pub fn gated(length: u32, gate: u32) -> Self {
        assert!(gate < length, "gate must sit strictly before the goal");
        Self {
            pos: 0,
            length,
            gate: Some(gate),
        }
    }

    /// Current position (0 = start).
    #[must_use]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    fn forward_open(&self) -> bool {
        self.pos < self.length && self.gate != Some(self.pos)
    }
}

impl Puzzle for Corridor {
    type Move = Step;

    fn is_goal(&self) -> bool {
        self.pos == self.length
    }

    fn legal_moves(&self) -> Vec<Step> {
        let mut moves = Vec::with_capacity(2);
        if self.forward_open() {
            moves.push(Step::Forward);
        }
        if self.pos > 0 {
            moves.push(Step::Backward);
        }
        moves
    }

    fn apply(&self, mv: &Step) -> Result<Self, IllegalMove> {
        let pos = match mv {
            Step::Forward => {
                if !self.forward_open() {
                    return Err(IllegalMove::new(format!(
                        "forward blocked at position {}",
                        self.pos
                    )));
                }
                self.pos + 1
            }
            Step::Backward => {
                if self.pos == 0 {
                    return Err(IllegalMove::new("backward from the start square"));
                }
                self.pos - 1
            }
        };
        Ok(Self {
            pos,
            length: self.length,
            gate: self.gate,
        })
    }

    fn fingerprint(&self) -> Fingerprint {
        let mut bytes = Vec::with_capacity(13);
        bytes.extend_from_slice(&self.pos.to_le_bytes());
        bytes.extend_from_slice(&self.length.to_le_bytes());
        match self.gate {
            Some(gate) => {
                bytes.push(1);
                bytes.extend_from_slice(&gate.to_le_bytes());
            }
            None => bytes.push(0),
        }
        digest(DOMAIN_CORRIDOR, &bytes)
    }
}
