//! Coefficient slots and the partially filled coefficient set.
//!
//! A `Coefficients` value starts empty and is filled one slot at a time by
//! the collector. Once every slot holds a value it can be turned into a
//! `Quadratic`, which is what the solver consumes.

use crate::QuadraticError;
use std::fmt;

/// Marker appended to the rejected text in a snapshot.
const REJECTED_MARKER: &str = "<- This value must be a number.";

/// Placeholder shown for slots that have no value yet.
const UNSET_MARKER: &str = "?";

/// One of the three named positions in `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Coefficient of `x^2`
    A,
    /// Coefficient of `x`
    B,
    /// Constant term
    C,
}

impl Slot {
    /// All slots in prompting order.
    pub const ALL: [Slot; 3] = [Slot::A, Slot::B, Slot::C];

    /// Letter used in prompts, the template and snapshots.
    pub fn symbol(self) -> char {
        match self {
            Slot::A => 'a',
            Slot::B => 'b',
            Slot::C => 'c',
        }
    }

    /// The leading coefficient must never be zero.
    pub fn is_leading(self) -> bool {
        self == Slot::A
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Display value of a slot inside a diagnostic snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    /// No value entered yet
    Unset,
    /// Accepted value
    Set(i32),
    /// Text that was just rejected for this slot
    Rejected(String),
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Unset => write!(f, "{}", UNSET_MARKER),
            SlotValue::Set(value) => write!(f, "{}", value),
            SlotValue::Rejected(input) => write!(f, "{} {}", input, REJECTED_MARKER),
        }
    }
}

/// Coefficient name to display value mapping, attached to errors so the
/// user can see what has been entered so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(Slot, SlotValue)>,
}

impl Snapshot {
    /// Rows in slot order.
    pub fn entries(&self) -> &[(Slot, SlotValue)] {
        &self.entries
    }

    /// Display value recorded for `slot`.
    pub fn get(&self, slot: Slot) -> Option<&SlotValue> {
        self.entries
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, value)| value)
    }
}

/// The coefficient triple being collected. Unset slots are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coefficients {
    a: Option<i32>,
    b: Option<i32>,
    c: Option<i32>,
}

impl Coefficients {
    /// Empty set with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value of `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<i32> {
        match slot {
            Slot::A => self.a,
            Slot::B => self.b,
            Slot::C => self.c,
        }
    }

    /// Store a value in `slot`.
    ///
    /// A zero leading coefficient is rejected and the slot keeps its
    /// previous value.
    pub fn set(&mut self, slot: Slot, value: i32) -> Result<(), QuadraticError> {
        if slot.is_leading() && value == 0 {
            return Err(QuadraticError::ZeroLeadingCoefficient);
        }

        match slot {
            Slot::A => self.a = Some(value),
            Slot::B => self.b = Some(value),
            Slot::C => self.c = Some(value),
        }
        Ok(())
    }

    /// First slot without a value, in prompting order.
    pub fn next_unset(&self) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| self.get(*slot).is_none())
    }

    /// True once `a`, `b` and `c` all hold values.
    pub fn is_complete(&self) -> bool {
        self.next_unset().is_none()
    }

    /// Current values of every slot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            entries: Slot::ALL
                .into_iter()
                .map(|slot| {
                    let value = match self.get(slot) {
                        Some(v) => SlotValue::Set(v),
                        None => SlotValue::Unset,
                    };
                    (slot, value)
                })
                .collect(),
        }
    }

    /// Current values with `input` shown as the rejected text for `slot`.
    pub fn snapshot_rejecting(&self, slot: Slot, input: &str) -> Snapshot {
        let mut snapshot = self.snapshot();
        for (s, value) in snapshot.entries.iter_mut() {
            if *s == slot {
                *value = SlotValue::Rejected(input.to_string());
            }
        }
        snapshot
    }

    /// Turn a fully populated set into a `Quadratic`.
    pub fn complete(&self) -> Result<Quadratic, QuadraticError> {
        match (self.a, self.b, self.c) {
            (Some(a), Some(b), Some(c)) => Quadratic::new(a, b, c),
            _ => Err(QuadraticError::MissingCoefficient {
                slot: self.next_unset().unwrap_or(Slot::A),
                snapshot: self.snapshot(),
            }),
        }
    }
}

/// A quadratic equation `a*x^2 + b*x + c = 0` with `a != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quadratic {
    a: i32,
    b: i32,
    c: i32,
}

impl Quadratic {
    /// Build an equation, rejecting `a == 0`.
    pub fn new(a: i32, b: i32, c: i32) -> Result<Self, QuadraticError> {
        if a == 0 {
            return Err(QuadraticError::ZeroLeadingCoefficient);
        }
        Ok(Quadratic { a, b, c })
    }

    /// Leading coefficient, never zero.
    pub fn a(&self) -> i32 {
        self.a
    }

    /// Coefficient of `x`.
    pub fn b(&self) -> i32 {
        self.b
    }

    /// Constant term.
    pub fn c(&self) -> i32 {
        self.c
    }

    /// `b^2 - 4ac`, exact for every `i32` triple.
    pub fn discriminant(&self) -> i128 {
        let (a, b, c) = (i128::from(self.a), i128::from(self.b), i128::from(self.c));
        b * b - 4 * a * c
    }

    /// Value of the left-hand side at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (f64::from(self.a) * x + f64::from(self.b)) * x + f64::from(self.c)
    }
}
