// --- File: rules.rs ---
//! Next-state policies.
//!
//! A rule is picked once when the simulation is built and then applied to
//! every cell of every turn.

use crate::error::LifeError;
use std::fmt;
use std::str::FromStr;

/// Neighbour counts as a bitmask, bit `n` set when count `n` triggers.
pub type CountMask = u16;

const MAX_NEIGHBORS: u8 = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Rule {
    /// B3/S23.
    #[default]
    Conway,
    /// Birth/survival thresholds given as count masks.
    LifeLike { birth: CountMask, survive: CountMask },
}

impl Rule {
    /// HighLife, B36/S23.
    pub const HIGH_LIFE: Rule = Rule::LifeLike {
        birth: mask_of(&[3, 6]),
        survive: mask_of(&[2, 3]),
    };

    /// Next alive state for a cell with `neighbors` alive neighbours (0 to 8).
    #[inline]
    pub fn next_state(self, alive: bool, neighbors: u8) -> bool {
        debug_assert!(neighbors <= MAX_NEIGHBORS, "neighbour count {neighbors} above 8");
        match self {
            Rule::Conway => match neighbors {
                0 | 1 => false,
                2 => alive,
                3 => true,
                _ => false,
            },
            Rule::LifeLike { birth, survive } => {
                let mask = if alive { survive } else { birth };
                mask & (1 << neighbors) != 0
            }
        }
    }

    /// Birth and survival masks equivalent to this rule.
    pub fn masks(self) -> (CountMask, CountMask) {
        match self {
            Rule::Conway => (mask_of(&[3]), mask_of(&[2, 3])),
            Rule::LifeLike { birth, survive } => (birth, survive),
        }
    }
}

pub const fn mask_of(counts: &[u8]) -> CountMask {
    let mut mask = 0;
    let mut i = 0;
    while i < counts.len() {
        mask |= 1 << counts[i];
        i += 1;
    }
    mask
}

fn write_counts(f: &mut fmt::Formatter<'_>, mask: CountMask) -> fmt::Result {
    for count in 0..=MAX_NEIGHBORS {
        if mask & (1 << count) != 0 {
            write!(f, "{count}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (birth, survive) = self.masks();
        f.write_str("B")?;
        write_counts(f, birth)?;
        f.write_str("/S")?;
        write_counts(f, survive)
    }
}

/// Accepts `conway` or a rulestring such as `B36/S23` (either half first).
impl FromStr for Rule {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("conway") {
            return Ok(Rule::Conway);
        }
        let invalid = |reason: &str| LifeError::InvalidRule {
            rule: s.to_string(),
            reason: reason.to_string(),
        };

        let (first, second) = trimmed
            .split_once('/')
            .ok_or_else(|| invalid("expected B<digits>/S<digits>"))?;

        let mut birth = None;
        let mut survive = None;
        for part in [first, second] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(invalid("each half must start with B or S")),
            };
            if slot.is_some() {
                return Err(invalid("B and S may each appear once"));
            }
            let mut mask: CountMask = 0;
            for c in chars {
                let count = c
                    .to_digit(10)
                    .filter(|&d| d <= u32::from(MAX_NEIGHBORS))
                    .ok_or_else(|| invalid("neighbour counts must be digits 0 to 8"))?;
                mask |= 1 << count;
            }
            *slot = Some(mask);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Ok(Rule::LifeLike { birth, survive }),
            _ => Err(invalid("expected B<digits>/S<digits>")),
        }
    }
}


// --- End of File: rules.rs ---
