//! Milestone generation for an adjusted goal target.

use crate::errors::{Error, Result};

use super::milestones_model::{IncomeBracket, Milestone};

/// Builds the ordered milestone list for `adjusted_target`.
///
/// Checkpoints come from the bracket's step sequence and are kept while they
/// are strictly below the target. Once the sequence runs out it repeats,
/// scaled by the ratio of its last step to its first. The target itself is
/// always the final milestone and appears exactly once.
pub fn generate_milestones(adjusted_target: i64, bracket: IncomeBracket) -> Result<Vec<Milestone>> {
    if adjusted_target <= 0 {
        return Err(Error::invalid_input(format!(
            "Milestone target must be positive, got {}",
            adjusted_target
        )));
    }

    let mut milestones: Vec<Milestone> = Checkpoints::new(bracket.interval_steps())
        .take_while(|checkpoint| *checkpoint < adjusted_target)
        .map(Milestone::new)
        .collect();
    milestones.push(Milestone::new(adjusted_target));

    Ok(milestones)
}

/// Flags every milestone whose target has been saved up to.
pub fn mark_reached(milestones: &mut [Milestone], amount_saved: i64) {
    for milestone in milestones.iter_mut() {
        milestone.reached = milestone.target_amount <= amount_saved;
    }
}

/// Strictly increasing checkpoint stream. Ends when the next value would
/// overflow.
struct Checkpoints {
    steps: &'static [i64],
    ratio: i64,
    scale: i64,
    index: usize,
    last: i64,
}

impl Checkpoints {
    fn new(steps: &'static [i64]) -> Self {
        let ratio = match (steps.first(), steps.last()) {
            (Some(first), Some(last)) if *first > 0 => last / first,
            _ => 0,
        };
        Checkpoints {
            steps,
            ratio,
            scale: 1,
            index: 0,
            last: 0,
        }
    }
}

impl Iterator for Checkpoints {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if self.index == self.steps.len() {
                // A sequence that cannot grow is not repeated.
                if self.ratio < 2 {
                    return None;
                }
                self.scale = self.scale.checked_mul(self.ratio)?;
                self.index = 0;
            }

            let value = self.steps.get(self.index)?.checked_mul(self.scale)?;
            self.index += 1;

            if value > self.last {
                self.last = value;
                return Some(value);
            }
        }
    }
}
