use panda_teleop_lib::{JointTrajectory, TeleopConfig, JOINT_COUNT};

/// The interrupt character terminating the run loop (Ctrl+C).
pub const ETX: char = '\u{3}';

/// Result of feeding one key to the commander.
#[derive(Debug)]
pub enum KeyOutcome {
    /// A digit key was accepted; publish this trajectory.
    Command(JointTrajectory),
    /// The next digit key will decrement instead of increment.
    SignArmed,
    /// Unmapped key; nothing to do.
    Ignored,
    /// ETX received; stop the run loop.
    Quit,
}

/// Translates single keypresses into absolute joint-position targets.
///
/// Keys `1`..`7` bump the matching joint by one step and snapshot the full
/// position vector into a trajectory command. A `-` arms a negative sign for
/// the single next digit key. Positions accumulate without limit checking.
pub struct JointCommander {
    positions: [f64; JOINT_COUNT],
    step: f64,
    time_from_start: f64,
    negative_next: bool,
}

impl JointCommander {
    pub fn new(config: &TeleopConfig) -> Self {
        Self {
            positions: [0.0; JOINT_COUNT],
            step: config.step,
            time_from_start: config.time_from_start,
            negative_next: false,
        }
    }

    pub fn handle_key(&mut self, key: char) -> KeyOutcome {
        match key {
            '-' => {
                self.negative_next = true;
                KeyOutcome::SignArmed
            }
            '1'..='7' => {
                let index = key as usize - '1' as usize;
                if self.negative_next {
                    self.positions[index] -= self.step;
                    self.negative_next = false;
                } else {
                    self.positions[index] += self.step;
                }
                KeyOutcome::Command(JointTrajectory::single_point(
                    &self.positions,
                    self.time_from_start,
                ))
            }
            ETX => KeyOutcome::Quit,
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn positions(&self) -> &[f64; JOINT_COUNT] {
        &self.positions
    }
}
