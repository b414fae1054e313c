use serde::{Deserialize, Serialize};

/// Number of joints in the Panda kinematic chain.
pub const JOINT_COUNT: usize = 7;

/// Canonical joint names, in kinematic-chain order. The external controller
/// expects positions in exactly this order.
pub const PANDA_JOINT_NAMES: [&str; JOINT_COUNT] = [
    "panda_joint1",
    "panda_joint2",
    "panda_joint3",
    "panda_joint4",
    "panda_joint5",
    "panda_joint6",
    "panda_joint7",
];

/// A single target waypoint for all joints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub positions: Vec<f64>,
    /// Time allotted to reach the target, in seconds.
    pub time_from_start: f64,
}

/// Joint trajectory command published to the arm controller.
///
/// Always carries the full 7-joint name list and exactly one waypoint
/// snapshotting all positions. Never a delta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointTrajectory {
    pub joint_names: Vec<String>,
    pub points: Vec<TrajectoryPoint>,
}

impl JointTrajectory {
    /// Build a single-waypoint trajectory from the current position vector.
    pub fn single_point(positions: &[f64; JOINT_COUNT], time_from_start: f64) -> Self {
        Self {
            joint_names: PANDA_JOINT_NAMES.iter().map(|n| n.to_string()).collect(),
            points: vec![TrajectoryPoint {
                positions: positions.to_vec(),
                time_from_start,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_snapshot() {
        let positions = [0.0, 0.0, 0.1, 0.0, 0.0, 0.0, -0.2];
        let trajectory = JointTrajectory::single_point(&positions, 1.0);

        assert_eq!(trajectory.joint_names.len(), JOINT_COUNT);
        assert_eq!(trajectory.joint_names[0], "panda_joint1");
        assert_eq!(trajectory.joint_names[6], "panda_joint7");
        assert_eq!(trajectory.points.len(), 1);
        assert_eq!(trajectory.points[0].positions, positions.to_vec());
        assert_eq!(trajectory.points[0].time_from_start, 1.0);
    }

    #[test]
    fn test_wire_shape() {
        let positions = [0.0; JOINT_COUNT];
        let trajectory = JointTrajectory::single_point(&positions, 1.0);

        let value = serde_json::to_value(&trajectory).unwrap();
        assert_eq!(value["joint_names"][3], "panda_joint4");
        assert_eq!(value["points"][0]["positions"].as_array().unwrap().len(), 7);
        assert_eq!(value["points"][0]["time_from_start"], 1.0);
    }

    #[test]
    fn test_snapshot_is_detached_from_source() {
        let mut positions = [0.0; JOINT_COUNT];
        let trajectory = JointTrajectory::single_point(&positions, 1.0);
        positions[0] = 0.1;

        assert_eq!(trajectory.points[0].positions[0], 0.0);
    }
}
