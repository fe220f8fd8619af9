use crate::msg::{Covariance, Header, Pose, Twist, COVARIANCE_SIZE};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PoseWithCovariance {
    pub pose: Pose,
    pub covariance: Covariance
}

impl Default for PoseWithCovariance {
    fn default() -> PoseWithCovariance {
        PoseWithCovariance { pose: Pose::default(), covariance: [0.0; COVARIANCE_SIZE] }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwistWithCovariance {
    pub twist: Twist,
    pub covariance: Covariance
}

impl Default for TwistWithCovariance {
    fn default() -> TwistWithCovariance {
        TwistWithCovariance { twist: Twist::default(), covariance: [0.0; COVARIANCE_SIZE] }
    }
}

/**
 * Raw odometry record as delivered by the transport.
 * The pose is expressed in header.frame_id, the twist in child_frame_id.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Odometry {
    pub header: Header,
    pub child_frame_id: String,
    pub pose: PoseWithCovariance,
    pub twist: TwistWithCovariance
}
