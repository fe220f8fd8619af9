use nalgebra as na;

use na::{Vector3,Matrix3,Matrix4,Matrix6,Isometry3};
use crate::msg::{Covariance,Odometry};
use crate::numerics::pose;
use crate::Float;

/**
 * Timestamped pose with velocities and a row-major 6x6 covariance.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct PoseSample {
    pub timestamp: Float,
    pub pose: Matrix4<Float>,
    pub linear_velocity: Vector3<Float>,
    pub angular_velocity: Vector3<Float>,
    pub covariance: Covariance
}

impl PoseSample {

    pub fn from_odometry(odom: &Odometry) -> PoseSample {
        let position = &odom.pose.pose.position;
        let q = &odom.pose.pose.orientation;
        let linear = &odom.twist.twist.linear;
        let angular = &odom.twist.twist.angular;

        let translation = Vector3::<Float>::new(position.x,position.y,position.z);
        let rotation = pose::rotation_from_xyzw(q.x,q.y,q.z,q.w);

        PoseSample {
            timestamp: odom.header.stamp.to_sec(),
            pose: pose::se3(&translation,&rotation),
            linear_velocity: Vector3::<Float>::new(linear.x,linear.y,linear.z),
            angular_velocity: Vector3::<Float>::new(angular.x,angular.y,angular.z),
            covariance: *select_covariance(odom)
        }
    }

    pub fn position(&self) -> Vector3<Float> {
        pose::decomp(&self.pose).0
    }

    pub fn rotation(&self) -> Matrix3<Float> {
        pose::decomp(&self.pose).1
    }

    pub fn isometry(&self) -> Isometry3<Float> {
        pose::from_matrix(&self.pose)
    }

    pub fn covariance_matrix(&self) -> Matrix6<Float> {
        pose::covariance_from_row_major(&self.covariance)
    }
}

impl From<&Odometry> for PoseSample {
    fn from(odom: &Odometry) -> PoseSample {
        PoseSample::from_odometry(odom)
    }
}

/**
 * Twist covariance counts as populated iff its first diagonal entry is strictly positive,
 * otherwise the pose covariance is used. Only entry 0 is inspected.
 */
pub fn select_covariance(odom: &Odometry) -> &Covariance {
    match odom.twist.covariance[0] > 0.0 {
        true => &odom.twist.covariance,
        false => &odom.pose.covariance
    }
}
