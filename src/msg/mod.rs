use crate::Float;

pub mod odometry;

pub use odometry::{Odometry, PoseWithCovariance, TwistWithCovariance};

pub const COVARIANCE_SIZE: usize = 36;

pub type Covariance = [Float; COVARIANCE_SIZE];

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Time {
    pub sec: u32,
    pub nsec: u32
}

impl Time {
    pub fn new(sec: u32, nsec: u32) -> Time {
        Time { sec, nsec }
    }

    pub fn to_sec(&self) -> Float {
        (self.sec as Float) + (self.nsec as Float)*1e-9
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub seq: u32,
    pub stamp: Time,
    pub frame_id: String
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
    pub z: Float
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3 {
    pub x: Float,
    pub y: Float,
    pub z: Float
}

/**
 * Wire order is x,y,z,w. Default is the identity rotation.
 */
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion {
    pub x: Float,
    pub y: Float,
    pub z: Float,
    pub w: Float
}

impl Default for Quaternion {
    fn default() -> Quaternion {
        Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3
}
