pub mod pose_sample;

pub use pose_sample::PoseSample;
