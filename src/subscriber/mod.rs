pub mod sample_buffer;
pub mod odometry_subscriber;

pub use sample_buffer::SampleBuffer;
pub use odometry_subscriber::OdometryIngestor;
