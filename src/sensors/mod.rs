pub mod odometry;
