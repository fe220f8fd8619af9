extern crate odom_ingest;
extern crate nalgebra as na;

use color_eyre::eyre::Result;
use std::collections::VecDeque;
use std::{thread, time::Duration};
use na::{UnitQuaternion, Vector3};
use odom_ingest::msg::{Odometry, Quaternion, Time};
use odom_ingest::sensors::odometry::PoseSample;
use odom_ingest::subscriber::OdometryIngestor;
use odom_ingest::transport::LocalTransport;
use odom_ingest::{Float, IngestorConfig};

fn main() -> Result<()> {
    color_eyre::install()?;
    let config = IngestorConfig::default();

    let transport = LocalTransport::<Odometry>::new();
    let ingestor = OdometryIngestor::from_config(&transport, &config)?;
    let mut pose_data_buff = VecDeque::<PoseSample>::new();

    thread::scope(|s| {
        let publisher = transport.clone();
        let topic = config.topic_name.clone();
        s.spawn(move || {
            // Circle of radius 1 at 50 Hz
            for i in 0..100u32 {
                let t = i as Float * 0.02;
                let q = UnitQuaternion::<Float>::from_axis_angle(&Vector3::z_axis(), t);
                let mut odom = Odometry::default();
                odom.header.stamp = Time::new(i / 50, (i % 50) * 20_000_000);
                odom.pose.pose.position.x = t.cos();
                odom.pose.pose.position.y = t.sin();
                odom.pose.pose.orientation = Quaternion { x: q.i, y: q.j, z: q.k, w: q.w };
                odom.twist.twist.linear.x = 1.0;
                odom.twist.twist.angular.z = 1.0;
                odom.pose.covariance[0] = 0.01;
                publisher.publish(&topic, &odom);
                thread::sleep(Duration::from_millis(2));
            }
        });

        for cycle in 0..10 {
            thread::sleep(Duration::from_millis(25));
            let before = pose_data_buff.len();
            ingestor.drain(&mut pose_data_buff);
            println!("cycle {}: drained {} samples", cycle, pose_data_buff.len() - before);
        }
    });

    ingestor.drain(&mut pose_data_buff);
    if let Some(last) = pose_data_buff.back() {
        println!("{} samples, last at t = {}: position {}", pose_data_buff.len(), last.timestamp, last.position().transpose());
    }
    Ok(())
}
