use std::sync::Arc;
use color_eyre::eyre::{Result, WrapErr};
use log::trace;

use crate::msg::Odometry;
use crate::sensors::odometry::PoseSample;
use crate::subscriber::SampleBuffer;
use crate::transport::{MessageCallback, Transport, TransportHints};
use crate::IngestorConfig;

/**
 * Buffers odometry delivered on the transport's thread until the consumer drains it.
 * The subscription lives as long as the ingestor.
 */
pub struct OdometryIngestor<S> {
    topic_name: String,
    buffer: Arc<SampleBuffer>,
    _subscription: S
}

impl<S> OdometryIngestor<S> {
    pub fn new<T>(transport: &T, topic_name: &str, buff_size: usize) -> Result<OdometryIngestor<S>>
        where T: Transport<Odometry, Subscription = S> {
        let buffer = Arc::new(SampleBuffer::new());
        let hints = TransportHints::default().tcp_no_delay();
        let subscription = transport.subscribe(topic_name, buff_size, hints, message_callback(Arc::clone(&buffer)))
            .wrap_err_with(|| format!("could not subscribe to {}", topic_name))?;

        Ok(OdometryIngestor {
            topic_name: topic_name.to_string(),
            buffer,
            _subscription: subscription
        })
    }

    pub fn from_config<T>(transport: &T, config: &IngestorConfig) -> Result<OdometryIngestor<S>>
        where T: Transport<Odometry, Subscription = S> {
        OdometryIngestor::new(transport, &config.topic_name, config.buffer_size)
    }

    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /**
     * Appends everything received since the previous drain to pose_data_buff, oldest first.
     */
    pub fn drain<E: Extend<PoseSample>>(&self, pose_data_buff: &mut E) {
        let count = self.buffer.drain_into(pose_data_buff);
        if count > 0 {
            trace!("drained {} samples from {}", count, self.topic_name);
        }
    }
}

fn message_callback(buffer: Arc<SampleBuffer>) -> MessageCallback<Odometry> {
    Arc::new(move |odom: &Odometry| {
        // Parse before taking the buffer lock.
        let sample = PoseSample::from_odometry(odom);
        buffer.append(sample);
    })
}
