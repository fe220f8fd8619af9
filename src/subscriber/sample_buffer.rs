use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::sensors::odometry::PoseSample;

/**
 * Samples parsed on the transport thread and not yet claimed by the consumer.
 * Unbounded: if the consumer stops draining, memory grows with the arrival rate.
 */
#[derive(Debug, Default)]
pub struct SampleBuffer {
    new_samples: Mutex<Vec<PoseSample>>
}

impl SampleBuffer {
    pub fn new() -> SampleBuffer {
        SampleBuffer { new_samples: Mutex::new(Vec::new()) }
    }

    pub fn append(&self, sample: PoseSample) {
        self.lock().push(sample);
    }

    /**
     * Moves every pending sample, in append order, to the tail of target.
     * Leaves target untouched when nothing is pending.
     */
    pub fn drain_into<E: Extend<PoseSample>>(&self, target: &mut E) -> usize {
        // Swap under the lock, extend after releasing it. The replacement keeps the drained capacity.
        let claimed = {
            let mut pending = self.lock();
            let capacity = pending.len();
            mem::replace(&mut *pending, Vec::with_capacity(capacity))
        };
        let count = claimed.len();
        if count > 0 {
            target.extend(claimed);
        }
        count
    }

    // The Vec is never left half-modified by a panicking holder, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<PoseSample>> {
        self.new_samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
