use crate::{Cylinder, Schedule, Scheduler};

use super::{partition, sweep_down};

/// The elevator algorithm.
///
/// The head sweeps toward cylinder 0, servicing every request at or below
/// its starting position, always reaches cylinder 0, then reverses and
/// services the remaining requests on the way up.
///
/// The sweep never needs the disk size. It is kept so that every policy is
/// built from the same arguments by [`scheduler`](crate::scheduler), and it
/// shows up in the debug log.
#[derive(Debug, Copy, Clone)]
pub struct Scan {
    cylinders: Cylinder,
}

impl Scan {
    pub fn new(cylinders: Cylinder) -> Self {
        Scan { cylinders }
    }
}

impl Scheduler for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, head: Cylinder, requests: &[Cylinder]) -> Schedule {
        log::debug!("{} from {head} on {} cylinders", self.name(), self.cylinders);
        let (left, right) = partition(head, requests);

        let mut schedule = Schedule::new();
        let mut head = sweep_down(&mut schedule, head, &left);

        for &request in &right {
            head = schedule.service(head, request);
        }
        schedule
    }
}
