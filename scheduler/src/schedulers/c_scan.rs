use crate::{Cylinder, Schedule, Scheduler};

use super::{partition, sweep_down};

/// Circular SCAN.
///
/// The downward sweep is the same as [`Scan`](super::Scan). Once the head
/// reaches cylinder 0 it jumps to the last cylinder, paying the full
/// distance, and keeps moving downward through the remaining requests.
#[derive(Debug, Copy, Clone)]
pub struct CScan {
    cylinders: Cylinder,
}

impl CScan {
    pub fn new(cylinders: Cylinder) -> Self {
        CScan { cylinders }
    }
}

impl Scheduler for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, head: Cylinder, requests: &[Cylinder]) -> Schedule {
        log::debug!("{} from {head} on {} cylinders", self.name(), self.cylinders);
        let (left, right) = partition(head, requests);

        let mut schedule = Schedule::new();
        let head = sweep_down(&mut schedule, head, &left);

        // the wrap is charged even when nothing is waiting above the head
        let mut head = schedule.travel(head, self.cylinders - 1);
        log::debug!("wrapped to cylinder {head}");

        for &request in right.iter().rev() {
            head = schedule.service(head, request);
        }
        schedule
    }
}
