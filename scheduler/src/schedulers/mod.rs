//! The disk scheduling policies.
//!
//! Each policy lives in its own file and is exported here. SCAN and C-SCAN
//! share the downward half of their sweep.

mod fcfs;
pub use fcfs::Fcfs;

mod scan;
pub use scan::Scan;

mod c_scan;
pub use c_scan::CScan;

use crate::{Cylinder, Schedule};

/// Splits the requests around the head and sorts both halves ascending.
///
/// Requests at or below the head go to the left half.
fn partition(head: Cylinder, requests: &[Cylinder]) -> (Vec<Cylinder>, Vec<Cylinder>) {
    let (mut left, mut right): (Vec<Cylinder>, Vec<Cylinder>) =
        requests.iter().copied().partition(|&request| request <= head);
    left.sort_unstable();
    right.sort_unstable();
    log::debug!("partitioned around {head}: left {left:?}, right {right:?}");
    (left, right)
}

/// Services `left` in ascending order, then moves the head to cylinder 0.
///
/// The head always ends on cylinder 0, even when `left` is empty.
fn sweep_down(schedule: &mut Schedule, head: Cylinder, left: &[Cylinder]) -> Cylinder {
    let mut head = head;
    for &request in left {
        head = schedule.service(head, request);
    }
    if head != 0 {
        head = schedule.travel(head, 0);
    }
    head
}
