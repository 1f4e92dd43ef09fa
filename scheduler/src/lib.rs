//! A disk scheduling library.
//!
//! This library computes the path of a disk head servicing a batch of
//! cylinder requests under the FCFS, SCAN and C-SCAN policies.
//!
//! Every policy returns a [`Schedule`] holding each cylinder the head steps
//! onto and the total head movement.
//!
//! ```rust
//! let schedule = scheduler::scan(50, &[10, 90], 100);
//! assert_eq!(schedule.movement(), 140);
//! ```

mod scheduler;

pub use crate::scheduler::{Algorithm, Cylinder, Schedule, Scheduler};
pub use schedulers::{CScan, Fcfs, Scan};

mod schedulers;

/// Services `requests` in the order given, starting at `head`.
pub fn fcfs(head: Cylinder, requests: &[Cylinder]) -> Schedule {
    Fcfs::new().schedule(head, requests)
}

/// Services `requests` with the SCAN policy on a disk of `cylinders` cylinders.
///
/// * `head` - the starting head position
/// * `requests` - the pending requests; their order does not matter
/// * `cylinders` - the number of cylinders on the disk
pub fn scan(head: Cylinder, requests: &[Cylinder], cylinders: Cylinder) -> Schedule {
    Scan::new(cylinders).schedule(head, requests)
}

/// Services `requests` with the C-SCAN policy on a disk of `cylinders` cylinders.
///
/// * `head` - the starting head position
/// * `requests` - the pending requests; their order does not matter
/// * `cylinders` - the number of cylinders on the disk. The head wraps from
///                 cylinder 0 to `cylinders - 1`.
pub fn c_scan(head: Cylinder, requests: &[Cylinder], cylinders: Cylinder) -> Schedule {
    CScan::new(cylinders).schedule(head, requests)
}

/// Returns the policy implementation for `algorithm` on a disk of `cylinders` cylinders.
pub fn scheduler(algorithm: Algorithm, cylinders: Cylinder) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::Fcfs => Box::new(Fcfs::new()),
        Algorithm::Scan => Box::new(Scan::new(cylinders)),
        Algorithm::CScan => Box::new(CScan::new(cylinders)),
    }
}
