use crate::{Cylinder, Schedule, Scheduler};

/// First come, first served.
///
/// Requests are serviced in the exact order they were issued, without
/// sorting or look-ahead.
#[derive(Debug, Default, Copy, Clone)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Fcfs
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, head: Cylinder, requests: &[Cylinder]) -> Schedule {
        let mut schedule = Schedule::new();
        let mut head = head;
        for &request in requests {
            head = schedule.service(head, request);
        }
        schedule
    }
}
