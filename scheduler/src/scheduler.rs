use std::fmt::{self, Display};

/// A cylinder number on the disk.
///
/// Valid cylinders lie in `0..n`, where `n` is the disk size. The type is
/// signed so that a head driven outside the disk still steps mechanically
/// instead of wrapping around.
pub type Cylinder = i64;

/// The outcome of a scheduling run.
///
/// Every single-cylinder step the head makes is recorded in [`Schedule::path`],
/// so the total movement is always equal to the length of the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    path: Vec<Cylinder>,
    serviced: Vec<Cylinder>,
    movement: u64,
}

impl Schedule {
    pub fn new() -> Schedule {
        Schedule::default()
    }

    /// Moves the head from `start` to `end` one cylinder at a time.
    ///
    /// Every cylinder after `start` up to and including `end` is appended to
    /// the path and charged one unit of movement. A leg with `start == end`
    /// records nothing. Bounds are not checked.
    ///
    /// Returns `end`, the new head position.
    pub fn travel(&mut self, start: Cylinder, end: Cylinder) -> Cylinder {
        let step = if end > start { 1 } else { -1 };
        let mut pos = start;
        while pos != end {
            pos += step;
            self.path.push(pos);
            self.movement += 1;
        }
        log::trace!("leg {start} -> {end} ({} steps)", start.abs_diff(end));
        end
    }

    /// Moves the head to a request and marks it as serviced.
    pub fn service(&mut self, head: Cylinder, request: Cylinder) -> Cylinder {
        let head = self.travel(head, request);
        self.serviced.push(request);
        head
    }

    /// Every cylinder the head has stepped onto, in order.
    pub fn path(&self) -> &[Cylinder] {
        &self.path
    }

    /// The requests in the order they were serviced.
    pub fn serviced(&self) -> &[Cylinder] {
        &self.serviced
    }

    /// The total head movement, in cylinders.
    pub fn movement(&self) -> u64 {
        self.movement
    }
}

/// Writes the path as space separated cylinders on one line followed by
/// the total movement line.
impl Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cylinders = self.path.iter();
        if let Some(first) = cylinders.next() {
            write!(f, "{first}")?;
            for cylinder in cylinders {
                write!(f, " {cylinder}")?;
            }
        }
        writeln!(f)?;
        write!(f, "Total head movement = {}", self.movement)
    }
}

/// The trait that any disk scheduling policy has to implement.
pub trait Scheduler {
    /// A short name of the policy, used in logs.
    fn name(&self) -> &'static str;

    /// Services all `requests` starting with the head at `head`.
    ///
    /// Implementations must not validate their input: the caller guarantees
    /// that the head and every request lie on the disk.
    fn schedule(&self, head: Cylinder, requests: &[Cylinder]) -> Schedule;
}

/// The policy chosen by the user.
///
/// The numeric selectors are the ones accepted by the interactive menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// First come, first served.
    Fcfs,
    /// Sweep toward cylinder 0, then reverse upward.
    Scan,
    /// Sweep toward cylinder 0, wrap to the last cylinder, then continue downward.
    CScan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Scan, Algorithm::CScan];

    /// Maps a menu selector (`1`, `2` or `3`) to a policy.
    pub fn from_selector(selector: i64) -> Option<Algorithm> {
        match selector {
            1 => Some(Algorithm::Fcfs),
            2 => Some(Algorithm::Scan),
            3 => Some(Algorithm::CScan),
            _ => None,
        }
    }

    pub fn selector(&self) -> i64 {
        match self {
            Algorithm::Fcfs => 1,
            Algorithm::Scan => 2,
            Algorithm::CScan => 3,
        }
    }

    /// The long description shown in the menu.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Scan => "SCAN (toward 0 then up)",
            Algorithm::CScan => "C-SCAN (toward 0, wrap to n-1)",
        }
    }

    /// The line printed above the path of a finished run.
    pub fn header(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS full path:",
            Algorithm::Scan => "SCAN full path (toward 0 then up):",
            Algorithm::CScan => "C-SCAN full path (toward 0, wrap to n-1):",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Scan => write!(f, "SCAN"),
            Algorithm::CScan => write!(f, "C-SCAN"),
        }
    }
}
