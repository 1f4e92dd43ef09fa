//! A disk scheduling driver library
//!
//! This reads a scheduling job from an input stream, validates it and runs
//! it with a policy from the [`scheduler`] crate.

use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::io::{BufRead, Write};

use scheduler::{Algorithm, Cylinder, Schedule, Scheduler};

/// The ways a job can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Initial head position must be non-negative.")]
    NegativeHead(i64),

    #[error(
        "Number of cylinders ({cylinders}) must be greater than initial head position ({head})."
    )]
    DiskTooSmall { cylinders: i64, head: i64 },

    #[error("Invalid algorithm choice")]
    InvalidAlgorithm(i64),

    #[error("Number of requests ({0}) must be non-negative.")]
    NegativeRequestCount(i64),

    #[error("Request {request} is out of range 0..{max}")]
    RequestOutOfRange { request: i64, max: i64 },

    #[error("Unexpected end of input while reading the {0}.")]
    MissingInput(&'static str),

    #[error("Expected an integer for the {field}, got `{token}`.")]
    Malformed { field: &'static str, token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that the initial head position can sit on a disk.
pub fn validate_head(head: i64) -> Result<Cylinder> {
    if head < 0 {
        return Err(Error::NegativeHead(head));
    }
    Ok(head)
}

/// Whitespace separated integers read from a stream.
///
/// Lines are pulled from the reader only when the tokens already read
/// have been used up, so a job can be typed interactively.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads the next integer.
    ///
    /// * `field` - what the integer stands for, used in error messages.
    pub fn next_int(&mut self, field: &'static str) -> Result<i64> {
        let token = self.next_token()?.ok_or(Error::MissingInput(field))?;
        token
            .parse::<i64>()
            .map_err(|_| Error::Malformed { field, token })
    }
}

/// A validated scheduling job.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// The initial head position.
    pub head: Cylinder,

    /// The number of cylinders on the disk.
    pub cylinders: Cylinder,

    /// The policy used to service the requests.
    pub algorithm: Algorithm,

    /// The requested cylinders, in arrival order.
    pub requests: Vec<Cylinder>,
}

impl Job {
    /// Runs the job with its policy.
    pub fn run(&self) -> Report {
        let scheduler = scheduler::scheduler(self.algorithm, self.cylinders);
        let schedule = scheduler.schedule(self.head, &self.requests);
        log::info!(
            "{} head={} cylinders={} requests={} movement={}",
            scheduler.name(),
            self.head,
            self.cylinders,
            self.requests.len(),
            schedule.movement()
        );
        Report {
            algorithm: self.algorithm,
            schedule,
        }
    }
}

/// The result of a job.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub algorithm: Algorithm,
    pub schedule: Schedule,
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.algorithm.header())?;
        write!(f, "{}", self.schedule)
    }
}

/// The driver.
///
/// Reads a job from `input`, writing the prompts and the final report to
/// `output`.
pub struct Processor<R, W> {
    tokens: Tokens<R>,
    output: W,
    prompt: bool,
}

impl<R: BufRead, W: Write> Processor<R, W> {
    pub fn new(input: R, output: W) -> Processor<R, W> {
        Processor {
            tokens: Tokens::new(input),
            output,
            prompt: true,
        }
    }

    /// Turns the interactive prompts on or off.
    pub fn prompt(mut self, prompt: bool) -> Processor<R, W> {
        self.prompt = prompt;
        self
    }

    /// Reads a job, runs it and writes its report.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    ///
    /// let mut output = Vec::new();
    /// let report = Processor::new("100 2 2 10 90".as_bytes(), &mut output)
    ///     .prompt(false)
    ///     .run(50)
    ///     .unwrap();
    /// assert_eq!(report.schedule.movement(), 140);
    /// ```
    pub fn run(mut self, head: i64) -> Result<Report> {
        let job = self.read_job(head)?;
        let report = job.run();
        writeln!(self.output)?;
        writeln!(self.output, "{report}")?;
        self.output.flush()?;
        Ok(report)
    }

    /// Reads and validates a job, failing on the first invalid value.
    pub fn read_job(&mut self, head: i64) -> Result<Job> {
        let head = validate_head(head)?;

        self.say("Enter number of cylinders (0 to n-1): ")?;
        let cylinders = self.tokens.next_int("number of cylinders")?;
        if cylinders <= head {
            return Err(Error::DiskTooSmall { cylinders, head });
        }

        if self.prompt {
            writeln!(self.output, "Choose algorithm:")?;
            for algorithm in Algorithm::ALL {
                writeln!(
                    self.output,
                    "  {}) {}",
                    algorithm.selector(),
                    algorithm.description()
                )?;
            }
        }
        self.say("Enter choice [1-3]: ")?;
        let selector = self.tokens.next_int("algorithm choice")?;
        let algorithm =
            Algorithm::from_selector(selector).ok_or(Error::InvalidAlgorithm(selector))?;

        self.say("Enter number of requests: ")?;
        let count = self.tokens.next_int("number of requests")?;
        if count < 0 {
            return Err(Error::NegativeRequestCount(count));
        }

        self.say("Enter the requested cylinder numbers:\n")?;
        let mut requests = Vec::new();
        for _ in 0..count {
            let request = self.tokens.next_int("requested cylinder")?;
            if !(0..cylinders).contains(&request) {
                return Err(Error::RequestOutOfRange {
                    request,
                    max: cylinders - 1,
                });
            }
            requests.push(request);
        }
        log::debug!("read {algorithm} job with {} requests", requests.len());

        Ok(Job {
            head,
            cylinders,
            algorithm,
            requests,
        })
    }

    fn say(&mut self, prompt: &str) -> Result<()> {
        if self.prompt {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }
        Ok(())
    }
}
