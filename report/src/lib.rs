//! Pass/fail bookkeeping for checks that should all run even when some fail.
//!
//! A `TestReport` collects results as data; the caller decides how to present them.

use serde_derive::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Failure {
    pub name: String,
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TestReport {
    passed: u32,
    failures: Vec<Failure>,
}

impl TestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn record_failure(&mut self, name: &str, detail: impl Into<String>) {
        self.failures.push(Failure {
            name: name.to_owned(),
            detail: detail.into(),
        });
    }

    /// Records a pass if `condition` holds, otherwise a failure.
    ///
    /// `detail` is only evaluated on failure.
    pub fn check<D>(&mut self, name: &str, condition: bool, detail: D) -> bool
    where
        D: FnOnce() -> String,
    {
        if condition {
            self.record_pass();
        } else {
            self.record_failure(name, detail());
        }
        condition
    }

    /// Records the outcome of a fallible step, using the error's `Display` as the detail.
    pub fn check_result<T, E>(&mut self, name: &str, result: Result<T, E>) -> Option<T>
    where
        E: fmt::Display,
    {
        match result {
            Ok(value) => {
                self.record_pass();
                Some(value)
            }
            Err(e) => {
                self.record_failure(name, e.to_string());
                None
            }
        }
    }

    pub fn merge(&mut self, other: TestReport) {
        self.passed += other.passed;
        self.failures.extend(other.failures);
    }

    pub fn passed(&self) -> u32 {
        self.passed
    }

    pub fn failed(&self) -> u32 {
        self.failures.len() as u32
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for TestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed ({} total)",
            self.passed,
            self.failed(),
            self.total()
        )?;
        for failure in self.failures.iter() {
            write!(f, "\n  {}: {}", failure.name, failure.detail)?;
        }
        Ok(())
    }
}
