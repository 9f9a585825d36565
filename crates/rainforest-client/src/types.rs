//! Wire types for the run API.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Sentinel the service accepts to run every test on the account.
pub const ALL_TESTS: &str = "all";

/// Selection criterion for which tests to run.
///
/// Serializes to the value of the request body's `"tests"` key: the literal
/// string `"all"`, or a JSON array of the ids in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestFilter {
    /// Run every test on the account.
    AllTests,

    /// Run the listed tests. Order is preserved; emptiness is not enforced.
    TestIds(Vec<u64>),
}

impl Serialize for TestFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::AllTests => serializer.serialize_str(ALL_TESTS),
            Self::TestIds(ids) => ids.serialize(serializer),
        }
    }
}

impl TryFrom<serde_json::Value> for TestFilter {
    type Error = ClientError;

    /// Build a filter from a dynamically-shaped value.
    ///
    /// Accepts the string `"all"` or an array of non-negative integers.
    /// Any other shape is a caller error, rejected before any network call.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) if s == ALL_TESTS => Ok(Self::AllTests),
            serde_json::Value::Array(items) => {
                let mut ids = Vec::with_capacity(items.len());
                for item in &items {
                    match item.as_u64() {
                        Some(id) => ids.push(id),
                        None => {
                            return Err(ClientError::InvalidFilter {
                                message: format!("expected an integer test id, got {item}"),
                            })
                        }
                    }
                }
                Ok(Self::TestIds(ids))
            }
            other => Err(ClientError::InvalidFilter {
                message: format!("expected \"{ALL_TESTS}\" or an array of test ids, got {other}"),
            }),
        }
    }
}

/// Run lifecycle state as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Waiting to be picked up.
    Queued,

    /// Being validated before execution.
    Validating,

    /// Currently executing.
    InProgress,

    /// Finished, all tests passed.
    Passed,

    /// Finished, at least one test failed.
    Failed,

    /// Fully complete.
    Complete,
}

/// Overall run result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunResult {
    /// No result yet.
    NoResult,

    /// All tests passed.
    Passed,

    /// At least one test failed.
    Failed,
}

/// Per-browser enablement/progress state within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserState {
    /// Browser enabled for the run.
    Enabled,

    /// Browser disabled for the run.
    Disabled,

    /// Waiting to start in this browser.
    Queued,

    /// Validating in this browser.
    Validating,

    /// Executing in this browser.
    InProgress,

    /// Passed in this browser.
    Passed,

    /// Failed in this browser.
    Failed,
}

/// A browser entry in a run record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestBrowser {
    /// Browser name (e.g., "chrome").
    pub name: String,

    /// Current state of that browser's testing.
    pub state: BrowserState,
}

/// A run record, returned when a run is created.
///
/// Snapshot of the run at the moment of the response; this client does not
/// poll for later transitions. `browsers` and `requested_tests` keep the
/// order the service returned. Unknown response fields (e.g., `state_log`)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    /// Run id assigned by the service.
    pub id: u64,

    /// Object type marker (always "Run").
    #[serde(rename = "object")]
    pub object_type: String,

    /// Creation timestamp, stored verbatim (ISO-8601, not parsed).
    pub created_at: String,

    /// Environment the run executes in.
    pub environment_id: u64,

    /// Run state at the moment of the response.
    pub state: RunState,

    /// Overall result at the moment of the response.
    pub result: RunResult,

    /// Expected wait before the run starts, in seconds.
    pub expected_wait_time: f64,

    /// Per-browser states, service order preserved.
    pub browsers: Vec<TestBrowser>,

    /// Ids of the requested tests, service order preserved.
    pub requested_tests: Vec<u64>,
}
