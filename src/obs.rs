//! Optional observability helpers for request signing and dispatch.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `hod_client.sign` and `hod_client.dispatch` with the
//!   `verb` and `path` fields.
//! - Enable `metrics` to increment `hod_client_sign_total` and `hod_client_dispatch_total` for
//!   every attempt/success/failure, labeled by `verb` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Request lifecycle stages that carry their own span and counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestStage {
	/// Assembling and signing a request.
	Sign,
	/// Handing a signed request to the transport.
	Dispatch,
}
impl RequestStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestStage::Sign => "sign",
			RequestStage::Dispatch => "dispatch",
		}
	}

	/// Counter incremented for this stage.
	pub const fn metric_name(self) -> &'static str {
		match self {
			RequestStage::Sign => "hod_client_sign_total",
			RequestStage::Dispatch => "hod_client_dispatch_total",
		}
	}
}
impl Display for RequestStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a stage.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
