//! Workflow services built on the ports.

mod dispatch;
mod workflow;

pub use dispatch::{EventOutcome, GatewayEvent};
pub use workflow::ApplicationWorkflow;
