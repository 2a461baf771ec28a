//! Domain event handling for the web server.
//!
//! Ledger events are written to the tracing pipeline so balance movements,
//! auto-locks and streak milestones show up in the server logs.

mod sink;

pub use sink::TracingDomainEventSink;
