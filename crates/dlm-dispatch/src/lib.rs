//! # dlm-dispatch
//!
//! Turns caller parameters into validated analytics payloads and appends
//! them to an [`EventSink`]:
//!
//! 1. look the event up in a [`dlm_schema::TemplateCatalog`]
//! 2. merge, validate and normalize with [`dlm_walk::merge_validate_normalize`]
//! 3. stamp the classification field from the page path when it is empty
//! 4. append to the sink
//!
//! Failed pushes never reach the sink.

pub mod dispatcher;
pub mod error;
pub mod section;
pub mod sink;

pub use dispatcher::{Dispatcher, Receipt};
pub use error::{DispatchError, SinkError};
pub use section::SectionResolver;
pub use sink::{EventSink, JsonlSink, LoggedEvent, MemorySink};
