//! Ports layer: trait contracts between the application core and
//! adapters.

mod event_sink;
mod lead_enricher;

pub use event_sink::EventSink;
pub use lead_enricher::LeadEnricher;
