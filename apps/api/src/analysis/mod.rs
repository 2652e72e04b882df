// Analysis API: upload → text extraction → scoring → report.
// Extraction runs inside tokio::task::spawn_blocking; scoring is inline.

pub mod handlers;
