//! Collaborators around the engine: where text comes from and where tokens go.
//!
//! ```text
//! address ── source::resolve ──▶ Vec<Source> ── Source::load ──▶ String
//!                                  │ (url)                         │
//!                                  └─ web::fetch + clean_html ─────┤
//!                                                                  v
//!                                       ChunkReader (batches of lines)
//!                                                                  │
//!                                        Normalizer::normalize_chunk
//!                                                                  v
//!                                   sink::TokenFile (tokensN.txt)
//! ```
//!
//! `connect` is a separate utility that glues the files of a directory into
//! one text file, so a whole folder can be fed through as a single source.

#[path = "io/connect.rs"]
pub mod connect;
#[path = "io/sink.rs"]
pub mod sink;
#[path = "io/source.rs"]
pub mod source;
#[path = "io/web.rs"]
pub mod web;

pub use connect::{ConnectReport, connect};
pub use sink::TokenFile;
pub use source::{ChunkReader, Encoding, Resolved, Source, TextChunk, resolve, resolve_list};
