//! # mxfkit
//!
//! Universal Label (UL) classification for MXF KLV demultiplexing.
//!
//! An MXF file is a sequence of KLV triplets: a 16-octet Key naming what the
//! triplet is, an explicit Length, and the payload Value. This crate answers
//! the one question a demuxer asks on every triplet: *what is this key?* It
//! maps keys to a closed set of metadata-set kinds ([`MetadataKind`]) and
//! essence codec tags ([`Codec`]), with a single hash lookup per query.
//!
//! ## Features
//!
//! - **Closed classification**: enums, not reflection — dispatch on the
//!   returned tag is compiler-checked for exhaustiveness
//! - **Unknown is not an error**: private and newer-than-supported keys
//!   resolve to `None` so demuxing can skip them and continue
//! - **Lock-free reads**: registries are built once and immutable after,
//!   safe for any number of parallel demux workers
//!
//! ## Quick Start
//!
//! ```rust
//! use mxfkit::{classify_codec, classify_metadata, EssenceClass, MetadataKind};
//!
//! // Key bytes as read off the wire by the KLV reader.
//! let key = [
//!     0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01,
//!     0x0d, 0x01, 0x01, 0x01, 0x01, 0x01, 0x18, 0x00,
//! ];
//!
//! match classify_metadata(&key) {
//!     Some(MetadataKind::Filler) => { /* skip Length bytes, emit nothing */ }
//!     Some(kind) => assert_eq!(kind, MetadataKind::ContentStorage),
//!     None => { /* vendor/private set: skip or keep as opaque bytes */ }
//! }
//!
//! let essence = [
//!     0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03,
//!     0x04, 0x01, 0x02, 0x02, 0x01, 0x01, 0x11, 0x00,
//! ];
//! assert!(matches!(classify_codec(&essence), Some(EssenceClass::Coded(_))));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod error;
pub mod essence;
pub mod metadata;
pub mod ul;

pub use classify::{classify_codec, classify_metadata};
pub use error::{Error, Result};
pub use essence::{Codec, CodecRegistry, EssenceClass};
pub use metadata::{MetadataKind, MetadataRegistry};
pub use ul::Ul;
