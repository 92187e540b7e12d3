//! Key classification facade.
//!
//! The query surface the demuxer uses on its hot path: hand in the Key
//! octets just read off the wire, get back a tag or `None`. Both functions
//! are pure, never fail, and cost one hash lookup.
//!
//! The two registries behind them are built lazily exactly once and are
//! immutable afterwards, so any number of demux workers can classify keys
//! in parallel without synchronization.
//!
//! # Example
//!
//! ```rust
//! use mxfkit::classify::classify_metadata;
//! use mxfkit::MetadataKind;
//!
//! fn handle_triplet(key: &[u8], _value: &[u8]) {
//!     match classify_metadata(key) {
//!         Some(MetadataKind::Filler) => { /* discard value, emit nothing */ }
//!         Some(_kind) => { /* run the field decoder selected by `_kind` */ }
//!         None => { /* private set: skip, or keep value as opaque bytes */ }
//!     }
//! }
//! # handle_triplet(&[0u8; 16], &[]);
//! ```

use crate::essence::{CodecRegistry, EssenceClass};
use crate::metadata::{MetadataKind, MetadataRegistry};
use crate::ul::{Ul, UL_LEN};
use std::sync::OnceLock;

/// Process-wide metadata registry, built on first use.
fn metadata_registry() -> &'static MetadataRegistry {
    static REGISTRY: OnceLock<MetadataRegistry> = OnceLock::new();
    // The compiled-in table is conflict-free; a failure here means the
    // table was edited incorrectly and is caught by the registry tests.
    REGISTRY.get_or_init(|| MetadataRegistry::build().expect("metadata key table conflict"))
}

/// Process-wide codec registry, built on first use.
fn codec_registry() -> &'static CodecRegistry {
    static REGISTRY: OnceLock<CodecRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| CodecRegistry::build().expect("essence key table conflict"))
}

/// Classify the Key field of a metadata KLV triplet.
///
/// `None` is a normal outcome the caller must handle, covering both keys
/// absent from the table and keys of unexpected width; an MXF file carrying
/// private or newer-than-supported sets must still demux, skipping only the
/// unrecognized structures.
pub fn classify_metadata(key: &[u8]) -> Option<MetadataKind> {
    if key.len() > UL_LEN {
        tracing::trace!("metadata key of unexpected width {}", key.len());
        return None;
    }
    let ul = Ul::from_slice(key);
    let kind = metadata_registry().lookup(&ul);
    if kind.is_none() {
        tracing::trace!("unknown metadata key {}", ul);
    }
    kind
}

/// Classify the Key field of an essence KLV triplet.
///
/// Returns the codec tag, [`EssenceClass::Raw`] for recognized keys whose
/// sample format is supplied by the essence descriptor, or `None` for keys
/// not in the table (including keys of unexpected width).
pub fn classify_codec(key: &[u8]) -> Option<EssenceClass> {
    if key.len() > UL_LEN {
        tracing::trace!("essence key of unexpected width {}", key.len());
        return None;
    }
    let ul = Ul::from_slice(key);
    let class = codec_registry().lookup(&ul);
    if class.is_none() {
        tracing::trace!("unknown essence key {}", ul);
    }
    class
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::essence::Codec;

    #[test]
    fn test_classify_metadata_known_key() {
        let key = [
            0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01,
            0x18, 0x00,
        ];
        assert_eq!(classify_metadata(&key), Some(MetadataKind::ContentStorage));
    }

    #[test]
    fn test_classify_codec_known_key() {
        let key = [
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03, 0x04, 0x01, 0x02, 0x02, 0x01, 0x01,
            0x11, 0x00,
        ];
        assert_eq!(
            classify_codec(&key),
            Some(EssenceClass::Coded(Codec::Mpeg2))
        );
    }

    #[test]
    fn test_classify_unknown_key() {
        let key = [0u8; 16];
        assert_eq!(classify_metadata(&key), None);
        assert_eq!(classify_codec(&key), None);
    }

    #[test]
    fn test_classify_oversized_key_is_unknown() {
        // 17 octets never panics, it is just not a registered key.
        let key = [0x06u8; 17];
        assert_eq!(classify_metadata(&key), None);
        assert_eq!(classify_codec(&key), None);
    }

    #[test]
    fn test_classify_truncated_key_is_unknown() {
        let key = [0x06, 0x0e, 0x2b, 0x34];
        assert_eq!(classify_metadata(&key), None);
        assert_eq!(classify_codec(&key), None);
    }

    #[test]
    fn test_classify_empty_key_is_unknown() {
        assert_eq!(classify_metadata(&[]), None);
        assert_eq!(classify_codec(&[]), None);
    }

    #[test]
    fn test_queries_are_order_independent() {
        let storage = [
            0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01,
            0x18, 0x00,
        ];
        let first = classify_metadata(&storage);
        let _ = classify_metadata(&[0u8; 16]);
        let second = classify_metadata(&storage);
        assert_eq!(first, second);
    }
}
