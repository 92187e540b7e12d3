//! Metadata set classification.
//!
//! Maps the Key field of a header-metadata KLV triplet to a [`MetadataKind`],
//! the closed set of structured records this implementation understands.
//! The table is compiled in and built into a [`MetadataRegistry`] exactly
//! once; lookups are a single hash probe.
//!
//! Unknown keys are a normal outcome, not an error: MXF permits private and
//! vendor metadata sets, and a demuxer must skip those and keep going.

use crate::error::{Error, Result};
use crate::ul::{self, Ul};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Metadata Set Kinds
// ============================================================================

/// Semantic kind of a metadata KLV triplet.
///
/// Each variant selects the field-level decoder the demuxer should run on
/// the triplet's Value bytes. [`MetadataKind::Filler`] is the exception: it
/// carries no payload semantics at all, see [`MetadataKind::produces_set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Preface set, the root of the header metadata graph.
    Preface,
    /// Identification set naming the generating application.
    Identification,
    /// Content storage set linking packages to essence containers.
    ContentStorage,
    /// Essence container data set.
    EssenceContainerData,
    /// Material package, the output timeline.
    MaterialPackage,
    /// Source package describing stored essence.
    SourcePackage,
    /// Track within a package (both track label variants resolve here).
    TimelineTrack,
    /// Sequence of components on a track.
    Sequence,
    /// Source clip referencing essence in another package.
    SourceClip,
    /// Timecode component on a timeline.
    TimecodeComponent,
    /// Index table segment.
    IndexSegment,
    /// Partition pack (header, body or footer).
    PartitionPack,
    /// Run-in padding triplet; the payload carries no semantic content.
    Filler,
    /// Descriptor base set.
    GenericDescriptor,
    /// File descriptor.
    FileDescriptor,
    /// Generic picture essence descriptor.
    GenericPictureEssenceDescriptor,
    /// CDCI (component video) picture descriptor.
    CdciEssenceDescriptor,
    /// RGBA picture descriptor.
    RgbaEssenceDescriptor,
    /// MPEG-2 video descriptor.
    Mpeg2VideoDescriptor,
    /// JPEG 2000 picture descriptor.
    J2kPictureDescriptor,
    /// Generic sound essence descriptor.
    GenericSoundEssenceDescriptor,
    /// Wave audio descriptor.
    WaveAudioDescriptor,
    /// AES3 PCM audio descriptor.
    Aes3PcmDescriptor,
    /// Data essence descriptor (generic, VBI and ANC label variants).
    GenericDataEssenceDescriptor,
}

impl MetadataKind {
    /// True for essence descriptor sets.
    pub fn is_descriptor(&self) -> bool {
        matches!(
            self,
            MetadataKind::GenericDescriptor
                | MetadataKind::FileDescriptor
                | MetadataKind::GenericPictureEssenceDescriptor
                | MetadataKind::CdciEssenceDescriptor
                | MetadataKind::RgbaEssenceDescriptor
                | MetadataKind::Mpeg2VideoDescriptor
                | MetadataKind::J2kPictureDescriptor
                | MetadataKind::GenericSoundEssenceDescriptor
                | MetadataKind::WaveAudioDescriptor
                | MetadataKind::Aes3PcmDescriptor
                | MetadataKind::GenericDataEssenceDescriptor
        )
    }

    /// True for the padding triplet.
    pub fn is_filler(&self) -> bool {
        matches!(self, MetadataKind::Filler)
    }

    /// Whether the triplet's Value bytes encode a set worth decoding.
    ///
    /// `false` only for [`MetadataKind::Filler`]: the caller should consume
    /// and discard Length+Value without constructing anything.
    pub fn produces_set(&self) -> bool {
        !self.is_filler()
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetadataKind::Preface => "Preface",
            MetadataKind::Identification => "Identification",
            MetadataKind::ContentStorage => "Content Storage",
            MetadataKind::EssenceContainerData => "Essence Container Data",
            MetadataKind::MaterialPackage => "Material Package",
            MetadataKind::SourcePackage => "Source Package",
            MetadataKind::TimelineTrack => "Timeline Track",
            MetadataKind::Sequence => "Sequence",
            MetadataKind::SourceClip => "Source Clip",
            MetadataKind::TimecodeComponent => "Timecode Component",
            MetadataKind::IndexSegment => "Index Table Segment",
            MetadataKind::PartitionPack => "Partition Pack",
            MetadataKind::Filler => "KLV Fill",
            MetadataKind::GenericDescriptor => "Generic Descriptor",
            MetadataKind::FileDescriptor => "File Descriptor",
            MetadataKind::GenericPictureEssenceDescriptor => "Generic Picture Essence Descriptor",
            MetadataKind::CdciEssenceDescriptor => "CDCI Essence Descriptor",
            MetadataKind::RgbaEssenceDescriptor => "RGBA Essence Descriptor",
            MetadataKind::Mpeg2VideoDescriptor => "MPEG-2 Video Descriptor",
            MetadataKind::J2kPictureDescriptor => "JPEG 2000 Picture Descriptor",
            MetadataKind::GenericSoundEssenceDescriptor => "Generic Sound Essence Descriptor",
            MetadataKind::WaveAudioDescriptor => "Wave Audio Descriptor",
            MetadataKind::Aes3PcmDescriptor => "AES3 PCM Descriptor",
            MetadataKind::GenericDataEssenceDescriptor => "Generic Data Essence Descriptor",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Key Table
// ============================================================================

/// Header metadata set label: the shared 14-octet prefix plus the two
/// trailing octets that select the set.
const fn set_key(b14: u8, b15: u8) -> Ul {
    Ul::from_slice(&[
        0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01, b14,
        b15,
    ])
}

/// Partition pack label: `kind` is the pack kind octet (0x02 header,
/// 0x03 body, 0x04 footer, 0x05 primer), `status` the open/closed and
/// complete/incomplete octet.
const fn partition_key(kind: u8, status: u8) -> Ul {
    Ul::from_slice(&[
        0x06, 0x0e, 0x2b, 0x34, 0x02, 0x05, 0x01, 0x01, 0x0d, 0x01, 0x02, 0x01, 0x01, kind,
        status, 0x00,
    ])
}

/// The compiled-in metadata key table.
///
/// Several kinds are reachable through more than one label: the two track
/// label variants, the data essence descriptor family, and one partition
/// pack label per kind/status combination.
const METADATA_KEYS: &[(Ul, MetadataKind)] = &[
    // Interchange and package sets
    (set_key(0x2f, 0x00), MetadataKind::Preface),
    (set_key(0x30, 0x00), MetadataKind::Identification),
    (set_key(0x18, 0x00), MetadataKind::ContentStorage),
    (set_key(0x23, 0x00), MetadataKind::EssenceContainerData),
    (set_key(0x36, 0x00), MetadataKind::MaterialPackage),
    (set_key(0x37, 0x00), MetadataKind::SourcePackage),
    (set_key(0x3a, 0x00), MetadataKind::TimelineTrack),
    (set_key(0x3b, 0x00), MetadataKind::TimelineTrack),
    (set_key(0x0f, 0x00), MetadataKind::Sequence),
    (set_key(0x11, 0x00), MetadataKind::SourceClip),
    (set_key(0x14, 0x00), MetadataKind::TimecodeComponent),
    // Descriptors
    (set_key(0x44, 0x00), MetadataKind::GenericDescriptor),
    (set_key(0x25, 0x00), MetadataKind::FileDescriptor),
    (set_key(0x27, 0x00), MetadataKind::GenericPictureEssenceDescriptor),
    (set_key(0x28, 0x00), MetadataKind::CdciEssenceDescriptor),
    (set_key(0x29, 0x00), MetadataKind::RgbaEssenceDescriptor),
    (set_key(0x51, 0x00), MetadataKind::Mpeg2VideoDescriptor),
    (set_key(0x5a, 0x00), MetadataKind::J2kPictureDescriptor),
    (set_key(0x42, 0x00), MetadataKind::GenericSoundEssenceDescriptor),
    (set_key(0x48, 0x00), MetadataKind::WaveAudioDescriptor),
    (set_key(0x47, 0x00), MetadataKind::Aes3PcmDescriptor),
    (set_key(0x43, 0x00), MetadataKind::GenericDataEssenceDescriptor),
    (set_key(0x5b, 0x00), MetadataKind::GenericDataEssenceDescriptor),
    (set_key(0x5c, 0x00), MetadataKind::GenericDataEssenceDescriptor),
    // Index table
    (ul::INDEX_SEGMENT, MetadataKind::IndexSegment),
    // Partition packs, one label per kind/status, plus the primer pack
    (partition_key(0x02, 0x01), MetadataKind::PartitionPack),
    (partition_key(0x02, 0x02), MetadataKind::PartitionPack),
    (partition_key(0x02, 0x03), MetadataKind::PartitionPack),
    (partition_key(0x02, 0x04), MetadataKind::PartitionPack),
    (partition_key(0x03, 0x01), MetadataKind::PartitionPack),
    (partition_key(0x03, 0x02), MetadataKind::PartitionPack),
    (partition_key(0x03, 0x03), MetadataKind::PartitionPack),
    (partition_key(0x03, 0x04), MetadataKind::PartitionPack),
    (partition_key(0x04, 0x02), MetadataKind::PartitionPack),
    (partition_key(0x04, 0x04), MetadataKind::PartitionPack),
    (partition_key(0x05, 0x01), MetadataKind::PartitionPack),
    // Run-in padding
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x01, 0x01, 0x01, 0x02, 0x03, 0x01, 0x02, 0x10, 0x01, 0x00,
            0x00, 0x00,
        ]),
        MetadataKind::Filler,
    ),
];

// ============================================================================
// Registry
// ============================================================================

/// Immutable mapping from metadata keys to [`MetadataKind`].
#[derive(Debug)]
pub struct MetadataRegistry {
    map: HashMap<Ul, MetadataKind>,
}

impl MetadataRegistry {
    /// Build the registry from the compiled-in table.
    ///
    /// Fails with [`Error::DuplicateRegistration`] if the table maps one
    /// label to two different kinds; repeating a label with the same kind
    /// is harmless.
    pub fn build() -> Result<Self> {
        let mut registry = Self {
            map: HashMap::with_capacity(METADATA_KEYS.len()),
        };
        for &(ul, kind) in METADATA_KEYS {
            registry.register(ul, kind)?;
        }
        Ok(registry)
    }

    fn register(&mut self, ul: Ul, kind: MetadataKind) -> Result<()> {
        match self.map.insert(ul, kind) {
            None => Ok(()),
            Some(existing) if existing == kind => Ok(()),
            Some(existing) => Err(Error::DuplicateRegistration {
                ul,
                existing: existing.to_string(),
                incoming: kind.to_string(),
            }),
        }
    }

    /// Look up the kind registered for `key`.
    ///
    /// `None` means the key is not in the table — an expected outcome for
    /// private or newer-than-supported sets.
    pub fn lookup(&self, key: &Ul) -> Option<MetadataKind> {
        self.map.get(key).copied()
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no labels are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_succeeds() {
        let registry = MetadataRegistry::build().unwrap();
        assert_eq!(registry.len(), METADATA_KEYS.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_content_storage_lookup() {
        let registry = MetadataRegistry::build().unwrap();
        let key = Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01,
            0x18, 0x00,
        ]);
        assert_eq!(registry.lookup(&key), Some(MetadataKind::ContentStorage));
    }

    #[test]
    fn test_filler_lookup() {
        let registry = MetadataRegistry::build().unwrap();
        let key = Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x01, 0x01, 0x01, 0x02, 0x03, 0x01, 0x02, 0x10, 0x01, 0x00,
            0x00, 0x00,
        ]);
        let kind = registry.lookup(&key).unwrap();
        assert_eq!(kind, MetadataKind::Filler);
        assert!(kind.is_filler());
        assert!(!kind.produces_set());
    }

    #[test]
    fn test_track_label_variants_share_a_kind() {
        let registry = MetadataRegistry::build().unwrap();
        let a = registry.lookup(&set_key(0x3a, 0x00));
        let b = registry.lookup(&set_key(0x3b, 0x00));
        assert_eq!(a, Some(MetadataKind::TimelineTrack));
        assert_eq!(b, Some(MetadataKind::TimelineTrack));
    }

    #[test]
    fn test_data_descriptor_label_variants() {
        let registry = MetadataRegistry::build().unwrap();
        for tail in [0x43, 0x5b, 0x5c] {
            assert_eq!(
                registry.lookup(&set_key(tail, 0x00)),
                Some(MetadataKind::GenericDataEssenceDescriptor),
                "tail {tail:#04x}"
            );
        }
    }

    #[test]
    fn test_partition_pack_variants() {
        let registry = MetadataRegistry::build().unwrap();
        for (kind, status) in [
            (0x02, 0x01),
            (0x02, 0x04),
            (0x03, 0x02),
            (0x04, 0x04),
            (0x05, 0x01),
        ] {
            assert_eq!(
                registry.lookup(&partition_key(kind, status)),
                Some(MetadataKind::PartitionPack),
            );
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        let registry = MetadataRegistry::build().unwrap();
        assert_eq!(registry.lookup(&Ul::from_slice(&[0u8; 16])), None);
    }

    #[test]
    fn test_register_same_kind_is_idempotent() {
        let mut registry = MetadataRegistry::build().unwrap();
        let before = registry.len();
        registry
            .register(set_key(0x18, 0x00), MetadataKind::ContentStorage)
            .unwrap();
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_register_conflicting_kind_is_rejected() {
        let mut registry = MetadataRegistry::build().unwrap();
        let err = registry
            .register(set_key(0x18, 0x00), MetadataKind::Preface)
            .unwrap_err();
        match err {
            Error::DuplicateRegistration { ul, .. } => {
                assert_eq!(ul, set_key(0x18, 0x00));
            }
        }
    }

    #[test]
    fn test_descriptor_predicate() {
        assert!(MetadataKind::GenericDescriptor.is_descriptor());
        assert!(MetadataKind::WaveAudioDescriptor.is_descriptor());
        assert!(MetadataKind::CdciEssenceDescriptor.is_descriptor());
        assert!(!MetadataKind::Preface.is_descriptor());
        assert!(!MetadataKind::PartitionPack.is_descriptor());
        assert!(!MetadataKind::Filler.is_descriptor());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MetadataKind::Filler.to_string(), "KLV Fill");
        assert_eq!(MetadataKind::ContentStorage.to_string(), "Content Storage");
        assert_eq!(
            MetadataKind::Mpeg2VideoDescriptor.to_string(),
            "MPEG-2 Video Descriptor"
        );
    }
}
