//! Essence element classification.
//!
//! Maps the Key field of an essence KLV triplet to the codec of its samples.
//! Some labels are deliberately codec-free: uncompressed picture and the PCM
//! sound namespaces are valid container labels whose actual sample layout is
//! carried by the essence descriptor set elsewhere in the file. Those resolve
//! to [`EssenceClass::Raw`], which is distinct from an unregistered key.
//!
//! Four sound labels in the table are 13 octets wide; they are matched by
//! truncating the wire key with [`Ul::prefix`] before lookup, the shorter
//! form being its own namespace.

use crate::error::{Error, Result};
use crate::ul::Ul;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Codec Tags
// ============================================================================

/// Essence codec classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// MPEG-2 video.
    Mpeg2,
    /// MPEG-4 part 2 video.
    Mpeg4,
    /// DV video.
    Dv,
    /// JPEG 2000 video.
    J2k,
    /// VC-3 (DNxHD) video.
    Vc3,
    /// H.264/AVC video.
    H264,
    /// V210 packed 10-bit 4:2:2 video.
    V210,
    /// A-law companded audio.
    Alaw,
    /// AC-3 audio.
    Ac3,
    /// MPEG audio (layer 2/3).
    Mp3,
}

impl Codec {
    /// Returns true if this is a video codec.
    pub fn is_video(&self) -> bool {
        matches!(
            self,
            Codec::Mpeg2 | Codec::Mpeg4 | Codec::Dv | Codec::J2k | Codec::Vc3 | Codec::H264
                | Codec::V210
        )
    }

    /// Returns true if this is an audio codec.
    pub fn is_audio(&self) -> bool {
        matches!(self, Codec::Alaw | Codec::Ac3 | Codec::Mp3)
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Codec::Mpeg2 => "MPEG-2",
            Codec::Mpeg4 => "MPEG-4",
            Codec::Dv => "DV",
            Codec::J2k => "JPEG 2000",
            Codec::Vc3 => "VC-3/DNxHD",
            Codec::H264 => "H.264/AVC",
            Codec::V210 => "V210",
            Codec::Alaw => "A-law",
            Codec::Ac3 => "AC-3",
            Codec::Mp3 => "MPEG audio",
        };
        f.write_str(name)
    }
}

/// Result of classifying an essence element key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EssenceClass {
    /// The key names the sample encoding directly.
    Coded(Codec),
    /// The key is recognized but names no fixed encoding; the sample format
    /// comes from the essence descriptor elsewhere in the file.
    Raw,
}

impl EssenceClass {
    /// The codec tag, if the key names one directly.
    pub fn codec(&self) -> Option<Codec> {
        match self {
            EssenceClass::Coded(codec) => Some(*codec),
            EssenceClass::Raw => None,
        }
    }
}

impl fmt::Display for EssenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EssenceClass::Coded(codec) => codec.fmt(f),
            EssenceClass::Raw => f.write_str("raw/descriptor-defined"),
        }
    }
}

// ============================================================================
// Key Table
// ============================================================================

/// The compiled-in essence key table.
///
/// Labels are heterogeneous enough that sharing a prefix constructor does
/// not pay off; each row carries its full octets. The four 13-octet rows
/// are the PCM sound namespaces.
const CODEC_KEYS: &[(Ul, EssenceClass)] = &[
    // MPEG-2 MP@ML long GOP
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03, 0x04, 0x01, 0x02, 0x02, 0x01, 0x01,
            0x11, 0x00,
        ]),
        EssenceClass::Coded(Codec::Mpeg2),
    ),
    // MPEG-2 D-10 PAL
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x01, 0x02, 0x02, 0x01, 0x02,
            0x01, 0x01,
        ]),
        EssenceClass::Coded(Codec::Mpeg2),
    ),
    // MPEG-2 MP@HL
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03, 0x04, 0x01, 0x02, 0x02, 0x01, 0x03,
            0x03, 0x00,
        ]),
        EssenceClass::Coded(Codec::Mpeg2),
    ),
    // MPEG-2 422P@HL interlaced
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03, 0x04, 0x01, 0x02, 0x02, 0x01, 0x04,
            0x02, 0x00,
        ]),
        EssenceClass::Coded(Codec::Mpeg2),
    ),
    // MPEG-4 XDCAM proxy
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03, 0x04, 0x01, 0x02, 0x02, 0x01, 0x20,
            0x02, 0x03,
        ]),
        EssenceClass::Coded(Codec::Mpeg4),
    ),
    // DV25 PAL
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x01, 0x02, 0x02, 0x02, 0x01,
            0x02, 0x00,
        ]),
        EssenceClass::Coded(Codec::Dv),
    ),
    // JPEG 2000
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x07, 0x04, 0x01, 0x02, 0x02, 0x03, 0x01,
            0x01, 0x00,
        ]),
        EssenceClass::Coded(Codec::J2k),
    ),
    // Uncompressed picture, layout from the picture descriptor
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x01, 0x02, 0x01, 0x7f, 0x00,
            0x00, 0x00,
        ]),
        EssenceClass::Raw,
    ),
    // VC-3 (DNxHD)
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x01, 0x02, 0x02, 0x03, 0x02,
            0x00, 0x00,
        ]),
        EssenceClass::Coded(Codec::Vc3),
    ),
    // AVC intra
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x0a, 0x04, 0x01, 0x02, 0x02, 0x01, 0x32,
            0x00, 0x00,
        ]),
        EssenceClass::Coded(Codec::H264),
    ),
    // V210
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x0a, 0x04, 0x01, 0x02, 0x01, 0x01, 0x02,
            0x02, 0x00,
        ]),
        EssenceClass::Coded(Codec::V210),
    ),
    // PCM sound namespaces (13 octets), layout from the sound descriptor
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x02, 0x02, 0x01, 0x00,
        ]),
        EssenceClass::Raw,
    ),
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x02, 0x02, 0x01, 0x01,
        ]),
        EssenceClass::Raw,
    ),
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x02, 0x02, 0x01, 0x7f,
        ]),
        EssenceClass::Raw,
    ),
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x07, 0x04, 0x02, 0x02, 0x01, 0x7e,
        ]),
        EssenceClass::Raw,
    ),
    // A-law
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x04, 0x04, 0x02, 0x02, 0x02, 0x03, 0x01,
            0x01, 0x00,
        ]),
        EssenceClass::Coded(Codec::Alaw),
    ),
    // AC-3
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x02, 0x02, 0x02, 0x03, 0x02,
            0x01, 0x00,
        ]),
        EssenceClass::Coded(Codec::Ac3),
    ),
    // MPEG audio
    (
        Ul::from_slice(&[
            0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x01, 0x04, 0x02, 0x02, 0x02, 0x03, 0x02,
            0x05, 0x00,
        ]),
        EssenceClass::Coded(Codec::Mp3),
    ),
];

// ============================================================================
// Registry
// ============================================================================

/// Immutable mapping from essence keys to [`EssenceClass`].
#[derive(Debug)]
pub struct CodecRegistry {
    map: HashMap<Ul, EssenceClass>,
}

impl CodecRegistry {
    /// Build the registry from the compiled-in table.
    ///
    /// Fails with [`Error::DuplicateRegistration`] if the table maps one
    /// label to two different classes; repeating a label with the same
    /// class is harmless.
    pub fn build() -> Result<Self> {
        let mut registry = Self {
            map: HashMap::with_capacity(CODEC_KEYS.len()),
        };
        for &(ul, class) in CODEC_KEYS {
            registry.register(ul, class)?;
        }
        Ok(registry)
    }

    fn register(&mut self, ul: Ul, class: EssenceClass) -> Result<()> {
        match self.map.insert(ul, class) {
            None => Ok(()),
            Some(existing) if existing == class => Ok(()),
            Some(existing) => Err(Error::DuplicateRegistration {
                ul,
                existing: existing.to_string(),
                incoming: class.to_string(),
            }),
        }
    }

    /// Look up the essence class registered for `key`.
    ///
    /// `Some(EssenceClass::Raw)` and `None` are different answers: the first
    /// is a recognized key whose sample format lives in the descriptor, the
    /// second a key this table does not know at all.
    pub fn lookup(&self, key: &Ul) -> Option<EssenceClass> {
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
