//! Action records: the wire codec and its dispatch table.
//!
//! Every action starts with a 4-byte header, a big-endian type tag and the
//! record's total length in bytes. Known tags decode to typed payloads;
//! an unknown tag decodes to a header-only placeholder so newer actions
//! pass through a list walk without failing.
//!
//! Payload readers consume a fixed, type-specific byte count and do not
//! trust the wire `length` (the vendor data blob being the one
//! length-delimited exception). Walking a record sequence is done by
//! `length`, which also skips alignment padding beyond the bytes a reader
//! understood; see [`unpack_list`].
//!
//! Java reference: OFAction.java, OFActionNetworkLayerAddress.java

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::constants;
use crate::types::{ActionKind, MacAddr, NwAddr, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    TooShort,
    BadRecordLength(u16),
    BadSummaryPrefix(String),
    BadSummaryField(String),
    UnknownTypeName(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::TooShort => write!(f, "Buffer too short for action record"),
            ActionError::BadRecordLength(len) => {
                write!(f, "Invalid action record length {}", len)
            }
            ActionError::BadSummaryPrefix(token) => {
                write!(f, "expected 'ofaction' but got '{}'", token)
            }
            ActionError::BadSummaryField(token) => {
                write!(f, "Malformed action summary field '{}'", token)
            }
            ActionError::UnknownTypeName(name) => {
                write!(f, "Unknown action type name '{}'", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ActionError {}

// =============================================================================
// ActionHeader: the 4-byte common prefix
// =============================================================================

/// The prefix every action record begins with: type tag and total length.
///
/// These 4 bytes are all that is needed to classify a record. The true
/// minimum record size on the wire is 8 including the trailing pad; the
/// list walker skips the difference via `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionHeader {
    pub tag: u16,
    pub length: u16,
}

impl ActionHeader {
    /// Read the header from the first 4 bytes of `data`.
    ///
    /// An unrecognized tag is not an error at this layer; translating it
    /// through the registry happens in [`Action::unpack`].
    pub fn unpack(data: &[u8]) -> Result<ActionHeader, ActionError> {
        ensure_len(data, constants::ACTION_HEADER_SIZE)?;
        Ok(ActionHeader {
            tag: u16::from_be_bytes([data[0], data[1]]),
            length: u16::from_be_bytes([data[2], data[3]]),
        })
    }

    /// Append the mirror 4 bytes.
    pub fn pack_into(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.tag.to_be_bytes());
        buf.extend_from_slice(&self.length.to_be_bytes());
    }

    /// The record length, widened. Never sign-extends: wire bytes `ff ff`
    /// report 65535.
    pub fn length_u(&self) -> u32 {
        u32::from(self.length)
    }
}

// =============================================================================
// Action: one typed record
// =============================================================================

/// A single action record: the wire `length` plus the typed payload.
///
/// `length` is the value read from the wire (or set by the builder) and is
/// what a list walk advances by, even when the payload reader consumed
/// fewer bytes. Keeping it consistent with the payload on encode is the
/// caller's responsibility; [`Action::pack`] performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    pub length: u16,
    pub body: ActionBody,
}

/// Payload shapes, one per type tag.
///
/// Sibling tags sharing a shape (ethernet, IPv4 and transport-port
/// rewrites) are parameterized by [`Side`] rather than duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionBody {
    /// Forward to `port`, sending at most `max_len` bytes to the
    /// controller when the port is the controller port.
    Output { port: u16, max_len: u16 },
    SetVlanId { vid: u16 },
    SetVlanPcp { pcp: u8 },
    StripVlan,
    SetDlAddr { side: Side, addr: MacAddr },
    SetNwAddr { side: Side, addr: NwAddr },
    SetNwTos { tos: u8 },
    SetTpPort { side: Side, port: u16 },
    Enqueue { port: u16, queue_id: u32 },
    Vendor { vendor: u32, data: Vec<u8> },
    /// Header-only placeholder for a tag outside the registry. Cannot be
    /// re-encoded faithfully; [`Action::pack`] emits the header alone.
    Unknown { tag: u16 },
}

impl ActionBody {
    /// The symbolic kind, `None` for a placeholder.
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            ActionBody::Output { .. } => Some(ActionKind::Output),
            ActionBody::SetVlanId { .. } => Some(ActionKind::SetVlanId),
            ActionBody::SetVlanPcp { .. } => Some(ActionKind::SetVlanPcp),
            ActionBody::StripVlan => Some(ActionKind::StripVlan),
            ActionBody::SetDlAddr { side: Side::Source, .. } => Some(ActionKind::SetDlSrc),
            ActionBody::SetDlAddr { side: Side::Destination, .. } => Some(ActionKind::SetDlDst),
            ActionBody::SetNwAddr { side: Side::Source, .. } => Some(ActionKind::SetNwSrc),
            ActionBody::SetNwAddr { side: Side::Destination, .. } => Some(ActionKind::SetNwDst),
            ActionBody::SetNwTos { .. } => Some(ActionKind::SetNwTos),
            ActionBody::SetTpPort { side: Side::Source, .. } => Some(ActionKind::SetTpSrc),
            ActionBody::SetTpPort { side: Side::Destination, .. } => Some(ActionKind::SetTpDst),
            ActionBody::Enqueue { .. } => Some(ActionKind::OpaqueEnqueue),
            ActionBody::Vendor { .. } => Some(ActionKind::Vendor),
            ActionBody::Unknown { .. } => None,
        }
    }
}

impl Action {
    /// Build an action of the given kind with a zeroed payload and the
    /// kind's fixed record length.
    pub fn new(kind: ActionKind) -> Action {
        let body = match kind {
            ActionKind::Output => ActionBody::Output { port: 0, max_len: 0 },
            ActionKind::SetVlanId => ActionBody::SetVlanId { vid: 0 },
            ActionKind::SetVlanPcp => ActionBody::SetVlanPcp { pcp: 0 },
            ActionKind::StripVlan => ActionBody::StripVlan,
            ActionKind::SetDlSrc => ActionBody::SetDlAddr {
                side: Side::Source,
                addr: MacAddr([0; constants::ETH_ALEN]),
            },
            ActionKind::SetDlDst => ActionBody::SetDlAddr {
                side: Side::Destination,
                addr: MacAddr([0; constants::ETH_ALEN]),
            },
            ActionKind::SetNwSrc => ActionBody::SetNwAddr {
                side: Side::Source,
                addr: NwAddr(0),
            },
            ActionKind::SetNwDst => ActionBody::SetNwAddr {
                side: Side::Destination,
                addr: NwAddr(0),
            },
            ActionKind::SetNwTos => ActionBody::SetNwTos { tos: 0 },
            ActionKind::SetTpSrc => ActionBody::SetTpPort { side: Side::Source, port: 0 },
            ActionKind::SetTpDst => ActionBody::SetTpPort { side: Side::Destination, port: 0 },
            ActionKind::OpaqueEnqueue => ActionBody::Enqueue { port: 0, queue_id: 0 },
            ActionKind::Vendor => ActionBody::Vendor { vendor: 0, data: Vec::new() },
        };
        Action { length: kind.min_length(), body }
    }

    /// The symbolic kind, `None` for a placeholder.
    pub fn kind(&self) -> Option<ActionKind> {
        self.body.kind()
    }

    /// The wire tag: the registry constant for a known kind, the raw tag
    /// for a placeholder.
    pub fn tag(&self) -> u16 {
        if let ActionBody::Unknown { tag } = self.body {
            tag
        } else {
            self.kind().map_or(0, ActionKind::to_wire_constant)
        }
    }

    /// The record length, widened; see [`ActionHeader::length_u`].
    pub fn length_u(&self) -> u32 {
        u32::from(self.length)
    }

    /// Decode a single action from the start of `data`.
    ///
    /// Returns the action and the number of bytes consumed. Known kinds
    /// consume their fixed record size regardless of the wire `length`;
    /// an unknown tag consumes only the header and yields a placeholder.
    /// Callers walking a record sequence advance by [`Action::length_u`],
    /// not by the consumed count.
    pub fn unpack(data: &[u8]) -> Result<(Action, usize), ActionError> {
        let header = ActionHeader::unpack(data)?;
        let rest = &data[constants::ACTION_HEADER_SIZE..];

        let kind = match ActionKind::from_wire_constant(header.tag) {
            Some(kind) => kind,
            None => {
                log::debug!("tolerating unknown action type 0x{:04x}", header.tag);
                let action = Action {
                    length: header.length,
                    body: ActionBody::Unknown { tag: header.tag },
                };
                return Ok((action, constants::ACTION_HEADER_SIZE));
            }
        };

        let (body, consumed) = match kind {
            ActionKind::Output => {
                // [port:2][max_len:2]
                ensure_len(rest, 4)?;
                let body = ActionBody::Output {
                    port: u16::from_be_bytes([rest[0], rest[1]]),
                    max_len: u16::from_be_bytes([rest[2], rest[3]]),
                };
                (body, constants::OUTPUT_LENGTH)
            }
            ActionKind::SetVlanId => {
                // [vid:2][pad:2]
                ensure_len(rest, 4)?;
                let body = ActionBody::SetVlanId {
                    vid: u16::from_be_bytes([rest[0], rest[1]]),
                };
                (body, constants::VLAN_ID_LENGTH)
            }
            ActionKind::SetVlanPcp => {
                // [pcp:1][pad:3]
                ensure_len(rest, 4)?;
                (ActionBody::SetVlanPcp { pcp: rest[0] }, constants::VLAN_PCP_LENGTH)
            }
            ActionKind::StripVlan => {
                // [pad:4]
                ensure_len(rest, 4)?;
                (ActionBody::StripVlan, constants::STRIP_VLAN_LENGTH)
            }
            ActionKind::SetDlSrc | ActionKind::SetDlDst => {
                // [mac:6][pad:6]
                ensure_len(rest, 12)?;
                let mut mac = [0u8; constants::ETH_ALEN];
                mac.copy_from_slice(&rest[..constants::ETH_ALEN]);
                let side = if kind == ActionKind::SetDlSrc {
                    Side::Source
                } else {
                    Side::Destination
                };
                let body = ActionBody::SetDlAddr { side, addr: MacAddr(mac) };
                (body, constants::DL_ADDR_LENGTH)
            }
            ActionKind::SetNwSrc | ActionKind::SetNwDst => {
                // [address:4]
                ensure_len(rest, 4)?;
                let raw = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]);
                let side = if kind == ActionKind::SetNwSrc {
                    Side::Source
                } else {
                    Side::Destination
                };
                let body = ActionBody::SetNwAddr { side, addr: NwAddr(raw) };
                (body, constants::NW_ADDR_LENGTH)
            }
            ActionKind::SetNwTos => {
                // [tos:1][pad:3]
                ensure_len(rest, 4)?;
                (ActionBody::SetNwTos { tos: rest[0] }, constants::NW_TOS_LENGTH)
            }
            ActionKind::SetTpSrc | ActionKind::SetTpDst => {
                // [port:2][pad:2]
                ensure_len(rest, 4)?;
                let side = if kind == ActionKind::SetTpSrc {
                    Side::Source
                } else {
                    Side::Destination
                };
                let body = ActionBody::SetTpPort {
                    side,
                    port: u16::from_be_bytes([rest[0], rest[1]]),
                };
                (body, constants::TP_PORT_LENGTH)
            }
            ActionKind::OpaqueEnqueue => {
                // [port:2][pad:6][queue_id:4]
                ensure_len(rest, 12)?;
                let body = ActionBody::Enqueue {
                    port: u16::from_be_bytes([rest[0], rest[1]]),
                    queue_id: u32::from_be_bytes([rest[8], rest[9], rest[10], rest[11]]),
                };
                (body, constants::ENQUEUE_LENGTH)
            }
            ActionKind::Vendor => {
                // [vendor:4][data:length-8], the one length-delimited payload
                let record = header.length_u() as usize;
                if record < constants::VENDOR_MIN_LENGTH {
                    return Err(ActionError::BadRecordLength(header.length));
                }
                ensure_len(data, record)?;
                let vendor = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]);
                let blob = data[constants::VENDOR_MIN_LENGTH..record].to_vec();
                (ActionBody::Vendor { vendor, data: blob }, record)
            }
        };

        Ok((Action { length: header.length, body }, consumed))
    }

    /// Encode this action to fresh wire bytes.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.pack_into(&mut buf);
        buf
    }

    /// Append the header and payload to `buf`.
    ///
    /// The record's own `length` is written as-is; no consistency check
    /// against the payload actually emitted is performed.
    pub fn pack_into(&self, buf: &mut Vec<u8>) {
        let header = ActionHeader { tag: self.tag(), length: self.length };
        header.pack_into(buf);

        match &self.body {
            ActionBody::Output { port, max_len } => {
                buf.extend_from_slice(&port.to_be_bytes());
                buf.extend_from_slice(&max_len.to_be_bytes());
            }
            ActionBody::SetVlanId { vid } => {
                buf.extend_from_slice(&vid.to_be_bytes());
                buf.extend_from_slice(&[0u8; 2]);
            }
            ActionBody::SetVlanPcp { pcp } => {
                buf.push(*pcp);
                buf.extend_from_slice(&[0u8; 3]);
            }
            ActionBody::StripVlan => {
                buf.extend_from_slice(&[0u8; 4]);
            }
            ActionBody::SetDlAddr { addr, .. } => {
                buf.extend_from_slice(&addr.0);
                buf.extend_from_slice(&[0u8; 6]);
            }
            ActionBody::SetNwAddr { addr, .. } => {
                buf.extend_from_slice(&addr.0.to_be_bytes());
            }
            ActionBody::SetNwTos { tos } => {
                buf.push(*tos);
                buf.extend_from_slice(&[0u8; 3]);
            }
            ActionBody::SetTpPort { port, .. } => {
                buf.extend_from_slice(&port.to_be_bytes());
                buf.extend_from_slice(&[0u8; 2]);
            }
            ActionBody::Enqueue { port, queue_id } => {
                buf.extend_from_slice(&port.to_be_bytes());
                buf.extend_from_slice(&[0u8; 6]);
                buf.extend_from_slice(&queue_id.to_be_bytes());
            }
            ActionBody::Vendor { vendor, data } => {
                buf.extend_from_slice(&vendor.to_be_bytes());
                buf.extend_from_slice(data);
            }
            ActionBody::Unknown { .. } => {}
        }
    }

    /// Render the debug text form: `ofaction;t=<TYPE>;l=<LENGTH>`.
    ///
    /// A placeholder renders its raw tag as `t=0x<tag>`. This form carries
    /// header fields only; payloads do not survive the round trip.
    pub fn summary(&self) -> String {
        match self.kind() {
            Some(kind) => format!("ofaction;t={};l={}", kind.name(), self.length),
            None => format!("ofaction;t=0x{:04x};l={}", self.tag(), self.length),
        }
    }

    /// Parse the exact three-token form produced by [`Action::summary`].
    ///
    /// Only kind and length are reconstructed; the payload comes back
    /// zeroed. Placeholder (`t=0x...`) summaries are not accepted.
    pub fn from_summary(text: &str) -> Result<Action, ActionError> {
        let mut tokens = text.split(';');

        let prefix = tokens.next().unwrap_or("");
        if prefix != "ofaction" {
            return Err(ActionError::BadSummaryPrefix(prefix.to_string()));
        }

        let type_token = tokens
            .next()
            .ok_or_else(|| ActionError::BadSummaryField(text.to_string()))?;
        let name = type_token
            .strip_prefix("t=")
            .ok_or_else(|| ActionError::BadSummaryField(type_token.to_string()))?;
        let kind = ActionKind::from_name(name)
            .ok_or_else(|| ActionError::UnknownTypeName(name.to_string()))?;

        let len_token = tokens
            .next()
            .ok_or_else(|| ActionError::BadSummaryField(text.to_string()))?;
        let length: u16 = len_token
            .strip_prefix("l=")
            .and_then(|value| value.parse().ok())
            .ok_or_else(|| ActionError::BadSummaryField(len_token.to_string()))?;

        if tokens.next().is_some() {
            return Err(ActionError::BadSummaryField(text.to_string()));
        }

        let mut action = Action::new(kind);
        action.length = length;
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.body, self.kind()) {
            (ActionBody::SetNwAddr { addr, .. }, Some(kind)) => {
                write!(f, "{}[{}]", kind.name(), addr)
            }
            (ActionBody::SetDlAddr { addr, .. }, Some(kind)) => {
                write!(f, "{}[{}]", kind.name(), addr)
            }
            _ => f.write_str(&self.summary()),
        }
    }
}

// =============================================================================
// Record sequences
// =============================================================================

/// Walk a back-to-back sequence of action records.
///
/// Advances by each record's wire `length`, which also skips any alignment
/// padding beyond the bytes the payload reader understood. A `length`
/// below the 4-byte header is rejected, as is a record extending past the
/// end of the buffer.
pub fn unpack_list(data: &[u8]) -> Result<Vec<Action>, ActionError> {
    let mut actions = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let (action, _) = Action::unpack(&data[offset..])?;
        let advance = action.length_u() as usize;
        if advance < constants::ACTION_HEADER_SIZE {
            log::warn!("action record with length {} at offset {}", action.length, offset);
            return Err(ActionError::BadRecordLength(action.length));
        }
        if offset + advance > data.len() {
            return Err(ActionError::TooShort);
        }
        offset += advance;
        actions.push(action);
    }

    Ok(actions)
}

/// Concatenate the encodings of `actions`.
///
/// Each record's `length` is trusted as-is; see [`Action::pack`].
pub fn pack_list(actions: &[Action]) -> Vec<u8> {
    let mut buf = Vec::new();
    for action in actions {
        action.pack_into(&mut buf);
    }
    buf
}

fn ensure_len(data: &[u8], needed: usize) -> Result<(), ActionError> {
    if data.len() < needed {
        Err(ActionError::TooShort)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = ActionHeader { tag: 0x0007, length: 8 };
        let mut buf = Vec::new();
        header.pack_into(&mut buf);
        assert_eq!(buf, vec![0x00, 0x07, 0x00, 0x08]);
        assert_eq!(ActionHeader::unpack(&buf).unwrap(), header);
    }

    #[test]
    fn test_header_too_short() {
        assert_eq!(ActionHeader::unpack(&[]), Err(ActionError::TooShort));
        assert_eq!(ActionHeader::unpack(&[0x00, 0x07, 0x00]), Err(ActionError::TooShort));
    }

    #[test]
    fn test_header_length_never_sign_extends() {
        // Wire bytes ff ff would be -1 as a signed 16-bit quantity
        let header = ActionHeader::unpack(&[0x00, 0x00, 0xff, 0xff]).unwrap();
        assert_eq!(header.length, 0xffff);
        assert_eq!(header.length_u(), 65535);
    }

    #[test]
    fn test_set_nw_dst_wire_bytes() {
        let action = Action {
            length: 8,
            body: ActionBody::SetNwAddr {
                side: Side::Destination,
                addr: NwAddr(0x0A000001),
            },
        };
        assert_eq!(action.pack(), vec![0x00, 0x07, 0x00, 0x08, 0x0a, 0x00, 0x00, 0x01]);

        let (decoded, consumed) = Action::unpack(&action.pack()).unwrap();
        assert_eq!(decoded, action);
        assert_eq!(consumed, 8);
        assert_eq!(decoded.kind(), Some(ActionKind::SetNwDst));
    }

    #[test]
    fn test_set_nw_src_tag() {
        let action = Action {
            length: 8,
            body: ActionBody::SetNwAddr {
                side: Side::Source,
                addr: NwAddr(0xC0A80101),
            },
        };
        let bytes = action.pack();
        assert_eq!(&bytes[..4], &[0x00, 0x06, 0x00, 0x08]);
        assert_eq!(Action::unpack(&bytes).unwrap().0, action);
    }

    #[test]
    fn test_output_wire_bytes() {
        let action = Action {
            length: 8,
            body: ActionBody::Output { port: 1, max_len: 0xffff },
        };
        assert_eq!(action.pack(), vec![0x00, 0x00, 0x00, 0x08, 0x00, 0x01, 0xff, 0xff]);
        assert_eq!(Action::unpack(&action.pack()).unwrap().0, action);
    }

    #[test]
    fn test_vlan_id_pads_to_eight() {
        let action = Action {
            length: 8,
            body: ActionBody::SetVlanId { vid: 4000 },
        };
        assert_eq!(action.pack(), vec![0x00, 0x01, 0x00, 0x08, 0x0f, 0xa0, 0x00, 0x00]);

        // Decoding ignores whatever sits in the pad bytes
        let dirty = [0x00, 0x01, 0x00, 0x08, 0x0f, 0xa0, 0xde, 0xad];
        let (decoded, consumed) = Action::unpack(&dirty).unwrap();
        assert_eq!(decoded, action);
        assert_eq!(consumed, 8);
    }

    #[test]
    fn test_strip_vlan_wire_bytes() {
        let action = Action { length: 8, body: ActionBody::StripVlan };
        assert_eq!(action.pack(), vec![0x00, 0x03, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(Action::unpack(&action.pack()).unwrap().0, action);
    }

    #[test]
    fn test_dl_addr_wire_bytes() {
        let action = Action {
            length: 16,
            body: ActionBody::SetDlAddr {
                side: Side::Destination,
                addr: MacAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            },
        };
        assert_eq!(
            action.pack(),
            vec![
                0x00, 0x05, 0x00, 0x10, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, 0x00, 0x00,
                0x00, 0x00, 0x00, 0x00,
            ]
        );
        let (decoded, consumed) = Action::unpack(&action.pack()).unwrap();
        assert_eq!(decoded, action);
        assert_eq!(consumed, 16);

        // The source sibling differs only by tag
        let src = Action {
            length: 16,
            body: ActionBody::SetDlAddr {
                side: Side::Source,
                addr: MacAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            },
        };
        assert_eq!(&src.pack()[..2], &[0x00, 0x04]);
    }

    #[test]
    fn test_nw_tos_and_tp_port_wire_bytes() {
        let tos = Action { length: 8, body: ActionBody::SetNwTos { tos: 0xb8 } };
        assert_eq!(tos.pack(), vec![0x00, 0x08, 0x00, 0x08, 0xb8, 0x00, 0x00, 0x00]);
        assert_eq!(Action::unpack(&tos.pack()).unwrap().0, tos);

        let tp = Action {
            length: 8,
            body: ActionBody::SetTpPort { side: Side::Destination, port: 8080 },
        };
        assert_eq!(tp.pack(), vec![0x00, 0x0a, 0x00, 0x08, 0x1f, 0x90, 0x00, 0x00]);
        assert_eq!(Action::unpack(&tp.pack()).unwrap().0, tp);
    }

    #[test]
    fn test_enqueue_wire_bytes() {
        let action = Action {
            length: 16,
            body: ActionBody::Enqueue { port: 3, queue_id: 0xDEADBEEF },
        };
        assert_eq!(
            action.pack(),
            vec![
                0x00, 0x0b, 0x00, 0x10, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
                0xde, 0xad, 0xbe, 0xef,
            ]
        );
        assert_eq!(Action::unpack(&action.pack()).unwrap().0, action);
    }

    #[test]
    fn test_vendor_roundtrip() {
        let action = Action {
            length: 16,
            body: ActionBody::Vendor {
                vendor: 0x00002320,
                data: vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08],
            },
        };
        let bytes = action.pack();
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &[0xff, 0xff, 0x00, 0x10, 0x00, 0x00, 0x23, 0x20]);

        let (decoded, consumed) = Action::unpack(&bytes).unwrap();
        assert_eq!(decoded, action);
        assert_eq!(consumed, 16);
    }

    #[test]
    fn test_vendor_bad_lengths() {
        // Length below the vendor minimum
        assert_eq!(
            Action::unpack(&[0xff, 0xff, 0x00, 0x04]),
            Err(ActionError::BadRecordLength(4))
        );
        // Length runs past the buffer
        assert_eq!(
            Action::unpack(&[0xff, 0xff, 0x00, 0x10, 0x00, 0x00, 0x23, 0x20]),
            Err(ActionError::TooShort)
        );
    }

    #[test]
    fn test_unknown_tag_yields_placeholder() {
        let (action, consumed) = Action::unpack(&[0x01, 0x00, 0x00, 0x04]).unwrap();
        assert_eq!(action.body, ActionBody::Unknown { tag: 0x0100 });
        assert_eq!(action.length, 4);
        assert_eq!(action.kind(), None);
        assert_eq!(action.tag(), 0x0100);
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_unknown_reencodes_header_only() {
        let action = Action { length: 16, body: ActionBody::Unknown { tag: 0x0100 } };
        assert_eq!(action.pack(), vec![0x01, 0x00, 0x00, 0x10]);
    }

    #[test]
    fn test_roundtrip_every_kind() {
        for kind in ActionKind::ALL {
            let action = Action::new(kind);
            let bytes = action.pack();
            assert_eq!(bytes.len() as u16, kind.min_length(), "{}", kind);

            let (decoded, consumed) = Action::unpack(&bytes).unwrap();
            assert_eq!(decoded, action, "{}", kind);
            assert_eq!(consumed as u16, kind.min_length(), "{}", kind);
        }
    }

    #[test]
    fn test_wire_length_is_authoritative_not_consumed() {
        // A SET_NW_DST record claiming 16 bytes: the payload reader still
        // consumes its fixed 8, the length survives for the list walk.
        let mut bytes = vec![0x00, 0x07, 0x00, 0x10, 0x0a, 0x00, 0x00, 0x01];
        bytes.extend_from_slice(&[0u8; 8]);
        let (action, consumed) = Action::unpack(&bytes).unwrap();
        assert_eq!(consumed, 8);
        assert_eq!(action.length, 16);
        assert_eq!(action.length_u(), 16);
    }

    #[test]
    fn test_truncated_payload() {
        assert_eq!(
            Action::unpack(&[0x00, 0x07, 0x00, 0x08, 0x0a]),
            Err(ActionError::TooShort)
        );
        assert_eq!(
            Action::unpack(&[0x00, 0x05, 0x00, 0x10, 0xaa, 0xbb, 0xcc, 0xdd]),
            Err(ActionError::TooShort)
        );
    }

    #[test]
    fn test_length_payload_mismatch_not_validated() {
        // The caller owns length/payload consistency; pack emits as-is.
        let action = Action {
            length: 99,
            body: ActionBody::Output { port: 1, max_len: 0 },
        };
        let bytes = action.pack();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[2..4], &[0x00, 99]);
    }

    #[test]
    fn test_display_forms() {
        let nw = Action {
            length: 8,
            body: ActionBody::SetNwAddr { side: Side::Destination, addr: NwAddr(0x0A000001) },
        };
        assert_eq!(format!("{}", nw), "SET_NW_DST[10.0.0.1]");

        let dl = Action {
            length: 16,
            body: ActionBody::SetDlAddr {
                side: Side::Source,
                addr: MacAddr([0x00, 0x26, 0xe1, 0x00, 0x00, 0x01]),
            },
        };
        assert_eq!(format!("{}", dl), "SET_DL_SRC[00:26:e1:00:00:01]");

        let output = Action { length: 8, body: ActionBody::Output { port: 1, max_len: 0 } };
        assert_eq!(format!("{}", output), "ofaction;t=OUTPUT;l=8");
    }

    #[test]
    fn test_summary_roundtrip_every_kind() {
        for kind in ActionKind::ALL {
            let mut action = Action::new(kind);
            action.length = 0x1234;
            let text = action.summary();
            assert_eq!(Action::from_summary(&text).unwrap(), action, "{}", text);
        }
    }

    #[test]
    fn test_summary_of_placeholder() {
        let action = Action { length: 4, body: ActionBody::Unknown { tag: 0x0100 } };
        assert_eq!(action.summary(), "ofaction;t=0x0100;l=4");
    }

    #[test]
    fn test_from_summary_rejects_bad_prefix() {
        let err = Action::from_summary("notanaction;t=OUTPUT;l=8").unwrap_err();
        assert_eq!(err, ActionError::BadSummaryPrefix("notanaction".into()));
        assert!(format!("{}", err).contains("notanaction"));
    }

    #[test]
    fn test_from_summary_rejects_malformed_fields() {
        assert!(matches!(
            Action::from_summary("ofaction"),
            Err(ActionError::BadSummaryField(_))
        ));
        assert!(matches!(
            Action::from_summary("ofaction;type=OUTPUT;l=8"),
            Err(ActionError::BadSummaryField(_))
        ));
        assert!(matches!(
            Action::from_summary("ofaction;t=OUTPUT"),
            Err(ActionError::BadSummaryField(_))
        ));
        assert!(matches!(
            Action::from_summary("ofaction;t=OUTPUT;l=banana"),
            Err(ActionError::BadSummaryField(_))
        ));
        assert!(matches!(
            Action::from_summary("ofaction;t=OUTPUT;l=8;extra"),
            Err(ActionError::BadSummaryField(_))
        ));
        assert_eq!(
            Action::from_summary("ofaction;t=FLOOD;l=8"),
            Err(ActionError::UnknownTypeName("FLOOD".into()))
        );
    }

    #[test]
    fn test_unpack_list_heterogeneous() {
        let actions = [
            Action { length: 8, body: ActionBody::Output { port: 1, max_len: 128 } },
            Action { length: 8, body: ActionBody::SetVlanId { vid: 100 } },
            Action {
                length: 8,
                body: ActionBody::SetNwAddr { side: Side::Destination, addr: NwAddr(0x0A000001) },
            },
        ];
        let buf = pack_list(&actions);
        assert_eq!(buf.len(), 24);
        assert_eq!(unpack_list(&buf).unwrap(), actions);
    }

    #[test]
    fn test_unpack_list_skips_unknown_padding() {
        // An 8-byte unknown record: only the header is understood, the
        // remaining 4 bytes are skipped via length.
        let mut buf = Vec::new();
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x08, 0x00, 0x01, 0x00, 0x80]);
        buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x08, 0xaa, 0xbb, 0xcc, 0xdd]);
        buf.extend_from_slice(&[0x00, 0x07, 0x00, 0x08, 0x0a, 0x00, 0x00, 0x01]);

        let actions = unpack_list(&buf).unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0].kind(), Some(ActionKind::Output));
        assert_eq!(actions[1].body, ActionBody::Unknown { tag: 0x0100 });
        assert_eq!(actions[1].length, 8);
        assert_eq!(actions[2].kind(), Some(ActionKind::SetNwDst));
    }

    #[test]
    fn test_unpack_list_rejects_zero_length() {
        let buf = [0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(unpack_list(&buf), Err(ActionError::BadRecordLength(0)));
    }

    #[test]
    fn test_unpack_list_rejects_truncated_record() {
        // The record claims 16 bytes, the buffer holds 8
        let buf = [0x00, 0x07, 0x00, 0x10, 0x0a, 0x00, 0x00, 0x01];
        assert_eq!(unpack_list(&buf), Err(ActionError::TooShort));
    }

    #[test]
    fn test_equality_covers_header_and_payload() {
        let a = Action { length: 8, body: ActionBody::SetVlanId { vid: 1 } };
        let b = Action { length: 8, body: ActionBody::SetVlanId { vid: 1 } };
        let c = Action { length: 8, body: ActionBody::SetVlanId { vid: 2 } };
        let d = Action { length: 16, body: ActionBody::SetVlanId { vid: 1 } };
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }
}
