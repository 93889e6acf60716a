//! Typed wrappers for the values actions carry on the wire.
//!
//! These newtypes keep ethernet and IPv4 rewrite targets apart (both are
//! raw byte quantities) and hold the registry mapping numeric type tags
//! to symbolic action kinds.

use core::fmt;

use crate::constants;

/// An ethernet hardware address (6 bytes).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; constants::ETH_ALEN]);

/// An IPv4 address in network byte order.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NwAddr(pub u32);

// --- Display ---

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl fmt::Debug for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddr({})", self)
    }
}

impl fmt::Display for NwAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.to_be_bytes();
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

impl fmt::Debug for NwAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NwAddr({})", self)
    }
}

// --- From raw values ---

impl From<[u8; constants::ETH_ALEN]> for MacAddr {
    fn from(bytes: [u8; constants::ETH_ALEN]) -> Self {
        MacAddr(bytes)
    }
}

impl From<MacAddr> for [u8; constants::ETH_ALEN] {
    fn from(addr: MacAddr) -> Self {
        addr.0
    }
}

impl From<u32> for NwAddr {
    fn from(raw: u32) -> Self {
        NwAddr(raw)
    }
}

impl From<NwAddr> for u32 {
    fn from(addr: NwAddr) -> Self {
        addr.0
    }
}

impl AsRef<[u8; constants::ETH_ALEN]> for MacAddr {
    fn as_ref(&self) -> &[u8; constants::ETH_ALEN] {
        &self.0
    }
}

// --- Enums ---

/// Which end of a flow a rewrite action targets.
///
/// The source/destination sibling tags share one payload shape and differ
/// only by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Destination,
}

/// Symbolic action kind: the registry over the closed tag space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Forward to a switch port.
    Output,
    /// Set the 802.1q VLAN id.
    SetVlanId,
    /// Set the 802.1q priority code point.
    SetVlanPcp,
    /// Strip the 802.1q header.
    StripVlan,
    /// Rewrite the ethernet source address.
    SetDlSrc,
    /// Rewrite the ethernet destination address.
    SetDlDst,
    /// Rewrite the IPv4 source address.
    SetNwSrc,
    /// Rewrite the IPv4 destination address.
    SetNwDst,
    /// Rewrite the IPv4 type of service.
    SetNwTos,
    /// Rewrite the TCP/UDP source port.
    SetTpSrc,
    /// Rewrite the TCP/UDP destination port.
    SetTpDst,
    /// Enqueue on a port's queue.
    OpaqueEnqueue,
    /// Vendor extension.
    Vendor,
}

impl ActionKind {
    /// Every registry member, in wire-tag order.
    pub const ALL: [ActionKind; 13] = [
        ActionKind::Output,
        ActionKind::SetVlanId,
        ActionKind::SetVlanPcp,
        ActionKind::StripVlan,
        ActionKind::SetDlSrc,
        ActionKind::SetDlDst,
        ActionKind::SetNwSrc,
        ActionKind::SetNwDst,
        ActionKind::SetNwTos,
        ActionKind::SetTpSrc,
        ActionKind::SetTpDst,
        ActionKind::OpaqueEnqueue,
        ActionKind::Vendor,
    ];

    /// Convert to the wire tag. Total over the enumeration.
    pub fn to_wire_constant(self) -> u16 {
        match self {
            ActionKind::Output => constants::ACTION_TYPE_OUTPUT,
            ActionKind::SetVlanId => constants::ACTION_TYPE_SET_VLAN_ID,
            ActionKind::SetVlanPcp => constants::ACTION_TYPE_SET_VLAN_PCP,
            ActionKind::StripVlan => constants::ACTION_TYPE_STRIP_VLAN,
            ActionKind::SetDlSrc => constants::ACTION_TYPE_SET_DL_SRC,
            ActionKind::SetDlDst => constants::ACTION_TYPE_SET_DL_DST,
            ActionKind::SetNwSrc => constants::ACTION_TYPE_SET_NW_SRC,
            ActionKind::SetNwDst => constants::ACTION_TYPE_SET_NW_DST,
            ActionKind::SetNwTos => constants::ACTION_TYPE_SET_NW_TOS,
            ActionKind::SetTpSrc => constants::ACTION_TYPE_SET_TP_SRC,
            ActionKind::SetTpDst => constants::ACTION_TYPE_SET_TP_DST,
            ActionKind::OpaqueEnqueue => constants::ACTION_TYPE_OPAQUE_ENQUEUE,
            ActionKind::Vendor => constants::ACTION_TYPE_VENDOR,
        }
    }

    /// Convert from the wire tag. An unmapped tag is not an error here;
    /// tolerating it is the dispatcher's concern.
    pub fn from_wire_constant(tag: u16) -> Option<Self> {
        match tag {
            x if x == constants::ACTION_TYPE_OUTPUT => Some(ActionKind::Output),
            x if x == constants::ACTION_TYPE_SET_VLAN_ID => Some(ActionKind::SetVlanId),
            x if x == constants::ACTION_TYPE_SET_VLAN_PCP => Some(ActionKind::SetVlanPcp),
            x if x == constants::ACTION_TYPE_STRIP_VLAN => Some(ActionKind::StripVlan),
            x if x == constants::ACTION_TYPE_SET_DL_SRC => Some(ActionKind::SetDlSrc),
            x if x == constants::ACTION_TYPE_SET_DL_DST => Some(ActionKind::SetDlDst),
            x if x == constants::ACTION_TYPE_SET_NW_SRC => Some(ActionKind::SetNwSrc),
            x if x == constants::ACTION_TYPE_SET_NW_DST => Some(ActionKind::SetNwDst),
            x if x == constants::ACTION_TYPE_SET_NW_TOS => Some(ActionKind::SetNwTos),
            x if x == constants::ACTION_TYPE_SET_TP_SRC => Some(ActionKind::SetTpSrc),
            x if x == constants::ACTION_TYPE_SET_TP_DST => Some(ActionKind::SetTpDst),
            x if x == constants::ACTION_TYPE_OPAQUE_ENQUEUE => Some(ActionKind::OpaqueEnqueue),
            x if x == constants::ACTION_TYPE_VENDOR => Some(ActionKind::Vendor),
            _ => None,
        }
    }

    /// The symbolic name used in the debug text form.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Output => "OUTPUT",
            ActionKind::SetVlanId => "SET_VLAN_ID",
            ActionKind::SetVlanPcp => "SET_VLAN_PCP",
            ActionKind::StripVlan => "STRIP_VLAN",
            ActionKind::SetDlSrc => "SET_DL_SRC",
            ActionKind::SetDlDst => "SET_DL_DST",
            ActionKind::SetNwSrc => "SET_NW_SRC",
            ActionKind::SetNwDst => "SET_NW_DST",
            ActionKind::SetNwTos => "SET_NW_TOS",
            ActionKind::SetTpSrc => "SET_TP_SRC",
            ActionKind::SetTpDst => "SET_TP_DST",
            ActionKind::OpaqueEnqueue => "OPAQUE_ENQUEUE",
            ActionKind::Vendor => "VENDOR",
        }
    }

    /// Look up a kind by its symbolic name.
    pub fn from_name(name: &str) -> Option<Self> {
        ActionKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// The fixed record size for this kind, header included. For VENDOR
    /// this is the minimum; the wire length delimits the data blob.
    pub fn min_length(self) -> u16 {
        let len = match self {
            ActionKind::Output => constants::OUTPUT_LENGTH,
            ActionKind::SetVlanId => constants::VLAN_ID_LENGTH,
            ActionKind::SetVlanPcp => constants::VLAN_PCP_LENGTH,
            ActionKind::StripVlan => constants::STRIP_VLAN_LENGTH,
            ActionKind::SetDlSrc | ActionKind::SetDlDst => constants::DL_ADDR_LENGTH,
            ActionKind::SetNwSrc | ActionKind::SetNwDst => constants::NW_ADDR_LENGTH,
            ActionKind::SetNwTos => constants::NW_TOS_LENGTH,
            ActionKind::SetTpSrc | ActionKind::SetTpDst => constants::TP_PORT_LENGTH,
            ActionKind::OpaqueEnqueue => constants::ENQUEUE_LENGTH,
            ActionKind::Vendor => constants::VENDOR_MIN_LENGTH,
        };
        len as u16
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
