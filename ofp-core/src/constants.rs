// =============================================================================
// OpenFlow 1.0 protocol constants
// Ported from the ofp_action_* definitions in openflow.h
// =============================================================================

// --- Action type tags ---

/// Forward to a switch port
pub const ACTION_TYPE_OUTPUT: u16 = 0;
/// Set the 802.1q VLAN id
pub const ACTION_TYPE_SET_VLAN_ID: u16 = 1;
/// Set the 802.1q priority code point
pub const ACTION_TYPE_SET_VLAN_PCP: u16 = 2;
/// Strip the 802.1q header
pub const ACTION_TYPE_STRIP_VLAN: u16 = 3;
/// Rewrite the ethernet source address
pub const ACTION_TYPE_SET_DL_SRC: u16 = 4;
/// Rewrite the ethernet destination address
pub const ACTION_TYPE_SET_DL_DST: u16 = 5;
/// Rewrite the IPv4 source address
pub const ACTION_TYPE_SET_NW_SRC: u16 = 6;
/// Rewrite the IPv4 destination address
pub const ACTION_TYPE_SET_NW_DST: u16 = 7;
/// Rewrite the IPv4 type of service
pub const ACTION_TYPE_SET_NW_TOS: u16 = 8;
/// Rewrite the TCP/UDP source port
pub const ACTION_TYPE_SET_TP_SRC: u16 = 9;
/// Rewrite the TCP/UDP destination port
pub const ACTION_TYPE_SET_TP_DST: u16 = 10;
/// Enqueue on a port's queue
pub const ACTION_TYPE_OPAQUE_ENQUEUE: u16 = 11;
/// Vendor extension
pub const ACTION_TYPE_VENDOR: u16 = 0xffff;

// --- Record sizes ---

/// Common action header: 2 (type tag) + 2 (total length)
pub const ACTION_HEADER_SIZE: usize = 4;

/// Action records are padded to 64-bit boundaries
pub const ACTION_ALIGNMENT: usize = 8;

/// Ethernet hardware address size
pub const ETH_ALEN: usize = 6;

// Fixed record sizes, header and declared pad fields included.
// VENDOR has no fixed size; the wire length delimits its data blob.

/// ofp_action_output: header + port + max_len
pub const OUTPUT_LENGTH: usize = 8;
/// ofp_action_vlan_vid: header + vid + 2 pad
pub const VLAN_ID_LENGTH: usize = 8;
/// ofp_action_vlan_pcp: header + pcp + 3 pad
pub const VLAN_PCP_LENGTH: usize = 8;
/// ofp_action_header: header + 4 pad
pub const STRIP_VLAN_LENGTH: usize = 8;
/// ofp_action_dl_addr: header + mac + 6 pad
pub const DL_ADDR_LENGTH: usize = 16;
/// ofp_action_nw_addr: header + address
pub const NW_ADDR_LENGTH: usize = 8;
/// ofp_action_nw_tos: header + tos + 3 pad
pub const NW_TOS_LENGTH: usize = 8;
/// ofp_action_tp_port: header + port + 2 pad
pub const TP_PORT_LENGTH: usize = 8;
/// ofp_action_enqueue: header + port + 6 pad + queue id
pub const ENQUEUE_LENGTH: usize = 16;
/// ofp_action_vendor_header: header + vendor id
pub const VENDOR_MIN_LENGTH: usize = 8;
