//! Flow statistics reply records.
//!
//! The per-flow entry a switch returns in a flow-statistics reply. Only
//! the in-memory shape and its accessors live here; the statistics
//! message framing and the flow match are handled by the layer above.
//!
//! Java reference: OFFlowStatisticsReply.java (accessor contract)

use alloc::vec::Vec;

use crate::action::Action;

/// One flow entry of a flow-statistics reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowStats {
    /// Total encoded size of this entry in bytes.
    pub length: u16,
    /// Table the flow resides in.
    pub table_id: u8,
    /// Seconds the flow has been installed.
    pub duration_sec: u32,
    /// Nanoseconds beyond `duration_sec`.
    pub duration_nsec: u32,
    pub priority: u16,
    pub idle_timeout: u16,
    pub hard_timeout: u16,
    /// Opaque controller-issued identifier.
    pub cookie: u64,
    pub packet_count: u64,
    pub byte_count: u64,
    /// The flow's action list, decoded by the action codec.
    pub actions: Vec<Action>,
}

// Wire counters are unsigned; surfacing one through a wider integer type
// must never sign-extend, same as the action header's length handling.
impl FlowStats {
    pub fn length_u(&self) -> u32 {
        u32::from(self.length)
    }

    pub fn table_id_u(&self) -> u16 {
        u16::from(self.table_id)
    }

    pub fn priority_u(&self) -> u32 {
        u32::from(self.priority)
    }

    pub fn idle_timeout_u(&self) -> u32 {
        u32::from(self.idle_timeout)
    }

    pub fn hard_timeout_u(&self) -> u32 {
        u32::from(self.hard_timeout)
    }

    pub fn duration_sec_u(&self) -> u64 {
        u64::from(self.duration_sec)
    }

    pub fn duration_nsec_u(&self) -> u64 {
        u64::from(self.duration_nsec)
    }
}
