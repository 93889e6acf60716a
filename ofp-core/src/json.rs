//! JSON rendering for statistics records.
//!
//! Field names follow the wire names the controller's REST consumers
//! expect. The action list is left unrendered here, matching the
//! reference serializer.
//!
//! Java reference: OFFlowStatisticsReplyJSONSerializer.java

use serde_json::{json, Value};

use crate::stats::FlowStats;

/// Render one flow-statistics entry as a JSON object.
///
/// Counter fields below 64 bits are emitted through the widened
/// accessors, so a table id of 0xff renders as 255, not -1.
pub fn flow_stats_json(stats: &FlowStats) -> Value {
    json!({
        "tableId": stats.table_id_u(),
        "cookie": stats.cookie,
        "priority": stats.priority_u(),
        "length": stats.length_u(),
        "hardTimeout": stats.hard_timeout_u(),
        "idleTimeout": stats.idle_timeout_u(),
        "duration_sec": stats.duration_sec_u(),
        "duration_nsec": stats.duration_nsec_u(),
        "byteCount": stats.byte_count,
        "packetCount": stats.packet_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_field_names_and_widening() {
        let stats = FlowStats {
            length: 96,
            table_id: 0xff,
            duration_sec: 120,
            duration_nsec: 250_000,
            priority: 0xffff,
            idle_timeout: 30,
            hard_timeout: 300,
            cookie: 0x0000_0000_0000_002a,
            packet_count: 1000,
            byte_count: 64_000,
            actions: Vec::new(),
        };

        let value = flow_stats_json(&stats);
        assert_eq!(value["tableId"], 255);
        assert_eq!(value["cookie"], 42);
        assert_eq!(value["priority"], 65535);
        assert_eq!(value["length"], 96);
        assert_eq!(value["hardTimeout"], 300);
        assert_eq!(value["idleTimeout"], 30);
        assert_eq!(value["duration_sec"], 120);
        assert_eq!(value["duration_nsec"], 250_000);
        assert_eq!(value["byteCount"], 64_000);
        assert_eq!(value["packetCount"], 1000);
    }

    #[test]
    fn test_actions_not_rendered() {
        use crate::action::{Action, ActionBody};

        let stats = FlowStats {
            length: 104,
            table_id: 0,
            duration_sec: 0,
            duration_nsec: 0,
            priority: 0,
            idle_timeout: 0,
            hard_timeout: 0,
            cookie: 0,
            packet_count: 0,
            byte_count: 0,
            actions: alloc::vec![Action {
                length: 8,
                body: ActionBody::Output { port: 1, max_len: 0 },
            }],
        };

        let value = flow_stats_json(&stats);
        assert!(value.get("actions").is_none());
        assert_eq!(value.as_object().map(|obj| obj.len()), Some(10));
    }
}
