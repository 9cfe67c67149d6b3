//! Human-readable rendering of backend responses.
//!
//! The backend answers with one of a handful of JSON shapes (per-entity
//! nested counts for "all" operations, flat counts for single-entity
//! ones). Rendering is pure: the full payload is always pretty-printed,
//! and derived count lines are appended only for the fields that are
//! actually present, so unknown payloads degrade to the dump alone.

use serde::Deserialize;
use serde_json::Value;

use crate::routes::Operation;

/// Count fields a backend response may carry, at the top level or
/// nested under `engines` / `launchVehicles`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Counts {
    deleted: Option<u64>,
    seeded: Option<u64>,
    created: Option<u64>,
    updated: Option<u64>,
    total: Option<u64>,
    errors: Option<u64>,
}

impl Counts {
    fn of(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Full results block: header, pretty-printed payload, then any derived
/// count lines for recognized fields.
pub fn render(op: Operation, body: &Value) -> Vec<String> {
    let pretty =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());

    let mut lines = vec!["📊 Results:".to_string(), pretty, String::new()];
    lines.extend(summary_lines(op, body));
    lines
}

/// Derived count lines only; empty when no recognized field is present.
pub fn summary_lines(op: Operation, body: &Value) -> Vec<String> {
    match op {
        Operation::Reseed => reseed_lines(body),
        Operation::Sync => sync_lines(body),
    }
}

fn reseed_lines(body: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(engines) = present(body, "engines") {
        let c = Counts::of(engines);
        lines.push(format!(
            "   🔧 Engines: {} deleted → {} seeded",
            c.deleted.unwrap_or(0),
            c.seeded.unwrap_or(0)
        ));
    }
    if let Some(vehicles) = present(body, "launchVehicles") {
        let c = Counts::of(vehicles);
        lines.push(format!(
            "   🚀 Vehicles: {} deleted → {} seeded",
            c.deleted.unwrap_or(0),
            c.seeded.unwrap_or(0)
        ));
    }
    // Single-entity responses report a flat count instead of the nested
    // per-entity objects.
    let top = Counts::of(body);
    if top.seeded.unwrap_or(0) > 0 {
        lines.push(format!("   📦 Total seeded: {}", top.seeded.unwrap_or(0)));
    }

    lines
}

fn sync_lines(body: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(engines) = present(body, "engines") {
        let c = Counts::of(engines);
        lines.push(format!(
            "   🔧 Engines: {} created, {} updated (total: {})",
            c.created.unwrap_or(0),
            c.updated.unwrap_or(0),
            c.total.unwrap_or(0)
        ));
        if c.errors.unwrap_or(0) > 0 {
            lines.push(format!("      ⚠️  {} errors", c.errors.unwrap_or(0)));
        }
    }
    if let Some(vehicles) = present(body, "launchVehicles") {
        let c = Counts::of(vehicles);
        lines.push(format!(
            "   🚀 Vehicles: {} created, {} updated (total: {})",
            c.created.unwrap_or(0),
            c.updated.unwrap_or(0),
            c.total.unwrap_or(0)
        ));
        if c.errors.unwrap_or(0) > 0 {
            lines.push(format!("      ⚠️  {} errors", c.errors.unwrap_or(0)));
        }
    }

    let top = Counts::of(body);
    if top.created.is_some() {
        lines.push(format!(
            "   📦 Created: {}, Updated: {}, Total: {}",
            top.created.unwrap_or(0),
            top.updated.unwrap_or(0),
            top.total.unwrap_or(0)
        ));
        if top.errors.unwrap_or(0) > 0 {
            lines.push(format!("   ⚠️  Errors: {}", top.errors.unwrap_or(0)));
        }
    }

    lines
}

fn present<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.get(key).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reseed_all_renders_both_entities() {
        let body = json!({
            "engines": { "deleted": 3, "seeded": 10 },
            "launchVehicles": { "deleted": 2, "seeded": 8 },
            "status": "success"
        });

        let lines = summary_lines(Operation::Reseed, &body);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("3 deleted"));
        assert!(lines[0].contains("10 seeded"));
        assert_eq!(lines[1], "   🚀 Vehicles: 2 deleted → 8 seeded");
    }

    #[test]
    fn test_reseed_single_entity_total() {
        let body = json!({
            "status": "success",
            "deleted": 5,
            "seeded": 12,
            "message": "Engines reseeded"
        });

        let lines = summary_lines(Operation::Reseed, &body);
        assert_eq!(lines, vec!["   📦 Total seeded: 12".to_string()]);
    }

    #[test]
    fn test_reseed_zero_seeded_is_silent() {
        let body = json!({ "status": "success", "deleted": 5, "seeded": 0 });
        assert!(summary_lines(Operation::Reseed, &body).is_empty());
    }

    #[test]
    fn test_sync_all_reports_errors_per_entity() {
        let body = json!({
            "engines": { "created": 1, "updated": 2, "total": 3, "errors": 1 },
            "launchVehicles": { "created": 0, "updated": 4, "total": 4, "errors": 0 },
            "status": "completed"
        });

        let lines = summary_lines(Operation::Sync, &body);
        assert_eq!(
            lines,
            vec![
                "   🔧 Engines: 1 created, 2 updated (total: 3)".to_string(),
                "      ⚠️  1 errors".to_string(),
                "   🚀 Vehicles: 0 created, 4 updated (total: 4)".to_string(),
            ]
        );
    }

    #[test]
    fn test_sync_single_entity_flat_counts() {
        let body = json!({
            "status": "completed",
            "created": 0,
            "updated": 4,
            "total": 4,
            "errors": 0
        });

        let lines = summary_lines(Operation::Sync, &body);
        assert_eq!(
            lines,
            vec!["   📦 Created: 0, Updated: 4, Total: 4".to_string()]
        );
    }

    #[test]
    fn test_sync_single_entity_with_errors() {
        let body = json!({ "created": 2, "updated": 1, "total": 5, "errors": 2 });

        let lines = summary_lines(Operation::Sync, &body);
        assert_eq!(lines[1], "   ⚠️  Errors: 2");
    }

    #[test]
    fn test_unknown_payload_falls_back_to_dump() {
        let body = json!({ "status": "ok" });

        assert!(summary_lines(Operation::Sync, &body).is_empty());

        let rendered = render(Operation::Sync, &body);
        assert_eq!(rendered[0], "📊 Results:");
        assert!(rendered[1].contains("\"status\": \"ok\""));
        assert_eq!(rendered[2], "");
        assert_eq!(rendered.len(), 3);
    }

    #[test]
    fn test_nested_counts_tolerate_missing_fields() {
        let body = json!({ "engines": { "seeded": 7 } });

        let lines = summary_lines(Operation::Reseed, &body);
        assert_eq!(lines, vec!["   🔧 Engines: 0 deleted → 7 seeded".to_string()]);
    }

    #[test]
    fn test_null_entity_objects_are_skipped() {
        let body = json!({ "engines": null, "launchVehicles": null });

        assert!(summary_lines(Operation::Reseed, &body).is_empty());
        assert!(summary_lines(Operation::Sync, &body).is_empty());
    }
}
