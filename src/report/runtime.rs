//! The `scylla` report: live metrics and administrative command output from
//! a running node.

use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::collectors::{api, command};

/// One keyspace/column-family pair as listed by the management API. Extra
/// fields in the listing are ignored.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ColumnFamily {
    pub ks: String,
    pub cf: String,
}

/// Collect the server-runtime report: latency histograms, the running
/// version, the column-family listing, and nodetool output including one
/// histogram per `<keyspace>:<column-family>`.
pub fn collect() -> Result<Value> {
    let mut res = super::new_report();

    res.insert(
        "read_latency".to_string(),
        api::api_json("/column_family/metrics/read_latency/moving_average_histogram/"),
    );
    res.insert(
        "write_latency".to_string(),
        api::api_json("/column_family/metrics/write_latency/moving_average_histogram/"),
    );
    res.insert(
        "version".to_string(),
        api::api_json("/storage_service/release_version"),
    );
    let column_family = api::api_json("/column_family");
    res.insert("column_family".to_string(), column_family.clone());

    let mut nt = Map::new();
    for name in ["version", "describecluster"] {
        nt.insert(name.to_string(), json!(command::nodetool(&[name])));
    }
    let mut cfhistograms = Map::new();
    for cf in parse_column_families(&column_family) {
        cfhistograms.insert(
            format!("{}:{}", cf.ks, cf.cf),
            json!(command::nodetool(&["cfhistograms", &cf.ks, &cf.cf])),
        );
    }
    nt.insert("cfhistograms".to_string(), Value::Object(cfhistograms));
    res.insert("nodetool".to_string(), Value::Object(nt));

    Ok(Value::Object(res))
}

/// Decode the column-family listing. An unreachable API or unexpected shape
/// yields no entries rather than failing the report.
fn parse_column_families(listing: &Value) -> Vec<ColumnFamily> {
    serde_json::from_value(listing.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_families() {
        let listing = json!([
            {"ks": "system", "cf": "local", "type": "ColumnFamilies"},
            {"ks": "app", "cf": "users"},
        ]);
        let parsed = parse_column_families(&listing);
        assert_eq!(
            parsed,
            vec![
                ColumnFamily {
                    ks: "system".to_string(),
                    cf: "local".to_string(),
                },
                ColumnFamily {
                    ks: "app".to_string(),
                    cf: "users".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_column_families_degrades_on_failure() {
        assert!(parse_column_families(&Value::Null).is_empty());
        assert!(parse_column_families(&json!({"ks": "not-a-list"})).is_empty());
        assert!(parse_column_families(&json!([{"keyspace": "wrong-shape"}])).is_empty());
    }
}
