use crate::problem::{Color, CostKind, InstanceError, ProblemInstance};
use serde_json::{json, Value};

fn base() -> Value {
    json!({
        "resources": 2,
        "times": 3,
        "servers": [
            { "capacity": [10.0, 5.0], "overhead_threshold": [1.0, 0.5] },
            { "capacity": [8.0, 4.0], "overhead_threshold": [0.0, 0.0] }
        ],
        "disks": [
            { "server": 1, "color": "YELLOW",
              "demand": [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
              "insert_cost": [[0.1, 0.2], [0.3, 0.4]],
              "erase_cost": [[0.5, 0.6], [0.7, 0.8]] },
            { "server": 0, "color": "RED", "demand": [[0.0, 0.0, 1.0], [2.0, 0.0, 0.0]] }
        ]
    })
}

fn parse(value: &Value) -> Result<ProblemInstance, InstanceError> {
    ProblemInstance::from_json_str(&value.to_string())
}

#[test]
fn test_parse_valid_instance() {
    let instance = parse(&base()).unwrap();

    assert_eq!(instance.num_disks(), 2);
    assert_eq!(instance.num_servers(), 2);
    assert_eq!(instance.num_resources(), 2);
    assert_eq!(instance.num_times(), 3);

    let initial = instance.initial_distribution();
    assert_eq!(initial[0].server, 1);
    assert_eq!(initial[0].color, Color::Yellow);
    assert_eq!(initial[1].color, Color::Red);

    assert!((instance.threshold_capacity(1, 1) - 4.0).abs() < f64::EPSILON);
    assert!((instance.threshold_overheads()[(0, 1)] - 0.5).abs() < f64::EPSILON);
    assert!((instance.demand(0, 1, 2) - 6.0).abs() < f64::EPSILON);
    assert!((instance.demand(0, 0, 1) - 2.0).abs() < f64::EPSILON);
    assert!((instance.disk_cost(CostKind::Insert, 0, 1, 0) - 0.3).abs() < f64::EPSILON);
    assert!((instance.disk_cost(CostKind::Erase, 0, 0, 1) - 0.6).abs() < f64::EPSILON);
}

#[test]
fn test_missing_costs_default_to_zero() {
    let instance = parse(&base()).unwrap();
    for server in 0..2 {
        for resource in 0..2 {
            assert!(instance.disk_cost(CostKind::Insert, 1, server, resource).abs() < f64::EPSILON);
            assert!(instance.disk_cost(CostKind::Erase, 1, server, resource).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_rejects_malformed_json() {
    let err = ProblemInstance::from_json_str("{ \"resources\": 1").unwrap_err();
    assert!(matches!(err, InstanceError::Parse(_)));

    let mut spec = base();
    spec["disks"][0]["color"] = json!("PURPLE");
    assert!(matches!(parse(&spec), Err(InstanceError::Parse(_))));
}

#[test]
fn test_rejects_empty_dimensions() {
    let mut spec = base();
    spec["servers"] = json!([]);
    assert!(matches!(parse(&spec), Err(InstanceError::Empty("server"))));

    let mut spec = base();
    spec["times"] = json!(0);
    assert!(matches!(parse(&spec), Err(InstanceError::Empty("time period"))));
}

#[test]
fn test_rejects_wrong_dimensions() {
    let mut spec = base();
    spec["disks"][1]["demand"] = json!([[1.0, 2.0, 3.0], [4.0, 5.0]]);

    match parse(&spec) {
        Err(InstanceError::Dimension { what, expected, actual }) => {
            assert_eq!(what, "disks[1].demand[1]");
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("expected dimension error, got {other:?}"),
    }

    let mut spec = base();
    spec["disks"][0]["insert_cost"] = json!([[0.1, 0.2]]);
    assert!(matches!(parse(&spec), Err(InstanceError::Dimension { .. })));

    let mut spec = base();
    spec["servers"][0]["capacity"] = json!([1.0]);
    assert!(matches!(parse(&spec), Err(InstanceError::Dimension { .. })));
}

#[test]
fn test_rejects_unknown_initial_server() {
    let mut spec = base();
    spec["disks"][1]["server"] = json!(2);

    let err = parse(&spec).unwrap_err();
    assert!(matches!(err, InstanceError::ServerOutOfRange { disk: 1, server: 2, servers: 2 }));
    assert_eq!(err.to_string(), "Disk 1 starts on server 2, but only 2 servers exist");
}

#[test]
fn test_rejects_uncolored_disk() {
    let mut spec = base();
    spec["disks"][0]["color"] = json!("NONE");
    assert!(matches!(parse(&spec), Err(InstanceError::UncoloredDisk(0))));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("disk-placement-{}.json", std::process::id()));
    std::fs::write(&path, base().to_string()).unwrap();

    let instance = ProblemInstance::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(instance.num_disks(), 2);
    assert!(ProblemInstance::load(&path).is_err());
}

#[test]
fn test_color_parse_and_order() {
    assert_eq!(serde_json::from_value::<Color>(json!("YELLOW")).unwrap(), Color::Yellow);
    assert!(serde_json::from_value::<Color>(json!("yellow")).is_err());
    assert!(Color::Red > Color::Yellow);
    assert!(Color::Green > Color::None);
    assert_eq!(Color::Green.to_string(), "GREEN");
}

#[test]
fn test_rejects_non_finite_values() {
    let mut spec: crate::problem::InstanceSpec = serde_json::from_value(base()).unwrap();
    spec.servers[1].overhead_threshold[0] = f64::INFINITY;

    match ProblemInstance::from_spec(spec) {
        Err(InstanceError::NonFinite(what)) => assert_eq!(what, "servers[1].overhead_threshold"),
        other => panic!("expected non-finite error, got {other:?}"),
    }
}
