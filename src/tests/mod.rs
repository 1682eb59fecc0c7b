mod problem_tests;

use crate::problem::ProblemInstance;
use serde_json::{json, Value};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

fn instance(spec: Value) -> ProblemInstance {
    ProblemInstance::from_spec(serde_json::from_value(spec).unwrap()).unwrap()
}

/// Two servers with threshold 10 on one resource and one time period;
/// disk 0 (demand `a`) on server 0, disk 1 (demand `b`) on server 1.
fn two_servers(a: f64, b: f64) -> ProblemInstance {
    instance(json!({
        "resources": 1,
        "times": 1,
        "servers": [
            { "capacity": [10.0], "overhead_threshold": [0.0] },
            { "capacity": [10.0], "overhead_threshold": [0.0] }
        ],
        "disks": [
            { "server": 0, "color": "GREEN", "demand": [[a]] },
            { "server": 1, "color": "GREEN", "demand": [[b]] }
        ]
    }))
}

/// Three servers, two resources, two time periods, five disks with
/// relocation costs. Several cells start in overrun.
fn mixed() -> ProblemInstance {
    instance(json!({
        "resources": 2,
        "times": 2,
        "servers": [
            { "capacity": [10.0, 8.0], "overhead_threshold": [2.0, 1.0] },
            { "capacity": [12.0, 6.0], "overhead_threshold": [1.0, 0.0] },
            { "capacity": [9.0, 9.0],  "overhead_threshold": [3.0, 2.0] }
        ],
        "disks": [
            { "server": 0, "color": "GREEN", "demand": [[7.0, 3.0], [5.0, 2.0]],
              "insert_cost": [[1.0, 0.5], [2.0, 1.0], [1.5, 0.5]],
              "erase_cost":  [[0.5, 0.5], [1.0, 0.5], [1.0, 1.0]] },
            { "server": 0, "color": "GREEN", "demand": [[6.0, 9.0], [4.0, 1.0]],
              "insert_cost": [[2.0, 1.0], [1.0, 1.0], [0.5, 2.0]],
              "erase_cost":  [[1.0, 1.0], [0.5, 0.5], [2.0, 0.5]] },
            { "server": 1, "color": "GREEN", "demand": [[3.0, 4.0], [6.0, 7.0]],
              "insert_cost": [[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]],
              "erase_cost":  [[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]] },
            { "server": 1, "color": "GREEN", "demand": [[8.0, 2.0], [1.0, 3.0]],
              "insert_cost": [[0.5, 0.5], [0.5, 0.5], [0.5, 0.5]],
              "erase_cost":  [[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]] },
            { "server": 2, "color": "GREEN", "demand": [[2.0, 5.0], [9.0, 4.0]],
              "insert_cost": [[1.5, 0.0], [0.0, 1.5], [1.0, 1.0]],
              "erase_cost":  [[0.0, 1.5], [1.5, 0.0], [1.0, 1.0]] }
        ]
    }))
}
