//! Pre-built traffic record scenarios
//!
//! Short-term traffic data per lane: vehicle counts `q*` and speeds `v*`
//! for all vehicles (`Kfz`), lorries (`Lkw`) and cars (`Pkw`).

use super::MapRecord;

/// Scenario with its record and the attributes it carries
pub struct TestScenario {
    pub name: &'static str,
    pub record: MapRecord,
    pub attributes: &'static [&'static str],
}

const TRAFFIC_ATTRIBUTES: &[&str] = &["qLkw", "qPkw", "vLkw", "vPkw"];

/// Pre-built scenario definitions
pub struct Scenarios;

impl Scenarios {
    /// All detectors healthy, standard procedure throughout
    pub fn free_flow() -> TestScenario {
        let mut record = MapRecord::new();
        record
            .measurement("qLkw", 12, 9000, 0)
            .measurement("qPkw", 140, 7000, 0)
            .measurement("vLkw", 82, 8000, 0)
            .measurement("vPkw", 118, 6000, 0);

        TestScenario { name: "free_flow", record, attributes: TRAFFIC_ATTRIBUTES }
    }

    /// Lorry detector failed: count flagged not computable
    pub fn lorry_detector_down() -> TestScenario {
        let mut record = MapRecord::new();
        record
            .measurement("qLkw", -1, 9000, 0)
            .measurement("qPkw", 140, 7000, 0)
            .measurement("vLkw", -1, -1, 0)
            .measurement("vPkw", 118, 6000, 0);

        TestScenario { name: "lorry_detector_down", record, attributes: TRAFFIC_ATTRIBUTES }
    }

    /// Plausibility check marked the car speed as faulty
    pub fn faulty_speed() -> TestScenario {
        let mut record = MapRecord::new();
        record
            .measurement("qLkw", 12, 9000, 0)
            .measurement("qPkw", 140, 7000, 0)
            .measurement("vLkw", 82, 8000, 0)
            .measurement("vPkw", 250, -2, 0);

        TestScenario { name: "faulty_speed", record, attributes: TRAFFIC_ATTRIBUTES }
    }

    /// Car values produced by a deployment-specific procedure
    pub fn mixed_procedures(custom_code: i64) -> TestScenario {
        let mut record = MapRecord::new();
        record
            .measurement("qLkw", 12, 9000, 0)
            .measurement("qPkw", 140, 7000, custom_code)
            .measurement("vLkw", 82, 8000, 0)
            .measurement("vPkw", 118, 6000, custom_code);

        TestScenario { name: "mixed_procedures", record, attributes: TRAFFIC_ATTRIBUTES }
    }
}
