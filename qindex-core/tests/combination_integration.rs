//! Integration tests for decoding, combining and exporting qualities
//!
//! Tests run on traffic records:
//! - Derived counts and speeds from healthy detectors
//! - Not-computable and faulty inputs propagating through formulas
//! - Procedure consistency across a record
//! - Wire round trips

#![cfg(test)]

mod common;

use qindex_core::{
    combine, FieldRole, Procedure, ProcedureRegistry, QualityCodec, QualityError,
    QualityRecord, QualityState, QualityValue, Standard,
};

use common::{
    approx_eq,
    scenarios::{Scenarios, TestScenario},
    MapRecord, TestRng,
};

const REGIONAL: Procedure = Procedure::new(7, "Regional", &Standard);

fn decode_all(
    codec: &QualityCodec<'_>,
    scenario: &TestScenario,
) -> Result<Vec<QualityValue>, QualityError> {
    scenario
        .attributes
        .iter()
        .map(|attribute| codec.decode(&scenario.record, attribute))
        .collect()
}

/// Quality of vKfz = (qLkw·vLkw + qPkw·vPkw) / (qLkw + qPkw)
fn mean_speed_quality(q: &[QualityValue]) -> Result<QualityValue, QualityError> {
    let (q_lkw, q_pkw, v_lkw, v_pkw) = (q[0], q[1], q[2], q[3]);
    combine::quotient(&[
        combine::sum(&[
            combine::product(&[q_lkw, v_lkw])?,
            combine::product(&[q_pkw, v_pkw])?,
        ])?,
        combine::sum(&[q_lkw, q_pkw])?,
    ])
}

#[test]
fn test_vehicle_count_sum() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut scenario = Scenarios::free_flow();
    let q = decode_all(&codec, &scenario).unwrap();

    let q_kfz = combine::sum(&[q[0], q[1]]).unwrap();
    assert!(approx_eq(0.8, q_kfz.index()), "{}", scenario.name);
    assert!(q_kfz.is_intermediate());

    q_kfz.export_into(&mut scenario.record, "qKfz").unwrap();
    assert_eq!(scenario.record.read_unscaled(&["qKfz", "Güte", "Index"]), Some(8000));
    assert_eq!(scenario.record.read_unscaled(&["qKfz", "Güte", "Verfahren"]), Some(0));
}

#[test]
fn test_car_equivalent_weighting() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let scenario = Scenarios::free_flow();
    let q = decode_all(&codec, &scenario).unwrap();

    // qPkw-equivalent = qPkw + 2·qLkw
    let equivalent = combine::sum(&[q[1], combine::weight(&q[0], 2.0)]).unwrap();
    assert!(approx_eq(2.5 / 3.0, equivalent.index()));
    assert_eq!(equivalent.scaled(), 8333);

    // Negative weights count by magnitude
    let net = combine::difference(&[q[1], combine::weight(&q[0], -2.0)]).unwrap();
    assert!(approx_eq(equivalent.index(), net.index()));
}

#[test]
fn test_mean_speed_formula() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut scenario = Scenarios::free_flow();
    let q = decode_all(&codec, &scenario).unwrap();

    let v_kfz = mean_speed_quality(&q).unwrap();
    // ((0.9·0.8 + 0.7·0.6) / 2) · ((0.9 + 0.7) / 2)
    assert!(approx_eq(0.456, v_kfz.index()));

    codec.export(&v_kfz, &mut scenario.record, "vKfz").unwrap();
    assert_eq!(scenario.record.read_unscaled(&["vKfz", "Güte", "Index"]), Some(4560));
}

#[test]
fn test_flagged_measurement_counts_as_zero() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let scenario = Scenarios::lorry_detector_down();
    let q = decode_all(&codec, &scenario).unwrap();

    assert!(q[0].is_computable());
    assert_eq!(q[0].index(), 0.0);

    let q_kfz = combine::sum(&[q[0], q[1]]).unwrap();
    assert!(approx_eq(0.35, q_kfz.index()));
}

#[test]
fn test_not_computable_propagates_through_formula() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut scenario = Scenarios::lorry_detector_down();
    let q = decode_all(&codec, &scenario).unwrap();

    assert_eq!(q[2].sentinel(), Some(QualityState::NotComputable));

    let v_kfz = mean_speed_quality(&q).unwrap();
    assert!(!v_kfz.is_computable());
    assert_eq!(v_kfz.procedure(), Procedure::STANDARD);

    v_kfz.export_into(&mut scenario.record, "vKfz").unwrap();
    assert_eq!(scenario.record.read_unscaled(&["vKfz", "Güte", "Index"]), Some(-3));
}

#[test]
fn test_faulty_state_survives_reexport() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut scenario = Scenarios::faulty_speed();

    let v_pkw = codec.decode(&scenario.record, "vPkw").unwrap();
    assert_eq!(v_pkw.sentinel(), Some(QualityState::Faulty));

    let mut copy = MapRecord::new();
    v_pkw.export_into(&mut copy, "vPkw").unwrap();
    assert_eq!(copy.read_unscaled(&["vPkw", "Güte", "Index"]), Some(-2));

    let weighted = combine::weight(&v_pkw, 0.5);
    weighted.export_into(&mut scenario.record, "vPkw").unwrap();
    assert_eq!(scenario.record.read_unscaled(&["vPkw", "Güte", "Index"]), Some(-2));
    assert_eq!(weighted.scaled_weighted(), -2);
}

#[test]
fn test_procedure_consistency() {
    let mut registry = ProcedureRegistry::new();
    registry.register(REGIONAL).unwrap();
    let codec = QualityCodec::new(&registry);
    let scenario = Scenarios::mixed_procedures(7);
    let q = decode_all(&codec, &scenario).unwrap();

    assert_eq!(
        combine::sum(&[q[0], q[1]]),
        Err(QualityError::InconsistentProcedures { first: 0, second: 7 })
    );

    let car_flow = combine::product(&[q[1], q[3]]).unwrap();
    assert_eq!(car_flow.procedure(), REGIONAL);
    assert_eq!(car_flow.to_wire().procedure, 7);
}

#[test]
fn test_unregistered_procedure_fails_decode() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let scenario = Scenarios::mixed_procedures(7);

    assert_eq!(
        decode_all(&codec, &scenario),
        Err(QualityError::UnknownProcedure { code: 7 })
    );
}

#[test]
fn test_missing_structure() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut record = MapRecord::new();
    record.set(&["qKfz", "Wert"], 17);

    assert_eq!(
        codec.decode(&record, "qKfz"),
        Err(QualityError::MissingField { field: FieldRole::QualityItem })
    );
    assert_eq!(
        codec.decode_flagged(&record, "vKfz", false),
        Err(QualityError::MissingField { field: FieldRole::Attribute })
    );

    record.set(&["qKfz", "Güte", "Verfahren"], 0);
    assert_eq!(
        codec.decode(&record, "qKfz"),
        Err(QualityError::MissingField { field: FieldRole::Index })
    );
}

#[test]
fn test_invalid_wire_index() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut record = MapRecord::new();
    record.measurement("qKfz", 10, 12_000, 0);

    assert_eq!(
        codec.decode(&record, "qKfz"),
        Err(QualityError::InvalidWireIndex { raw: 12_000 })
    );
}

#[test]
fn test_nested_formula() {
    let (a, b, c, d) = (0.3, 0.4, 0.5, 0.6);
    let q = |x| QualityValue::derived(x, Procedure::STANDARD).unwrap();

    let result = combine::quotient(&[
        combine::sum(&[
            combine::product(&[q(a), q(b)]).unwrap(),
            combine::product(&[q(c), q(d)]).unwrap(),
        ])
        .unwrap(),
        combine::difference(&[q(a), q(c)]).unwrap(),
    ])
    .unwrap();

    assert!(approx_eq(((a * b + c * d) / 2.0) * ((a + c) / 2.0), result.index()));
}

#[test]
fn test_wire_round_trip() {
    let registry = ProcedureRegistry::new();
    let codec = QualityCodec::new(&registry);
    let mut record = MapRecord::new();
    let mut exported = MapRecord::new();

    for raw in (0..=10_000).chain([-1, -2, -3]) {
        record.measurement("qKfz", 1, raw, 0);
        let value = codec.decode(&record, "qKfz").unwrap();
        codec.export(&value, &mut exported, "qKfz").unwrap();
        assert_eq!(exported.read_unscaled(&["qKfz", "Güte", "Index"]), Some(raw));
    }
}

#[test]
fn test_random_formulas_stay_in_range() {
    let mut rng = TestRng::new(0x5eed);

    for _ in 0..500 {
        let values: Vec<QualityValue> = (0..1 + rng.next_u32() as usize % 8)
            .map(|_| QualityValue::derived(rng.index(), Procedure::STANDARD).unwrap())
            .collect();

        for result in [
            combine::product(&values),
            combine::quotient(&values),
            combine::sum(&values),
            combine::difference(&values),
        ] {
            let index = result.unwrap().index();
            assert!((0.0..=1.0).contains(&index), "index {} out of range", index);
        }
    }
}
