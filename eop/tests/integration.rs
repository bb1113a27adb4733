//! End-to-end tests of the public query surface over synthetic tables.

use approx::assert_abs_diff_eq;
use eop::{
    DataQuality, Epoch, EopConfig, EopError, EopResult, EopService, EopSource, FinalsRecord,
    Interpolation, LeapSecondRecord, RotationMatrix3, ValueFlag,
};
use eop_data::test_helpers::{leap_second_record, FinalsRecordBuilder};

/// Smooth UT1-TAI trend underlying the synthetic series.
fn smooth_ut1_tai(mjd: f64) -> f64 {
    -0.3 - 0.0012 * (mjd - 57750.0)
}

/// A 20-day span across the 2017-01-01 leap second (MJD 57754, 36 -> 37 s).
///
/// UT1-UTC carries the +1 s step at the boundary; records from MJD 57762
/// onward are predictions.
struct LeapStraddlingSource;

impl EopSource for LeapStraddlingSource {
    fn finals(&self) -> EopResult<Vec<FinalsRecord>> {
        Ok((0..20)
            .map(|i| {
                let mjd = 57750.0 + i as f64;
                let tai_utc = if mjd >= 57754.0 { 37.0 } else { 36.0 };
                let builder = FinalsRecordBuilder::new(mjd)
                    .ut1_utc(smooth_ut1_tai(mjd) + tai_utc)
                    .pm(
                        0.04 + 0.0015 * (mjd - 57750.0),
                        0.33 - 0.0011 * (mjd - 57750.0),
                    )
                    .lod(Some(0.0009 + 0.00002 * (mjd - 57750.0)))
                    .pole_offsets(Some(0.11), Some(-0.23));
                if mjd >= 57762.0 {
                    builder.predicted()
                } else {
                    builder
                }
            })
            .map(FinalsRecordBuilder::build)
            .collect())
    }

    fn leap_seconds(&self) -> EopResult<Vec<LeapSecondRecord>> {
        Ok(vec![
            leap_second_record(41317.0, 10),
            leap_second_record(57204.0, 36),
            leap_second_record(57754.0, 37),
        ])
    }
}

fn service() -> EopService {
    EopService::new(LeapStraddlingSource)
}

#[test]
fn ut1_interpolation_stays_on_smooth_trend_across_leap_step() {
    let service = service();

    // Sample both sides of the boundary; the detrended interpolation must
    // track the smooth UT1-TAI curve plus the step-function offset
    for query in [57753.25, 57753.9, 57754.1, 57754.75] {
        let tai_utc = if query >= 57754.0 { 37.0 } else { 36.0 };
        let expected = smooth_ut1_tai(query) + tai_utc;

        let dut1 = service.ut1(Epoch::mjd(query), None).unwrap();
        assert_abs_diff_eq!(dut1, expected, epsilon = 1e-10);
    }
}

#[test]
fn ut1_linear_and_lagrange_agree_on_linear_trend() {
    let service = service();
    let query = Epoch::mjd(57755.5);

    let lagrange = service.ut1(query, Some(Interpolation::Lagrange)).unwrap();
    let linear = service.ut1(query, Some(Interpolation::Linear)).unwrap();
    assert_abs_diff_eq!(lagrange, linear, epsilon = 1e-9);
}

#[test]
fn queries_near_table_edges_use_shifted_windows() {
    let service = service();

    // Half a day inside either edge, the centered window cannot fit and
    // must shift inward; the query still succeeds and stays on trend
    let low = service.ut1(Epoch::mjd(57750.5), None).unwrap();
    assert_abs_diff_eq!(low, smooth_ut1_tai(57750.5) + 36.0, epsilon = 1e-9);

    let high = service.ut1(Epoch::mjd(57769.0), None).unwrap();
    assert_abs_diff_eq!(high, smooth_ut1_tai(57769.0) + 37.0, epsilon = 1e-9);
}

#[test]
fn out_of_range_errors_carry_payload() {
    let service = service();

    for query in [57749.0, 57770.0] {
        let err = service.ut1(Epoch::mjd(query), None).unwrap_err();
        match err {
            EopError::OutOfRange {
                requested_mjd,
                available_range,
                ..
            } => {
                assert_eq!(requested_mjd, query);
                assert_eq!(available_range, Some((57750.0, 57769.0)));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn tai_round_trips() {
    let service = service();

    // Strictly inside an offset era
    for utc in [57500.25, 57756.5] {
        let tai = service.utc_to_tai(Epoch::mjd(utc)).unwrap();
        let back = service.tai_to_utc(Epoch::mjd(tai)).unwrap();
        assert_abs_diff_eq!(back, utc, epsilon = 1e-15);
    }

    // Exactly at the boundary instant
    let utc = 57754.0;
    let tai = service.utc_to_tai(Epoch::mjd(utc)).unwrap();
    assert_abs_diff_eq!(tai, utc + 37.0 / 86_400.0, epsilon = 1e-15);
    let back = service.tai_to_utc(Epoch::mjd(tai)).unwrap();
    assert_abs_diff_eq!(back, utc, epsilon = 1e-15);
}

#[test]
fn rotation_matrices_are_proper() {
    let service = service();

    for query in [57751.3, 57754.0, 57758.875, 57766.5] {
        let w = service.polar_motion_matrix(Epoch::mjd(query), None).unwrap();
        assert!(w.is_rotation_matrix(1e-12), "W fails at MJD {query}");
        assert_abs_diff_eq!(w.determinant(), 1.0, epsilon = 1e-12);

        let m = service.terrestrial_matrix(Epoch::mjd(query), None).unwrap();
        assert!(m.is_rotation_matrix(1e-12), "R3*W fails at MJD {query}");
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);

        // M^T * M = I element-wise
        let product = m.transpose().multiply(&m);
        let identity = RotationMatrix3::identity();
        assert!(product.max_difference(&identity) < 1e-12);
    }
}

#[test]
fn era_and_gmst_are_normalized_and_distinct() {
    let service = service();

    for query in [57750.0, 57753.5, 57760.2, 57769.0] {
        let era = service.earth_rotation_angle(Epoch::mjd(query), None).unwrap();
        let gmst = service.gmst(Epoch::mjd(query), None).unwrap();

        let two_pi = 2.0 * std::f64::consts::PI;
        assert!((0.0..two_pi).contains(&era), "ERA {era} at MJD {query}");
        assert!((0.0..two_pi).contains(&gmst), "GMST {gmst} at MJD {query}");
        assert_ne!(era, gmst);
    }
}

#[test]
fn composite_quality_tracks_predicted_windows() {
    let service = service();

    // Window entirely inside observed records
    let observed = service.eop(Epoch::mjd(57755.5), None).unwrap();
    assert_eq!(observed.quality, DataQuality::Observed);

    // Window touching the predicted tail (>= 57762)
    let predicted = service.eop(Epoch::mjd(57761.5), None).unwrap();
    assert_eq!(predicted.quality, DataQuality::Predicted);

    // Deep in the predicted tail
    let deep = service.eop(Epoch::mjd(57765.0), None).unwrap();
    assert!(deep.predicted());
}

#[test]
fn per_parameter_quality_is_independent() {
    // Predicted UT1 with observed polar motion: only UT1-derived queries
    // degrade
    struct MixedSource;

    impl EopSource for MixedSource {
        fn finals(&self) -> EopResult<Vec<FinalsRecord>> {
            Ok((0..10)
                .map(|i| {
                    FinalsRecordBuilder::new(57750.0 + i as f64)
                        .ut1_flag(ValueFlag::Predicted)
                        .build()
                })
                .collect())
        }

        fn leap_seconds(&self) -> EopResult<Vec<LeapSecondRecord>> {
            Ok(vec![leap_second_record(41317.0, 36)])
        }
    }

    let service = EopService::new(MixedSource);
    let epoch = Epoch::mjd(57754.5);

    assert!(service.polar_motion(epoch, None).unwrap().observed());
    assert!(service.ut1_detailed(epoch, None).unwrap().predicted());
    assert!(service.eop(epoch, None).unwrap().predicted());
}

#[test]
fn between_returns_inclusive_ordered_entries() {
    let service = service();

    let entries = service
        .ut1_between(Epoch::mjd(57752.0), Epoch::mjd(57756.0))
        .unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries.first().unwrap().mjd, 57752.0);
    assert_eq!(entries.last().unwrap().mjd, 57756.0);
    assert!(entries.windows(2).all(|w| w[0].mjd < w[1].mjd));

    let empty = service
        .ut1_between(Epoch::mjd(60000.0), Epoch::mjd(60010.0))
        .unwrap();
    assert!(empty.is_empty());
}

#[test]
fn calendar_and_jd_inputs_agree_with_mjd() {
    let service = service();

    let by_mjd = service.ut1(Epoch::mjd(57754.0), None).unwrap();
    let by_jd = service.ut1(Epoch::jd(57754.0 + 2_400_000.5), None).unwrap();
    let by_calendar = service.ut1(Epoch::calendar(2017, 1, 1), None).unwrap();

    assert_abs_diff_eq!(by_mjd, by_jd, epsilon = 1e-12);
    assert_abs_diff_eq!(by_mjd, by_calendar, epsilon = 1e-12);
}

#[test]
fn isolated_services_run_distinct_configurations() {
    let lagrange_service = EopService::with_config(
        LeapStraddlingSource,
        EopConfig::new().with_lagrange_order(8),
    )
    .unwrap();
    let linear_service = EopService::with_config(
        LeapStraddlingSource,
        EopConfig::new().with_interpolation(Interpolation::Linear),
    )
    .unwrap();

    let epoch = Epoch::mjd(57755.5);
    let a = lagrange_service.ut1(epoch, None).unwrap();
    let b = linear_service.ut1(epoch, None).unwrap();

    // Both stay on the synthetic trend; the configurations never interfere
    assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    assert_eq!(lagrange_service.config().lagrange_order, 8);
    assert_eq!(
        linear_service.config().interpolation,
        Interpolation::Linear
    );
}

#[test]
fn delta_t_spans_both_regimes() {
    let service = service();

    let measured = service.delta_t(Epoch::mjd(57756.0)).unwrap();
    assert!(measured.measured());
    // 37 + 32.184 - UT1-UTC
    let expected = 37.0 + 32.184 - (smooth_ut1_tai(57756.0) + 37.0);
    assert_abs_diff_eq!(measured.delta_t, expected, epsilon = 1e-9);

    let estimated = service.delta_t(Epoch::calendar(1920, 7, 1)).unwrap();
    assert!(estimated.estimated());
    // Espenak & Meeus give roughly +21 s around 1920
    assert!(estimated.delta_t > 15.0 && estimated.delta_t < 30.0);

    let err = service.delta_t(Epoch::calendar(1700, 1, 1)).unwrap_err();
    assert!(matches!(err, EopError::OutOfRange { .. }));
}

#[test]
fn invalid_epochs_are_rejected() {
    let service = service();

    assert!(matches!(
        service.ut1(Epoch::mjd(f64::NAN), None).unwrap_err(),
        EopError::InvalidInput { .. }
    ));
    assert!(matches!(
        service
            .ut1(Epoch::calendar(2017, 2, 30), None)
            .unwrap_err(),
        EopError::InvalidInput { .. }
    ));
}
