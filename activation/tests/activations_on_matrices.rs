use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use activation::{activate_derivative_matrix, activate_matrix, ActivationFunction, Activator};
use nn_core::{Matrix, RowsMatrixBuilder};
use report::TestReport;

const GRADIENT_CHECK_EPSILON: f64 = 1e-6;
const GRADIENT_CHECK_TOLERANCE: f64 = 1e-5;

fn all_activation_functions() -> Vec<ActivationFunction> {
    vec![
        ActivationFunction::Sigmoid,
        ActivationFunction::Tanh,
        ActivationFunction::ReLU,
        ActivationFunction::LeakyReLU { tail_slope: 0.1 },
        ActivationFunction::ELU { alpha: 1.5 },
        ActivationFunction::Swish,
        ActivationFunction::HardSigmoid,
    ]
}

/// Compares each derivative against a central difference, away from the kinks at 0 and
/// at the hard sigmoid's saturation points.
#[test]
fn derivatives_match_finite_differences() {
    let sample_points = [-4.0, -1.7, -0.6, -0.2, 0.3, 0.9, 1.6, 3.2];
    let mut report = TestReport::new();

    for activation_function in all_activation_functions() {
        for &z in sample_points.iter() {
            let numeric = (activation_function.activate(z + GRADIENT_CHECK_EPSILON)
                - activation_function.activate(z - GRADIENT_CHECK_EPSILON))
                / (2.0 * GRADIENT_CHECK_EPSILON);
            let analytic = activation_function.activate_derivative(z);

            report.check(
                activation_function.name(),
                (numeric - analytic).abs() < GRADIENT_CHECK_TOLERANCE,
                || format!("at z = {}: analytic {} vs numeric {}", z, analytic, numeric),
            );
        }
    }

    assert_eq!(report.total(), 7 * 8);
    assert!(report.all_passed(), "{}", report);
}

#[test]
fn registry_entries_map_over_a_matrix() {
    let z_m = RowsMatrixBuilder::new()
        .with_row(&[-2.0, -0.5, 0.0])
        .with_row(&[0.5, 2.0, 10.0])
        .build()
        .unwrap();
    let before = z_m.clone();

    for activation_function in all_activation_functions() {
        let a_m = activate_matrix(&z_m, &activation_function).unwrap();
        let d_m = activate_derivative_matrix(&z_m, &activation_function).unwrap();
        assert_eq!(a_m.shape(), z_m.shape());
        assert_eq!(d_m.shape(), z_m.shape());

        for i in 0..z_m.num_rows() {
            for j in 0..z_m.num_columns() {
                let z = z_m.get(i, j);
                assert_eq!(a_m.get(i, j), activation_function.activate(z));
                assert_eq!(d_m.get(i, j), activation_function.activate_derivative(z));
            }
        }
    }

    assert_eq!(z_m, before);
}

#[test]
fn configured_activation_feeds_the_mapper() {
    let configured = ActivationFunction::from_json(r#"{"type":"leaky_relu","tail_slope":0.25}"#)
        .unwrap();
    let z_m = Matrix::new_row_vector(&[-4.0, 4.0]).unwrap();

    let a_m = z_m.map(&|z: f64| configured.activate(z)).unwrap();
    assert_eq!(a_m.as_slice(), &[-1.0, 4.0]);
}

#[test]
fn activation_then_clip_then_hadamard() {
    let z_m = Matrix::new_column_vector(&[-3.0, 0.0, 3.0]).unwrap();
    let tanh = ActivationFunction::Tanh;

    let a_m = activate_matrix(&z_m, &tanh).unwrap();
    let d_m = activate_derivative_matrix(&z_m, &tanh).unwrap();
    let clipped = a_m.clip(-0.9, 0.9).unwrap();
    let gated = clipped.hadamard_product(&d_m).unwrap();

    assert_eq!(gated.get(1, 0), 0.0);
    assert!((gated.get(0, 0) + 0.9 * d_m.get(0, 0)).abs() < 1e-15);
    assert!((gated.get(2, 0) - 0.9 * d_m.get(2, 0)).abs() < 1e-15);
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn relu_never_outputs_negative(values in proptest::collection::vec(-1_000.0f64..1_000.0, 1..128)) {
        let z_m = Matrix::new_row_vector(&values).expect("values are non-empty");
        let a_m = activate_matrix(&z_m, &ActivationFunction::ReLU).expect("map should succeed");
        prop_assert!(a_m.as_slice().iter().all(|value| *value >= 0.0));
    }

    #[test]
    fn sigmoid_outputs_are_bounded_and_finite(values in proptest::collection::vec(-800.0f64..800.0, 1..128)) {
        let z_m = Matrix::new_column_vector(&values).expect("values are non-empty");
        let a_m = activate_matrix(&z_m, &ActivationFunction::Sigmoid).expect("map should succeed");
        prop_assert!(a_m.as_slice().iter().all(|value| value.is_finite()));
        prop_assert!(a_m.as_slice().iter().all(|value| *value >= 0.0 && *value <= 1.0));
    }

    #[test]
    fn hard_sigmoid_outputs_are_bounded(values in proptest::collection::vec(-1e6f64..1e6, 1..128)) {
        let z_m = Matrix::new_row_vector(&values).expect("values are non-empty");
        let a_m = activate_matrix(&z_m, &ActivationFunction::HardSigmoid).expect("map should succeed");
        prop_assert!(a_m.as_slice().iter().all(|value| *value >= 0.0 && *value <= 1.0));
    }
}
