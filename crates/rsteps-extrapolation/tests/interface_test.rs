use burn::tensor::{Shape, Tensor, TensorData};
use burn_ndarray::NdArray;

use rsteps_core::VelocityField;
use rsteps_extrapolation::{
    ExtrapolationError, ExtrapolationOptions, Method, AVAILABLE_METHODS,
};

type Backend = NdArray<f32>;

fn sample_inputs() -> (Tensor<Backend, 2>, VelocityField<Backend>) {
    let device = Default::default();
    let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
    let precip = Tensor::from_data(TensorData::new(data, Shape::new([4, 4])), &device);
    let velocity = VelocityField::zeros([4, 4], &device);
    (precip, velocity)
}

#[test]
fn unknown_method_lists_the_valid_names() {
    let err = Method::resolve(Some("arima")).unwrap_err();
    let msg = err.to_string();
    for name in AVAILABLE_METHODS {
        assert!(msg.contains(name), "message should list '{name}': {msg}");
    }
}

#[test]
fn resolution_is_case_insensitive() {
    assert_eq!(
        Method::resolve(Some("SEMILAGRANGIAN")).unwrap(),
        Method::SemiLagrangian
    );
    assert_eq!(Method::resolve(Some("Eulerian")).unwrap(), Method::Eulerian);
    assert_eq!(Method::resolve(Some("None")).unwrap(), Method::None);
}

#[test]
fn none_method_produces_an_empty_sequence() {
    let (precip, velocity) = sample_inputs();

    let result = Method::None
        .extrapolate(
            &precip,
            &velocity,
            5,
            f32::NAN,
            &ExtrapolationOptions::default(),
        )
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn dispatched_methods_share_one_signature() {
    let (precip, velocity) = sample_inputs();
    let options = ExtrapolationOptions::default();
    let expected = precip.clone().into_data();
    let expected = expected.as_slice::<f32>().unwrap();

    // With zero velocity both real methods reduce to persistence.
    for method in [Method::Eulerian, Method::SemiLagrangian] {
        let result = method
            .extrapolate(&precip, &velocity, 2, f32::NAN, &options)
            .unwrap();
        assert_eq!(result.len(), 2, "{}", method.name());
        for field in result.fields() {
            let data = field.clone().into_data();
            assert_eq!(
                data.as_slice::<f32>().unwrap(),
                expected,
                "{}",
                method.name()
            );
        }
    }
}

#[test]
fn dispatch_propagates_validation_errors() {
    let device = Default::default();
    let (precip, _) = sample_inputs();
    let velocity = VelocityField::zeros([5, 5], &device);

    for method in [Method::Eulerian, Method::SemiLagrangian] {
        let err = method
            .extrapolate(
                &precip,
                &velocity,
                2,
                f32::NAN,
                &ExtrapolationOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, ExtrapolationError::ShapeMismatch { .. }));
    }
}
