#![cfg(feature = "serde")]
//! Round-trip tests for the persisted model format.

use descent_rs::prelude::*;

#[test]
fn test_linear_params_round_trip() {
    let params = ModelParams::Linear { w: 2.0, b: 1.0 };

    let encoded = serde_json::to_string(&params).unwrap();
    let decoded: ModelParams<f64> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(params, decoded);
}

#[test]
fn test_polynomial_params_round_trip_is_degree_tagged() {
    let params = ModelParams::Polynomial {
        terms: vec![
            AffineTerm { k: 0.5, b: 0.1 },
            AffineTerm { k: -1.25, b: 0.0 },
            AffineTerm { k: 3.0, b: -0.75 },
        ],
    };

    let encoded = serde_json::to_string(&params).unwrap();
    assert!(encoded.contains("Polynomial"));

    let decoded: ModelParams<f64> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(params, decoded);
    assert_eq!(decoded.degree_value(), 2);
}

#[test]
fn test_fitted_model_survives_persistence() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 3.0, 5.0, 7.0];

    let result = Descent::new()
        .learning_rate(0.01)
        .epochs(500)
        .init(Zero)
        .split(4, 0, 0)
        .adapter(FullBatch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let encoded = serde_json::to_string(&result.params).unwrap();
    let restored: ModelParams<f64> = serde_json::from_str(&encoded).unwrap();

    // The reloaded model predicts identically
    for &xi in &x {
        assert_eq!(result.params.predict(xi), restored.predict(xi));
    }
}
