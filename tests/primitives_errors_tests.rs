#![cfg(feature = "dev")]

use descent_rs::internals::primitives::errors::DescentError;

#[test]
fn test_descent_error_display() {
    // EmptyInput
    let err = DescentError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = DescentError::MismatchedInputs {
        x_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // InvalidNumericValue
    let err = DescentError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // EmptySplit
    let err = DescentError::EmptySplit { split: "val" };
    assert_eq!(format!("{}", err), "The 'val' split is empty");

    // InvalidLearningRate
    let err = DescentError::InvalidLearningRate(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid learning rate: -0.5 (must be > 0 and finite)"
    );

    // InvalidEpochs
    let err = DescentError::InvalidEpochs(0);
    assert_eq!(format!("{}", err), "Invalid epochs: 0 (must be > 0)");

    // InvalidReportEvery
    let err = DescentError::InvalidReportEvery(0);
    assert_eq!(
        format!("{}", err),
        "Invalid report interval: 0 (must be > 0)"
    );

    // SplitSizeMismatch
    let err = DescentError::SplitSizeMismatch {
        train: 80,
        val: 10,
        test: 10,
        total: 99,
    };
    assert_eq!(
        format!("{}", err),
        "Split sizes 80 + 10 + 10 do not sum to the dataset size 99"
    );

    // DuplicateParameter
    let err = DescentError::DuplicateParameter { parameter: "foo" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'foo' was set multiple times. Each parameter can only be configured once."
    );
}

#[cfg(feature = "std")]
#[test]
fn test_loader_error_display() {
    // DataLoad
    let err = DescentError::DataLoad {
        path: "data.txt".to_string(),
        reason: "permission denied".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "Failed to load data from 'data.txt': permission denied"
    );

    // MalformedLine
    let err = DescentError::MalformedLine {
        line: 3,
        content: "1.0;2.0".to_string(),
    };
    assert_eq!(format!("{}", err), "Malformed data on line 3: '1.0;2.0'");

    // SampleCountMismatch
    let err = DescentError::SampleCountMismatch {
        got: 4999,
        expected: 5000,
    };
    assert_eq!(
        format!("{}", err),
        "Sample count mismatch: read 4999, expected 5000"
    );
}

#[test]
fn test_descent_error_properties() {
    let err1 = DescentError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, DescentError::EmptySplit { split: "train" });
}

#[cfg(feature = "std")]
#[test]
fn test_descent_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<DescentError>();
}
