#![cfg(feature = "dev")]
//! Tests for the epoch loop and its reporting cadence.
//!
//! ## Test Organization
//!
//! 1. **Cadence** - Record counts and epoch stamps
//! 2. **Passivity** - Reporting never alters the trajectory
//! 3. **Disciplines** - Full-batch vs per-sample produce different paths
//! 4. **Rejection** - Empty training splits fail explicitly

use approx::assert_relative_eq;

use descent_rs::internals::algorithms::model::{Degree, InitStrategy, ModelParams};
use descent_rs::internals::engine::trainer::{Trainer, TrainerConfig, UpdateDiscipline};
use descent_rs::internals::primitives::dataset::Sample;
use descent_rs::internals::primitives::errors::DescentError;
use descent_rs::internals::primitives::rng::SeededRng;

// ============================================================================
// Helper Functions
// ============================================================================

fn samples(pairs: &[(f64, f64)]) -> Vec<Sample<f64>> {
    pairs.iter().map(|&(x, y)| Sample { x, y }).collect()
}

fn config(epochs: usize, report_every: usize, discipline: UpdateDiscipline) -> TrainerConfig<f64> {
    TrainerConfig {
        learning_rate: 0.01,
        epochs,
        report_every,
        discipline,
    }
}

// ============================================================================
// Cadence
// ============================================================================

#[test]
fn test_record_count_follows_cadence() {
    let train = samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);

    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let trainer = Trainer::new(config(10, 3, UpdateDiscipline::FullBatch));
    let history = trainer.run(&mut params, &train, &[]).unwrap();

    // Records at epochs 0, 3, 6, 9
    assert_eq!(history.len(), 4);
    let epochs: Vec<usize> = history.iter().map(|r| r.epoch).collect();
    assert_eq!(epochs, vec![0, 3, 6, 9]);

    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let trainer = Trainer::new(config(5, 1, UpdateDiscipline::FullBatch));
    let history = trainer.run(&mut params, &train, &[]).unwrap();
    assert_eq!(history.len(), 5);
}

#[test]
fn test_val_loss_present_only_with_validation_split() {
    let train = samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    let val = samples(&[(3.0, 7.0)]);

    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let trainer = Trainer::new(config(3, 1, UpdateDiscipline::FullBatch));

    let with_val = trainer.run(&mut params, &train, &val).unwrap();
    assert!(with_val.iter().all(|r| r.val_loss.is_some()));

    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let without_val = trainer.run(&mut params, &train, &[]).unwrap();
    assert!(without_val.iter().all(|r| r.val_loss.is_none()));
}

// ============================================================================
// Passivity
// ============================================================================

#[test]
fn test_reporting_cadence_does_not_alter_trajectory() {
    let train = samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
    let val = samples(&[(4.0, 9.0)]);

    let mut every_epoch = ModelParams::Linear { w: 0.0, b: 0.0 };
    Trainer::new(config(200, 1, UpdateDiscipline::FullBatch))
        .run(&mut every_epoch, &train, &val)
        .unwrap();

    let mut sparse = ModelParams::Linear { w: 0.0, b: 0.0 };
    Trainer::new(config(200, 97, UpdateDiscipline::FullBatch))
        .run(&mut sparse, &train, &val)
        .unwrap();

    // Bit-for-bit identical parameters regardless of cadence
    assert_eq!(every_epoch, sparse);
}

// ============================================================================
// Disciplines
// ============================================================================

#[test]
fn test_disciplines_produce_different_updates() {
    let train = samples(&[(1.0, 1.0), (2.0, 1.0)]);

    let mut full_batch = ModelParams::Linear { w: 0.0, b: 0.0 };
    Trainer::new(TrainerConfig {
        learning_rate: 0.1,
        epochs: 1,
        report_every: 1,
        discipline: UpdateDiscipline::FullBatch,
    })
    .run(&mut full_batch, &train, &[])
    .unwrap();

    let mut per_sample = ModelParams::Linear { w: 0.0, b: 0.0 };
    Trainer::new(TrainerConfig {
        learning_rate: 0.1,
        epochs: 1,
        report_every: 1,
        discipline: UpdateDiscipline::PerSample,
    })
    .run(&mut per_sample, &train, &[])
    .unwrap();

    assert_ne!(full_batch, per_sample);
}

#[test]
fn test_full_batch_converges_on_linear_data() {
    // y = 2x + 1 exactly
    let train = samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);

    let mut rng = SeededRng::new(0);
    let mut params = ModelParams::init(Degree::Linear, InitStrategy::Zero, &mut rng);

    let trainer = Trainer::new(config(2000, 100, UpdateDiscipline::FullBatch));
    let history = trainer.run(&mut params, &train, &[]).unwrap();

    match params {
        ModelParams::Linear { w, b } => {
            assert_relative_eq!(w, 2.0, epsilon = 0.05);
            assert_relative_eq!(b, 1.0, epsilon = 0.05);
        }
        other => panic!("shape changed: {:?}", other),
    }
    assert!(history.last().unwrap().train_loss < 1e-3);
}

// ============================================================================
// Rejection
// ============================================================================

#[test]
fn test_empty_training_split_is_rejected() {
    let mut params = ModelParams::Linear { w: 0.0, b: 0.0 };
    let trainer = Trainer::new(config(5, 1, UpdateDiscipline::FullBatch));
    let err = trainer.run(&mut params, &[], &[]).unwrap_err();
    assert_eq!(err, DescentError::EmptySplit { split: "train" });
}
