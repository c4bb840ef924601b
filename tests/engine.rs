use biquad_filters::{
    Backend, BiquadEngine, Coefficients, ConstructionError, FilterConfig, FilterKind,
    ProcessingError, State,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|n| n as f64).collect()
}

#[test]
fn test_identity_block_is_unchanged() {
    for backend in Backend::available() {
        let mut engine =
            BiquadEngine::with_backend(Coefficients::<f64>::identity(), backend).unwrap();
        let mut block = ramp(100);
        engine.process_block(&mut block).unwrap();
        assert_eq!(block, ramp(100), "backend {}", backend);
    }
}

#[test]
fn test_zero_numerator_silences_block() {
    let zero = Coefficients::new(0.0_f32, 0.0, 0.0, 1.0, 0.0, 0.0);
    for backend in Backend::available() {
        let mut engine = BiquadEngine::with_backend(zero, backend).unwrap();
        let mut block = vec![0.75_f32; 70];
        engine.process_block(&mut block).unwrap();
        assert!(block.iter().all(|&y| y == 0.0), "backend {}", backend);
    }
}

#[test]
fn test_inversion_block() {
    let invert = Coefficients::new(-1.0_f64, 0.0, 0.0, 1.0, 0.0, 0.0);
    for backend in Backend::available() {
        let mut engine = BiquadEngine::with_backend(invert, backend).unwrap();
        let mut block = ramp(33);
        engine.process_block(&mut block).unwrap();
        let expected: Vec<f64> = ramp(33).into_iter().map(|x| -x).collect();
        assert_eq!(block, expected);
    }
}

#[test]
fn test_two_sample_delay_ramp() {
    // y[n] = x[n-2]
    let delay = Coefficients::new(0.0_f64, 0.0, 1.0, 1.0, 0.0, 0.0);
    for backend in Backend::available() {
        let mut engine = BiquadEngine::with_backend(delay, backend).unwrap();
        let mut block = ramp(10);
        engine.process_block(&mut block).unwrap();
        assert_eq!(block, vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(
            *engine.state(),
            State {
                x1: 9.0,
                x2: 8.0,
                y1: 7.0,
                y2: 6.0
            }
        );
    }
}

#[test]
fn test_reset_then_replay_matches() {
    let c = Coefficients::new(0.3_f64, 0.2, 0.1, 1.0, -0.5, 0.25);
    let mut engine = BiquadEngine::new(c).unwrap();
    let mut first = ramp(20);
    engine.process_block(&mut first).unwrap();
    engine.reset();
    assert_eq!(*engine.state(), State::default());
    let mut second = ramp(20);
    engine.process_block(&mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_block_leaves_state() {
    let mut engine = BiquadEngine::new(Coefficients::<f64>::identity()).unwrap();
    engine.process(4.0);
    let state = *engine.state();
    assert_eq!(engine.process_block(&mut []), Err(ProcessingError::EmptyBuffer));
    assert_eq!(*engine.state(), state);
}

#[test]
fn test_degenerate_denominator_rejected_for_both_precisions() {
    let c64 = Coefficients::new(1.0_f64, 1.0, 1.0, 0.0, 0.5, 0.5);
    let c32 = Coefficients::new(1.0_f32, 1.0, 1.0, 0.0, 0.5, 0.5);
    assert_eq!(
        BiquadEngine::new(c64).unwrap_err(),
        ConstructionError::DegenerateDenominator
    );
    assert_eq!(
        BiquadEngine::new(c32).unwrap_err(),
        ConstructionError::DegenerateDenominator
    );
}

#[test]
fn test_every_designed_response_is_usable() {
    for kind in FilterKind::ALL {
        for cutoff in [20.0, 440.0, 5000.0, 20000.0] {
            for q in [0.1, 0.707, 4.0, 30.0] {
                let config = FilterConfig::<f64>::new(cutoff, 48000, q).with_gain(-9.0);
                let raw = kind.design(&config);
                let engine = BiquadEngine::new(raw).unwrap();
                assert_eq!(engine.coefficients().a0, 1.0);
                assert!(
                    engine.coefficients().is_stable(),
                    "{} at {} Hz, Q {}",
                    kind,
                    cutoff,
                    q
                );

                let config = FilterConfig::<f32>::new(cutoff as f32, 48000, q as f32);
                assert!(BiquadEngine::new(kind.design(&config)).is_ok());
            }
        }
    }
}

#[test]
fn test_vectorized_matches_scalar_for_all_kinds() {
    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<f32> = (0..4096).map(|_| rng.gen_range(-1.0_f32..1.0)).collect();

    for kind in FilterKind::ALL {
        let config = FilterConfig::<f32>::new(2500.0, 44100, 2.0).with_gain(6.0);
        let raw = kind.design(&config);
        for size in [1, 3, 16, 4096] {
            let mut scalar = BiquadEngine::with_backend(raw, Backend::Scalar).unwrap();
            let mut expected = input[..size].to_vec();
            scalar.process_block(&mut expected).unwrap();

            for backend in Backend::available() {
                let mut engine = BiquadEngine::with_backend(raw, backend).unwrap();
                let mut block = input[..size].to_vec();
                engine.process_block(&mut block).unwrap();
                assert_eq!(block, expected, "{} on {} with {} samples", kind, backend, size);
                assert_eq!(engine.state(), scalar.state());
            }
        }
    }
}
