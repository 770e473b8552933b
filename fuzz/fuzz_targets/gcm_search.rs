#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    // First word picks the initial shape; the rest is the sample.
    let init = f64::from_le_bytes(data[..8].try_into().unwrap());
    let x: Vec<f64> = data[8..]
        .chunks_exact(8)
        .take(4096)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect();

    let init = if init.is_finite() && init > 0.0 { Some(init.min(1e3)) } else { None };
    let config = ggd_inference::GcmConfig { max_iter: 200, ..Default::default() };
    if let Ok(est) = ggd_inference::GcmEstimator::new(config).search(&x, init) {
        assert!(est.shape.is_finite() && est.shape > 0.0);
        assert!(est.n_iter >= 1 && est.n_iter <= config.max_iter);
        let _ = ggd_inference::gcm_ci_default(est.shape, est.n);
    }
});
