use std::io::Write;
use std::time::Instant;

use crate::{
    chudnovsky::ChudnovskyPi,
    config::PiConfig,
    errors::PiError,
    report::RunReport,
    utils::hash::fingerprint,
};

/// Computes π for `config` and writes the bare numeral to `out`.
///
/// The digits are fully rendered before the first byte is written, so a
/// failed run leaves `out` untouched.
pub fn run<W: Write>(config: &PiConfig, out: &mut W) -> Result<RunReport, PiError> {
    eprintln!(
        "🚀 Computing π: {} digits, {} terms, {} bits of precision",
        config.digits, config.terms, config.precision_bits
    );

    let start = Instant::now();
    let engine = ChudnovskyPi::with_precision(config.precision_bits);
    let pi = engine.compute(config.terms)?;
    let digits = pi.to_fixed(config.digits as usize);
    let elapsed_ms = start.elapsed().as_millis();

    out.write_all(digits.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    eprintln!("✅ Done in {} ms", elapsed_ms);

    Ok(RunReport {
        digits: config.digits,
        terms: config.terms,
        precision_bits: config.precision_bits,
        elapsed_ms,
        sha256: fingerprint(&digits),
    })
}
