#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use procrows::{LineScanner, ScanError, ScanOptions};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Terminators the scanner may be configured with; `\n` dominates.
const TERMINATORS: &[u8] = b"\n\n\n\n\0;";

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Random bytes rarely contain a terminator. Every tenth run, sprinkle
/// terminators over the input so the emit pass sees real lines.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    let size = fuzzer_mutate(data, size, max_size);
    if seed.is_multiple_of(10) && size > 0 {
        with_rng(|rng| {
            let count = rng.random_range(1..=size.min(16));
            for _ in 0..count {
                let at = rng.random_range(0..size);
                data[at] = TERMINATORS[rng.random_range(0..TERMINATORS.len())];
            }
        });
    }
    size
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    terminator_index: u8,
    limit: u16,
    buffer: &'a [u8],
}

fn scanner(data: &[u8]) {
    let Ok(input) = Input::arbitrary(&mut arbitrary::Unstructured::new(data)) else {
        return;
    };
    let terminator = TERMINATORS[input.terminator_index as usize % TERMINATORS.len()];
    let limit = usize::from(input.limit);
    let scanner = LineScanner::new(ScanOptions {
        terminator,
        max_line_length: limit,
    });

    let statistics = scanner.measure(input.buffer);
    let terminators = input.buffer.iter().filter(|&&b| b == terminator).count();
    assert_eq!(statistics.total_chars, input.buffer.len());
    assert_eq!(statistics.line_count, terminators);
    assert_eq!(
        statistics.first_terminator_offset,
        input.buffer.iter().position(|&b| b == terminator)
    );

    match scanner.emit(input.buffer, &statistics) {
        Ok(records) => {
            assert_eq!(records.len(), statistics.line_count);
            for (i, record) in records.iter().enumerate() {
                assert_eq!(record.line_number, i + 1);
                assert!(record.content.len() < limit);
                assert!(record.content.len() <= statistics.max_line_length);
            }
        }
        Err(ScanError::LineTooLong { line_number, limit: l }) => {
            assert_eq!(l, limit);
            assert!(line_number >= 1 && line_number <= statistics.line_count + 1);
        }
    }
}

fuzz_target!(|data: &[u8]| scanner(data));
