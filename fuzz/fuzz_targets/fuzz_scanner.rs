#![no_main]
use arbitrary::Arbitrary;
use decomment::{ScannerOptions, StreamingScanner};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCase {
    strip_line: bool,
    strip_block: bool,
    strip_javadoc: bool,
    strip_headerdoc: bool,
    split_seed: u64,
    data: Vec<u8>,
}

/// The scanner must never panic, and feeding the same bytes in any chunk
/// partition must produce the same output as a single feed.
fn scan(case: &FuzzCase) {
    let options = ScannerOptions {
        strip_line: case.strip_line,
        strip_block: case.strip_block,
        strip_javadoc: case.strip_javadoc,
        strip_headerdoc: case.strip_headerdoc,
    };

    let mut reference = StreamingScanner::new(options);
    reference.feed_bytes(&case.data);
    let mut expected = String::new();
    expected.extend(reference.by_ref());
    expected.extend(reference.finish());

    let mut chunked = StreamingScanner::new(options);
    let mut out = String::new();
    let mut rest = case.data.as_slice();
    let mut seed = case.split_seed;
    while !rest.is_empty() {
        let take = (seed as usize % rest.len()) + 1;
        seed = seed.rotate_left(7) ^ 0x9E37_79B9_7F4A_7C15;
        let (head, tail) = rest.split_at(take);
        chunked.feed_bytes(head);
        out.extend(chunked.by_ref());
        rest = tail;
    }
    out.extend(chunked.finish());

    assert_eq!(out, expected);
}

fuzz_target!(|case: FuzzCase| scan(&case));
