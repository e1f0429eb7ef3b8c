
use quickcheck::{Arbitrary, Gen};

use crate::ScannerOptions;

impl Arbitrary for ScannerOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            strip_line: bool::arbitrary(g),
            strip_block: bool::arbitrary(g),
            strip_javadoc: bool::arbitrary(g),
            strip_headerdoc: bool::arbitrary(g),
        }
    }
}

pub(crate) fn line_only() -> ScannerOptions {
    ScannerOptions {
        strip_line: true,
        ..Default::default()
    }
}

pub(crate) fn block_only() -> ScannerOptions {
    ScannerOptions {
        strip_block: true,
        ..Default::default()
    }
}

pub(crate) fn javadoc_only() -> ScannerOptions {
    ScannerOptions {
        strip_javadoc: true,
        ..Default::default()
    }
}

pub(crate) fn headerdoc_only() -> ScannerOptions {
    ScannerOptions {
        strip_headerdoc: true,
        ..Default::default()
    }
}

pub(crate) fn strip_all() -> ScannerOptions {
    ScannerOptions {
        strip_line: true,
        strip_block: true,
        strip_javadoc: true,
        strip_headerdoc: true,
    }
}

pub(crate) fn keep_all() -> ScannerOptions {
    ScannerOptions::default()
}
