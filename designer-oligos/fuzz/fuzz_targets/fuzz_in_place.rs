#![no_main]
use libfuzzer_sys::fuzz_target;

use designer_oligos::{
    complement, complement_in_place, reverse, reverse_complement, reverse_complement_in_place,
    reverse_in_place,
};

fuzz_target!(|data: (&[u8], bool)| {
    let (seq, dna) = data;

    let mut buf = seq.to_vec();
    reverse_in_place(&mut buf);
    assert_eq!(buf, reverse(seq));

    let mut buf = seq.to_vec();
    match (complement(seq, dna), complement_in_place(&mut buf, dna)) {
        (Ok(expected), Ok(())) => assert_eq!(buf, expected),
        (Err(a), Err(b)) => {
            assert_eq!(a, b);
            assert_eq!(buf, seq);
        }
        (a, b) => panic!("allocating {a:?} vs in-place {b:?}"),
    }

    let mut buf = seq.to_vec();
    match (reverse_complement(seq, dna), reverse_complement_in_place(&mut buf, dna)) {
        (Ok(expected), Ok(())) => assert_eq!(buf, expected),
        (Err(a), Err(b)) => {
            assert_eq!(a, b);
            assert_eq!(buf, seq);
        }
        (a, b) => panic!("allocating {a:?} vs in-place {b:?}"),
    }
});
