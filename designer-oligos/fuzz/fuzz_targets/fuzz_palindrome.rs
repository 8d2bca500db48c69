#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], bool)| {
    let (seq, dna) = data;
    let reference = designer_oligos::palindrome_span(seq, dna);
    let fast = designer_oligos::manacher_span(seq, dna);
    assert_eq!(reference, fast);

    if let Ok(Some(span)) = fast {
        let found = &seq[span];
        let rc = designer_oligos::reverse_complement(found, dna).unwrap();
        assert_eq!(rc, found.to_ascii_uppercase());
    }
});
