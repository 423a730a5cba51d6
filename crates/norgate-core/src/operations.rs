/// Complement a single DNA base
pub fn complement_base(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'R' => 'Y',
        'Y' => 'R',
        'S' => 'S',
        'W' => 'W',
        'K' => 'M',
        'M' => 'K',
        'B' => 'V',
        'V' => 'B',
        'D' => 'H',
        'H' => 'D',
        'N' => 'N',
        other => other,
    }
}

/// Reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement_base).collect()
}

/// Clamp `start..end` to a sequence of `len` residues.
pub fn clamp_range(len: usize, start: usize, end: usize) -> (usize, usize) {
    let end = end.min(len);
    (start.min(end), end)
}
