/// Reverse complement: reverse the symbol order, then complement each base
/// (`A<->T`, `C<->G`, uppercase only).
///
/// Symbols outside the four canonical bases pass through unchanged.
pub fn reverse_complement(dna: &str) -> String {
    dna.chars()
        .rev()
        .map(|base| match base {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other,
        })
        .collect()
}
