/// Transcribe DNA to RNA by replacing every `T` with `U`.
///
/// Case-sensitive: lowercase `t` stays as-is, matching the uppercase-only
/// contract of the counting exercise.
pub fn transcribe(dna: &str) -> String {
    dna.replace('T', "U")
}
