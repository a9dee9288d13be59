use dna_tools::commands::transcribe;
use std::fs;

#[test]
fn writes_one_output_file_per_input() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");

    let input1 = dir.path().join("input1.txt");
    fs::write(&input1, "GATGGAACTTGACTACGTAAATT\n").unwrap();
    let input2 = dir.path().join("input2.txt");
    fs::write(&input2, "TTTT\nACGT\n").unwrap();

    transcribe::run(vec![input1, input2], Some(out_dir.clone())).unwrap();

    assert_eq!(
        fs::read_to_string(out_dir.join("input1.txt")).unwrap(),
        "GAUGGAACUUGACUACGUAAAUU\n"
    );
    assert_eq!(
        fs::read_to_string(out_dir.join("input2.txt")).unwrap(),
        "UUUU\nACGU\n"
    );
}

#[test]
fn counts_one_sequence_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();

    let input = dir.path().join("multi.txt");
    fs::write(&input, "ACT\nTTA\nGGT\n").unwrap();

    let sequences = transcribe::transcribe_file(&input, &out_dir).unwrap();
    assert_eq!(sequences, 3);
    assert_eq!(
        fs::read_to_string(out_dir.join("multi.txt")).unwrap(),
        "ACU\nUUA\nGGU\n"
    );
}

#[test]
fn output_directory_is_created_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("out");

    let input = dir.path().join("seq.txt");
    fs::write(&input, "T\n").unwrap();

    transcribe::run(vec![input], Some(out_dir.clone())).unwrap();
    assert!(out_dir.join("seq.txt").is_file());
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-input.txt");

    let result = transcribe::run(vec![missing], Some(dir.path().join("out")));
    assert!(result.is_err());
}
