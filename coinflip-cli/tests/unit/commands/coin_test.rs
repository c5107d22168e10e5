use super::*;
use crate::helpers::*;

#[test]
fn can_run_flip_with_samples_and_seed() {
    let matches = get_flip_command().try_get_matches_from(vec!["flip", "--samples", "25", "--seed", "1"]).unwrap();

    run_flip(&matches, &mut create_dummy_write_buffer()).unwrap();
}

#[test]
fn can_reject_malformed_flip_samples() {
    let matches = get_flip_command().try_get_matches_from(vec!["flip", "--samples", "ten"]).unwrap();

    assert!(run_flip(&matches, &mut create_dummy_write_buffer()).is_err());
}

#[test]
fn can_run_pairs_with_defaults() {
    let matches = get_pairs_command().try_get_matches_from(vec!["pairs"]).unwrap();

    run_pairs(&matches, &mut create_dummy_write_buffer()).unwrap();
}

#[test]
fn can_render_flip_report() {
    let report = FlipReport { outcomes: vec![true, false, true], heads: 2, tails: 1 };
    let (buffer, mut writer) = create_capture_write_buffer();

    write_flip_report(&mut writer, &report).unwrap();
    writer.flush().unwrap();

    let text = get_captured_text(&buffer);
    assert!(text.contains("COIN FLIPS"));
    assert!(text.contains("Heads (true)"));
    assert!(text.contains("Tails (false)"));
    assert!(text.contains("results: 2 heads, 1 tails"));
}

#[test]
fn can_render_pairs_report() {
    let report = PairedFlipReport { outcomes: vec![(true, false), (true, true)], opposite: 1, matching: 1 };
    let (buffer, mut writer) = create_capture_write_buffer();

    write_pairs_report(&mut writer, &report).unwrap();
    writer.flush().unwrap();

    let text = get_captured_text(&buffer);
    assert!(text.contains("(opposite)"));
    assert!(text.contains("(same)"));
    assert!(text.contains("results: 1 opposite, 1 matching"));
}
