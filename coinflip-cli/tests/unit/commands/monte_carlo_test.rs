use super::*;
use crate::helpers::*;

#[test]
fn can_run_pi_with_samples() {
    let matches = get_pi_command().try_get_matches_from(vec!["pi", "--samples", "1000"]).unwrap();

    run_pi(&matches, &mut create_dummy_write_buffer()).unwrap();
}

#[test]
fn can_repeat_estimate_for_same_seed() {
    let run = || {
        let matches = get_pi_command().try_get_matches_from(vec!["pi", "--samples", "10000", "--seed", "9"]).unwrap();
        let (buffer, mut writer) = create_capture_write_buffer();

        run_pi(&matches, &mut writer).unwrap();
        writer.flush().unwrap();

        get_captured_text(&buffer)
    };

    assert_eq!(run(), run());
}

#[test]
fn can_render_pi_report() {
    let report = PiEstimate { samples: 4, inside: 3, estimate: 3., abs_error: 0.1416, rel_error: 0.045 };
    let (buffer, mut writer) = create_capture_write_buffer();

    write_pi_report(&mut writer, &report).unwrap();
    writer.flush().unwrap();

    let text = get_captured_text(&buffer);
    assert!(text.contains("MONTE CARLO PI ESTIMATE"));
    assert!(text.contains("estimate:       3.000000"));
    assert!(text.contains("absolute error: 0.141600"));
}
