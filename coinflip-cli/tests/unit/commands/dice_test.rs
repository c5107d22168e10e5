use super::*;
use crate::helpers::*;

#[test]
fn can_run_dice_with_samples_and_seed() {
    let matches = get_dice_command().try_get_matches_from(vec!["dice", "--samples", "600", "--seed", "5"]).unwrap();

    run_dice(&matches, &mut create_dummy_write_buffer()).unwrap();
}

#[test]
fn can_render_dice_report() {
    let report = DiceReport { rolls: 21, faces: [1, 2, 3, 4, 5, 6] };
    let (buffer, mut writer) = create_capture_write_buffer();

    write_dice_report(&mut writer, &report).unwrap();
    writer.flush().unwrap();

    let text = get_captured_text(&buffer);
    assert!(text.contains("DICE ROLLS"));
    assert!(text.contains("rolls: 21"));
    assert!(text.contains("face 1:"));
    assert!(text.contains("face 6:"));
}
