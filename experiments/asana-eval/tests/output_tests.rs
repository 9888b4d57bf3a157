use {
    asana::{JOINT_COUNT, LABEL_ERROR, RawLandmark, Registry},
    asana_eval::{evaluate_frames, parse_recording},
    serde_json::Value,
};

fn frame() -> Vec<RawLandmark> {
    (0..JOINT_COUNT)
        .map(|i| RawLandmark::new(0.3 + i as f32 * 0.01, 0.1 + i as f32 * 0.02))
        .collect()
}

#[test]
fn test_one_json_object_per_line() {
    let frames = vec![frame(), frame()[..10].to_vec(), frame()];
    let mut out = Vec::new();
    let stats = evaluate_frames(&Registry::builtin(), "tadasana", &frames, &mut out).unwrap();
    assert_eq!(stats.frames, 3);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), frames.len());
    assert!(text.ends_with('\n'));
    for (index, line) in lines.iter().enumerate() {
        let value: Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["frame"], index);
        assert!(value["accuracy"].is_number());
        assert!(value["label"].is_string());
        assert!(value["correctness"].is_array());
        assert!(value["feedback"].is_string());
    }
    let incomplete: Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(incomplete["label"], LABEL_ERROR);
}

#[test]
fn test_no_frames_writes_nothing() {
    let mut out = Vec::new();
    let stats = evaluate_frames(&Registry::builtin(), "TADASANA", &[], &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.frames, 0);
    assert_eq!(stats.perfect_ratio(), 0.0);
}

#[test]
fn test_parse_bare_frames() {
    let frames = parse_recording(r#"[[{"x": 0.1, "y": 0.2}], []]"#).unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0][0], RawLandmark::new(0.1, 0.2));
}

#[test]
fn test_parse_request() {
    let frames = parse_recording(
        r#"{"instructions": "TADASANA", "pose_landmarks": [[{"x": 0.5, "y": 0.5}]]}"#,
    )
    .unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].len(), 1);
}

#[test]
fn test_parse_garbage() {
    assert!(parse_recording("42").is_err());
}
