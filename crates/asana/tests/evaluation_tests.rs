use asana::{
    Correctness, Evaluation, JOINT_COUNT, Joint, JointFrame, LABEL_ERROR, RawLandmark,
    SessionStats,
};

#[test]
fn test_correctness_accuracy() {
    let mut correctness = Correctness::all_correct();
    assert_eq!(correctness.accuracy(), 100.0);
    correctness.mark(Joint::LeftKnee);
    correctness.mark(Joint::LeftKnee);
    correctness.mark(Joint::Nose);
    assert_eq!(correctness.count_correct(), JOINT_COUNT - 2);
    assert_eq!(
        correctness.incorrect_joints().collect::<Vec<_>>(),
        vec![Joint::Nose, Joint::LeftKnee]
    );
    assert_eq!(Correctness::empty().accuracy(), 0.0);
    assert_eq!(Correctness::all_incorrect().accuracy(), 0.0);
}

#[test]
fn test_correctness_serializes_as_array() {
    let mut correctness = Correctness::all_correct();
    correctness.mark(Joint::RightHip);
    let value = serde_json::to_value(&correctness).unwrap();
    let flags = value.as_array().unwrap();
    assert_eq!(flags.len(), JOINT_COUNT);
    assert_eq!(flags[24], 0);
    assert_eq!(flags[23], 1);
}

#[test]
fn test_error_result() {
    let result = Evaluation::error("bad input");
    assert_eq!(result.label, LABEL_ERROR);
    assert_eq!(result.accuracy, 0.0);
    assert_eq!(result.correctness.len(), JOINT_COUNT);
    assert_eq!(result.feedback, "bad input");
    assert!(!result.is_perfect());
}

#[test]
fn test_session_stats() {
    let mut stats = SessionStats::default();
    assert_eq!(stats.perfect_ratio(), 0.0);
    let perfect = Evaluation {
        accuracy: 100.0,
        label: "Tadasana".into(),
        correctness: Correctness::all_correct(),
        feedback: "Pose is correct".into(),
    };
    stats.record(&perfect);
    stats.record(&Evaluation::error("bad input"));
    stats.record(&perfect);
    stats.record(&Evaluation::no_pose());
    assert_eq!(stats.frames, 4);
    assert_eq!(stats.perfect_frames, 2);
    assert_eq!(stats.perfect_ratio(), 50.0);
}

#[test]
fn test_joint_names_round_trip() {
    for joint in Joint::ALL {
        assert_eq!(joint.name().parse::<Joint>().unwrap(), joint);
        assert_eq!(joint.label().parse::<Joint>().unwrap(), joint);
        assert_eq!(Joint::try_from(joint.index()).unwrap(), joint);
        assert_eq!(usize::from(joint), joint.index());
    }
    assert_eq!("Left-Wrist".parse::<Joint>().unwrap(), Joint::LeftWrist);
    assert!(Joint::try_from(33).is_err());
}

#[test]
fn test_raw_landmark_json() {
    let landmark: RawLandmark =
        serde_json::from_str(r#"{"x": 0.25, "y": 0.5, "z": -0.3, "visibility": 0.9}"#).unwrap();
    assert_eq!(landmark.x, Some(0.25));
    assert_eq!(landmark.visibility, Some(0.9));
    let partial: RawLandmark = serde_json::from_str(r#"{"x": 0.25}"#).unwrap();
    assert_eq!(partial.point(), None);
}

#[test]
fn test_frame_by_name() {
    let landmarks: Vec<RawLandmark> = (0..JOINT_COUNT)
        .map(|index| RawLandmark::new(index as f32 / 100.0, 0.5))
        .collect();
    let frame = JointFrame::from_landmarks(&landmarks).unwrap();
    assert_eq!(frame.by_name("left_hip").unwrap().x, 0.23);
    assert_eq!(frame.by_name("tail"), None);
    assert_eq!(frame[Joint::RightFootIndex].x, 0.32);
    assert_eq!(frame.iter().count(), JOINT_COUNT);
}
