mod common;

use {
    asana::{
        AngleTablePosture, AsanaError, IdealAngleTable, IdealAngles, Joint, LABEL_CORRECT,
        LABEL_INCORRECT, Orientation, Posture, Triplet,
    },
    base::Vec2,
    common::standing_frame,
};

const CSV: &str = "\
Landmark Pair,Front (degrees),Right (degrees),Left (degrees)
15_13_11,170,120,
12_14_16,170.5,,95
";

fn front_only(degrees: f32) -> IdealAngleTable {
    let mut table = IdealAngleTable::new();
    for triplet in [Triplet::LEFT_ELBOW, Triplet::RIGHT_ELBOW] {
        table.insert(
            triplet,
            IdealAngles {
                front: Some(degrees),
                ..IdealAngles::default()
            },
        );
    }
    table
}

#[test]
fn test_triplet_keys() {
    assert_eq!("15_13_11".parse::<Triplet>().unwrap(), Triplet::LEFT_ELBOW);
    assert_eq!(
        "left_wrist/left_elbow/left_shoulder".parse::<Triplet>().unwrap(),
        Triplet::LEFT_ELBOW
    );
    assert_eq!(Triplet::RIGHT_ELBOW.to_string(), "12_14_16");
    assert_eq!(
        "15_13_99".parse::<Triplet>(),
        Err(AsanaError::InvalidJointIndex(99))
    );
    assert!(matches!("15_13".parse::<Triplet>(), Err(AsanaError::Table(_))));
    assert!(matches!(
        "left_wrist/left_elbo/left_shoulder".parse::<Triplet>(),
        Err(AsanaError::UnknownJoint(_))
    ));
}

#[test]
fn test_csv_table() {
    let table = IdealAngleTable::from_csv_str(CSV).unwrap();
    assert_eq!(table.len(), 2);
    let left = table.get(&Triplet::LEFT_ELBOW).unwrap();
    assert_eq!(left.front, Some(170.0));
    assert_eq!(left.right, Some(120.0));
    assert_eq!(left.left, None);
    assert_eq!(
        table.ideal(&Triplet::RIGHT_ELBOW, Orientation::Left),
        Some(95.0)
    );
    assert_eq!(table.ideal(&Triplet::RIGHT_ELBOW, Orientation::Right), None);
    assert_eq!(table.ideal(&Triplet::RIGHT_ELBOW, Orientation::Uncertain), None);
}

#[test]
fn test_csv_column_order_and_quotes() {
    let text = "\"Left (degrees)\",\"Landmark Pair\"\n\n90,\"12_14_16\"\n";
    let table = IdealAngleTable::from_csv_str(text).unwrap();
    let angles = table.get(&Triplet::RIGHT_ELBOW).unwrap();
    assert_eq!(angles.left, Some(90.0));
    assert_eq!(angles.front, None);
}

#[test]
fn test_csv_errors() {
    assert!(matches!(
        IdealAngleTable::from_csv_str(""),
        Err(AsanaError::Table(_))
    ));
    assert!(matches!(
        IdealAngleTable::from_csv_str("Landmark Pair,Other\n15_13_11,1\n"),
        Err(AsanaError::Table(_))
    ));
    let bad = "Landmark Pair,Front (degrees)\n15_13_11,straight\n";
    match IdealAngleTable::from_csv_str(bad) {
        Err(AsanaError::Table(msg)) => assert!(msg.contains("line 2")),
        other => panic!("expected a table error, got {other:?}"),
    }
}

#[test]
fn test_json_table() {
    let table =
        IdealAngleTable::from_json_str(r#"{"15_13_11": {"Front": 30}, "12_14_16": {}}"#).unwrap();
    assert_eq!(table.ideal(&Triplet::LEFT_ELBOW, Orientation::Front), Some(30.0));
    assert_eq!(table.ideal(&Triplet::RIGHT_ELBOW, Orientation::Front), None);
    assert!(IdealAngleTable::from_json_str(r#"{"nope": {}}"#).is_err());
}

#[test]
fn test_load_by_extension() {
    let dir = std::env::temp_dir().join(format!("asana-table-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let csv = dir.join("pose.csv");
    let json = dir.join("pose.json");
    std::fs::write(&csv, CSV).unwrap();
    std::fs::write(&json, r#"{"15_13_11": {"Left": 45}}"#).unwrap();

    assert_eq!(IdealAngleTable::load(&csv).unwrap().len(), 2);
    let table = IdealAngleTable::load(&json).unwrap();
    assert_eq!(table.ideal(&Triplet::LEFT_ELBOW, Orientation::Left), Some(45.0));
    assert!(matches!(
        IdealAngleTable::load(dir.join("missing.csv")),
        Err(AsanaError::Io(_))
    ));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_orientation_passes() {
    // Facing left: nose well to the left of both shoulders, level with them.
    let frame = standing_frame().with(Joint::Nose, Vec2::new(0.3, 0.3));
    assert_eq!(Orientation::of_frame(&frame), Orientation::Left);

    let posture = AngleTablePosture::new("Utthita Ekapadasana", front_only(30.0));
    let result = posture.evaluate(&frame);
    assert_eq!(result.accuracy, 100.0);
    assert_eq!(result.label, LABEL_CORRECT);
    assert_eq!(result.feedback, "Pose is correct");
}

#[test]
fn test_angle_outside_tolerance_flags_vertex() {
    let posture = AngleTablePosture::new("Utthita Ekapadasana", front_only(30.0));
    let result = posture.evaluate(&standing_frame());
    assert_eq!(result.label, LABEL_INCORRECT);
    assert!(!result.correctness.is_correct(Joint::LeftElbow));
    assert!(!result.correctness.is_correct(Joint::RightElbow));
    assert_eq!(result.correctness.count_correct(), 31);
    assert!(result.feedback.contains(
        "Angle at 15_13_11 should be between 10.00 and 50.00 degrees, but is 1"
    ));
    assert!(result.feedback.contains("Angle at 12_14_16"));
}

#[test]
fn test_angle_within_tolerance() {
    let posture = AngleTablePosture::new("Straight arms", front_only(170.0));
    let result = posture.evaluate(&standing_frame());
    assert_eq!(result.accuracy, 100.0);
    assert_eq!(result.label, LABEL_CORRECT);
}

#[test]
fn test_custom_triplets_and_tolerance() {
    let knee = Triplet::new(Joint::LeftHip, Joint::LeftKnee, Joint::LeftAnkle);
    let mut table = IdealAngleTable::new();
    table.insert(
        knee,
        IdealAngles {
            front: Some(175.0),
            ..IdealAngles::default()
        },
    );
    let strict = AngleTablePosture::new("Knee", table.clone())
        .with_triplets([knee])
        .with_tolerance(1.0);
    let bent = standing_frame().with(Joint::LeftKnee, Vec2::new(0.6, 0.72));
    let result = strict.evaluate(&bent);
    assert!(!result.correctness.is_correct(Joint::LeftKnee));

    let loose = AngleTablePosture::new("Knee", table).with_triplets([knee]);
    assert_eq!(loose.evaluate(&standing_frame()).accuracy, 100.0);
}
