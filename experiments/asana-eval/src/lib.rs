use {
    anyhow::{Context, Result},
    asana::{Evaluation, PoseRequest, RawLandmark, Registry, SessionStats},
    serde::{Deserialize, Serialize},
    std::io::Write,
};

/// Recorded landmark frames, either bare or wrapped in a client request.
#[derive(Deserialize)]
#[serde(untagged)]
enum Recording {
    Frames(Vec<Vec<RawLandmark>>),
    Request(PoseRequest),
}

/// One output line.
#[derive(Serialize)]
pub struct FrameResult<'a> {
    pub frame: usize,
    #[serde(flatten)]
    pub evaluation: &'a Evaluation,
}

pub fn parse_recording(json: &str) -> Result<Vec<Vec<RawLandmark>>> {
    let recording = serde_json::from_str(json).context("unrecognized recording")?;
    Ok(match recording {
        Recording::Frames(frames) => frames,
        Recording::Request(request) => request.pose_landmarks,
    })
}

/// Score every frame against `id`, writing one JSON line per frame to `out`.
pub fn evaluate_frames(
    registry: &Registry,
    id: &str,
    frames: &[Vec<RawLandmark>],
    out: &mut impl Write,
) -> Result<SessionStats> {
    let mut stats = SessionStats::default();
    for (frame, landmarks) in frames.iter().enumerate() {
        let evaluation = registry.evaluate_landmarks(id, landmarks);
        stats.record(&evaluation);
        serde_json::to_writer(
            &mut *out,
            &FrameResult {
                frame,
                evaluation: &evaluation,
            },
        )?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(stats)
}
