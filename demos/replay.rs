use std::io::BufRead;

use handtrack::{HandObservation, HandPoseTracker};

/// Replays a JSON-lines capture of hand observations, one observation per
/// line with `null` standing for a hand-less frame, and prints every
/// extended-count transition.
fn main() -> Result<(), anyhow::Error> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: replay <capture.jsonl>"))?;

    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);

    let mut tracker = HandPoseTracker::new();
    tracker.set_observer(Box::new(|count: usize| {
        println!("extended fingers: {}", count);
    }));

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let observation: Option<HandObservation> = serde_json::from_str(&line)
            .map_err(|err| anyhow::anyhow!("line {}: {}", line_no + 1, err))?;

        match observation {
            Some(observation) => tracker.update_pose(&observation),
            None => tracker.clear(),
        }
    }

    Ok(())
}
