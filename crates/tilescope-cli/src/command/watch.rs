use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::Context as _;
use tilescope_evaluator::move_ranker::MoveRanker;
use tilescope_runtime::{
    FrameCadence, FramePipeline, JsonLinesFrameSource, JsonLinesSink, PipelineConfig,
};

use crate::{command::BoardArg, util::Output};

const DEFAULT_TOP: usize = 5;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct WatchArg {
    /// JSON-lines file of detector frames (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Maximum frames processed per second (0 disables pacing)
    #[arg(long, default_value_t = FrameCadence::DEFAULT_RATE)]
    fps: f64,
    /// Number of ranked plays kept in each snapshot
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
    #[clap(flatten)]
    board: BoardArg,
    /// Output file path for the JSON-lines snapshots
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for WatchArg {
    fn default() -> Self {
        Self {
            input: None,
            fps: FrameCadence::DEFAULT_RATE,
            top: DEFAULT_TOP,
            board: BoardArg::default(),
            output: None,
        }
    }
}

fn open_input(input: Option<&PathBuf>) -> anyhow::Result<Box<dyn BufRead>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open frame stream: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

pub(crate) fn run(arg: &WatchArg) -> anyhow::Result<()> {
    let WatchArg {
        input,
        fps,
        top,
        board,
        output,
    } = arg;

    let catalog = board.load_catalog()?;
    let config = PipelineConfig {
        min_confidence: board.min_confidence,
        top_k: *top,
    };
    let mut pipeline = FramePipeline::new(catalog, MoveRanker::default(), config);
    let mut source = JsonLinesFrameSource::new(open_input(input.as_ref())?);
    let output = Output::from_output_path(output.clone())?;
    let output_path = output.target();
    let mut sink = JsonLinesSink::new(output);
    let mut cadence = FrameCadence::from_rate(*fps);

    let frames = pipeline
        .run(&mut source, &mut sink, &mut cadence)
        .with_context(|| format!("Frame pipeline failed while writing to {output_path}"))?;
    tracing::info!(frames, output = %output_path, "watch finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser as _;

    use super::*;
    use crate::command::{CommandArgs, Mode};

    fn parse(args: &[&str]) -> WatchArg {
        let args = CommandArgs::try_parse_from(["tilescope", "watch"].iter().chain(args)).unwrap();
        match args.mode {
            Mode::Watch(arg) => arg,
            mode => panic!("unexpected mode: {mode:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let arg = parse(&[]);
        assert_eq!(arg.input, None);
        assert!((arg.fps - FrameCadence::DEFAULT_RATE).abs() < f64::EPSILON);
        assert_eq!(arg.top, DEFAULT_TOP);
        assert!(arg.board.min_confidence.abs() < f64::EPSILON);
    }

    #[test]
    fn test_watch_frame_file() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("frames.jsonl");
        let output_path = dir.path().join("snapshots.jsonl");
        let frame = r#"{"width": 640, "height": 480, "predictions": [{"class": "red", "bbox": {"x": 90, "y": 225, "width": 16, "height": 16}}]}"#;
        fs::write(&input_path, format!("{frame}\n\n{frame}\n")).unwrap();

        let arg = parse(&[
            "--input",
            input_path.to_str().unwrap(),
            "--fps",
            "0",
            "--top",
            "1",
            "--output",
            output_path.to_str().unwrap(),
        ]);
        run(&arg).unwrap();

        let text = fs::read_to_string(&output_path).unwrap();
        let snapshots: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0]["frame_index"], 0);
        assert_eq!(snapshots[1]["frame_index"], 1);
        assert_eq!(snapshots[1]["state"]["disp1"][0], "red");
        assert_eq!(snapshots[1]["ranking"].as_array().unwrap().len(), 1);
        assert_eq!(snapshots[1]["ranking"][0]["row"], 1);
        assert_eq!(snapshots[1]["ranking"][0]["score"], 3);
    }

    #[test]
    fn test_malformed_frame_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("frames.jsonl");
        let output_path = dir.path().join("snapshots.jsonl");
        fs::write(&input_path, "{\"width\": 640, \"height\": 480}\nnot json\n").unwrap();

        let arg = parse(&[
            "--input",
            input_path.to_str().unwrap(),
            "--fps",
            "0",
            "--output",
            output_path.to_str().unwrap(),
        ]);
        let err = run(&arg).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("line 2"), "{message}");
    }
}
