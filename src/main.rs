use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use nalgebra::DMatrix;

use piview::error::PiError;
use piview::formats::matrix::read_matrix;
use piview::html::{ScriptSource, Viewer};
use piview::options::ViewOptions;
use piview::payload::Fields;
use piview::token::RandomTokens;
use piview::trajectory::Trajectory;

#[derive(Parser, Debug)]
#[command(name = "piview")]
#[command(about = "Render a molecular structure as an embeddable HTML viewer")]
struct Args {
    /// XYZ or extended XYZ structure file
    structure: PathBuf,

    /// Index of the frame to render
    #[arg(long, default_value_t = 0)]
    frame: usize,

    /// JSON file with view options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Numeric per-atom column used to color atoms
    #[arg(long)]
    props: Option<String>,

    /// Square matrix file of pairwise interactions
    #[arg(long)]
    inter: Option<PathBuf>,

    /// Rendering script to inline instead of the bundled one
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the HTML here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_matrix(path: &Path) -> Result<DMatrix<f64>, PiError> {
    read_matrix(BufReader::new(File::open(path)?))
}

fn run(args: Args) -> Result<(), PiError> {
    let options = match &args.config {
        Some(path) => ViewOptions::from_json_file(path)?,
        None => ViewOptions::default(),
    };

    let mut trajectory = Trajectory::open(&args.structure)?;
    let frame = trajectory.read_at(args.frame)?;
    debug!(
        "rendering frame {} of {} ({} atoms)",
        args.frame,
        trajectory.size,
        frame.size()
    );

    let props = match &args.props {
        Some(name) => Some(frame.atom_property(name)?),
        None => None,
    };
    let inter = match &args.inter {
        Some(path) => Some(load_matrix(path)?),
        None => None,
    };

    let mut fields = Fields::default();
    if let Some(props) = &props {
        fields = fields.with_props(props);
    }
    if let Some(inter) = &inter {
        fields = fields.with_inter(inter);
    }

    let script = match args.script {
        Some(path) => ScriptSource::new(path),
        None => ScriptSource::default(),
    };
    let mut viewer = Viewer::new(script, RandomTokens::from_entropy());
    let html = viewer.render(&frame, fields, &options)?;

    match &args.output {
        Some(path) => fs::write(path, html.as_str())?,
        None => println!("{html}"),
    }
    Ok(())
}

/// The single line written to stderr when rendering fails.
fn failure_message(error: &PiError) -> String {
    format!("piview: {error}")
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn parse_all_options() {
        let args = Args::try_parse_from([
            "piview", "water.xyz", "--frame", "2", "--props", "charge", "--output", "out.html",
        ])
        .unwrap();
        assert_eq!(args.structure, PathBuf::from("water.xyz"));
        assert_eq!(args.frame, 2);
        assert_eq!(args.props.as_deref(), Some("charge"));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.config, None);
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["piview", "water.xyz"]).unwrap();
        assert_eq!(args.frame, 0);
        assert!(args.inter.is_none());
        assert!(args.script.is_none());
    }

    #[test]
    fn missing_value() {
        let err = Args::try_parse_from(["piview", "water.xyz", "--frame"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn unknown_option() {
        let err = Args::try_parse_from(["piview", "water.xyz", "--colour", "red"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn structure_is_required() {
        let err = Args::try_parse_from(["piview", "--frame", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_structure_fails_with_one_line() {
        let args = Args::try_parse_from(["piview", "./src/tests-data/xyz/nope.xyz"]).unwrap();
        let message = failure_message(&run(args).unwrap_err());
        assert!(message.starts_with("piview: "));
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn render_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("water.html");
        let args = Args::try_parse_from([
            "piview",
            "./src/tests-data/xyz/extended.xyz",
            "--props",
            "charge",
            "--inter",
            "./src/tests-data/matrix/water.txt",
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(args).unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<piview"));
        assert!(html.contains(r##"props='["#"##));
        assert!(html.contains(r##"[0,1,"##));
    }
}
