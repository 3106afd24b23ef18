//! Batch driver: frames and renders the jobs in a TOML job file against an
//! in-memory scene and prints a JSON report of every placement and curve.
//!
//! ```text
//! studioframe <job.toml> [options.toml]
//! studioframe --schema
//! studioframe --presets <dir>
//! ```

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use studioframe::camera::CameraRig;
use studioframe::error::StudioError;
use studioframe::options::Options;
use studioframe::scene::SceneSnapshot;
use studioframe::studio::{
    run_still, run_turntable, JobFile, MemoryHost, RenderRecord,
    StillOutcome, TurntableOutcome,
};

#[derive(Serialize)]
struct Report {
    collection: String,
    stills: Vec<StillOutcome>,
    turntable: Option<TurntableOutcome>,
    renders: Vec<RenderRecord>,
}

fn run(job_path: &Path, options_path: Option<&Path>) -> Result<Report, StudioError> {
    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let job = JobFile::load(job_path)?;
    log::info!(
        "loaded job '{}': {} objects, {} stills, turntable: {}",
        job.collection,
        job.objects.len(),
        job.stills.len(),
        job.turntable.is_some()
    );

    let mut host = MemoryHost::new(SceneSnapshot::new(job.objects));
    let mut rig = CameraRig::default();

    let stills = job
        .stills
        .iter()
        .filter_map(|still| {
            run_still(&mut host, &mut rig, &job.collection, still, &options)
        })
        .collect();
    let turntable = job.turntable.as_ref().map(|turntable| {
        run_turntable(&mut host, &mut rig, &job.collection, turntable, &options)
    });

    Ok(Report {
        collection: job.collection,
        stills,
        turntable,
        renders: host.renders().to_vec(),
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to encode report: {e}"))
}

/// JSON output for the given command-line arguments.
fn dispatch(args: &[String]) -> Result<String, String> {
    match args {
        [flag] if flag == "--schema" => to_json(&Options::json_schema()),
        [flag, dir] if flag == "--presets" => {
            to_json(&Options::list_presets(Path::new(dir)))
        }
        [job] => run(Path::new(job), None)
            .map_err(|e| e.to_string())
            .and_then(|report| to_json(&report)),
        [job, options] => run(Path::new(job), Some(Path::new(options)))
            .map_err(|e| e.to_string())
            .and_then(|report| to_json(&report)),
        _ => Err(
            "Usage: studioframe <job.toml> [options.toml] | --schema | --presets <dir>"
                .to_owned(),
        ),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = dispatch(&args).and_then(|json| {
        writeln!(std::io::stdout().lock(), "{json}")
            .map_err(|e| format!("failed to write report: {e}"))
    });

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| (*a).to_owned()).collect()
    }

    #[test]
    fn presets_lists_toml_stems() {
        let dir = std::env::temp_dir().join("studioframe-cli-presets");
        let options = Options::default();
        options.save(&dir.join("soft.toml")).unwrap();
        options.save(&dir.join("hard.toml")).unwrap();

        let json =
            dispatch(&args(&["--presets", dir.to_str().unwrap()])).unwrap();
        let names: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(names, vec!["hard".to_owned(), "soft".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn job_file_produces_report() {
        let dir = std::env::temp_dir().join("studioframe-cli-job");
        std::fs::create_dir_all(&dir).unwrap();
        let job = dir.join("job.toml");
        std::fs::write(
            &job,
            r#"
collection = "Product"

[[objects]]
name = "Body"
collections = ["Product"]
vertices = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 0.5]]

[[stills]]
view = "Front"

[turntable.motion]
duration = 60
"#,
        )
        .unwrap();

        let json = dispatch(&args(&[job.to_str().unwrap()])).unwrap();
        let report: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(report["stills"][0]["output"], "Product_Front");
        assert_eq!(report["turntable"]["total_frames"], 60);
        assert_eq!(report["renders"].as_array().unwrap().len(), 2);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(dispatch(&[]).unwrap_err().starts_with("Usage"));
        assert!(dispatch(&args(&["/nonexistent/studioframe/job.toml"])).is_err());
    }
}
