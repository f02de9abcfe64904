//! End-to-end flow: form selection, pipeline editing, confirmation
//! summary, and the submission payload.

use tsprep::prelude::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn form_to_submission_flow() {
    let catalog = Catalog::global();
    let mut pipeline = Pipeline::new();

    // First step: normalization, picked and filled in through the form.
    let mut form = StepForm::new();
    form.select_category("scaling");
    form.select_step(catalog, "norm").unwrap();
    form.set_input(0, "0").unwrap();
    form.set_input(1, "1").unwrap();
    assert!(form.validate(catalog).unwrap().unwrap().is_valid());
    form.push_into(catalog, &mut pipeline).unwrap();

    // Second step: smoother, corrected after a failing first attempt.
    form.clear();
    form.select_step(catalog, "moving_avg_smoother").unwrap();
    form.set_input(0, "2.5").unwrap();
    let outcome = form.validate(catalog).unwrap().unwrap();
    assert_eq!(
        outcome.failures(),
        ["Filter window size must be an integer."]
    );
    form.set_input(0, "3").unwrap();
    assert!(form.validate(catalog).unwrap().unwrap().is_valid());
    form.push_into(catalog, &mut pipeline).unwrap();

    // Confirmation view.
    let summary = summarize(&pipeline, catalog).unwrap();
    let lines: Vec<String> = summary.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        lines,
        [
            "1: Normalize  Min=0 Max=1",
            "2: Moving average smoother  Window size=3",
        ]
    );

    // Run.
    let submission = Submission::prepare(
        catalog,
        vec!["temp/abc123/data.csv".to_string()],
        pipeline,
        SubmitOptions {
            download: true,
            visualizations: false,
        },
    )
    .unwrap();

    let payload: serde_json::Value =
        serde_json::from_str(&submission.to_json().unwrap()).unwrap();
    assert_eq!(payload["pipeline"][0]["stepId"], "norm");
    assert_eq!(payload["pipeline"][1]["inputs"][0], "3");
    assert_eq!(payload["options"]["download"], 1);
    assert_eq!(payload["options"]["visualizations"], 0);
}

#[test]
fn removed_steps_never_reach_the_backend() {
    let catalog = Catalog::global();
    let mut pipeline = Pipeline::new();
    pipeline
        .push_with_inputs(catalog, "norm", strings(&["0", "1"]))
        .unwrap();
    pipeline.push(catalog, "stand").unwrap();
    pipeline.push(catalog, "nothing").unwrap();

    let removed = pipeline.remove(1).unwrap();
    assert_eq!(removed.step_id(), "stand");

    let submission = Submission::prepare(
        catalog,
        vec!["data.csv".to_string()],
        pipeline,
        SubmitOptions::default(),
    )
    .unwrap();

    let payload: serde_json::Value =
        serde_json::from_str(&submission.to_json().unwrap()).unwrap();
    let ids: Vec<&str> = payload["pipeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["stepId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["norm", "nothing"]);
}

#[test]
fn invalid_edits_are_caught_before_submission() {
    let catalog = Catalog::global();
    let mut pipeline = Pipeline::new();
    let pos = pipeline.push(catalog, "norm").unwrap();
    pipeline.set_input(pos, 0, "10").unwrap();
    pipeline.set_input(pos, 1, "0").unwrap();

    let outcomes = pipeline.check(catalog).unwrap();
    assert_eq!(
        outcomes[0].failures(),
        ["Normalization minimum must be less than the maximum."]
    );

    let err = Submission::prepare(
        catalog,
        vec!["data.csv".to_string()],
        pipeline,
        SubmitOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PrepError::InvalidPipeline { position: 0, .. }));
}

#[test]
fn pipeline_round_trips_through_the_wire_format() {
    let catalog = Catalog::global();
    let mut pipeline = Pipeline::new();
    pipeline
        .push_with_inputs(catalog, "moving_avg_smoother", strings(&["7"]))
        .unwrap();
    pipeline.push(catalog, "y-j").unwrap();

    let json = serde_json::to_string(&pipeline).unwrap();
    let back: Pipeline = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pipeline);

    // A decoded pipeline still validates against the same catalog.
    assert!(back.check(catalog).unwrap().iter().all(Validation::is_valid));
}
