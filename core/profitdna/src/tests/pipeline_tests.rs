use std::sync::Arc;

use common::adapter::NoopLog;

use crate::adapter::{RecordingProgress, StubLlm};
use crate::domain::prompts::SYSTEM_ROLE;
use crate::domain::{ProductDescription, Stage};
use crate::usecase::pipeline::{AnalysisPipeline, RevenueInput, StageInput};

const MEAL_APP: &str = "A subscription meal-planning app for families";

fn pipeline() -> (AnalysisPipeline, Arc<RecordingProgress>) {
    let progress = Arc::new(RecordingProgress::default());
    let pipeline = AnalysisPipeline::new(Arc::new(NoopLog), progress.clone());
    (pipeline, progress)
}

#[test]
fn test_echo_stub_three_calls_in_order() {
    let (pipeline, progress) = pipeline();
    let stub = StubLlm::echo();

    let result = pipeline.analyze_text(&stub, MEAL_APP).unwrap();

    let prompts = stub.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts.iter().all(|p| p.contains(MEAL_APP)));
    // echo なので各段階の出力 = その段階のプロンプト
    assert_eq!(result.revenue_analysis(), prompts[0]);
    assert!(prompts[1].contains(&prompts[0]));
    assert!(prompts[2].contains(&prompts[0]));
    assert!(prompts[2].contains(&prompts[1]));
    assert_eq!(
        progress.events(),
        vec![
            "start:revenue",
            "finish:revenue",
            "start:implementation",
            "finish:implementation",
            "start:summary",
            "finish:summary",
        ]
    );
}

#[test]
fn test_every_call_uses_system_role() {
    let (pipeline, _) = pipeline();
    let stub = StubLlm::echo();
    pipeline.analyze_text(&stub, MEAL_APP).unwrap();
    assert!(stub.calls().iter().all(|c| c.system_role == SYSTEM_ROLE));
}

#[test]
fn test_meal_planning_scenario() {
    let (pipeline, _) = pipeline();
    let stub = StubLlm::scripted(vec!["REV_OUT", "IMPL_OUT", "SUM_OUT"]);

    let result = pipeline.analyze_text(&stub, MEAL_APP).unwrap();

    assert_eq!(result.revenue_analysis(), "REV_OUT");
    assert_eq!(result.implementation_plan(), "IMPL_OUT");
    assert_eq!(result.profit_summary(), "SUM_OUT");

    let prompts = stub.prompts();
    assert!(!prompts[0].contains("REV_OUT"));
    assert!(prompts[1].contains("REV_OUT"));
    assert!(!prompts[1].contains("IMPL_OUT"));
    assert!(prompts[2].contains("REV_OUT"));
    assert!(prompts[2].contains("IMPL_OUT"));
}

#[test]
fn test_empty_description_makes_no_calls() {
    let (pipeline, progress) = pipeline();
    let stub = StubLlm::echo();
    for text in ["", "   \n"] {
        let err = pipeline.analyze_text(&stub, text).unwrap_err();
        assert!(err.is_usage());
    }
    assert_eq!(stub.call_count(), 0);
    assert!(progress.events().is_empty());
}

#[test]
fn test_first_call_failure_names_revenue_stage() {
    let (pipeline, _) = pipeline();
    let stub = StubLlm::echo().failing_on(1);

    let err = pipeline.analyze_text(&stub, MEAL_APP).unwrap_err();

    assert_eq!(err.stage_name(), Some("revenue"));
    assert!(err.to_string().starts_with("revenue stage failed"));
    assert_eq!(err.exit_code(), 74);
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn test_second_call_failure_stops_before_summary() {
    let (pipeline, progress) = pipeline();
    let stub = StubLlm::scripted(vec!["REV_OUT", "IMPL_OUT", "SUM_OUT"]).failing_on(2);

    let err = pipeline.analyze_text(&stub, MEAL_APP).unwrap_err();

    assert_eq!(err.stage_name(), Some(Stage::Implementation.as_str()));
    assert_eq!(stub.call_count(), 2);
    assert!(!progress.events().contains(&"start:summary".to_string()));
    assert!(!progress.events().contains(&"finish:implementation".to_string()));
}

#[test]
fn test_revenue_prompt_is_deterministic() {
    let product = ProductDescription::parse("X").unwrap();
    let a = RevenueInput { product: &product }.render().unwrap();
    let b = RevenueInput { product: &product }.render().unwrap();
    assert_eq!(a, b);
    assert!(a.contains('X'));
}

#[test]
fn test_values_with_braces_are_not_rescanned() {
    let (pipeline, _) = pipeline();
    let stub = StubLlm::scripted(vec!["uses {{product}} literally", "IMPL_OUT", "SUM_OUT"]);
    pipeline.analyze_text(&stub, MEAL_APP).unwrap();
    assert!(stub.prompts()[1].contains("uses {{product}} literally"));
}
