use std::sync::{Arc, Mutex};

use common::adapter::NoopLog;
use common::error::Error;

use crate::adapter::{RecordingProgress, StubLlm};
use crate::domain::{AnalysisResult, ApiKey};
use crate::ports::outbound::{CompletionClientFactory, LlmCompletion, ProfileLister};
use crate::usecase::{AnalysisPipeline, AnalyzerDeps, AnalyzerUseCase, ModelDeps, ObsDeps, SessionState};

const MEAL_APP: &str = "A subscription meal-planning app for families";

/// 常に同じ StubLlm を返し、受け取ったキーを記録する
struct FixedClientFactory {
    client: Arc<StubLlm>,
    keys: Mutex<Vec<String>>,
}

impl CompletionClientFactory for FixedClientFactory {
    fn create(&self, credential: &ApiKey) -> Result<Arc<dyn LlmCompletion>, Error> {
        self.keys.lock().unwrap().push(credential.expose().to_string());
        Ok(self.client.clone())
    }
}

struct FixedProfiles;

impl ProfileLister for FixedProfiles {
    fn list_profiles(&self) -> Result<(Vec<String>, Option<String>), Error> {
        Ok((vec!["echo".into(), "openai".into()], Some("openai".into())))
    }
}

fn use_case(stub: StubLlm) -> (AnalyzerUseCase, Arc<FixedClientFactory>) {
    let factory = Arc::new(FixedClientFactory {
        client: Arc::new(stub),
        keys: Mutex::new(Vec::new()),
    });
    let deps = AnalyzerDeps {
        model: ModelDeps {
            client_factory: factory.clone(),
            profile_lister: Arc::new(FixedProfiles),
        },
        obs: ObsDeps {
            log: Arc::new(NoopLog),
        },
    };
    let pipeline = AnalysisPipeline::new(Arc::new(NoopLog), Arc::new(RecordingProgress::default()));
    (AnalyzerUseCase::new(deps, pipeline), factory)
}

#[test]
fn test_connect_stores_credential_and_client() {
    let (uc, factory) = use_case(StubLlm::echo());
    let mut session = SessionState::new();
    uc.connect(&mut session, " sk-test ").unwrap();
    assert!(session.is_connected());
    assert_eq!(session.credential().map(|k| k.expose()), Some("sk-test"));
    assert_eq!(*factory.keys.lock().unwrap(), vec!["sk-test".to_string()]);
}

#[test]
fn test_connect_rejects_empty_credential() {
    let (uc, factory) = use_case(StubLlm::echo());
    let mut session = SessionState::new();
    let err = uc.connect(&mut session, "   ").unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 64);
    assert!(!session.is_connected());
    assert!(factory.keys.lock().unwrap().is_empty());
}

#[test]
fn test_analyze_without_client_makes_no_call() {
    let (uc, factory) = use_case(StubLlm::echo());
    let mut session = SessionState::new();
    let err = uc.analyze(&mut session, MEAL_APP).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(factory.client.call_count(), 0);
    assert!(session.result().is_none());
}

#[test]
fn test_analyze_stores_result() {
    let (uc, _) = use_case(StubLlm::scripted(vec!["REV_OUT", "IMPL_OUT", "SUM_OUT"]));
    let mut session = SessionState::new();
    uc.connect(&mut session, "sk-test").unwrap();

    let result = uc.analyze(&mut session, MEAL_APP).unwrap().clone();

    assert_eq!(result, AnalysisResult::new("REV_OUT", "IMPL_OUT", "SUM_OUT"));
    assert_eq!(session.result(), Some(&result));
}

#[test]
fn test_failed_run_keeps_previous_result() {
    // 1 回目は成功（3 回呼ぶ）、2 回目は 5 回目の呼び出し = implementation で失敗
    let stub = StubLlm::scripted(vec!["REV_1", "IMPL_1", "SUM_1", "REV_2"]).failing_on(5);
    let (uc, factory) = use_case(stub);
    let mut session = SessionState::new();
    uc.connect(&mut session, "sk-test").unwrap();

    uc.analyze(&mut session, MEAL_APP).unwrap();
    let err = uc.analyze(&mut session, "Another product").unwrap_err();

    assert_eq!(err.stage_name(), Some("implementation"));
    assert_eq!(factory.client.call_count(), 5);
    assert_eq!(
        session.result(),
        Some(&AnalysisResult::new("REV_1", "IMPL_1", "SUM_1"))
    );
}

#[test]
fn test_empty_description_keeps_previous_result() {
    let (uc, factory) = use_case(StubLlm::scripted(vec!["REV_OUT", "IMPL_OUT", "SUM_OUT"]));
    let mut session = SessionState::new();
    uc.connect(&mut session, "sk-test").unwrap();
    uc.analyze(&mut session, MEAL_APP).unwrap();

    let err = uc.analyze(&mut session, " ").unwrap_err();

    assert!(err.is_usage());
    assert_eq!(factory.client.call_count(), 3);
    assert!(session.result().is_some());
}

#[test]
fn test_sessions_are_independent() {
    let (uc, _) = use_case(StubLlm::echo());
    let mut a = SessionState::new();
    let b = SessionState::new();
    uc.connect(&mut a, "sk-a").unwrap();
    uc.analyze(&mut a, MEAL_APP).unwrap();
    assert!(a.result().is_some());
    assert!(!b.is_connected());
    assert!(b.result().is_none());
}

#[test]
fn test_list_profiles() {
    let (uc, _) = use_case(StubLlm::echo());
    let (names, default) = uc.list_profiles().unwrap();
    assert_eq!(names, vec!["echo", "openai"]);
    assert_eq!(default.as_deref(), Some("openai"));
}
