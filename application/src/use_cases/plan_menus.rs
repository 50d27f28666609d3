//! Plan Menus use case
//!
//! Turns the host's free-form course text into five menus. The external
//! generator is asked first; each response is parsed and checked against
//! the host's ideas, and the deterministic variants are used when every
//! attempt fails.

use crate::config::GenerationParams;
use crate::ports::menu_generator::{GeneratorError, MenuGenerator};
use crate::ports::progress::{AttemptOutcome, NoProgress, ProgressNotifier};
use planner_domain::{
    BudgetContext, CourseIdea, FidelityReport, MenuPromptTemplate, MenuVariant, SlotAssignment,
    assign_slots, build_prompt, build_variant_menus, check_menus, extract_ideas,
    parse_menus_response,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while planning menus
#[derive(Error, Debug)]
pub enum PlanMenusError {
    #[error("max_attempts must be at least 1")]
    NoAttempts,

    #[error("Generation failed after {attempts} attempt(s): {last_error}")]
    GenerationFailed { attempts: usize, last_error: String },
}

/// Input for the PlanMenus use case
#[derive(Debug, Clone)]
pub struct PlanMenusInput {
    /// The host's raw custom-course text (may be empty)
    pub custom_text: String,
    pub budget: BudgetContext,
    pub params: GenerationParams,
}

impl PlanMenusInput {
    pub fn new(custom_text: impl Into<String>) -> Self {
        Self {
            custom_text: custom_text.into(),
            budget: BudgetContext::default(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_budget(mut self, budget: BudgetContext) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Where the returned menus came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuSource {
    /// Accepted generator output
    Generated,
    /// Deterministic variants built from the slot assignment
    Fallback,
}

impl std::fmt::Display for MenuSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuSource::Generated => write!(f, "generated"),
            MenuSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Result of planning menus
#[derive(Debug, Clone, Serialize)]
pub struct PlanMenusOutput {
    pub ideas: Vec<CourseIdea>,
    pub assignment: SlotAssignment,
    pub menus: Vec<MenuVariant>,
    pub source: MenuSource,
    /// Generator calls made (0 for the deterministic path)
    pub attempts: usize,
    /// Fidelity report of the returned menus
    pub report: FidelityReport,
    /// One line per rejected attempt
    pub failures: Vec<String>,
}

impl PlanMenusOutput {
    pub fn is_fallback(&self) -> bool {
        self.source == MenuSource::Fallback
    }
}

/// Build the five deterministic variants without calling any generator.
pub fn plan_deterministic(custom_text: &str, budget: &BudgetContext) -> PlanMenusOutput {
    let ideas = extract_ideas(custom_text);
    let assignment = assign_slots(&ideas);
    fallback_output(ideas, assignment, budget, &GenerationParams::default(), 0, Vec::new())
}

fn fallback_output(
    ideas: Vec<CourseIdea>,
    assignment: SlotAssignment,
    budget: &BudgetContext,
    params: &GenerationParams,
    attempts: usize,
    failures: Vec<String>,
) -> PlanMenusOutput {
    let menus = build_variant_menus(&assignment, budget).to_vec();
    let report = check_menus(&menus, &ideas, &params.fidelity);
    PlanMenusOutput {
        ideas,
        assignment,
        menus,
        source: MenuSource::Fallback,
        attempts,
        report,
        failures,
    }
}

/// Use case for planning menus with an external generator
pub struct PlanMenusUseCase<G: MenuGenerator + 'static> {
    generator: Arc<G>,
}

impl<G: MenuGenerator + 'static> PlanMenusUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: PlanMenusInput) -> Result<PlanMenusOutput, PlanMenusError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: PlanMenusInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<PlanMenusOutput, PlanMenusError> {
        let params = &input.params;
        if params.max_attempts == 0 {
            return Err(PlanMenusError::NoAttempts);
        }

        let ideas = extract_ideas(&input.custom_text);
        let assignment = assign_slots(&ideas);
        progress.on_ideas_assigned(&ideas, &assignment);

        info!(
            "Planning menus with {} host idea(s), {} slot(s) assigned",
            ideas.len(),
            assignment.assigned_count()
        );

        let custom = build_prompt(&input.custom_text, &ideas);
        let prompt = MenuPromptTemplate::generation_prompt(&input.budget, &custom);
        let system = MenuPromptTemplate::system();

        let mut failures = Vec::new();
        for attempt in 1..=params.max_attempts {
            progress.on_attempt_start(attempt, params.max_attempts);
            debug!(
                "Attempt {}/{} via {}",
                attempt,
                params.max_attempts,
                self.generator.name()
            );

            let outcome = match self.call_generator(system, &prompt, params).await {
                Ok(response) => match parse_menus_response(&response) {
                    Ok(menus) if menus.is_empty() => {
                        AttemptOutcome::Malformed("response contained no menus".to_string())
                    }
                    Ok(mut menus) => {
                        fill_costs(&mut menus, &input.budget);
                        let report = check_menus(&menus, &ideas, &params.fidelity);
                        if report.passed() {
                            progress.on_attempt_complete(attempt, &AttemptOutcome::Accepted);
                            info!("Attempt {} accepted ({} menus)", attempt, menus.len());
                            return Ok(PlanMenusOutput {
                                ideas,
                                assignment,
                                menus,
                                source: MenuSource::Generated,
                                attempts: attempt,
                                report,
                                failures,
                            });
                        }
                        for menu in report.failing_menus() {
                            for drift in &menu.drifts {
                                debug!(
                                    "Menu {} drifted at {}: expected {:?}, got {:?}",
                                    menu.menu_id, drift.slot, drift.expected, drift.produced
                                );
                            }
                        }
                        AttemptOutcome::Rejected {
                            drift_count: report.drift_count(),
                        }
                    }
                    Err(e) => AttemptOutcome::Malformed(e.to_string()),
                },
                Err(e) => AttemptOutcome::Failed(e.to_string()),
            };

            warn!("Attempt {} rejected: {}", attempt, outcome);
            progress.on_attempt_complete(attempt, &outcome);
            failures.push(format!("attempt {}: {}", attempt, outcome));
        }

        let attempts = params.max_attempts;
        if !params.fallback_on_failure {
            let last_error = failures
                .last()
                .cloned()
                .unwrap_or_else(|| "no attempts made".to_string());
            return Err(PlanMenusError::GenerationFailed {
                attempts,
                last_error,
            });
        }

        warn!(
            "All {} attempt(s) failed, using deterministic variants",
            attempts
        );
        progress.on_fallback(attempts);
        Ok(fallback_output(
            ideas,
            assignment,
            &input.budget,
            params,
            attempts,
            failures,
        ))
    }

    async fn call_generator(
        &self,
        system: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GeneratorError> {
        let call = self.generator.generate(system, prompt);
        match params.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| GeneratorError::Timeout)?,
            None => call.await,
        }
    }
}

/// Generated menus that omit costs get the host's budget strings.
fn fill_costs(menus: &mut [MenuVariant], budget: &BudgetContext) {
    for menu in menus {
        if menu.food_cost.trim().is_empty() {
            menu.food_cost = budget.food_cost().to_string();
        }
        if menu.wine_cost.trim().is_empty() {
            menu.wine_cost = budget.wine_cost().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use planner_domain::CourseSlot;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Mocks ====================

    struct MockGenerator {
        responses: Mutex<VecDeque<Result<String, GeneratorError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        fn new(responses: Vec<Result<String, GeneratorError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MenuGenerator for MockGenerator {
        async fn generate(
            &self,
            _system_prompt: &str,
            prompt: &str,
        ) -> Result<String, GeneratorError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GeneratorError::Other("No more responses".to_string())))
        }
    }

    /// Never answers within any reasonable timeout.
    struct SlowGenerator;

    #[async_trait]
    impl MenuGenerator for SlowGenerator {
        async fn generate(&self, _: &str, _: &str) -> Result<String, GeneratorError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_ideas_assigned(&self, ideas: &[CourseIdea], _assignment: &SlotAssignment) {
            self.events
                .lock()
                .unwrap()
                .push(format!("ideas:{}", ideas.len()));
        }

        fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}/{}", attempt, max_attempts));
        }

        fn on_attempt_complete(&self, attempt: usize, outcome: &AttemptOutcome) {
            let tag = match outcome {
                AttemptOutcome::Accepted => "accepted",
                AttemptOutcome::Rejected { .. } => "rejected",
                AttemptOutcome::Malformed(_) => "malformed",
                AttemptOutcome::Failed(_) => "failed",
            };
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", attempt, tag));
        }

        fn on_fallback(&self, attempts: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("fallback:{}", attempts));
        }
    }

    // ==================== Helpers ====================

    fn menus_json(names: [&str; 5]) -> String {
        let menus: Vec<serde_json::Value> = (1..=5)
            .map(|id| {
                let courses: Vec<serde_json::Value> = CourseSlot::ALL
                    .iter()
                    .zip(names)
                    .map(|(slot, name)| serde_json::json!({"course": slot.label(), "name": name}))
                    .collect();
                serde_json::json!({
                    "id": id,
                    "style": format!("Style {}", id),
                    "description": "",
                    "courses": courses,
                })
            })
            .collect();
        format!(
            "Here you go:\n```json\n{}\n```",
            serde_json::json!({ "menus": menus })
        )
    }

    fn faithful() -> String {
        menus_json([
            "Gougères",
            "Seared scallops",
            "Chilled pea soup",
            "Braised duck breast with cherries",
            "Vanilla panna cotta",
        ])
    }

    fn drifted() -> String {
        menus_json([
            "Gougères",
            "Seared scallops",
            "Chilled pea soup",
            "Roast lamb",
            "Chocolate mousse",
        ])
    }

    const HOST_TEXT: &str = "Dessert: panna cotta\nduck breast";

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_first_attempt_accepted() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(faithful())]));
        let use_case = PlanMenusUseCase::new(generator.clone());

        let output = use_case.execute(PlanMenusInput::new(HOST_TEXT)).await.unwrap();

        assert_eq!(output.source, MenuSource::Generated);
        assert_eq!(output.attempts, 1);
        assert_eq!(output.menus.len(), 5);
        assert!(output.report.passed());
        assert!(output.failures.is_empty());
        assert_eq!(generator.calls(), 1);
        assert_eq!(output.menus[0].food_cost, planner_domain::menu::DEFAULT_FOOD_COST);
    }

    #[tokio::test]
    async fn test_prompt_contains_custom_courses_and_budget() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(faithful())]));
        let use_case = PlanMenusUseCase::new(generator.clone());
        let input = PlanMenusInput::new(HOST_TEXT)
            .with_budget(BudgetContext::new("$20 per guest", "$10 per guest"));

        use_case.execute(input).await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Course 1: Dessert: panna cotta"));
        assert!(prompts[0].contains("Course 2: duck breast"));
        assert!(prompts[0].contains("$20 per guest"));
    }

    #[tokio::test]
    async fn test_retry_after_drift() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(drifted()), Ok(faithful())]));
        let use_case = PlanMenusUseCase::new(generator.clone());
        let progress = RecordingProgress::default();

        let output = use_case
            .execute_with_progress(PlanMenusInput::new(HOST_TEXT), &progress)
            .await
            .unwrap();

        assert_eq!(output.source, MenuSource::Generated);
        assert_eq!(output.attempts, 2);
        assert_eq!(output.failures.len(), 1);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "ideas:2",
                "start:1/2",
                "done:1:rejected",
                "start:2/2",
                "done:2:accepted"
            ]
        );
    }

    #[tokio::test]
    async fn test_fallback_after_exhaustion() {
        let generator = Arc::new(MockGenerator::new(vec![
            Ok("I cannot help with that".to_string()),
            Err(GeneratorError::RequestFailed("exit status 1".to_string())),
        ]));
        let use_case = PlanMenusUseCase::new(generator.clone());
        let progress = RecordingProgress::default();

        let output = use_case
            .execute_with_progress(PlanMenusInput::new(HOST_TEXT), &progress)
            .await
            .unwrap();

        assert!(output.is_fallback());
        assert_eq!(output.attempts, 2);
        assert_eq!(output.failures.len(), 2);
        assert!(output.report.passed());
        assert_eq!(output.menus.len(), 5);
        assert_eq!(
            output.menus[0].courses[3].name,
            "duck breast (classic variation)"
        );
        assert_eq!(
            progress.events.lock().unwrap().last().map(String::as_str),
            Some("fallback:2")
        );
    }

    #[tokio::test]
    async fn test_no_fallback_returns_error() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(drifted())]));
        let use_case = PlanMenusUseCase::new(generator);
        let params = GenerationParams::default()
            .with_max_attempts(1)
            .with_fallback(false);

        let err = use_case
            .execute(PlanMenusInput::new(HOST_TEXT).with_params(params))
            .await
            .unwrap_err();

        match err {
            PlanMenusError::GenerationFailed {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 1);
                assert!(last_error.contains("drifted"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_zero_attempts_rejected() {
        let generator = Arc::new(MockGenerator::new(vec![]));
        let use_case = PlanMenusUseCase::new(generator.clone());
        let params = GenerationParams::default().with_max_attempts(0);

        let err = use_case
            .execute(PlanMenusInput::new(HOST_TEXT).with_params(params))
            .await
            .unwrap_err();

        assert!(matches!(err, PlanMenusError::NoAttempts));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_unconstrained_accepts_any_menus() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(drifted())]));
        let use_case = PlanMenusUseCase::new(generator);

        let output = use_case.execute(PlanMenusInput::new("   ")).await.unwrap();

        assert_eq!(output.source, MenuSource::Generated);
        assert!(output.ideas.is_empty());
        assert!(!output.report.constrained);
    }

    #[tokio::test]
    async fn test_empty_menu_list_is_malformed() {
        let generator = Arc::new(MockGenerator::new(vec![Ok(r#"{"menus": []}"#.to_string())]));
        let use_case = PlanMenusUseCase::new(generator);
        let params = GenerationParams::default().with_max_attempts(1);

        let output = use_case
            .execute(PlanMenusInput::new("").with_params(params))
            .await
            .unwrap();

        assert!(output.is_fallback());
        assert!(output.failures[0].contains("no menus"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_as_failed_attempt() {
        let use_case = PlanMenusUseCase::new(Arc::new(SlowGenerator));
        let params = GenerationParams::default()
            .with_max_attempts(1)
            .with_timeout(Some(Duration::from_secs(5)));

        let output = use_case
            .execute(PlanMenusInput::new(HOST_TEXT).with_params(params))
            .await
            .unwrap();

        assert!(output.is_fallback());
        assert!(output.failures[0].contains("Timeout"));
    }

    #[test]
    fn test_plan_deterministic() {
        let output = plan_deterministic(
            "Amuse: Oyster\nSalad\nSoup\nSteak\nChocolate tart",
            &BudgetContext::default(),
        );

        assert_eq!(output.attempts, 0);
        assert_eq!(output.ideas.len(), 5);
        assert!(output.report.passed());
        for menu in &output.menus {
            assert!(menu.courses[0].name.starts_with("Oyster"));
        }
    }
}
