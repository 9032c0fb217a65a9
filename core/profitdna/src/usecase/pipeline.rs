//! 3 段階の分析パイプライン
//!
//! revenue → implementation → summary を厳密に順番に実行する。各段階の入力型は前段の出力を含むため、
//! 前段のテキストが手元に無い限り次段のプロンプトは作れない。並列化はしない。

use crate::domain::prompts::{
    IMPLEMENTATION_PLAN, IMPLEMENTATION_TEMPLATE, PRODUCT, REVENUE_ANALYSIS, REVENUE_TEMPLATE,
    SUMMARY_TEMPLATE, SYSTEM_ROLE,
};
use crate::domain::{AnalysisResult, Bindings, ProductDescription, PromptTemplate, Stage};
use crate::ports::outbound::{LlmCompletion, StageProgress};
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;
use std::time::Instant;

/// 1 段階分の入力（テンプレートと束縛）
pub trait StageInput {
    const STAGE: Stage;
    const TEMPLATE: PromptTemplate;

    fn bindings(&self) -> Bindings<'_>;

    fn render(&self) -> Result<String, Error> {
        Self::TEMPLATE.render(&self.bindings())
    }
}

/// 段階 1 の入力: 商品説明のみ
pub struct RevenueInput<'a> {
    pub product: &'a ProductDescription,
}

impl StageInput for RevenueInput<'_> {
    const STAGE: Stage = Stage::Revenue;
    const TEMPLATE: PromptTemplate = REVENUE_TEMPLATE;

    fn bindings(&self) -> Bindings<'_> {
        Bindings::new().with(PRODUCT, self.product.as_str())
    }
}

/// 段階 2 の入力: 商品説明 + 収益分析
pub struct ImplementationInput<'a> {
    pub product: &'a ProductDescription,
    pub revenue_analysis: &'a str,
}

impl StageInput for ImplementationInput<'_> {
    const STAGE: Stage = Stage::Implementation;
    const TEMPLATE: PromptTemplate = IMPLEMENTATION_TEMPLATE;

    fn bindings(&self) -> Bindings<'_> {
        Bindings::new()
            .with(PRODUCT, self.product.as_str())
            .with(REVENUE_ANALYSIS, self.revenue_analysis)
    }
}

/// 段階 3 の入力: 商品説明 + 収益分析 + 実行計画
pub struct SummaryInput<'a> {
    pub product: &'a ProductDescription,
    pub revenue_analysis: &'a str,
    pub implementation_plan: &'a str,
}

impl StageInput for SummaryInput<'_> {
    const STAGE: Stage = Stage::Summary;
    const TEMPLATE: PromptTemplate = SUMMARY_TEMPLATE;

    fn bindings(&self) -> Bindings<'_> {
        Bindings::new()
            .with(PRODUCT, self.product.as_str())
            .with(REVENUE_ANALYSIS, self.revenue_analysis)
            .with(IMPLEMENTATION_PLAN, self.implementation_plan)
    }
}

/// パイプラインのオーケストレーター
///
/// 状態を持たないので複数セッションから同時に使ってよい。
pub struct AnalysisPipeline {
    log: Arc<dyn Log>,
    progress: Arc<dyn StageProgress>,
}

impl AnalysisPipeline {
    pub fn new(log: Arc<dyn Log>, progress: Arc<dyn StageProgress>) -> Self {
        Self { log, progress }
    }

    /// 文字列の商品説明で実行する。空なら完了クライアントを一度も呼ばずに失敗する。
    pub fn analyze_text(
        &self,
        client: &dyn LlmCompletion,
        description: &str,
    ) -> Result<AnalysisResult, Error> {
        let product = ProductDescription::parse(description)?;
        self.analyze(client, &product)
    }

    /// 3 段階を順に実行し、すべて成功したときだけ結果を返す。
    /// どこかで失敗したらそこで打ち切り、途中までの出力は捨てる。
    pub fn analyze(
        &self,
        client: &dyn LlmCompletion,
        product: &ProductDescription,
    ) -> Result<AnalysisResult, Error> {
        let started = Instant::now();

        let revenue_analysis = self.run_stage(client, &RevenueInput { product })?;
        let implementation_plan = self.run_stage(
            client,
            &ImplementationInput {
                product,
                revenue_analysis: &revenue_analysis,
            },
        )?;
        let profit_summary = self.run_stage(
            client,
            &SummaryInput {
                product,
                revenue_analysis: &revenue_analysis,
                implementation_plan: &implementation_plan,
            },
        )?;

        self.log(
            LogRecord::new(LogLevel::Info, "analysis finished")
                .kind("pipeline")
                .field("elapsed_ms", started.elapsed().as_millis() as u64),
        );
        Ok(AnalysisResult::new(
            revenue_analysis,
            implementation_plan,
            profit_summary,
        ))
    }

    fn run_stage<I: StageInput>(
        &self,
        client: &dyn LlmCompletion,
        input: &I,
    ) -> Result<String, Error> {
        let stage = I::STAGE;
        self.progress.stage_started(stage);
        let started = Instant::now();

        let result = input
            .render()
            .and_then(|prompt| {
                self.log(
                    LogRecord::new(LogLevel::Debug, "stage started")
                        .kind("stage")
                        .field("stage", stage.as_str())
                        .field("prompt_chars", prompt.chars().count() as u64),
                );
                client.complete(SYSTEM_ROLE, &prompt)
            })
            .map_err(|e| Error::stage(stage.as_str(), e));

        let elapsed = started.elapsed();
        match result {
            Ok(text) => {
                self.log(
                    LogRecord::new(LogLevel::Info, "stage finished")
                        .kind("stage")
                        .field("stage", stage.as_str())
                        .field("output", stage.output_field())
                        .field("elapsed_ms", elapsed.as_millis() as u64)
                        .field("output_chars", text.chars().count() as u64),
                );
                self.progress.stage_finished(stage, elapsed);
                Ok(text)
            }
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Error, e.to_string())
                        .kind("stage")
                        .field("stage", stage.as_str())
                        .field("elapsed_ms", elapsed.as_millis() as u64),
                );
                Err(e)
            }
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.log.log(&record.layer("usecase"));
    }
}
