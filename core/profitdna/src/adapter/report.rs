//! 分析結果の表示形式（Markdown の 3 見出し / JSON）
//!
//! コアは生テキストしか返さない。見出しはここでだけ付ける。

use common::error::Error;

use crate::domain::{AnalysisResult, OutputFormat};

pub const REVENUE_HEADING: &str = "Revenue Strategy Analysis";
pub const IMPLEMENTATION_HEADING: &str = "Implementation Strategy";
pub const SUMMARY_HEADING: &str = "Financial Summary";

pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(result)),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(result)?;
            s.push('\n');
            Ok(s)
        }
    }
}

fn render_markdown(result: &AnalysisResult) -> String {
    let sections = [
        (REVENUE_HEADING, result.revenue_analysis()),
        (IMPLEMENTATION_HEADING, result.implementation_plan()),
        (SUMMARY_HEADING, result.profit_summary()),
    ];
    let mut out = String::new();
    for (i, (heading, body)) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("## ");
        out.push_str(heading);
        out.push_str("\n\n");
        out.push_str(body.trim_end());
        out.push('\n');
    }
    out
}
