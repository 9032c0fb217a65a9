//! 分析結果（1 回のパイプライン実行の出力）

use serde::Serialize;

/// 3 つの段階の出力をまとめた結果
///
/// 3 フィールドすべてが揃ったときにしか作れない（部分的な結果は存在しない）。
/// 各フィールドはモデルの生テキストで、見出しなどの整形は表示側の責務。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    revenue_analysis: String,
    implementation_plan: String,
    profit_summary: String,
}

impl AnalysisResult {
    pub fn new(
        revenue_analysis: impl Into<String>,
        implementation_plan: impl Into<String>,
        profit_summary: impl Into<String>,
    ) -> Self {
        Self {
            revenue_analysis: revenue_analysis.into(),
            implementation_plan: implementation_plan.into(),
            profit_summary: profit_summary.into(),
        }
    }

    pub fn revenue_analysis(&self) -> &str {
        &self.revenue_analysis
    }

    pub fn implementation_plan(&self) -> &str {
        &self.implementation_plan
    }

    pub fn profit_summary(&self) -> &str {
        &self.profit_summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_has_exactly_three_keys() {
        let r = AnalysisResult::new("REV_OUT", "IMPL_OUT", "SUM_OUT");
        let v = serde_json::to_value(&r).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["revenue_analysis"], "REV_OUT");
        assert_eq!(obj["implementation_plan"], "IMPL_OUT");
        assert_eq!(obj["profit_summary"], "SUM_OUT");
    }
}
