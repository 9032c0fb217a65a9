//! パイプラインの段階（revenue → implementation → summary の固定順）

/// パイプラインの 1 段階。各段階は 1 回の完了呼び出しで 1 つの出力を作る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Revenue,
    Implementation,
    Summary,
}

impl Stage {
    /// 実行順
    pub const ALL: [Stage; 3] = [Stage::Revenue, Stage::Implementation, Stage::Summary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Implementation => "implementation",
            Self::Summary => "summary",
        }
    }

    /// 1 始まりの段階番号
    pub fn number(&self) -> usize {
        match self {
            Self::Revenue => 1,
            Self::Implementation => 2,
            Self::Summary => 3,
        }
    }

    /// 出力を入れる AnalysisResult のフィールド名
    pub fn output_field(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue_analysis",
            Self::Implementation => "implementation_plan",
            Self::Summary => "profit_summary",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_numbers() {
        let numbers: Vec<usize> = Stage::ALL.iter().map(Stage::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(Stage::Revenue < Stage::Implementation);
        assert!(Stage::Implementation < Stage::Summary);
    }

    #[test]
    fn test_output_fields() {
        assert_eq!(Stage::Revenue.output_field(), "revenue_analysis");
        assert_eq!(Stage::Implementation.output_field(), "implementation_plan");
        assert_eq!(Stage::Summary.output_field(), "profit_summary");
    }
}
