//! 3 段階のプロンプトテンプレートと system ロール
//!
//! 後段のテンプレートは前段の出力を本文に埋め込み、「上の分析」を参照する形で指示する。

use super::template::PromptTemplate;

/// 全呼び出しで共通の system ロール
pub const SYSTEM_ROLE: &str = "You are a professional business analyst and product strategist focused on maximizing revenue and profit potential.";

pub const PRODUCT: &str = "product";
pub const REVENUE_ANALYSIS: &str = "revenue_analysis";
pub const IMPLEMENTATION_PLAN: &str = "implementation_plan";

/// 段階 1: 収益戦略
pub const REVENUE_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "revenue",
    r#"Map how {{product}} will generate and scale revenue through the following framework:

## 1. Product Launch ──➤ Revenue Streams
- List primary revenue channels
- Analyse revenue potential for each channel:
  * Projected revenue range
  * Time to revenue
  * Resource requirements
  * Market validation evidence
  * Customer feedback integration points

## 2. Financial Modeling & Projections
- Detailed financial breakdown:
  * Unit economics analysis
  * Pricing strategy optimization
  * Break-even analysis
  * Cash flow projections
  * Funding requirements
  * ROI scenarios
  * Sensitivity analysis
  * Risk-adjusted returns

## 3. Market Conversion Strategy
- Detail customer acquisition approach:
  * Target customer segments with psychographic profiling
  * AI-driven customer journey mapping
  * Predictive analytics for conversion optimization
  * Machine learning-based lead scoring
  * Dynamic CAC and LTV projections
  * Real-time market sentiment analysis
  * Automated customer behavior tracking
  * A/B testing framework
  * Conversion rate optimization (CRO) strategy

## 4. Competitive Edge Development
- Outline market differentiation:
  * AI-enhanced unique value propositions
  * Real-time competitor analysis matrix
  * Predictive market position strategy
  * Data-driven defensible advantages
  * Innovation pipeline based on market signals
  * Patent and IP strategy
  * Brand positioning matrix

## 5. Scale Strategy & Growth
- Define growth multipliers:
  * AI-optimized market expansion roadmap
  * Revenue multiplication tactics with feedback loops
  * Automated resource scaling plan
  * Long-term sustainability factors
  * Continuous improvement cycles
  * International expansion strategy
  * Partnership ecosystem development

### Feedback Integration Systems
- Customer Voice Integration:
  * Real-time feedback collection mechanisms
  * AI-powered sentiment analysis
  * Customer behavior pattern recognition
  * Automated response systems
  * Experience optimization loops

### Market Intelligence
- Data-Driven Decision Points:
  * AI market trend analysis
  * Competitive movement tracking
  * Customer preference evolution
  * Demand prediction models
  * Price optimization algorithms
  * Market saturation analysis
  * Emerging technology impact

## Additional Critical Factors
- Risk assessment with predictive modeling
- Resource allocation optimization
- AI-driven timeline projections
- Real-time revenue & profit metrics
- Automated performance monitoring
- Continuous feedback integration"#,
    &[PRODUCT],
);

/// 段階 2: 実行計画（段階 1 の出力を埋め込む）
pub const IMPLEMENTATION_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "implementation",
    r#"Product: {{product}}

# Revenue Analysis
{{revenue_analysis}}

Based on the revenue analysis above, write the implementation guide for {{product}}.

## Implementation Guide:
1. Pre-Launch Checklist:
  - Product readiness assessment with AI validation
  - Data-driven market research validation
  - Real-time competition analysis
  - Multi-channel preparation
  - Team alignment with feedback systems

2. Launch Execution:
  - AI-optimized phase-wise rollout
  - Dynamic marketing campaign timing
  - Intelligent support system activation
  - Advanced analytics implementation:
    * Customer behavior tracking
    * Predictive analytics
    * Machine learning models
    * Real-time dashboards
  - Multi-layer feedback loops:
    * Customer feedback integration
    * Market response analysis
    * Revenue performance tracking
    * System effectiveness measures

3. Post-Launch Monitoring:
  - AI-powered performance dashboards
  - Automated user feedback collection
  - Real-time competitive monitoring
  - Dynamic adjustment protocols
  - Predictive growth tracking
  - Revenue optimization metrics
  - Market penetration analysis

### Success Metrics:
1. Revenue Metrics
  - Monthly Recurring Revenue (MRR)
  - Annual Recurring Revenue (ARR)
  - Revenue Growth Rate
  - Revenue per Customer
  - Customer Acquisition Cost (CAC)
  - Customer Lifetime Value (LTV)
  - Payback Period
  - Gross Margin

2. Profit Metrics
  - Net Profit Margin
  - Operating Profit Margin
  - Cash Flow from Operations
  - Return on Investment (ROI)
  - Unit Economics
  - Burn Rate
  - Runway Analysis"#,
    &[PRODUCT, REVENUE_ANALYSIS],
);

/// 段階 3: 利益サマリー（段階 1・2 の出力を埋め込む）
pub const SUMMARY_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "summary",
    r#"Product: {{product}}

# Revenue Analysis
{{revenue_analysis}}

# Implementation Plan
{{implementation_plan}}

Based on the revenue analysis and implementation plan above:

Map how {{product}} will print money through AI-driven optimization:

**Product** ━━┣━━> **Smart Money Move** (AI-predicted revenue potential: [H/M/L]) ━━> **Optimized Cash Win**
**       **┣━━> **Intelligent Sales System** (ML-enhanced conversion path) ━━> **Data-Driven Profit Pattern**
**       **┣━━> **Predictive Market Domination** (AI competitor analysis) ━━> **Strategic Market Share Capture**
**       **┗━━> **Neural Scale Engine** (AI growth multiplier) ━━> **Sustainable Empire Build**

Key Focus Areas:
1. Revenue Maximization
2. Profit Optimization
3. Market Penetration
4. Customer Monetization
5. Cost Efficiency
6. Growth Acceleration
7. Cash Flow Management

Success Indicators:
1. Revenue Growth
2. Profit Margins
3. Market Share
4. Customer LTV
5. ROI
6. Cash Efficiency

Risk Mitigation:
1. Market Risk Protection
2. Competition Defense
3. Cash Flow Security
4. Revenue Stream Diversification"#,
    &[PRODUCT, REVENUE_ANALYSIS, IMPLEMENTATION_PLAN],
);
