use serde::{Deserialize, Serialize};

/// Dashboard pages, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    Overview,
    SalesTrends,
    TopProducts,
    CustomerInsights,
}

impl DashboardView {
    /// Stable code used in URLs
    pub fn code(&self) -> &'static str {
        match self {
            DashboardView::Overview => "overview",
            DashboardView::SalesTrends => "sales-trends",
            DashboardView::TopProducts => "top-products",
            DashboardView::CustomerInsights => "customer-insights",
        }
    }

    /// Human-readable page title
    pub fn display_name(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::SalesTrends => "Sales Trends",
            DashboardView::TopProducts => "Top Products",
            DashboardView::CustomerInsights => "Customer Insights",
        }
    }

    /// All views in navigation order
    pub fn all() -> Vec<DashboardView> {
        vec![
            DashboardView::Overview,
            DashboardView::SalesTrends,
            DashboardView::TopProducts,
            DashboardView::CustomerInsights,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "overview" => Some(DashboardView::Overview),
            "sales-trends" => Some(DashboardView::SalesTrends),
            "top-products" => Some(DashboardView::TopProducts),
            "customer-insights" => Some(DashboardView::CustomerInsights),
            _ => None,
        }
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for view in DashboardView::all() {
            assert_eq!(DashboardView::from_code(view.code()), Some(view));
        }
        assert_eq!(DashboardView::from_code("Overview"), None);
        assert_eq!(DashboardView::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&DashboardView::CustomerInsights).unwrap();
        assert_eq!(json, "\"customer-insights\"");
        let back: DashboardView = serde_json::from_str("\"sales-trends\"").unwrap();
        assert_eq!(back, DashboardView::SalesTrends);
    }
}
