use serde::Serialize;

/// One row of the campaign performance table. The report covers a fixed set
/// of eight campaigns; the records are built once at startup and never change.
#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    pub name: &'static str,
    pub spend: f64,
    pub conversions: u32,
    pub ctr: f64,
    pub cpc: f64,
    pub conv_rate: f64,
    pub roas: f64,
}

/// Health label derived from a campaign's conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Excellent,
    Good,
    NeedsWork,
    Critical,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsWork => "Needs Work",
            Self::Critical => "Critical",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsWork => "needs-work",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A single leading or lagging performance callout on the overview tab.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub metric: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: &'static str,
    pub issue: &'static str,
    pub action: &'static str,
    pub impact: &'static str,
}

/// The four dashboard views. The selector itself lives client-side; this enum
/// keeps the page template and the tab strip in agreement about ids and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Campaigns,
    Recommendations,
    Summary,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Overview,
        Tab::Campaigns,
        Tab::Recommendations,
        Tab::Summary,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Campaigns => "campaigns",
            Self::Recommendations => "recommendations",
            Self::Summary => "summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Campaigns => "Campaigns",
            Self::Recommendations => "Recommendations",
            Self::Summary => "Summary",
        }
    }
}

/// One bar in a chart series.
#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Labeled series for one of the two bar charts, with a unit hint so the
/// client can pick the tooltip format.
#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub metric: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    pub points: Vec<ChartPoint>,
}

/// Campaign table row as served by `/api/campaigns`, with the derived status.
#[derive(Debug, Serialize)]
pub struct CampaignRow {
    pub name: &'static str,
    pub spend: f64,
    pub conversions: u32,
    pub conv_rate: f64,
    pub cpc: f64,
    pub roas: f64,
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_overview() {
        assert_eq!(Tab::default(), Tab::Overview);
    }

    #[test]
    fn tab_ids_are_distinct() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
