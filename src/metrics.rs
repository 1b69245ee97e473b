use crate::models::{Campaign, CampaignRow, ChartPoint, ChartSeries, Status};

/// Map a conversion-rate percentage to its health label.
///
/// Thresholds are the ones the audit uses for the status column: above 10%
/// is excellent, above 5% good, anything positive needs work, and a campaign
/// that converts nothing is critical. Total over all inputs.
pub fn classify(conv_rate: f64) -> Status {
    if conv_rate > 10.0 {
        Status::Excellent
    } else if conv_rate > 5.0 {
        Status::Good
    } else if conv_rate > 0.0 {
        Status::NeedsWork
    } else {
        Status::Critical
    }
}

/// Dollar amount with exactly two decimal places: `922.4` -> `$922.40`.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Percentage with up to two decimal places, trailing zeros trimmed:
/// `11.72` -> `11.72%`, `10.80` -> `10.8%`, `0.0` -> `0%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", trim_decimals(value))
}

/// Ratio with exactly two decimal places, no unit.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

fn trim_decimals(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Build the `{label, value}` series behind one of the two bar charts.
/// Returns `None` for a metric the report has no chart for.
pub fn chart_series(metric: &str, campaigns: &[Campaign]) -> Option<ChartSeries> {
    let (metric, title, unit, value): (_, _, _, fn(&Campaign) -> f64) = match metric {
        "spend" => ("spend", "Campaign Spend Distribution", "currency", |c| {
            c.spend
        }),
        "conv_rate" => ("conv_rate", "Conversion Rate by Campaign", "percent", |c| {
            c.conv_rate
        }),
        _ => return None,
    };

    let points = campaigns
        .iter()
        .map(|c| ChartPoint {
            label: c.name,
            value: value(c),
        })
        .collect();

    Some(ChartSeries {
        metric,
        title,
        unit,
        points,
    })
}

/// Campaign table rows with the derived status column attached.
pub fn campaign_rows(campaigns: &[Campaign]) -> Vec<CampaignRow> {
    campaigns
        .iter()
        .map(|c| CampaignRow {
            name: c.name,
            spend: c.spend,
            conversions: c.conversions,
            conv_rate: c.conv_rate,
            cpc: c.cpc,
            roas: c.roas,
            status: classify(c.conv_rate).label(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;

    #[test]
    fn classify_covers_all_bands() {
        assert_eq!(classify(16.07), Status::Excellent);
        assert_eq!(classify(9.09), Status::Good);
        assert_eq!(classify(2.13), Status::NeedsWork);
        assert_eq!(classify(0.0), Status::Critical);
        assert_eq!(classify(-1.0), Status::Critical);
    }

    #[test]
    fn classify_boundaries_fall_downward() {
        assert_eq!(classify(10.0), Status::Good);
        assert_eq!(classify(5.0), Status::NeedsWork);
        assert_eq!(classify(10.01), Status::Excellent);
        assert_eq!(classify(5.01), Status::Good);
        assert_eq!(classify(0.01), Status::NeedsWork);
    }

    #[test]
    fn currency_always_two_decimals() {
        assert_eq!(format_currency(1484.46), "$1484.46");
        assert_eq!(format_currency(922.4), "$922.40");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn percent_trims_trailing_zeros() {
        assert_eq!(format_percent(11.72), "11.72%");
        assert_eq!(format_percent(10.80), "10.8%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(0.26), "0.26%");
    }

    #[test]
    fn spend_series_covers_every_campaign() {
        let report = build_report();
        let series = chart_series("spend", &report.campaigns).unwrap();
        assert_eq!(series.unit, "currency");
        assert_eq!(series.points.len(), 8);
        assert_eq!(series.points[0].label, "Search-Brand");
        assert_eq!(series.points[0].value, 1484.46);
    }

    #[test]
    fn conv_rate_series_has_percent_unit() {
        let report = build_report();
        let series = chart_series("conv_rate", &report.campaigns).unwrap();
        assert_eq!(series.unit, "percent");
        assert_eq!(series.points.len(), 8);
    }

    #[test]
    fn unknown_chart_metric_is_rejected() {
        let report = build_report();
        assert!(chart_series("ctr", &report.campaigns).is_none());
        assert!(chart_series("", &report.campaigns).is_none());
    }

    #[test]
    fn rows_carry_derived_status() {
        let report = build_report();
        let rows = campaign_rows(&report.campaigns);
        assert_eq!(rows.len(), 8);
        let pmax = rows.iter().find(|r| r.name == "P.Max").unwrap();
        assert_eq!(pmax.status, "Critical");
        let rfas = rows.iter().find(|r| r.name == "Search-RFAs").unwrap();
        assert_eq!(rfas.status, "Excellent");
        let brand = rows.iter().find(|r| r.name == "Search-Brand").unwrap();
        assert_eq!(brand.status, "Needs Work");
    }
}
