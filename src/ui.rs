use crate::metrics::{classify, format_currency, format_percent, format_ratio};
use crate::models::{Campaign, Insight, Recommendation, Tab};
use crate::report::{NextStep, Report};

/// Render the full dashboard page. All four tab panels are filled in
/// server-side; the embedded script only toggles visibility and draws the
/// two bar charts from `/api/chart/{metric}`.
pub fn render_index(report: &Report) -> String {
    INDEX_HTML
        .replace("{{TITLE}}", report.title)
        .replace("{{PERIOD}}", report.period)
        .replace("{{TABS}}", &render_tabs())
        .replace("{{TOTAL_SPEND}}", &format_currency(report.totals.spend))
        .replace(
            "{{TOTAL_CONVERSIONS}}",
            &report.totals.conversions.to_string(),
        )
        .replace("{{AVG_CPC}}", &format_currency(report.totals.avg_cpc))
        .replace(
            "{{AVG_CONV_RATE}}",
            &format_percent(report.totals.avg_conv_rate),
        )
        .replace("{{LEADING_CARDS}}", &render_insights(&report.leading, "up"))
        .replace(
            "{{LAGGING_CARDS}}",
            &render_insights(&report.lagging, "down"),
        )
        .replace("{{CAMPAIGN_ROWS}}", &render_campaign_rows(&report.campaigns))
        .replace(
            "{{RECOMMENDATION_CARDS}}",
            &render_recommendations(&report.recommendations),
        )
        .replace("{{CLIENT}}", report.client)
        .replace(
            "{{SUMMARY_SPEND}}",
            &format_currency(report.summary.total_spend),
        )
        .replace(
            "{{SUMMARY_CONVERSIONS}}",
            &report.summary.total_conversions.to_string(),
        )
        .replace(
            "{{TOP3_SHARE}}",
            &format_percent(report.summary.top3_conversion_share),
        )
        .replace(
            "{{WASTED_SHARE}}",
            &format_percent(report.summary.wasted_budget_share),
        )
        .replace(
            "{{COST_PER_CONV}}",
            &format_currency(report.summary.cost_per_conversion),
        )
        .replace("{{IMPACT_CONV}}", report.summary.conversion_lift)
        .replace("{{IMPACT_CPA}}", report.summary.cost_per_conversion_cut)
        .replace("{{IMPACT_BUDGET}}", report.summary.monthly_efficiency_gain)
        .replace("{{STRENGTHS}}", &render_list(&report.summary.strengths))
        .replace("{{ISSUES}}", &render_list(&report.summary.issues))
        .replace(
            "{{IMMEDIATE_ACTIONS}}",
            &render_numbered(&report.summary.immediate_actions),
        )
        .replace(
            "{{GROWTH_ITEMS}}",
            &render_numbered(&report.summary.growth_opportunities),
        )
        .replace("{{NEXT_STEPS}}", &render_next_steps(&report.summary.next_steps))
}

fn render_tabs() -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            let active = if *tab == Tab::default() { " active" } else { "" };
            let selected = *tab == Tab::default();
            format!(
                r#"<button class="tab{active}" type="button" data-tab="{id}" role="tab" aria-selected="{selected}">{label}</button>"#,
                id = tab.id(),
                label = tab.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_campaign_rows(campaigns: &[Campaign]) -> String {
    campaigns
        .iter()
        .map(render_campaign_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_campaign_row(campaign: &Campaign) -> String {
    let status = classify(campaign.conv_rate);
    format!(
        r#"<tr class="campaign-row">
  <td>{name}</td>
  <td>{spend}</td>
  <td>{conversions}</td>
  <td>{conv_rate}</td>
  <td>{cpc}</td>
  <td>{roas}</td>
  <td><span class="badge status-{class}">{label}</span></td>
</tr>"#,
        name = campaign.name,
        spend = format_currency(campaign.spend),
        conversions = campaign.conversions,
        conv_rate = format_percent(campaign.conv_rate),
        cpc = format_currency(campaign.cpc),
        roas = format_ratio(campaign.roas),
        class = status.css_class(),
        label = status.label(),
    )
}

fn render_insights(insights: &[Insight], tone: &str) -> String {
    insights
        .iter()
        .map(|insight| {
            format!(
                r#"<div class="insight {tone}">
  <div class="insight-metric">{metric}</div>
  <div class="insight-value">{value}</div>
  <div class="insight-description">{description}</div>
</div>"#,
                metric = insight.metric,
                value = insight.value,
                description = insight.description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_recommendations(recommendations: &[Recommendation]) -> String {
    recommendations
        .iter()
        .map(|rec| {
            format!(
                r#"<div class="recommendation priority-{class}">
  <div class="recommendation-head">
    <span class="badge priority-badge-{class}">{priority} Priority</span>
    <span class="recommendation-category">{category}</span>
  </div>
  <div class="recommendation-issue">{issue}</div>
  <div class="recommendation-action">{action}</div>
  <div class="recommendation-impact"><strong>Expected Impact:</strong> {impact}</div>
</div>"#,
                class = rec.priority.css_class(),
                priority = rec.priority.label(),
                category = rec.category,
                issue = rec.issue,
                action = rec.action,
                impact = rec.impact,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("<li>{}. {item}</li>", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_next_steps(steps: &[NextStep]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            format!(
                r#"<div class="next-step">
  <div class="step-number">{number}</div>
  <div><strong>{title}:</strong> <span>{detail}</span></div>
</div>"#,
                number = index + 1,
                title = step.title,
                detail = step.detail,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f9fafb;
      --ink: #111827;
      --muted: #6b7280;
      --card: #ffffff;
      --accent: #3b82f6;
      --accent-deep: #7c3aed;
      --green: #10b981;
      --red: #ef4444;
      --amber: #f59e0b;
      --shadow: 0 1px 3px rgba(17, 24, 39, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1120px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    .masthead {
      background: linear-gradient(120deg, var(--accent), var(--accent-deep));
      color: white;
      padding: 32px;
      border-radius: 16px;
      box-shadow: var(--shadow);
    }

    .masthead h1 {
      margin: 0 0 6px;
      font-size: clamp(1.6rem, 4vw, 2.4rem);
    }

    .masthead p {
      margin: 0;
      opacity: 0.9;
    }

    .tabs {
      display: flex;
      gap: 8px;
      padding: 8px;
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
    }

    .tab {
      flex: 1;
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: transparent;
      color: var(--muted);
      transition: background 150ms ease, color 150ms ease;
    }

    .tab:hover {
      background: #f3f4f6;
      color: var(--accent);
    }

    .tab.active {
      background: var(--accent);
      color: white;
      box-shadow: var(--shadow);
    }

    .panel-view {
      display: none;
    }

    .panel-view.active {
      display: grid;
      gap: 24px;
    }

    .metric-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .metric-card {
      background: var(--card);
      border-left: 4px solid var(--accent);
      border-radius: 12px;
      padding: 20px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 8px;
    }

    .metric-card .glyph {
      font-size: 1.2rem;
      color: var(--accent);
    }

    .metric-card .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .metric-card .value {
      font-size: 1.9rem;
      font-weight: 700;
    }

    .metric-card .subtitle {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 12px;
      padding: 24px;
      box-shadow: var(--shadow);
    }

    .card h2,
    .card h3 {
      margin-top: 0;
    }

    .chart-svg {
      width: 100%;
      height: 320px;
      display: block;
    }

    .chart-grid-line {
      stroke: #e5e7eb;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-bar {
      cursor: pointer;
    }

    .chart-bar:hover {
      opacity: 0.8;
    }

    .insight-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
    }

    .insight {
      padding: 16px;
      border-radius: 10px;
      margin-bottom: 14px;
    }

    .insight.up {
      background: #ecfdf5;
      border-left: 4px solid var(--green);
    }

    .insight.down {
      background: #fef2f2;
      border-left: 4px solid var(--red);
    }

    .insight-metric {
      font-weight: 600;
    }

    .insight-value {
      font-size: 1.2rem;
      font-weight: 700;
    }

    .insight.up .insight-value {
      color: #047857;
    }

    .insight.down .insight-value {
      color: #b91c1c;
    }

    .insight-description {
      font-size: 0.9rem;
      color: var(--muted);
    }

    .section-title-up {
      color: #047857;
    }

    .section-title-down {
      color: #b91c1c;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th {
      background: #f3f4f6;
      text-align: left;
      padding: 12px 16px;
      font-size: 0.9rem;
    }

    td {
      padding: 12px 16px;
      border-bottom: 1px solid #e5e7eb;
    }

    .badge {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 999px;
      font-size: 0.72rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.05em;
    }

    .status-excellent {
      background: #d1fae5;
      color: #065f46;
    }

    .status-good {
      background: #dbeafe;
      color: #1e40af;
    }

    .status-needs-work {
      background: #fef3c7;
      color: #92400e;
    }

    .status-critical {
      background: #fee2e2;
      color: #991b1b;
    }

    .recommendation {
      padding: 20px;
      border-radius: 10px;
      margin-bottom: 18px;
      display: grid;
      gap: 8px;
    }

    .recommendation.priority-high {
      background: #fef2f2;
      border-left: 4px solid var(--red);
    }

    .recommendation.priority-medium {
      background: #fffbeb;
      border-left: 4px solid var(--amber);
    }

    .recommendation.priority-low {
      background: #ecfdf5;
      border-left: 4px solid var(--green);
    }

    .recommendation-head {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .priority-badge-high {
      background: var(--red);
      color: white;
    }

    .priority-badge-medium {
      background: var(--amber);
      color: white;
    }

    .priority-badge-low {
      background: var(--green);
      color: white;
    }

    .recommendation-category {
      font-weight: 600;
    }

    .recommendation-issue {
      font-weight: 600;
    }

    .recommendation-impact {
      font-size: 0.9rem;
      color: var(--muted);
      font-style: italic;
    }

    .split {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 20px;
    }

    .pane {
      padding: 20px;
      border-radius: 10px;
    }

    .pane.up {
      background: #ecfdf5;
      border-left: 4px solid var(--green);
    }

    .pane.down {
      background: #fef2f2;
      border-left: 4px solid var(--red);
    }

    .pane.plain {
      background: #f9fafb;
    }

    .pane h4 {
      margin-top: 0;
    }

    .pane ul {
      margin: 0;
      padding-left: 18px;
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
    }

    .pane ul.bare {
      list-style: none;
      padding-left: 0;
    }

    .figure-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
      text-align: center;
    }

    .figure {
      padding: 18px;
      border-radius: 10px;
    }

    .figure .number {
      font-size: 1.6rem;
      font-weight: 700;
    }

    .figure .caption {
      font-size: 0.85rem;
    }

    .figure.blue {
      background: #eff6ff;
      color: #1d4ed8;
    }

    .figure.orange {
      background: #fff7ed;
      color: #c2410c;
    }

    .figure.purple {
      background: #f5f3ff;
      color: #6d28d9;
    }

    .figure.green {
      background: #ecfdf5;
      color: #047857;
    }

    .next-step {
      display: flex;
      align-items: flex-start;
      gap: 12px;
      margin-bottom: 12px;
    }

    .step-number {
      flex: none;
      width: 24px;
      height: 24px;
      border-radius: 50%;
      background: var(--accent);
      color: white;
      font-size: 0.75rem;
      font-weight: 700;
      display: grid;
      place-items: center;
      margin-top: 2px;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #b91c1c;
    }

    #tooltip {
      position: fixed;
      pointer-events: none;
      background: var(--ink);
      color: white;
      padding: 6px 10px;
      border-radius: 6px;
      font-size: 0.8rem;
      display: none;
      z-index: 10;
    }

    @media (max-width: 640px) {
      .tabs {
        flex-wrap: wrap;
      }
      .tab {
        flex: 1 1 40%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="masthead">
      <h1>{{TITLE}}</h1>
      <p>Reporting Period: {{PERIOD}}</p>
    </header>

    <nav class="tabs" role="tablist">
        {{TABS}}
    </nav>

    <section class="panel-view active" id="panel-overview" data-panel="overview">
      <div class="metric-grid">
        <div class="metric-card">
          <span class="glyph">&#36;</span>
          <span class="label">Total Ad Spend</span>
          <span class="value">{{TOTAL_SPEND}}</span>
          <span class="subtitle">{{PERIOD}}</span>
        </div>
        <div class="metric-card">
          <span class="glyph">&#9678;</span>
          <span class="label">Total Conversions</span>
          <span class="value">{{TOTAL_CONVERSIONS}}</span>
          <span class="subtitle">Across all campaigns</span>
        </div>
        <div class="metric-card">
          <span class="glyph">&#10548;</span>
          <span class="label">Average CPC</span>
          <span class="value">{{AVG_CPC}}</span>
          <span class="subtitle">Cost per click</span>
        </div>
        <div class="metric-card">
          <span class="glyph">&#9650;</span>
          <span class="label">Average Conv Rate</span>
          <span class="value">{{AVG_CONV_RATE}}</span>
          <span class="subtitle">Conversion rate</span>
        </div>
      </div>

      <div class="card">
        <h3>Campaign Spend Distribution</h3>
        <svg id="spend-chart" class="chart-svg" viewBox="0 0 640 320" role="img" aria-label="Spend by campaign"></svg>
      </div>

      <div class="insight-grid">
        <div class="card">
          <h3 class="section-title-up">Top Performing Metrics</h3>
          {{LEADING_CARDS}}
        </div>
        <div class="card">
          <h3 class="section-title-down">Areas for Improvement</h3>
          {{LAGGING_CARDS}}
        </div>
      </div>
    </section>

    <section class="panel-view" id="panel-campaigns" data-panel="campaigns">
      <div class="card">
        <table>
          <thead>
            <tr>
              <th>Campaign</th>
              <th>Spend</th>
              <th>Conversions</th>
              <th>Conv Rate</th>
              <th>CPC</th>
              <th>ROAS</th>
              <th>Status</th>
            </tr>
          </thead>
          <tbody>
{{CAMPAIGN_ROWS}}
          </tbody>
        </table>
      </div>

      <div class="card">
        <h3>Conversion Rate by Campaign</h3>
        <svg id="conv-chart" class="chart-svg" viewBox="0 0 640 320" role="img" aria-label="Conversion rate by campaign"></svg>
      </div>
    </section>

    <section class="panel-view" id="panel-recommendations" data-panel="recommendations">
      <div class="card">
        <h2>Optimization Recommendations</h2>
{{RECOMMENDATION_CARDS}}
      </div>
    </section>

    <section class="panel-view" id="panel-summary" data-panel="summary">
      <div class="card">
        <h2>Executive Summary</h2>

        <h3>Account Overview</h3>
        <p>
          {{CLIENT}}'s Google Ads account demonstrates significant potential with a total
          monthly spend of <strong>{{SUMMARY_SPEND}}</strong> generating
          <strong>{{SUMMARY_CONVERSIONS}} conversions</strong> across 8 campaigns. However,
          performance varies dramatically between campaigns, indicating substantial
          optimization opportunities.
        </p>

        <div class="split">
          <div class="pane up">
            <h4>Key Strengths</h4>
            <ul>
{{STRENGTHS}}
            </ul>
          </div>
          <div class="pane down">
            <h4>Critical Issues</h4>
            <ul>
{{ISSUES}}
            </ul>
          </div>
        </div>

        <h3>Performance Analysis</h3>
        <div class="figure-grid">
          <div class="figure blue">
            <div class="number">{{TOP3_SHARE}}</div>
            <div class="caption">of conversions from top 3 campaigns</div>
          </div>
          <div class="figure orange">
            <div class="number">{{WASTED_SHARE}}</div>
            <div class="caption">of budget wasted on zero-conversion campaign</div>
          </div>
          <div class="figure purple">
            <div class="number">{{COST_PER_CONV}}</div>
            <div class="caption">average cost per conversion</div>
          </div>
        </div>

        <h3>Strategic Recommendations</h3>
        <div class="split">
          <div class="pane plain">
            <h4>Immediate Actions (Next 30 Days)</h4>
            <ul class="bare">
{{IMMEDIATE_ACTIONS}}
            </ul>
          </div>
          <div class="pane plain">
            <h4>Growth Opportunities (Next 90 Days)</h4>
            <ul class="bare">
{{GROWTH_ITEMS}}
            </ul>
          </div>
        </div>

        <h3>Expected Impact</h3>
        <div class="figure-grid">
          <div class="figure green">
            <div class="number">{{IMPACT_CONV}}</div>
            <div class="caption">Conversion increase</div>
          </div>
          <div class="figure green">
            <div class="number">{{IMPACT_CPA}}</div>
            <div class="caption">Cost per conversion reduction</div>
          </div>
          <div class="figure green">
            <div class="number">{{IMPACT_BUDGET}}</div>
            <div class="caption">Monthly budget efficiency gain</div>
          </div>
        </div>

        <h3>Next Steps</h3>
{{NEXT_STEPS}}
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <div id="tooltip"></div>

  <script>
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.panel-view'));
    const statusEl = document.getElementById('status');
    const tooltipEl = document.getElementById('tooltip');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => {
        panel.classList.toggle('active', panel.dataset.panel === tab);
      });
    };

    const formatValue = (value, unit) => {
      if (unit === 'currency') {
        return '$' + value.toFixed(2);
      }
      const rounded = Math.round(value * 100) / 100;
      return rounded + '%';
    };

    const showTooltip = (event, text) => {
      tooltipEl.textContent = text;
      tooltipEl.style.display = 'block';
      tooltipEl.style.left = event.clientX + 12 + 'px';
      tooltipEl.style.top = event.clientY - 28 + 'px';
    };

    const hideTooltip = () => {
      tooltipEl.style.display = 'none';
    };

    const renderBarChart = (svg, series, color) => {
      const width = 640;
      const height = 320;
      const padLeft = 56;
      const padRight = 16;
      const padTop = 16;
      const padBottom = 84;

      const values = series.points.map((point) => point.value);
      let max = Math.max(...values, 0);
      if (max === 0) {
        max = 1;
      }

      const plotWidth = width - padLeft - padRight;
      const plotHeight = height - padTop - padBottom;
      const step = plotWidth / series.points.length;
      const barWidth = step * 0.62;
      const y = (value) => padTop + plotHeight - (value / max) * plotHeight;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += '<line class="chart-grid-line" x1="' + padLeft + '" y1="' + yPos +
          '" x2="' + (width - padRight) + '" y2="' + yPos + '" stroke-dasharray="3 3" />';
        grid += '<text class="chart-label" x="' + (padLeft - 8) + '" y="' + (yPos + 4) +
          '" text-anchor="end">' + formatValue(value, series.unit) + '</text>';
      }

      let bars = '';
      let labels = '';
      series.points.forEach((point, index) => {
        const x = padLeft + index * step + (step - barWidth) / 2;
        const top = y(point.value);
        const barHeight = padTop + plotHeight - top;
        bars += '<rect class="chart-bar" data-index="' + index + '" x="' + x +
          '" y="' + top + '" width="' + barWidth + '" height="' + barHeight +
          '" rx="2" fill="' + color + '" />';
        const labelX = padLeft + index * step + step / 2;
        const labelY = padTop + plotHeight + 14;
        labels += '<text class="chart-label" x="' + labelX + '" y="' + labelY +
          '" text-anchor="end" transform="rotate(-45 ' + labelX + ' ' + labelY + ')">' +
          point.label + '</text>';
      });

      svg.innerHTML = grid + bars + labels;

      svg.querySelectorAll('.chart-bar').forEach((bar) => {
        const point = series.points[Number(bar.dataset.index)];
        const text = point.label + ': ' + formatValue(point.value, series.unit);
        bar.addEventListener('mousemove', (event) => showTooltip(event, text));
        bar.addEventListener('mouseleave', hideTooltip);
      });
    };

    const loadChart = async (metric, svgId, color) => {
      const res = await fetch('/api/chart/' + metric);
      if (!res.ok) {
        throw new Error('Unable to load ' + metric + ' chart');
      }
      renderBarChart(document.getElementById(svgId), await res.json(), color);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    Promise.all([
      loadChart('spend', 'spend-chart', '#3b82f6'),
      loadChart('conv_rate', 'conv-chart', '#10b981')
    ]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;

    fn page() -> String {
        render_index(&build_report())
    }

    #[test]
    fn no_placeholder_survives_rendering() {
        let html = page();
        assert!(!html.contains("{{"), "unfilled placeholder in page");
    }

    #[test]
    fn one_panel_per_tab_and_overview_starts_active() {
        let html = page();
        for tab in Tab::ALL {
            let marker = format!("data-panel=\"{}\"", tab.id());
            assert_eq!(html.matches(&marker).count(), 1, "panel for {marker}");
        }
        assert_eq!(html.matches("panel-view active").count(), 1);
        assert!(html.contains("class=\"panel-view active\" id=\"panel-overview\""));
    }

    #[test]
    fn tab_strip_has_four_buttons() {
        let html = page();
        assert_eq!(html.matches("data-tab=").count(), 4);
        assert!(html.contains(r#"data-tab="overview" role="tab" aria-selected="true""#));
        assert!(html.contains(r#"data-tab="summary" role="tab" aria-selected="false""#));
    }

    #[test]
    fn table_renders_every_campaign() {
        let html = page();
        assert_eq!(html.matches(r#"<tr class="campaign-row">"#).count(), 8);
        assert!(html.contains("Search-Hydrodilatation"));
    }

    #[test]
    fn currency_cells_keep_two_decimals() {
        let html = page();
        assert!(html.contains("$922.40"));
        assert!(html.contains("$1484.46"));
    }

    #[test]
    fn status_badges_follow_classifier() {
        let row = render_campaign_row(&Campaign {
            name: "P.Max",
            spend: 922.40,
            conversions: 0,
            ctr: 13.26,
            cpc: 2.04,
            conv_rate: 0.0,
            roas: 0.0,
        });
        assert!(row.contains("status-critical"));
        assert!(row.contains(">Critical<"));
    }

    #[test]
    fn recommendations_render_with_priority_classes() {
        let html = page();
        assert_eq!(html.matches(r#"<div class="recommendation priority-"#).count(), 5);
        assert_eq!(html.matches(r#"class="badge priority-badge-high""#).count(), 2);
        assert_eq!(html.matches(r#"class="badge priority-badge-medium""#).count(), 2);
        assert_eq!(html.matches(r#"class="badge priority-badge-low""#).count(), 1);
    }

    // The summary panel quotes its own spend figure; it must not follow the
    // campaign table.
    #[test]
    fn summary_figures_stay_independent_of_campaign_edits() {
        let mut report = build_report();
        report.campaigns[0].spend = 0.0;
        let html = render_index(&report);
        assert!(html.contains("$5558.84"));
        assert!(html.contains("$43.43"));
        assert!(html.contains("+$1,500"));
    }
}
