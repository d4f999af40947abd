//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart points and configs and calls those globals.

use serde::Serialize;
use wsd_core::series::ChartPoint;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");

/// D3 v7, injected when the host page does not already provide it.
const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Chart height in pixels, matching the detail view's chart boxes.
const CHART_HEIGHT: u32 = 176;

pub const SENTIMENT_COLOR: &str = "#f97316";
pub const POSITIVE_COLOR: &str = "#22c55e";
pub const NEUTRAL_COLOR: &str = "#6b7280";
pub const NEGATIVE_COLOR: &str = "#ef4444";

/// One plotted series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesConfig {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct LineChartConfig {
    #[serde(flatten)]
    series: SeriesConfig,
    height: u32,
}

#[derive(Debug, Clone, Serialize)]
struct MultiLineChartConfig {
    series: Vec<SeriesConfig>,
    height: u32,
}

/// Series of the sentiment-label chart.
pub fn label_series() -> Vec<SeriesConfig> {
    vec![
        SeriesConfig {
            key: "positive_count",
            name: "Positive",
            color: POSITIVE_COLOR,
        },
        SeriesConfig {
            key: "neutral_count",
            name: "Neutral",
            color: NEUTRAL_COLOR,
        },
        SeriesConfig {
            key: "negative_count",
            name: "Negative",
            color: NEGATIVE_COLOR,
        },
    ]
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WSD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject D3 if needed, then evaluate the chart scripts once it is ready.
///
/// The chart files define functions via `function` declarations. They are
/// evaluated at global scope by an indirect `eval` inside the polling
/// callback, then promoted to `window.*` explicitly. Safe to call repeatedly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, MULTI_LINE_CHART_JS].join("\n");
    let scripts = match serde_json::to_string(&all_js) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to encode chart scripts: {}", e);
            return;
        }
    };

    call_js(&format!(
        r#"
        (function() {{
            if (window.__wsdChartsReady || window.__wsdChartsLoading) return;
            window.__wsdChartsLoading = true;
            window.__wsdChartScripts = {scripts};
            if (typeof d3 === 'undefined' && !document.getElementById('wsd-d3')) {{
                var tag = document.createElement('script');
                tag.id = 'wsd-d3';
                tag.src = '{D3_SRC}';
                document.head.appendChild(tag);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__wsdChartScripts);
                    delete window.__wsdChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    if (typeof renderMultiLineChart !== 'undefined') window.renderMultiLineChart = renderMultiLineChart;
                    if (typeof tooltipHtml !== 'undefined') window.tooltipHtml = tooltipHtml;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__wsdChartsReady = true;
                    console.log('WSD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Polling call of `window.<function>(containerId, dataJson, configJson)`.
///
/// Waits for the chart scripts and the container element to exist. Arguments
/// are embedded as JSON string literals, so no manual escaping is needed.
fn render_call(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let quote = |s: &str| serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
    let id = quote(container_id);
    let data = quote(data_json);
    let config = quote(config_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wsdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[WSD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Average sentiment line chart (0–100% axis).
pub fn render_sentiment_chart(container_id: &str, points: &[ChartPoint]) {
    let config = LineChartConfig {
        series: SeriesConfig {
            key: "avg_sentiment",
            name: "Avg Sentiment",
            color: SENTIMENT_COLOR,
        },
        height: CHART_HEIGHT,
    };
    match (serde_json::to_string(points), serde_json::to_string(&config)) {
        (Ok(data), Ok(config)) => {
            call_js(&render_call("renderLineChart", container_id, &data, &config))
        }
        _ => log::error!("Failed to serialize sentiment chart for {}", container_id),
    }
}

/// Positive / neutral / negative count chart with legend.
pub fn render_label_chart(container_id: &str, points: &[ChartPoint]) {
    let config = MultiLineChartConfig {
        series: label_series(),
        height: CHART_HEIGHT,
    };
    match (serde_json::to_string(points), serde_json::to_string(&config)) {
        (Ok(data), Ok(config)) => call_js(&render_call(
            "renderMultiLineChart",
            container_id,
            &data,
            &config,
        )),
        _ => log::error!("Failed to serialize label chart for {}", container_id),
    }
}

/// Destroy/clean up a chart in the given container and hide its tooltip.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_call(container_id));
}

/// Uses `window.destroyLineChart` once the scripts are loaded; before that
/// there is no tooltip, so clearing the container is enough.
fn destroy_call(container_id: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "if (typeof window.destroyLineChart === 'function') {{ window.destroyLineChart({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}"
    )
}
