//! Dashboard charts drawn with plain CSS boxes.
//!
//! Bar heights are percentages of the largest value in the series, so every
//! chart fills its card regardless of scale.

use common::views::{AttendancePoint, CategoryCount, GenderRatioPoint};
use yew::{html, Component, Context, Html, Properties};

const COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];
const GENTS_COLOR: &str = "#8884d8";
const LADIES_COLOR: &str = "#82ca9d";

fn percent(value: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        value as f64 * 100.0 / max as f64
    }
}

fn bar(value: u32, max: u64, color: &str, title: String) -> Html {
    let style = format!("height: {:.1}%; background: {};", percent(value.into(), max), color);
    html! { <div class="bar" style={style} title={title}></div> }
}

fn no_chart_data() -> Html {
    html! { <p class="empty-state">{ "Not enough data yet." }</p> }
}

#[derive(Properties, PartialEq)]
pub struct AttendanceChartProps {
    pub points: Vec<AttendancePoint>,
}

/// Total bhaktas per event, oldest on the left.
pub struct AttendanceChart;

impl Component for AttendanceChart {
    type Message = ();
    type Properties = AttendanceChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AttendanceChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let points = &ctx.props().points;
        if points.is_empty() {
            return no_chart_data();
        }
        let max = points.iter().map(|p| u64::from(p.total_bhaktas)).max().unwrap_or(0);

        html! {
            <div class="bar-chart">
                {
                    for points.iter().map(|point| html! {
                        <div class="bar-column">
                            <div class="bar-area">
                                { bar(point.total_bhaktas, max, COLORS[4], format!("{}: {}", point.date, point.total_bhaktas)) }
                            </div>
                            <span class="bar-label" title={point.name.clone()}>{ point.name.clone() }</span>
                        </div>
                    })
                }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GenderRatioChartProps {
    pub points: Vec<GenderRatioPoint>,
}

/// Gents and ladies side by side for each event.
pub struct GenderRatioChart;

impl Component for GenderRatioChart {
    type Message = ();
    type Properties = GenderRatioChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        GenderRatioChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let points = &ctx.props().points;
        if points.is_empty() {
            return no_chart_data();
        }
        let max = points
            .iter()
            .map(|p| u64::from(p.gents.max(p.ladies)))
            .max()
            .unwrap_or(0);

        html! {
            <>
                <div class="bar-chart">
                    {
                        for points.iter().map(|point| html! {
                            <div class="bar-column">
                                <div class="bar-area">
                                    { bar(point.gents, max, GENTS_COLOR, format!("Gents: {}", point.gents)) }
                                    { bar(point.ladies, max, LADIES_COLOR, format!("Ladies: {}", point.ladies)) }
                                </div>
                                <span class="bar-label" title={point.name.clone()}>{ point.name.clone() }</span>
                            </div>
                        })
                    }
                </div>
                <div class="legend">
                    { legend_entry(GENTS_COLOR, "Gents".to_string()) }
                    { legend_entry(LADIES_COLOR, "Ladies".to_string()) }
                </div>
            </>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub counts: Vec<CategoryCount>,
}

/// Share of recipes per category as one stacked bar with a legend.
pub struct CategoryChart;

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CategoryChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let counts = &ctx.props().counts;
        if counts.is_empty() {
            return no_chart_data();
        }
        let total: usize = counts.iter().map(|c| c.count).sum();

        html! {
            <>
                <div class="stacked-bar">
                    {
                        for counts.iter().enumerate().map(|(index, entry)| {
                            let style = format!(
                                "width: {:.1}%; background: {};",
                                percent(entry.count as u64, total as u64),
                                COLORS[index % COLORS.len()]
                            );
                            html! { <div class="segment" style={style} title={entry.category.to_string()}></div> }
                        })
                    }
                </div>
                <div class="legend">
                    {
                        for counts.iter().enumerate().map(|(index, entry)| legend_entry(
                            COLORS[index % COLORS.len()],
                            format!("{} ({})", entry.category, entry.count),
                        ))
                    }
                </div>
            </>
        }
    }
}

fn legend_entry(color: &str, label: String) -> Html {
    html! {
        <span class="legend-entry">
            <span class="swatch" style={format!("background: {};", color)}></span>
            { label }
        </span>
    }
}
