use common::views::{
    attendance_trend, dashboard_summary, gender_ratio_trend, recipe_category_distribution,
    NO_DATA, NO_EVENTS_YET,
};
use yew::prelude::*;

use crate::components::charts::{AttendanceChart, CategoryChart, GenderRatioChart};
use crate::components::manager::helpers::{format_count, format_date};
use crate::components::manager::state::SabhaManager;
use crate::workspace_grid::WorkspaceGrid;

pub fn dashboard_page(component: &SabhaManager) -> Html {
    let events = component.store.events();
    let recipes = component.store.recipes();
    let summary = dashboard_summary(events, recipes);

    let latest = match summary.latest_event_date {
        Some(date) => format_date(date),
        None => NO_EVENTS_YET.to_string(),
    };
    let last_added = summary.last_added_event.unwrap_or_default();
    let (menu_item, menu_count) = match summary.most_frequent_menu_item {
        Some(top) => (top.item, format!("Served {} times", top.count)),
        None => (NO_DATA.to_string(), String::new()),
    };

    html! {
        <section class="dashboard">
            <WorkspaceGrid columns={3}>
                { stat_card("event", "Total Events", format_count(summary.total_events as u64), String::new()) }
                { stat_card("groups", "Total Bhaktas", format_count(summary.total_bhaktas), String::new()) }
                { stat_card("menu_book", "Total Recipes", format_count(summary.total_recipes as u64), String::new()) }
                { stat_card("schedule", "Latest Event", latest, last_added) }
                { stat_card("restaurant", "Most Frequent Item", menu_item, menu_count) }
            </WorkspaceGrid>

            <WorkspaceGrid columns={2}>
                <div class="card">
                    <h3>{ "Attendance Trend" }</h3>
                    <AttendanceChart points={attendance_trend(events)} />
                </div>
                <div class="card">
                    <h3>{ "Gender Ratio" }</h3>
                    <GenderRatioChart points={gender_ratio_trend(events)} />
                </div>
                <div class="card">
                    <h3>{ "Recipe Categories" }</h3>
                    <CategoryChart counts={recipe_category_distribution(recipes)} />
                </div>
            </WorkspaceGrid>
        </section>
    }
}

fn stat_card(icon: &'static str, title: &'static str, value: String, detail: String) -> Html {
    html! {
        <div class="card stat-card">
            <div class="stat-title">
                <i class="material-icons">{ icon }</i>
                <span>{ title }</span>
            </div>
            <div class="stat-value">{ value }</div>
            if !detail.is_empty() {
                <div class="stat-detail">{ detail }</div>
            }
        </div>
    }
}
