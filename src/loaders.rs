//! Data Loaders
//!
//! One async loader per resource collection. A loader fetches, writes the
//! store, then redraws the charts and map that depend on it. Failures are
//! logged and surfaced as a toast; nothing is retried or rolled back.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_chartjs::ChartSpec;

use crate::charts::{
    deviation_spec, destroy_chart, manpower_distribution_chart, render_chart, s_curve_config, status_distribution_config,
    workload_spec, ChartKey,
};
use crate::config::WORKLOAD_CONCURRENCY;
use crate::context::AppContext;
use crate::models::ManPower;
use crate::store::{
    reconcile_selection, still_selected, store_active_tab, store_select_manpower, store_select_project,
    AppStateStoreFields, SelectionOutcome,
};
use crate::tabs::Tab;
use crate::workload::{aggregate_workload, failed_count};

/// Reload whatever the active tab shows
pub async fn load_all_data(ctx: AppContext) {
    load_tab(ctx, store_active_tab(&ctx.store)).await;
}

pub async fn load_tab(ctx: AppContext, tab: Tab) {
    match tab {
        Tab::Summary => load_summary(ctx).await,
        Tab::Projects => load_projects(ctx).await,
        Tab::NonProjects => load_non_projects(ctx).await,
        Tab::Manpower => load_manpower(ctx).await,
    }
}

// ========================
// Summary
// ========================

pub async fn load_summary(ctx: AppContext) {
    let summary = match ctx.api().summary().await {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("[loaders] summary failed: {}", e);
            ctx.toast.error(e.user_message("Gagal memuat data summary"));
            return;
        }
    };
    log::debug!(
        "[loaders] summary: {} projects, {} locations",
        summary.total_projects,
        summary.locations.len()
    );

    ctx.map.update_value(|map| {
        if let Some(map) = map {
            map.replace_markers(&summary.locations);
        }
    });
    render_chart(
        ctx.charts,
        ChartKey::OverallSCurve,
        ChartSpec::new(s_curve_config(&summary.overall_s_curve, true)),
    );
    render_chart(
        ctx.charts,
        ChartKey::StatusDistribution,
        ChartSpec::new(status_distribution_config(&summary.status_distribution)),
    );
    ctx.store.summary().set(summary);
}

// ========================
// Projects
// ========================

pub async fn load_projects(ctx: AppContext) {
    let projects = match ctx.api().list_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            log::error!("[loaders] projects failed: {}", e);
            ctx.toast.error(e.user_message("Gagal memuat data proyek"));
            return;
        }
    };
    log::debug!("[loaders] {} projects", projects.len());

    let outcome = reconcile_selection(
        ctx.store.selected_project().get_untracked(),
        projects.iter().map(|p| p.id),
    );
    ctx.store.projects().set(projects);

    match outcome {
        SelectionOutcome::Keep(_) => load_project_details(ctx).await,
        SelectionOutcome::Clear => {
            store_select_project(&ctx.store, None);
            load_project_details(ctx).await;
        }
        SelectionOutcome::Empty => {}
    }
}

/// Detail section of the selected project; hidden when nothing is selected
pub async fn load_project_details(ctx: AppContext) {
    let Some(id) = ctx.store.selected_project().get_untracked() else {
        ctx.store.project_detail().set(None);
        destroy_chart(ctx.charts, ChartKey::ProjectSCurve);
        destroy_chart(ctx.charts, ChartKey::ProjectDeviation);
        return;
    };

    let detail = match ctx.api().project_detail(id).await {
        Ok(detail) => detail,
        Err(e) => {
            log::error!("[loaders] project {} detail failed: {}", id, e);
            ctx.toast.error(e.user_message("Gagal memuat detail proyek"));
            return;
        }
    };

    if !still_selected(ctx.store.selected_project().get_untracked(), id) {
        log::debug!("[loaders] dropping detail of deselected project {}", id);
        return;
    }

    render_chart(
        ctx.charts,
        ChartKey::ProjectSCurve,
        ChartSpec::new(s_curve_config(&detail.s_curve, false)),
    );
    render_chart(ctx.charts, ChartKey::ProjectDeviation, deviation_spec(&detail.project));
    ctx.store.project_detail().set(Some(detail));
}

// ========================
// Non-Projects
// ========================

pub async fn load_non_projects(ctx: AppContext) {
    match ctx.api().list_non_projects().await {
        Ok(non_projects) => {
            log::debug!("[loaders] {} non-projects", non_projects.len());
            ctx.store.non_projects().set(non_projects);
        }
        Err(e) => {
            log::error!("[loaders] non-projects failed: {}", e);
            ctx.toast.error(e.user_message("Gagal memuat data non-proyek"));
        }
    }
}

// ========================
// Manpower
// ========================

pub async fn load_manpower(ctx: AppContext) {
    let people = match ctx.api().list_manpower().await {
        Ok(people) => people,
        Err(e) => {
            log::error!("[loaders] manpower failed: {}", e);
            ctx.toast.error(e.user_message("Gagal memuat data manpower"));
            return;
        }
    };
    log::debug!("[loaders] {} manpower", people.len());

    let outcome = reconcile_selection(
        ctx.store.selected_manpower().get_untracked(),
        people.iter().map(|p| p.id),
    );
    ctx.store.manpower().set(people.clone());

    spawn_local(load_team_workload(ctx, people));

    match outcome {
        SelectionOutcome::Keep(_) => load_manpower_details(ctx).await,
        SelectionOutcome::Clear => {
            store_select_manpower(&ctx.store, None);
            load_manpower_details(ctx).await;
        }
        SelectionOutcome::Empty => {}
    }
}

/// Assignments and distribution chart of the selected person
pub async fn load_manpower_details(ctx: AppContext) {
    let Some(id) = ctx.store.selected_manpower().get_untracked() else {
        ctx.store.assignments().set(Vec::new());
        destroy_chart(ctx.charts, ChartKey::ManpowerDistribution);
        return;
    };

    let assignments = match ctx.api().manpower_assignments(id).await {
        Ok(assignments) => assignments,
        Err(e) => {
            log::error!("[loaders] manpower {} assignments failed: {}", id, e);
            ctx.toast.error(e.user_message("Gagal memuat detail manpower"));
            return;
        }
    };

    if !still_selected(ctx.store.selected_manpower().get_untracked(), id) {
        log::debug!("[loaders] dropping assignments of deselected manpower {}", id);
        return;
    }

    let chart = ctx
        .store
        .projects()
        .with_untracked(|projects| manpower_distribution_chart(&assignments, projects));
    // Canvas visibility follows the store, so it is written before drawing
    ctx.store.assignments().set(assignments);
    match chart {
        Some(config) => render_chart(ctx.charts, ChartKey::ManpowerDistribution, ChartSpec::new(config)),
        None => destroy_chart(ctx.charts, ChartKey::ManpowerDistribution),
    }
}

/// Workload bar chart; needs one assignment request per person.
/// Only the most recently started run may draw.
pub async fn load_team_workload(ctx: AppContext, people: Vec<ManPower>) {
    let Some(run) = ctx.workload_runs.try_update_value(|runs| runs.start()) else {
        return;
    };
    let api = ctx.api();
    let api = &api;
    let entries = aggregate_workload(&people, WORKLOAD_CONCURRENCY, move |id| api.manpower_assignments(id)).await;

    let current = ctx.workload_runs.try_with_value(|runs| runs.is_current(run)).unwrap_or(false);
    if !current {
        log::debug!("[loaders] dropping superseded workload run {}", run);
        return;
    }

    let failed = failed_count(&entries);
    if failed > 0 {
        ctx.toast
            .warning(format!("Gagal memuat assignment untuk {} dari {} man power", failed, entries.len()));
    }
    render_chart(ctx.charts, ChartKey::TeamWorkload, workload_spec(&entries));
}
