//! Anomalies Page
//!
//! AI anomaly feed with quick filters, status workflow actions and an
//! investigation details dialog.

use leptos::*;

use dinedash::model::ChangeDirection;
use dinedash::workflow::FEED_FILTERS;
use dinedash::{Anomaly, AnomalyAction, TransitionOutcome};

use crate::components::chip::{anomaly_status_class, severity_class};
use crate::components::Chip;
use crate::state::global::GlobalState;

/// Toast text for a workflow action
pub fn transition_message(title: &str, action: AnomalyAction, outcome: &TransitionOutcome) -> String {
    match outcome {
        TransitionOutcome::Applied { to, .. } => format!("{} marked as {}", title, to),
        TransitionOutcome::Rejected { status } => {
            format!("Cannot {} an anomaly that is {}", action, status)
        }
        TransitionOutcome::NotFound => "Anomaly no longer exists".to_string(),
    }
}

/// Anomalies page component
#[component]
pub fn Anomalies() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let banner = create_memo(move |_| dashboard.with(|d| d.overview().banner));
    let visible = create_memo(move |_| {
        dashboard.with(|d| d.visible_anomalies().into_iter().cloned().collect::<Vec<Anomaly>>())
    });
    let details = create_memo(move |_| dashboard.with(|d| d.anomaly_details().cloned()));

    view! {
        <div class="space-y-6">
            {move || {
                let banner = banner.get();
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <Counter label="Critical & Active" value=banner.critical_active color="text-[var(--error)]" />
                        <Counter label="Active" value=banner.active color="text-[var(--warning)]" />
                        <Counter
                            label="Total Alerts"
                            value=dashboard.with(|d| d.anomalies().len())
                            color="text-[var(--primary)]"
                        />
                    </div>
                }
            }}

            <div class="flex space-x-2">
                {FEED_FILTERS
                    .iter()
                    .map(|(key, label)| {
                        let key = *key;
                        let active = move || dashboard.with(|d| d.anomaly_filter().key() == key);
                        view! {
                            <button
                                on:click=move |_| {
                                    if let Some(result) = dashboard.try_update(|d| d.set_anomaly_filter(key)) {
                                        state.report(result);
                                    }
                                }
                                class=move || {
                                    let base = "px-4 py-1.5 rounded-full text-sm font-medium transition-colors";
                                    if active() {
                                        format!("{} bg-[var(--primary)] text-white", base)
                                    } else {
                                        format!("{} border border-gray-300 dark:border-gray-700", base)
                                    }
                                }
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-4">
                {move || {
                    let anomalies = visible.get();
                    if anomalies.is_empty() {
                        return view! {
                            <div class="bg-[var(--paper)] rounded-xl p-8 text-center text-[var(--muted-foreground)]">
                                "No anomalies match this filter"
                            </div>
                        }
                        .into_view();
                    }
                    anomalies
                        .into_iter()
                        .map(|anomaly| view! { <AnomalyCard anomaly=anomaly /> })
                        .collect_view()
                }}
            </div>

            {move || details.get().map(|anomaly| view! { <AnomalyDetails anomaly=anomaly /> })}
        </div>
    }
}

#[component]
fn Counter(label: &'static str, value: usize, color: &'static str) -> impl IntoView {
    view! {
        <div class="bg-[var(--paper)] rounded-xl p-5 shadow-sm">
            <div class="text-sm text-[var(--muted-foreground)]">{label}</div>
            <div class=format!("text-3xl font-bold mt-2 {}", color)>{value}</div>
        </div>
    }
}

/// Workflow buttons for the anomaly's current status
#[component]
fn ActionButtons(anomaly: Anomaly) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;
    let id = anomaly.id.clone();
    let title = anomaly.title.clone();

    let actions = AnomalyAction::available(anomaly.status)
        .into_iter()
        .map(|action| {
            let id = id.clone();
            let title = title.clone();
            let on_click = move |_| {
                let Some(outcome) = dashboard.try_update(|d| d.apply_anomaly_action(&id, action)) else {
                    return;
                };
                let message = transition_message(&title, action, &outcome);
                if outcome.is_applied() {
                    state.show_success(&message);
                } else {
                    state.show_error(&message);
                }
            };
            view! {
                <button
                    on:click=on_click
                    class="px-3 py-1.5 rounded-lg text-sm font-medium bg-[var(--primary)] text-white"
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    let dismiss_id = id.clone();
    view! {
        <div class="flex flex-wrap gap-2">
            {actions}
            <button
                on:click=move |_| {
                    if let Some(Some(_)) = dashboard.try_update(|d| d.dismiss_anomaly(&dismiss_id)) {
                        state.show_success("Anomaly dismissed");
                    }
                }
                class="px-3 py-1.5 rounded-lg text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
            >
                "Dismiss"
            </button>
        </div>
    }
}

#[component]
fn AnomalyCard(anomaly: Anomaly) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;
    let id = anomaly.id.clone();

    view! {
        <article class="bg-[var(--paper)] rounded-xl p-5 shadow-sm space-y-3">
            <div class="flex items-start justify-between">
                <div class="space-y-1">
                    <div class="flex items-center space-x-2">
                        <Chip label=anomaly.severity.as_str().to_uppercase() class=severity_class(anomaly.severity) />
                        <Chip label=anomaly.status.as_str().to_uppercase() class=anomaly_status_class(anomaly.status) />
                        <span class="text-xs text-[var(--muted-foreground)]">{anomaly.kind.as_str()}</span>
                    </div>
                    <h3 class="text-lg font-semibold">{anomaly.title.clone()}</h3>
                    <p class="text-sm text-[var(--muted-foreground)]">{anomaly.description.clone()}</p>
                </div>
                <div class="text-right text-sm">
                    <div class="font-semibold">{format!("{}% confidence", anomaly.confidence)}</div>
                    <div class="text-[var(--muted-foreground)]">{anomaly.timestamp.clone()}</div>
                </div>
            </div>

            <div class="flex items-center justify-between text-sm">
                <span>{format!("📍 {}, {}", anomaly.restaurant, anomaly.city)}</span>
                <span class="text-[var(--error)] font-medium">{format!("Impact: {}", anomaly.impact)}</span>
            </div>

            <div class="flex items-center justify-between">
                <ActionButtons anomaly=anomaly.clone() />
                <button
                    on:click=move |_| dashboard.update(|d| {
                        d.show_anomaly(&id);
                    })
                    class="text-sm text-[var(--secondary)] hover:underline"
                >
                    "View Details"
                </button>
            </div>
        </article>
    }
}

fn direction_class(direction: ChangeDirection) -> &'static str {
    match direction {
        ChangeDirection::Up => "text-green-500",
        ChangeDirection::Down => "text-red-500",
        ChangeDirection::Flat => "text-[var(--muted-foreground)]",
    }
}

#[component]
fn AnomalyDetails(anomaly: Anomaly) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;
    let detail = anomaly.detail.clone();

    view! {
        <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center">
            <div class="bg-[var(--paper)] rounded-xl shadow-xl w-full max-w-3xl max-h-[90vh] overflow-y-auto p-6 space-y-6">
                <div class="flex items-start justify-between">
                    <div>
                        <h2 class="text-2xl font-semibold">{anomaly.title.clone()}</h2>
                        <p class="text-sm text-[var(--muted-foreground)] mt-1">
                            {format!("{}, {} · {}", anomaly.restaurant, anomaly.city, anomaly.timestamp)}
                        </p>
                    </div>
                    <button on:click=move |_| dashboard.update(|d| d.close_anomaly_details()) class="text-xl">"✕"</button>
                </div>

                {(!detail.affected_metrics.is_empty()).then(|| view! {
                    <section>
                        <h3 class="font-semibold mb-3">"Affected Metrics"</h3>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {detail
                                .affected_metrics
                                .iter()
                                .map(|m| view! {
                                    <div class="rounded-lg bg-gray-50 dark:bg-gray-900 p-4">
                                        <div class="text-xs text-[var(--muted-foreground)]">{m.metric.clone()}</div>
                                        <div class="text-sm mt-1">{format!("{} → {}", m.before, m.after)}</div>
                                        <div class=format!("text-sm font-semibold {}", direction_class(m.direction()))>
                                            {m.change.clone()}
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </section>
                })}

                {(!detail.timeline.is_empty()).then(|| view! {
                    <section>
                        <h3 class="font-semibold mb-3">"Timeline"</h3>
                        <ol class="border-l-2 border-[var(--primary)] pl-4 space-y-2">
                            {detail
                                .timeline
                                .iter()
                                .map(|event| view! {
                                    <li class="text-sm">
                                        <span class="font-medium mr-2">{event.time.clone()}</span>
                                        {event.event.clone()}
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </section>
                })}

                {(!detail.recommendations.is_empty()).then(|| view! {
                    <section>
                        <h3 class="font-semibold mb-3">"AI Recommendations"</h3>
                        <ul class="list-disc pl-5 space-y-1 text-sm">
                            {detail
                                .recommendations
                                .iter()
                                .map(|rec| view! { <li>{rec.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </section>
                })}

                {(!detail.technical_details.is_empty()).then(|| view! {
                    <section class="text-sm space-y-1">
                        <h3 class="font-semibold">"Technical Details"</h3>
                        <p class="text-[var(--muted-foreground)]">{detail.technical_details.clone()}</p>
                        <p>{format!("Estimated resolution: {}", detail.estimated_resolution)}</p>
                    </section>
                })}

                <ActionButtons anomaly=anomaly.clone() />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinedash::AnomalyStatus;

    #[test]
    fn test_transition_messages() {
        let applied = TransitionOutcome::Applied {
            from: AnomalyStatus::Active,
            to: AnomalyStatus::Investigating,
        };
        assert_eq!(
            transition_message("Revenue Drop", AnomalyAction::Investigate, &applied),
            "Revenue Drop marked as investigating"
        );

        let rejected = TransitionOutcome::Rejected {
            status: AnomalyStatus::Active,
        };
        assert_eq!(
            transition_message("Revenue Drop", AnomalyAction::Resolve, &rejected),
            "Cannot resolve an anomaly that is active"
        );
    }
}
