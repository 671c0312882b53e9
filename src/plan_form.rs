//! Metrics form: captures submit, POSTs the metrics once, and renders the
//! loading / results / error panels from a single request lifecycle state.

use std::rc::Rc;

use fitclub_web::{MetricsRequest, PlanData};
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{request_plan, PlanRequestError};
use crate::components::render_results;
use crate::config::{DEFAULT_GOAL, GOAL_OPTIONS};
use crate::utils::parse_metric;

/// Request lifecycle. Panel visibility is a pure function of the variant,
/// so every settled request leaves the loading panel hidden and the form
/// re-submittable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlanRequestState {
    #[default]
    Idle,
    Loading,
    Success(Rc<PlanData>),
    Error(String),
}

impl PlanRequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PlanRequestState::Loading)
    }

    /// Terminal state for a finished request. Failures are logged with
    /// their full detail; the UI only ever sees the user-facing message.
    pub fn settled(result: Result<PlanData, PlanRequestError>) -> Self {
        match result {
            Ok(data) => PlanRequestState::Success(Rc::new(data)),
            Err(err) => {
                error!("exercise plan request failed: {}", err);
                PlanRequestState::Error(err.user_message())
            }
        }
    }
}

/// The metrics form plus its result panels.
///
/// While a request is in flight the submit control is disabled and a
/// re-entrant submit is ignored, so at most one request runs at a time.
#[function_component(PlanForm)]
pub fn plan_form() -> Html {
    let state = use_state(PlanRequestState::default);
    let weight_ref = use_node_ref();
    let height_ref = use_node_ref();
    let goal_ref = use_node_ref();

    let onsubmit = {
        let state = state.clone();
        let weight_ref = weight_ref.clone();
        let height_ref = height_ref.clone();
        let goal_ref = goal_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_loading() {
                return;
            }

            let weight = weight_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let height = height_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let goal = goal_ref
                .cast::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_else(|| DEFAULT_GOAL.to_string());

            let metrics = MetricsRequest {
                weight_kg: parse_metric(&weight),
                height_cm: parse_metric(&height),
                goal,
            };

            state.set(PlanRequestState::Loading);
            let state = state.clone();
            spawn_local(async move {
                let result = request_plan(&metrics).await;
                state.set(PlanRequestState::settled(result));
            });
        })
    };

    html! {
        <section class="plan-generator">
            <form id="metricsForm" {onsubmit}>
                <div class="form-group">
                    <label for="weight">{ "Weight (kg):" }</label>
                    <input
                        id="weight"
                        name="weight"
                        type="number"
                        step="0.1"
                        ref={weight_ref.clone()}
                    />
                </div>
                <div class="form-group">
                    <label for="height">{ "Height (cm):" }</label>
                    <input
                        id="height"
                        name="height"
                        type="number"
                        step="0.1"
                        ref={height_ref.clone()}
                    />
                </div>
                <div class="form-group">
                    <label for="goal">{ "Fitness Goal:" }</label>
                    <select id="goal" name="goal" ref={goal_ref.clone()}>
                        { GOAL_OPTIONS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*value == DEFAULT_GOAL}>
                                { *label }
                            </option>
                        }).collect::<Html>() }
                    </select>
                </div>
                <button type="submit" class="btn-primary" disabled={state.is_loading()}>
                    { "Generate Plan" }
                </button>
            </form>

            if state.is_loading() {
                <div id="loadingState" class="loading-state">
                    <div class="spinner" />
                    <p>{ "Generating your personalized plan..." }</p>
                </div>
            }

            {
                match &*state {
                    PlanRequestState::Success(data) => html! {
                        <div id="resultsSection" class="results-section">
                            { render_results(data) }
                        </div>
                    },
                    PlanRequestState::Error(message) => html! {
                        <div id="errorState" class="error-state">
                            <p id="errorMessage">{ message }</p>
                        </div>
                    },
                    _ => html! {},
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitclub_web::ExercisePlan;

    fn sample_data() -> PlanData {
        PlanData {
            weight_kg: 70.0,
            height_cm: 175.0,
            bmi: 22.9,
            category: "Normal Weight".into(),
            plan: ExercisePlan {
                category: "Normal Weight".into(),
                focus: "Overall Fitness".into(),
                weekly_frequency: "4-5 sessions".into(),
                weekly_plan: vec![],
                nutrition_focus: None,
                important_notes: None,
            },
            disclaimer: None,
        }
    }

    #[test]
    fn settled_success_renders_results_not_error() {
        let state = PlanRequestState::settled(Ok(sample_data()));
        assert!(matches!(state, PlanRequestState::Success(_)));
        assert!(!state.is_loading());
    }

    #[test]
    fn server_rejection_is_shown_verbatim() {
        let state =
            PlanRequestState::settled(Err(PlanRequestError::Rejected("Invalid weight".into())));
        assert_eq!(state, PlanRequestState::Error("Invalid weight".into()));
    }

    #[test]
    fn transport_style_failures_use_generic_copy() {
        let state = PlanRequestState::settled(Err(PlanRequestError::MissingEndpoint));
        assert_eq!(
            state,
            PlanRequestState::Error(crate::config::GENERIC_PLAN_ERROR.into())
        );
    }

    #[test]
    fn every_settled_state_leaves_loading_hidden() {
        for state in [
            PlanRequestState::settled(Ok(sample_data())),
            PlanRequestState::settled(Err(PlanRequestError::MalformedResponse)),
            PlanRequestState::settled(Err(PlanRequestError::Rejected("nope".into()))),
        ] {
            assert!(!state.is_loading());
        }
    }
}
