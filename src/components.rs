//! Pure Yew view functions for the exercise-plan results.
//!
//! Everything here is a function of the response payload; all server text
//! enters the tree as text nodes, never as concatenated markup.

use fitclub_web::{exercise_detail, DayPlan, Exercise, ExercisePlan, PlanData};
use yew::prelude::*;

/// Render the full results body: BMI summary plus the weekly plan.
pub fn render_results(data: &PlanData) -> Html {
    html! {
        <>
            <div class="bmi-summary">
                <div id="bmiValue" class="bmi-value">{ data.bmi }</div>
                <div id="bmiCategory" class="bmi-category">{ &data.category }</div>
            </div>
            <div id="planResults" class="plan-results">
                { render_plan(&data.plan) }
                { render_disclaimer(data.disclaimer.as_deref()) }
            </div>
        </>
    }
}

/// Render a weekly plan: header block, one block per day in order, then
/// the optional nutrition and notes sections.
pub fn render_plan(plan: &ExercisePlan) -> Html {
    html! {
        <>
            <div class="plan-header">
                <h3>{ &plan.category }</h3>
                <p>{ format!("Focus: {}", plan.focus) }</p>
                <p>{ format!("Weekly Frequency: {}", plan.weekly_frequency) }</p>
            </div>
            <div class="weekly-plan">
                { plan.weekly_plan.iter().map(render_day).collect::<Html>() }
            </div>
            { render_nutrition(plan.nutrition_focus.as_deref()) }
            { render_notes(plan.important_notes.as_deref()) }
        </>
    }
}

fn render_day(day: &DayPlan) -> Html {
    html! {
        <div class="day-plan">
            <h4>{ &day.day }</h4>
            <p>{ &day.focus }</p>
            <ul class="exercises-list">
                { day.exercises.iter().map(render_exercise).collect::<Html>() }
            </ul>
        </div>
    }
}

fn render_exercise(exercise: &Exercise) -> Html {
    html! {
        <li class="exercise-item">
            <span class="exercise-name">{ &exercise.name }</span>
            { exercise_detail(exercise) }
        </li>
    }
}

fn render_nutrition(nutrition_focus: Option<&str>) -> Html {
    match nutrition_focus {
        Some(focus) if !focus.is_empty() => html! {
            <div class="nutrition-section">
                <h4>{ "Nutrition Focus" }</h4>
                <p>{ focus }</p>
            </div>
        },
        _ => html! {},
    }
}

fn render_notes(notes: Option<&[String]>) -> Html {
    match notes {
        Some(notes) if !notes.is_empty() => html! {
            <div class="nutrition-section notes-section">
                <h4>{ "Important Notes" }</h4>
                <ul class="notes-list">
                    { notes.iter().map(|note| html! {
                        <li class="note-item">{ note }</li>
                    }).collect::<Html>() }
                </ul>
            </div>
        },
        _ => html! {},
    }
}

fn render_disclaimer(disclaimer: Option<&str>) -> Html {
    match disclaimer {
        Some(text) if !text.is_empty() => html! {
            <p class="plan-disclaimer">{ text }</p>
        },
        _ => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Html is PartialEq but not Debug, so compare with plain asserts.

    #[test]
    fn absent_nutrition_focus_renders_no_block() {
        assert!(render_nutrition(None) == html! {});
        assert!(render_nutrition(Some("")) == html! {});
    }

    #[test]
    fn present_nutrition_focus_renders_a_block() {
        assert!(render_nutrition(Some("High protein intake")) != html! {});
    }

    #[test]
    fn absent_notes_render_no_block() {
        assert!(render_notes(None) == html! {});
        assert!(render_notes(Some(&[])) == html! {});
    }

    #[test]
    fn present_notes_render_a_block() {
        let notes = ["Warm up first".to_string()];
        assert!(render_notes(Some(&notes)) != html! {});
    }

    #[test]
    fn absent_disclaimer_renders_nothing() {
        assert!(render_disclaimer(None) == html! {});
        assert!(render_disclaimer(Some("")) == html! {});
    }
}
