//! Application-level configuration constants.

// Carousel behavior
pub const ROTATE_INTERVAL_MS: u32 = 6_000;

// Host-page contract: the Django template injects the endpoint URL as a
// window global and renders the CSRF hidden input into the page.
pub const PLAN_API_URL_GLOBAL: &str = "exercisePlanApiUrl";
pub const CSRF_FIELD_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

// User-facing copy
pub const GENERIC_PLAN_ERROR: &str = "Failed to generate plan. Please try again.";

// Goal select options: (value sent to the server, visible label)
pub const DEFAULT_GOAL: &str = "general_fitness";
pub const GOAL_OPTIONS: &[(&str, &str)] = &[
    ("general_fitness", "General Fitness"),
    ("weight_loss", "Weight Loss"),
    ("muscle_gain", "Muscle Gain"),
    ("endurance", "Endurance"),
];
