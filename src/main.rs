//! Main module for the fitness-club page using Yew.
//! Wires the three independent widgets: hero carousel, mobile navigation,
//! and the exercise-plan form.

use yew::prelude::*;

mod api;
mod carousel;
mod components;
mod config;
mod menu;
mod plan_form;
mod utils;

use carousel::{Carousel, Slide};
use menu::{MobileMenu, NavLink};
use plan_form::PlanForm;

/// Hero slides for the landing carousel.
fn hero_slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/static/images/carousel-training.jpg",
            caption: "Train with certified coaches",
        },
        Slide {
            image: "/static/images/carousel-classes.jpg",
            caption: "Group classes every day",
        },
        Slide {
            image: "/static/images/carousel-community.jpg",
            caption: "Join the club community",
        },
    ]
}

/// Mobile navigation entries.
fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", href: "/" },
        NavLink { label: "Events", href: "/events/" },
        NavLink { label: "Exercise Plan", href: "/exercise-plan/" },
        NavLink { label: "Membership", href: "/membership/" },
    ]
}

/// Page root: the three widgets attach independently and share no state.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <header class="site-header">
                <MobileMenu links={nav_links()} />
            </header>
            <section class="hero-section">
                <Carousel slides={hero_slides()} />
            </section>
            <main class="page-content">
                <PlanForm />
            </main>
        </>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
