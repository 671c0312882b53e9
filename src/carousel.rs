//! Hero carousel: auto-rotates slide/indicator pairs on a fixed interval,
//! with manual override via the indicator buttons.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::ROTATE_INTERVAL_MS;

/// A single slide supplied by the page.
#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub caption: &'static str,
}

/// Rotation state: which of `count` slides is showing. The slide set is
/// captured once at mount; exactly one slide/indicator pair is active.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current: usize,
    count: usize,
}

pub enum CarouselAction {
    /// Timer tick: advance by one, wrapping.
    Advance,
    /// Indicator click: jump straight to the given slide.
    Select(usize),
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        // An empty slide set has nothing to rotate.
        if self.count == 0 {
            return self;
        }
        let next = match action {
            CarouselAction::Advance => (self.current + 1) % self.count,
            CarouselAction::Select(index) if index < self.count => index,
            CarouselAction::Select(_) => self.current,
        };
        Rc::new(Self {
            current: next,
            count: self.count,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
}

/// Carousel component. The rotation interval is owned by the mount effect
/// and cancelled when the component unmounts; a manual selection does not
/// reset the automatic schedule.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slide_count = props.slides.len();
    let state = use_reducer_eq(move || CarouselState::new(slide_count));

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(ROTATE_INTERVAL_MS, move || {
                state.dispatch(CarouselAction::Advance);
            });
            move || drop(interval)
        });
    }

    html! {
        <div class="carousel">
            { props.slides.iter().enumerate().map(|(i, slide)| html! {
                <div class={classes!("carousel-slide", state.is_active(i).then_some("active"))}>
                    <img src={slide.image} alt={slide.caption} />
                    <div class="carousel-caption">{ slide.caption }</div>
                </div>
            }).collect::<Html>() }
            <div class="carousel-indicators">
                { (0..slide_count).map(|i| {
                    let onclick = {
                        let state = state.clone();
                        Callback::from(move |_| state.dispatch(CarouselAction::Select(i)))
                    };
                    html! {
                        <button
                            class={classes!("indicator", state.is_active(i).then_some("active"))}
                            aria-label={format!("Show slide {}", i + 1)}
                            {onclick}
                        />
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(state: Rc<CarouselState>, action: CarouselAction) -> Rc<CarouselState> {
        state.reduce(action)
    }

    #[test]
    fn exactly_one_pair_is_active_after_select() {
        let mut state = Rc::new(CarouselState::new(4));
        state = step(state, CarouselAction::Select(2));
        let active: Vec<usize> = (0..4).filter(|&i| state.is_active(i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn advancing_count_times_returns_to_start() {
        let mut state = Rc::new(CarouselState::new(3));
        state = step(state, CarouselAction::Select(1));
        for _ in 0..3 {
            state = step(state, CarouselAction::Advance);
        }
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn advance_wraps_modulo_count() {
        let mut state = Rc::new(CarouselState::new(3));
        state = step(state, CarouselAction::Select(2));
        state = step(state, CarouselAction::Advance);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn select_overrides_automatic_position_immediately() {
        let mut state = Rc::new(CarouselState::new(5));
        state = step(state, CarouselAction::Advance);
        state = step(state, CarouselAction::Advance);
        state = step(state, CarouselAction::Select(4));
        assert_eq!(state.current(), 4);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut state = Rc::new(CarouselState::new(2));
        state = step(state, CarouselAction::Select(7));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn empty_slide_set_never_moves() {
        let mut state = Rc::new(CarouselState::new(0));
        state = step(state, CarouselAction::Advance);
        state = step(state, CarouselAction::Select(0));
        assert_eq!(state.current(), 0);
    }
}
