use yew::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use gloo_timers::callback::Timeout;
use crate::config;
use super::carousel::{offset_for, CarouselAction, CarouselMove, CarouselState, COPIES};
use super::data::{rating_label, StarRow, Testimonial, TESTIMONIALS};

fn scroll_track(track: &Element, index: usize, total_items: usize, behavior: ScrollBehavior) {
    let left = offset_for(index, track.scroll_width() as f64, total_items);
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(behavior);
    track.scroll_to_with_scroll_to_options(&options);
}

fn apply_move(track: &Element, mv: CarouselMove, total_items: usize) {
    match mv {
        CarouselMove::Instant(index) => scroll_track(track, index, total_items, ScrollBehavior::Instant),
        CarouselMove::Smooth(index) => scroll_track(track, index, total_items, ScrollBehavior::Smooth),
        CarouselMove::Reanchor { to, then } => {
            scroll_track(track, to, total_items, ScrollBehavior::Instant);
            scroll_track(track, then, total_items, ScrollBehavior::Smooth);
        }
    }
}

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    review: Testimonial,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let review = &props.review;
    let stars = StarRow::new(review.rating, review.max_rating);

    html! {
        <div class="review-card">
            <div class="review-header">
                <h3>{review.name}{" "}<span class="review-flag">{review.flag}</span></h3>
                <p class="review-stars">
                    {stars.render()}
                    <span class="review-score">{format!("({})", rating_label(review.rating, review.max_rating))}</span>
                </p>
            </div>
            <p class="review-text">{format!("\"{}\"", review.text)}</p>
        </div>
    }
}

#[function_component(ReviewsSection)]
pub fn reviews_section() -> Html {
    let carousel = use_reducer(|| CarouselState::new(TESTIMONIALS.len()));
    let track_ref = use_node_ref();

    // Push every recorded move onto the track.
    {
        let track_ref = track_ref.clone();
        let last_move = carousel.last_move;
        let total_items = carousel.total_items();
        use_effect_with_deps(
            move |_| {
                if let (Some(mv), Some(track)) = (last_move, track_ref.cast::<Element>()) {
                    apply_move(&track, mv, total_items);
                }
                || ()
            },
            carousel.moves,
        );
    }

    // One pending advance at most: every change of pause state or position
    // drops the old timeout before scheduling a new one.
    {
        let deps = (carousel.is_paused(), carousel.moves);
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |(paused, _)| {
                let timeout = (!*paused).then(|| {
                    Timeout::new(config::CAROUSEL_INTERVAL_MS, move || {
                        carousel.dispatch(CarouselAction::Tick);
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let onmouseenter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::HoverStart))
    };
    let onmouseleave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::HoverEnd))
    };

    let active = carousel.display_index();

    html! {
        <section id="reviews" class="reviews-section">
            <div class="reviews-container">
                <h2>{"What Our Clients Say"}</h2>
                <div class="reviews-track" ref={track_ref} {onmouseenter} {onmouseleave}>
                    {
                        TESTIMONIALS.iter()
                            .cycle()
                            .take(TESTIMONIALS.len() * COPIES)
                            .enumerate()
                            .map(|(position, review)| html! {
                                <ReviewCard key={position} review={review.clone()} />
                            })
                            .collect::<Html>()
                    }
                </div>
                <div class="reviews-indicators">
                    {
                        (0..TESTIMONIALS.len()).map(|i| {
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(i)))
                            };
                            html! {
                                <button
                                    class={classes!("indicator", (i == active).then(|| "active"))}
                                    aria-label={format!("Ver avaliação {}", i + 1)}
                                    {onclick}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .reviews-section {
                    padding: 5rem 0;
                    background: #f9fafb;
                }
                .reviews-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .reviews-container h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    color: #1f2937;
                    margin-bottom: 4rem;
                }
                .reviews-track {
                    display: flex;
                    gap: 2rem;
                    overflow-x: hidden;
                    padding-bottom: 2rem;
                }
                .review-card {
                    flex-shrink: 0;
                    width: 24rem;
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: box-shadow 0.3s ease;
                    box-sizing: border-box;
                }
                .review-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .review-header {
                    margin-bottom: 1rem;
                }
                .review-header h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                }
                .review-flag {
                    font-size: 1.125rem;
                }
                .review-stars {
                    color: #eab308;
                    font-size: 0.875rem;
                }
                .review-score {
                    margin-left: 0.5rem;
                    color: #4b5563;
                }
                .review-text {
                    color: #374151;
                    line-height: 1.6;
                    font-size: 0.875rem;
                }
                .reviews-indicators {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .indicator {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .indicator.active {
                    background: #0284C7;
                }
                @media (max-width: 768px) {
                    .review-card {
                        width: 20rem;
                    }
                    .reviews-container h2 {
                        font-size: 1.875rem;
                        margin-bottom: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
