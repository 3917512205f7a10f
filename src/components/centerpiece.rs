//! Animated centerpieces
//!
//! One decoration per occasion, drawn between the title and the message.
//! Animations are pure CSS (keyframes in the global stylesheet); particle
//! layouts are computed here.

use cardsmith_core::{Centerpiece, HexColor};
use dioxus::prelude::*;

use crate::theme::colors::{CAP_GRAY, CONFETTI, FIREWORKS, ROSE_400, ROSE_500};

const STAR_PATH: &str = "M12 2L14.5 9.5L22 12L14.5 14.5L12 22L9.5 14.5L2 12L9.5 9.5L12 2Z";
const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

const FIREWORK_PARTICLES: usize = 15;
const CONFETTI_PARTICLES: usize = 50;

/// Low-discrepancy value in [0, 1) for particle `i`; stable across renders
fn scatter(i: usize, salt: f64) -> f64 {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    (i as f64 * GOLDEN + salt).fract()
}

/// End offset of firework particle `i`, in pixels
fn burst_offset(i: usize) -> (f64, f64) {
    let angle = (i as f64 / FIREWORK_PARTICLES as f64) * std::f64::consts::TAU;
    let distance = 15.0 + scatter(i, 0.3) * 20.0;
    (angle.cos() * distance, angle.sin() * distance)
}

/// Decoration for a card's occasion
#[component]
pub fn CenterpieceView(kind: Centerpiece, accent: HexColor) -> Element {
    match kind {
        Centerpiece::PulsatingHeart => rsx! { PulsatingHeart {} },
        Centerpiece::Fireworks => rsx! { Fireworks {} },
        Centerpiece::GradCap => rsx! { GradCap { color: accent.to_string() } },
        Centerpiece::Confetti => rsx! { Confetti {} },
        Centerpiece::Sparkle => rsx! { Sparkle { color: accent.to_string() } },
    }
}

#[component]
fn PulsatingHeart() -> Element {
    rsx! {
        div { class: "centerpiece heart",
            svg {
                class: "heart-glow",
                view_box: "0 0 24 24",
                fill: ROSE_400,
                path { d: HEART_PATH }
            }
            svg {
                class: "heart-beat",
                view_box: "0 0 24 24",
                fill: ROSE_500,
                path { d: HEART_PATH }
            }
        }
    }
}

#[component]
fn Fireworks() -> Element {
    // three bursts: (x%, y%, delay)
    let bursts = [(50.0, 50.0, 0.0), (25.0, 30.0, 0.5), (75.0, 60.0, 1.0)];

    rsx! {
        div { class: "centerpiece fireworks",
            for (b, (x, y, delay)) in bursts.into_iter().enumerate() {
                for i in 0..FIREWORK_PARTICLES {
                    {
                        let (dx, dy) = burst_offset(i);
                        let style = format!(
                            "left: {}%; top: {}%; --dx: {:.1}px; --dy: {:.1}px; animation-delay: {}s; background: {};",
                            x,
                            y,
                            dx,
                            dy,
                            delay,
                            FIREWORKS[i % FIREWORKS.len()]
                        );
                        rsx! {
                            span { key: "{b}-{i}", class: "firework-particle", style }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GradCap(color: String) -> Element {
    rsx! {
        div { class: "centerpiece grad-cap",
            svg {
                view_box: "0 0 100 100",
                xmlns: "http://www.w3.org/2000/svg",
                fill: CAP_GRAY,
                polygon { points: "50,10 95,30 50,50 5,30" }
                path { d: "M15,50 Q50,70 85,50 L85,60 Q50,80 15,60 Z" }
                circle { cx: "50", cy: "30", r: "4", fill: "{color}" }
                g { class: "tassel",
                    line {
                        x1: "50",
                        y1: "30",
                        x2: "50",
                        y2: "55",
                        stroke: "{color}",
                        stroke_width: "2",
                    }
                    circle { cx: "50", cy: "65", r: "10", fill: "{color}" }
                }
            }
        }
    }
}

#[component]
fn Confetti() -> Element {
    rsx! {
        div { class: "centerpiece confetti",
            for i in 0..CONFETTI_PARTICLES {
                {
                    let top = scatter(i, 0.11) * 100.0;
                    let left = scatter(i, 0.47) * 100.0;
                    let delay = scatter(i, 0.83) * 2.0;
                    let style = format!(
                        "top: {:.1}%; left: {:.1}%; animation-delay: {:.2}s; background: {};",
                        top,
                        left,
                        delay,
                        CONFETTI[i % CONFETTI.len()]
                    );
                    rsx! {
                        span { key: "{i}", class: "confetti-particle", style }
                    }
                }
            }
        }
    }
}

#[component]
fn Sparkle(color: String) -> Element {
    // (extra class, stroke width, animation delay)
    let stars = [("", "1.5", "0s"), ("small top-left", "1", "0.5s"), ("small bottom-right", "1", "1s")];

    rsx! {
        div { class: "centerpiece sparkle",
            for (class, width, delay) in stars {
                svg {
                    key: "{delay}",
                    class: "sparkle-star {class}",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "{color}",
                    stroke_width: width,
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    style: "animation-delay: {delay};",
                    path { d: STAR_PATH }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_stays_in_unit_interval() {
        for i in 0..500 {
            let v = scatter(i, 0.47);
            assert!((0.0..1.0).contains(&v), "{} -> {}", i, v);
        }
    }

    #[test]
    fn burst_particles_fly_between_15_and_35() {
        for i in 0..FIREWORK_PARTICLES {
            let (dx, dy) = burst_offset(i);
            let distance = (dx * dx + dy * dy).sqrt();
            assert!((15.0..35.0).contains(&distance));
        }
    }
}
