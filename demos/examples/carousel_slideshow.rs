// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive both carousel policies from a console "view".
//!
//! This example shows how to:
//! - load a `CarouselConfig` from a host settings blob (JSON here),
//! - feed gestures, layout and taps into the engine as `CarouselEvent`s,
//! - run auto-advance off a host-owned timer.
//!
//! Run:
//! - `RUST_LOG=understory_carousel=debug cargo run -p understory_carousel_demos --example carousel_slideshow`

use tracing_subscriber::EnvFilter;
use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, FiniteCarousel, Pager};
use understory_carousel_demos::{ConsoleObserver, ConsoleView, ManualTimer};

const PHOTOS: [&str; 5] = ["beach", "forest", "city", "desert", "lake"];

const SETTINGS: &str = r#"{
    "policy": "infinite",
    "initial_page": 3,
    "auto_scroll": { "direction": "backward", "interval": { "secs": 2, "nanos": 0 } }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("finite carousel:");
    let mut finite = FiniteCarousel::new(PHOTOS.to_vec(), 0, ConsoleView::default())?;
    finite.set_observer(Box::new(ConsoleObserver));
    for event in [
        CarouselEvent::Next,
        CarouselEvent::Next,
        CarouselEvent::Tapped { slot: 1 },
        CarouselEvent::Next,
        CarouselEvent::Next,
        // Clamped: nothing is published.
        CarouselEvent::Next,
        CarouselEvent::LayoutFinished,
    ] {
        println!("{event:?}");
        finite.handle_event(event);
    }
    if let Err(err) = finite.jump_to(PHOTOS.len()) {
        println!("jump rejected: {err}");
    }

    println!("\ninfinite carousel from settings:");
    let config: CarouselConfig = serde_json::from_str(SETTINGS)?;
    let mut carousel = Carousel::from_config(PHOTOS.to_vec(), &config, ConsoleView::default())?;
    carousel.set_observer(Box::new(ConsoleObserver));

    let timer = ManualTimer::default();
    if let Some(auto_scroll) = config.auto_scroll {
        carousel.start_auto_scroll(auto_scroll, timer.clone());
    }

    // Deliver the ticks a real event loop would fire.
    let mut ticks = 0;
    while let Some(interval) = timer.armed() {
        println!("tick after {interval:?}");
        carousel.auto_scroll_tick();
        ticks += 1;
        if ticks == PHOTOS.len() + 1 {
            carousel.stop_auto_scroll();
        }
    }
    println!(
        "timer disarmed after {ticks} ticks, on page {}",
        carousel.current_page()
    );

    Ok(())
}
