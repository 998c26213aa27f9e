//! Headless demo driving the page carousel with scripted input.

mod content;
mod stage;

use page_carousel::{CarouselArgs, PageCarousel, Point};
use stage::DemoStage;
use tracing::info;

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    init_tracing();

    let stage = DemoStage::new(750.0, 1334.0);
    let mut carousel = PageCarousel::new(
        stage,
        CarouselArgs::default()
            .auto_play(true)
            .generated_page_count(4),
    )
    .with_page_factory(content::demo_page);
    carousel.set_pages(Vec::new());
    report(&carousel, "initialized from the page factory");

    // Committed swipe: most of the screen to the left.
    swipe(&mut carousel, Point::new(650.0, 400.0), Point::new(80.0, 400.0));
    run_frames(&mut carousel, 30);
    report(&carousel, "after committed swipe");

    // Under-threshold drag bounces back.
    swipe(&mut carousel, Point::new(400.0, 400.0), Point::new(330.0, 400.0));
    run_frames(&mut carousel, 30);
    report(&carousel, "after bounced drag");

    // Backward navigation from the first page wraps onto the last.
    carousel.go_to_page(0, false);
    carousel.previous_page();
    run_frames(&mut carousel, 30);
    report(&carousel, "after previous_page from page 1");

    carousel.add_page(None);
    report(&carousel, "after add_page");
    carousel.remove_page(0);
    report(&carousel, "after remove_page(0)");

    // Roughly 3.3 seconds of idle frames; auto-play fires once.
    run_frames(&mut carousel, 200);
    report(&carousel, "after auto-play interval");

    info!("strip: {}", carousel.host().summary());
}

fn swipe(carousel: &mut PageCarousel<DemoStage>, from: Point, to: Point) {
    carousel.pointer_down(from);
    let steps = 8;
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        carousel.pointer_move(Point::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
        ));
        carousel.tick(FRAME);
    }
    carousel.pointer_up(to);
}

fn run_frames(carousel: &mut PageCarousel<DemoStage>, frames: usize) {
    for _ in 0..frames {
        carousel.tick(FRAME);
    }
}

fn report(carousel: &PageCarousel<DemoStage>, label: &str) {
    info!(
        "{label}: page {}/{}, offset {:.1}",
        carousel.current_page_index() + 1,
        carousel.total_pages(),
        carousel.content_offset(),
    );
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
