//! Headless FAB reveal demo.
//!
//! Reveals the secondary surface, pops its items in one after another, holds
//! for a while and returns to the main surface on its own.
//!
//! Usage: `reveal-demo [--density <px per dp>] [--hold-ms <millis>]`

mod console_host;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{bail, Context};
use fabreveal_animation::{AnimationSpec, Easing, Tween, TweenHandle};
use fabreveal_core::{FrameClock, Runtime};
use fabreveal_graphics::{Color, Rect};
use fabreveal_ui::{ChildKind, RevealConfig, RevealLayoutBuilder, RevealListener};
use web_time::{Duration, Instant};

use console_host::ConsoleHost;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_HOLD: Duration = Duration::from_secs(5);
const ITEM_DELAYS_MILLIS: [u64; 4] = [0, 100, 150, 200];
const ITEM_POP_MILLIS: u64 = 500;
const FAB_TINT: u32 = 0xFF_FF_40_81;

struct DemoOptions {
    density: f32,
    hold: Duration,
}

impl DemoOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut options = DemoOptions {
            density: 1.0,
            hold: DEFAULT_HOLD,
        };
        while let Some(arg) = args.next() {
            let value = args
                .next()
                .with_context(|| format!("{arg} needs a value"))?;
            match arg.as_str() {
                "--density" => {
                    options.density = value
                        .parse()
                        .with_context(|| format!("invalid density {value:?}"))?;
                    if !(options.density.is_finite() && options.density > 0.0) {
                        bail!("density must be positive, got {value}");
                    }
                }
                "--hold-ms" => {
                    let millis: u64 = value
                        .parse()
                        .with_context(|| format!("invalid hold time {value:?}"))?;
                    options.hold = Duration::from_millis(millis);
                }
                other => bail!("unknown argument {other}"),
            }
        }
        Ok(options)
    }
}

/// Shared between the listener and the frame loop.
#[derive(Default)]
struct DemoState {
    restore_at: Cell<Option<Instant>>,
    returned: Cell<bool>,
    items: RefCell<Vec<TweenHandle>>,
}

struct DemoListener {
    clock: FrameClock,
    hold: Duration,
    state: Rc<DemoState>,
}

impl DemoListener {
    fn pop_in_items(&self) {
        let mut items = self.state.items.borrow_mut();
        items.clear();
        for (index, delay) in ITEM_DELAYS_MILLIS.into_iter().enumerate() {
            let spec = AnimationSpec::tween(ITEM_POP_MILLIS, Easing::overshoot()).with_delay(delay);
            let handle = Tween::new(0.0f32, 1.0, spec).start(
                &self.clock,
                move |scale| log::trace!("item {index} scale {scale:.2}"),
                move || log::debug!("item {index} in place"),
            );
            items.push(handle);
        }
    }
}

impl RevealListener for DemoListener {
    fn on_secondary_visible(&mut self) {
        log::info!("secondary visible, returning in {:?}", self.hold);
        self.pop_in_items();
        self.state.restore_at.set(Some(Instant::now() + self.hold));
    }

    fn on_main_visible(&mut self) {
        log::info!("main visible again");
        self.state.items.borrow_mut().clear();
        self.state.returned.set(true);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::parse(std::env::args().skip(1))?;
    let config = RevealConfig::default().with_density(options.density);
    let container = Rect::new(0.0, 0.0, 360.0 * options.density, 640.0 * options.density);

    let runtime = Runtime::default();
    let host = ConsoleHost::new(container, &config, Color::from_argb(FAB_TINT));
    let mut builder = RevealLayoutBuilder::new(config);
    builder.add_child(ChildKind::Content)?;
    builder.add_child(ChildKind::FloatingActionButton)?;
    builder.add_child(ChildKind::Content)?;
    let controller = builder.build(host, runtime.frame_clock())?;

    let state = Rc::new(DemoState::default());
    controller.set_listener(DemoListener {
        clock: runtime.frame_clock(),
        hold: options.hold,
        state: state.clone(),
    });

    // Generous upper bound so a stuck animation cannot hang the demo.
    let budget = options.hold
        + Duration::from_millis(
            config.reveal_duration_millis() + config.restore_duration_millis() + 2_000,
        );

    let start = Instant::now();
    controller.request_reveal();
    loop {
        let now = Instant::now();
        runtime.drain_frame_callbacks(now.duration_since(start).as_nanos() as u64);

        if let Some(deadline) = state.restore_at.get() {
            if now >= deadline {
                state.restore_at.set(None);
                controller.request_restore_main();
            }
        }
        if state.returned.get() && !runtime.has_frame_callbacks() {
            break;
        }
        if now.duration_since(start) > budget {
            bail!("reveal cycle did not finish within {budget:?}");
        }
        std::thread::sleep(FRAME_INTERVAL);
    }

    let host = controller.host();
    log::info!(
        "done after {:?}: {} frames drawn, fab back at ({:.1}, {:.1})",
        start.elapsed(),
        host.frames_drawn(),
        host.fab_position().x,
        host.fab_position().y
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<DemoOptions> {
        DemoOptions::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults_hold_for_five_seconds() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.density, 1.0);
        assert_eq!(options.hold, Duration::from_secs(5));
    }

    #[test]
    fn reads_density_and_hold() {
        let options = parse(&["--density", "2.5", "--hold-ms", "250"]).unwrap();
        assert_eq!(options.density, 2.5);
        assert_eq!(options.hold, Duration::from_millis(250));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse(&["--density", "0"]).is_err());
        assert!(parse(&["--density"]).is_err());
        assert!(parse(&["--speed", "3"]).is_err());
    }
}
