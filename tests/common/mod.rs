use std::sync::{LazyLock, Mutex};

use flexi_logger::{Logger, LoggerHandle};
use scopeguard::{OnUnwind, ScopeGuard};

pub mod slow_heaps;

/// Record with a unique id, so the order stays total when keys repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Item {
    pub key: i32,
    pub id: u32,
}

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .set_palette("196;208;3;7;8".to_owned())
            .format(|w, now, record| {
                let style = flexi_logger::style(record.level());
                write!(
                    w,
                    "{} {pref}[{}] {}{suf}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                    pref = style.prefix(),
                    suf = style.suffix(),
                )
            })
            .start()
            .unwrap(),
    )
});

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the whole structure if the test panics while holding it.
#[allow(dead_code)]
pub fn guard<H: std::fmt::Debug>(h: H) -> ScopeGuard<H, impl FnOnce(H), OnUnwind> {
    scopeguard::guard_on_unwind(h, |h| log::error!("Crash with {h:?}"))
}
