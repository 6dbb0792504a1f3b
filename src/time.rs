//! Deferred callback scheduling
//!
//! Every timed behavior on the page (the simulated submission delay,
//! notification auto-dismiss and exit transition, counter ticks, the
//! time-on-page ticker) awaits [`sleep_ms`] from a spawned task. On the web
//! build this is a one-shot browser timer; on the native build (used only
//! to run the pure logic tests) it resolves immediately, since tests drive
//! state transitions directly instead of waiting on real timers.

pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "web")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(feature = "web"))]
    let _ = ms;
}
