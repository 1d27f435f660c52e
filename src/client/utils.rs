use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use std::io;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::console;

/// Routes tracing output to the browser console.
pub fn init_tracing() {
    let res = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info,welcome_cover=debug"))
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(e) = res {
        log_to_console(("tracing already initialized", e.to_string()));
    }
}

// Call this function to log a message outside of tracing
pub fn log_to_console(message: impl std::fmt::Debug) {
    let message = format!("{:?}", message);
    console::log_1(&JsValue::from_str(&message));
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter(Vec::new())
    }
}

/// Buffers one formatted event, logs it when dropped.
struct ConsoleWriter(Vec<u8>);

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.0);
        let line = line.trim_end();
        if !line.is_empty() {
            console::log_1(&JsValue::from_str(line));
        }
    }
}

pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Keeps the page from scrolling behind the welcome cover.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        tracing::warn!("no document body to lock scrolling on");
        return;
    };
    let style = body.style();

    let res = if locked {
        style
            .set_property("overflow", "hidden")
            .and_then(|_| style.set_property("height", "100vh"))
    } else {
        style
            .remove_property("overflow")
            .and_then(|_| style.remove_property("height"))
            .map(|_| ())
    };

    match res {
        Ok(()) => tracing::debug!("page scroll locked: {}", locked),
        Err(e) => tracing::error!("failed to update page scroll: {:?}", e),
    }
}

/// A click listener on the page body, removed again when dropped.
pub struct ClickSubscription {
    target: web_sys::HtmlElement,
    callback: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl ClickSubscription {
    /// Calls `on_click` with the viewport coordinates of every click on the page.
    pub fn on_body(mut on_click: impl FnMut(f64, f64) + 'static) -> Option<Self> {
        let target = body()?;

        let callback = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
            on_click(e.client_x() as f64, e.client_y() as f64);
        });

        if let Err(e) =
            target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            tracing::error!("failed to listen for clicks: {:?}", e);
            return None;
        }

        Some(Self { target, callback })
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        let res = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());

        match res {
            Ok(()) => tracing::debug!("click listener removed"),
            Err(e) => tracing::error!("failed to remove click listener: {:?}", e),
        }
    }
}

/// Autoplay can be refused, e.g. in power saving mode. The cover works the same
/// without a moving background so this only logs.
pub async fn ensure_playing(element: web_sys::Element) {
    let Ok(media) = element.dyn_into::<web_sys::HtmlMediaElement>() else {
        tracing::warn!("background element is not a media element");
        return;
    };

    let promise = match media.play() {
        Ok(promise) => promise,
        Err(e) => {
            tracing::warn!("background video failed to start: {:?}", e);
            return;
        }
    };

    match select(JsFuture::from(promise), TimeoutFuture::new(5000)).await {
        Either::Left((Ok(_), _)) => tracing::debug!("background video playing"),
        Either::Left((Err(e), _)) => tracing::warn!("background video refused to play: {:?}", e),
        Either::Right((_, _)) => tracing::warn!("background video didn't start in time"),
    }
}
