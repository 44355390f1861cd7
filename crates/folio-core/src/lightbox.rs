//! Full-view image overlay.
//!
//! Opening and closing are two-step so the CSS fade has a state change to
//! animate: unhide then fade in, fade out then hide.

use std::time::Duration;

use crate::pause::Pause;
use crate::surface::Surface;

/// Fade timings for the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    pub fade_in: Duration,
    pub fade_out: Duration,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self {
            fade_in: Duration::from_millis(20),
            fade_out: Duration::from_millis(300),
        }
    }
}

impl Lightbox {
    pub fn new(fade_in: Duration, fade_out: Duration) -> Self {
        Self { fade_in, fade_out }
    }

    /// Show `src` in the overlay.
    pub async fn open<S, P>(&self, surface: &S, pause: &P, src: &str)
    where
        S: Surface + ?Sized,
        P: Pause + ?Sized,
    {
        tracing::debug!(src, "Opening lightbox");
        surface.set_lightbox_source(Some(src));
        surface.set_lightbox_hidden(false);
        pause.pause(self.fade_in).await;
        surface.set_lightbox_visible(true);
    }

    /// Fade the overlay out, then hide it and drop the image reference.
    pub async fn close<S, P>(&self, surface: &S, pause: &P)
    where
        S: Surface + ?Sized,
        P: Pause + ?Sized,
    {
        tracing::debug!("Closing lightbox");
        surface.set_lightbox_visible(false);
        pause.pause(self.fade_out).await;
        surface.set_lightbox_hidden(true);
        surface.set_lightbox_source(None);
    }
}
