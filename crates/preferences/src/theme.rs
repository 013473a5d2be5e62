//! Dark-mode derivation from the theme setting and the host color scheme.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::groups::Theme;

/// Color scheme reported by the host environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Whether the UI should render dark for `theme` under the host `scheme`.
pub fn is_dark(theme: Theme, scheme: ColorScheme) -> bool {
    match theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => scheme == ColorScheme::Dark,
    }
}

/// Keeps the dark-mode flag in sync with the host color scheme while the
/// theme is [`Theme::System`].
///
/// The subscription is a spawned task; it is aborted by [`stop`](Self::stop)
/// and on drop.
pub(crate) struct SchemeFollower {
    scheme: watch::Receiver<ColorScheme>,
    dark_mode: Arc<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl SchemeFollower {
    pub(crate) fn new(scheme: watch::Receiver<ColorScheme>, dark_mode: Arc<watch::Sender<bool>>) -> Self {
        Self {
            scheme,
            dark_mode,
            task: None,
        }
    }

    /// Apply `theme` to the flag and start or stop following the host.
    ///
    /// Must be called from within a Tokio runtime when `theme` is `System`.
    pub(crate) fn apply(&mut self, theme: Theme) {
        match theme {
            Theme::Light | Theme::Dark => {
                self.stop();
                self.publish(theme, *self.scheme.borrow());
            }
            Theme::System => {
                // Host changes after this read wake the follower.
                let scheme = *self.scheme.borrow_and_update();
                self.publish(theme, scheme);
                self.start();
            }
        }
    }

    fn publish(&self, theme: Theme, scheme: ColorScheme) {
        let dark = is_dark(theme, scheme);
        debug!("Applying theme {:?} (dark mode: {})", theme, dark);
        self.dark_mode.send_replace(dark);
    }

    pub(crate) fn is_following(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn start(&mut self) {
        if self.is_following() {
            return;
        }

        let mut scheme = self.scheme.clone();
        let dark_mode = Arc::clone(&self.dark_mode);
        self.task = Some(tokio::spawn(async move {
            while scheme.changed().await.is_ok() {
                let current = *scheme.borrow_and_update();
                debug!("Host color scheme changed to {:?}", current);
                dark_mode.send_replace(current == ColorScheme::Dark);
            }
        }));
    }

    pub(crate) fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Stopped following host color scheme");
        }
    }
}

impl Drop for SchemeFollower {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explicit_theme_stops_follower_before_publishing() {
        let (host, scheme) = watch::channel(ColorScheme::Light);
        let (dark_mode, _) = watch::channel(false);
        let dark_mode = Arc::new(dark_mode);
        let mut follower = SchemeFollower::new(scheme, Arc::clone(&dark_mode));

        follower.apply(Theme::System);
        assert!(follower.is_following());

        follower.apply(Theme::Light);
        assert!(follower.task.is_none());
        host.send_replace(ColorScheme::Dark);
        tokio::task::yield_now().await;
        assert!(!*dark_mode.borrow());
    }

    #[tokio::test]
    async fn test_system_theme_reads_current_host_scheme() {
        let (host, scheme) = watch::channel(ColorScheme::Light);
        let (dark_mode, _) = watch::channel(false);
        let dark_mode = Arc::new(dark_mode);
        let mut follower = SchemeFollower::new(scheme, Arc::clone(&dark_mode));

        host.send_replace(ColorScheme::Dark);
        follower.apply(Theme::System);
        assert!(*dark_mode.borrow());
    }

    #[test]
    fn test_is_dark() {
        assert!(!is_dark(Theme::Light, ColorScheme::Dark));
        assert!(is_dark(Theme::Dark, ColorScheme::Light));
        assert!(is_dark(Theme::System, ColorScheme::Dark));
        assert!(!is_dark(Theme::System, ColorScheme::Light));
    }
}
