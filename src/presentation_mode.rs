//! Presentation mode: `Editing <-> Presenting`, tied to fullscreen.
//!
//! Presenting without fullscreen is not a supported state. If the platform
//! refuses fullscreen the controller stays in [`PresentationMode::Editing`]
//! and hands the error back.

use crate::error::{EditorError, Result};
use slint::ComponentHandle;

/// Platform fullscreen support.
pub trait FullscreenCapability {
    fn try_enter_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self) -> Result<()>;
    fn is_fullscreen(&self) -> bool;

    /// The platform changed fullscreen on its own; `is_fullscreen` should
    /// report `is_fullscreen` from now on.
    fn fullscreen_changed(&mut self, _is_fullscreen: bool) {}
}

/// Fullscreen for a Slint window, held weakly.
pub struct WindowFullscreen<C: ComponentHandle> {
    window: slint::Weak<C>,
    active: bool,
}

impl<C: ComponentHandle> WindowFullscreen<C> {
    pub fn new(window: slint::Weak<C>) -> Self {
        Self {
            window,
            active: false,
        }
    }
}

impl<C: ComponentHandle> FullscreenCapability for WindowFullscreen<C> {
    fn try_enter_fullscreen(&mut self) -> Result<()> {
        let component = self
            .window
            .upgrade()
            .ok_or_else(|| EditorError::FullscreenDenied("window has been closed".into()))?;
        component.window().set_fullscreen(true);
        self.active = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.active = false;
        let component = self
            .window
            .upgrade()
            .ok_or_else(|| EditorError::FullscreenExit("window has been closed".into()))?;
        component.window().set_fullscreen(false);
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        self.active = is_fullscreen;
    }
}

/// For hosts that cannot go fullscreen at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFullscreen;

impl FullscreenCapability for NoFullscreen {
    fn try_enter_fullscreen(&mut self) -> Result<()> {
        Err(EditorError::FullscreenUnsupported)
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresentationMode {
    #[default]
    Editing,
    Presenting,
}

pub struct PresentationModeController {
    mode: PresentationMode,
    fullscreen: Box<dyn FullscreenCapability>,
}

impl PresentationModeController {
    pub fn new(fullscreen: Box<dyn FullscreenCapability>) -> Self {
        Self {
            mode: PresentationMode::Editing,
            fullscreen,
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn is_presenting(&self) -> bool {
        self.mode == PresentationMode::Presenting
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Swap the platform capability, e.g. once the window exists.
    pub fn set_fullscreen_capability(&mut self, fullscreen: Box<dyn FullscreenCapability>) {
        self.fullscreen = fullscreen;
    }

    /// Acquire fullscreen and switch to presenting.
    ///
    /// `Ok(false)` if already presenting. On `Err` the mode is still
    /// `Editing`.
    pub fn enter(&mut self) -> Result<bool> {
        if self.is_presenting() {
            return Ok(false);
        }
        if let Err(err) = self.fullscreen.try_enter_fullscreen() {
            tracing::warn!("Could not enter fullscreen: {}", err);
            self.mode = PresentationMode::Editing;
            return Err(err);
        }
        self.mode = PresentationMode::Presenting;
        tracing::info!("Entered presentation mode");
        Ok(true)
    }

    /// Switch back to editing, releasing fullscreen if it is held.
    ///
    /// The mode is `Editing` afterwards even when the release fails; the
    /// failure is still returned.
    pub fn exit(&mut self) -> Result<bool> {
        let was_presenting = self.is_presenting();
        self.mode = PresentationMode::Editing;
        if was_presenting {
            tracing::info!("Exited presentation mode");
        }

        if self.fullscreen.is_fullscreen() {
            if let Err(err) = self.fullscreen.exit_fullscreen() {
                tracing::warn!("Could not exit fullscreen: {}", err);
                return Err(err);
            }
        }
        Ok(was_presenting)
    }

    /// The platform reported a fullscreen change it initiated (Escape key,
    /// window manager). Leaving fullscreen ends the presentation.
    ///
    /// Returns `true` if the mode changed.
    pub fn handle_fullscreen_changed(&mut self, is_fullscreen: bool) -> bool {
        self.fullscreen.fullscreen_changed(is_fullscreen);
        if is_fullscreen || !self.is_presenting() {
            return false;
        }
        tracing::info!("Fullscreen left externally, back to editing");
        self.mode = PresentationMode::Editing;
        true
    }
}
