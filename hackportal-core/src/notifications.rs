//! Push Notification Opt-In
//!
//! The landing page invites visitors to enable push notifications when the
//! browser can deliver them and permission has not been granted yet. The
//! invitation is shown once per page load, held for a few seconds and then
//! faded out.

/// How long the invitation stays fully visible
pub const PROMPT_HOLD_MS: u32 = 3000;

/// Interval between fade steps
pub const FADE_INTERVAL_MS: u32 = 100;

const FADE_STEPS: u8 = 10;

/// Platform features required for push delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// `Notification` API present
    pub notification: bool,
    /// Background delivery (`navigator.serviceWorker`) present
    pub service_worker: bool,
    /// Push messaging (`PushManager`) present
    pub push_manager: bool,
}

impl PlatformCapabilities {
    pub fn is_supported(&self) -> bool {
        self.notification && self.service_worker && self.push_manager
    }
}

/// Notification permission as reported by the host environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationPermission {
    #[default]
    Default,
    Granted,
    Denied,
}

/// Whether the opt-in invitation should be shown
pub fn should_offer_prompt(
    capabilities: PlatformCapabilities,
    permission: NotificationPermission,
) -> bool {
    capabilities.is_supported() && permission != NotificationPermission::Granted
}

/// Opacity ramp for the invitation banner, 1.0 down to 0.0 in tenths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptFade {
    steps_left: u8,
}

impl Default for PromptFade {
    fn default() -> Self {
        Self {
            steps_left: FADE_STEPS,
        }
    }
}

impl PromptFade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(&self) -> f32 {
        f32::from(self.steps_left) / f32::from(FADE_STEPS)
    }

    /// Lower the opacity by one step. Returns true once fully transparent.
    pub fn tick(&mut self) -> bool {
        self.steps_left = self.steps_left.saturating_sub(1);
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.steps_left == 0
    }
}

/// One-shot opt-in invitation.
///
/// The permission request is issued at most once, after the page reports it
/// is ready, never while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptInPrompt {
    evaluated: bool,
    visible: bool,
    fade: PromptFade,
}

impl OptInPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the platform once the page is mounted.
    ///
    /// Returns true when the caller should request notification permission.
    /// Later calls are no-ops and return false.
    pub fn on_ready(
        &mut self,
        capabilities: PlatformCapabilities,
        permission: NotificationPermission,
    ) -> bool {
        if self.evaluated {
            return false;
        }
        self.evaluated = true;
        self.visible = should_offer_prompt(capabilities, permission);
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f32 {
        if self.visible {
            self.fade.opacity()
        } else {
            0.0
        }
    }

    /// Advance the fade-out. Hides the banner when the fade completes and
    /// returns true once nothing is left to animate.
    pub fn fade_step(&mut self) -> bool {
        if !self.visible {
            return true;
        }
        if self.fade.tick() {
            self.visible = false;
        }
        !self.visible
    }

    /// Hide immediately (visitor closed the banner or acted on it)
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: PlatformCapabilities = PlatformCapabilities {
        notification: true,
        service_worker: true,
        push_manager: true,
    };

    #[test]
    fn test_prompt_gating() {
        use NotificationPermission as P;

        assert!(should_offer_prompt(ALL, P::Default));
        assert!(should_offer_prompt(ALL, P::Denied));
        assert!(!should_offer_prompt(ALL, P::Granted));

        let no_push = PlatformCapabilities {
            push_manager: false,
            ..ALL
        };
        assert!(!should_offer_prompt(no_push, P::Default));

        let no_worker = PlatformCapabilities {
            service_worker: false,
            ..ALL
        };
        assert!(!should_offer_prompt(no_worker, P::Default));
        assert!(!should_offer_prompt(PlatformCapabilities::default(), P::Default));
    }

    #[test]
    fn test_fade_takes_ten_steps() {
        let mut fade = PromptFade::new();
        assert_eq!(fade.opacity(), 1.0);

        let mut ticks = 0;
        while !fade.tick() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 10);
        assert_eq!(fade.opacity(), 0.0);

        // Further ticks stay at zero
        assert!(fade.tick());
    }

    #[test]
    fn test_opt_in_requests_once() {
        let mut prompt = OptInPrompt::new();
        assert!(prompt.on_ready(ALL, NotificationPermission::Default));
        assert!(prompt.is_visible());

        assert!(!prompt.on_ready(ALL, NotificationPermission::Default));
        assert!(prompt.is_visible());
    }

    #[test]
    fn test_opt_in_hidden_when_granted() {
        let mut prompt = OptInPrompt::new();
        assert!(!prompt.on_ready(ALL, NotificationPermission::Granted));
        assert!(!prompt.is_visible());
        assert!(prompt.fade_step());
    }

    #[test]
    fn test_opt_in_fades_out() {
        let mut prompt = OptInPrompt::new();
        prompt.on_ready(ALL, NotificationPermission::Default);

        for _ in 0..9 {
            assert!(!prompt.fade_step());
        }
        assert!(prompt.opacity() > 0.0);
        assert!(prompt.fade_step());
        assert!(!prompt.is_visible());
        assert_eq!(prompt.opacity(), 0.0);
    }
}
