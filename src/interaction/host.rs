/// Primary pointing device reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// Mouse or trackpad.
    #[default]
    Fine,
    /// Touch screen.
    Coarse,
    /// No pointer at all.
    None,
}

/// Environment capabilities that decide which animations run.
///
/// Missing capabilities degrade to static end states; they are never errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    /// Primary pointer.
    pub pointer: PointerKind,
    /// User asked for reduced motion.
    pub reduced_motion: bool,
}

impl HostCapabilities {
    /// Desktop browser with a mouse.
    pub const DESKTOP: Self = Self {
        pointer: PointerKind::Fine,
        reduced_motion: false,
    };

    /// Touch device.
    pub const TOUCH: Self = Self {
        pointer: PointerKind::Coarse,
        reduced_motion: false,
    };

    /// Same host with reduced motion requested.
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Continuous and entrance animations may run.
    pub fn allows_motion(self) -> bool {
        !self.reduced_motion
    }

    /// Hover effects, pointer tilt and the custom cursor may run.
    pub fn allows_hover(self) -> bool {
        self.pointer == PointerKind::Fine
    }
}
