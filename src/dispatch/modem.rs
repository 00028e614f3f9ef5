//! Modems and their configurators.
//!
//! Three modem variants, each gated on its own capability, and three
//! configurators that support different subsets:
//!
//! | Behavior       | Hayes | Zoom | Hpf |
//! |----------------|-------|------|-----|
//! | `DosBehavior`  |   x   |  x   |     |
//! | `UnixBehavior` |       |  x   |     |
//! | `HpfBehavior`  |       |      |  x  |

use core::fmt;

use tracing::info;

use super::{Accept, Behavior, Dispatch};
use crate::visited_variant;

visited_variant!(
    /// Hayes modem.
    pub Hayes => "Hayes modem"
);
visited_variant!(
    /// Zoom modem.
    pub Zoom => "Zoom modem"
);
visited_variant!(
    /// Hpf modem.
    pub Hpf => "Hpf modem"
);

/// Closed set of modem variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modem {
    Hayes(Hayes),
    Zoom(Zoom),
    Hpf(Hpf),
}

impl Modem {
    pub const ALL: [Modem; 3] = [Modem::Hayes(Hayes), Modem::Zoom(Zoom), Modem::Hpf(Hpf)];
}

impl Accept for Modem {
    fn accept(&self, behavior: &dyn Behavior) -> Dispatch {
        match self {
            Modem::Hayes(hayes) => hayes.accept(behavior),
            Modem::Zoom(zoom) => zoom.accept(behavior),
            Modem::Hpf(hpf) => hpf.accept(behavior),
        }
    }
}

impl fmt::Display for Modem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modem::Hayes(hayes) => fmt::Display::fmt(hayes, f),
            Modem::Zoom(zoom) => fmt::Display::fmt(zoom, f),
            Modem::Hpf(hpf) => fmt::Display::fmt(hpf, f),
        }
    }
}

/// Configures Hayes and Zoom modems for DOS.
#[derive(Debug, Clone, Copy, Default, Behavior)]
#[capabilities(HayesCapability, ZoomCapability)]
pub struct DosBehavior;

impl HayesCapability for DosBehavior {
    fn visit(&self, hayes: &Hayes) {
        info!("{hayes} used with Dos configurator.");
    }
}

impl ZoomCapability for DosBehavior {
    fn visit(&self, zoom: &Zoom) {
        info!("{zoom} used with Dos configurator.");
    }
}

/// Configures Zoom modems for Unix.
#[derive(Debug, Clone, Copy, Default, Behavior)]
#[capabilities(ZoomCapability)]
pub struct UnixBehavior;

impl ZoomCapability for UnixBehavior {
    fn visit(&self, zoom: &Zoom) {
        info!("{zoom} used with Unix configurator.");
    }
}

/// Configures Hpf modems.
#[derive(Debug, Clone, Copy, Default, Behavior)]
#[capabilities(HpfCapability)]
pub struct HpfBehavior;

impl HpfCapability for HpfBehavior {
    fn visit(&self, hpf: &Hpf) {
        info!("{hpf} used with Hpf configurator.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modem_display() {
        assert_eq!(Modem::Hayes(Hayes).to_string(), "Hayes modem");
        assert_eq!(Modem::Zoom(Zoom).to_string(), "Zoom modem");
        assert_eq!(Modem::Hpf(Hpf).to_string(), "Hpf modem");
    }

    #[test]
    fn test_support_matrix() {
        let expected = [
            // (modem, dos, unix, hpf)
            (Modem::Hayes(Hayes), true, false, false),
            (Modem::Zoom(Zoom), true, true, false),
            (Modem::Hpf(Hpf), false, false, true),
        ];
        for (modem, dos, unix, hpf) in expected {
            assert_eq!(modem.accept(&DosBehavior).is_executed(), dos, "{modem} / dos");
            assert_eq!(modem.accept(&UnixBehavior).is_executed(), unix, "{modem} / unix");
            assert_eq!(modem.accept(&HpfBehavior).is_executed(), hpf, "{modem} / hpf");
        }
    }
}
